//! Status lines printed to stderr while planning, e.g. `     Planned 4 package(s) to install`.

use std::io::Write;

use console::Style;

fn line(style: &Style, label: &str, message: &str) -> String {
    format!("{:>12} {message}", style.apply_to(label))
}

fn emit(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stderr(), "{}", line(&style, label, message));
}

/// An action step: `Resolving`, `Planned`, `Wrote`.
pub fn status(label: &str, message: &str) {
    emit(Style::new().green().bold(), label, message);
}

/// Informational output that is not an action, such as `note` lines for
/// constraints that were not enforced.
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan().bold(), label, message);
}

/// A yellow `warning` line, used for resolution failures.
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow().bold(), label, message);
}
