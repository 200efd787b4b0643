//! Operation: list the packages in a universe.

use std::path::PathBuf;

use sdkpm_core::universe::PackageUniverse;

/// Options for `sdkpm list`.
#[derive(Debug, Default)]
pub struct ListOptions {
    pub universe: Option<PathBuf>,
    /// Only show installed packages with a newer remote version.
    pub updates: bool,
}

pub fn list(opts: &ListOptions) -> miette::Result<()> {
    let config = crate::load_config();
    let universe_path = crate::universe_path(opts.universe.as_deref(), &config)?;
    let universe = PackageUniverse::from_path(&universe_path)?;

    let out = render_list(&universe, opts.updates);
    if out.is_empty() {
        if opts.updates {
            println!("All installed packages are up to date.");
        } else {
            println!("Universe is empty.");
        }
    } else {
        print!("{out}");
    }
    Ok(())
}

/// One line per package: id, installed version, best remote version, update marker.
pub fn render_list(universe: &PackageUniverse, updates_only: bool) -> String {
    let mut out = String::new();
    for (id, entry) in universe.iter() {
        if updates_only && !entry.has_update() {
            continue;
        }
        let installed = entry
            .local
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.version.to_string());
        let available = entry
            .remote
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.version.to_string());
        let marker = if entry.has_update() { " update" } else { "" };
        let line = format!("{id:<32} {installed:<12} {available:<12}{marker}");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIVERSE: &str = r#"
[[local]]
id = "tools"
version = "24"

[[remote]]
id = "tools"
version = "25.2.3"

[[local]]
id = "emulator"
version = "2"

[[remote]]
id = "platform-tools"
version = "23.1"
"#;

    #[test]
    fn lists_everything_sorted() {
        let universe = PackageUniverse::parse_toml(UNIVERSE).unwrap();
        let out = render_list(&universe, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("emulator"));
        assert!(lines[0].contains("2.0.0"));
        assert!(lines[0].ends_with('-'));
        assert!(lines[1].starts_with("platform-tools"));
        assert!(lines[2].starts_with("tools"));
        assert!(lines[2].contains("24.0.0"));
        assert!(lines[2].ends_with("update"));
    }

    #[test]
    fn updates_only() {
        let universe = PackageUniverse::parse_toml(UNIVERSE).unwrap();
        let out = render_list(&universe, true);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("tools"));
    }
}
