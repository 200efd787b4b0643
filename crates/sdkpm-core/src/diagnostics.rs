//! Sink for human-readable messages emitted while resolving.

/// Receives warnings and informational notes from the resolver.
pub trait Diagnostics {
    fn log_warning(&mut self, text: &str);
    fn log_info(&mut self, text: &str);
}

/// Forwards every message to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn log_warning(&mut self, text: &str) {
        tracing::warn!("{text}");
    }

    fn log_info(&mut self, text: &str) {
        tracing::info!("{text}");
    }
}

/// Keeps every message so it can be inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct RecordingDiagnostics {
    warnings: Vec<String>,
    infos: Vec<String>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn log_warning(&mut self, text: &str) {
        self.warnings.push(text.to_string());
    }

    fn log_info(&mut self, text: &str) {
        self.infos.push(text.to_string());
    }
}
