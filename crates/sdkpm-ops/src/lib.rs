pub mod ops_list;
pub mod ops_plan;

use std::path::{Path, PathBuf};

use sdkpm_core::config::GlobalConfig;
use sdkpm_core::diagnostics::{Diagnostics, TracingDiagnostics};
use sdkpm_util::errors::SdkpmError;
use sdkpm_util::progress;

/// Load the global config, falling back to defaults when it can't be read.
pub fn load_config() -> GlobalConfig {
    GlobalConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load global config, using defaults: {e}");
        GlobalConfig::default()
    })
}

/// The universe file to use: the explicit flag, else `[universe] path` from config.
pub fn universe_path(flag: Option<&Path>, config: &GlobalConfig) -> miette::Result<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| config.universe.path.clone())
        .ok_or_else(|| {
            SdkpmError::Generic {
                message: "No universe file given: pass --universe or set [universe] path \
                          in ~/.sdkpm/config.toml"
                    .to_string(),
            }
            .into()
        })
}

/// Diagnostics sink for interactive use: warnings as status lines, notes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn log_warning(&mut self, text: &str) {
        progress::status_warn("warning", text);
    }

    fn log_info(&mut self, text: &str) {
        TracingDiagnostics.log_info(text);
    }
}
