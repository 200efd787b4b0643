use serde::{Deserialize, Serialize};
use std::path::Path;

use sdkpm_util::errors::SdkpmError;

use crate::package::Package;

/// An ordered install plan as written to disk: dependencies come before dependents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub package: Vec<PlannedPackage>,
}

/// A single package to install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlannedPackage {
    pub id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Ids of the packages this one declares a dependency on.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl From<&Package> for PlannedPackage {
    fn from(p: &Package) -> Self {
        Self {
            id: p.id.to_string(),
            version: p.version.to_string(),
            display_name: p.display_name.clone(),
            dependencies: p.dependencies.iter().map(|d| d.target.to_string()).collect(),
        }
    }
}

impl PlanFile {
    pub fn from_packages<'a>(packages: impl IntoIterator<Item = &'a Package>) -> Self {
        Self {
            package: packages.into_iter().map(PlannedPackage::from).collect(),
        }
    }

    /// Load a plan file; `.json` paths are read as JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SdkpmError::Generic {
            message: format!("Failed to read plan file: {e}"),
        })?;
        let parsed = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|e| {
            SdkpmError::Generic {
                message: format!("Failed to parse plan file: {e}"),
            }
            .into()
        })
    }

    /// Write the plan, choosing the format from the file extension.
    pub fn write(&self, path: &Path) -> miette::Result<()> {
        let content = if is_json(path) {
            self.to_json_pretty().map_err(|e| e.to_string())
        } else {
            self.to_string_pretty().map_err(|e| e.to_string())
        }
        .map_err(|e| SdkpmError::Generic {
            message: format!("Failed to serialize plan: {e}"),
        })?;
        std::fs::write(path, content).map_err(SdkpmError::Io)?;
        Ok(())
    }

    /// Serialize the plan to a pretty-printed TOML string.
    pub fn to_string_pretty(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.package.iter().map(|p| p.id.as_str()).collect()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
