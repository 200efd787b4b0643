//! The package universe: for every known package id, the local install (if
//! any) and the best remote candidate (if any).
//!
//! A universe is built once by the caller, either programmatically or from a
//! TOML descriptor file, and is only ever read during resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sdkpm_util::errors::SdkpmError;

use crate::dependency::DependencyEdge;
use crate::package::{Package, PackageId};
use crate::version::Version;

/// The local and remote views of one package id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniverseEntry {
    pub local: Option<Package>,
    pub remote: Option<Package>,
}

impl UniverseEntry {
    /// The installed package if there is one, otherwise the remote candidate.
    pub fn representative(&self) -> Option<&Package> {
        self.local.as_ref().or(self.remote.as_ref())
    }

    /// True when a remote candidate is newer than the local install.
    pub fn has_update(&self) -> bool {
        match (&self.local, &self.remote) {
            (Some(local), Some(remote)) => remote.version > local.version,
            _ => false,
        }
    }
}

/// Mapping from package id to its local install and best remote candidate.
#[derive(Debug, Clone, Default)]
pub struct PackageUniverse {
    entries: BTreeMap<PackageId, UniverseEntry>,
}

impl PackageUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a locally installed package, replacing any previous install of the same id.
    pub fn add_local(&mut self, package: Package) {
        let id = package.id.clone();
        self.entries.entry(id).or_default().local = Some(package);
    }

    /// Offer a remote candidate. Only the highest version per id is kept.
    pub fn add_remote(&mut self, package: Package) {
        let entry = self.entries.entry(package.id.clone()).or_default();
        if let Some(existing) = &entry.remote {
            if existing.version >= package.version {
                tracing::debug!(
                    "Ignoring remote {} {}: {} already available",
                    package.id,
                    package.version,
                    existing.version
                );
                return;
            }
        }
        entry.remote = Some(package);
    }

    pub fn with_local(mut self, package: Package) -> Self {
        self.add_local(package);
        self
    }

    pub fn with_remote(mut self, package: Package) -> Self {
        self.add_remote(package);
        self
    }

    pub fn get(&self, id: &str) -> Option<&UniverseEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PackageId, &UniverseEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a universe descriptor from a TOML file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SdkpmError::Universe {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a universe descriptor from a TOML string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        let file: UniverseFile = toml::from_str(content).map_err(|e| SdkpmError::Universe {
            message: format!("Failed to parse universe descriptor: {e}"),
        })?;
        file.into_universe()
    }
}

/// On-disk form of a universe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniverseFile {
    #[serde(default)]
    pub local: Vec<PackageDescriptor>,
    #[serde(default)]
    pub remote: Vec<PackageDescriptor>,
}

/// One package entry in a universe descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageDescriptor {
    pub id: String,
    pub version: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

/// A dependency in a descriptor: either a bare id or an id with a minimum version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencySpec {
    Short(String),
    Detailed(DetailedDependency),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DetailedDependency {
    pub id: String,
    #[serde(default)]
    pub min_version: Option<String>,
}

impl UniverseFile {
    pub fn into_universe(self) -> miette::Result<PackageUniverse> {
        let mut universe = PackageUniverse::new();
        for desc in self.local {
            universe.add_local(desc.to_package()?);
        }
        for desc in self.remote {
            universe.add_remote(desc.to_package()?);
        }
        Ok(universe)
    }
}

impl PackageDescriptor {
    pub fn to_package(&self) -> miette::Result<Package> {
        let version = parse_version(&self.id, &self.version)?;
        let dependencies = self
            .dependencies
            .iter()
            .map(|dep| dep.to_edge(&self.id))
            .collect::<miette::Result<Vec<_>>>()?;
        Ok(Package {
            id: PackageId::new(self.id.as_str()),
            version,
            display_name: self.display_name.clone(),
            dependencies,
        })
    }
}

impl DependencySpec {
    fn to_edge(&self, owner: &str) -> miette::Result<DependencyEdge> {
        match self {
            DependencySpec::Short(id) => Ok(DependencyEdge::any(id.as_str())),
            DependencySpec::Detailed(d) => {
                let min_version = d
                    .min_version
                    .as_deref()
                    .map(|v| parse_version(owner, v))
                    .transpose()?;
                Ok(DependencyEdge {
                    target: PackageId::new(d.id.as_str()),
                    min_version,
                })
            }
        }
    }
}

fn parse_version(owner: &str, raw: &str) -> miette::Result<Version> {
    Version::parse(raw).map_err(|e| {
        SdkpmError::Universe {
            message: format!("Package '{owner}': {e}"),
        }
        .into()
    })
}
