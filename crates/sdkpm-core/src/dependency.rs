use std::fmt;

use crate::package::PackageId;
use crate::version::Version;

/// A directed requirement on another package, optionally with a minimum version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub target: PackageId,
    /// `None` means any installed or available version will do.
    pub min_version: Option<Version>,
}

impl DependencyEdge {
    /// A dependency on any version of `target`.
    pub fn any(target: impl Into<PackageId>) -> Self {
        Self {
            target: target.into(),
            min_version: None,
        }
    }

    /// A dependency on `target` at `min_version` or later.
    pub fn at_least(target: impl Into<PackageId>, min_version: Version) -> Self {
        Self {
            target: target.into(),
            min_version: Some(min_version),
        }
    }

    /// Whether a package at `version` meets this edge's minimum.
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        self.min_version.as_ref().map_or(true, |min| version >= min)
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.min_version {
            Some(min) => write!(f, "{} (>= {min})", self.target),
            None => write!(f, "{}", self.target),
        }
    }
}
