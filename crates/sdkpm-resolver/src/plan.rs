use sdkpm_core::package::{Package, PackageId};
use sdkpm_core::plan::PlanFile;

use crate::conflict::ConstraintReport;
use crate::graph::PlanGraph;

/// The result of a successful resolution.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    /// Packages to install, dependencies first.
    pub packages: Vec<Package>,
    /// Ids that were explicitly requested, in request order.
    pub requested: Vec<PackageId>,
    pub constraints: ConstraintReport,
}

impl InstallPlan {
    pub fn ids(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Position of `id` in the install order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.packages.iter().position(|p| p.id.as_str() == id)
    }

    pub fn to_plan_file(&self) -> PlanFile {
        PlanFile::from_packages(&self.packages)
    }

    pub fn graph(&self) -> PlanGraph {
        PlanGraph::from_plan(self)
    }
}
