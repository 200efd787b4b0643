//! Breadth-first computation of the set of packages a request needs.

use std::collections::{BTreeSet, HashMap, VecDeque};

use sdkpm_core::dependency::DependencyEdge;
use sdkpm_core::diagnostics::Diagnostics;
use sdkpm_core::package::{Package, PackageId};
use sdkpm_core::universe::PackageUniverse;
use sdkpm_core::version::Version;

use crate::conflict::{ConstraintReport, UnenforcedConstraint};
use crate::order;
use crate::resolve::{resolve, Resolution, Unsatisfied};

/// Dependency edges between required packages, bucketed by target id.
///
/// A bucket is a multiset: the same edge declared twice is counted twice.
#[derive(Debug, Default, Clone)]
pub struct EdgeMultimap {
    buckets: HashMap<PackageId, Vec<DependencyEdge>>,
}

impl EdgeMultimap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, edge: DependencyEdge) {
        self.buckets.entry(edge.target.clone()).or_default().push(edge);
    }

    /// Remove one instance of `edge`. Returns `true` only if an instance was
    /// removed and the target's bucket is now empty.
    pub fn release(&mut self, edge: &DependencyEdge) -> bool {
        let Some(bucket) = self.buckets.get_mut(&edge.target) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|e| e == edge) else {
            return false;
        };
        bucket.swap_remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&edge.target);
            true
        } else {
            false
        }
    }

    /// Number of unreleased edges pointing at `target`.
    pub fn count(&self, target: &str) -> usize {
        self.buckets.get(target).map_or(0, Vec::len)
    }
}

/// Everything the closure builder learned, ready to be ordered.
#[derive(Debug, Default, Clone)]
pub struct Closure {
    /// Required packages in discovery order.
    required: Vec<Package>,
    index: HashMap<PackageId, usize>,
    /// Required packages nobody was found to depend on.
    roots: BTreeSet<PackageId>,
    edges: EdgeMultimap,
    constraints: ConstraintReport,
}

impl Closure {
    /// Add `package` unless a package with the same id is already required.
    /// Returns its position when it was new.
    fn insert_required(&mut self, package: &Package) -> Option<usize> {
        if self.index.contains_key(&package.id) {
            return None;
        }
        let pos = self.required.len();
        self.index.insert(package.id.clone(), pos);
        self.required.push(package.clone());
        Some(pos)
    }

    pub fn required(&self) -> &[Package] {
        &self.required
    }

    pub fn is_required(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn roots(&self) -> &BTreeSet<PackageId> {
        &self.roots
    }

    pub fn edges(&self) -> &EdgeMultimap {
        &self.edges
    }

    pub fn constraints(&self) -> &ConstraintReport {
        &self.constraints
    }

    /// Sequence the required packages, dependencies first.
    pub fn into_install_order(
        self,
        diagnostics: &mut dyn Diagnostics,
    ) -> (Vec<Package>, ConstraintReport) {
        let ordered = order::order(&self.required, self.roots, self.edges, diagnostics);
        (ordered, self.constraints)
    }
}

/// Walk the dependency graph breadth-first from `requests`.
///
/// The first edge seen for a target decides how it is satisfied; later edges
/// to the same target are only recorded. Aborts on the first unsatisfiable
/// edge.
pub fn compute_required(
    requests: &[Package],
    universe: &PackageUniverse,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Closure, Unsatisfied> {
    let mut closure = Closure::default();
    let mut queue: VecDeque<usize> = VecDeque::new();
    // Target id -> version accepted when it was first encountered.
    let mut seen: HashMap<PackageId, Version> = HashMap::new();

    for request in requests {
        if let Some(pos) = closure.insert_required(request) {
            closure.roots.insert(request.id.clone());
            queue.push_back(pos);
        }
    }

    while let Some(pos) = queue.pop_front() {
        let current = closure.required[pos].clone();
        tracing::debug!("Visiting {current}");

        for edge in &current.dependencies {
            if let Some(accepted) = seen.get(&edge.target) {
                if let Some(required) = edge.min_version.filter(|min| accepted < min) {
                    tracing::debug!(
                        "{} requires {} >= {required}, keeping {accepted}",
                        current.id,
                        edge.target
                    );
                    closure.constraints.add(UnenforcedConstraint {
                        target: edge.target.clone(),
                        requirer: current.id.clone(),
                        required,
                        accepted: *accepted,
                    });
                }
                closure.edges.record(edge.clone());
                continue;
            }

            match resolve(edge, universe) {
                Resolution::LocallySatisfied(local) => {
                    seen.insert(edge.target.clone(), local.version);
                    diagnostics.log_info(&format!(
                        "Dependency {} satisfied by installed version {}",
                        edge.target, local.version
                    ));
                }
                Resolution::Remote(remote) => {
                    seen.insert(edge.target.clone(), remote.version);
                    if let Some(next) = closure.insert_required(remote) {
                        queue.push_back(next);
                    }
                    closure.edges.record(edge.clone());
                    closure.roots.remove(&remote.id);
                }
                Resolution::Unsatisfiable(reason) => {
                    diagnostics.log_warning(&reason.to_string());
                    return Err(reason);
                }
            }
        }
    }

    Ok(closure)
}
