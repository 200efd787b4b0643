//! Install ordering by iterative root peeling.
//!
//! Packages nobody depends on are emitted first; a dependency becomes a root
//! once the last edge pointing at it has been released. The emitted sequence is
//! reversed at the end so dependencies precede their dependents. Packages
//! that never become roots sit on a cycle and are appended in discovery
//! order, so their relative order is not meaningful.

use std::collections::{BTreeSet, HashMap, HashSet};

use sdkpm_core::diagnostics::Diagnostics;
use sdkpm_core::package::{Package, PackageId};

use crate::closure::EdgeMultimap;

/// Order `required` so that dependencies come before dependents.
///
/// Never fails: cycles only make the order among their members unspecified.
pub fn order(
    required: &[Package],
    roots: BTreeSet<PackageId>,
    mut edges: EdgeMultimap,
    diagnostics: &mut dyn Diagnostics,
) -> Vec<Package> {
    let by_id: HashMap<&PackageId, &Package> = required.iter().map(|p| (&p.id, p)).collect();
    let mut remaining = roots;
    let mut emitted: HashSet<&PackageId> = HashSet::with_capacity(required.len());
    let mut result: Vec<Package> = Vec::with_capacity(required.len());

    while let Some(id) = remaining.pop_first() {
        let Some(&package) = by_id.get(&id) else {
            continue;
        };
        if !emitted.insert(&package.id) {
            continue;
        }
        result.push(package.clone());

        for edge in &package.dependencies {
            if !edges.release(edge) {
                continue;
            }
            // Targets satisfied by a local install are tracked but never ordered.
            if let Some(&target) = by_id.get(&edge.target) {
                if !emitted.contains(&target.id) {
                    remaining.insert(target.id.clone());
                }
            }
        }
    }

    if result.len() != required.len() {
        diagnostics.log_info("Failed to sort dependencies, returning partially-sorted list.");
        tracing::debug!(
            "{} of {} packages are on dependency cycles",
            required.len() - result.len(),
            required.len()
        );
        result.extend(
            required
                .iter()
                .filter(|p| !emitted.contains(&p.id))
                .cloned(),
        );
    }

    result.reverse();
    result
}
