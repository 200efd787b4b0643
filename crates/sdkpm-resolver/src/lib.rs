//! Dependency resolution kernel.
//!
//! Given explicitly requested packages and a [`PackageUniverse`], computes
//! every package that has to be installed and an order in which to install
//! them (dependencies first). Already-installed packages that meet a
//! requirement are skipped; a missing package or an unavailable version aborts
//! the whole resolution.
//!
//! Resolution is greedy: the first requirement seen for a package decides how
//! it is satisfied. Later, stricter requirements on the same package are not
//! re-checked, only reported in [`ConstraintReport`].

pub mod closure;
pub mod conflict;
pub mod graph;
pub mod order;
pub mod plan;
pub mod resolve;

use sdkpm_core::diagnostics::Diagnostics;
use sdkpm_core::package::{Package, PackageId};
use sdkpm_core::universe::PackageUniverse;

pub use conflict::{ConstraintReport, UnenforcedConstraint};
pub use plan::InstallPlan;
pub use resolve::Unsatisfied;

/// Compute the packages to install for `requests`, in install order.
///
/// Fails without partial results if any transitive dependency is missing from
/// the universe or unavailable at a sufficient version. The reason is also
/// written to `diagnostics` as a warning.
pub fn compute_required_packages(
    requests: &[Package],
    universe: &PackageUniverse,
    diagnostics: &mut dyn Diagnostics,
) -> Result<InstallPlan, Unsatisfied> {
    let closure = closure::compute_required(requests, universe, diagnostics)?;
    let requested = requested_ids(requests);
    let (packages, constraints) = closure.into_install_order(diagnostics);
    Ok(InstallPlan {
        packages,
        requested,
        constraints,
    })
}

/// Ids of `requests` in request order, without duplicates.
fn requested_ids(requests: &[Package]) -> Vec<PackageId> {
    let mut ids: Vec<PackageId> = Vec::with_capacity(requests.len());
    for r in requests {
        if !ids.contains(&r.id) {
            ids.push(r.id.clone());
        }
    }
    ids
}
