//! Decides how a single dependency edge is satisfied.

use sdkpm_core::dependency::DependencyEdge;
use sdkpm_core::package::{Package, PackageId};
use sdkpm_core::universe::PackageUniverse;
use sdkpm_core::version::Version;
use thiserror::Error;

/// Outcome of resolving one dependency edge against the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'u> {
    /// An installed package already meets the requirement.
    LocallySatisfied(&'u Package),
    /// The best remote candidate meets the requirement and must be installed.
    Remote(&'u Package),
    Unsatisfiable(Unsatisfied),
}

/// Why a dependency cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsatisfied {
    /// The target id is unknown to the universe.
    #[error("Dependant package with key {target} not found!")]
    MissingDependency { target: PackageId },

    /// The target exists but neither the install nor the remote candidate is new enough.
    #[error("Package \"{display_name}\" {}", unavailable_suffix(.min_version))]
    VersionUnavailable {
        target: PackageId,
        display_name: String,
        min_version: Option<Version>,
    },
}

impl Unsatisfied {
    pub fn target(&self) -> &PackageId {
        match self {
            Unsatisfied::MissingDependency { target } => target,
            Unsatisfied::VersionUnavailable { target, .. } => target,
        }
    }
}

fn unavailable_suffix(min_version: &Option<Version>) -> String {
    match min_version {
        Some(min) => format!("with revision at least {min} not available."),
        None => "not available.".to_string(),
    }
}

/// Resolve `edge`: prefer a sufficient local install, then the best remote candidate.
pub fn resolve<'u>(edge: &DependencyEdge, universe: &'u PackageUniverse) -> Resolution<'u> {
    let Some(entry) = universe.get(edge.target.as_str()) else {
        return Resolution::Unsatisfiable(Unsatisfied::MissingDependency {
            target: edge.target.clone(),
        });
    };

    if let Some(local) = &entry.local {
        if edge.is_satisfied_by(&local.version) {
            return Resolution::LocallySatisfied(local);
        }
    }

    match &entry.remote {
        Some(remote) if edge.is_satisfied_by(&remote.version) => Resolution::Remote(remote),
        _ => Resolution::Unsatisfiable(Unsatisfied::VersionUnavailable {
            target: edge.target.clone(),
            display_name: entry
                .representative()
                .map_or_else(|| edge.target.to_string(), |p| p.display_name().to_string()),
            min_version: edge.min_version,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u32) -> Version {
        Version::new(major, 0, 0)
    }

    fn universe() -> PackageUniverse {
        PackageUniverse::new()
            .with_local(Package::new("tools", v(2)))
            .with_remote(Package::new("tools", v(3)).with_display_name("SDK Tools"))
            .with_remote(Package::new("emulator", v(5)))
            .with_local(Package::new("legacy", v(1)))
    }

    #[test]
    fn missing_target() {
        let u = universe();
        let outcome = resolve(&DependencyEdge::any("bogus"), &u);
        assert_eq!(
            outcome,
            Resolution::Unsatisfiable(Unsatisfied::MissingDependency {
                target: PackageId::from("bogus")
            })
        );
    }

    #[test]
    fn local_without_minimum() {
        let u = universe();
        let outcome = resolve(&DependencyEdge::any("tools"), &u);
        assert!(matches!(outcome, Resolution::LocallySatisfied(p) if p.version == v(2)));
    }

    #[test]
    fn local_meeting_minimum() {
        let u = universe();
        let edge = DependencyEdge::at_least("tools", Version::new(1, 1, 1));
        assert!(matches!(resolve(&edge, &u), Resolution::LocallySatisfied(_)));
    }

    #[test]
    fn remote_when_local_too_old() {
        let u = universe();
        let edge = DependencyEdge::at_least("tools", v(3));
        assert!(matches!(resolve(&edge, &u), Resolution::Remote(p) if p.version == v(3)));
    }

    #[test]
    fn remote_when_not_installed() {
        let u = universe();
        assert!(matches!(
            resolve(&DependencyEdge::any("emulator"), &u),
            Resolution::Remote(_)
        ));
    }

    #[test]
    fn nothing_new_enough() {
        let u = universe();
        let edge = DependencyEdge::at_least("tools", v(4));
        let Resolution::Unsatisfiable(reason) = resolve(&edge, &u) else {
            panic!("expected failure");
        };
        assert_eq!(
            reason.to_string(),
            "Package \"tools\" with revision at least 4.0.0 not available."
        );
        assert_eq!(reason.target().as_str(), "tools");
    }

    #[test]
    fn local_only_and_too_old() {
        let u = universe();
        let edge = DependencyEdge::at_least("legacy", v(2));
        assert!(matches!(
            resolve(&edge, &u),
            Resolution::Unsatisfiable(Unsatisfied::VersionUnavailable { .. })
        ));
    }

    #[test]
    fn message_without_minimum() {
        let reason = Unsatisfied::VersionUnavailable {
            target: PackageId::from("x"),
            display_name: "Thing X".to_string(),
            min_version: None,
        };
        assert_eq!(reason.to_string(), "Package \"Thing X\" not available.");
    }

    #[test]
    fn missing_message() {
        let reason = Unsatisfied::MissingDependency {
            target: PackageId::from("bogus"),
        };
        assert_eq!(reason.to_string(), "Dependant package with key bogus not found!");
    }
}
