//! Reporting of minimum-version requirements that first-seen-wins resolution
//! left unchecked.

use std::fmt;

use sdkpm_core::package::PackageId;
use sdkpm_core::version::Version;

/// Requirements encountered after their target was already resolved, whose
/// minimum exceeds the version accepted at first encounter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConstraintReport {
    pub constraints: Vec<UnenforcedConstraint>,
}

/// A single requirement that the accepted version does not meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnenforcedConstraint {
    pub target: PackageId,
    /// Package that declared the stricter requirement.
    pub requirer: PackageId,
    pub required: Version,
    pub accepted: Version,
}

impl ConstraintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, constraint: UnenforcedConstraint) {
        self.constraints.push(constraint);
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnenforcedConstraint> {
        self.constraints.iter()
    }
}

impl fmt::Display for ConstraintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.constraints.is_empty() {
            return write!(f, "No unenforced constraints.");
        }
        writeln!(f, "Unenforced constraints ({}):", self.constraints.len())?;
        for c in &self.constraints {
            writeln!(f, "  {c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for UnenforcedConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} requires {} >= {} but {} was accepted first",
            self.requirer, self.target, self.required, self.accepted
        )
    }
}
