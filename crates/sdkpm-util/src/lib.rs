//! Shared utilities for sdkpm.
//!
//! Cross-cutting concerns used by the other sdkpm crates: the unified error
//! type and Cargo-style terminal status lines.

pub mod errors;
pub mod progress;
