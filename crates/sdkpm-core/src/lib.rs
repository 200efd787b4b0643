//! Core data types for sdkpm.
//!
//! This crate defines the read-only substrate dependency resolution works on:
//! package ids and versions, dependency edges, the package universe (local
//! installs plus best remote candidates), the diagnostics sink, global
//! configuration, and the serialized install plan.
//!
//! This crate is intentionally free of network I/O.

pub mod config;
pub mod dependency;
pub mod diagnostics;
pub mod package;
pub mod plan;
pub mod universe;
pub mod version;
