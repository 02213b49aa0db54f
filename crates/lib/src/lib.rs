//! buildreg-lib: Core types and logic for buildreg
//!
//! This crate provides the build-file registration engine:
//! - `BuildFile`/`BuildConfig`: identity-comparable candidate handles and the
//!   project-scoped registry of recognized build files
//! - `register_all`/`execute`: batch registration with aggregated failures
//! - `check_eligibility`: the enablement predicate hosts evaluate per refresh

pub mod config;
pub mod consts;
pub mod document;
pub mod eligibility;
pub mod host;
pub mod project;
pub mod registrar;
pub mod selection;
