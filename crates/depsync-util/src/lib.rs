//! Shared utilities for the depsync post-install helper.
//!
//! This crate provides the cross-cutting concerns used by the other depsync
//! crates: the unified error type and process spawning helpers for invoking
//! the package manager.

pub mod errors;
pub mod process;
