//! Core domain for the depsync post-install helper: semantic-version
//! parsing and comparison, the package.json manifest model, and the
//! greater-wins dependency merge built on top of them.

pub mod manifest;
pub mod merge;
pub mod version;
