//! Common test utilities for modpack contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated mod project in a temp directory
//! - Archive helpers for reading back built zips
//! - Fixtures: reusable file contents

#![allow(dead_code)]

pub mod fixtures;

pub use archive::*;
pub use env::*;
pub use fixtures::*;
