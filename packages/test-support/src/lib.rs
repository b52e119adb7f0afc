//! Test support utilities
//!
//! This crate provides the unified logging initialization shared by the unit
//! and integration tests of the workspace.

pub mod logging;
