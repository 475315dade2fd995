//! Common test utilities for staticfier
//!
//! Shared fixtures and assertions for the integration tests.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
