//! Common test utilities for statstack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated stack directory and home, plus a fake `docker`
//! - Assertion macros: `assert_generated!`, `assert_output_contains!`, etc.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
