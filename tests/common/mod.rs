//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Sample Form-16 text and dictionaries
//! - Stub extractors for driving the service without PDF tooling
//! - A PDF builder for end-to-end runs
//! - Custom assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
