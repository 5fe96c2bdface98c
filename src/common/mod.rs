//! Common types and utilities shared across the crate.
//!
//! This module provides the unified error type, random identifier generation,
//! XML text helpers and unit conversions.

// Submodule declarations
pub mod error;
pub mod id;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
