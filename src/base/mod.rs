//! Foundation types for the datalayer toolchain.
//!
//! This module provides the fixed vocabulary every validation stage shares:
//! - [`ModelConfig`] - Base scalar types and numeric literal suffixes
//! - [`Persistence`] - How a group survives restarts
//! - [`Access`] - Read/write permissions of a datapoint
//!
//! This module has NO dependencies on other datalayer modules.

pub mod config;
mod modes;

pub use config::{ConfigError, ModelConfig};
pub use modes::{Access, Persistence, UnknownMode};
