//! Core types for MicroStat
//!
//! Shared error and result types used by the evaluation crates.

pub mod error;

pub use error::{Error, Result};
