//! Core building blocks shared by every layer
//!
//! Error types, run configuration and string helpers.

pub mod config;
pub mod error;
pub mod utils;

pub use config::{CompilerOptions, GuardStyle};
pub use error::{Error, Result};
