//! Infrastructure layer - concrete implementations of domain ports

pub mod generation;
pub mod output;

pub use generation::*;
pub use output::*;
