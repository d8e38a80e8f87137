//! Output and input file handling

pub mod filesystem_output;

pub use filesystem_output::*;
