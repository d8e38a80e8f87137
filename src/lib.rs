//! messagec - compile message definition files into typed formatting functions
//!
//! A definition file lists named message templates. Each one becomes a
//! function that takes one generic parameter per placeholder and returns the
//! formatted message:
//!
//! ```
//! use messagec::{compile_str, CompilerOptions};
//!
//! let header = compile_str(
//!     "package demo\nhello \"Hi {0}, you have {1} items\"\n",
//!     &CompilerOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(header.contains("template <typename T0, typename T1>"));
//! assert!(header.contains("out << \"Hi \" << P0 << \", you have \" << P1 << \" items\";"));
//! ```
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod definition;
pub mod generation;
pub mod infrastructure;

pub use crate::application::{CompileRequest, compile, compile_file, compile_str};
pub use crate::core::config::{CompilerOptions, GuardStyle};
pub use crate::core::error::{Error, Result};
pub use crate::generation::{CompileSummary, Target};
