//! Generation domain module - turns message definitions into output code
//!
//! Templates are analyzed into segments, each message becomes a typed
//! [`GeneratedFunction`], and a [`TargetRenderer`] turns that IR into text
//! which the [`CompilerContext`] streams into the output sink.

pub mod context;
pub mod errors;
pub mod function;
pub mod template;
pub mod traits;
pub mod types;

pub use context::*;
pub use errors::*;
pub use function::*;
pub use template::*;
pub use traits::*;
pub use types::*;
