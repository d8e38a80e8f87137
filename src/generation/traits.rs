//! Port interfaces for the generation domain

use crate::generation::{GeneratedFunction, Target};

/// Renders the generation IR into the syntax of one target language
///
/// Every method returns a complete chunk of output text; the compiler context
/// decides when each chunk is written.
pub trait TargetRenderer: Send + Sync {
    /// The language this renderer produces
    fn target(&self) -> Target;

    /// File-level boilerplate written once before anything else
    fn preamble(&self) -> String;

    /// Text written once after everything else
    fn postamble(&self) -> String {
        String::new()
    }

    /// Opening delimiter of a namespace block
    fn open_namespace(&self, name: &str) -> String;

    /// Closing delimiter of a namespace block
    fn close_namespace(&self, name: &str) -> String;

    /// Declaration and body of one message function
    fn function(&self, function: &GeneratedFunction) -> String;
}
