//! Application layer - compile use cases over files, readers and strings

pub mod compile_messages;

pub use compile_messages::*;
