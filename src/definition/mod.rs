//! Definition language front end
//!
//! A definition file is line oriented:
//!
//! ```text
//! # comment
//! package net
//! timeout "Connection to {0} timed out after {1} ms"
//! closed Closed
//! ```
//!
//! `package` lines open a namespace block, two-token lines define a message,
//! and everything else is ignored.

pub mod parser;
pub mod tokenizer;

pub use parser::{DefinitionLine, DefinitionParser, PACKAGE_KEYWORD};
pub use tokenizer::{is_comment_or_blank, tokenize};
