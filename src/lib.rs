//! Library for converting Chatwork message markup into Markdown.
//!
//! Chatwork messages use bracket tags such as `[info]`, `[qt]` or `[To:123]`.
//! The parser classifies the next token, builds a small tree and merges it
//! back into Markdown. Malformed markup is tolerated rather than rejected.

#[macro_use]
mod macros;

pub mod error;
pub mod factory;
pub mod io;
mod merge;
pub mod node;
pub mod parse;
pub mod state;
pub mod token;

pub use error::ParseError;
pub use io::{convert_file, rewrite};
pub use node::{Node, NodeId, NodeKind, Tree};
pub use parse::{parse_text, parse_tree};
