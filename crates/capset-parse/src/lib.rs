#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Textual encodings of descriptors, unit sets and filter sets.
//!
//! All of them share one shape: a leading identifier followed by
//! comma-separated `Key=Value` fields. Keys are case-insensitive.

mod decode;
mod lexer;
mod parser;
mod token;

pub use decode::{
    parse_capability_set, parse_descriptor, parse_filter_set, parse_unit_set,
    try_parse_capability_set, try_parse_descriptor, try_parse_filter_set, try_parse_unit_set,
};
pub use parser::MAX_INPUT_LEN;
