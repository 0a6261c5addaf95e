//! Utility functions

pub mod value;

pub use value::{compare, parse_index, strict_equals, string_form};
