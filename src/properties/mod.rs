//! Properties file model and parsing.
//!
//! - [`PropertySet`] - ordered key/value collection built from one file
//! - [`PropertiesParser`] - the line-oriented `key=value` parser

pub mod parser;
pub mod set;

pub use parser::PropertiesParser;
pub use set::PropertySet;
