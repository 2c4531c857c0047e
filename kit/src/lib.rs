#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
//! Composable JSON-like parsing with readable syntax errors.
//!
//! Re-exports [`jsonic_core`] and adds the pieces needed to use it directly:
//! a default [`JsonValue`] grammar, factory functions for common parsers and
//! drivers that open strings, readers and files.
//!
//! # Example
//!
//! ```ignore
//! let value = jsonic::parse(r#"{"name": "jsonic", "tags": ["json", "rust"]}"#)?;
//! assert_eq!(value.to_string(), r#"{"name":"jsonic","tags":["json","rust"]}"#);
//!
//! let words = jsonic::from_str(&jsonic::factory::string_array(), r#"["a", "b"]"#)?;
//! assert_eq!(words, ["a", "b"]);
//! ```

pub mod dialect;
mod error;
pub mod factory;
mod read;
mod value;

pub use jsonic_core::*;

pub use dialect::{Dialect, NumberParser, default_dialect};
pub use error::Error;
pub use read::{Driver, from_path, from_reader, from_str, from_str_with, parse};
pub use value::JsonValue;
