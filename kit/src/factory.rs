//! Ready-made parsers with default configuration.
//!
//! ```ignore
//! use jsonic::factory;
//!
//! let flags = factory::ordered_object(factory::boolean());
//! let map = jsonic::from_str(&flags, r#"{"debug": true, "color": false}"#)?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use jsonic_core::{
    ArrayParser, BooleanParser, Compose, JsonParser, NullParser, ObjectParser, StringParser,
};

use crate::dialect::default_dialect;
use crate::value::JsonValue;

#[inline]
pub const fn string() -> StringParser {
    StringParser::DEFAULT
}

#[inline]
pub const fn boolean() -> BooleanParser {
    BooleanParser
}

#[inline]
pub const fn null() -> NullParser {
    NullParser
}

/// An array of `element`s collected into a `Vec`.
#[inline]
pub fn array<P: JsonParser>(element: P) -> ArrayParser<P, Vec<P::Output>> {
    ArrayParser::new(element)
}

/// An array of strings.
#[inline]
pub fn string_array() -> ArrayParser<StringParser, Vec<String>> {
    ArrayParser::new(StringParser::DEFAULT)
}

/// An array of `element`s without repetitions, in first-seen order.
#[inline]
pub fn set<P: JsonParser>(element: P) -> ArrayParser<P, IndexSet<P::Output>> {
    ArrayParser::with_collection(element)
}

/// A permissive object with string keys.
#[inline]
pub fn object<V: JsonParser>(value: V) -> ObjectParser<StringParser, V, HashMap<String, V::Output>> {
    ObjectParser::with_collection(StringParser::DEFAULT, value)
}

/// A permissive object with string keys in document order.
#[inline]
pub fn ordered_object<V: JsonParser>(value: V) -> ObjectParser<StringParser, V, IndexMap<String, V::Output>> {
    ObjectParser::with_collection(StringParser::DEFAULT, value)
}

/// An object with string keys rejecting repeated keys.
#[inline]
pub fn strict_object<V: JsonParser>(value: V) -> ObjectParser<StringParser, V, IndexMap<String, V::Output>> {
    ordered_object(value).with_strict(true)
}

/// The default value grammar.
#[inline]
pub fn value() -> Arc<Compose<JsonValue>> {
    default_dialect()
}
