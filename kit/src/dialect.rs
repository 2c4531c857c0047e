//! The default grammar over [`JsonValue`].

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use jsonic_core::{
    ArrayParser, BooleanParser, ComposableParser, Compose, JsonParser, NullParser, ObjectParser,
    ParseError, StringParser, SyntaxReader, TrailingPolicy, Traverser,
};

use crate::value::JsonValue;

/// Reads the raw lexeme of a number.
///
/// Starts on `-` or a digit and continues over digits, `.`, exponent
/// markers and signs. The lexeme is not validated, so `1.2.3` is read as
/// is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberParser;

impl NumberParser {
    fn starts(ch: char) -> bool {
        ch == '-' || ch.is_ascii_digit()
    }
}

impl JsonParser for NumberParser {
    type Output = String;

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<String, ParseError> {
        reader.accumulate_while(traverser, |last, ch| match last {
            None => Self::starts(ch),
            Some(_) => ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'),
        })
    }
}

impl ComposableParser for NumberParser {
    #[inline]
    fn could_parse(&self, current: char, _: Option<char>) -> bool {
        Self::starts(current)
    }
}

/// Switches of the default grammar.
///
/// # Example
///
/// ```ignore
/// let strict = Dialect::new().with_strict_keys(true).build();
/// let lenient = Dialect::new().with_trailing(TrailingPolicy::Optional).build();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dialect {
    strict_keys: bool,
    trailing: TrailingPolicy,
}

impl Dialect {
    /// Permissive keys, no trailing separators.
    pub const DEFAULT: Self = Self {
        strict_keys: false,
        trailing: TrailingPolicy::Forbidden,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Rejects objects repeating a key.
    #[inline]
    pub const fn with_strict_keys(mut self, strict: bool) -> Self {
        self.strict_keys = strict;
        self
    }

    #[inline]
    pub const fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    #[inline]
    pub const fn strict_keys(&self) -> bool {
        self.strict_keys
    }

    #[inline]
    pub const fn trailing(&self) -> TrailingPolicy {
        self.trailing
    }

    /// Builds the value grammar.
    pub fn build(self) -> Arc<Compose<JsonValue>> {
        Compose::recursive(|value| {
            let array = ArrayParser::new(value.clone()).with_trailing(self.trailing);
            let object = ObjectParser::<_, _, IndexMap<String, JsonValue>>::with_collection(
                StringParser::DEFAULT,
                value,
            )
            .with_strict(self.strict_keys)
            .with_trailing(self.trailing);

            Compose::new()
                .with(StringParser::DEFAULT.map(JsonValue::String))
                .with(NumberParser.map(JsonValue::Number))
                .with(BooleanParser.map(JsonValue::Bool))
                .with(NullParser.map(|()| JsonValue::Null))
                .with(array.map(JsonValue::Array))
                .with(object.map(JsonValue::Object))
        })
    }
}

static DEFAULT_DIALECT: LazyLock<Arc<Compose<JsonValue>>> = LazyLock::new(|| Dialect::DEFAULT.build());

/// The grammar of [`Dialect::DEFAULT`], built once per process.
pub fn default_dialect() -> Arc<Compose<JsonValue>> {
    Arc::clone(&DEFAULT_DIALECT)
}
