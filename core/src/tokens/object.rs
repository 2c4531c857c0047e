use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use super::trailing_separator;
use crate::collect::KeyedCollection;
use crate::config::TrailingPolicy;
use crate::error::{ErrorKind, ParseError};
use crate::syntax::{Symbol, SyntaxReader};
use crate::traits::{ComposableParser, JsonParser};
use crate::traverser::Traverser;

/// Parses `{k1: v1, k2: v2, ...}` into any [`KeyedCollection`].
///
/// Keys and values are parsed by `K` and `V`, so keys need not be strings.
/// In strict mode a repeated key fails with [`ErrorKind::DuplicateKey`];
/// otherwise the last value wins.
pub struct ObjectParser<K, V, M> {
    key: K,
    value: V,
    strict: bool,
    trailing: TrailingPolicy,
    map: PhantomData<fn() -> M>,
}

impl<K: JsonParser, V: JsonParser> ObjectParser<K, V, HashMap<K::Output, V::Output>> {
    /// Creates a permissive parser collecting into a `HashMap`.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self::with_collection(key, value)
    }
}

impl<K, V, M> ObjectParser<K, V, M> {
    #[inline]
    pub fn with_collection(key: K, value: V) -> Self {
        Self {
            key,
            value,
            strict: false,
            trailing: TrailingPolicy::Forbidden,
            map: PhantomData,
        }
    }

    /// Rejects repeated keys when `strict` is set.
    #[inline]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[inline]
    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    #[inline]
    pub fn trailing(&self) -> TrailingPolicy {
        self.trailing
    }
}

impl<K, V, M> ObjectParser<K, V, M>
where
    K: JsonParser,
    K::Output: fmt::Debug,
    V: JsonParser,
    M: KeyedCollection<K::Output, V::Output>,
{
    fn parse_entries(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<M, ParseError> {
        let mut map = M::default();
        let mut first = true;
        loop {
            if Symbol::CurlyClose.matches(reader.skip_whitespace(traverser)?) {
                return Ok(map);
            }
            if !first {
                reader.expect_symbol(traverser, Symbol::Comma)?;
                if Symbol::CurlyClose.matches(reader.skip_whitespace(traverser)?) {
                    return trailing_separator(self.trailing, traverser, reader, Symbol::CurlyClose)
                        .map(|()| map);
                }
            }

            let key = self.key.parse(traverser, reader)?;
            if self.strict && map.contains_key(&key) {
                return Err(reader.error(traverser, ErrorKind::DuplicateKey(format!("{key:?}"))));
            }
            reader.skip_whitespace(traverser)?;
            reader.expect_symbol(traverser, Symbol::Colon)?;
            reader.skip_whitespace(traverser)?;
            let value = self.value.parse(traverser, reader)?;
            map.insert(key, value);
            first = false;
        }
    }
}

impl<K, V, M> JsonParser for ObjectParser<K, V, M>
where
    K: JsonParser,
    K::Output: fmt::Debug,
    V: JsonParser,
    M: KeyedCollection<K::Output, V::Output>,
{
    type Output = M;

    fn parse(&self, traverser: &mut Traverser<'_>, reader: &SyntaxReader) -> Result<M, ParseError> {
        reader.expect_symbol(traverser, Symbol::CurlyOpen)?;
        reader.enter_nested(traverser)?;
        let result = self.parse_entries(traverser, reader);
        traverser.exit_nested();
        result
    }
}

impl<K, V, M> ComposableParser for ObjectParser<K, V, M>
where
    K: JsonParser,
    K::Output: fmt::Debug,
    V: JsonParser,
    M: KeyedCollection<K::Output, V::Output>,
{
    #[inline]
    fn could_parse(&self, current: char, _: Option<char>) -> bool {
        Symbol::CurlyOpen.matches(current)
    }
}

impl<K: Clone, V: Clone, M> Clone for ObjectParser<K, V, M> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            strict: self.strict,
            trailing: self.trailing,
            map: PhantomData,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, M> fmt::Debug for ObjectParser<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectParser")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("strict", &self.strict)
            .field("trailing", &self.trailing)
            .finish()
    }
}
