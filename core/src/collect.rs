//! Target collections for object parsers.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// A mapping an [`ObjectParser`](crate::tokens::ObjectParser) can collect
/// into.
///
/// `insert` replaces the value of an existing key, which makes permissive
/// objects last-write-wins.
pub trait KeyedCollection<K, V>: Default {
    fn contains_key(&self, key: &K) -> bool;

    fn insert(&mut self, key: K, value: V);
}

impl<K, V, S> KeyedCollection<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }
}

impl<K: Ord, V> KeyedCollection<K, V> for BTreeMap<K, V> {
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }
}

/// Keeps keys in first-insertion order; a replaced value keeps its slot.
impl<K, V, S> KeyedCollection<K, V> for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) {
        IndexMap::insert(self, key, value);
    }
}
