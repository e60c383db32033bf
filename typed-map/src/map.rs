use std::{
    collections::{
        btree_map::{self, Entry},
        BTreeMap,
    },
    convert::identity,
    fmt,
    marker::PhantomData,
};

use log::trace;

use crate::{
    brand::Unbranded,
    error::{MapError, Result},
    map_like::MapLike,
    record::RawRecord,
};

/// A map from string keys to values of type `V`.
///
/// The backing store has no members other than the ones that were put there, so keys like
/// `"constructor"` or `"__proto__"` are as ordinary as any other key.
///
/// `B` is a compile-time [brand](crate::brand). It is never stored and has no influence on
/// equality, cloning or formatting.
///
/// Iteration happens in ascending key order. Callers should still only rely on iteration being
/// stable for a given set of entries.
pub struct TypedMap<V, B = Unbranded> {
    entries: BTreeMap<String, V>,
    brand: PhantomData<fn() -> B>,
}

impl<V> TypedMap<V> {
    /// Creates an empty, unbranded map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding a shallow copy of every own entry of `template`.
    ///
    /// Members a [`RawRecord`] inherits from its prototype are not copied.
    pub fn from_record<R>(template: &R) -> Self
    where
        R: MapLike<V> + ?Sized,
        V: Clone,
    {
        template
            .own_entries()
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }

    /// Creates a map that stores each item under the key produced by `key_of`.
    ///
    /// If multiple items produce the same key, the last one wins.
    pub fn from_items<K: Into<String>>(
        items: impl IntoIterator<Item = V>,
        key_of: impl FnMut(&V) -> K,
    ) -> Self {
        Self::from_items_with(items, key_of, identity)
    }

    /// Like [`TypedMap::from_items`], but stores `value_of(item)` instead of the item itself.
    pub fn from_items_with<T, K: Into<String>>(
        items: impl IntoIterator<Item = T>,
        mut key_of: impl FnMut(&T) -> K,
        mut value_of: impl FnMut(T) -> V,
    ) -> Self {
        let mut map = Self::new();
        for item in items {
            let key = key_of(&item);
            map.set(key, value_of(item));
        }
        map
    }

    /// Gives the map a brand.
    ///
    /// Only unbranded maps can be branded; there is no way to swap out an existing brand.
    pub fn brand<B>(self) -> TypedMap<V, B> {
        TypedMap {
            entries: self.entries,
            brand: PhantomData,
        }
    }
}

impl<V, B> TypedMap<V, B> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// [`TypedMap::some_properties`] with a predicate that accepts everything.
    pub fn has_entries(&self) -> bool {
        !self.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Inserts `value`, replacing the value that might already be stored under `key`.
    ///
    /// Returns the value that was just set.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> &mut V {
        match self.entries.entry(key.into()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = value;
                slot
            }
            Entry::Vacant(entry) => entry.insert(value),
        }
    }

    pub fn delete(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    /// Returns the value under `key`, first storing `compute(key)` if the key is missing.
    ///
    /// `compute` is called at most once and not at all if the key is present.
    pub fn get_or_update(
        &mut self,
        key: impl Into<String>,
        compute: impl FnOnce(&str) -> V,
    ) -> &mut V {
        self.entries.entry(key.into()).or_insert_with_key(|key| {
            trace!("populating missing key {key:?}");
            compute(key.as_str())
        })
    }

    /// Like [`TypedMap::get`], but treats a missing key as an error.
    pub fn try_get(&self, key: &str) -> Result<&V> {
        self.get(key).ok_or_else(|| MapError::missing_key(key))
    }

    /// Like [`TypedMap::get_mut`], but treats a missing key as an error.
    pub fn try_get_mut(&mut self, key: &str) -> Result<&mut V> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| MapError::missing_key(key))
    }

    /// Like [`TypedMap::delete`], but treats a missing key as an error.
    pub fn try_delete(&mut self, key: &str) -> Result<V> {
        self.delete(key).ok_or_else(|| MapError::missing_key(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> + '_ {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Calls `callback` for each entry until it returns [`Some`] and returns that result.
    ///
    /// Entries after the first hit are not visited.
    pub fn for_each_property<U>(
        &self,
        mut callback: impl FnMut(&V, &str) -> Option<U>,
    ) -> Option<U> {
        self.iter().find_map(|(key, value)| callback(value, key))
    }

    /// Returns `true` if any entry satisfies `predicate`, stopping at the first one that does.
    pub fn some_properties(&self, mut predicate: impl FnMut(&V, &str) -> bool) -> bool {
        self.iter().any(|(key, value)| predicate(value, key))
    }

    /// Left fold over all entries in iteration order.
    pub fn reduce_properties<U>(
        &self,
        mut fold: impl FnMut(U, &V, &str) -> U,
        initial: U,
    ) -> U {
        self.iter()
            .fold(initial, |aggregate, (key, value)| fold(aggregate, value, key))
    }

    /// Copies every entry of `source` into this map, overwriting on collision.
    pub fn copy_map_properties_from(&mut self, source: &Self)
    where
        V: Clone,
    {
        for (key, value) in source.iter() {
            self.set(key, value.clone());
        }
    }

    /// Copies the value under `key` from `source`, if `source` has one.
    pub fn copy_single(&mut self, source: &Self, key: &str)
    where
        V: Clone,
    {
        if let Some(value) = source.get(key) {
            self.set(key, value.clone());
        }
    }

    /// Returns a map with the same entries that can gain and lose keys independently.
    ///
    /// Values are cloned shallowly; store `Rc`s or `Arc`s to share them between both maps.
    pub fn clone_map(&self) -> Self
    where
        V: Clone,
    {
        self.clone()
    }

    /// Copies all entries into a prototype-free [`RawRecord`].
    pub fn to_raw_record(&self) -> RawRecord<V>
    where
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }
}

impl<V, B> Default for TypedMap<V, B> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            brand: PhantomData,
        }
    }
}

impl<V: Clone, B> Clone for TypedMap<V, B> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            brand: PhantomData,
        }
    }
}

impl<V: fmt::Debug, B> fmt::Debug for TypedMap<V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq, B> PartialEq for TypedMap<V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq, B> Eq for TypedMap<V, B> {}

impl<K: Into<String>, V, B> FromIterator<(K, V)> for TypedMap<V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V, B> Extend<(K, V)> for TypedMap<V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<V, B> IntoIterator for TypedMap<V, B> {
    type Item = (String, V);
    type IntoIter = btree_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V, B> IntoIterator for &'a TypedMap<V, B> {
    type Item = (&'a String, &'a V);
    type IntoIter = btree_map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::typed_map;

    fn abc() -> TypedMap<i32> {
        [("a", 0), ("b", 1), ("c", 2)].into_iter().collect()
    }

    #[test]
    fn new_map_is_empty() {
        let map = TypedMap::<i32>::new();

        assert!(map.is_empty());
        assert!(!map.has_entries());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get("a"), None);
    }

    #[test]
    fn inherited_member_names_are_ordinary_keys() {
        let mut map = TypedMap::new();

        for key in ["constructor", "toString", "__proto__", "hasOwnProperty"] {
            assert!(!map.has(key));
            assert_eq!(map.get(key), None);
        }

        map.set("constructor", 7);
        map.set("__proto__", 8);

        assert!(map.has("constructor"));
        assert_eq!(map.get("constructor"), Some(&7));
        assert_eq!(map.get("__proto__"), Some(&8));
        assert!(!map.has("toString"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn set_overwrites_and_returns_value() {
        let mut map = TypedMap::new();

        assert_eq!(*map.set("x", 1), 1);
        assert_eq!(*map.set("x", 2), 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x"), Some(&2));
    }

    #[test]
    fn delete_missing_key_is_noop() {
        let mut map = abc();

        assert_eq!(map.delete("z"), None);
        assert_eq!(map.len(), 3);

        assert_eq!(map.delete("b"), Some(1));
        assert!(!map.has("b"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn get_or_update_computes_once() {
        let mut map = TypedMap::new();
        let calls = Cell::new(0);
        let compute = |key: &str| {
            calls.set(calls.get() + 1);
            key.len()
        };

        assert_eq!(*map.get_or_update("four", compute), 4);
        assert_eq!(*map.get_or_update("four", compute), 4);
        assert_eq!(calls.get(), 1);

        map.set("four", 10);
        assert_eq!(*map.get_or_update("four", compute), 10);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn strict_accessors_report_missing_key() {
        let mut map = abc();

        assert_eq!(map.try_get("a"), Ok(&0));
        assert_eq!(map.try_get("z"), Err(MapError::missing_key("z")));

        *map.try_get_mut("a").unwrap() += 5;
        assert_eq!(map.get("a"), Some(&5));

        assert_eq!(map.try_delete("a"), Ok(5));
        assert_eq!(map.try_delete("a"), Err(MapError::missing_key("a")));
    }

    #[test]
    fn for_each_property_stops_at_first_hit() {
        let map = abc();
        let mut visited = Vec::new();

        let result = map.for_each_property(|&value, key| {
            visited.push(key.to_owned());
            (value > 0).then(|| format!("{key}={value}"))
        });

        assert_eq!(result.as_deref(), Some("b=1"));
        assert_eq!(visited, ["a", "b"]);
    }

    #[test]
    fn for_each_property_without_hit() {
        let map = abc();

        let result = map.for_each_property(|&value, _| (value > 5).then_some(value));

        assert_eq!(result, None);
    }

    #[test]
    fn some_properties_short_circuits() {
        let map = abc();
        let mut visited = 0;

        assert!(map.some_properties(|&value, _| {
            visited += 1;
            value == 0
        }));
        assert_eq!(visited, 1);

        assert!(!map.some_properties(|_, key| key == "z"));
        assert!(map.has_entries());
    }

    #[test]
    fn reduce_properties_folds_in_order() {
        let map = abc();

        let keys = map.reduce_properties(|keys, _, key| keys + key, String::new());
        let sum = map.reduce_properties(|sum, value, _| sum + value, 0);

        assert_eq!(keys, "abc");
        assert_eq!(sum, 3);
    }

    #[test]
    fn from_record_copies_entries() {
        let template = abc();

        let map = TypedMap::from_record(&template);

        assert_eq!(map, template);
    }

    #[test]
    fn from_items_last_write_wins() {
        let items = [("x", 'a'), ("y", 'b'), ("x", 'c')];

        let map = TypedMap::from_items(items, |&(key, _)| key);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x"), Some(&("x", 'c')));
        assert_eq!(map.get("y"), Some(&("y", 'b')));

        let map = TypedMap::from_items_with(items, |&(key, _)| key, |(_, value)| value);
        assert_eq!(map.get("x"), Some(&'c'));
        assert_eq!(map.get("y"), Some(&'b'));
    }

    #[test]
    fn clone_map_is_independent() {
        let shared = Rc::new(String::from("shared"));
        let mut map = TypedMap::new();
        map.set("a", Rc::clone(&shared));
        map.set("b", Rc::clone(&shared));

        let mut clone = map.clone_map();
        assert_eq!(clone, map);

        clone.delete("a");
        clone.set("c", Rc::new(String::from("new")));

        assert!(map.has("a"));
        assert!(!map.has("c"));
        assert!(Rc::ptr_eq(map.get("b").unwrap(), clone.get("b").unwrap()));
    }

    #[test]
    fn copy_map_properties_overwrites_and_keeps() {
        let mut target: TypedMap<i32> = [("a", 10), ("z", 26)].into_iter().collect();

        target.copy_map_properties_from(&abc());

        assert_eq!(target.get("a"), Some(&0));
        assert_eq!(target.get("c"), Some(&2));
        assert_eq!(target.get("z"), Some(&26));
        assert_eq!(target.len(), 4);
    }

    #[test]
    fn copy_single_ignores_missing() {
        let source = abc();
        let mut target = TypedMap::new();

        target.copy_single(&source, "b");
        target.copy_single(&source, "z");

        assert_eq!(target.len(), 1);
        assert_eq!(target.get("b"), Some(&1));
    }

    #[test]
    fn branded_maps_behave_like_plain_ones() {
        enum Symbols {}

        let mut map = abc().brand::<Symbols>();
        map.set("d", 3);

        let clone: TypedMap<i32, Symbols> = map.clone_map();
        assert_eq!(clone, map);
        assert_eq!(std::mem::size_of_val(&map), std::mem::size_of::<BTreeMap<String, i32>>());
        assert_eq!(format!("{map:?}"), r#"{"a": 0, "b": 1, "c": 2, "d": 3}"#);
    }

    #[test]
    fn into_iter_yields_owned_entries() {
        let entries: Vec<_> = abc().into_iter().collect();

        assert_eq!(
            entries,
            [("a".to_owned(), 0), ("b".to_owned(), 1), ("c".to_owned(), 2)]
        );
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut map = abc();

        for (key, value) in map.iter_mut() {
            if key != "b" {
                *value += 10;
            }
        }

        assert_eq!(map, typed_map! { "a" => 10, "b" => 1, "c" => 12 });
        assert_eq!(map.values().copied().collect::<Vec<_>>(), [10, 1, 12]);
    }
}
