use std::collections::{BTreeMap, HashMap};

use crate::{map::TypedMap, record::RawRecord};

/// Read access to the own members of a record-like value.
///
/// Implementations must never expose inherited members.
pub trait MapLike<V> {
    fn has_own(&self, key: &str) -> bool {
        self.get_own(key).is_some()
    }

    fn get_own(&self, key: &str) -> Option<&V>;

    fn own_entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_>;

    fn own_len(&self) -> usize;
}

/// Write access to the own members of a record-like value.
pub trait MapLikeMut<V>: MapLike<V> {
    fn set_own(&mut self, key: String, value: V);
}

impl<V, B> MapLike<V> for TypedMap<V, B> {
    fn has_own(&self, key: &str) -> bool {
        self.has(key)
    }

    fn get_own(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn own_entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        Box::new(self.iter())
    }

    fn own_len(&self) -> usize {
        self.len()
    }
}

impl<V, B> MapLikeMut<V> for TypedMap<V, B> {
    fn set_own(&mut self, key: String, value: V) {
        self.set(key, value);
    }
}

impl<V> MapLike<V> for RawRecord<V> {
    fn get_own(&self, key: &str) -> Option<&V> {
        self.own().get(key)
    }

    fn own_entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        self.own().own_entries()
    }

    fn own_len(&self) -> usize {
        self.own().len()
    }
}

impl<V> MapLikeMut<V> for RawRecord<V> {
    fn set_own(&mut self, key: String, value: V) {
        self.own_mut().insert(key, value);
    }
}

impl<V> MapLike<V> for BTreeMap<String, V> {
    fn get_own(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn own_entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn own_len(&self) -> usize {
        self.len()
    }
}

impl<V> MapLikeMut<V> for BTreeMap<String, V> {
    fn set_own(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl<V, S: std::hash::BuildHasher> MapLike<V> for HashMap<String, V, S> {
    fn get_own(&self, key: &str) -> Option<&V> {
        self.get(key)
    }

    fn own_entries(&self) -> Box<dyn Iterator<Item = (&str, &V)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn own_len(&self) -> usize {
        self.len()
    }
}

impl<V, S: std::hash::BuildHasher> MapLikeMut<V> for HashMap<String, V, S> {
    fn set_own(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}
