use std::{collections::BTreeMap, fmt, sync::Arc};

/// An untyped key-value record used at the edges, e.g. for literal initializers or merge targets.
///
/// Unlike [`TypedMap`](crate::TypedMap), a record can inherit members from a shared prototype.
/// [`RawRecord::lookup`] and [`RawRecord::contains`] see inherited members, everything going
/// through [`MapLike`](crate::MapLike) (and therefore all of [`ops`](crate::ops)) only sees own
/// members.
pub struct RawRecord<V> {
    own: BTreeMap<String, V>,
    prototype: Option<Arc<RawRecord<V>>>,
}

impl<V> RawRecord<V> {
    /// Creates an empty record without a prototype.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record that inherits all members of `prototype`.
    pub fn with_prototype(prototype: Arc<RawRecord<V>>) -> Self {
        Self {
            own: BTreeMap::new(),
            prototype: Some(prototype),
        }
    }

    pub fn prototype(&self) -> Option<&Arc<RawRecord<V>>> {
        self.prototype.as_ref()
    }

    /// Sets an own member, shadowing an inherited member of the same name.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.own.insert(key.into(), value)
    }

    /// Removes an own member.
    ///
    /// An inherited member of the same name becomes visible again.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        self.own.remove(key)
    }

    /// Looks up a member, falling back to the prototype chain.
    pub fn lookup(&self, key: &str) -> Option<&V> {
        let mut record = self;
        loop {
            if let Some(value) = record.own.get(key) {
                return Some(value);
            }
            record = record.prototype.as_deref()?;
        }
    }

    /// Returns `true` if the member is either own or inherited.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    pub(crate) fn own(&self) -> &BTreeMap<String, V> {
        &self.own
    }

    pub(crate) fn own_mut(&mut self) -> &mut BTreeMap<String, V> {
        &mut self.own
    }
}

impl<V> Default for RawRecord<V> {
    fn default() -> Self {
        Self {
            own: BTreeMap::new(),
            prototype: None,
        }
    }
}

/// Shallow: the clone shares the prototype.
impl<V: Clone> Clone for RawRecord<V> {
    fn clone(&self) -> Self {
        Self {
            own: self.own.clone(),
            prototype: self.prototype.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for RawRecord<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("RawRecord");
        debug.field("own", &self.own);
        if let Some(prototype) = &self.prototype {
            debug.field("prototype", prototype);
        }
        debug.finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for RawRecord<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            own: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
            prototype: None,
        }
    }
}
