use log::trace;

use crate::{
    brand::Unbranded,
    error::{MapError, Result},
    map::TypedMap,
};

/// A [`TypedMap`] whose values are lists.
///
/// The helpers below never leave an empty list behind: a key is present exactly as long as its
/// list has at least one value.
pub type MultiMap<V, B = Unbranded> = TypedMap<Vec<V>, B>;

impl<V, B> TypedMap<Vec<V>, B> {
    /// Appends `value` to the list under `key`, creating the list if necessary.
    ///
    /// Returns the list that `value` was added to.
    pub fn multi_map_add(&mut self, key: impl Into<String>, value: V) -> &mut Vec<V> {
        let values = self.get_or_update(key, |_| Vec::new());
        values.push(value);
        values
    }

    /// Removes one occurrence of `value` from the list under `key`.
    ///
    /// Does not preserve the order of the remaining values. Removes `key` once its list is empty.
    /// Does nothing if `key` is missing or `value` is not in its list.
    pub fn multi_map_remove(&mut self, key: &str, value: &V)
    where
        V: PartialEq,
    {
        let _ = self.try_multi_map_remove(key, value);
    }

    /// Like [`TypedMap::multi_map_remove`], but reports a missing key or value.
    pub fn try_multi_map_remove(&mut self, key: &str, value: &V) -> Result<()>
    where
        V: PartialEq,
    {
        let values = self.try_get_mut(key)?;
        let removed = match values.iter().position(|item| item == value) {
            Some(index) => {
                values.swap_remove(index);
                true
            }
            None => false,
        };

        if values.is_empty() {
            trace!("pruning empty multimap entry {key:?}");
            self.delete(key);
        }

        if removed {
            Ok(())
        } else {
            Err(MapError::missing_value(key))
        }
    }
}
