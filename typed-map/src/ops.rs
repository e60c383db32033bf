use log::trace;

use crate::{
    map_like::{MapLike, MapLikeMut},
    record::RawRecord,
};

pub fn has_property<V>(map: &(impl MapLike<V> + ?Sized), key: &str) -> bool {
    map.has_own(key)
}

/// Returns the own member `key` of `map`, ignoring inherited ones.
pub fn get_property<'a, V>(map: &'a (impl MapLike<V> + ?Sized), key: &str) -> Option<&'a V> {
    map.get_own(key)
}

pub fn get_own_keys<V>(map: &(impl MapLike<V> + ?Sized)) -> Vec<String> {
    map.own_entries().map(|(key, _)| key.to_owned()).collect()
}

/// Left fold over the own members of `map`.
pub fn reduce_own_properties<V, U>(
    map: &(impl MapLike<V> + ?Sized),
    mut fold: impl FnMut(U, &V, &str) -> U,
    initial: U,
) -> U {
    map.own_entries()
        .fold(initial, |aggregate, (key, value)| fold(aggregate, value, key))
}

/// Copies all own members of `source` into `target`, overwriting on collision.
///
/// Members of `target` that `source` lacks are kept.
pub fn copy_properties<V: Clone>(
    source: &(impl MapLike<V> + ?Sized),
    target: &mut (impl MapLikeMut<V> + ?Sized),
) {
    for (key, value) in source.own_entries() {
        target.set_own(key.to_owned(), value.clone());
    }
}

/// Copies all own members of each source into `target`, in order.
///
/// Later sources take precedence over earlier ones. Use [`assign!`](crate::assign) to mix
/// sources of different types.
pub fn assign<'t, 's, V, T, S>(
    target: &'t mut T,
    sources: impl IntoIterator<Item = &'s S>,
) -> &'t mut T
where
    V: Clone,
    T: MapLikeMut<V> + ?Sized,
    S: MapLike<V> + ?Sized + 's,
{
    for source in sources {
        trace!("assigning {} members", source.own_len());
        copy_properties(source, &mut *target);
    }
    target
}

/// Merges the own members of both maps into a new record.
///
/// Unlike [`assign`], the *first* argument takes precedence.
pub fn extend<V: Clone>(
    first: &(impl MapLike<V> + ?Sized),
    second: &(impl MapLike<V> + ?Sized),
) -> RawRecord<V> {
    trace!(
        "extending {} members with {} members",
        first.own_len(),
        second.own_len()
    );
    let mut result = RawRecord::new();
    copy_properties(second, &mut result);
    copy_properties(first, &mut result);
    result
}

/// Compares the own members of two maps using [`PartialEq`].
pub fn equal_own_properties<V: PartialEq>(
    left: &(impl MapLike<V> + ?Sized),
    right: &(impl MapLike<V> + ?Sized),
) -> bool {
    equal_own_properties_by(left, right, V::eq)
}

/// Compares the own members of two maps using a custom value comparison.
///
/// Both maps must have the same set of keys, with `equal` holding for each pair of values.
pub fn equal_own_properties_by<V, L, R>(
    left: &L,
    right: &R,
    mut equal: impl FnMut(&V, &V) -> bool,
) -> bool
where
    L: MapLike<V> + ?Sized,
    R: MapLike<V> + ?Sized,
{
    left.own_entries().all(|(key, left_value)| {
        right
            .get_own(key)
            .is_some_and(|right_value| equal(left_value, right_value))
    }) && right.own_entries().all(|(key, _)| left.has_own(key))
}

/// Duplicates the own members of any record into a new record without a prototype.
pub fn clone_record<V: Clone>(object: &(impl MapLike<V> + ?Sized)) -> RawRecord<V> {
    let mut result = RawRecord::new();
    copy_properties(object, &mut result);
    result
}
