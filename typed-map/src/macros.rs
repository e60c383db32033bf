/// Creates an unbranded [`TypedMap`](crate::TypedMap) from `key => value` pairs.
///
/// Later pairs overwrite earlier pairs with the same key.
///
/// ```
/// use typed_map::typed_map;
///
/// let map = typed_map! { "a" => 1, "b" => 2 };
/// assert_eq!(map.get("b"), Some(&2));
/// ```
#[macro_export]
macro_rules! typed_map {
    () => {
        $crate::TypedMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::TypedMap::new();
        $( map.set($key, $value); )+
        map
    }};
}

/// Creates a prototype-free [`RawRecord`](crate::RawRecord) from `key => value` pairs.
#[macro_export]
macro_rules! raw_record {
    () => {
        $crate::RawRecord::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::RawRecord::new();
        $( record.set($key, $value); )+
        record
    }};
}

/// Variadic [`assign`](crate::ops::assign) whose sources may all be of different
/// [`MapLike`](crate::MapLike) types.
///
/// Evaluates to the mutable reference to the target.
///
/// ```
/// use std::collections::BTreeMap;
///
/// use typed_map::{assign, raw_record, typed_map};
///
/// let mut target = typed_map! { "x" => 1 };
/// let plain = BTreeMap::from([("x".to_owned(), 4)]);
/// assign!(&mut target, &raw_record! { "x" => 2, "y" => 3 }, &plain);
///
/// assert_eq!(target, typed_map! { "x" => 4, "y" => 3 });
/// ```
#[macro_export]
macro_rules! assign {
    ($target:expr $(, $source:expr)* $(,)?) => {{
        let target = $target;
        $( $crate::ops::copy_properties($source, &mut *target); )*
        target
    }};
}
