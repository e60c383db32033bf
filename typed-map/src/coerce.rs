use std::fmt::Display;

use paste::paste;

use crate::map::TypedMap;

macro_rules! impl_coerced_key_ops {
    (ref: $( $op:ident($($arg:ident: $arg_ty:ty),*) -> $ret:ty; )*) => { paste! { $(
        #[doc = concat!("[`TypedMap::", stringify!($op), "`] with a key converted via [`Display`].")]
        pub fn [<$op _coerced>](&self, key: impl Display $(, $arg: $arg_ty)*) -> $ret {
            self.$op(key.to_string().as_str() $(, $arg)*)
        }
    )* } };

    (mut: $( $op:ident($($arg:ident: $arg_ty:ty),*) -> $ret:ty; )*) => { paste! { $(
        #[doc = concat!("[`TypedMap::", stringify!($op), "`] with a key converted via [`Display`].")]
        pub fn [<$op _coerced>](&mut self, key: impl Display $(, $arg: $arg_ty)*) -> $ret {
            self.$op(key.to_string().as_str() $(, $arg)*)
        }
    )* } };
}

impl<V, B> TypedMap<V, B> {
    impl_coerced_key_ops! { ref:
        has() -> bool;
        get() -> Option<&V>;
    }

    impl_coerced_key_ops! { mut:
        get_mut() -> Option<&mut V>;
        set(value: V) -> &mut V;
        delete() -> Option<V>;
        get_or_update(compute: impl FnOnce(&str) -> V) -> &mut V;
    }
}
