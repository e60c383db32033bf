//! String-keyed tables with strongly distinguished types.
//!
//! [`TypedMap`] is the container that symbol tables, lookup caches and grouping structures are
//! built from. Every string is a legitimate key of its own, and maps holding different value
//! types (or carrying different brands) can never be mixed up.
//!
//! [`RawRecord`] is the untyped counterpart used at boundaries. It may inherit members from a
//! prototype record, which is why the [`ops`] module only ever looks at own members.

pub mod brand;
pub mod error;
pub mod map;
pub mod map_like;
pub mod multimap;
pub mod ops;
pub mod record;

mod coerce;
mod macros;

pub use brand::Unbranded;
pub use error::{MapError, Result};
pub use map::TypedMap;
pub use map_like::{MapLike, MapLikeMut};
pub use multimap::MultiMap;
pub use record::RawRecord;
