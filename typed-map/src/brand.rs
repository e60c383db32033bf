//! Compile-time brands for [`TypedMap`](crate::TypedMap).
//!
//! A brand is any type used as the second type parameter of a map. It is never instantiated and
//! has no runtime footprint; it only makes the type checker reject passing e.g. a table of local
//! names where a table of exported names is expected, even though both hold the same values.
//!
//! ```
//! use typed_map::TypedMap;
//!
//! enum Exports {}
//!
//! fn export_count(exports: &TypedMap<u32, Exports>) -> usize {
//!     exports.len()
//! }
//!
//! let mut exports = TypedMap::new().brand::<Exports>();
//! exports.set("main", 0);
//! assert_eq!(export_count(&exports), 1);
//! ```
//!
//! A map with a different brand is rejected, even when it holds the same values:
//!
//! ```compile_fail
//! use typed_map::TypedMap;
//!
//! enum Locals {}
//! enum Exports {}
//!
//! fn export_count(exports: &TypedMap<u32, Exports>) -> usize {
//!     exports.len()
//! }
//!
//! let locals = TypedMap::<u32>::new().brand::<Locals>();
//! export_count(&locals);
//! ```
//!
//! So is an unbranded one:
//!
//! ```compile_fail
//! use typed_map::TypedMap;
//!
//! enum Exports {}
//!
//! fn export_count(exports: &TypedMap<u32, Exports>) -> usize {
//!     exports.len()
//! }
//!
//! export_count(&TypedMap::<u32>::new());
//! ```

/// The brand of maps that were never given one.
///
/// Uninhabited, like every other brand should be.
pub enum Unbranded {}
