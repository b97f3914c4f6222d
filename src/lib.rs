//! Red-black tree map with pluggable key ordering.
//!
//! This crate provides [`TreeMap`], an ordered map whose entries are kept in
//! the order of a [`Comparator`] chosen at construction:
//!
//! - O(log n) [`get`](TreeMap::get), [`insert`](TreeMap::insert) and
//!   [`remove`](TreeMap::remove), guaranteed by red-black balancing
//! - Natural ([`Ord`]) order by default, or any closure / [`Comparator`],
//!   optionally reversed with [`comparator::Directed`]
//! - Cached ordered views: [`keys`](TreeMap::keys), [`values`](TreeMap::values)
//!   and [`entries`](TreeMap::entries) as slices, rebuilt only after the map
//!   changes
//! - The container-neutral [`Map`] trait
//!
//! # Example
//!
//! ```
//! use rb_treemap::TreeMap;
//! use rb_treemap::comparator::{self, Order};
//!
//! let mut ranking = TreeMap::with_comparator(comparator::natural(Order::Desc));
//! ranking.insert(85, "Bob");
//! ranking.insert(100, "Alice");
//! ranking.insert(92, "Carol");
//!
//! assert_eq!(ranking.values(), ["Alice", "Carol", "Bob"]);
//! assert_eq!(ranking.first_key_value(), Some((&100, &"Alice")));
//! ```
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their parent and children by index
//! rather than by pointer, so the parent back-links never form owning cycles.
//! Removed slots are recycled by later insertions.
//!
//! # Features
//!
//! - **`serde`** - `Serialize`/`Deserialize` for [`TreeMap`] as a map.

// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod comparator;
mod error;
mod map;
mod raw;

pub mod tree_map;

pub use comparator::{Comparator, Natural};
pub use error::{Error, Result};
pub use map::Map;
pub use tree_map::TreeMap;
