//! Ordered map implemented by [Llrb] type, using
//! [left-leaning-red-black][wiki-llrb] tree.
//!
//! - Each entry in Llrb instance correspond to a {Key, Value} pair.
//! - Parametrised over `key-type` and `value-type`.
//! - CRUD operations, via put(), get(), delete() api.
//! - Order statistics, via min(), max(), floor(), ceiling(), rank() and
//!   select() api.
//! - Full table scan, range scan and reverse scan.
//! - Structural validation, via validate() api.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! CRUD operations on [Llrb] instance:
//!
//! ```
//! use llrb_map::Llrb;
//!
//! let mut index: Llrb<String, i32> = Llrb::new("myinstance");
//! assert_eq!(index.id(), "myinstance");
//!
//! index.put("key1".to_string(), 10);
//! index.put("key2".to_string(), 20);
//! assert_eq!(index.put("key2".to_string(), 30), Some(20));
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.get("key1"), Some(&10));
//! assert_eq!(index.delete("key1"), Some(10));
//! assert!(!index.contains("key1"));
//! ```
//!
//! Order statistics:
//!
//! ```
//! use llrb_map::Llrb;
//!
//! let mut index: Llrb<char, usize> = Llrb::new("order");
//! for (i, key) in "SEARCHEXAMPLE".chars().enumerate() {
//!     index.put(key, i);
//! }
//! assert_eq!(index.len(), 10);
//! assert_eq!(index.min(), Ok(&'A'));
//! assert_eq!(index.max(), Ok(&'X'));
//! assert_eq!(index.rank(&'H'), 3);
//! assert_eq!(index.select(3), Ok(&'H'));
//! assert_eq!(index.floor(&'G'), Some(&'E'));
//! assert_eq!(index.ceiling(&'Q'), Some(&'R'));
//!
//! let keys: String = index.keys_between(&'E', &'P').unwrap().collect();
//! assert_eq!(keys, "EHLMP");
//! assert_eq!(index.size_between(&'E', &'P'), Ok(5));
//! ```
//!
//! Range scan:
//!
//! ```
//! use llrb_map::Llrb;
//!
//! let mut index: Llrb<i64, i64> = Llrb::new("scan");
//! (0..10).for_each(|key| { index.put(key, key * 10); });
//!
//! let items: Vec<(i64, i64)> = index.range(3..6).collect();
//! assert_eq!(items, vec![(3, 30), (4, 40), (5, 50)]);
//!
//! let items: Vec<i64> = index.range(..=2).rev().map(|(k, _)| k).collect();
//! assert_eq!(items, vec![2, 1, 0]);
//!
//! assert!(index.validate().is_ok());
//! ```
//!
//! [wiki-llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

mod depth;
mod error;
mod iter;
mod llrb;
mod node;
mod query;
mod validate;

pub use crate::depth::Depth;
pub use crate::error::{Error, Violation};
pub use crate::iter::{Keys, Range, Reverse};
pub use crate::llrb::{Llrb, ITER_LIMIT};
pub use crate::validate::Stats;

#[cfg(test)]
mod validate_test;
