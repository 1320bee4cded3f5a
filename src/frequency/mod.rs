//! Exact frequency analysis
//!
//! This module counts element occurrences exactly and ranks elements by
//! count. The central type is [`FrequencyMap`], a per-call snapshot of how
//! often each distinct element occurs in a sequence; [`FrequencyExt`] exposes
//! the same analysis directly on slices.
//!
//! # Example
//!
//! ```
//! use collkit::frequency::FrequencyExt;
//!
//! let items = ["a", "b", "a", "c", "b", "a"];
//! let freq = items.frequencies();
//!
//! assert_eq!(freq.count_of(&"a"), 3);
//! assert_eq!(freq.total(), 6);
//! assert_eq!(freq.top(2), vec![("a", 3), ("b", 2)]);
//! ```

mod frequency_map;

pub use frequency_map::{FrequencyExt, FrequencyMap};
