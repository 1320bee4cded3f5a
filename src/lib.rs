//! # Collkit
//!
//! Small, self-contained extension utilities for built-in value types.
//!
//! Collkit adds the missing conveniences to slices, numbers, strings, and
//! dates: deduplication, chunking, grouping, frequency analysis, numeric
//! interpolation, string validation, and calendar arithmetic. Every
//! operation is a pure, synchronous transformation of its input with no
//! shared state and no I/O.
//!
//! ## Features
//!
//! - **Deduplication**: ordered and unordered uniqueness, duplicate detection
//! - **Chunking**: order-preserving partition into fixed-size groups
//! - **Grouping**: stable partition by derived key, key/value map building
//! - **Frequency Analysis**: exact counts, top/bottom-K ranking, percentages
//! - **Numeric Extensions**: rounding, interpolation, range mapping
//! - **String Extensions**: character-class validation, grouped-number parsing
//! - **Date Extensions**: day boundaries, weekday search, day arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use collkit::prelude::*;
//!
//! let visits = ["alice", "bob", "alice", "carol", "bob", "alice"];
//!
//! // Who showed up, in order of first visit?
//! assert_eq!(visits.unique_ordered(), vec!["alice", "bob", "carol"]);
//!
//! // Who showed up most often?
//! assert_eq!(visits.top_frequent(2), vec![("alice", 3), ("bob", 2)]);
//! ```
//!
//! ## Degenerate Inputs
//!
//! No operation in this crate raises for malformed input. Empty sequences
//! produce empty results, absent extremes are `None`, and a chunk size or
//! ranking count of zero yields an empty collection. See each operation's
//! documentation for its exact contract.
//!
//! ## Feature Flags
//!
//! Algorithm families (all enabled by default, pick what you need):
//! - `sequence`: deduplication, chunking, grouping
//! - `frequency`: exact frequency maps and ranking
//! - `numeric`: float and integer extensions
//! - `strings`: validation and grouped-number parsing (pulls `regex`)
//! - `datetime`: calendar arithmetic (pulls `chrono`)
//! - `full`: enable all algorithm families
//!
//! Platform features:
//! - `serde`: enable serialization of [`FrequencyMap`](frequency::FrequencyMap)

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "sequence")]
#[cfg_attr(docsrs, doc(cfg(feature = "sequence")))]
pub mod sequence;

#[cfg(feature = "frequency")]
#[cfg_attr(docsrs, doc(cfg(feature = "frequency")))]
pub mod frequency;

#[cfg(feature = "numeric")]
#[cfg_attr(docsrs, doc(cfg(feature = "numeric")))]
pub mod numeric;

#[cfg(feature = "strings")]
#[cfg_attr(docsrs, doc(cfg(feature = "strings")))]
pub mod strings;

#[cfg(feature = "datetime")]
#[cfg_attr(docsrs, doc(cfg(feature = "datetime")))]
pub mod datetime;

pub mod prelude {
    #[cfg(feature = "sequence")]
    pub use crate::sequence::{ChunkExt, DedupExt, GroupExt};

    #[cfg(feature = "frequency")]
    pub use crate::frequency::{FrequencyExt, FrequencyMap};

    #[cfg(feature = "numeric")]
    pub use crate::numeric::{FloatExt, IntExt};

    #[cfg(feature = "strings")]
    pub use crate::strings::StrExt;

    #[cfg(feature = "datetime")]
    pub use crate::datetime::DateExt;
}

#[cfg(feature = "frequency")]
pub use frequency::FrequencyMap;
