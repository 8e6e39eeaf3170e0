//! Stateless data-preprocessing transforms.
//!
//! Every operation is a pure, single-pass function over a borrowed sequence
//! or string that returns a fresh result:
//!
//! - **cleaning**: missing-value removal and filling, order-preserving dedupe
//! - **numeric**: min-max normalization, z-score, clipping, integer and log coercion
//! - **text**: tokenization, punctuation and stopword removal
//! - **structural**: one-level flattening, seeded shuffling

pub mod cleaning;
pub mod error;
pub mod numeric;
pub mod structural;
pub mod text;

pub use cleaning::{fill_missing, remove_duplicates, remove_missing};
pub use error::{Result, TransformError};
pub use numeric::{
    clip, log_transform, normalize, parse_numbers, standardize, to_integers, values_to_integers,
};
pub use structural::{flatten, shuffle};
pub use text::{remove_punctuation, remove_stopwords, tokenize};
