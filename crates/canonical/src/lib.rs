//! Verbatim tokenization layer.
//!
//! Turns raw text into the token streams the excerpt matcher compares, and
//! provides the one comparison primitive it needs.
//!
//! ## What we do
//!
//! - Split text after every ASCII space, keeping the separator on the token
//! - Normalize tokens for comparison (trim spaces, fold case)
//! - Partition candidate tokens into those found in a subject text and those
//!   not found, as two ordered sets
//!
//! ## What we don't do
//!
//! No Unicode normalization, stemming, or punctuation stripping. Tokens are
//! compared by case-insensitive substring search, nothing smarter.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no hidden state. Every function here is total over
//! arbitrary UTF-8, the empty string included.
//!
//! ```rust
//! use canonical::{partition, tokenize};
//!
//! let reference = tokenize("The quick brown fox jumps");
//! let split = partition("the quick fox", &reference);
//! assert_eq!(split.found, vec!["the", "quick", "fox"]);
//! assert_eq!(split.not_found, vec!["brown", "jumps"]);
//! ```

mod normalize;
mod partition;
mod token;

pub use crate::normalize::{fold_case, normalize_token};
pub use crate::partition::{partition, TokenPartition};
pub use crate::token::{count_tokens, tokenize, Token, SEPARATOR};
