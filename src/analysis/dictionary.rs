//! Built-in English dictionaries.
//!
//! - [`stop_words`] - the four named stop word lists
//! - [`punctuation`] - the English punctuation token set
//!
//! Every dictionary is a process-wide set built on first use and never
//! modified afterwards.

pub mod punctuation;
pub mod stop_words;

pub use punctuation::{is_punctuation, punctuation};
pub use stop_words::{StopWordList, stop_words};
