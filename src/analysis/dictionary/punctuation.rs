//! English punctuation tokens.
//!
//! Membership is tested against the token exactly as the tokenizer produced
//! it. Symbols such as `$`, `%` or `#` are not punctuation.

use std::collections::HashSet;
use std::sync::LazyLock;

const ENGLISH_PUNCTUATION: &[&str] = &[
    "[", "]", "(", ")", "{", "}", "<", ">", ":", ",", ";", "-", "--", "---", "!", "?", ".",
    "...", "`", "``", "'", "''", "\"", "/",
];

static PUNCTUATION: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_PUNCTUATION.iter().copied().collect());

/// The shared punctuation set.
pub fn punctuation() -> &'static HashSet<&'static str> {
    &PUNCTUATION
}

/// Check whether a token is a recognised punctuation mark.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.contains(token)
}
