//! Chirp body moderation
//!
//! Masks denylisted words before a chirp is stored.

/// Words replaced by [`MASK`]
pub const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// Replacement token for a masked word
pub const MASK: &str = "****";

/// Lowercase `body` and mask every denylisted word in it.
///
/// Matching is plain substring matching, one word at a time, so a word
/// embedded in a longer one is masked too (`kerfuffles` becomes `****s`).
/// The whole body comes back lowercase, not only the masked words.
pub fn clean_body(body: &str) -> String {
    PROFANE_WORDS
        .iter()
        .fold(body.to_lowercase(), |text, word| text.replace(word, MASK))
}
