//! Extractive "summary" built by truncating the joined review texts.
//!
//! There is no scoring or language understanding here: the first reviews are
//! concatenated, cut into sentences at terminal punctuation, and the leading
//! sentences are returned.

use std::sync::LazyLock;

use regex::Regex;

use crate::reviews::Review;

/// Returned when there are no reviews to summarize.
pub const NO_REVIEWS_MESSAGE: &str = "Yorum bulunamadı.";

/// How many reviews feed the joined text.
pub const DEFAULT_MAX_REVIEWS: usize = 200;

/// How many sentences the summary keeps.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summarizer {
    max_reviews: usize,
    max_sentences: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REVIEWS, DEFAULT_MAX_SENTENCES)
    }
}

impl Summarizer {
    #[must_use]
    pub fn new(max_reviews: usize, max_sentences: usize) -> Self {
        Self {
            max_reviews,
            max_sentences,
        }
    }

    /// Joins the text of up to `max_reviews` reviews and returns the first
    /// `max_sentences` sentences, separated by single spaces.
    ///
    /// Returns [`NO_REVIEWS_MESSAGE`] if and only if `reviews` is empty.
    #[must_use]
    pub fn summarize(&self, reviews: &[Review]) -> String {
        if reviews.is_empty() {
            return NO_REVIEWS_MESSAGE.to_owned();
        }

        let joined = reviews
            .iter()
            .take(self.max_reviews)
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        split_sentences(&joined)
            .into_iter()
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Splits `text` after `.`, `!`, `?` or `…` wherever that character is
/// followed by whitespace. The whitespace run itself is dropped.
///
/// This is a heuristic: abbreviations such as "Dr. Smith" are split, and
/// trailing text with no terminal punctuation becomes the last sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for ws in WHITESPACE_RUN.find_iter(text) {
        let ends_sentence = text[..ws.start()]
            .chars()
            .next_back()
            .is_some_and(is_terminal_punctuation);
        if ends_sentence {
            sentences.push(&text[start..ws.start()]);
            start = ws.end();
        }
    }

    sentences.push(&text[start..]);
    sentences
}

fn is_terminal_punctuation(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}
