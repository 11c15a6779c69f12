//! Normalization from raw upstream review items to [`revsum_core::Review`].

use std::sync::LazyLock;

use regex::Regex;
use revsum_core::Review;
use serde_json::{Map, Value};

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static regex is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex is valid"));

/// Strips `<...>` tags (each replaced by a space), turns line breaks into
/// spaces, collapses whitespace runs to one space and trims the result.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
#[must_use]
pub fn normalize_text(input: &str) -> String {
    let without_tags = TAG.replace_all(input, " ");
    let without_breaks = without_tags.replace(['\r', '\n'], " ");
    WHITESPACE_RUN
        .replace_all(&without_breaks, " ")
        .trim()
        .to_owned()
}

/// Builds a [`Review`] from one upstream `items` entry.
///
/// Returns `None` when the item is not a JSON object or its `reviewText`
/// normalizes to an empty string (a non-string `reviewText` counts as empty).
///
/// Fields of the wrong JSON type become `None`. A missing `helpfulCount`
/// defaults to `0` and a missing `verifiedPurchase` to `false`; an explicit
/// `null` for either stays `None`.
#[must_use]
pub fn normalize_review(item: Value) -> Option<Review> {
    let Value::Object(raw) = item else {
        return None;
    };

    let text = normalize_text(
        raw.get("reviewText")
            .and_then(Value::as_str)
            .unwrap_or_default(),
    );
    if text.is_empty() {
        return None;
    }

    Some(Review {
        text,
        rating: raw.get("rate").and_then(Value::as_f64),
        date: string_field(&raw, "submissionDate"),
        author: string_field(&raw, "userName"),
        helpful: raw.get("helpfulCount").map_or(Some(0), Value::as_i64),
        verified: raw
            .get("verifiedPurchase")
            .map_or(Some(false), Value::as_bool),
        raw,
    })
}

fn string_field(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
