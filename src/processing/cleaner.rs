//! Text cleaning and normalization

use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\S+@\S+").expect("invalid email regex"))
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"http\S+|www\.\S+").expect("invalid URL regex"))
}

fn charset_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9\-\s+]").expect("invalid charset regex"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("invalid whitespace regex"))
}

/// Normalize raw document text for scoring and keyword extraction.
///
/// Drops email-like and URL-like tokens, replaces anything outside
/// `[A-Za-z0-9\-\s+]` with a space, collapses whitespace, trims and
/// lowercases. Idempotent: cleaning already-cleaned text is a no-op.
pub fn clean_text(text: &str) -> String {
    let text = email_regex().replace_all(text, " ");
    let text = url_regex().replace_all(&text, " ");
    let text = charset_regex().replace_all(&text, " ");
    let text = whitespace_regex().replace_all(&text, " ");
    text.trim().to_lowercase()
}
