//! Keyword extraction and matching

use crate::processing::tagger::TagModel;
use std::collections::HashMap;

/// Extract the `top_n` most frequent keyword lemmas from cleaned text.
///
/// Tokens tagged noun, proper noun or adjective are lemmatized and
/// counted; ties rank by first occurrence, which keeps repeated runs on
/// identical input stable. Empty input yields an empty list.
pub fn extract_keywords(model: &TagModel, text: &str, top_n: usize) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, token) in text.split_whitespace().enumerate() {
        let tag = model.tag(token);
        if !tag.is_keyword() {
            continue;
        }
        let lemma = model.lemma(token, tag);
        let entry = counts.entry(lemma).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then_with(|| a.1 .1.cmp(&b.1 .1)));
    ranked.into_iter().take(top_n).map(|(lemma, _)| lemma).collect()
}

/// Partition job-description keywords into those covered by the resume
/// and those missing from it.
///
/// A keyword counts as present when it occurs as a substring of any
/// resume keyword, so "test" is covered by "testing". Both partitions
/// preserve the job-description ordering.
pub fn match_keywords(
    jd_keywords: &[String],
    resume_keywords: &[String],
) -> (Vec<String>, Vec<String>) {
    let resume_set: std::collections::HashSet<&str> =
        resume_keywords.iter().map(String::as_str).collect();

    jd_keywords
        .iter()
        .cloned()
        .partition(|keyword| resume_set.iter().any(|r| r.contains(keyword.as_str())))
}
