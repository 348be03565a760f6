//! TF-IDF vectorization and cosine similarity scoring

use crate::error::{Result, ScreenerError};
use std::collections::{HashMap, HashSet};

/// Vocabulary cap: the 5000 most frequent terms across the corpus.
const MAX_FEATURES: usize = 5000;

/// Common English stop words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "among", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing",
    "down", "during", "each", "either", "else", "ever", "every", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "least", "less", "may", "me", "might", "more", "most", "must", "my", "myself",
    "neither", "no", "nor", "not", "now", "of", "off", "often", "on", "once", "only", "or",
    "other", "others", "our", "ours", "ourselves", "out", "over", "own", "per", "rather",
    "same", "she", "should", "since", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "upon", "us", "very", "was", "we", "were",
    "what", "when", "where", "whether", "which", "while", "who", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// TF-IDF vectorizer over a small corpus: unigrams and bigrams, English
/// stop words removed, smoothed inverse document frequency, L2-normalized
/// rows. Vocabulary is capped by corpus frequency with a deterministic
/// tie-break on the term itself.
pub struct TfidfVectorizer {
    max_features: usize,
    stop_words: HashSet<&'static str>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            max_features: MAX_FEATURES,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Cap the vocabulary size (tests use small caps).
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Build the shared vocabulary over `docs` and return one weighted,
    /// L2-normalized vector per document.
    ///
    /// Fails with `EmptyCorpus` when no document contributes a single
    /// term after stop-word removal; a single empty document simply
    /// yields a zero vector.
    pub fn fit_transform(&self, docs: &[&str]) -> Result<Vec<Vec<f64>>> {
        let doc_terms: Vec<Vec<String>> = docs.iter().map(|d| self.terms(d)).collect();

        // Corpus-wide term counts drive the max_features selection.
        let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
        for terms in &doc_terms {
            for term in terms {
                *corpus_counts.entry(term).or_insert(0) += 1;
            }
        }
        if corpus_counts.is_empty() {
            return Err(ScreenerError::EmptyCorpus);
        }

        let mut ranked: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let vocab: HashMap<&str, usize> = ranked
            .iter()
            .enumerate()
            .map(|(idx, (term, _))| (*term, idx))
            .collect();

        // Document frequency per vocabulary term.
        let mut doc_freq = vec![0usize; vocab.len()];
        for terms in &doc_terms {
            let unique: HashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in unique {
                if let Some(&idx) = vocab.get(term) {
                    doc_freq[idx] += 1;
                }
            }
        }

        let n_docs = docs.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut rows = Vec::with_capacity(docs.len());
        for terms in &doc_terms {
            let mut row = vec![0.0f64; vocab.len()];
            for term in terms {
                if let Some(&idx) = vocab.get(term.as_str()) {
                    row[idx] += 1.0;
                }
            }
            for (value, idf) in row.iter_mut().zip(&idf) {
                *value *= idf;
            }
            l2_normalize(&mut row);
            rows.push(row);
        }
        Ok(rows)
    }

    /// Unigrams plus bigrams over stop-word-filtered tokens.
    fn terms(&self, doc: &str) -> Vec<String> {
        let tokens: Vec<&str> = doc
            .split_whitespace()
            .filter(|t| t.chars().count() > 1)
            .filter(|t| !self.stop_words.contains(t))
            .collect();

        let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    // Rows are already unit-length (or zero), so the dot product is the
    // cosine. Clamp to absorb floating error at the boundaries.
    a.iter().zip(b).map(|(x, y)| x * y).sum::<f64>().clamp(0.0, 1.0)
}

/// TF-IDF cosine similarity between exactly two cleaned documents, in
/// [0, 1].
pub fn similarity(a: &str, b: &str) -> Result<f64> {
    let rows = TfidfVectorizer::new().fit_transform(&[a, b])?;
    Ok(cosine(&rows[0], &rows[1]))
}
