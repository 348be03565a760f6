//! Part-of-speech tagging and lemmatization
//!
//! `TagModel` is constructed explicitly and injected wherever tagging is
//! needed; there is no lazily-initialized module state. The default model
//! parses a lexicon embedded at compile time, so `load()` never touches
//! the filesystem; `from_path` swaps in a custom lexicon.

use crate::error::{Result, ScreenerError};
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_LEXICON: &str = include_str!("../../data/tagger_lexicon.tsv");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Adverb,
    Number,
    Function,
}

impl PosTag {
    /// Nouns, proper nouns and adjectives are keyword candidates.
    pub fn is_keyword(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Adjective)
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "noun" => Some(PosTag::Noun),
            "propn" => Some(PosTag::ProperNoun),
            "adj" => Some(PosTag::Adjective),
            "verb" => Some(PosTag::Verb),
            "adv" => Some(PosTag::Adverb),
            "func" => Some(PosTag::Function),
            _ => None,
        }
    }
}

/// Lexicon-backed tagger with suffix heuristics for out-of-vocabulary
/// tokens. Input is expected to be cleaned (lowercase) text.
pub struct TagModel {
    lexicon: HashMap<String, PosTag>,
}

impl TagModel {
    /// Build the model from the embedded lexicon.
    pub fn load() -> Result<Self> {
        Self::parse(EMBEDDED_LEXICON)
    }

    /// Build the model from a custom lexicon file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    fn parse(data: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();
        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, tag) = line.split_once('\t').ok_or_else(|| {
                ScreenerError::ModelLoad(format!("lexicon line {}: missing tab", lineno + 1))
            })?;
            let tag = PosTag::parse(tag.trim()).ok_or_else(|| {
                ScreenerError::ModelLoad(format!(
                    "lexicon line {}: unknown tag '{}'",
                    lineno + 1,
                    tag.trim()
                ))
            })?;
            lexicon.insert(word.to_string(), tag);
        }
        if lexicon.is_empty() {
            return Err(ScreenerError::ModelLoad("lexicon is empty".to_string()));
        }
        Ok(Self { lexicon })
    }

    /// Tag a single token. Lexicon entries win; unknown tokens fall back
    /// to suffix heuristics and finally to the open noun class.
    pub fn tag(&self, token: &str) -> PosTag {
        if let Some(&tag) = self.lexicon.get(token) {
            return tag;
        }
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Number;
        }

        let len = token.chars().count();
        if len > 4 && token.ends_with("ly") {
            return PosTag::Adverb;
        }
        if len > 5 && token.ends_with("ing") {
            return PosTag::Verb;
        }
        if len > 4 && token.ends_with("ed") {
            return PosTag::Adjective;
        }
        const ADJ_SUFFIXES: &[&str] = &[
            "ful", "ous", "ive", "ible", "able", "ish", "less", "ic", "al",
        ];
        if len > 4 && ADJ_SUFFIXES.iter().any(|s| token.ends_with(s)) {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }

    /// Dictionary base form of a token. Only nouns are reduced; proper
    /// nouns and adjectives pass through unchanged.
    pub fn lemma(&self, token: &str, tag: PosTag) -> String {
        if tag != PosTag::Noun {
            return token.to_string();
        }
        if let Some(&singular) = IRREGULAR_PLURALS
            .iter()
            .find(|(plural, _)| *plural == token)
            .map(|(_, singular)| singular)
        {
            return singular.to_string();
        }
        if token.chars().count() <= 3 {
            return token.to_string();
        }
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
        for suffix in ["sses", "ches", "shes", "xes", "zes"] {
            if let Some(stem) = token.strip_suffix(suffix) {
                return format!("{}{}", stem, &suffix[..suffix.len() - 2]);
            }
        }
        if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
            return token.to_string();
        }
        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }
        token.to_string()
    }
}

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("analyses", "analysis"),
    ("criteria", "criterion"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TagModel {
        TagModel::load().unwrap()
    }

    #[test]
    fn embedded_lexicon_loads() {
        let model = model();
        assert_eq!(model.tag("the"), PosTag::Function);
        assert_eq!(model.tag("python"), PosTag::ProperNoun);
    }

    #[test]
    fn malformed_lexicon_is_a_model_error() {
        assert!(matches!(
            TagModel::parse("word without a tab"),
            Err(ScreenerError::ModelLoad(_))
        ));
        assert!(matches!(
            TagModel::parse("word\tbogus"),
            Err(ScreenerError::ModelLoad(_))
        ));
        assert!(matches!(
            TagModel::parse("# comments only\n"),
            Err(ScreenerError::ModelLoad(_))
        ));
    }

    #[test]
    fn loads_custom_lexicon_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.tsv");
        std::fs::write(&path, "ferris\tpropn\n").unwrap();

        let model = TagModel::from_path(&path).unwrap();
        assert_eq!(model.tag("ferris"), PosTag::ProperNoun);
    }

    #[test]
    fn missing_lexicon_file_is_an_io_error() {
        assert!(matches!(
            TagModel::from_path(Path::new("no/such/lexicon.tsv")),
            Err(ScreenerError::Io(_))
        ));
    }

    #[test]
    fn suffix_heuristics_cover_unknown_tokens() {
        let model = model();
        assert_eq!(model.tag("quickly"), PosTag::Adverb);
        assert_eq!(model.tag("looking"), PosTag::Verb);
        assert_eq!(model.tag("experienced"), PosTag::Adjective);
        assert_eq!(model.tag("scalable"), PosTag::Adjective);
        assert_eq!(model.tag("developer"), PosTag::Noun);
        assert_eq!(model.tag("2024"), PosTag::Number);
    }

    #[test]
    fn gerund_nouns_stay_nouns() {
        let model = model();
        assert_eq!(model.tag("engineering"), PosTag::Noun);
        assert_eq!(model.tag("marketing"), PosTag::Noun);
    }

    #[test]
    fn keyword_classes() {
        assert!(PosTag::Noun.is_keyword());
        assert!(PosTag::ProperNoun.is_keyword());
        assert!(PosTag::Adjective.is_keyword());
        assert!(!PosTag::Verb.is_keyword());
        assert!(!PosTag::Adverb.is_keyword());
        assert!(!PosTag::Number.is_keyword());
        assert!(!PosTag::Function.is_keyword());
    }

    #[test]
    fn noun_lemmas_reduce_plurals() {
        let model = model();
        assert_eq!(model.lemma("skills", PosTag::Noun), "skill");
        assert_eq!(model.lemma("technologies", PosTag::Noun), "technology");
        assert_eq!(model.lemma("classes", PosTag::Noun), "class");
        assert_eq!(model.lemma("boxes", PosTag::Noun), "box");
        assert_eq!(model.lemma("people", PosTag::Noun), "person");
        assert_eq!(model.lemma("experience", PosTag::Noun), "experience");
        // -ss / -us / -is endings are not plurals.
        assert_eq!(model.lemma("business", PosTag::Noun), "business");
        assert_eq!(model.lemma("analysis", PosTag::Noun), "analysis");
    }

    #[test]
    fn proper_nouns_and_adjectives_pass_through() {
        let model = model();
        assert_eq!(model.lemma("kubernetes", PosTag::ProperNoun), "kubernetes");
        assert_eq!(model.lemma("aws", PosTag::ProperNoun), "aws");
        assert_eq!(model.lemma("experienced", PosTag::Adjective), "experienced");
    }
}
