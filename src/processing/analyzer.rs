//! Screening orchestration: one linear pass from raw text to report

use crate::error::Result;
use crate::processing::cleaner::clean_text;
use crate::processing::keywords::{extract_keywords, match_keywords};
use crate::processing::similarity::similarity;
use crate::processing::tagger::TagModel;
use serde::Serialize;
use std::sync::Arc;

/// Keyword caps: 40 from the job description, 200 from the resume, and a
/// 60-entry resume sample on display.
const JD_KEYWORD_CAP: usize = 40;
const RESUME_KEYWORD_CAP: usize = 200;
const RESUME_SAMPLE_LEN: usize = 60;

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    /// Cosine similarity in [0, 1].
    pub score: f64,
    pub jd_keywords: Vec<String>,
    pub resume_keywords: Vec<String>,
    pub present_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl ScreeningReport {
    /// Score as a percentage rounded to one decimal, for display.
    pub fn score_percent(&self) -> f64 {
        (self.score * 1000.0).round() / 10.0
    }

    /// First 60 resume keywords, the slice shown on the results page.
    pub fn resume_sample(&self) -> &[String] {
        let len = self.resume_keywords.len().min(RESUME_SAMPLE_LEN);
        &self.resume_keywords[..len]
    }
}

/// Runs the full screening pipeline. Holds the injected tag model; the
/// model is loaded once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct Screener {
    model: Arc<TagModel>,
}

impl Screener {
    pub fn new(model: Arc<TagModel>) -> Self {
        Self { model }
    }

    /// Clean both documents, score them, extract and match keywords.
    pub fn screen(&self, resume_text: &str, jd_text: &str) -> Result<ScreeningReport> {
        let resume_clean = clean_text(resume_text);
        let jd_clean = clean_text(jd_text);

        let score = similarity(&resume_clean, &jd_clean)?;

        let jd_keywords = extract_keywords(&self.model, &jd_clean, JD_KEYWORD_CAP);
        let resume_keywords = extract_keywords(&self.model, &resume_clean, RESUME_KEYWORD_CAP);
        let (present_keywords, missing_keywords) = match_keywords(&jd_keywords, &resume_keywords);

        Ok(ScreeningReport {
            score,
            jd_keywords,
            resume_keywords,
            present_keywords,
            missing_keywords,
        })
    }
}
