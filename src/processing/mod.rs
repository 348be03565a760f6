//! Text processing: cleaning, scoring, keyword extraction and matching

pub mod analyzer;
pub mod cleaner;
pub mod keywords;
pub mod similarity;
pub mod tagger;

pub use analyzer::{Screener, ScreeningReport};
pub use tagger::TagModel;
