//! Input handling: document sources and text loading

pub mod source;

pub use source::DocumentSource;
