//! Output rendering for the CLI

pub mod console;
