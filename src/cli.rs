//! CLI interface for the resume screener

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Resume vs job description similarity scoring and keyword gap analysis")]
#[command(
    long_about = "Scores a resume against a job description with TF-IDF cosine similarity and \
                  reports which job description keywords the resume covers. With --resume and \
                  --jd it runs a single scoring pass on the console; otherwise it serves the \
                  upload form on --host:--port."
)]
pub struct Cli {
    /// Path to resume text file (runs one-shot mode together with --jd)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Path to job description text file (runs one-shot mode together with --resume)
    #[arg(short, long)]
    pub jd: Option<PathBuf>,

    /// Address to bind the web form to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the web form to
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
