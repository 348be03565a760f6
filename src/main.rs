//! Resume screener: resume vs job description scoring on the console or
//! behind a small web form

use clap::Parser;
use log::{error, info};
use resume_screener::cli::Cli;
use resume_screener::input::DocumentSource;
use resume_screener::output::console;
use resume_screener::processing::{Screener, TagModel};
use resume_screener::web::{self, AppState};
use resume_screener::{Config, Result};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::from_env();

    if let Err(e) = run(cli, config).await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    match (cli.resume, cli.jd) {
        // One-shot console mode: a model load failure aborts the run.
        (Some(resume_path), Some(jd_path)) => {
            let model = Arc::new(TagModel::load()?);
            let screener = Screener::new(model);

            let resume_text = DocumentSource::Path(resume_path).read().await?;
            let jd_text = DocumentSource::Path(jd_path).read().await?;

            let report = screener.screen(&resume_text, &jd_text)?;
            console::print_report(&report);
            Ok(())
        }
        // Web mode: the model is loaded once, before serving.
        _ => {
            let model = Arc::new(TagModel::load()?);
            info!("tagger model loaded");

            let state = AppState {
                screener: Screener::new(model),
                config,
            };
            web::serve(&cli.host, cli.port, state).await
        }
    }
}
