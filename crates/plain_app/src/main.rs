//! `plain`: print the readable text of a web page, or write it to a file.
mod cli;
mod logging;
mod output;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use plain_engine::{make_plain, FetchSettings, LogSink, ReqwestFetcher, SelectorExtractor};
use plain_logging::{plain_error, plain_info};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
    logging::initialize();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            plain_error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let extractor = SelectorExtractor::text_tags()?;
    let sink = LogSink;

    plain_info!("reading {}", cli.url);
    let text = runtime
        .block_on(make_plain(&cli.url, &fetcher, &extractor, &sink))
        .with_context(|| format!("no text produced for {}", cli.url))?;

    let mut stdout = io::stdout().lock();
    output::route(&text, cli.destination(), &mut stdout, &sink)
}
