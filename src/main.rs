// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2site::{CommandLineInput, NotionHttpClient, SiteBuild, SiteConfig};
use std::fs;
use std::path::Path;

/// Sets up logging configuration. The console carries the run's progress
/// messages; a file log is only written when asked for.
fn setup_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stdout", Box::new(stdout_appender)),
    );
    let mut root = Root::builder().appender("stdout");

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file_appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
            )))
            .build(path)?;

        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        );
        root = root.appender("file");
    }

    let root_level = if log_file.is_some() {
        LevelFilter::Debug
    } else {
        log_level
    };
    let config = config.build(root.build(root_level))?;

    log4rs::init_config(config)?;
    if let Some(path) = log_file {
        log::debug!("Logging initialized. Log file: {}", path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose, cli.log_file.as_deref()).context("Failed to initialize logging")?;

    let config = SiteConfig::resolve(cli)?;
    log::debug!(
        "Database {} via {}",
        config.credentials.database_id,
        config.api_base_url
    );

    let client = NotionHttpClient::new(&config.credentials.token, config.api_base_url.clone())?;
    let report = SiteBuild::new(&config, &client)
        .run()
        .await
        .context("Site build failed")?;

    log::debug!(
        "{} entries, {} articles written, index {}",
        report.entry_count,
        report.articles_written,
        if report.index_updated {
            "updated"
        } else {
            "unchanged"
        }
    );

    Ok(())
}
