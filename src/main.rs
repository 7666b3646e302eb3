// src/main.rs

// Modules defined in the crate
mod actions;
mod api;
mod config;
mod constants;
mod error;
mod links;
mod output;
mod pipeline;
mod types;
mod workspace;

// Specific imports
use crate::actions::{issue_link, stage_publish};
use crate::api::{ExistenceProbe, HostingProbe, ProxiedProbe, RecorderClient};
use crate::config::{CommandLineInput, ProbeVariant, ToolbarCommand, ToolbarConfig};
use crate::error::AppError;
use crate::output::{OutputReport, SystemDelivery};
use crate::pipeline::SnapshotSource;
use crate::workspace::NotebookFile;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
///
/// Console output goes to stderr so pipe mode keeps stdout clean for
/// the URL it prints.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("nbshare.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the existence probe selected by the configuration.
fn build_probe(config: &ToolbarConfig) -> Result<Box<dyn ExistenceProbe>, AppError> {
    match config.probe_variant {
        ProbeVariant::Direct => {
            log::info!("Existence checks go directly to the hosting provider");
            Ok(Box::new(HostingProbe::new(
                config.hosting_api_base.clone(),
                config.owner.clone(),
                config.repo.clone(),
                config.github_token.as_ref(),
            )?))
        }
        ProbeVariant::Proxied => {
            log::info!("Existence checks go through the recording service");
            let client = RecorderClient::new(
                config.record_endpoint.clone(),
                config.lookup_endpoint.clone(),
                config.record_cookie.as_deref(),
            )?;
            Ok(Box::new(ProxiedProbe::new(
                client,
                config.owner.clone(),
                config.repo.clone(),
            )))
        }
    }
}

/// Runs the selected toolbar flow end to end: capture, one remote
/// question, URL derivation, delivery.
async fn execute_flow(config: &ToolbarConfig) -> Result<(), AppError> {
    let state = NotebookFile::new(config.notebook.clone()).capture()?;
    let delivery = SystemDelivery;

    match config.command {
        ToolbarCommand::Link => {
            let recorder = RecorderClient::new(
                config.record_endpoint.clone(),
                config.lookup_endpoint.clone(),
                config.record_cookie.as_deref(),
            )?;
            let outcome = issue_link(&recorder, &delivery, config, &state).await?;
            match &outcome.link {
                Some(link) => log::info!("Issued link: {}", link),
                None => log::warn!("No link issued for {}", state.path),
            }
            log_report(&outcome.report);
        }
        ToolbarCommand::Publish => {
            let probe = build_probe(config)?;
            let outcome = stage_publish(probe.as_ref(), &delivery, config, &state).await?;
            log::info!("Publication staged toward {}", outcome.destination.url());
            log_report(&outcome.report);
        }
    }

    Ok(())
}

/// Logs the delivery report. Failed operations were already logged as
/// they happened; this is the one-line summary.
fn log_report(report: &OutputReport) {
    log::info!(
        "Delivered {} of {} operations ({} bytes)",
        report.stats.operations_completed,
        report.stats.operations_completed + report.stats.operations_failed,
        report.stats.bytes_delivered
    );
    for failed in &report.failed {
        log::warn!("Undelivered: {:?} ({})", failed.operation, failed.error);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ToolbarConfig::resolve(cli)?;

    if let Err(e) = execute_flow(&config).await {
        // Remote trouble stays in the log; the run still counts as
        // normal. Only local mistakes (unreadable notebook, bad
        // configuration) fail the process.
        if e.is_diagnostic() {
            log::error!("Flow ended without output: {}", e);
        } else {
            return Err(e.into());
        }
    }

    Ok(())
}
