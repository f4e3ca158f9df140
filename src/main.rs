//! `mediadrop`: validate a local file and upload it to a media-hosting
//! endpoint, printing simulated progress and the resulting URL.

mod error;
mod local_file;
mod session;
mod transport;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use uploader::config::{API_BASE_VAR, CLOUD_NAME_VAR, TIMEOUT_SECS_VAR, UPLOAD_PRESET_VAR};
use uploader::{CandidateFile, PROGRESS_TICK, Rejection, UploadConfig, validate};

use crate::error::CliError;
use crate::local_file::LocalFile;

#[derive(Parser, Debug)]
#[command(name = "mediadrop", about = "Validate and upload a file to a media-hosting endpoint")]
struct Cli {
    /// Account namespace in the upload URL.
    #[arg(long, global = true, env = CLOUD_NAME_VAR)]
    cloud_name: Option<String>,

    /// Upload preset the endpoint applies.
    #[arg(long, global = true, env = UPLOAD_PRESET_VAR)]
    upload_preset: Option<String>,

    /// API base URL.
    #[arg(long, global = true, env = API_BASE_VAR)]
    api_base: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = TIMEOUT_SECS_VAR, value_name = "SECS")]
    timeout_secs: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a file against the upload rules without sending it.
    Check { path: PathBuf },
    /// Validate and upload a file.
    Upload { path: PathBuf },
}

impl Cli {
    fn config_value(&self, key: &str) -> Option<String> {
        match key {
            CLOUD_NAME_VAR => self.cloud_name.clone(),
            UPLOAD_PRESET_VAR => self.upload_preset.clone(),
            API_BASE_VAR => self.api_base.clone(),
            TIMEOUT_SECS_VAR => self.timeout_secs.clone(),
            _ => None,
        }
    }

    /// Config from flags, which clap already falls back to the environment for.
    fn upload_config(&self) -> Result<UploadConfig, CliError> {
        Ok(UploadConfig::from_lookup(|key| self.config_value(key))?)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Check { path } => {
            let file = LocalFile::open(path).await?;
            let verdict = validate(file.mime_type(), file.size());
            if let Some(report) = check_report(&file, verdict, cli.json)? {
                println!("{report}");
            }
            verdict.map_err(|reason| CliError::Rejected { name: file.name().to_owned(), reason })
        }
        Command::Upload { path } => {
            let config = cli.upload_config()?;
            let client = transport::build_client(&config)?;
            let file = LocalFile::open(path).await?;
            tracing::info!(endpoint = %config.endpoint(), name = file.name(), "uploading");

            let url = session::upload(&client, &config, file, session::timer_ticks(PROGRESS_TICK), |percent| {
                eprintln!("{}", session::progress_line(percent));
            })
            .await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "secure_url": url }))?);
            } else {
                println!("{url}");
            }
            Ok(())
        }
    }
}

/// Stdout report for `check`. A rejection in text mode has none; the error
/// line on stderr carries it.
fn check_report(file: &impl CandidateFile, verdict: Result<(), Rejection>, json: bool) -> Result<Option<String>, CliError> {
    if json {
        let value = serde_json::json!({
            "name": file.name(),
            "mime_type": file.mime_type(),
            "size": file.size(),
            "accepted": verdict.is_ok(),
            "reason": verdict.err().map(|r| r.to_string()),
        });
        return Ok(Some(serde_json::to_string_pretty(&value)?));
    }
    Ok(verdict
        .is_ok()
        .then(|| format!("{}: ok ({}, {} bytes)", file.name(), file.mime_type(), file.size())))
}
