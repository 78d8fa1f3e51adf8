use crate::{
    bump::{orchestrator, patcher::WriteMode, summary},
    config::BumpConfig,
    error::BumpError,
    types::version::Version,
    utils::{
        ci::{self, OutputConfig},
        logger::{LogLevel, Logger},
        version::get_version,
    },
};
use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum, error::ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

mod bump;
mod config;
mod error;
mod types;
mod utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "addonbump")]
#[command(author = "Devaloop")]
#[command(about = "Propagate a new version into an addon's .toc manifest and .lua source")]
struct Cli {
    /// New version, MAJOR.MINOR.PATCH (e.g. 2.9.0)
    #[arg(value_name = "VERSION")]
    new_version: Option<String>,

    /// Directory holding the target files
    #[arg(short = 'C', long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Config file (defaults to addonbump.toml in the target directory, if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show what would change without writing
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> ExitCode {
    let version: &'static str = Box::leak(format!("v{}", get_version()).into_boxed_str());
    let cmd = Cli::command().version(version);

    let cli = match cmd
        .try_get_matches()
        .and_then(|m| Cli::from_arg_matches(&m))
    {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let output = OutputConfig::new(
        ci::is_ci(|k| std::env::var(k).ok()),
        cli.no_color,
    );
    let logger = match cli.format {
        Format::Json => Logger::stderr(output.color),
        Format::Text => Logger::new(output.color),
    };

    match run(&cli, output) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            match e.downcast_ref::<BumpError>() {
                Some(err) => {
                    logger.log_message(LogLevel::Error, &err.to_string());
                    if matches!(err, BumpError::MissingArgument) {
                        logger.log_message(
                            LogLevel::Info,
                            "Usage: addonbump <version>   (e.g. addonbump 2.9.0)",
                        );
                    }
                    ExitCode::from(err.exit_code())
                }
                None => {
                    logger.log_message(LogLevel::Error, &format!("{:#}", e));
                    ExitCode::from(1)
                }
            }
        }
    }
}

fn run(cli: &Cli, output: OutputConfig) -> anyhow::Result<u8> {
    let raw = cli.new_version.as_deref().ok_or(BumpError::MissingArgument)?;
    let version = Version::parse(raw)?;

    let root = match &cli.dir {
        Some(d) => d.clone(),
        None => std::env::current_dir().context("Failed to get current dir")?,
    };
    let config = BumpConfig::load(&root, cli.config.as_deref())?;

    let mode = if cli.dry_run {
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };
    let run = orchestrator::bump(&root, &version, &config, mode);

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&run.report)
                .context("Failed to serialize report")?;
            println!("{}", json);
        }
        Format::Text => {
            let manifest = utils::fs::to_unix_string(&config.source.path);
            summary::print_summary(&run, &manifest, output);
        }
    }

    Ok(run.report.status.exit_code())
}
