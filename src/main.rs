//! Staff Directory - Main entry point
//!
//! Runs either the interactive prompt or, with `-c`, a fixed list of
//! commands. Stdout carries the transcript; logs go to stderr.

use anyhow::{bail, Result};
use clap::Parser;
use staff_directory::view::render_roster;
use staff_directory::{AuditLog, Config, DirectoryService, JsonRosterStorage};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "staff-directory", version, about = "Command-line employee directory")]
struct Cli {
    /// JSON data file (overrides STAFF_DIRECTORY_DATA_FILE)
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// Audit trail file (overrides STAFF_DIRECTORY_AUDIT_LOG)
    #[arg(long, value_name = "PATH")]
    audit_log: Option<PathBuf>,

    /// Start empty instead of with sample data when the data file is missing
    #[arg(long)]
    no_sample: bool,

    /// Run this command and exit; may be repeated
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout stays a clean transcript)
    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    apply_overrides(&mut config, &cli);
    info!(data_file = %config.data_file.display(), audit = ?config.audit_log, "Starting staff directory");

    let storage = Box::new(JsonRosterStorage::new(&config.data_file));
    let audit = config.audit_log.as_ref().map(AuditLog::new);
    let mut service = DirectoryService::open(storage, audit, config.seed_sample);

    if cli.commands.is_empty() {
        run_interactive(&mut service)
    } else {
        run_batch(&mut service, &cli.commands)
    }
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(path) = &cli.data_file {
        config.data_file = path.clone();
    }
    if let Some(path) = &cli.audit_log {
        config.audit_log = Some(path.clone());
    }
    if cli.no_sample {
        config.seed_sample = false;
    }
}

/// Execute one line and print its result. Returns `(succeeded, exit)`.
fn run_line(service: &mut DirectoryService, line: &str, out: &mut impl Write) -> Result<(bool, bool)> {
    match service.execute(line) {
        Ok(outcome) => {
            writeln!(out, "{}", outcome.feedback.trim_end())?;
            if outcome.show_roster {
                write!(out, "{}", render_roster(service.roster()))?;
            }
            Ok((true, outcome.exit))
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok((false, false))
        }
    }
}

fn run_batch(service: &mut DirectoryService, commands: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for line in commands {
        writeln!(out, "> {line}")?;
        let (ok, exit) = run_line(service, line, &mut out)?;
        if !ok {
            failures += 1;
        }
        if exit {
            break;
        }
    }

    if failures > 0 {
        bail!("{failures} command(s) failed");
    }
    Ok(())
}

fn run_interactive(service: &mut DirectoryService) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Staff directory. Type 'help' for commands, 'exit' to quit.")?;
    write!(out, "{}", render_roster(service.roster()))?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (_, exit) = run_line(service, &line, &mut out)?;
        if exit {
            break;
        }
    }

    info!("Staff directory shutdown complete");
    Ok(())
}
