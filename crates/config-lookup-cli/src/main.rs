//! config-lookup — print one value from `./config.json`.
//!
//! # Usage
//!
//! ```text
//! config-lookup [OPTIONS] <KEY>
//!
//! Options:
//!   --strict   Fail with a message when the key is missing or the file is unusable
//!   --pretty   Pretty-print objects and arrays
//!   --raw      Print string values without JSON quotes
//! ```
//!
//! The file is always `config.json` in the directory the command runs from;
//! there is no flag or environment variable to point it elsewhere.
//!
//! # Exit status
//!
//! | Outcome                         | Default mode            | `--strict`                  |
//! |---------------------------------|-------------------------|-----------------------------|
//! | key present                     | 0, value on stdout      | 0, value on stdout          |
//! | key missing                     | 1, nothing printed      | 1, "not present" on stderr  |
//! | file missing / unreadable / bad | 1, one log line, stderr | 1, error chain on stderr    |
//!
//! # Logging
//!
//! Diagnostics are written to stderr through `tracing`.  The level is
//! controlled by `RUST_LOG` (default `warn`), e.g. `RUST_LOG=debug`.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use config_lookup::{ConfigLookup, ConfigStore, ConfigValue, CONFIG_FILE_NAME};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Print the value stored under a top-level key of ./config.json.
#[derive(Debug, Parser)]
#[command(
    name = "config-lookup",
    about = "Print the value stored under a top-level key of ./config.json",
    version
)]
struct Cli {
    /// Top-level key to look up.  Matched exactly; dots are not path separators.
    key: String,

    /// Report a missing key or an unusable file as an error instead of
    /// silently exiting with status 1.
    #[arg(long)]
    strict: bool,

    /// Pretty-print objects and arrays.
    #[arg(long)]
    pretty: bool,

    /// Print string values without surrounding JSON quotes.
    #[arg(long)]
    raw: bool,
}

/// Result of a successful run, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Found,
    Absent,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Found => ExitCode::SUCCESS,
            Outcome::Absent => ExitCode::FAILURE,
        }
    }
}

/// Formats `value` for stdout, or `None` when there is nothing to print.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
fn render(value: &ConfigValue, pretty: bool, raw: bool) -> anyhow::Result<Option<String>> {
    let text = match value {
        ConfigValue::Absent => return Ok(None),
        ConfigValue::String(s) if raw => s.clone(),
        other if pretty => serde_json::to_string_pretty(other)?,
        other => serde_json::to_string(other)?,
    };
    Ok(Some(text))
}

/// Looks up `cli.key` and writes the rendered value to `out`.
///
/// # Errors
///
/// In `--strict` mode, a missing key or an unusable file is returned as an
/// error.  In either mode, failing to write to `out` is an error.
fn run<S: ConfigStore>(
    cli: &Cli,
    lookup: &ConfigLookup<S>,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let value = if cli.strict {
        let value = lookup
            .resolve(&cli.key)
            .with_context(|| format!("could not look up key '{}'", cli.key))?;
        if value.is_absent() {
            bail!("key '{}' is not present in {}", cli.key, CONFIG_FILE_NAME);
        }
        value
    } else {
        lookup.lookup(&cli.key)
    };

    debug!(key = %cli.key, kind = value.type_name(), "lookup finished");

    match render(&value, cli.pretty, cli.raw)? {
        Some(text) => {
            writeln!(out, "{text}").context("failed to write value to stdout")?;
            Ok(Outcome::Found)
        }
        None => Ok(Outcome::Absent),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout carries only the value.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lookup = ConfigLookup::in_working_dir();

    let stdout = std::io::stdout();
    let outcome = run(&cli, &lookup, &mut stdout.lock())?;
    Ok(outcome.into())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
