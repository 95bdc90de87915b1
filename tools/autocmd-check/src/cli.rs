//! Command-line interface.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use nvim_autocmd::{Event, EventGroup};
use tracing::{info, warn};

use crate::config::Config;
use crate::output::{print_events, print_report, EventRow, OutputFormat};
use crate::report::{table_names, DriftReport};
use crate::source;

/// autocmd-check - inspect the autocmd event table and check it against Neovim.
#[derive(Debug, Parser)]
#[command(name = "autocmd-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the events in the table.
    List(ListArgs),

    /// Compare the table with a Neovim build or a saved event list.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Only list events in this group (buffer, read, write, options,
    /// lifecycle, various, terminal, ui).
    #[arg(long)]
    group: Option<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Read the editor's event names from a file instead of running nvim.
    ///
    /// Accepts a JSON array, saved probe output, or one name per line.
    #[arg(long)]
    events_file: Option<PathBuf>,

    /// Neovim binary to probe (overrides AUTOCMD_CHECK_NVIM).
    #[arg(long)]
    nvim: Option<PathBuf>,

    /// Also fail when the table has names this Neovim build doesn't know.
    #[arg(long)]
    strict: bool,
}

impl Cli {
    /// Run the command. Returns false when the check found drift.
    pub fn run(self, config: &Config) -> Result<bool> {
        let format = OutputFormat::from_flag(&self.format);

        match self.command {
            Commands::List(args) => {
                list(args, format)?;
                Ok(true)
            }
            Commands::Check(args) => check(args, config, format),
        }
    }
}

fn list(args: ListArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<EventRow> = match args.group.as_deref() {
        Some(group) => {
            let group: EventGroup = group.parse()?;
            group.events().map(EventRow::from).collect()
        }
        None => Event::ALL.iter().copied().map(EventRow::from).collect(),
    };

    print_events(&rows, format);
    Ok(())
}

fn check(args: CheckArgs, config: &Config, format: OutputFormat) -> Result<bool> {
    let vocabulary = match &args.events_file {
        Some(path) => {
            info!("subscription probe skipped, reading names from file");
            source::from_file(path)
                .with_context(|| format!("Failed to load event list from {:?}", path))?
        }
        None => {
            let nvim = args.nvim.clone().unwrap_or_else(|| config.nvim.clone());
            source::from_nvim(&nvim, &table_names())
                .with_context(|| format!("Failed to probe {:?}", nvim))?
        }
    };

    let report = DriftReport::compare(&vocabulary.events, &vocabulary.rejected);
    let clean = report.is_clean(args.strict);
    if !clean {
        warn!(
            missing = report.missing.len(),
            stale = report.stale.len(),
            rejected = report.rejected.len(),
            "event table drift detected"
        );
    }

    print_report(&report, args.strict, format);
    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_config() -> Config {
        Config {
            nvim: PathBuf::from("nvim"),
            log_level: "warn".to_string(),
            log_json: false,
        }
    }

    fn events_file(names: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for name in names {
            writeln!(file, "{name}").unwrap();
        }
        file
    }

    fn run(args: &[&str]) -> Result<bool> {
        let cli = Cli::try_parse_from(args)?;
        cli.run(&test_config())
    }

    #[test]
    fn test_list_all() {
        assert!(run(&["autocmd-check", "list", "--format", "json"]).unwrap());
    }

    #[test]
    fn test_list_group() {
        assert!(run(&["autocmd-check", "list", "--group", "terminal"]).unwrap());
    }

    #[test]
    fn test_list_unknown_group() {
        let err = run(&["autocmd-check", "list", "--group", "windows"]).unwrap_err();
        assert!(err.to_string().contains("unknown event group"));
    }

    #[test]
    fn test_check_clean_file() {
        let file = events_file(&table_names());
        let path = file.path().to_str().unwrap();
        assert!(run(&["autocmd-check", "check", "--events-file", path, "--strict"]).unwrap());
    }

    #[test]
    fn test_check_reports_missing_event() {
        let mut names = table_names();
        names.push("FutureEvent");
        let file = events_file(&names);
        let path = file.path().to_str().unwrap();
        assert!(!run(&["autocmd-check", "check", "--events-file", path]).unwrap());
    }

    #[test]
    fn test_check_stale_needs_strict() {
        let names: Vec<&str> = table_names()
            .into_iter()
            .filter(|name| *name != "SearchWrapped")
            .collect();
        let file = events_file(&names);
        let path = file.path().to_str().unwrap();
        assert!(run(&["autocmd-check", "check", "--events-file", path]).unwrap());
        assert!(!run(&["autocmd-check", "check", "--events-file", path, "--strict"]).unwrap());
    }

    #[test]
    fn test_check_missing_file() {
        let err = run(&["autocmd-check", "check", "--events-file", "/nonexistent/events.txt"])
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load event list"));
    }

    #[test]
    #[ignore = "requires nvim on PATH"]
    fn test_live_nvim_accepts_every_name() {
        let vocabulary = source::from_nvim(&test_config().nvim, &table_names()).unwrap();
        let report = DriftReport::compare(&vocabulary.events, &vocabulary.rejected);
        assert!(report.rejected.is_empty(), "rejected: {:?}", report.rejected);
    }
}
