//! Error handling and display for the checker.

use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;

/// Errors raised while loading the editor's event vocabulary.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid event list: {0}")]
    Parse(String),

    #[error("event list is empty")]
    EmptyVocabulary,

    #[error("failed to start {}: {source}", nvim.display())]
    Spawn {
        nvim: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("nvim probe exited with {status}: {stderr}")]
    ProbeFailed { status: String, stderr: String },

    #[error("unexpected nvim probe output: {0}")]
    ProbeOutput(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }

    if let Some(source_err) = err.downcast_ref::<SourceError>() {
        match source_err {
            SourceError::Spawn { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Install Neovim, pass --nvim, or set AUTOCMD_CHECK_NVIM.".yellow()
                );
            }
            SourceError::ProbeOutput(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: The probe needs Neovim 0.7 or newer (nvim_create_autocmd).".yellow()
                );
            }
            _ => {}
        }
    }
}
