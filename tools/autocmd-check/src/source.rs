//! Loading the editor's event vocabulary.
//!
//! The vocabulary comes either from a file or from a live `nvim --headless`
//! probe. The probe also tries to subscribe to every name in the table and
//! reports the ones Neovim refuses.

use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::SourceError;

/// Environment variable carrying the names to probe, as a JSON array.
const PROBE_NAMES_VAR: &str = "AUTOCMD_CHECK_NAMES";

/// Lua run inside Neovim. Writes `{"events": [...], "rejected": [...]}` to
/// stdout. Kept on one line so it fits a single `-c lua ...` argument.
const PROBE_SCRIPT: &str = concat!(
    "local names = vim.json.decode(os.getenv('AUTOCMD_CHECK_NAMES') or '[]') ",
    "local group = vim.api.nvim_create_augroup('autocmd_check', { clear = true }) ",
    "local rejected = {} ",
    "for _, name in ipairs(names) do ",
    "local ok = pcall(vim.api.nvim_create_autocmd, name, { group = group, callback = function() end }) ",
    "if not ok then table.insert(rejected, name) end ",
    "end ",
    "io.stdout:write(vim.json.encode({ events = vim.fn.getcompletion('', 'event'), rejected = rejected })) ",
    "io.stdout:flush()",
);

/// Event names known to the editor, plus any names it refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Every event name the editor recognizes, aliases included.
    pub events: Vec<String>,

    /// Table names the editor refused to subscribe to. Empty unless probed.
    pub rejected: Vec<String>,
}

/// Load a vocabulary from a file.
pub fn from_file(path: &Path) -> Result<Vocabulary, SourceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let vocabulary = parse_vocabulary(&contents)?;
    info!(
        path = %path.display(),
        events = vocabulary.events.len(),
        "loaded event list from file"
    );
    Ok(vocabulary)
}

/// Probe a Neovim binary for its vocabulary and try subscribing to `names`.
pub fn from_nvim(nvim: &Path, names: &[&str]) -> Result<Vocabulary, SourceError> {
    let names_json = serde_json::to_string(names)?;

    debug!(nvim = %nvim.display(), probed = names.len(), "starting nvim probe");
    let output = Command::new(nvim)
        .args(["--headless", "--clean", "-c"])
        .arg(format!("lua {PROBE_SCRIPT}"))
        .args(["-c", "qa!"])
        .env(PROBE_NAMES_VAR, names_json)
        .output()
        .map_err(|source| SourceError::Spawn {
            nvim: nvim.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(SourceError::ProbeFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let vocabulary = parse_probe_output(&stdout)?;
    info!(
        events = vocabulary.events.len(),
        rejected = vocabulary.rejected.len(),
        "nvim probe finished"
    );
    Ok(vocabulary)
}

/// Parse an event list.
///
/// Accepted forms:
/// - a JSON array of names
/// - a JSON object `{"events": [...], "rejected": [...]}` (saved probe output)
/// - one name per line; blank lines and `#` comments are ignored
pub fn parse_vocabulary(contents: &str) -> Result<Vocabulary, SourceError> {
    let trimmed = contents.trim_start();

    let vocabulary = if trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(trimmed)?;
        Vocabulary {
            events: string_list(&value, "event list").map_err(SourceError::Parse)?,
            rejected: Vec::new(),
        }
    } else if trimmed.starts_with('{') {
        let value: Value = serde_json::from_str(trimmed)?;
        vocabulary_from_object(&value).map_err(SourceError::Parse)?
    } else {
        Vocabulary {
            events: contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect(),
            rejected: Vec::new(),
        }
    };

    if vocabulary.events.is_empty() {
        return Err(SourceError::EmptyVocabulary);
    }

    Ok(vocabulary)
}

/// Extract the probe's JSON object from stdout. Neovim may print other
/// messages around it.
fn parse_probe_output(stdout: &str) -> Result<Vocabulary, SourceError> {
    let (Some(start), Some(end)) = (stdout.find('{'), stdout.rfind('}')) else {
        return Err(SourceError::ProbeOutput(preview(stdout)));
    };
    if end < start {
        return Err(SourceError::ProbeOutput(preview(stdout)));
    }

    let value: Value = serde_json::from_str(&stdout[start..=end])
        .map_err(|e| SourceError::ProbeOutput(e.to_string()))?;
    let vocabulary = vocabulary_from_object(&value).map_err(SourceError::ProbeOutput)?;

    if vocabulary.events.is_empty() {
        return Err(SourceError::EmptyVocabulary);
    }

    Ok(vocabulary)
}

fn vocabulary_from_object(value: &Value) -> Result<Vocabulary, String> {
    let events = value
        .get("events")
        .ok_or_else(|| "missing 'events' field".to_string())
        .and_then(|v| string_list(v, "events"))?;
    let rejected = match value.get("rejected") {
        Some(v) => string_list(v, "rejected")?,
        None => Vec::new(),
    };
    Ok(Vocabulary { events, rejected })
}

/// Reads a list of strings. An empty JSON object counts as an empty list,
/// since Lua encodes an empty table that way.
fn string_list(value: &Value, what: &str) -> Result<Vec<String>, String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| format!("{what}: expected string, got {item}"))
            })
            .collect(),
        Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        other => Err(format!("{what}: expected array, got {other}")),
    }
}

fn preview(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return "<empty>".to_string();
    }
    trimmed.chars().take(120).collect()
}
