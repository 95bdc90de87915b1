//! Comparing the event table with the editor's vocabulary.

use std::collections::{BTreeSet, HashSet};

use nvim_autocmd::{Event, ALIASES};
use serde::Serialize;

/// Every spelling the table knows: canonical names followed by aliases.
pub fn table_names() -> Vec<&'static str> {
    Event::ALL
        .iter()
        .map(|event| event.as_str())
        .chain(ALIASES.iter().map(|alias| alias.name))
        .collect()
}

/// Differences between the table and the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    /// Spellings in the table (canonical and alias).
    pub table_size: usize,

    /// Spellings reported by the editor.
    pub editor_size: usize,

    /// Known to the editor, absent from the table.
    pub missing: Vec<String>,

    /// In the table, unknown to the editor.
    pub stale: Vec<String>,

    /// In the table, but the editor refused a subscription.
    pub rejected: Vec<String>,
}

impl DriftReport {
    /// Compare the table against the editor's event names.
    ///
    /// Names are compared ignoring ASCII case, as Neovim does.
    pub fn compare(editor_events: &[String], rejected: &[String]) -> Self {
        let table = table_names();
        let table_folded: HashSet<String> =
            table.iter().map(|name| name.to_ascii_lowercase()).collect();
        let editor_folded: HashSet<String> = editor_events
            .iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();

        let missing: BTreeSet<String> = editor_events
            .iter()
            .filter(|name| !table_folded.contains(&name.to_ascii_lowercase()))
            .cloned()
            .collect();

        let stale: BTreeSet<String> = table
            .iter()
            .filter(|name| !editor_folded.contains(&name.to_ascii_lowercase()))
            .map(|name| name.to_string())
            .collect();

        let rejected: BTreeSet<String> = rejected.iter().cloned().collect();

        Self {
            table_size: table.len(),
            editor_size: editor_folded.len(),
            missing: missing.into_iter().collect(),
            stale: stale.into_iter().collect(),
            rejected: rejected.into_iter().collect(),
        }
    }

    /// True when nothing needs attention. Stale names only count under
    /// `strict`, since older Neovim builds lack newer events.
    pub fn is_clean(&self, strict: bool) -> bool {
        self.missing.is_empty() && self.rejected.is_empty() && (!strict || self.stale.is_empty())
    }
}
