//! Output formatting for checker commands.

use colored::Colorize;
use nvim_autocmd::Event;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::report::DriftReport;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Anything other than `json` falls back to a table.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// One row of the event table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct EventRow {
    #[tabled(rename = "Event")]
    pub name: &'static str,

    #[tabled(rename = "Group")]
    pub group: &'static str,

    #[tabled(rename = "Nvim Only")]
    #[tabled(display = "display_flag")]
    pub neovim_only: bool,

    #[tabled(rename = "Aliases")]
    #[tabled(display = "display_list")]
    pub aliases: Vec<&'static str>,

    #[tabled(rename = "Description")]
    pub description: &'static str,
}

impl From<Event> for EventRow {
    fn from(event: Event) -> Self {
        Self {
            name: event.as_str(),
            group: event.group().as_str(),
            neovim_only: event.is_neovim_only(),
            aliases: event.aliases().collect(),
            description: event.description(),
        }
    }
}

fn display_flag(flag: &bool) -> String {
    let text = if *flag { "yes" } else { "-" };
    text.to_string()
}

#[allow(clippy::ptr_arg)] // tabled passes the field by reference
fn display_list(items: &Vec<&'static str>) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Print event rows in the specified format.
pub fn print_events(rows: &[EventRow], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{}", "No events found.".dimmed());
            } else {
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => println!("{}", format_json(rows, "[]")),
    }
}

/// Print a drift report in the specified format.
pub fn print_report(report: &DriftReport, strict: bool, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", format_json(report, "{}")),
        OutputFormat::Table => println!("{}", render_report(report, strict)),
    }
}

fn render_report(report: &DriftReport, strict: bool) -> String {
    let mut out = format!(
        "{} table names, {} editor names\n",
        report.table_size, report.editor_size
    );

    render_section(
        &mut out,
        "Missing from table",
        &report.missing,
        "known to Neovim, add them to the table".yellow().to_string(),
    );
    render_section(
        &mut out,
        "Stale in table",
        &report.stale,
        if strict {
            "unknown to this Neovim build".yellow().to_string()
        } else {
            "unknown to this Neovim build (ignored without --strict)"
                .dimmed()
                .to_string()
        },
    );
    render_section(
        &mut out,
        "Rejected by nvim_create_autocmd",
        &report.rejected,
        "subscription failed".red().to_string(),
    );

    if report.is_clean(strict) {
        out.push_str(&format!("{} table matches Neovim", "OK:".green().bold()));
    } else {
        out.push_str(&format!("{} event table has drifted", "Drift:".red().bold()));
    }
    out
}

fn render_section(out: &mut String, title: &str, names: &[String], note: String) {
    if names.is_empty() {
        return;
    }
    out.push_str(&format!("\n{} ({}): {}\n", title.bold(), names.len(), note));
    for name in names {
        let hint = Event::parse(name)
            .err()
            .and_then(|err| err.suggestion())
            .map(|s| format!("  (close to {s})"))
            .unwrap_or_default();
        out.push_str(&format!("  {name}{hint}\n"));
    }
    out.push('\n');
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_flag() {
        assert_eq!(OutputFormat::from_flag("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_flag("yaml"), OutputFormat::Table);
    }

    #[test]
    fn test_event_row_from_event() {
        let row = EventRow::from(Event::BufReadPost);
        assert_eq!(row.name, "BufReadPost");
        assert_eq!(row.group, "buffer");
        assert!(!row.neovim_only);
        assert_eq!(row.aliases, vec!["BufRead"]);
    }

    #[test]
    fn test_event_row_json() {
        let row = EventRow::from(Event::TermOpen);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "TermOpen");
        assert_eq!(json["group"], "terminal");
        assert_eq!(json["neovim_only"], true);
    }

    #[test]
    fn test_render_clean_report() {
        colored::control::set_override(false);
        let report = DriftReport {
            table_size: 139,
            editor_size: 139,
            ..Default::default()
        };
        let text = render_report(&report, true);
        assert!(text.contains("139 table names, 139 editor names"));
        assert!(text.ends_with("OK: table matches Neovim"));
    }

    #[test]
    fn test_render_drift_report_with_hint() {
        colored::control::set_override(false);
        let report = DriftReport {
            table_size: 139,
            editor_size: 139,
            rejected: vec!["WinLeavet".to_string()],
            ..Default::default()
        };
        let text = render_report(&report, false);
        assert!(text.contains("Rejected by nvim_create_autocmd (1)"));
        assert!(text.contains("WinLeavet  (close to WinLeave)"));
        assert!(text.ends_with("Drift: event table has drifted"));
    }
}
