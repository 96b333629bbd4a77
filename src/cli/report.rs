//! Report formatting and printing utilities.
//!
//! Separate from command logic so the library can be used without a terminal.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, FindSummary, ListSummary};
use crate::collections::ComponentCollection;
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Spaces between the name column and the path column.
const COLUMN_GAP: usize = 2;

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(result, &mut io::stdout().lock())?;

    if verbose && result.warning_count > 0 {
        eprintln!(
            "{} {} component config file(s) could not be used",
            "warning:".bold().yellow(),
            result.warning_count
        );
    }
    Ok(())
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    match &result.summary {
        CommandSummary::List(summary) => print_list_to(summary, writer)?,
        CommandSummary::Find(summary) => print_find_to(summary, writer)?,
        CommandSummary::Json(summary) => {
            writeln!(writer, "{}", serde_json::to_string_pretty(&summary.json)?)?
        }
        CommandSummary::Init(_) => writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )?,
    }
    Ok(())
}

fn print_list_to<W: Write>(summary: &ListSummary, writer: &mut W) -> io::Result<()> {
    let count = summary.components.count();
    if count == 0 {
        if summary.total == 0 {
            return writeln!(writer, "No components found");
        }
        return writeln!(
            writer,
            "No components matched ({} discovered)",
            summary.total
        );
    }

    for row in format_rows(&summary.components) {
        writeln!(writer, "{}", row)?;
    }

    let message = if count == summary.total {
        format!("{} {}", count, plural(count))
    } else {
        format!("{} of {} {}", count, summary.total, plural(summary.total))
    };
    writeln!(writer)?;
    writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green())
}

fn print_find_to<W: Write>(summary: &FindSummary, writer: &mut W) -> Result<()> {
    match &summary.found {
        Some(component) => {
            writeln!(writer, "{}", serde_json::to_string_pretty(&component.to_json())?)?;
        }
        None => {
            writeln!(
                writer,
                "{} No component matches {}",
                FAILURE_MARK.red(),
                summary.query
            )?;
        }
    }
    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "component" } else { "components" }
}

/// One line per component: the name padded to a shared display width,
/// then the source path relative to the components root.
fn format_rows(components: &ComponentCollection) -> Vec<String> {
    let width = components
        .iter()
        .map(|c| UnicodeWidthStr::width(c.name()))
        .max()
        .unwrap_or(0);

    components
        .iter()
        .map(|c| {
            let padding = width - UnicodeWidthStr::width(c.name()) + COLUMN_GAP;
            format!(
                "{}{}{}",
                c.name().bold(),
                " ".repeat(padding),
                c.src().relative().dimmed()
            )
        })
        .collect()
}
