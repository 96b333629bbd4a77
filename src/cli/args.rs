//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: List discovered components, optionally narrowed by path globs
//! - `find`: Look up one component by name or by field values
//! - `json`: Print the JSON projection of the discovered components
//! - `init`: Initialize a corral configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::List(cmd)) => cmd.common.verbose,
            Some(Command::Find(cmd)) => cmd.common.verbose,
            Some(Command::Json(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Components root directory (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Path globs applied to the discovered components.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Keep only components whose source path matches this glob
    #[arg(long)]
    pub filter: Option<String>,

    /// Drop components whose source path matches this glob
    #[arg(long)]
    pub reject: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub paths: PathArgs,
}

#[derive(Debug, Args)]
pub struct FindCommand {
    /// Component name
    pub name: Option<String>,

    /// Field that must match, as key=value (repeatable; values are parsed as JSON when possible)
    #[arg(long = "where", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct JsonCommand {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub paths: PathArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List discovered components and their source paths
    List(ListCommand),
    /// Print the first component matching a name or field values
    Find(FindCommand),
    /// Print discovered components as a JSON array
    Json(JsonCommand),
    /// Initialize a new .corralrc.json configuration file
    Init,
}

/// Parse `key=value`. The value is read as JSON (`true`, `3`, `"x"`) and
/// falls back to a plain string.
fn parse_field(input: &str) -> Result<(String, Value), String> {
    let Some((key, value)) = input.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got \"{}\"", input));
    };
    if key.is_empty() {
        return Err(format!("missing key in \"{}\"", input));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
