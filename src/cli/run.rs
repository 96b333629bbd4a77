use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, find::find, init::init, json::json, list::list},
};

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::List(cmd)) => list(cmd),
        Some(Command::Find(cmd)) => find(cmd),
        Some(Command::Json(cmd)) => json(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
