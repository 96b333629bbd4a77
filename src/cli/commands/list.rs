use anyhow::Result;

use super::super::args::ListCommand;
use super::helper::{load_components, narrow};
use super::{CommandResult, CommandSummary, ListSummary};

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let discovered = load_components(&cmd.common)?;
    let components = narrow(&discovered.components, &cmd.paths)?;

    Ok(CommandResult {
        summary: CommandSummary::List(ListSummary {
            total: discovered.components.count(),
            components,
        }),
        warning_count: discovered.warning_count,
    })
}
