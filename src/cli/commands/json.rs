use anyhow::Result;

use super::super::args::JsonCommand;
use super::helper::{load_components, narrow};
use super::{CommandResult, CommandSummary, JsonSummary};

pub fn json(cmd: JsonCommand) -> Result<CommandResult> {
    let discovered = load_components(&cmd.common)?;
    let components = narrow(&discovered.components, &cmd.paths)?;

    Ok(CommandResult {
        summary: CommandSummary::Json(JsonSummary {
            json: components.to_json(),
        }),
        warning_count: discovered.warning_count,
    })
}
