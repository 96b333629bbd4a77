use anyhow::{Result, bail};
use serde_json::{Map, Value};

use super::super::args::FindCommand;
use super::helper::load_components;
use super::{CommandResult, CommandSummary, FindSummary};
use crate::collections::ComponentCriteria;

pub fn find(cmd: FindCommand) -> Result<CommandResult> {
    if cmd.name.is_none() && cmd.fields.is_empty() {
        bail!("Provide a component name or at least one --where KEY=VALUE");
    }

    let discovered = load_components(&cmd.common)?;
    let components = &discovered.components;

    let criteria: ComponentCriteria<'_> = match (&cmd.name, cmd.fields.is_empty()) {
        (Some(name), true) => name.into(),
        (name, _) => {
            let mut fields: Map<String, Value> = Map::new();
            if let Some(name) = name {
                fields.insert("name".to_string(), Value::String(name.clone()));
            }
            fields.extend(cmd.fields.iter().cloned());
            fields.into()
        }
    };
    let query = criteria.to_string();
    let found = components.find(criteria);

    Ok(CommandResult {
        summary: CommandSummary::Find(FindSummary {
            found: found.cloned(),
            query,
        }),
        warning_count: discovered.warning_count,
    })
}
