use serde_json::Value;

use crate::collections::ComponentCollection;
use crate::entities::Component;

#[derive(Debug)]
pub enum CommandSummary {
    List(ListSummary),
    Find(FindSummary),
    Json(JsonSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ListSummary {
    /// Components left after path globs were applied.
    pub components: ComponentCollection,
    /// Components discovered before narrowing.
    pub total: usize,
}

#[derive(Debug)]
pub struct FindSummary {
    pub found: Option<Component>,
    /// Human-readable description of what was searched for.
    pub query: String,
}

#[derive(Debug)]
pub struct JsonSummary {
    pub json: Value,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running corral commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Config files that were unreadable or malformed.
    pub warning_count: usize,
}
