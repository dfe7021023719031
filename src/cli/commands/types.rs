use anyhow::Result;

use super::{CommandResult, CommandSummary, TypesSummary};
use crate::{config::Config, core::ProcessorRegistry};

pub fn types() -> Result<CommandResult> {
    let registry = ProcessorRegistry::from_config(&Config::default())?;

    Ok(CommandResult {
        summary: CommandSummary::Types(TypesSummary {
            project_types: registry.project_types(),
        }),
        skipped_count: 0,
        fail_on_skipped: false,
    })
}
