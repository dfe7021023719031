use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{config::load_config, core::extract_keys};

/// Run extraction for the `extract` command.
///
/// Configuration priority: CLI arguments > `.keysweeprc.json` > defaults.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = cmd.args;

    let loaded = load_config(&args.path)?;
    let mut config = loaded.config;
    if let Some(project_type) = args.common.project_type {
        config.project_type = project_type;
    }

    let result = extract_keys(&args.path, &config)?;
    let skipped_count = result.skipped().len();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            project_type: config.project_type,
            format: args.format,
            config_from_file: loaded.from_file,
            result,
        }),
        skipped_count,
        fail_on_skipped: args.strict,
    })
}
