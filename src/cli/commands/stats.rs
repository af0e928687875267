use anyhow::Result;

use super::super::args::StatsArgs;
use super::{CommandResult, CommandSummary, StatsSummary};
use crate::core::DatasetContext;

pub fn stats(args: StatsArgs) -> Result<CommandResult> {
    let ctx = DatasetContext::new(&args.common)?;

    Ok(CommandResult::new(
        CommandSummary::Stats(StatsSummary {
            source_root: ctx.source_root.clone(),
            stats: ctx.stats(),
        }),
        Vec::new(),
    ))
}
