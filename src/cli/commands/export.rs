use anyhow::{Ok, Result};

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary, ExportSummary, SegmentReport};
use crate::{
    core::{ExportContext, plan},
    writer::{OutputFormat, SegmentWriter, render_segments},
};

/// Run the full export: load, plan, render, then write.
///
/// All segments are rendered before the first file is written, so a failure
/// leaves no partial output behind.
pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ExportContext::new(&args.common)?;

    let format = OutputFormat::from_json_flag(ctx.options.save_as_json);
    let segments = plan(&ctx);
    let rendered = render_segments(&segments, format)?;

    if !args.dry_run {
        let writer = SegmentWriter::new(&ctx.output_dir);
        for segment in &rendered {
            writer.write(segment)?;
        }
    }

    let reports = segments
        .iter()
        .map(|(path, payload)| SegmentReport {
            path: path.clone(),
            top_level_keys: payload.as_object().map_or(0, |map| map.len()),
        })
        .collect();

    Ok(CommandResult::new(CommandSummary::Export(ExportSummary {
        segments: reports,
        locale_file_count: ctx.locale_files.len(),
        format,
        is_dry_run: args.dry_run,
    })))
}
