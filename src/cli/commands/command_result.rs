use super::super::exit_status::ExitStatus;
use crate::writer::OutputFormat;

#[derive(Debug)]
pub enum CommandSummary {
    Export(ExportSummary),
    Init(InitSummary),
}

/// One planned segment, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentReport {
    /// Segment path as planned (relative to the output directory).
    pub path: String,
    /// Number of top-level keys in the payload (usually locales).
    pub top_level_keys: usize,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub segments: Vec<SegmentReport>,
    pub locale_file_count: usize,
    pub format: OutputFormat,
    pub is_dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running i18n-js commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        let exit_status = match &summary {
            CommandSummary::Init(InitSummary { created: false, .. }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        };
        Self {
            summary,
            exit_status,
        }
    }
}
