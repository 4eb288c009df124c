use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::OutputSegments;

/// How a segment payload is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare JSON payload.
    Json,
    /// A script that merges the payload into `I18n.translations`.
    Script,
}

impl OutputFormat {
    pub fn from_json_flag(save_as_json: bool) -> Self {
        if save_as_json {
            OutputFormat::Json
        } else {
            OutputFormat::Script
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Script => "js",
        }
    }
}

/// A segment ready to be written: its path as planned and the file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSegment {
    pub path: String,
    pub contents: String,
}

pub fn render_payload(payload: &Value, format: OutputFormat) -> Result<String> {
    let json = serde_json::to_string(payload).context("Failed to serialize JSON")?;

    Ok(match format {
        OutputFormat::Json => json,
        OutputFormat::Script => format!(
            "var I18n = I18n || {{}}; \n\
             I18n.translations = I18n.translations || {{}}; \n\
             jQuery.extend(true, I18n.translations, {});",
            json
        ),
    })
}

/// Render every segment up front so nothing is written if one of them fails.
pub fn render_segments(
    segments: &OutputSegments,
    format: OutputFormat,
) -> Result<Vec<RenderedSegment>> {
    segments
        .iter()
        .map(|(path, payload)| {
            Ok(RenderedSegment {
                path: path.clone(),
                contents: render_payload(payload, format)
                    .with_context(|| format!("Failed to render segment: {}", path))?,
            })
        })
        .collect()
}

/// Writes rendered segments below an output directory.
pub struct SegmentWriter {
    output_dir: PathBuf,
}

impl SegmentWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Where a segment path ends up on disk.
    pub fn target_path(&self, segment_path: &str) -> PathBuf {
        self.output_dir.join(segment_path)
    }

    /// Write one segment, creating parent directories as needed.
    pub fn write(&self, segment: &RenderedSegment) -> Result<PathBuf> {
        let file_path = self.target_path(&segment.path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, &segment.contents)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(file_path)
    }
}
