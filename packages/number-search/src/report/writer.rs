//! Report rendering and saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::config::REPORT_SUFFIX;
use crate::error::Result;
use crate::types::DocumentReport;

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One rewritten sentence per line.
    #[default]
    Text,
    Yaml,
    Json,
}

impl ReportFormat {
    /// File extension for saved reports.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Report representation for serialization.
#[derive(Debug, Serialize)]
struct SerializedReport<'a> {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<Vec<u32>>,
    generated: String,
    sentence_count: usize,
    sentences: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    warnings: &'a [String],
}

impl<'a> From<&'a DocumentReport> for SerializedReport<'a> {
    fn from(report: &'a DocumentReport) -> Self {
        Self {
            source: report.source.display().to_string(),
            pages: report.pages.as_ref().map(|pages| pages.to_vec()),
            generated: chrono::Local::now().format("%Y-%m-%d").to_string(),
            sentence_count: report.sentence_count(),
            sentences: &report.sentences,
            warnings: &report.warnings,
        }
    }
}

/// Render a report in the given format.
pub fn render_report(report: &DocumentReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => {
            let mut text = report.sentences.join("\n");
            if !text.is_empty() {
                text.push('\n');
            }
            Ok(text)
        }
        ReportFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&SerializedReport::from(report))?;
            let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
            Ok(format!("---\n{}\n", lines.join("\n")))
        }
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&SerializedReport::from(report))?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// File name for a saved report, e.g. `annual.pdf.numbers.yaml`.
///
/// The source extension is kept so `annual.pdf` and `annual.txt` in one
/// directory get separate reports.
#[must_use]
pub fn report_file_name(source: &Path, format: ReportFormat) -> String {
    let name = source
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    format!("{name}.{REPORT_SUFFIX}.{}", format.extension())
}

/// Save a report into `output_dir`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
///
/// # Returns
/// Path to the saved file
pub fn save_report(
    report: &DocumentReport,
    format: ReportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let file_name = report_file_name(&report.source, format);
    let output_file = output_dir.join(&file_name);
    let temp_file = output_dir.join(format!(".{file_name}.tmp"));

    let content = render_report(report, format)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    tracing::debug!(path = %output_file.display(), "Saved report");
    Ok(output_file)
}
