use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use pirenea_core::setup::{SetupCode, PREFIX_MARKER};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixReport {
    pub generated_at: OffsetDateTime,
    pub root: PathBuf,
    pub total_files: u32,
    pub tagged: Vec<TaggedCount>,
    /// Files starting with the marker letter but no known `<code>_` tag.
    pub marker_only: u32,
    pub untagged: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedCount {
    pub code: SetupCode,
    pub files: u32,
}

impl PrefixReport {
    pub fn new(root: PathBuf) -> Self {
        let tagged = SetupCode::ALL
            .iter()
            .map(|&code| TaggedCount { code, files: 0 })
            .collect();
        Self {
            generated_at: OffsetDateTime::now_utc(),
            root,
            total_files: 0,
            tagged,
            marker_only: 0,
            untagged: 0,
        }
    }

    pub fn record(&mut self, name: &str) {
        self.total_files = self.total_files.saturating_add(1);
        for entry in &mut self.tagged {
            if name.starts_with(&entry.code.file_prefix()) {
                entry.files = entry.files.saturating_add(1);
                return;
            }
        }
        if name.starts_with(PREFIX_MARKER) {
            self.marker_only = self.marker_only.saturating_add(1);
        } else {
            self.untagged = self.untagged.saturating_add(1);
        }
    }
}

pub fn summarize(report: &PrefixReport) -> String {
    if report.total_files == 0 {
        return format!("No files under {}.", report.root.display());
    }

    let mut lines = vec![format!(
        "{} files under {}",
        report.total_files,
        report.root.display()
    )];
    for entry in &report.tagged {
        if entry.files > 0 {
            lines.push(format!(
                "- {}: {} files ({} setup)",
                entry.code,
                entry.files,
                entry.code.setup_label()
            ));
        }
    }
    if report.marker_only > 0 {
        lines.push(format!(
            "- {} files carry the {PREFIX_MARKER} marker without a known code",
            report.marker_only
        ));
    }
    if report.untagged > 0 {
        lines.push(format!("- {} files untagged", report.untagged));
    }
    lines.join("\n")
}

pub fn render_json(report: &PrefixReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
