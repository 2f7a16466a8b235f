//! Stage 2: turn downloaded HTML artifacts into plain-text artifacts.
//!
//! Same resumability contract as the fetch stage: an existing `.txt` is
//! never re-rendered, a missing `.html` source is recorded and skipped, and
//! any per-item parse or I/O failure leaves the rest of the batch running.

mod text;

pub use text::body_text;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::filename::derive_filename;
use crate::manifest::Manifest;
use crate::report::StageSummary;

/// Per-item result of the extract stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// Text artifact rendered this run.
    Converted,
    /// Text artifact already present; HTML not parsed.
    Skipped,
    /// No HTML artifact to convert (fetch never succeeded for this item).
    MissingSource,
    /// Read, parse, or write failure, with cause.
    Failed(String),
}

impl ExtractOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ExtractOutcome::Failed(_))
    }
}

/// Render `<download_dir>/<derived>.html` into `<text_dir>/<derived>.txt`
/// for every manifest item.
pub fn extract_pages(
    manifest: &Manifest,
    download_dir: &Path,
    text_dir: &Path,
) -> Result<StageSummary<ExtractOutcome>> {
    fs::create_dir_all(text_dir)
        .with_context(|| format!("cannot create text dir {}", text_dir.display()))?;

    let mut summary = StageSummary::new();
    let mut seen = HashSet::new();

    for (index, item) in manifest.data.iter().enumerate() {
        let name = derive_filename(item);
        if !seen.insert(name.clone()) {
            tracing::warn!(index, name = %name, "duplicate derived filename; artifacts will overwrite");
        }

        let html_path = download_dir.join(format!("{name}.html"));
        if !html_path.exists() {
            tracing::warn!(index, name = %name, "no HTML artifact to convert");
            summary.record(index, name, ExtractOutcome::MissingSource);
            continue;
        }

        let txt_path = text_dir.join(format!("{name}.txt"));
        if txt_path.exists() {
            tracing::debug!(index, name = %name, "text artifact exists, skipping conversion");
            summary.record(index, name, ExtractOutcome::Skipped);
            continue;
        }

        match convert(&html_path, &txt_path) {
            Ok(()) => {
                tracing::info!(index, name = %name, "converted to text");
                summary.record(index, name, ExtractOutcome::Converted);
            }
            Err(e) => {
                tracing::warn!(index, name = %name, error = %format!("{e:#}"), "conversion failed");
                summary.record(index, name, ExtractOutcome::Failed(format!("{e:#}")));
            }
        }
    }

    Ok(summary)
}

fn convert(html_path: &Path, txt_path: &Path) -> Result<()> {
    let html = fs::read_to_string(html_path)
        .with_context(|| format!("cannot read {}", html_path.display()))?;
    let text = body_text(&html);
    fs::write(txt_path, text).with_context(|| format!("cannot write {}", txt_path.display()))
}
