//! Stage 1: download each item's HTML page into the download cache.
//!
//! Sequential, one curl Easy GET per item, body streamed verbatim to disk.
//! An existing artifact is never re-fetched (resumability) and one item's
//! transport failure never stops the batch. Bodies stream to `.part` and
//! rename into place so an interrupted run leaves no truncated artifact a
//! later run would skip over.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::filename::derive_filename;
use crate::manifest::Manifest;
use crate::report::StageSummary;

/// Per-item result of the fetch stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Downloaded and persisted this run.
    Downloaded,
    /// HTML artifact already present; no request made.
    Skipped,
    /// Item has no usable `detailUrl`.
    SkippedInvalid,
    /// Transport-level failure (connect, non-2xx, write), with cause.
    Failed(String),
}

/// Fetch every item's page into `download_dir` as `<derived>.html`.
///
/// `connect_timeout` bounds connection establishment only; the transfer
/// itself is unbounded, matching the stage's blocking model.
pub fn fetch_pages(
    manifest: &Manifest,
    download_dir: &Path,
    connect_timeout: Duration,
) -> Result<StageSummary<FetchOutcome>> {
    fs::create_dir_all(download_dir)
        .with_context(|| format!("cannot create download dir {}", download_dir.display()))?;

    let mut summary = StageSummary::new();
    let mut seen = HashSet::new();

    for (index, item) in manifest.data.iter().enumerate() {
        let name = derive_filename(item);
        if !seen.insert(name.clone()) {
            tracing::warn!(index, name = %name, "duplicate derived filename; artifacts will overwrite");
        }

        let Some(url) = item.url() else {
            tracing::warn!(index, name = %name, "item has no detailUrl, skipping");
            summary.record(index, name, FetchOutcome::SkippedInvalid);
            continue;
        };

        let target = download_dir.join(format!("{name}.html"));
        if target.exists() {
            tracing::debug!(index, name = %name, "HTML artifact exists, skipping download");
            summary.record(index, name, FetchOutcome::Skipped);
            continue;
        }

        match download_to(url, &target, connect_timeout) {
            Ok(()) => {
                tracing::info!(index, name = %name, url, "downloaded");
                summary.record(index, name, FetchOutcome::Downloaded);
            }
            Err(e) => {
                tracing::warn!(index, name = %name, url, error = %format!("{e:#}"), "download failed");
                summary.record(index, name, FetchOutcome::Failed(format!("{e:#}")));
            }
        }
    }

    Ok(summary)
}

/// Single GET streaming the response body to `<target>.part`, renamed to
/// `target` only after a 2xx response completed.
fn download_to(url: &str, target: &Path, connect_timeout: Duration) -> Result<()> {
    let part = target.with_extension("html.part");
    let mut file = fs::File::create(&part)
        .with_context(|| format!("cannot create {}", part.display()))?;
    let mut write_err: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(connect_timeout)?;

    let result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match file.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        let _ = fs::remove_file(&part);
        return Err(e).with_context(|| format!("writing {}", part.display()));
    }
    if let Err(e) = result {
        let _ = fs::remove_file(&part);
        return Err(e).context("GET request failed");
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        let _ = fs::remove_file(&part);
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    fs::rename(&part, target)
        .with_context(|| format!("cannot move {} into place", part.display()))?;
    Ok(())
}

impl FetchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}
