//! `helpmirror fetch` – download every item's HTML page.

use anyhow::Result;
use helpmirror_core::config::MirrorConfig;
use helpmirror_core::fetch::{fetch_pages, FetchOutcome};
use helpmirror_core::manifest::Manifest;

pub fn run_fetch(cfg: &MirrorConfig) -> Result<()> {
    let manifest = Manifest::load(&cfg.source_manifest_path)?;
    println!(
        "--- downloading HTML into {} ---",
        cfg.download_dir.display()
    );

    let summary = fetch_pages(&manifest, &cfg.download_dir, cfg.request_timeout())?;

    for rec in &summary.records {
        match &rec.outcome {
            FetchOutcome::Downloaded => println!("downloaded {}.html", rec.name),
            FetchOutcome::Skipped => {
                println!("skipping '{}.html' as it already exists", rec.name)
            }
            FetchOutcome::SkippedInvalid => {
                println!("skipping item {} ({}): no detailUrl", rec.index, rec.name)
            }
            FetchOutcome::Failed(cause) => {
                println!("error downloading {}: {}", rec.name, cause)
            }
        }
    }

    println!(
        "--- download complete: {} fetched, {} skipped, {} without URL, {} failed ---",
        summary.count(|o| *o == FetchOutcome::Downloaded),
        summary.count(|o| *o == FetchOutcome::Skipped),
        summary.count(|o| *o == FetchOutcome::SkippedInvalid),
        summary.count(FetchOutcome::is_failure),
    );
    Ok(())
}
