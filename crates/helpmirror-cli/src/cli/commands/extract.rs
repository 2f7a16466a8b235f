//! `helpmirror extract` – render downloaded HTML to body-text files.

use anyhow::Result;
use helpmirror_core::config::MirrorConfig;
use helpmirror_core::extract::{extract_pages, ExtractOutcome};
use helpmirror_core::manifest::Manifest;

pub fn run_extract(cfg: &MirrorConfig) -> Result<()> {
    let manifest = Manifest::load(&cfg.source_manifest_path)?;
    println!("--- extracting body text into {} ---", cfg.text_dir.display());

    let summary = extract_pages(&manifest, &cfg.download_dir, &cfg.text_dir)?;

    for rec in &summary.records {
        match &rec.outcome {
            ExtractOutcome::Converted => println!("converted {}.txt", rec.name),
            ExtractOutcome::Skipped => {
                println!("skipping '{}.txt' as it already exists", rec.name)
            }
            ExtractOutcome::MissingSource => println!(
                "warning: no '{}.html' in {}, skipping conversion",
                rec.name,
                cfg.download_dir.display()
            ),
            ExtractOutcome::Failed(cause) => {
                println!("error converting {}: {}", rec.name, cause)
            }
        }
    }

    println!(
        "--- extraction complete: {} converted, {} skipped, {} missing source, {} failed ---",
        summary.count(|o| *o == ExtractOutcome::Converted),
        summary.count(|o| *o == ExtractOutcome::Skipped),
        summary.count(|o| *o == ExtractOutcome::MissingSource),
        summary.count(ExtractOutcome::is_failure),
    );
    Ok(())
}
