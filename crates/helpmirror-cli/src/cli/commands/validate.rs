//! `helpmirror validate` – probe the rewritten links for reachability.

use anyhow::{Context, Result};
use helpmirror_core::config::MirrorConfig;
use helpmirror_core::manifest::Manifest;
use helpmirror_core::validate::{tally, validate_links, ProbeOutcome};

use super::rewritten_manifest_path;

pub fn run_validate(cfg: &MirrorConfig) -> Result<()> {
    let path = rewritten_manifest_path(cfg);
    let manifest = Manifest::load(&path)
        .with_context(|| format!("no rewritten manifest at {}; run relink first", path.display()))?;

    println!("--- validating {} links ---", manifest.data.len());

    let summary = validate_links(&manifest, cfg.request_timeout(), cfg.validation_pause())?;

    for rec in &summary.records {
        match &rec.outcome {
            ProbeOutcome::Valid => println!("ok      {}", rec.name),
            ProbeOutcome::HttpError(code) => println!("HTTP {:<4}{}", code, rec.name),
            ProbeOutcome::ConnectionError => println!("no conn {}", rec.name),
            ProbeOutcome::Timeout => println!("timeout {}", rec.name),
            ProbeOutcome::OtherError(cause) => println!("error   {}: {}", rec.name, cause),
            ProbeOutcome::SkippedInvalid => {
                println!("skipped item {} ({}): no detailUrl", rec.index, rec.name)
            }
        }
    }

    let t = tally(&summary);
    println!(
        "--- validation complete: total={} valid={} failed={} ---",
        t.total, t.valid, t.failed
    );
    Ok(())
}
