//! `helpmirror relink` – write the manifest copy pointing at the mirror.

use anyhow::Result;
use helpmirror_core::config::MirrorConfig;
use helpmirror_core::manifest::Manifest;
use helpmirror_core::relink::{parse_base_url, rewrite_and_save};

pub fn run_relink(cfg: &MirrorConfig) -> Result<()> {
    let manifest = Manifest::load(&cfg.source_manifest_path)?;
    let base = parse_base_url(&cfg.rewrite_base_url)?;

    let written = rewrite_and_save(
        &manifest,
        &base,
        &cfg.source_manifest_path,
        &cfg.rewritten_manifest_dir,
    )?;
    println!(
        "rewrote {} links against {} -> {}",
        manifest.data.len(),
        base,
        written.display()
    );
    Ok(())
}
