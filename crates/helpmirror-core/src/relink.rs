//! Stage 3: rewrite every item's `detailUrl` to the mirror hosting root.
//!
//! A pure manifest transformation: `<base><derived>.txt` for every item,
//! whether or not the text artifact was actually produced. The source
//! manifest is never touched; the rewritten copy lands in its own directory
//! under the source's file name.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use url::Url;

use crate::filename::derive_filename;
use crate::manifest::{Manifest, ManifestError};

/// Parse and normalize the hosting root: must be a base-capable URL and
/// end with `/` so filename concatenation cannot clobber a path segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid base URL {raw:?}"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("base URL {raw:?} cannot carry a path");
    }
    if url.path().ends_with('/') {
        Ok(url)
    } else {
        let fixed = format!("{url}/");
        Url::parse(&fixed).with_context(|| format!("invalid base URL {fixed:?}"))
    }
}

/// Deep-copy `manifest` with every `detailUrl` pointing at the mirror.
/// All other fields, known and unknown, are carried over unchanged.
pub fn rewrite_manifest(manifest: &Manifest, base: &Url) -> Manifest {
    let mut out = manifest.clone();
    for item in &mut out.data {
        let name = derive_filename(item);
        item.set_url(format!("{base}{name}.txt"));
    }
    out
}

/// Rewrite and persist: the output file keeps the source manifest's file
/// name inside `out_dir`. Returns the written path.
pub fn rewrite_and_save(
    manifest: &Manifest,
    base: &Url,
    source_manifest: &Path,
    out_dir: &Path,
) -> Result<PathBuf, ManifestError> {
    let rewritten = rewrite_manifest(manifest, base);
    let file_name = source_manifest
        .file_name()
        .unwrap_or_else(|| "manifest.json".as_ref());
    let target = out_dir.join(file_name);
    rewritten.write(&target)?;
    Ok(target)
}
