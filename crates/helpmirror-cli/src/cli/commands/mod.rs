mod extract;
mod fetch;
mod relink;
mod validate;

pub use extract::run_extract;
pub use fetch::run_fetch;
pub use relink::run_relink;
pub use validate::run_validate;

use helpmirror_core::config::MirrorConfig;
use std::path::PathBuf;

/// Where the relink stage writes, and where validate reads from: the source
/// manifest's file name inside the rewritten-manifest directory.
pub(crate) fn rewritten_manifest_path(cfg: &MirrorConfig) -> PathBuf {
    let file_name = cfg
        .source_manifest_path
        .file_name()
        .unwrap_or_else(|| "manifest.json".as_ref());
    cfg.rewritten_manifest_dir.join(file_name)
}
