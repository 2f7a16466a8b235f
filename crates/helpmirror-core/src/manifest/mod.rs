//! Manifest load/store.
//!
//! The manifest is the sole system of record: a UTF-8 JSON object whose
//! `data` key holds the ordered item list. Loading distinguishes a missing
//! file, malformed JSON, and a structurally wrong document; writing is
//! pretty-printed with non-ASCII characters preserved and never touches the
//! source file (rewrites go to their own path).

mod error;
mod types;

pub use error::ManifestError;
pub use types::{Item, Manifest};

use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

impl Manifest {
    /// Read and validate a manifest from `path`.
    pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ManifestError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ManifestError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let value: Value =
            serde_json::from_str(&raw).map_err(|e| ManifestError::Malformed {
                path: path.to_path_buf(),
                source: e,
            })?;

        if !value.get("data").map(Value::is_array).unwrap_or(false) {
            return Err(ManifestError::InvalidSchema {
                path: path.to_path_buf(),
            });
        }

        // `data` exists and is an array; anything still refused here is a
        // non-object element, which is the same schema problem.
        serde_json::from_value(value).map_err(|_| ManifestError::InvalidSchema {
            path: path.to_path_buf(),
        })
    }

    /// Serialize to `path`, pretty-printed, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let write_err = |source: io::Error| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        };

        let body = serde_json::to_vec_pretty(self)
            .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(path, body).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::{tempdir, NamedTempFile};

    fn manifest_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn load_valid_manifest() {
        let f = manifest_file(
            r#"{"data": [{"id": "1", "name": "Intro", "detailUrl": "https://a.example/1"}]}"#,
        );
        let m = Manifest::load(f.path()).unwrap();
        assert_eq!(m.data.len(), 1);
        assert_eq!(m.data[0].url(), Some("https://a.example/1"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let err = Manifest::load(Path::new("/nonexistent/HelpContent.json")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound { .. }));
    }

    #[test]
    fn load_bad_json_is_malformed() {
        let f = manifest_file("{not json");
        let err = Manifest::load(f.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Malformed { .. }));
    }

    #[test]
    fn load_missing_data_key_is_invalid_schema() {
        let f = manifest_file("{}");
        let err = Manifest::load(f.path()).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidSchema { .. }));
    }

    #[test]
    fn load_non_array_data_is_invalid_schema() {
        let f = manifest_file(r#"{"data": "oops"}"#);
        let err = Manifest::load(f.path()).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidSchema { .. }));
    }

    #[test]
    fn load_non_object_item_is_invalid_schema() {
        let f = manifest_file(r#"{"data": [1, 2]}"#);
        let err = Manifest::load(f.path()).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidSchema { .. }));
    }

    #[test]
    fn write_creates_parents_and_preserves_unicode() {
        let dir = tempdir().unwrap();
        let f = manifest_file(r#"{"data": [{"name": "Überblick", "detailUrl": "https://a.example/ü"}]}"#);
        let m = Manifest::load(f.path()).unwrap();

        let out = dir.path().join("nested").join("HelpContent.json");
        m.write(&out).unwrap();

        let raw = fs::read_to_string(&out).unwrap();
        assert!(raw.contains("Überblick"), "non-ASCII must not be escaped: {raw}");
        let reread = Manifest::load(&out).unwrap();
        assert_eq!(reread.data.len(), 1);
    }
}
