//! Output path resolution and writing.
//!
//! All paths are resolved against an explicit base directory supplied by the
//! caller; nothing here reads the process working directory.
//!
//! # Examples
//!
//! ```
//! use apitypes_codegen::sink::{resolve_output_path, write_output};
//! use std::path::Path;
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! # let base = temp.path();
//! let path = resolve_output_path(
//!     base,
//!     Some(Path::new("src/typings/Api/IApi.d.ts")),
//!     Path::new("src/lib/api/apiList.json"),
//!     "mippApiListTypes",
//! );
//! assert_eq!(path, base.join("src/typings/Api/IApi.d.ts"));
//!
//! write_output(&path, "interface IApis {\n}").unwrap();
//! assert!(path.exists());
//! ```

use apitypes_core::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used when the explicit target is a directory.
pub const INDEX_FILE_NAME: &str = "index.d.ts";

/// Extension that marks an explicit target as a file rather than a directory.
const TS_EXTENSION: &str = "ts";

/// Resolves where the declaration file is written.
///
/// - An explicit target ending in `.ts` is used as the file path.
/// - Any other explicit target is a directory receiving `index.d.ts`.
/// - Without a target, the file goes to `<default_dir>/<source stem>.d.ts`.
///
/// Relative paths are joined onto `base_dir`; absolute ones replace it.
#[must_use]
pub fn resolve_output_path(
    base_dir: &Path,
    explicit: Option<&Path>,
    source: &Path,
    default_dir: &str,
) -> PathBuf {
    let resolved = match explicit {
        Some(target) if target.extension().is_some_and(|ext| ext == TS_EXTENSION) => {
            base_dir.join(target)
        }
        Some(target) => base_dir.join(target).join(INDEX_FILE_NAME),
        None => {
            let stem = source
                .file_stem()
                .map_or_else(|| "index".into(), |s| s.to_string_lossy());
            base_dir.join(default_dir).join(format!("{stem}.d.ts"))
        }
    };
    tracing::debug!("Resolved output path: {}", resolved.display());
    resolved
}

/// Writes `content` to `path`, creating parent directories as needed.
///
/// Existing files are overwritten in place.
///
/// # Errors
///
/// Returns [`Error::WriteFailed`] if a directory cannot be created or the
/// file cannot be written.
pub fn write_output(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::WriteFailed {
            path: parent.display().to_string(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| Error::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Returns `true` if `path` already holds exactly `content`.
///
/// A missing file is simply out of date.
///
/// # Errors
///
/// Returns [`Error::WriteFailed`] if the file exists but cannot be read.
pub fn is_up_to_date(path: impl AsRef<Path>, content: &str) -> Result<bool> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing == content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::WriteFailed {
            path: path.display().to_string(),
            source,
        }),
    }
}
