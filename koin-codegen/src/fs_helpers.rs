//! Filesystem helpers shared across `koin-codegen` modules.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::{CodegenError, Result};
use crate::model::MetadataDocument;

/// Opens `path`, creating it (and its parents) first when it is missing.
///
/// # Errors
///
/// Returns [`CodegenError::Io`] when the directory cannot be created or
/// opened.
pub fn ensure_dir(path: &Utf8Path) -> Result<Dir> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                CodegenError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| CodegenError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(CodegenError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}

/// Reads and parses the metadata document at `path`.
///
/// # Errors
///
/// Returns [`CodegenError::Io`] when the file cannot be read and
/// [`CodegenError::MetadataJson`] when it is not a valid document.
pub fn load_document(path: &Utf8Path) -> Result<MetadataDocument> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| CodegenError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "metadata path has no file name",
        ),
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|io_err| {
        CodegenError::Io {
            path: parent.to_path_buf(),
            source: io_err,
        }
    })?;
    let content = dir
        .read_to_string(file_name)
        .map_err(|io_err| CodegenError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;
    Ok(serde_json::from_str(&content)?)
}
