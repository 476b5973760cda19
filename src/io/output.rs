use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ToolError};

/// Default base directory that every output file is confined to.
pub const DEFAULT_DATA_DIR: &str = "../data";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Where the reconciled roster is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// A file that has already been confined to the data directory.
    File(PathBuf),
}

impl OutputTarget {
    /// Resolves the optional `--outfile` argument against `data_dir`.
    pub fn resolve(data_dir: &Path, requested: Option<&Path>) -> Result<Self> {
        match requested {
            Some(path) => Ok(OutputTarget::File(sandboxed_path(data_dir, path)?)),
            None => Ok(OutputTarget::Stdout),
        }
    }

    /// Opens the target for writing.
    ///
    /// Files get their parent directories created and start with a UTF-8
    /// byte-order mark. Standard output is written as-is.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut writer = BufWriter::new(File::create(path)?);
                writer.write_all(UTF8_BOM)?;
                debug!(path = %path.display(), "opened output file");
                Ok(Box::new(writer))
            }
        }
    }
}

/// Maps a requested output path into `data_dir`.
///
/// Relative paths keep only their file name. Absolute paths keep their
/// directories, re-rooted under `data_dir`. Only normal components survive, so
/// `..` and root prefixes cannot leave the base directory.
pub fn sandboxed_path(data_dir: &Path, requested: &Path) -> Result<PathBuf> {
    let file_name = requested
        .file_name()
        .ok_or_else(|| ToolError::InvalidOutput(requested.to_path_buf()))?;

    let mut resolved = std::path::absolute(data_dir)?;
    if requested.is_absolute() {
        if let Some(parent) = requested.parent() {
            resolved.extend(parent.components().filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                _ => None,
            }));
        }
    }
    resolved.push(file_name);
    Ok(resolved)
}
