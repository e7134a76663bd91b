use crate::error::{CcuError, Result};
use crate::types::UsageSnapshot;
use crate::utils::parent_dir;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads and replaces the usage snapshot file
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last snapshot. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<UsageSnapshot>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no cache file at {}", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(CcuError::CacheRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| CcuError::JsonParse {
                context: self.path.display().to_string(),
                source,
            })
    }

    /// Replace the cache file with `snapshot`.
    ///
    /// The JSON is written to a temporary file next to the target and renamed
    /// over it, so readers never observe a partial write. The replaced file's
    /// permissions carry over to the new one. Concurrent writers are not
    /// coordinated: the last rename wins.
    pub fn save(&self, snapshot: &UsageSnapshot) -> Result<()> {
        let mut json = serde_json::to_string_pretty(snapshot)?;
        json.push('\n');

        let write_err = |source: std::io::Error| CcuError::CacheWrite {
            path: self.path.clone(),
            source,
        };

        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;

        // Temp files are created 0600; keep whatever mode the old file had
        match fs::metadata(&self.path) {
            Ok(existing) => tmp
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(write_err(source)),
        }

        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        debug!("wrote {}", self.path.display());
        Ok(())
    }
}
