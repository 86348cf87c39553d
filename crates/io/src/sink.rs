/// File name offered when the user downloads a poster.
pub const DEFAULT_FILE_NAME: &str = "canvalite-poster.png";

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not write {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not move export into place at {path}: {source}")]
    Persist {
        path: std::path::PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Receives finished image bytes.
pub trait ExportSink {
    fn save(&mut self, bytes: &[u8]) -> ExportResult<()>;
}

/// Writes exports to a fixed path.
///
/// The bytes go to a temporary file next to the target first, so a failed
/// export never leaves a half-written image behind.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: std::path::PathBuf,
}

impl FileSink {
    pub fn new(path: impl AsRef<std::path::Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// [`DEFAULT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<std::path::Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ExportSink for FileSink {
    /// # Errors
    ///
    /// - [`ExportError::Io`] if the temporary file cannot be created or written.
    /// - [`ExportError::Persist`] if it cannot be renamed onto the target.
    fn save(&mut self, bytes: &[u8]) -> ExportResult<()> {
        use std::io::Write;

        let io_err = |source: std::io::Error| ExportError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => std::path::PathBuf::from("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(bytes).map_err(io_err)?;
        tmp.flush().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|source| ExportError::Persist {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), bytes = bytes.len(), "export saved");
        Ok(())
    }
}
