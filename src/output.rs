//! Output-location strategies: factories for report sinks.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::ReportConfig;
use crate::error::ReportError;

/// Supplies a writable sink for a logical report file name.
pub trait ResultOutputStrategy {
    /// Open a fresh sink for `name`. Ownership of the sink passes to the caller.
    fn create_writer_for_file(&self, name: &str) -> Result<Box<dyn Write>, ReportError>;
}

/// Writes report files into one directory, created on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOutputStrategy {
    dir: PathBuf,
}

impl DirectoryOutputStrategy {
    /// Strategy writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Strategy for the run started at `start_time_ms` under `config`.
    pub fn from_config(config: &ReportConfig, start_time_ms: i64) -> Self {
        Self::new(config.output_dir(start_time_ms))
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path a report named `name` is written to.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl ResultOutputStrategy for DirectoryOutputStrategy {
    fn create_writer_for_file(&self, name: &str) -> Result<Box<dyn Write>, ReportError> {
        let path = self.path_for(name);
        let file = std::fs::create_dir_all(&self.dir)
            .and_then(|()| File::create(&path))
            .map_err(|source| ReportError::CreateOutput {
                name: name.to_string(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "opened report output");
        Ok(Box::new(BufWriter::new(file)))
    }
}
