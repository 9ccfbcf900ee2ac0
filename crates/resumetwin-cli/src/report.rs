use std::path::PathBuf;

use resumetwin_core::AppError;

/// Destination for downloaded report documents.
pub trait ReportSink: Send + Sync {
    /// Store `content` under `filename` and return where it ended up.
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, AppError>;
}

/// Writes reports into a directory, creating it when missing. An existing
/// file with the same name is overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl ReportSink for DirectorySink {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, AppError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

impl<T: ReportSink + ?Sized> ReportSink for std::sync::Arc<T> {
    fn save(&self, filename: &str, content: &[u8]) -> Result<PathBuf, AppError> {
        (**self).save(filename, content)
    }
}
