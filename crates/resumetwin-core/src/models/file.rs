use std::path::Path;

use bytes::Bytes;

use crate::error::AppError;

/// A resume chosen by the user: the file name plus its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk. The name sent to the backend is the final path component.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::InvalidInput(format!("Not a file: {}", path.display())))?
            .to_string();

        let content = std::fs::read(path)?;
        Ok(Self::new(name, content))
    }

    pub fn is_pdf(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
