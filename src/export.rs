//! Saving the current summary as a plain-text file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name the summary is saved under.
pub const SUMMARY_FILENAME: &str = "summary.txt";

/// Content type of exported summaries.
pub const SUMMARY_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// A file ready to be handed to a [`FileExporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub fn summary(text: &str) -> Self {
        Self {
            filename: SUMMARY_FILENAME.to_string(),
            content_type: SUMMARY_CONTENT_TYPE,
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// Capability to persist an [`ExportFile`] somewhere the user can find it.
pub trait FileExporter: Send {
    /// Write the file and return where it ended up.
    fn save(&self, file: &ExportFile) -> io::Result<PathBuf>;
}

/// Writes exports into a fixed directory, replacing any previous file.
pub struct DirectoryExporter {
    dir: PathBuf,
}

impl DirectoryExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileExporter for DirectoryExporter {
    fn save(&self, file: &ExportFile) -> io::Result<PathBuf> {
        // Never let a filename escape the export directory.
        let name = Path::new(&file.filename)
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty export filename"))?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, &file.bytes)?;

        tracing::info!(
            path = %path.display(),
            content_type = file.content_type,
            bytes = file.bytes.len(),
            "Exported file"
        );
        Ok(path)
    }
}
