//! File access helpers for the commands

use anyhow::{Context, Result};
use chunklines_engine::Input;
use std::fs;
use std::path::Path;

/// Opens files as engine inputs
pub struct FileReader;

impl FileReader {
    /// Describe `path` as an engine input without reading it
    pub fn input(path: &Path) -> Input {
        Input::from_file(path)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Display name used in progress messages
    pub fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");

        let content = "a".repeat(1024);
        fs::write(&file_path, &content).unwrap();

        let size = FileReader::file_size(&file_path).unwrap();
        assert_eq!(size, 1024);
    }

    #[test]
    fn test_file_size_nonexistent() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::file_size(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to get metadata"));
    }

    #[test]
    fn test_input_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("lines.txt");
        fs::write(&file_path, "one\ntwo").unwrap();

        let text = FileReader::input(&file_path).to_text().unwrap();
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            FileReader::display_name(&PathBuf::from("data/largeFile.txt")),
            "largeFile.txt"
        );
        assert_eq!(FileReader::display_name(Path::new("/")), "/");
    }
}
