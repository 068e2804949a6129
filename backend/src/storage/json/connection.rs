use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Connection to a directory of JSON storage files.
///
/// Cheap to clone; repositories hold a clone and derive their file paths
/// from the base directory.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection, ensuring the base directory exists
    pub fn new(base_directory: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_directory)?;
        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Full path for a storage file within the base directory
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("kyma");

        let connection = JsonConnection::new(nested.clone()).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_file_path_joins_base_directory() {
        let dir = tempdir().unwrap();
        let connection = JsonConnection::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(
            connection.file_path("preferences.json"),
            dir.path().join("preferences.json")
        );
    }
}
