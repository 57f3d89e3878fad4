use crate::core::Storage;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`. Absolute input paths ignore the base.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn open(&self, path: &str) -> io::Result<Box<dyn BufRead>> {
        let full_path = Path::new(&self.base_path).join(path);
        let file = File::open(full_path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_open_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("ModuleInfo.txt"), "Package a\n").unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let mut content = String::new();
        storage
            .open("ModuleInfo.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert_eq!(content, "Package a\n");
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = storage.open("missing.txt").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
