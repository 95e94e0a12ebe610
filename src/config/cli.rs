use crate::core::Storage;
use crate::utils::error::Result;
use std::path::Path;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Never replace an earlier visual.
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full_path)
            .await?;
        file.write_all(data).await?;
        file.flush().await?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DesignerError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_file_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("output");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        let written = storage.write_file("nested/visual.png", b"data").await.unwrap();

        assert!(written.ends_with("visual.png"));
        assert_eq!(std::fs::read(base.join("nested/visual.png")).unwrap(), b"data");
    }

    #[tokio::test]
    async fn test_write_file_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("visual-1.png", b"first").await.unwrap();
        let err = storage.write_file("visual-1.png", b"second").await.unwrap_err();

        match err {
            DesignerError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(std::fs::read(temp_dir.path().join("visual-1.png")).unwrap(), b"first");
    }
}
