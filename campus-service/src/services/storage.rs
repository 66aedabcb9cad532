use async_trait::async_trait;
use rand::Rng;
use service_core::error::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Write-only sink for uploaded files. Nothing reads them back.
#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn save(&self, name: &str, data: &[u8]) -> Result<(), AppError>;
}

pub struct LocalUploadStore {
    base_path: PathBuf,
}

impl LocalUploadStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(&self, name: &str, data: &[u8]) -> Result<(), AppError> {
        // Stored names are generated, so a separator here means a bug upstream
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "refusing to store upload under unsafe name {:?}",
                name
            )));
        }

        fs::write(self.base_path.join(name), data).await?;
        Ok(())
    }
}

/// Collision-resistant name: `<unix millis>-<random 0..1e9><.ext>`.
///
/// Only the extension of the client-supplied name survives.
pub fn generate_stored_name(original_name: &str) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();

    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    format!(
        "{}-{}{}",
        chrono::Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_name_keeps_extension() {
        let name = generate_stored_name("Lecture Notes.pdf");
        assert!(name.ends_with(".pdf"));
        assert_ne!(name, "Lecture Notes.pdf");

        let (millis, rest) = name.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        let suffix = rest.trim_end_matches(".pdf");
        assert!(suffix.parse::<u32>().unwrap() < 1_000_000_000);
    }

    #[test]
    fn test_stored_name_without_extension() {
        let name = generate_stored_name("README");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_stored_name_drops_path_components() {
        let name = generate_stored_name("../../etc/passwd.pdf");
        assert!(!name.contains('/'));
        assert!(name.ends_with(".pdf"));
    }

    #[tokio::test]
    async fn test_local_store_rejects_traversal() {
        let dir = std::env::temp_dir().join(format!("campus-store-{}", std::process::id()));
        let store = LocalUploadStore::new(&dir).await.unwrap();

        assert!(store.save("../escape.pdf", b"x").await.is_err());
        assert!(store.save("1-2.pdf", b"%PDF").await.is_ok());
        assert_eq!(fs::read(dir.join("1-2.pdf")).await.unwrap(), b"%PDF");

        let _ = fs::remove_dir_all(&dir).await;
    }
}
