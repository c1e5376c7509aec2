use crate::utils::file::{upload_file_name, upload_url};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Writes uploaded cover images into a single directory.
#[derive(Debug, Clone)]
pub struct UploadSink {
    dir: PathBuf,
}

impl UploadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores `bytes` under a timestamp-prefixed name and returns the public
    /// `/uploads/<name>` path.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> std::io::Result<String> {
        fs::create_dir_all(&self.dir).await?;

        let file_name = upload_file_name(Utc::now().timestamp_millis(), original_name);
        let path = self.dir.join(&file_name);
        fs::write(&path, bytes).await?;

        info!("Stored upload {} ({} bytes)", path.display(), bytes.len());
        Ok(upload_url(&file_name))
    }
}
