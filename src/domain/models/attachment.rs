#[cfg(test)]
#[path = "attachment_test.rs"]
mod tests;

use std::path::Path;

use anyhow::bail;
use anyhow::Result;
use bytes::Bytes;
use tokio::fs;

/// A file staged for submission. Cloning shares the underlying buffer, so the
/// transcript and the outbound request point at the same bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    mime: String,
    bytes: Bytes,
}

impl Attachment {
    pub fn new(file_name: &str, bytes: impl Into<Bytes>) -> Attachment {
        return Attachment {
            file_name: file_name.to_string(),
            mime: mime_guess::from_path(file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
            bytes: bytes.into(),
        };
    }

    pub async fn from_path(path: &Path) -> Result<Attachment> {
        let metadata = match fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::error!(path = ?path, error = ?err, "Failed to stat attachment");
                bail!(format!("Could not read {}: {err}", path.display()));
            }
        };
        if !metadata.is_file() {
            bail!(format!("{} is not a file", path.display()));
        }

        let file_name = path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_else(|| return "upload".to_string());
        let contents = fs::read(path).await?;

        return Ok(Attachment::new(&file_name, contents));
    }

    pub fn file_name(&self) -> &str {
        return &self.file_name;
    }

    pub fn mime(&self) -> &str {
        return &self.mime;
    }

    pub fn bytes(&self) -> &Bytes {
        return &self.bytes;
    }

    pub fn len(&self) -> usize {
        return self.bytes.len();
    }

    pub fn is_image(&self) -> bool {
        return self.mime.starts_with("image/");
    }

    pub fn human_size(&self) -> String {
        let len = self.len() as f64;
        if len < 1024.0 {
            return format!("{} B", self.len());
        }
        if len < 1024.0 * 1024.0 {
            return format!("{:.1} KB", len / 1024.0);
        }

        return format!("{:.1} MB", len / (1024.0 * 1024.0));
    }

    /// One line summary used for previews and image bubbles.
    pub fn describe(&self) -> String {
        return format!("{} ({}, {})", self.file_name, self.mime, self.human_size());
    }
}
