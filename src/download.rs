//! Asset downloads — streaming a remote original to local storage.
//!
//! Asset bytes live behind a pre-signed storage URL, not the API host, so
//! the fetch goes out without a Bearer header; the URL embeds its own
//! authorization. The body is streamed to a `.partial` sibling and renamed
//! into place only once fully written, so a failed download never leaves a
//! truncated file under the final name.

use crate::error::DownloadError;
use reqwest::Client;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Fetches an asset's original bytes into a local directory.
#[derive(Clone)]
pub struct AssetDownloader {
    client: Client,
}

impl AssetDownloader {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Download `asset` into `dir`, returning the final file path.
    ///
    /// The descriptor must carry at least `name` (the destination filename)
    /// and `original` (the pre-signed URL). An existing file of the same
    /// name is overwritten. Returns only after the bytes are on stable
    /// storage.
    pub async fn download(&self, asset: &Value, dir: &Path) -> Result<PathBuf, DownloadError> {
        let name = descriptor_str(asset, "name")?;
        let url = descriptor_str(asset, "original")?;

        let mut resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DownloadError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let final_path = dir.join(name);
        let partial_path = dir.join(format!(".{name}.partial"));

        if let Err(e) = write_body(&mut resp, &partial_path).await {
            let _ = fs::remove_file(&partial_path).await;
            return Err(e);
        }

        fs::rename(&partial_path, &final_path).await?;
        Ok(final_path)
    }
}

impl Default for AssetDownloader {
    fn default() -> Self {
        Self::new()
    }
}

async fn write_body(resp: &mut reqwest::Response, path: &Path) -> Result<(), DownloadError> {
    let mut file = fs::File::create(path).await?;
    while let Some(chunk) = resp.chunk().await? {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

fn descriptor_str<'a>(asset: &'a Value, key: &'static str) -> Result<&'a str, DownloadError> {
    asset
        .get(key)
        .and_then(Value::as_str)
        .ok_or(DownloadError::MissingField(key))
}
