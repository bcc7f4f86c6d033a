//! Saving a gallery entry to disk.
//!
//! The image is fetched again from its URL (or looked up in the object
//! store for `blob:` URLs), parked under a temporary object URL while it is
//! written, and the temporary URL is revoked afterwards.

use crate::error::DownloadError;
use crate::objects::{is_object_url, Blob, ObjectStore};
use crate::types::GeneratedImage;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Characters of the prompt kept in the filename.
const FILENAME_PROMPT_CHARS: usize = 30;

/// `ai-image-<first 30 chars, non-alphanumerics as '-'>.png`
pub fn download_filename(prompt: &str) -> String {
    let stem: String = prompt
        .chars()
        .take(FILENAME_PROMPT_CHARS)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("ai-image-{stem}.png")
}

/// Fetch the bytes behind an image URL.
///
/// `timeout` bounds the whole HTTP exchange, body included.
pub async fn fetch_image(
    client: &reqwest::Client,
    objects: &ObjectStore,
    url: &str,
    timeout: Duration,
) -> Result<Blob, DownloadError> {
    if is_object_url(url) {
        return objects
            .get(url)
            .ok_or_else(|| DownloadError::ObjectNotFound(url.to_string()));
    }

    let fetch_err = |e: reqwest::Error| DownloadError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    };

    let resp = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(fetch_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(DownloadError::Status {
            url: url.to_string(),
            status_code: status.as_u16(),
        });
    }

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/png")
        .to_string();

    let mut bytes = Vec::new();
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        bytes.extend_from_slice(&chunk.map_err(fetch_err)?);
    }

    tracing::debug!("Fetched {} bytes from {url}", bytes.len());
    Ok(Blob::new(bytes, content_type))
}

/// Write an entry's image into `dir`, returning the written path.
pub async fn save_image(
    client: &reqwest::Client,
    objects: &ObjectStore,
    image: &GeneratedImage,
    dir: &Path,
    timeout: Duration,
) -> Result<PathBuf, DownloadError> {
    let blob = fetch_image(client, objects, &image.url, timeout).await?;

    let temp_url = objects.create(blob);
    let result = write_object(objects, &temp_url, dir, &image.prompt).await;
    objects.revoke(&temp_url);

    result
}

async fn write_object(
    objects: &ObjectStore,
    url: &str,
    dir: &Path,
    prompt: &str,
) -> Result<PathBuf, DownloadError> {
    let blob = objects
        .get(url)
        .ok_or_else(|| DownloadError::ObjectNotFound(url.to_string()))?;

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(download_filename(prompt));
    tokio::fs::write(&path, &blob.bytes).await?;

    tracing::info!("Saved {} bytes to {:?}", blob.len(), path);
    Ok(path)
}
