//! Remote slide images
//!
//! Slides pointing at `http(s)` URLs are downloaded once into a cache directory.
//! Files are named after an xxh3 hash of the URL; the extension comes from the
//! image's magic bytes, not from the URL.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::{debug, error};
use xxhash_rust::xxh3::xxh3_64;

/// Common image file extensions for cache lookup
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "webp", "bmp"];

/// Request timeout for image downloads, in seconds
const TIMEOUT: u64 = 30;

/// HTTP client for slide image downloads
pub fn client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT))
        .build()
}

/// Local copies of remote slide images, keyed by URL
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    files: HashMap<String, PathBuf>,
}

impl ImageCache {
    pub fn get(&self, url: &str) -> Option<&Path> {
        self.files.get(url).map(PathBuf::as_path)
    }

    pub fn insert(&mut self, url: String, path: PathBuf) {
        self.files.insert(url, path);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.files.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// File name stem for a URL's cached copy
pub fn cache_stem(url: &str) -> String {
    format!("slide_{:016x}", xxh3_64(url.as_bytes()))
}

/// Find an existing cached image file with any common extension
///
/// Empty files are not images and are skipped.
pub fn find_cached_image(dir: &Path, stem: &str) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| std::fs::metadata(p).is_ok_and(|meta| meta.is_file() && meta.len() > 0))
}

/// Detect image format from magic bytes
pub fn detect_image_format(bytes: &[u8]) -> &'static str {
    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "png";
    }

    // GIF: 47 49 46 38
    if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
        return "gif";
    }

    // WebP: 52 49 46 46 ... 57 45 42 50
    if bytes.len() >= 12 && bytes.starts_with(&[0x52, 0x49, 0x46, 0x46]) && &bytes[8..12] == b"WEBP"
    {
        return "webp";
    }

    // BMP: 42 4D
    if bytes.starts_with(&[0x42, 0x4D]) {
        return "bmp";
    }

    "jpg"
}

/// Download `url` into `dir` unless a copy is already there
pub async fn fetch(client: reqwest::Client, url: String, dir: PathBuf) -> Result<PathBuf> {
    let stem = cache_stem(&url);
    if let Some(existing) = find_cached_image(&dir, &stem) {
        debug!("Slide image already cached: {} -> {:?}", url, existing);
        return Ok(existing);
    }

    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("creating cache directory {:?}", dir))?;

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        bail!("{} answered {}", url, response.status());
    }
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        bail!("{} answered with an empty body", url);
    }

    let path = store(&dir, &stem, &bytes).await?;
    debug!("Downloaded slide image {} ({} bytes)", url, bytes.len());
    Ok(path)
}

/// Write image bytes under `stem` in `dir`
///
/// The bytes go to `{stem}.tmp` first and are renamed once complete, so a failed
/// write never leaves a file under the final name.
pub async fn store(dir: &Path, stem: &str, bytes: &[u8]) -> Result<PathBuf> {
    let temp_path = dir.join(format!("{}.tmp", stem));
    let final_path = dir.join(format!("{}.{}", stem, detect_image_format(bytes)));

    if let Err(e) = tokio::fs::write(&temp_path, bytes).await {
        error!("Failed to write downloaded image: {}", e);
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e).with_context(|| format!("writing {:?}", temp_path));
    }

    if let Err(e) = tokio::fs::rename(&temp_path, &final_path).await {
        error!("Failed to rename temp file: {}", e);
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e).with_context(|| format!("renaming {:?} to {:?}", temp_path, final_path));
    }

    Ok(final_path)
}
