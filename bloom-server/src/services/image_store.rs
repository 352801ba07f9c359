//! Inspiration Image Store
//!
//! Accepts raw upload bytes, validates and re-encodes to JPEG, dedupes by
//! content hash and returns the public URL path. Supports multiple image
//! formats (PNG, JPEG, WebP) and converts to JPG.

use crate::utils::{AppError, ErrorCode};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality (85% keeps floral color depth while controlling file size)
const JPEG_QUALITY: u8 = 85;

/// One stored image
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoredImage {
    pub file_id: String,
    pub filename: String,
    pub size: usize,
    /// Public URL path, e.g. `/api/image/<uuid>.jpg`
    pub url: String,
}

/// File-system backed image store rooted at `work_dir/uploads/images`
#[derive(Debug, Clone)]
pub struct ImageStore {
    images_dir: PathBuf,
}

impl ImageStore {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Validate upload bytes without writing anything:
    /// size cap, extension allow-list, decodable image data.
    pub fn validate(&self, data: &[u8], filename: &str) -> Result<(), AppError> {
        if data.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyFile));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File too large. Maximum size is {}MB",
                    MAX_FILE_SIZE / 1024 / 1024
                ),
            ));
        }

        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| AppError::new(ErrorCode::InvalidFileExtension))?;
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::UnsupportedFileFormat,
                format!(
                    "Unsupported file format '{}'. Supported: {}",
                    ext,
                    SUPPORTED_FORMATS.join(", ")
                ),
            ));
        }

        if let Err(e) = image::load_from_memory(data) {
            return Err(AppError::with_message(
                ErrorCode::InvalidImageFile,
                format!("Invalid image file ({ext}): {e}"),
            ));
        }

        Ok(())
    }

    /// Re-encode to JPEG, dedupe by content hash, persist, return the URL.
    /// Callers must run [`ImageStore::validate`] first.
    pub fn store(&self, data: &[u8], original_name: &str) -> Result<StoredImage, AppError> {
        fs::create_dir_all(&self.images_dir).map_err(|e| {
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to create images directory: {e}"),
            )
        })?;

        let compressed = compress_to_jpeg(data)?;
        let file_hash = calculate_hash(&compressed);

        // Duplicate content returns the existing file
        if let Some(existing) = self.find_by_hash(&file_hash) {
            tracing::info!(
                original_name = %original_name,
                existing_file = %existing,
                "Duplicate image detected, returning existing file"
            );
            let file_id = existing
                .strip_suffix(".jpg")
                .map(|s| s.to_string())
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            return Ok(StoredImage {
                url: format!("/api/image/{existing}"),
                file_id,
                filename: existing,
                size: compressed.len(),
            });
        }

        let file_id = Uuid::new_v4().to_string();
        let filename = format!("{file_id}.jpg");
        let file_path = self.images_dir.join(&filename);

        fs::write(&file_path, &compressed).map_err(|e| {
            AppError::with_message(ErrorCode::FileStorageFailed, format!("Failed to save file: {e}"))
        })?;

        self.create_hash_symlink(&file_hash, &filename)?;

        tracing::info!(
            original_name = %original_name,
            size = %compressed.len(),
            hash = %file_hash,
            "Image stored"
        );

        Ok(StoredImage {
            url: format!("/api/image/{filename}"),
            file_id,
            filename,
            size: compressed.len(),
        })
    }

    /// Resolve a stored file path for serving. Rejects path traversal.
    pub fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
            return None;
        }
        let path = self.images_dir.join(filename);
        path.is_file().then_some(path)
    }

    /// Find existing file by content hash
    fn find_by_hash(&self, hash: &str) -> Option<String> {
        let hash_dir = self.images_dir.join("by_hash");
        if !hash_dir.exists() {
            return None;
        }

        // Hash directory uses first 2 chars as subdir (e.g., "ab/abc123...")
        let prefix = &hash[..2];
        let hash_path = hash_dir.join(format!("{prefix}/{hash}"));

        if hash_path.exists()
            && let Ok(target) = fs::read_link(&hash_path)
        {
            return target.file_name().map(|s| s.to_string_lossy().to_string());
        }
        None
    }

    /// Create hash-based symlink for deduplication
    fn create_hash_symlink(&self, hash: &str, filename: &str) -> Result<(), AppError> {
        let hash_subdir = self.images_dir.join("by_hash").join(&hash[..2]);
        fs::create_dir_all(&hash_subdir).map_err(|e| {
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to create hash dir: {e}"),
            )
        })?;

        let hash_path = hash_subdir.join(hash);
        let target_path = PathBuf::from("../../").join(filename);

        symlink::symlink_auto(&target_path, &hash_path).map_err(|e| {
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to create symlink: {e}"),
            )
        })?;

        Ok(())
    }
}

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Re-encode arbitrary image bytes as JPEG with the standard quality
fn compress_to_jpeg(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(data).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidImageFile, format!("Invalid image: {e}"))
    })?;

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img.write_with_encoder(encoder).map_err(|e| {
            AppError::with_message(
                ErrorCode::ImageProcessingFailed,
                format!("Failed to compress image: {e}"),
            )
        })?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png() -> Vec<u8> {
        // 2x2 red PNG generated via the image crate
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([255, 0, 0]));
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_validate_rejects_empty() {
        let store = ImageStore::new("/tmp/does-not-matter");
        let err = store.validate(&[], "a.png").unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyFile);
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let store = ImageStore::new("/tmp/does-not-matter");
        let err = store.validate(&sample_png(), "a.gif").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedFileFormat);
    }

    #[test]
    fn test_validate_rejects_garbage_bytes() {
        let store = ImageStore::new("/tmp/does-not-matter");
        let err = store.validate(b"not an image", "a.png").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidImageFile);
    }

    #[test]
    fn test_store_and_dedupe() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        let data = sample_png();

        store.validate(&data, "a.png").unwrap();
        let first = store.store(&data, "a.png").unwrap();
        let second = store.store(&data, "b.png").unwrap();

        // Same content resolves to the same stored file
        assert_eq!(first.filename, second.filename);
        assert!(first.url.starts_with("/api/image/"));
        assert!(store.resolve(&first.filename).is_some());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let store = ImageStore::new("/tmp/does-not-matter");
        assert!(store.resolve("../etc/passwd").is_none());
        assert!(store.resolve("a/b.jpg").is_none());
    }
}
