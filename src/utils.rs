//! Utility functions

use std::path::{Path, PathBuf};

// ============================================================================
// Image Extensions
// ============================================================================

/// Common image file extensions for cache lookup
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "webp", "bmp"];

/// Find an existing cached image file with any common extension
///
/// # Arguments
/// * `dir` - The directory to search in
/// * `stem` - The filename without extension (e.g., "thumb_0123abcd")
pub fn find_cached_image(dir: &Path, stem: &str) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.exists())
}

// ============================================================================
// Cache Directories
// ============================================================================

/// Get the base cache directory for swipecard
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swipecard")
}

/// Get the thumbnails cache directory
pub fn thumbnails_cache_dir() -> PathBuf {
    cache_dir().join("thumbnails")
}

/// Detect image format from magic bytes
/// Returns the correct file extension (without dot)
pub fn detect_image_format(bytes: &[u8]) -> &'static str {
    if bytes.len() < 8 {
        return "jpg";
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "png";
    }

    // JPEG: FF D8 FF
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "jpg";
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

/// Whether an image reference should be fetched over HTTP
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_image_format() {
        assert_eq!(
            detect_image_format(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            "png"
        );
        assert_eq!(
            detect_image_format(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0]),
            "jpg"
        );
        assert_eq!(detect_image_format(b"RIFF\0\0\0\0WEBPVP8 "), "webp");
        assert_eq!(detect_image_format(b"GIF89a\0\0"), "gif");
        assert_eq!(detect_image_format(&[1, 2, 3]), "jpg");
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/a.png"));
        assert!(is_remote("http://example.com/a.png"));
        assert!(!is_remote("/home/user/a.png"));
        assert!(!is_remote("assets/a.png"));
    }

    #[test]
    fn test_find_cached_image() {
        let dir = std::env::temp_dir().join(format!("swipecard-utils-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("thumb_test.png");
        std::fs::write(&path, b"x").unwrap();

        assert_eq!(find_cached_image(&dir, "thumb_test"), Some(path.clone()));
        assert_eq!(find_cached_image(&dir, "thumb_missing"), None);

        let _ = std::fs::remove_file(&path);
    }
}
