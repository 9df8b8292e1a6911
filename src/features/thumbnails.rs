//! Card thumbnail cache
//!
//! Remote thumbnails are downloaded once, then every thumbnail is cropped to
//! the card's banner aspect ratio so it can be drawn edge to edge without
//! clipping. Both the download and the crop are cached on disk.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use image::ImageFormat;
use xxhash_rust::xxh3::xxh3_64;

use crate::utils::{detect_image_format, find_cached_image, is_remote};

/// Width / height ratio of the image area on a card
pub const CARD_IMAGE_ASPECT: f32 = 2.6;

/// A thumbnail ready for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Thumbnail cache manager
#[derive(Debug, Clone)]
pub struct ThumbnailCache {
    cache_dir: PathBuf,
    client: reqwest::Client,
}

impl ThumbnailCache {
    /// Create a new thumbnail cache with the specified cache directory
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .context("Failed to create thumbnail cache directory")?;
        Ok(Self {
            cache_dir,
            client: reqwest::Client::new(),
        })
    }

    /// Cache key for an image reference
    pub fn hash_reference(reference: &str) -> String {
        format!("{:016x}", xxh3_64(reference.as_bytes()))
    }

    /// Resolve a user's thumbnail reference into a card-ready image
    pub async fn fetch(&self, reference: &str) -> Result<Thumbnail> {
        let hash = Self::hash_reference(reference);
        let cropped = self.cache_dir.join(format!("card_{}.jpg", hash));

        if cropped.exists() {
            let path = cropped.clone();
            let (width, height) = tokio::task::spawn_blocking(move || {
                image::image_dimensions(&path).context("Failed to read cached thumbnail")
            })
            .await??;
            return Ok(Thumbnail {
                path: cropped,
                width,
                height,
            });
        }

        let source = if is_remote(reference) {
            self.download(reference, &hash).await?
        } else {
            PathBuf::from(reference)
        };

        tokio::task::spawn_blocking(move || crop_to_card(&source, &cropped)).await?
    }

    /// Download a remote image into the cache, keeping its real extension
    async fn download(&self, url: &str, hash: &str) -> Result<PathBuf> {
        let stem = format!("thumb_{}", hash);
        if let Some(existing) = find_cached_image(&self.cache_dir, &stem) {
            return Ok(existing);
        }

        tracing::debug!("Downloading thumbnail {}", url);
        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .context("Thumbnail request failed")?
            .error_for_status()
            .context("Thumbnail request rejected")?
            .bytes()
            .await
            .context("Failed to read thumbnail body")?;

        let ext = detect_image_format(&bytes);
        let path = self.cache_dir.join(format!("{}.{}", stem, ext));
        let partial = partial_path(&path);
        tokio::fs::write(&partial, &bytes)
            .await
            .context("Failed to write thumbnail to cache")?;
        if let Err(e) = tokio::fs::rename(&partial, &path).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(e).context("Failed to move thumbnail into cache");
        }
        Ok(path)
    }
}

/// Centre-crop an image to the card aspect ratio and save it as JPEG
fn crop_to_card(source: &Path, target: &Path) -> Result<Thumbnail> {
    let img = image::open(source)
        .with_context(|| format!("Failed to decode thumbnail {}", source.display()))?;

    let (x, y, width, height) = card_crop(img.width(), img.height());
    let cropped = img.crop_imm(x, y, width, height).to_rgb8();

    let mut output = Vec::new();
    cropped
        .write_to(&mut Cursor::new(&mut output), ImageFormat::Jpeg)
        .context("Failed to encode thumbnail")?;
    write_atomic(target, &output)?;

    Ok(Thumbnail {
        path: target.to_path_buf(),
        width,
        height,
    })
}

/// Unique sibling of `path` to write into before renaming over it
///
/// The name never matches a cached image, so lookups skip it.
fn partial_path(path: &Path) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}-{}.part", name, std::process::id(), n))
}

/// Write a cache file so readers only ever see it complete
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let partial = partial_path(path);
    std::fs::write(&partial, bytes).context("Failed to write thumbnail to cache")?;
    if let Err(e) = std::fs::rename(&partial, path) {
        let _ = std::fs::remove_file(&partial);
        return Err(e).context("Failed to move thumbnail into cache");
    }
    Ok(())
}

/// Largest centred rectangle with the card aspect ratio
fn card_crop(width: u32, height: u32) -> (u32, u32, u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0, width, height);
    }
    let aspect = width as f32 / height as f32;
    if aspect > CARD_IMAGE_ASPECT {
        let crop_w = ((height as f32 * CARD_IMAGE_ASPECT).round() as u32).clamp(1, width);
        ((width - crop_w) / 2, 0, crop_w, height)
    } else {
        let crop_h = ((width as f32 / CARD_IMAGE_ASPECT).round() as u32).clamp(1, height);
        (0, (height - crop_h) / 2, width, crop_h)
    }
}

/// Get the default thumbnail cache directory
pub fn default_cache_dir() -> PathBuf {
    crate::utils::thumbnails_cache_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_crop_wide_image() {
        let (x, y, w, h) = card_crop(1000, 100);
        assert_eq!((w, h), (260, 100));
        assert_eq!((x, y), (370, 0));
    }

    #[test]
    fn test_card_crop_tall_image() {
        let (x, y, w, h) = card_crop(520, 800);
        assert_eq!((w, h), (520, 200));
        assert_eq!((x, y), (0, 300));
    }

    #[test]
    fn test_card_crop_degenerate() {
        assert_eq!(card_crop(0, 10), (0, 0, 0, 10));
    }

    #[test]
    fn test_hash_is_stable() {
        let a = ThumbnailCache::hash_reference("https://example.com/a.png");
        let b = ThumbnailCache::hash_reference("https://example.com/a.png");
        let c = ThumbnailCache::hash_reference("https://example.com/b.png");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_crop_local_file() {
        let dir = std::env::temp_dir().join(format!("swipecard-thumbs-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let source = dir.join("source.png");
        image::RgbImage::from_pixel(400, 400, image::Rgb([10, 20, 30]))
            .save(&source)
            .unwrap();

        let target = dir.join("card.jpg");
        let thumb = crop_to_card(&source, &target).unwrap();
        assert_eq!((thumb.width, thumb.height), (400, 154));
        assert_eq!(image::image_dimensions(&target).unwrap(), (400, 154));

        // Only the source and the finished crop are left behind
        let mut names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["card.jpg", "source.png"]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_paths_are_unique_and_hidden() {
        let target = Path::new("/cache/thumb_0123.png");
        let a = partial_path(target);
        let b = partial_path(target);
        assert_ne!(a, b);
        assert_eq!(a.parent(), target.parent());
        assert!(a.file_name().unwrap().to_string_lossy().starts_with(".thumb_0123.png."));
        assert_eq!(a.extension().unwrap(), "part");
    }

    #[test]
    fn test_concurrent_crops_never_expose_partial_file() {
        let dir = std::env::temp_dir().join(format!("swipecard-thumbs-race-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let source = dir.join("source.png");
        image::RgbImage::from_pixel(520, 200, image::Rgb([200, 40, 90]))
            .save(&source)
            .unwrap();
        let target = dir.join("card.jpg");

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| crop_to_card(&source, &target).unwrap());
            }
            scope.spawn(|| {
                for _ in 0..200 {
                    if target.exists() {
                        assert_eq!(image::image_dimensions(&target).unwrap(), (520, 200));
                    }
                }
            });
        });
        assert_eq!(image::image_dimensions(&target).unwrap(), (520, 200));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_fetch_missing_local_file_fails() {
        let dir = std::env::temp_dir().join(format!("swipecard-thumbs-miss-{}", std::process::id()));
        let cache = ThumbnailCache::new(dir.clone()).unwrap();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let result = runtime.block_on(cache.fetch("/definitely/not/here.png"));
        assert!(result.is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
