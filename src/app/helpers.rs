//! Async helper functions for loading the deck and its images

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::features::thumbnails::{Thumbnail, ThumbnailCache, default_cache_dir};
use crate::features::users::{User, UsersError, load_users, sample_users};

/// Environment variable that overrides the configured users file
pub const USERS_ENV: &str = "SWIPECARD_USERS";

/// Pick the users file: environment first, then settings
pub fn resolve_users_path(env: Option<String>, configured: Option<&Path>) -> Option<PathBuf> {
    env.filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
}

/// Initialize the on-disk thumbnail cache
pub async fn init_thumbnail_cache() -> anyhow::Result<ThumbnailCache> {
    let dir = default_cache_dir();
    tracing::info!("Initializing thumbnail cache at: {}", dir.display());
    ThumbnailCache::new(dir)
}

/// Load the deck, or the sample deck when no file is configured
pub async fn load_deck(path: Option<PathBuf>) -> Result<Vec<User>, UsersError> {
    match path {
        Some(path) => tokio::task::spawn_blocking(move || load_users(&path))
            .await
            .map_err(|e| UsersError::Io(e.to_string()))?,
        None => Ok(sample_users()),
    }
}

/// Fetch one card thumbnail, logging failures
pub async fn load_thumbnail(cache: Arc<ThumbnailCache>, reference: String) -> Option<Thumbnail> {
    match cache.fetch(&reference).await {
        Ok(thumb) => Some(thumb),
        Err(e) => {
            tracing::warn!("Failed to load thumbnail {}: {:#}", reference, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_settings() {
        let configured = PathBuf::from("/etc/users.json");
        assert_eq!(
            resolve_users_path(Some("/tmp/deck.json".into()), Some(configured.as_path())),
            Some(PathBuf::from("/tmp/deck.json"))
        );
        assert_eq!(
            resolve_users_path(Some("  ".into()), Some(configured.as_path())),
            Some(configured.clone())
        );
        assert_eq!(resolve_users_path(None, None), None);
    }

    #[test]
    fn test_load_deck_without_path_uses_sample() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let users = runtime.block_on(load_deck(None)).unwrap();
        assert_eq!(users, sample_users());
    }

    #[test]
    fn test_load_deck_missing_file() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let result = runtime.block_on(load_deck(Some("/definitely/not/users.json".into())));
        assert!(matches!(result, Err(UsersError::Io(_))));
    }
}
