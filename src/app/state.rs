// src/app/state.rs
//! Application state definitions

use iced::time::Instant;
use std::path::PathBuf;
use std::sync::Arc;

use crate::app::deck::DeckState;
use crate::features::Settings;
use crate::features::thumbnails::ThumbnailCache;
use crate::ui::swipe::SwipeConfig;
use crate::ui::widgets::{Toast, ToastStyle};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, caches, window)
    pub core: CoreState,
    /// The card deck
    pub deck: DeckState,
    /// UI state (toast, window size)
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    /// Card behaviour derived from settings
    pub swipe_config: SwipeConfig,
    /// Where the deck comes from; `None` means the sample deck
    pub users_path: Option<PathBuf>,
    pub thumbnail_cache: Option<Arc<ThumbnailCache>>,
    /// Last known cursor position, used as the origin of a press;
    /// unknown until the first cursor move
    pub mouse_position: Option<iced::Point>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings, users_path: Option<PathBuf>) -> Self {
        Self {
            swipe_config: settings.swipe.to_config(),
            settings,
            users_path,
            thumbnail_cache: None,
            mouse_position: None,
        }
    }
}

/// UI state
pub struct UiState {
    pub toast: Option<Toast>,
    next_toast_id: u64,
    /// Current window width, drives the card tilt
    pub window_width: f32,
}

impl UiState {
    pub fn new(window_width: f32) -> Self {
        Self {
            toast: None,
            next_toast_id: 0,
            window_width,
        }
    }

    /// Replace the current toast, returning its id for the hide timer
    pub fn show_toast(&mut self, message: impl Into<String>, style: ToastStyle) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toast = Some(Toast::new(id, message, style));
        id
    }

    /// Hide the toast only if it is still the one the timer was started for
    pub fn hide_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }
}

impl App {
    /// Whether anything on screen still needs animation frames
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.deck.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_hide_keeps_newer_toast() {
        let mut ui = UiState::new(400.0);
        let first = ui.show_toast("Deleted!", ToastStyle::Info);
        let second = ui.show_toast("Deleted!", ToastStyle::Info);
        assert_ne!(first, second);

        ui.hide_toast(first);
        assert_eq!(ui.toast.as_ref().map(|t| t.id), Some(second));

        ui.hide_toast(second);
        assert!(ui.toast.is_none());
    }

    #[test]
    fn test_swipe_config_follows_settings() {
        let mut settings = Settings::default();
        settings.swipe.dismiss_threshold = -120.0;
        let core = CoreState::new(settings, None);
        assert_eq!(core.swipe_config.dismiss_threshold, -120.0);
    }
}
