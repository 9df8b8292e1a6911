//! Main application module

pub mod deck;
pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};
use std::sync::Arc;

use crate::features::Settings;
use crate::features::settings::SettingsError;
use crate::features::thumbnails::ThumbnailCache;
use crate::ui::widgets::ToastStyle;
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    ///
    /// `settings_error` is the problem, if any, met while reading the
    /// settings file; it is shown once the window is up.
    pub fn new(
        settings: Settings,
        settings_error: Option<SettingsError>,
    ) -> (Self, Task<Message>) {
        // 1. Resolve where the deck comes from
        let users_path = helpers::resolve_users_path(
            std::env::var(helpers::USERS_ENV).ok(),
            settings.users_path.as_deref(),
        );
        match &users_path {
            Some(path) => tracing::info!("Loading users from {}", path.display()),
            None => tracing::info!("No users file configured, using the sample deck"),
        }

        // 2. Initialize sub-states
        let window_width = settings.window.width;
        let core = CoreState::new(settings, users_path);
        let ui = UiState::new(window_width);

        let app = Self {
            core,
            deck: Default::default(),
            ui,
        };

        // 3. Initialize async tasks
        let settings_toast = match settings_error {
            Some(e) => Task::done(settings_error_toast(&e)),
            None => Task::none(),
        };
        let init_task = Task::batch([
            Task::perform(helpers::init_thumbnail_cache(), cache_message),
            app.load_deck_task(),
            settings_toast,
        ]);

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the number of cards left
    pub fn title(&self) -> String {
        if self.deck.is_empty() {
            return "Swipecard".to_string();
        }
        match self.deck.len() {
            1 => "Swipecard - 1 card".to_string(),
            n => format!("Swipecard - {} cards", n),
        }
    }

    /// Subscriptions for animations, pointer tracking, keyboard and resize
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Instant;

        let now = Instant::now();

        // 1. Card animations
        let has_animations = self.has_active_animations(now);

        // 2. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 3. Animation subscription (vsync rate while anything moves)
        let animation_sub = if subscription_logic::needs_animation_subscription(has_animations) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 4. Window resize
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        // 5. Pointer events, tracked window-wide so a drag keeps working
        // after the cursor leaves the card's bounds
        let pointer_sub = iced::event::listen().filter_map(pointer_message);

        // Batch all subscriptions
        iced::Subscription::batch([keyboard_sub, animation_sub, resize_sub, pointer_sub])
    }
}

/// Turn the cache set-up result into a message
fn cache_message(result: anyhow::Result<ThumbnailCache>) -> Message {
    match result {
        Ok(cache) => Message::ThumbnailCacheReady(Arc::new(cache)),
        Err(e) => {
            tracing::warn!("Thumbnail cache unavailable: {:#}", e);
            Message::ShowToast(
                format!("Thumbnails unavailable: {}", e),
                ToastStyle::Error,
            )
        }
    }
}

fn settings_error_toast(error: &SettingsError) -> Message {
    Message::ShowToast(
        format!("Using default settings: {}", error),
        ToastStyle::Error,
    )
}

/// Map a raw window event to a gesture message
fn pointer_message(event: iced::Event) -> Option<Message> {
    use iced::{mouse, window};

    match event {
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        iced::Event::Mouse(mouse::Event::CursorLeft)
        | iced::Event::Window(window::Event::Unfocused) => Some(Message::GestureTerminated),
        _ => None,
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(has_animations: bool) -> bool {
        has_animations
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use super::*;

    #[test]
    fn no_frames_when_idle() {
        assert!(!needs_animation_subscription(false));
        assert!(needs_animation_subscription(true));
    }

    #[test]
    fn cache_failure_is_shown() {
        let message = cache_message(Err(anyhow::anyhow!("read-only disk")));
        assert!(matches!(
            message,
            Message::ShowToast(text, ToastStyle::Error) if text.contains("read-only disk")
        ));
    }

    #[test]
    fn settings_failure_is_shown() {
        let message = settings_error_toast(&SettingsError::Parse("expected value".into()));
        assert!(matches!(
            message,
            Message::ShowToast(text, ToastStyle::Error) if text.contains("expected value")
        ));
    }

    #[test]
    fn pointer_events_map_to_gestures() {
        use iced::{Point, mouse, window};

        let moved = pointer_message(iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(4.0, 2.0),
        }));
        assert!(matches!(moved, Some(Message::PointerMoved(p)) if p == Point::new(4.0, 2.0)));

        let released = pointer_message(iced::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        )));
        assert!(matches!(released, Some(Message::PointerReleased)));

        let right = pointer_message(iced::Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Right,
        )));
        assert!(right.is_none());

        assert!(matches!(
            pointer_message(iced::Event::Mouse(mouse::Event::CursorLeft)),
            Some(Message::GestureTerminated)
        ));
        assert!(matches!(
            pointer_message(iced::Event::Window(window::Event::Unfocused)),
            Some(Message::GestureTerminated)
        ));
    }
}
