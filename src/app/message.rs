//! Application messages

use std::sync::Arc;

use iced::keyboard::{Key, Modifiers};

use crate::app::deck::CardId;
use crate::features::thumbnails::{Thumbnail, ThumbnailCache};
use crate::features::users::User;
use crate::ui::widgets::ToastStyle;

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Deck ============
    /// Users loaded for a new deck
    UsersLoaded(Vec<User>),
    /// Loading the users file failed; the sample deck is shown instead
    UsersLoadFailed(String),
    /// Reload the deck from its source
    ReloadDeck,
    /// Thumbnail cache created
    ThumbnailCacheReady(Arc<ThumbnailCache>),
    /// Thumbnail fetched for a card (`None` on failure)
    ThumbnailLoaded(CardId, Option<Thumbnail>),
    /// A card was tapped
    UserSelected(CardId),
    /// A card was swiped away
    UserDismissed(CardId),

    // ============ Gesture ============
    /// Pointer went down on a card
    CardPressed(CardId),
    /// Cursor entered a card
    CardHovered(CardId),
    /// Cursor left a card
    CardUnhovered(CardId),
    /// Cursor moved anywhere in the window
    PointerMoved(iced::Point),
    /// Left button released anywhere in the window
    PointerReleased,
    /// The window took the pointer away (cursor left, focus lost)
    GestureTerminated,

    // ============ Window ============
    /// Animation frame
    AnimationTick,
    /// Window resized
    WindowResized(iced::Size),
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),

    // ============ Toast ============
    /// Show toast notification
    ShowToast(String, ToastStyle),
    /// Hide the toast with the given id
    HideToast(u64),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use a macro to reduce boilerplate for simple variants
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages
            Self::AnimationTick => simple!("AnimationTick"),
            Self::PointerMoved(p) => simple!("PointerMoved", "{:.0}, {:.0}", p.x, p.y),

            // Large Vec data - only show count
            Self::UsersLoaded(v) => simple!("UsersLoaded", "{} users", v.len()),

            // Arc-wrapped types - just show variant name
            Self::ThumbnailCacheReady(_) => simple!("ThumbnailCacheReady"),

            Self::UsersLoadFailed(e) => simple!("UsersLoadFailed", "{}", e),
            Self::ReloadDeck => simple!("ReloadDeck"),
            Self::ThumbnailLoaded(id, t) => {
                simple!("ThumbnailLoaded", "card={}, ok={}", id, t.is_some())
            }
            Self::UserSelected(id) => simple!("UserSelected", "{}", id),
            Self::UserDismissed(id) => simple!("UserDismissed", "{}", id),
            Self::CardPressed(id) => simple!("CardPressed", "{}", id),
            Self::CardHovered(id) => simple!("CardHovered", "{}", id),
            Self::CardUnhovered(id) => simple!("CardUnhovered", "{}", id),
            Self::PointerReleased => simple!("PointerReleased"),
            Self::GestureTerminated => simple!("GestureTerminated"),
            Self::WindowResized(s) => simple!("WindowResized", "{}x{}", s.width, s.height),
            Self::KeyPressed(k, _) => simple!("KeyPressed", "{:?}", k),
            Self::ShowToast(_, style) => simple!("ShowToast", "{:?}", style),
            Self::HideToast(id) => simple!("HideToast", "{}", id),
        }
    }
}
