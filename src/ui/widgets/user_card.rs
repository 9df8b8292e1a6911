//! User card widget
//!
//! Wraps the card canvas in a mouse area so the host learns about presses
//! and hover. Moves and releases are tracked globally by the host, since the
//! pointer leaves the card's layout bounds as soon as it drags it sideways.

use iced::widget::{canvas, mouse_area};
use iced::{Element, Length, mouse};

use crate::features::users::User;
use crate::features::thumbnails::Thumbnail;
use crate::ui::primitives::{CANVAS_HEIGHT, SwipeCardCanvas};
use crate::ui::swipe::CardTransform;

/// Build a user card
///
/// # Arguments
/// * `user` - Record shown on the card
/// * `thumbnail` - Cropped thumbnail, `None` while it loads
/// * `transform` - Offset, tilt, opacity and hover for this frame
/// * `dragging` - Whether the card currently holds the pointer
/// * `on_press` - Message sent when the pointer goes down on the card
/// * `on_enter` / `on_exit` - Hover messages
pub fn view<'a, Message: Clone + 'a>(
    user: &'a User,
    thumbnail: Option<&'a Thumbnail>,
    transform: CardTransform,
    dragging: bool,
    on_press: Message,
    on_enter: Message,
    on_exit: Message,
) -> Element<'a, Message> {
    let program = SwipeCardCanvas {
        name: user.display_name(),
        description: &user.description,
        likes: user.likes.to_string(),
        strip_color: user.strip_color(),
        thumbnail: thumbnail.map(|t| t.path.as_path()),
        transform,
    };

    let interaction = if dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(
        canvas(program)
            .width(Length::Fill)
            .height(Length::Fixed(CANVAS_HEIGHT)),
    )
    .on_press(on_press)
    .on_enter(on_enter)
    .on_exit(on_exit)
    .interaction(interaction)
    .into()
}
