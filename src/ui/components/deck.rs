//! Scrollable deck of user cards

use iced::time::Instant;
use iced::widget::{Space, column, container, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::app::deck::DeckEntry;
use crate::ui::{theme, widgets};

/// Build the deck view
///
/// # Arguments
/// * `entries` - Cards in display order
/// * `now` - Frame time for the fade animations
/// * `window_width` - Width the card tilt is scaled against
pub fn view<'a>(
    entries: &'a [DeckEntry],
    now: Instant,
    window_width: f32,
) -> Element<'a, Message> {
    if entries.is_empty() {
        return empty_state();
    }

    let cards = entries.iter().fold(column![], |col, entry| {
        let id = entry.id;
        col.push(widgets::user_card(
            &entry.user,
            entry.thumbnail.as_ref(),
            entry.card.transform(now, window_width),
            entry.card.is_dragging(),
            Message::CardPressed(id),
            Message::CardHovered(id),
            Message::CardUnhovered(id),
        ))
    });

    scrollable(cards.push(Space::new().height(20)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::deck_scrollable)
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let content = column![
        text("No more cards").size(18).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        }),
        text("Press R to reload the deck").size(13).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
