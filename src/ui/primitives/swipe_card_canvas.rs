//! Swipe card drawing primitive
//!
//! Draws the whole card in a `canvas::Program` so the offset, tilt and fade
//! can be applied as one transform: translate to the card centre plus the
//! drag offset, rotate, then draw the layout from the card's top-left corner.
//!
//! # Design
//!
//! This is a primitive component - it uses generic Message types and
//! does not depend on application-specific types.

use std::path::Path as FsPath;

use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Text};
use iced::widget::image;
use iced::{Color, Font, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector, border, mouse};

use crate::ui::swipe::CardTransform;
use crate::ui::theme::{self, faded};

/// Space above each card
const MARGIN_TOP: f32 = 10.0;
/// Space left and right of each card
const MARGIN_X: f32 = 15.0;
const RADIUS: f32 = 10.0;
const THUMBNAIL_HEIGHT: f32 = 150.0;
const STRIP_HEIGHT: f32 = 52.0;
const STRIP_PADDING_X: f32 = 15.0;
const NAME_SIZE: f32 = 10.0;
const DESCRIPTION_SIZE: f32 = 13.0;
const LIKES_SIZE: f32 = 12.0;
const HEART_SIZE: f32 = 12.0;
/// Rough glyph advance relative to font size, for truncation and pill sizing
const GLYPH_WIDTH: f32 = 0.56;

/// Height of the card itself
const CARD_HEIGHT: f32 = THUMBNAIL_HEIGHT + STRIP_HEIGHT;
/// Height of the canvas hosting one card
pub const CANVAS_HEIGHT: f32 = MARGIN_TOP + CARD_HEIGHT;

/// One frame of a swipe card
pub struct SwipeCardCanvas<'a> {
    pub name: String,
    pub description: &'a str,
    pub likes: String,
    pub strip_color: Color,
    pub thumbnail: Option<&'a FsPath>,
    pub transform: CardTransform,
}

impl<Message> Program<Message> for SwipeCardCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let card = Size::new((bounds.width - 2.0 * MARGIN_X).max(0.0), CARD_HEIGHT);
        let t = self.transform;

        frame.with_save(|frame| {
            frame.translate(Vector::new(
                bounds.width / 2.0 + t.translation.x,
                MARGIN_TOP + CARD_HEIGHT / 2.0 + t.translation.y,
            ));
            frame.rotate(t.rotation);
            frame.translate(Vector::new(-card.width / 2.0, -card.height / 2.0));

            self.draw_shadow(frame, card, theme);
            self.draw_thumbnail(frame, card, theme);
            self.draw_strip(frame, card);
        });

        vec![frame.into_geometry()]
    }
}

impl SwipeCardCanvas<'_> {
    fn draw_shadow(&self, frame: &mut Frame, card: Size, theme: &Theme) {
        let hover = self.transform.hover;
        let lift = 2.0 + 3.0 * hover;
        let spread = 2.0 + 2.0 * hover;
        let shadow = Path::rounded_rectangle(
            Point::new(-spread / 2.0, lift),
            Size::new(card.width + spread, card.height + spread / 2.0),
            (RADIUS + spread).into(),
        );
        let color = theme::shadow_color(theme);
        let alpha = (0.45 + 0.35 * hover) * self.transform.opacity;
        frame.fill(&shadow, faded(color, alpha));
    }

    fn draw_thumbnail(&self, frame: &mut Frame, card: Size, theme: &Theme) {
        let opacity = self.transform.opacity;
        let area = Rectangle::new(Point::ORIGIN, Size::new(card.width, THUMBNAIL_HEIGHT));
        let top = border::Radius {
            top_left: RADIUS,
            top_right: RADIUS,
            bottom_right: 0.0,
            bottom_left: 0.0,
        };

        // Placeholder first so a loading image never leaves a hole
        frame.fill(
            &Path::rounded_rectangle(area.position(), area.size(), top),
            faded(theme::placeholder_bg(theme), opacity),
        );

        if let Some(path) = self.thumbnail {
            let handle = image::Handle::from_path(path);
            frame.draw_image(area, canvas::Image::new(handle).opacity(opacity));
        }
    }

    fn draw_strip(&self, frame: &mut Frame, card: Size) {
        let opacity = self.transform.opacity;
        let bottom = border::Radius {
            top_left: 0.0,
            top_right: 0.0,
            bottom_right: RADIUS,
            bottom_left: RADIUS,
        };
        let strip_top = THUMBNAIL_HEIGHT;
        frame.fill(
            &Path::rounded_rectangle(
                Point::new(0.0, strip_top),
                Size::new(card.width, STRIP_HEIGHT),
                bottom,
            ),
            faded(self.strip_color, opacity),
        );

        let text_color = faded(theme::CARD_TEXT, opacity);

        // Likes pill, right aligned and vertically centred
        let likes_width = self.likes.chars().count() as f32 * LIKES_SIZE * GLYPH_WIDTH;
        let pill = Size::new(8.0 + HEART_SIZE + 5.0 + likes_width + 8.0, 18.0);
        let pill_origin = Point::new(
            card.width - STRIP_PADDING_X - pill.width,
            strip_top + (STRIP_HEIGHT - pill.height) / 2.0,
        );
        frame.fill(
            &Path::rounded_rectangle(pill_origin, pill, (pill.height / 2.0).into()),
            faded(theme::LIKES_PILL, opacity),
        );
        frame.fill(
            &heart(
                Point::new(pill_origin.x + 8.0, pill_origin.y + (pill.height - HEART_SIZE) / 2.0),
                HEART_SIZE,
            ),
            text_color,
        );
        frame.fill_text(Text {
            content: self.likes.clone(),
            position: Point::new(
                pill_origin.x + 8.0 + HEART_SIZE + 5.0,
                pill_origin.y + pill.height / 2.0,
            ),
            color: text_color,
            size: Pixels(LIKES_SIZE),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });

        // Name and description share the space left of the pill
        let text_width = (pill_origin.x - STRIP_PADDING_X - 8.0).max(0.0);
        let name_top = strip_top + 8.0;
        frame.fill_text(Text {
            content: truncate_text(&self.name, max_chars(text_width, NAME_SIZE)),
            position: Point::new(STRIP_PADDING_X, name_top),
            color: text_color,
            size: Pixels(NAME_SIZE),
            font: Font {
                weight: iced::font::Weight::Black,
                ..Font::default()
            },
            ..Text::default()
        });
        frame.fill_text(Text {
            content: truncate_text(self.description, max_chars(text_width, DESCRIPTION_SIZE)),
            position: Point::new(STRIP_PADDING_X, name_top + NAME_SIZE * 1.3 + 2.0),
            color: text_color,
            size: Pixels(DESCRIPTION_SIZE),
            ..Text::default()
        });
    }
}

/// Heart glyph fitting a `size` square whose top-left is `origin`
fn heart(origin: Point, size: f32) -> Path {
    Path::new(|b| {
        let lobe = size * 0.27;
        b.circle(Point::new(origin.x + lobe, origin.y + size * 0.32), lobe);
        b.circle(Point::new(origin.x + size - lobe, origin.y + size * 0.32), lobe);
        b.move_to(Point::new(origin.x + size * 0.02, origin.y + size * 0.42));
        b.line_to(Point::new(origin.x + size / 2.0, origin.y + size * 0.95));
        b.line_to(Point::new(origin.x + size * 0.98, origin.y + size * 0.42));
        b.close();
    })
}

fn max_chars(width: f32, font_size: f32) -> usize {
    ((width / (font_size * GLYPH_WIDTH)).floor() as usize).max(1)
}

/// Truncate text with ellipsis if too long
fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer line", 5), "a lo…");
        assert_eq!(truncate_text("ação longa", 4), "açã…");
    }

    #[test]
    fn test_max_chars_never_zero() {
        assert_eq!(max_chars(0.0, 13.0), 1);
        assert!(max_chars(300.0, 13.0) > 30);
    }

    #[test]
    fn test_canvas_fits_card() {
        assert_eq!(CARD_HEIGHT, 202.0);
        assert_eq!(CANVAS_HEIGHT, CARD_HEIGHT + MARGIN_TOP);
    }
}
