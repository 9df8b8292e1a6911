//! Theme system for the card deck
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{container, scrollable};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const SURFACE_ELEVATED: Color = color!(0x242424);
    pub const BORDER: Color = color!(0x282828);
    pub const PLACEHOLDER: Color = color!(0x2a2a2a);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf5f5f5);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const SURFACE_ELEVATED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xdddddd);
    pub const PLACEHOLDER: Color = color!(0xe0e0e0);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Text printed on top of the coloured info strip
pub const CARD_TEXT: Color = Color::WHITE;

/// Pill behind the like count
pub const LIKES_PILL: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Elevated surface (toasts)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_ELEVATED
    } else {
        light::SURFACE_ELEVATED
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Thumbnail placeholder while the image loads
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PLACEHOLDER
    } else {
        light::PLACEHOLDER
    }
}

/// Drop shadow color
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.18)
    }
}

pub fn success(_theme: &Theme) -> Color {
    color!(0x1db954)
}

pub fn danger(_theme: &Theme) -> Color {
    color!(0xe22134)
}

pub fn info(_theme: &Theme) -> Color {
    color!(0x2e77d0)
}

/// Scale a color's alpha, used to fade whole cards
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Thin scrollbar that stays out of the way of the cards
pub fn deck_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: None,
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: iced::Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_scales_alpha() {
        let c = faded(Color::from_rgba(1.0, 0.5, 0.0, 0.8), 0.5);
        assert_eq!(c.a, 0.4);
        assert_eq!(c.r, 1.0);
        assert_eq!(faded(Color::WHITE, 2.0).a, 1.0);
        assert_eq!(faded(Color::WHITE, -1.0).a, 0.0);
    }

    #[test]
    fn test_modes_differ() {
        assert_ne!(background(&Theme::Dark), background(&Theme::Light));
        assert_eq!(text_primary(&Theme::Dark), Color::WHITE);
    }
}
