//! Theme system for the carousel
//! Supports both dark and light modes with a shared palette

use iced::color;
use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Font, Theme, font};

/// Weight used for slide descriptions and headings
pub const BOLD_WEIGHT: font::Weight = font::Weight::Bold;

/// Bold variant of the default font
pub const BOLD: Font = Font {
    weight: BOLD_WEIGHT,
    ..Font::DEFAULT
};

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
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

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

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
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

/// Placeholder fill for slides whose image is not available yet
pub fn slide_placeholder(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.1, 0.05, 0.2)
    } else {
        Color::from_rgb(0.9, 0.85, 0.95)
    }
}

/// Muted text for captions and status lines
pub fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_secondary(theme)),
    }
}

/// Page background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Carousel frame (the root element)
pub fn carousel_frame(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        color!(0x1a1a2e)
    } else {
        color!(0xe8e8f0)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Slide figure: image on top, caption below
pub fn slide_figure(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Blank slide area
pub fn slide_blank(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(slide_placeholder(theme))),
        ..Default::default()
    }
}

/// Carousel navigation button (semi-transparent)
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
            ..base
        },
        _ => base,
    }
}
