//! Light and dark palettes

use crate::state::FieldIndicator;
use ratatui::style::Color;

/// Border color of a slot with no feedback
const NEUTRAL: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
/// Border color of an accepted slot
const VALID: Color = Color::Rgb(0x10, 0xb9, 0x81);
/// Border color of a rejected slot
const INVALID: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Colors used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub status_bar: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Rgb(0x11, 0x18, 0x27),
                text: Color::Rgb(0xf9, 0xfa, 0xfb),
                muted: Color::Gray,
                accent: Color::Cyan,
                status_bar: Color::DarkGray,
            }
        } else {
            Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Blue,
                status_bar: Color::Gray,
            }
        }
    }

    /// Border color of a field slot. The active slot shows the accent
    /// unless it carries feedback.
    pub fn field_border(&self, indicator: FieldIndicator, is_active: bool) -> Color {
        match indicator {
            FieldIndicator::Invalid => INVALID,
            FieldIndicator::Valid => VALID,
            FieldIndicator::Neutral if is_active => self.accent,
            FieldIndicator::Neutral => NEUTRAL,
        }
    }

    pub fn error_text(&self) -> Color {
        INVALID
    }
}
