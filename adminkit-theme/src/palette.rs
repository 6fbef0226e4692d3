use iced::Color;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::color::parse_hex_color;

const DEFAULT_PRIMARY: &str = "#4e73df";
const DEFAULT_SECONDARY: &str = "#858796";
const DEFAULT_SUCCESS: &str = "#1cc88a";
const DEFAULT_INFO: &str = "#36b9cc";
const DEFAULT_WARNING: &str = "#f6c23e";
const DEFAULT_DANGER: &str = "#e74a3b";
const DEFAULT_LIGHT: &str = "#f8f9fc";
const DEFAULT_DARK: &str = "#5a5c69";
const DEFAULT_BODY_TEXT: &str = "#212529";
const DEFAULT_BODY_BACKGROUND: &str = "#f8f9fc";

/// Semantic color slots of the dashboard palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Danger,
    Light,
    Dark,
}

/// Named colors every dashboard surface resolves through.
///
/// Entries are hex literals so a palette can be persisted and edited as
/// plain JSON. Consumers must go through [`ThemePalette::color`] rather than
/// copying values, so replacing one entry restyles every border, hover and
/// active state that references it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub info: String,
    pub warning: String,
    pub danger: String,
    pub light: String,
    pub dark: String,
    pub body_text: String,
    pub body_background: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary: String::from(DEFAULT_PRIMARY),
            secondary: String::from(DEFAULT_SECONDARY),
            success: String::from(DEFAULT_SUCCESS),
            info: String::from(DEFAULT_INFO),
            warning: String::from(DEFAULT_WARNING),
            danger: String::from(DEFAULT_DANGER),
            light: String::from(DEFAULT_LIGHT),
            dark: String::from(DEFAULT_DARK),
            body_text: String::from(DEFAULT_BODY_TEXT),
            body_background: String::from(DEFAULT_BODY_BACKGROUND),
        }
    }
}

impl ThemePalette {
    /// Resolve a semantic slot to a concrete color.
    pub fn color(&self, slot: SemanticColor) -> Color {
        let (value, fallback) = match slot {
            SemanticColor::Primary => (&self.primary, DEFAULT_PRIMARY),
            SemanticColor::Secondary => (&self.secondary, DEFAULT_SECONDARY),
            SemanticColor::Success => (&self.success, DEFAULT_SUCCESS),
            SemanticColor::Info => (&self.info, DEFAULT_INFO),
            SemanticColor::Warning => (&self.warning, DEFAULT_WARNING),
            SemanticColor::Danger => (&self.danger, DEFAULT_DANGER),
            SemanticColor::Light => (&self.light, DEFAULT_LIGHT),
            SemanticColor::Dark => (&self.dark, DEFAULT_DARK),
        };

        resolve(value, fallback)
    }

    /// Default text color of the content pane.
    pub fn body_text(&self) -> Color {
        resolve(&self.body_text, DEFAULT_BODY_TEXT)
    }

    /// Background color behind all panes.
    pub fn body_background(&self) -> Color {
        resolve(&self.body_background, DEFAULT_BODY_BACKGROUND)
    }
}

/// Resolve a stored literal, falling back to the stock value when malformed.
fn resolve(value: &str, fallback: &str) -> Color {
    match parse_hex_color(value) {
        Ok(color) => color,
        Err(err) => {
            warn!("{err}, falling back to {fallback}");
            parse_hex_color(fallback).unwrap_or(Color::BLACK)
        },
    }
}

/// Nine-step gray ramp used by text utilities and muted chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrayScale {
    pub gray_100: String,
    pub gray_200: String,
    pub gray_300: String,
    pub gray_400: String,
    pub gray_500: String,
    pub gray_600: String,
    pub gray_700: String,
    pub gray_800: String,
    pub gray_900: String,
}

impl Default for GrayScale {
    fn default() -> Self {
        Self {
            gray_100: String::from("#f8f9fc"),
            gray_200: String::from("#eaecf4"),
            gray_300: String::from("#dddfeb"),
            gray_400: String::from("#d1d3e2"),
            gray_500: String::from("#b7b9cc"),
            gray_600: String::from("#858796"),
            gray_700: String::from("#6e707e"),
            gray_800: String::from("#5a5c69"),
            gray_900: String::from("#3a3b45"),
        }
    }
}

impl GrayScale {
    /// Resolve a ramp step given in hundreds (100..=900).
    ///
    /// Out-of-ramp steps resolve to the darkest gray.
    pub fn gray(&self, step: u16) -> Color {
        let value = match step {
            100 => &self.gray_100,
            200 => &self.gray_200,
            300 => &self.gray_300,
            400 => &self.gray_400,
            500 => &self.gray_500,
            600 => &self.gray_600,
            700 => &self.gray_700,
            800 => &self.gray_800,
            900 => &self.gray_900,
            other => {
                warn!("unknown gray step {other}, using 900");
                &self.gray_900
            },
        };

        resolve(value, "#3a3b45")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_stock_values() {
        let palette = ThemePalette::default();
        assert_eq!(
            palette.color(SemanticColor::Primary),
            Color::from_rgb8(0x4e, 0x73, 0xdf)
        );
        assert_eq!(
            palette.color(SemanticColor::Danger),
            Color::from_rgb8(0xe7, 0x4a, 0x3b)
        );
        assert_eq!(palette.body_text(), Color::from_rgb8(0x21, 0x25, 0x29));
    }

    #[test]
    fn replacing_an_entry_propagates_through_the_accessor() {
        let palette = ThemePalette {
            primary: String::from("#112233"),
            ..ThemePalette::default()
        };

        assert_eq!(
            palette.color(SemanticColor::Primary),
            Color::from_rgb8(0x11, 0x22, 0x33)
        );
        // Untouched slots keep their stock values.
        assert_eq!(
            palette.color(SemanticColor::Success),
            Color::from_rgb8(0x1c, 0xc8, 0x8a)
        );
    }

    #[test]
    fn malformed_entry_falls_back_to_stock_value() {
        let palette = ThemePalette {
            warning: String::from("not-a-color"),
            ..ThemePalette::default()
        };

        assert_eq!(
            palette.color(SemanticColor::Warning),
            Color::from_rgb8(0xf6, 0xc2, 0x3e)
        );
    }

    #[test]
    fn non_ascii_entry_falls_back_to_stock_value() {
        // A hand-edited persisted palette can hold anything; resolution
        // must fall back, never panic.
        let palette = ThemePalette {
            danger: String::from("#aé73d"),
            ..ThemePalette::default()
        };

        assert_eq!(
            palette.color(SemanticColor::Danger),
            Color::from_rgb8(0xe7, 0x4a, 0x3b)
        );
    }

    #[test]
    fn palette_round_trips_through_json() {
        let palette = ThemePalette::default();
        let json = serde_json::to_string(&palette).unwrap();
        let parsed: ThemePalette = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, palette);
    }

    #[test]
    fn gray_ramp_steps() {
        let grays = GrayScale::default();
        assert_eq!(grays.gray(500), Color::from_rgb8(0xb7, 0xb9, 0xcc));
        assert_eq!(grays.gray(900), Color::from_rgb8(0x3a, 0x3b, 0x45));
        // Off-ramp steps clamp to the darkest gray.
        assert_eq!(grays.gray(950), grays.gray(900));
    }
}
