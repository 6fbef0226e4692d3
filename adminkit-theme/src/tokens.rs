use iced::{Color, Shadow, Vector};

use crate::palette::{SemanticColor, ThemePalette};

/// Width of the colored accent strip on dashboard cards.
pub const ACCENT_BORDER_WIDTH: f32 = 4.0;

/// Side a card accent strip attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentEdge {
    Left,
    Bottom,
}

/// Resolved accent strip for a dashboard card.
///
/// `iced` borders are uniform, so the strip is rendered by the shell as a
/// thin filled container along one edge rather than as a border property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentBorder {
    pub edge: AccentEdge,
    pub width: f32,
    pub color: Color,
}

/// Build the accent strip for a semantic color and edge.
pub fn accent_border(
    palette: &ThemePalette,
    slot: SemanticColor,
    edge: AccentEdge,
) -> AccentBorder {
    AccentBorder {
        edge,
        width: ACCENT_BORDER_WIDTH,
        color: palette.color(slot),
    }
}

/// Drop shadow presets for card surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardShadow {
    Light,
    #[default]
    Default,
    Dark,
}

impl CardShadow {
    pub fn shadow(&self) -> Shadow {
        let alpha = match self {
            Self::Light => 0.1,
            Self::Default => 0.15,
            Self::Dark => 0.25,
        };

        Shadow {
            color: Color::from_rgba8(0x3a, 0x3b, 0x45, alpha),
            offset: Vector::new(0.0, 2.4),
            blur_radius: 28.0,
        }
    }
}

/// Scrollbar cosmetics applied across the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarStyle {
    pub width: f32,
    pub track: Color,
    pub thumb: Color,
    pub thumb_hovered: Color,
    pub thumb_radius: f32,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            width: 10.0,
            track: Color::from_rgb8(0xf1, 0xf1, 0xf1),
            thumb: Color::from_rgb8(0x88, 0x88, 0x88),
            thumb_hovered: Color::from_rgb8(0x55, 0x55, 0x55),
            thumb_radius: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_strip_follows_the_palette() {
        let palette = ThemePalette {
            success: String::from("#005500"),
            ..ThemePalette::default()
        };

        let strip =
            accent_border(&palette, SemanticColor::Success, AccentEdge::Left);
        assert_eq!(strip.width, ACCENT_BORDER_WIDTH);
        assert_eq!(strip.color, Color::from_rgb8(0x00, 0x55, 0x00));
        assert_eq!(strip.edge, AccentEdge::Left);
    }

    #[test]
    fn shadow_presets_differ_only_in_alpha() {
        let light = CardShadow::Light.shadow();
        let dark = CardShadow::Dark.shadow();

        assert_eq!(light.offset, dark.offset);
        assert_eq!(light.blur_radius, dark.blur_radius);
        assert!(light.color.a < dark.color.a);
    }
}
