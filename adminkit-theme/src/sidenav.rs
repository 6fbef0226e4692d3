use iced::Color;
use serde::{Deserialize, Serialize};

use crate::palette::{SemanticColor, ThemePalette};

/// Chrome variant of the side navigation pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidenavVariant {
    #[default]
    Dark,
    Light,
}

/// Interaction state of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLinkState {
    Idle,
    Hovered,
    Active,
}

impl SidenavVariant {
    /// Background of the navigation pane.
    pub fn background(&self) -> Color {
        match self {
            Self::Dark => Color::from_rgb8(0x21, 0x25, 0x29),
            Self::Light => Color::from_rgb8(0xf8, 0xf9, 0xfa),
        }
    }

    /// Background of the pinned footer at the bottom of the pane.
    pub fn footer_background(&self) -> Color {
        match self {
            Self::Dark => Color::from_rgb8(0x34, 0x3a, 0x40),
            Self::Light => Color::from_rgb8(0xe9, 0xec, 0xef),
        }
    }

    /// Color of section headings between link groups.
    pub fn heading_color(&self) -> Color {
        match self {
            Self::Dark => Color {
                a: 0.25,
                ..Color::WHITE
            },
            Self::Light => Color::from_rgb8(0xad, 0xb5, 0xbd),
        }
    }

    /// Text color of a navigation link.
    ///
    /// Light chrome resolves hover and active links through the palette
    /// primary, so retinting the palette restyles the pane.
    pub fn link_color(
        &self,
        palette: &ThemePalette,
        state: NavLinkState,
    ) -> Color {
        match (self, state) {
            (Self::Dark, NavLinkState::Idle) => Color {
                a: 0.5,
                ..Color::WHITE
            },
            (Self::Dark, _) => Color::WHITE,
            (Self::Light, NavLinkState::Idle) => {
                Color::from_rgb8(0x21, 0x25, 0x29)
            },
            (Self::Light, _) => palette.color(SemanticColor::Primary),
        }
    }

    /// Color of the icon leading a navigation link.
    ///
    /// Icons brighten only on the active link; hover leaves them muted.
    pub fn icon_color(
        &self,
        palette: &ThemePalette,
        state: NavLinkState,
    ) -> Color {
        match (self, state) {
            (Self::Dark, NavLinkState::Active) => Color::WHITE,
            (Self::Dark, _) => Color {
                a: 0.25,
                ..Color::WHITE
            },
            (Self::Light, NavLinkState::Active) => {
                palette.color(SemanticColor::Primary)
            },
            (Self::Light, _) => Color::from_rgb8(0xad, 0xb5, 0xbd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_links_brighten_on_hover_and_active() {
        let palette = ThemePalette::default();
        let variant = SidenavVariant::Dark;

        let idle = variant.link_color(&palette, NavLinkState::Idle);
        assert_eq!(idle.a, 0.5);
        assert_eq!(
            variant.link_color(&palette, NavLinkState::Hovered),
            Color::WHITE
        );
        assert_eq!(
            variant.link_color(&palette, NavLinkState::Active),
            Color::WHITE
        );
    }

    #[test]
    fn dark_icons_brighten_only_when_active() {
        let palette = ThemePalette::default();
        let variant = SidenavVariant::Dark;

        assert_eq!(
            variant.icon_color(&palette, NavLinkState::Idle),
            variant.icon_color(&palette, NavLinkState::Hovered)
        );
        assert_eq!(
            variant.icon_color(&palette, NavLinkState::Active),
            Color::WHITE
        );
    }

    #[test]
    fn light_chrome_tracks_the_palette_primary() {
        let palette = ThemePalette {
            primary: String::from("#aa00bb"),
            ..ThemePalette::default()
        };
        let variant = SidenavVariant::Light;
        let primary = Color::from_rgb8(0xaa, 0x00, 0xbb);

        assert_eq!(
            variant.link_color(&palette, NavLinkState::Hovered),
            primary
        );
        assert_eq!(variant.link_color(&palette, NavLinkState::Active), primary);
        assert_eq!(variant.icon_color(&palette, NavLinkState::Active), primary);
    }
}
