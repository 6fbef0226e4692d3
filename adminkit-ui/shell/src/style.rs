use adminkit_theme::{
    AccentBorder, CardShadow, NavLinkState, SidenavVariant, ThemePalette,
};
use iced::widget::container;
use iced::{Background, Color, border};

use crate::layout::Scrim;

/// Page body behind all panes.
pub fn body(palette: &ThemePalette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.body_background())),
        text_color: Some(palette.body_text()),
        ..container::Style::default()
    }
}

/// Card surface with the dashboard drop shadow.
pub fn card(shadow: CardShadow) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: border::rounded(6.0),
        shadow: shadow.shadow(),
        ..container::Style::default()
    }
}

/// Filled strip rendering a card accent border along one edge.
pub fn accent_strip(accent: AccentBorder) -> container::Style {
    container::Style {
        background: Some(Background::Color(accent.color)),
        ..container::Style::default()
    }
}

/// Top navigation bar chrome.
pub fn topnav(variant: SidenavVariant) -> container::Style {
    let text_color = match variant {
        SidenavVariant::Dark => Color {
            a: 0.5,
            ..Color::WHITE
        },
        SidenavVariant::Light => Color::from_rgb8(0x21, 0x25, 0x29),
    };

    container::Style {
        background: Some(Background::Color(variant.background())),
        text_color: Some(text_color),
        ..container::Style::default()
    }
}

/// Side navigation pane chrome.
pub fn sidenav(
    palette: &ThemePalette,
    variant: SidenavVariant,
) -> container::Style {
    container::Style {
        background: Some(Background::Color(variant.background())),
        text_color: Some(variant.link_color(palette, NavLinkState::Idle)),
        ..container::Style::default()
    }
}

/// Pinned footer at the bottom of the sidenav.
pub fn sidenav_footer(variant: SidenavVariant) -> container::Style {
    container::Style {
        background: Some(Background::Color(variant.footer_background())),
        ..container::Style::default()
    }
}

/// Semi-transparent overlay behind an overlaying sidenav.
pub fn scrim(scrim: Scrim) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: scrim.opacity,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrim_style_uses_the_resolved_opacity() {
        let style = scrim(Scrim::default());
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.a, 0.5);
                assert_eq!(color.r, 0.0);
            },
            other => panic!("unexpected scrim background: {other:?}"),
        }
    }

    #[test]
    fn body_style_tracks_the_palette() {
        let palette = ThemePalette {
            body_background: String::from("#101010"),
            ..ThemePalette::default()
        };

        let style = body(&palette);
        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgb8(0x10, 0x10, 0x10)))
        );
    }
}
