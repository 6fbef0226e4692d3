//! Color palette and styling tokens for the AdminKit dashboard shell.
//!
//! Everything in this crate is declarative data: the semantic palette
//! ([`ThemePalette`]), the gray ramp ([`GrayScale`]), the side navigation
//! chrome variants ([`SidenavVariant`]) and a handful of fixed tokens
//! (accent borders, card shadows, scrollbar cosmetics). Layout and widget
//! composition live in `adminkit-ui-shell`.
//!
//! Palette entries are stored as hex literals and resolved to [`iced::Color`]
//! on access, so a persisted theme edited by hand stays loadable: a malformed
//! entry logs a warning and falls back to the stock value instead of failing.

mod color;
mod palette;
mod sidenav;
mod tokens;

pub use color::{ColorParseError, Rgb, parse_hex_color};
pub use palette::{GrayScale, SemanticColor, ThemePalette};
pub use sidenav::{NavLinkState, SidenavVariant};
pub use tokens::{
    ACCENT_BORDER_WIDTH, AccentBorder, AccentEdge, CardShadow, ScrollbarStyle,
    accent_border,
};
