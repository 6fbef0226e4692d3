//! Responsive dashboard shell layout for the [`iced`] ui framework.
//!
//! This crate is split into two layers:
//! - model helpers ([`Breakpoint`], [`resolve_geometry`], [`flatten_menu`],
//!   [`chart_height`]) that are pure functions of caller-owned flags and the
//!   viewport width;
//! - view helpers ([`ShellView`], [`style`]) that compose the topnav, the
//!   sidenav, the content pane and the narrow-viewport scrim in `iced`.
//!
//! The shell holds no state of its own. The sidenav toggle flag and each
//! menu group's `collapsed` flag live in the embedding application; the
//! shell maps them to geometry. The toggle flag means "deviate from the
//! breakpoint default": on narrow viewports it shows the otherwise hidden
//! sidenav (over a scrim), on wide viewports it hides the otherwise docked
//! one.
//!
//! The recommended flow:
//! 1. store the toggle flag and the window size in your app state;
//! 2. feed them into [`ShellView::new`] together with a [`ShellSettings`];
//! 3. clear the flag from the [`ShellView::on_scrim_press`] message.
//!
//! See `examples/dashboard_shell.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use adminkit_ui_shell::{ShellSettings, ShellView};
//! use iced::widget::text;
//! use iced::{Element, Size};
//!
//! #[derive(Clone)]
//! enum Message {
//!     SidenavToggled,
//! }
//!
//! struct State {
//!     settings: ShellSettings,
//!     viewport: Size,
//!     sidenav_toggled: bool,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     ShellView::new(
//!         &state.settings,
//!         state.viewport,
//!         state.sidenav_toggled,
//!         text("dashboard content"),
//!     )
//!     .topnav(text("topnav"))
//!     .sidenav(text("sidenav"))
//!     .on_scrim_press(Message::SidenavToggled)
//!     .view()
//! }
//! ```

mod breakpoint;
mod layout;
mod menu;
mod settings;
mod sizing;
pub mod style;
mod view;

pub use breakpoint::{
    Breakpoint, COMPACT_BREAKPOINT, SIDENAV_BREAKPOINT, SizeClass,
};
pub use layout::{
    SCRIM_FADE, SCRIM_LAYER, SIDENAV_LAYER, SIDENAV_SLIDE, SIDENAV_WIDTH,
    Scrim, ShellGeometry, TOPNAV_HEIGHT, TOPNAV_LAYER, resolve_geometry,
};
pub use menu::{
    MenuNode, MenuRow, NESTED_INDENT, flatten_menu, indicator_rotation,
};
pub use settings::ShellSettings;
pub use sizing::{
    COMPACT_CELL_PADDING, ChartKind, DATA_TABLE_CHROME_FONT,
    TABLE_FONT_COMPACT, TABLE_FONT_REGULAR, chart_height, table_font_size,
};
pub use view::ShellView;
