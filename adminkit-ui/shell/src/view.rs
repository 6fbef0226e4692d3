use iced::widget::{Space, column, container, mouse_area, row, stack};
use iced::{Element, Length, Size};

use crate::breakpoint::Breakpoint;
use crate::layout::{SIDENAV_WIDTH, TOPNAV_HEIGHT, resolve_geometry};
use crate::settings::ShellSettings;
use crate::style;

/// Dashboard shell composition helper.
///
/// The shell owns no state: the viewport size and the sidenav toggle flag
/// come from the caller on every render, and the resolved geometry follows
/// from those two inputs alone. Pressing the narrow-viewport scrim emits
/// the optional `on_scrim_press` message so the caller can clear its flag.
pub struct ShellView<'a, Message> {
    settings: &'a ShellSettings,
    viewport: Size,
    toggled: bool,
    content: Element<'a, Message>,
    topnav: Option<Element<'a, Message>>,
    sidenav: Option<Element<'a, Message>>,
    on_scrim_press: Option<Message>,
}

impl<'a, Message: Clone + 'a> ShellView<'a, Message> {
    /// Create a shell around the main content pane.
    pub fn new(
        settings: &'a ShellSettings,
        viewport: Size,
        toggled: bool,
        content: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            settings,
            viewport,
            toggled,
            content: content.into(),
            topnav: None,
            sidenav: None,
            on_scrim_press: None,
        }
    }

    /// Place an element inside the top navigation bar.
    pub fn topnav(mut self, topnav: impl Into<Element<'a, Message>>) -> Self {
        self.topnav = Some(topnav.into());
        self
    }

    /// Place an element inside the side navigation pane.
    pub fn sidenav(mut self, sidenav: impl Into<Element<'a, Message>>) -> Self {
        self.sidenav = Some(sidenav.into());
        self
    }

    /// Emit a message when the scrim behind an overlaying sidenav is
    /// pressed.
    pub fn on_scrim_press(mut self, message: Message) -> Self {
        self.on_scrim_press = Some(message);
        self
    }

    /// Compose the shell into an element tree.
    pub fn view(self) -> Element<'a, Message> {
        let settings = self.settings;
        let palette = &settings.palette;
        let variant = settings.variant;

        let breakpoint = Breakpoint::from_width(self.viewport.width);
        let geometry = resolve_geometry(self.toggled, breakpoint);

        let topnav = container(
            self.topnav.unwrap_or_else(|| Space::new().into()),
        )
        .width(Length::Fill)
        .height(Length::Fixed(TOPNAV_HEIGHT))
        .style(move |_| style::topnav(variant));

        let content = container(self.content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| style::body(palette));

        let body: Element<'a, Message> = if !geometry.sidenav_visible() {
            content.into()
        } else {
            let sidenav = container(
                self.sidenav.unwrap_or_else(|| Space::new().into()),
            )
            .width(Length::Fixed(SIDENAV_WIDTH))
            .height(Length::Fill)
            .style(move |_| style::sidenav(palette, variant));

            match geometry.scrim {
                // Narrow viewport: the sidenav floats over the content,
                // scrim between them.
                Some(scrim) => {
                    let overlay = mouse_area(
                        container(Space::new())
                            .width(Length::Fill)
                            .height(Length::Fill)
                            .style(move |_| style::scrim(scrim)),
                    );
                    let overlay = match self.on_scrim_press {
                        Some(message) => overlay.on_press(message),
                        None => overlay,
                    };

                    stack![content, overlay, sidenav]
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .into()
                },
                // Wide viewport: the sidenav docks beside the content.
                None => row![sidenav, content]
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
            }
        };

        column![topnav, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
