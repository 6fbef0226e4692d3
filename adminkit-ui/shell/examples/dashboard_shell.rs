use adminkit_theme::{CardShadow, SemanticColor, SidenavVariant};
use adminkit_ui_shell::{
    ChartKind, MenuNode, ShellSettings, ShellView, SizeClass, chart_height,
    flatten_menu, style,
};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length, Size, Subscription, Task};

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .window_size(Size {
            width: 1280.0,
            height: 720.0,
        })
        .title("AdminKit dashboard shell")
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    SidenavToggled,
    Window(iced::window::Event),
    GroupToggled(usize),
}

struct App {
    settings: ShellSettings,
    viewport: Size,
    sidenav_toggled: bool,
    menu: Vec<MenuNode>,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let menu = vec![
            MenuNode::Heading(String::from("Core")),
            MenuNode::Link {
                title: String::from("Dashboard"),
                active: true,
            },
            MenuNode::Group {
                title: String::from("Reports"),
                collapsed: true,
                children: vec![
                    MenuNode::Link {
                        title: String::from("Daily"),
                        active: false,
                    },
                    MenuNode::Link {
                        title: String::from("Monthly"),
                        active: false,
                    },
                ],
            },
            MenuNode::Group {
                title: String::from("Devices"),
                collapsed: true,
                children: vec![MenuNode::Link {
                    title: String::from("All devices"),
                    active: false,
                }],
            },
        ];

        (
            Self {
                settings: ShellSettings::default()
                    .with_variant(SidenavVariant::Dark),
                viewport: Size {
                    width: 1280.0,
                    height: 720.0,
                },
                sidenav_toggled: false,
                menu,
            },
            Task::none(),
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::window::events().map(|(_id, event)| Message::Window(event))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SidenavToggled => {
                self.sidenav_toggled = !self.sidenav_toggled;
            },
            Message::Window(iced::window::Event::Resized(size)) => {
                self.viewport = size;
            },
            Message::Window(_) => {},
            Message::GroupToggled(index) => {
                if let Some(MenuNode::Group { collapsed, .. }) =
                    self.menu.get_mut(index)
                {
                    *collapsed = !*collapsed;
                }
            },
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        ShellView::new(
            &self.settings,
            self.viewport,
            self.sidenav_toggled,
            self.view_content(),
        )
        .topnav(self.view_topnav())
        .sidenav(self.view_menu())
        .on_scrim_press(Message::SidenavToggled)
        .view()
    }

    fn view_topnav(&self) -> Element<'_, Message> {
        row![
            button(text("menu")).on_press(Message::SidenavToggled).padding(8),
            text("AdminKit").size(20),
        ]
        .spacing(16)
        .padding(8)
        .into()
    }

    fn view_menu(&self) -> Element<'_, Message> {
        let mut menu = column![].spacing(4).padding(8);

        // Flatten per top-level entry so each group row keeps the index
        // its toggle message needs.
        for (index, node) in self.menu.iter().enumerate() {
            for entry in flatten_menu(std::slice::from_ref(node)) {
                let indent =
                    Space::new().width(Length::Fixed(entry.indent()));
                let label: Element<'_, Message> = match entry.node {
                    MenuNode::Heading(title) => {
                        text(title.to_uppercase()).size(12).into()
                    },
                    MenuNode::Group {
                        title, collapsed, ..
                    } if entry.depth == 0 => {
                        let arrow = if *collapsed { "<" } else { "v" };
                        button(text(format!("{title} {arrow}")))
                            .on_press(Message::GroupToggled(index))
                            .padding(0)
                            .into()
                    },
                    MenuNode::Link { title, .. }
                    | MenuNode::Group { title, .. } => {
                        text(title.clone()).into()
                    },
                };

                menu = menu.push(row![indent, label]);
            }
        }

        menu.into()
    }

    fn view_content(&self) -> Element<'_, Message> {
        let class = SizeClass::from_width(self.viewport.width);
        let palette = &self.settings.palette;

        let chart = |kind: ChartKind, label: &str| {
            container(text(label.to_string()))
                .width(Length::Fill)
                .height(Length::Fixed(chart_height(kind, class)))
                .padding(16)
                .style({
                    let shadow = CardShadow::Default;
                    move |_| style::card(shadow)
                })
        };

        let accent = container(Space::new())
            .width(Length::Fixed(4.0))
            .height(Length::Fixed(40.0))
            .style({
                let accent = adminkit_theme::accent_border(
                    palette,
                    SemanticColor::Primary,
                    adminkit_theme::AccentEdge::Left,
                );
                move |_| style::accent_strip(accent)
            });

        column![
            row![accent, text("Earnings (monthly)").size(24)].spacing(8),
            chart(ChartKind::Area, "area chart"),
            chart(ChartKind::Bar, "bar chart"),
        ]
        .spacing(16)
        .padding(16)
        .into()
    }
}
