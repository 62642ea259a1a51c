// SPDX-License-Identifier: MPL-2.0
//! Demo application showing stacked snacks.
//!
//! The `App` owns a snack [`Manager`] and a handful of buttons that enqueue
//! snacks of every variant. Action handlers of the snacks come back as plain
//! [`Message`]s, so undo and retry are handled like any other message.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, paths, Config};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::notifications::{AnchorOrigin, Horizontal, Manager, Snack, Variant, Vertical};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Anchors visited by [`Message::CycleAnchor`], in order.
const ANCHORS: [AnchorOrigin; 6] = [
    AnchorOrigin::new(Vertical::Bottom, Horizontal::Left),
    AnchorOrigin::new(Vertical::Bottom, Horizontal::Center),
    AnchorOrigin::new(Vertical::Bottom, Horizontal::Right),
    AnchorOrigin::new(Vertical::Top, Horizontal::Right),
    AnchorOrigin::new(Vertical::Top, Horizontal::Center),
    AnchorOrigin::new(Vertical::Top, Horizontal::Left),
];

/// Root Iced application state.
pub struct App {
    snacks: Manager<Message>,
    config: Config,
    /// Number of undo actions handled so far.
    undone: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.snacks.active_count())
            .field("queued", &self.snacks.queued_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), None)
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(anchor) = &flags.anchor {
        config.placement.anchor_origin = Some(AnchorOrigin::parse_lossy(anchor));
    }
    if let Some(max_snack) = flags.max_snack {
        config.stack.max_snack = Some(max_snack);
    }
    if flags.hide_icons {
        config.appearance.hide_icon_variant = Some(true);
    }
}

fn sample_message(variant: Variant) -> &'static str {
    match variant {
        Variant::Default => "Message archived",
        Variant::Error => "Connection lost",
        Variant::Success => "Settings saved",
        Variant::Warning => "Battery is running low",
        Variant::Info => "A new version is available",
    }
}

impl App {
    /// Loads the configuration, applies `flags` and shows any load warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (mut config, warning) = config::load();
        apply_flags(&mut config, &flags);

        (Self::with_config(config, warning), Task::none())
    }

    fn with_config(config: Config, warning: Option<String>) -> Self {
        let mut app = Self {
            snacks: Manager::from_config(&config),
            config,
            undone: 0,
        };
        if let Some(warning) = warning {
            app.show(Snack::warning(warning));
        }
        app
    }

    fn title(&self) -> String {
        match self.snacks.active_count() {
            0 => "IcedSnack".to_string(),
            n => format!("IcedSnack ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        self.snacks.subscription().map(Message::Snack)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Snack(snack_message) => {
                if let Some(host) = self.snacks.update(snack_message) {
                    return self.update(host);
                }
            }
            Message::Show(Variant::Error) => {
                self.show(
                    Snack::error(sample_message(Variant::Error))
                        .with_action("RETRY")
                        .on_click_action(Message::Retry),
                );
            }
            Message::Show(variant) => {
                self.show(Snack::new(sample_message(variant)).with_variant(variant));
            }
            Message::ShowUndoable => {
                self.show(
                    Snack::new("Item deleted")
                        .with_action("UNDO")
                        .on_click_action(Message::Undo),
                );
            }
            Message::Undo(key) => {
                self.snacks.close(key);
                self.undone += 1;
                self.show(Snack::success("Item restored"));
            }
            Message::Retry(key) => {
                self.snacks.close(key);
                self.show(Snack::info("Reconnecting..."));
            }
            Message::CycleAnchor => {
                let current = self.snacks.props().anchor_origin.unwrap_or_default();
                let next = ANCHORS
                    .iter()
                    .position(|a| *a == current)
                    .map_or(ANCHORS[0], |i| ANCHORS[(i + 1) % ANCHORS.len()]);
                self.snacks.props_mut().anchor_origin = Some(next);
                self.config.placement.anchor_origin = Some(next);
                tracing::debug!(anchor = %next, "anchor changed");
            }
            Message::CloseAll => self.snacks.close_all(),
            Message::SaveSettings => match config::save(&self.config) {
                Ok(()) => self.show(Snack::success("Settings saved")),
                Err(err) => {
                    tracing::warn!(%err, "failed to save settings");
                    self.show(Snack::error(err.to_string()));
                }
            },
        }
        Task::none()
    }

    fn show(&mut self, snack: Snack<Message>) {
        if let Err(err) = self.snacks.push(snack) {
            tracing::debug!(%err, "snack not shown");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let variants = Variant::ALL.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, variant| row.push(demo_button(variant.as_str(), Message::Show(*variant))),
        );

        let controls = Row::new()
            .spacing(spacing::XS)
            .push(demo_button("undoable", Message::ShowUndoable))
            .push(demo_button("move", Message::CycleAnchor))
            .push(demo_button("close all", Message::CloseAll))
            .push(demo_button("save settings", Message::SaveSettings));

        let anchor = self.snacks.props().anchor_origin.unwrap_or_default();
        let status = text(format!(
            "{} on screen, {} queued, anchored {anchor}, {} undone",
            self.snacks.active_count(),
            self.snacks.queued_count(),
            self.undone,
        ))
        .size(typography::BODY_SM)
        .color(palette::GRAY_400);

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text("IcedSnack").size(typography::TITLE_MD))
            .push(variants)
            .push(controls)
            .push(status);

        let page = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill);

        Stack::new()
            .push(page)
            .push(self.snacks.view().map(Message::Snack))
            .into()
    }
}

fn demo_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(|theme: &Theme, status| {
            let mut style = button::primary(theme, status);
            style.border.radius = radius::MD.into();
            style
        })
        .on_press(message)
        .into()
}
