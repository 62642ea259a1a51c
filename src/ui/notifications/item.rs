// SPDX-License-Identifier: MPL-2.0
//! Rendering and interaction of a single snack.
//!
//! A [`SnackbarItem`] borrows one snack, its stack level and the
//! component-level [`ItemProps`]. It decides:
//!
//! - which close requests are honoured (a clickaway never closes a snack),
//! - what clicking the action does,
//! - which content properties and action label win when several layers set them,
//! - where the snack sits and how it slides.
//!
//! The item holds no state of its own; timing lives in [`Popup`](super::popup::Popup)
//! and visibility in the [`Manager`](super::Manager).

use super::anchor::{AnchorOrigin, Horizontal, Vertical};
use super::notification::{ClickHandler, ContentProps, Snack, SnackKey, Variant};
use super::popup::CloseReason;
use super::position::{self, Placement, SNACK_HEIGHT};
use crate::config::{self, Config};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons::IconSet;
use iced::widget::{button, container, mouse_area, text, Container, Row};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Duration;

/// Messages emitted by a rendered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The action element was pressed.
    ActionPressed(SnackKey),
    /// The pointer entered or left the popup.
    Hovered(SnackKey, bool),
}

/// Outcome of pressing the action of a snack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click<M> {
    /// A configured handler produced a host message.
    Handler(M),
    /// No handler applies; the snack closes.
    Close(SnackKey),
}

/// Component-level properties shared by every item.
#[derive(Debug, Clone)]
pub struct ItemProps<M> {
    /// Screen anchor. `None` uses the default bottom-left origin.
    pub anchor_origin: Option<AnchorOrigin>,
    /// Auto-hide delay. `None` disables auto-hide.
    pub auto_hide_duration: Option<Duration>,
    /// Duration of the enter and exit slides.
    pub transition_duration: Duration,
    pub icon_variant: IconSet,
    /// Omits the icon region when set.
    pub hide_icon_variant: bool,
    /// Content properties applied to every snack.
    pub content_props: ContentProps,
    /// Default action label.
    pub action: Option<String>,
    /// Default action handler, used for snacks without an action of their own.
    pub on_click_action: Option<ClickHandler<M>>,
}

impl<M> Default for ItemProps<M> {
    fn default() -> Self {
        Self {
            anchor_origin: None,
            auto_hide_duration: Some(Duration::from_millis(config::DEFAULT_AUTO_HIDE_MS)),
            transition_duration: Duration::from_millis(config::DEFAULT_TRANSITION_MS),
            icon_variant: IconSet::default(),
            hide_icon_variant: false,
            content_props: ContentProps::default(),
            action: None,
            on_click_action: None,
        }
    }
}

impl<M> ItemProps<M> {
    /// Builds item properties from user configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let timing = &config.timing;
        Self {
            anchor_origin: config.placement.anchor_origin,
            auto_hide_duration: match timing.auto_hide_ms {
                Some(0) => None,
                Some(ms) => Some(Duration::from_millis(ms.min(config::MAX_AUTO_HIDE_MS))),
                None => Some(Duration::from_millis(config::DEFAULT_AUTO_HIDE_MS)),
            },
            transition_duration: Duration::from_millis(
                timing
                    .transition_ms
                    .unwrap_or(config::DEFAULT_TRANSITION_MS)
                    .min(config::MAX_TRANSITION_MS),
            ),
            hide_icon_variant: config.appearance.hide_icon_variant.unwrap_or(false),
            ..Self::default()
        }
    }
}

/// Line height of single-line text, relative to its size.
const LINE_HEIGHT: f32 = 1.3;

/// Largest message size whose line still fits the slot.
pub const MAX_TEXT_SIZE: f32 = SNACK_HEIGHT / LINE_HEIGHT;

/// Height of the action button.
const ACTION_HEIGHT: f32 = typography::BODY_SM * LINE_HEIGHT + 2.0 * spacing::XXS;

/// Height of the tallest element in the content row.
#[must_use]
pub fn row_height(text_size: f32, has_icon: bool, has_action: bool) -> f32 {
    let mut height = text_size * LINE_HEIGHT;
    if has_icon {
        height = height.max(sizing::ICON_MD);
    }
    if has_action {
        height = height.max(ACTION_HEIGHT);
    }
    height
}

/// Content box properties after all layers are merged.
///
/// The box is always [`SNACK_HEIGHT`] tall so stacked snacks never overlap;
/// text size and vertical padding are clamped to fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub width: f32,
    pub height: f32,
    pub padding: Padding,
    pub text_size: f32,
    pub background: Color,
    pub action: Option<String>,
}

/// Pure description of what an item renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub key: SnackKey,
    pub open: bool,
    pub message: String,
    pub style_key: &'static str,
    /// Variant whose icon is shown, if any.
    pub icon: Option<Variant>,
    pub content: Content,
    pub placement: Placement,
    pub auto_hide: Option<Duration>,
}

/// Built-in content properties, the lowest merge layer.
fn builtin_content_props() -> ContentProps {
    ContentProps {
        width: Some(sizing::TOAST_WIDTH),
        padding: Some(spacing::SM),
        text_size: Some(typography::BODY),
        background: None,
        action: None,
    }
}

/// One snack at one stack level.
#[derive(Debug)]
pub struct SnackbarItem<'a, M> {
    snack: &'a Snack<M>,
    level: usize,
    props: &'a ItemProps<M>,
}

impl<'a, M> SnackbarItem<'a, M> {
    pub fn new(snack: &'a Snack<M>, level: usize, props: &'a ItemProps<M>) -> Self {
        Self {
            snack,
            level,
            props,
        }
    }

    #[must_use]
    pub fn key(&self) -> SnackKey {
        self.snack.key()
    }

    /// Filters a close request: every reason but clickaway closes the snack.
    #[must_use]
    pub fn on_close(&self, reason: CloseReason) -> Option<SnackKey> {
        match reason {
            CloseReason::Clickaway => None,
            CloseReason::Timeout | CloseReason::EscapeKeyDown => Some(self.key()),
        }
    }

    /// Key to report once the exit transition has finished.
    #[must_use]
    pub fn on_exited(&self) -> SnackKey {
        self.key()
    }

    /// Resolves what pressing the action does.
    ///
    /// A snack with its own action only uses its own handler; a snack
    /// without one uses the component handler. Otherwise the snack closes.
    pub fn click(&self) -> Click<M> {
        let handler = if self.snack.action().is_some() {
            self.snack.click_handler()
        } else {
            self.props.on_click_action
        };

        match handler {
            Some(handler) => Click::Handler(handler.call(self.key())),
            None => Click::Close(self.key()),
        }
    }

    /// Merges content properties: built-ins, then component, then snack.
    ///
    /// The action label is resolved separately from the snack's own action,
    /// the component content props and the component action, in that order.
    #[must_use]
    pub fn content(&self) -> Content {
        let mut merged = builtin_content_props().merge(&self.props.content_props);
        if let Some(overrides) = self.snack.content_props() {
            merged = merged.merge(overrides);
        }

        let action = self
            .snack
            .action()
            .map(str::to_owned)
            .or_else(|| self.props.content_props.action.clone())
            .or_else(|| self.props.action.clone());

        let text_size = merged
            .text_size
            .unwrap_or(typography::BODY)
            .clamp(1.0, MAX_TEXT_SIZE);
        let padding = merged.padding.unwrap_or(spacing::SM).max(0.0);
        let row = row_height(text_size, self.icon().is_some(), action.is_some());
        let vertical = padding.min((SNACK_HEIGHT - row).max(0.0) / 2.0);

        Content {
            width: merged.width.unwrap_or(sizing::TOAST_WIDTH),
            height: SNACK_HEIGHT,
            padding: Padding {
                top: vertical,
                right: padding,
                bottom: vertical,
                left: padding,
            },
            text_size,
            background: merged
                .background
                .unwrap_or_else(|| self.snack.variant().color()),
            action,
        }
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        position::resolve(self.level, self.props.anchor_origin)
    }

    #[must_use]
    pub fn icon(&self) -> Option<Variant> {
        (!self.props.hide_icon_variant).then(|| self.snack.variant())
    }

    /// Describes the rendered popup without building widgets.
    #[must_use]
    pub fn render(&self) -> Rendered {
        Rendered {
            key: self.key(),
            open: self.snack.is_open(),
            message: self.snack.message().to_owned(),
            style_key: self.snack.variant().style_key(),
            icon: self.icon(),
            content: self.content(),
            placement: self.placement(),
            auto_hide: self.props.auto_hide_duration,
        }
    }

    /// Builds the popup layer at slide `progress`.
    ///
    /// The layer fills the overlay; the snack is placed inside it by padding.
    pub fn view(&self, progress: f32) -> Element<'a, Message> {
        let snack: &'a Snack<M> = self.snack;
        let key = snack.key();
        let content = self.content();

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(variant) = self.icon() {
            row = row.push(self.props.icon_variant.svg(variant, sizing::ICON_MD));
        }

        row = row.push(
            Container::new(
                text(snack.message())
                    .size(content.text_size)
                    .wrapping(text::Wrapping::None),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left)
            .clip(true),
        );

        if let Some(label) = content.action.clone() {
            row = row.push(
                button(text(label).size(typography::BODY_SM))
                    .on_press(Message::ActionPressed(key))
                    .padding(spacing::XXS)
                    .style(action_button_style),
            );
        }

        let background = content.background;
        let alpha = progress.clamp(0.0, 1.0);
        let body = Container::new(row)
            .width(Length::Fixed(content.width))
            .height(Length::Fixed(content.height))
            .padding(content.padding)
            .align_y(alignment::Vertical::Center)
            .clip(true)
            .style(move |_theme: &Theme| content_box_style(background, alpha));

        let hoverable = mouse_area(body)
            .on_enter(Message::Hovered(key, true))
            .on_exit(Message::Hovered(key, false));

        let placement = self.placement();
        let translation =
            position::slide_translation(placement.direction, progress, content.width + spacing::LG);

        Container::new(hoverable)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(match placement.anchor.horizontal {
                Horizontal::Left => alignment::Horizontal::Left,
                Horizontal::Center => alignment::Horizontal::Center,
                Horizontal::Right => alignment::Horizontal::Right,
            })
            .align_y(match placement.anchor.vertical {
                Vertical::Top => alignment::Vertical::Top,
                Vertical::Bottom => alignment::Vertical::Bottom,
            })
            .padding(placement.padding(spacing::LG, translation))
            .into()
    }
}

/// Style function for the content box.
fn content_box_style(background: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: background.a * opacity::SURFACE * alpha,
            ..background
        })),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let overlay = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(0.15),
        button::Status::Pressed => Some(0.3),
    };

    button::Style {
        background: overlay.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::WHITE
            })
        }),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::position::Direction;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Undo(SnackKey),
        Retry(SnackKey),
    }

    fn props() -> ItemProps<Msg> {
        ItemProps::default()
    }

    #[test]
    fn clickaway_never_closes() {
        let snack = Snack::<Msg>::new("Saved");
        let props = props();
        let item = SnackbarItem::new(&snack, 0, &props);

        assert_eq!(item.on_close(CloseReason::Clickaway), None);
    }

    #[test]
    fn other_reasons_close_with_own_key() {
        let snack = Snack::<Msg>::new("Saved");
        let props = props();
        let item = SnackbarItem::new(&snack, 0, &props);

        assert_eq!(item.on_close(CloseReason::Timeout), Some(snack.key()));
        assert_eq!(item.on_close(CloseReason::EscapeKeyDown), Some(snack.key()));
    }

    #[test]
    fn own_action_uses_own_handler() {
        let snack = Snack::new("Deleted")
            .with_action("UNDO")
            .on_click_action(Msg::Undo);
        let mut props = props();
        props.on_click_action = Some(ClickHandler::new(Msg::Retry));
        let item = SnackbarItem::new(&snack, 0, &props);

        assert_eq!(item.click(), Click::Handler(Msg::Undo(snack.key())));
    }

    #[test]
    fn own_action_without_handler_closes() {
        let snack = Snack::new("Deleted").with_action("OK");
        let mut props = props();
        props.on_click_action = Some(ClickHandler::new(Msg::Retry));
        let item = SnackbarItem::new(&snack, 0, &props);

        assert_eq!(item.click(), Click::Close(snack.key()));
    }

    #[test]
    fn component_handler_applies_without_own_action() {
        let snack = Snack::new("Offline");
        let mut props = props();
        props.action = Some("RETRY".into());
        props.on_click_action = Some(ClickHandler::new(Msg::Retry));
        let item = SnackbarItem::new(&snack, 0, &props);

        assert_eq!(item.click(), Click::Handler(Msg::Retry(snack.key())));
    }

    #[test]
    fn own_handler_without_own_action_is_unreachable() {
        let snack = Snack::new("Offline").on_click_action(Msg::Undo);
        let props = props();
        let item = SnackbarItem::new(&snack, 0, &props);

        assert_eq!(item.content().action, None);
        assert_eq!(item.click(), Click::Close(snack.key()));
    }

    #[test]
    fn no_handler_anywhere_closes() {
        let snack = Snack::<Msg>::new("Saved");
        let props = props();
        let item = SnackbarItem::new(&snack, 0, &props);

        assert_eq!(item.click(), Click::Close(snack.key()));
    }

    #[test]
    fn action_label_precedence() {
        let mut props = props();
        props.action = Some("DEFAULT".into());

        let plain = Snack::<Msg>::new("a");
        assert_eq!(
            SnackbarItem::new(&plain, 0, &props).content().action.as_deref(),
            Some("DEFAULT")
        );

        props.content_props.action = Some("COMPONENT".into());
        assert_eq!(
            SnackbarItem::new(&plain, 0, &props).content().action.as_deref(),
            Some("COMPONENT")
        );

        let own = Snack::<Msg>::new("b").with_action("OWN");
        assert_eq!(
            SnackbarItem::new(&own, 0, &props).content().action.as_deref(),
            Some("OWN")
        );
    }

    #[test]
    fn snack_content_props_win_over_component() {
        let mut props = props();
        props.content_props = ContentProps {
            width: Some(400.0),
            padding: Some(20.0),
            ..ContentProps::default()
        };
        let snack = Snack::<Msg>::new("a").with_content_props(ContentProps {
            width: Some(250.0),
            background: Some(palette::PRIMARY_500),
            ..ContentProps::default()
        });

        let content = SnackbarItem::new(&snack, 0, &props).content();
        assert_eq!(content.width, 250.0);
        assert_eq!(content.padding.left, 20.0);
        assert_eq!(content.padding.right, 20.0);
        assert_eq!(content.text_size, typography::BODY);
        assert_eq!(content.background, palette::PRIMARY_500);
    }

    #[test]
    fn content_always_fits_the_stack_slot() {
        let overrides = [
            ContentProps::default(),
            ContentProps {
                padding: Some(40.0),
                ..ContentProps::default()
            },
            ContentProps {
                text_size: Some(30.0),
                padding: Some(spacing::LG),
                ..ContentProps::default()
            },
            ContentProps {
                text_size: Some(120.0),
                ..ContentProps::default()
            },
        ];
        let mut props = props();
        props.action = Some("UNDO".into());

        for over in overrides {
            let snack = Snack::<Msg>::warning("Could not read settings.toml: TOML parse error")
                .with_content_props(over);
            let item = SnackbarItem::new(&snack, 1, &props);
            let content = item.content();

            let row = row_height(content.text_size, item.icon().is_some(), true);
            assert_eq!(content.height, position::SNACK_HEIGHT);
            assert!(content.padding.top + row + content.padding.bottom <= content.height + 1e-3);
            assert!(content.text_size <= MAX_TEXT_SIZE);
        }
    }

    #[test]
    fn default_content_keeps_requested_horizontal_padding() {
        let mut props = props();
        props.action = Some("UNDO".into());
        let snack = Snack::<Msg>::new("Saved");
        let content = SnackbarItem::new(&snack, 0, &props).content();

        assert_eq!(content.padding.left, spacing::SM);
        assert!(content.padding.top <= spacing::SM);
        assert!(content.padding.top > 0.0);
    }

    #[test]
    fn hide_icon_variant_omits_icon() {
        let snack = Snack::<Msg>::warning("Low disk space");
        let mut props = props();
        assert_eq!(
            SnackbarItem::new(&snack, 0, &props).icon(),
            Some(Variant::Warning)
        );

        props.hide_icon_variant = true;
        assert_eq!(SnackbarItem::new(&snack, 0, &props).icon(), None);
    }

    #[test]
    fn render_is_idempotent() {
        let snack = Snack::<Msg>::info("Synced").with_action("VIEW");
        let props = props();
        let item = SnackbarItem::new(&snack, 2, &props);

        assert_eq!(item.render(), item.render());
        assert_eq!(
            item.render(),
            SnackbarItem::new(&snack, 2, &props).render()
        );
    }

    #[test]
    fn success_snack_at_level_zero() {
        let snack =
            Snack::<Msg>::with_key(SnackKey::new(1), "Saved").with_variant(Variant::Success);
        let props = props();
        let rendered = SnackbarItem::new(&snack, 0, &props).render();

        assert_eq!(rendered.key, SnackKey::new(1));
        assert!(rendered.open);
        assert_eq!(rendered.message, "Saved");
        assert_eq!(rendered.style_key, "variantSuccess");
        assert_eq!(rendered.icon, Some(Variant::Success));
        assert_eq!(rendered.content.action, None);
        assert_eq!(rendered.content.background, palette::SUCCESS_500);
        assert_eq!(rendered.placement.direction, Direction::Right);
        assert_eq!(rendered.placement.offset.distance, 0.0);
        assert_eq!(rendered.auto_hide, Some(Duration::from_secs(5)));
    }

    #[test]
    fn from_config_reads_sections() {
        let mut config = Config::default();
        config.placement.anchor_origin = Some(AnchorOrigin::new(Vertical::Top, Horizontal::Right));
        config.timing.auto_hide_ms = Some(0);
        config.appearance.hide_icon_variant = Some(true);

        let props = ItemProps::<Msg>::from_config(&config);
        assert_eq!(
            props.anchor_origin,
            Some(AnchorOrigin::new(Vertical::Top, Horizontal::Right))
        );
        assert_eq!(props.auto_hide_duration, None);
        assert!(props.hide_icon_variant);
    }

    #[test]
    fn content_box_fades_with_progress() {
        let style = content_box_style(palette::SUCCESS_500, 0.5);
        assert_eq!(style.text_color.map(|c| c.a), Some(0.5));
        assert!(style.background.is_some());
    }
}
