// SPDX-License-Identifier: MPL-2.0
//! Core snack data structures.
//!
//! This module defines the `Snack` record, its `Variant`, and the
//! per-notification content overrides used throughout the snack system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a snack.
///
/// Keys stay fixed for the lifetime of the snack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnackKey(u64);

/// Next key handed out by [`SnackKey::next`]. Always above every key seen so far.
static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

impl SnackKey {
    /// Allocates a new unique key.
    pub fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a raw key value.
    ///
    /// Later calls to [`SnackKey::next`] never return `raw` or anything below it.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        NEXT_KEY.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SnackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual variant of a snack. Selects the icon and the style key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Neutral notification without semantic color.
    #[default]
    Default,
    /// Something failed.
    Error,
    /// Operation completed successfully.
    Success,
    /// Something needs attention but nothing failed.
    Warning,
    /// Informational message.
    Info,
}

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 5] = [
        Variant::Default,
        Variant::Error,
        Variant::Success,
        Variant::Warning,
        Variant::Info,
    ];

    /// Lowercase tag of the variant (`"success"`, `"error"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Error => "error",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Info => "info",
        }
    }

    /// Style key of the content box (`variantSuccess`, `variantDefault`, ...).
    #[must_use]
    pub fn style_key(self) -> &'static str {
        match self {
            Variant::Default => "variantDefault",
            Variant::Error => "variantError",
            Variant::Success => "variantSuccess",
            Variant::Warning => "variantWarning",
            Variant::Info => "variantInfo",
        }
    }

    /// Background color of the content box.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Variant::Default => palette::GRAY_900,
            Variant::Error => palette::ERROR_500,
            Variant::Success => palette::SUCCESS_500,
            Variant::Warning => palette::WARNING_500,
            Variant::Info => palette::INFO_500,
        }
    }

    /// Parses a variant tag, falling back to [`Variant::Default`] for
    /// anything unknown.
    #[must_use]
    pub fn parse_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(Variant::Default),
            "error" => Ok(Variant::Error),
            "success" => Ok(Variant::Success),
            "warning" => Ok(Variant::Warning),
            "info" => Ok(Variant::Info),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler invoked when the action of a snack is clicked.
///
/// The handler receives the key of the clicked snack and produces the host
/// application's message, so no state is captured by the handler itself.
pub struct ClickHandler<M>(fn(SnackKey) -> M);

impl<M> ClickHandler<M> {
    /// Wraps a message constructor.
    pub const fn new(handler: fn(SnackKey) -> M) -> Self {
        Self(handler)
    }

    /// Produces the message for the given snack.
    pub fn call(&self, key: SnackKey) -> M {
        (self.0)(key)
    }
}

impl<M> Clone for ClickHandler<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ClickHandler<M> {}

impl<M> fmt::Debug for ClickHandler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

/// Overridable properties of the content box.
///
/// Every field is optional; layers are combined with [`ContentProps::merge`]
/// where the later layer wins field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentProps {
    /// Fixed width of the content box.
    pub width: Option<f32>,
    /// Inner padding of the content box.
    pub padding: Option<f32>,
    /// Message text size.
    pub text_size: Option<f32>,
    /// Background color, replacing the variant color.
    pub background: Option<Color>,
    /// Action label.
    pub action: Option<String>,
}

impl ContentProps {
    /// Returns `self` with every field set in `over` replacing its own.
    #[must_use]
    pub fn merge(&self, over: &ContentProps) -> ContentProps {
        ContentProps {
            width: over.width.or(self.width),
            padding: over.padding.or(self.padding),
            text_size: over.text_size.or(self.text_size),
            background: over.background.or(self.background),
            action: over.action.clone().or_else(|| self.action.clone()),
        }
    }
}

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Snack<M> {
    key: SnackKey,
    message: String,
    variant: Variant,
    open: bool,
    action: Option<String>,
    on_click_action: Option<ClickHandler<M>>,
    content_props: Option<ContentProps>,
}

impl<M> Snack<M> {
    /// Creates an open snack with the default variant and a fresh key.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_key(SnackKey::next(), message)
    }

    /// Creates an open snack with an explicit key.
    ///
    /// The caller is responsible for keeping keys unique among active snacks.
    pub fn with_key(key: SnackKey, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            variant: Variant::Default,
            open: true,
            action: None,
            on_click_action: None,
            content_props: None,
        }
    }

    /// Creates a success snack.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Success)
    }

    /// Creates an error snack.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Error)
    }

    /// Creates a warning snack.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Warning)
    }

    /// Creates an info snack.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_variant(Variant::Info)
    }

    /// Sets the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets a custom action label for this snack.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action = Some(label.into());
        self
    }

    /// Sets the handler for this snack's own action.
    ///
    /// Only reachable when the snack also carries its own [`with_action`](Self::with_action).
    #[must_use]
    pub fn on_click_action(mut self, handler: fn(SnackKey) -> M) -> Self {
        self.on_click_action = Some(ClickHandler::new(handler));
        self
    }

    /// Sets the per-notification content overrides.
    #[must_use]
    pub fn with_content_props(mut self, props: ContentProps) -> Self {
        self.content_props = Some(props);
        self
    }

    /// Returns the unique key.
    #[must_use]
    pub fn key(&self) -> SnackKey {
        self.key
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the variant.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns whether the snack is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns this snack's own action label.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Returns this snack's own click handler.
    #[must_use]
    pub fn click_handler(&self) -> Option<ClickHandler<M>> {
        self.on_click_action
    }

    /// Returns the per-notification content overrides.
    #[must_use]
    pub fn content_props(&self) -> Option<&ContentProps> {
        self.content_props.as_ref()
    }

    /// Marks the snack as closed. Returns `false` if it was already closed.
    pub(crate) fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Undo(SnackKey),
    }

    #[test]
    fn unknown_variant_falls_back_to_default() {
        assert_eq!(Variant::parse_lossy("fancy"), Variant::Default);
        assert_eq!(Variant::parse_lossy(" Success "), Variant::Success);
    }

    #[test]
    fn style_keys_are_capitalised_tags() {
        for variant in Variant::ALL {
            let tag = variant.as_str();
            let mut expected = String::from("variant");
            expected.push_str(&tag[..1].to_uppercase());
            expected.push_str(&tag[1..]);
            assert_eq!(variant.style_key(), expected);
        }
    }

    #[test]
    fn variant_colors_are_distinct() {
        for (i, a) in Variant::ALL.iter().enumerate() {
            for b in &Variant::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn merge_prefers_later_layer() {
        let base = ContentProps {
            width: Some(300.0),
            padding: Some(12.0),
            action: Some("DISMISS".into()),
            ..ContentProps::default()
        };
        let over = ContentProps {
            width: Some(400.0),
            ..ContentProps::default()
        };

        let merged = base.merge(&over);
        assert_eq!(merged.width, Some(400.0));
        assert_eq!(merged.padding, Some(12.0));
        assert_eq!(merged.action.as_deref(), Some("DISMISS"));
    }

    #[test]
    fn snack_builder_sets_fields() {
        let snack: Snack<Msg> = Snack::with_key(SnackKey::new(7), "Saved")
            .with_variant(Variant::Success)
            .with_action("UNDO")
            .on_click_action(Msg::Undo);

        assert_eq!(snack.key(), SnackKey::new(7));
        assert_eq!(snack.message(), "Saved");
        assert_eq!(snack.variant(), Variant::Success);
        assert!(snack.is_open());
        assert_eq!(snack.action(), Some("UNDO"));
        let handler = snack.click_handler().expect("handler set");
        assert_eq!(handler.call(snack.key()), Msg::Undo(SnackKey::new(7)));
    }

    #[test]
    fn snack_keys_are_unique() {
        let a: Snack<Msg> = Snack::new("a");
        let b: Snack<Msg> = Snack::new("a");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn fresh_keys_skip_explicit_keys() {
        let explicit = SnackKey::new(SnackKey::next().get() + 10);
        let fresh = SnackKey::next();
        assert!(fresh > explicit);
    }

    #[test]
    fn constructors_set_variant() {
        assert_eq!(Snack::<Msg>::new("").variant(), Variant::Default);
        assert_eq!(Snack::<Msg>::success("").variant(), Variant::Success);
        assert_eq!(Snack::<Msg>::error("").variant(), Variant::Error);
        assert_eq!(Snack::<Msg>::warning("").variant(), Variant::Warning);
        assert_eq!(Snack::<Msg>::info("").variant(), Variant::Info);
    }

    #[test]
    fn close_only_transitions_once() {
        let mut snack: Snack<Msg> = Snack::new("Saved");
        assert!(snack.close());
        assert!(!snack.close());
        assert!(!snack.is_open());
    }
}
