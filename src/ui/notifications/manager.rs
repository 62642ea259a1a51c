// SPDX-License-Identifier: MPL-2.0
//! Snack lifecycle management.
//!
//! The `Manager` owns the snack records. It validates and queues new snacks,
//! keeps at most `max_snack` of them on screen, flips `open` to `false` when
//! a snack closes and drops it once its exit slide has finished. The stack
//! level of a snack is its index among the snacks on screen, closing ones
//! included, so the stack only collapses after a snack is gone.

use super::item::{self, Click, ItemProps, Rendered, SnackbarItem};
use super::notification::{Snack, SnackKey};
use super::popup::{CloseReason, Popup, PopupEvent};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use iced::widget::{text, Container, Stack};
use iced::{event, keyboard, mouse, time, Element, Length, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Interval of the animation and timer tick while snacks are on screen.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Messages for snack state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Message from a rendered snack.
    Item(item::Message),
    /// Tick for timers and transitions.
    Tick(Instant),
    /// A mouse button was pressed anywhere in the window.
    PointerPressed,
    /// The escape key was pressed.
    EscapePressed,
}

/// A snack on screen with its timing state.
#[derive(Debug)]
struct Entry<M> {
    snack: Snack<M>,
    popup: Popup,
}

impl<M> Entry<M> {
    /// Flips `open` and starts the exit slide. Returns `false` if already closed.
    fn close(&mut self, now: Instant) -> bool {
        let closed = self.snack.close();
        if closed {
            self.popup.close(now);
        }
        closed
    }
}

/// Manages the snack queue and the snacks on screen.
#[derive(Debug)]
pub struct Manager<M> {
    /// Snacks on screen, oldest (level 0) first.
    active: Vec<Entry<M>>,
    /// Snacks waiting for a free slot.
    queue: VecDeque<Snack<M>>,
    props: ItemProps<M>,
    max_snack: usize,
    prevent_duplicate: bool,
    /// Time of the last tick; drives transition progress in `view`.
    now: Instant,
}

impl<M> Default for Manager<M> {
    fn default() -> Self {
        Self::with_props(ItemProps::default())
    }
}

impl<M> Manager<M> {
    /// Creates an empty manager with default properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager rendering snacks with `props`.
    #[must_use]
    pub fn with_props(props: ItemProps<M>) -> Self {
        Self {
            active: Vec::new(),
            queue: VecDeque::new(),
            props,
            max_snack: config::DEFAULT_MAX_SNACK,
            prevent_duplicate: false,
            now: Instant::now(),
        }
    }

    /// Creates an empty manager from user configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut manager = Self::with_props(ItemProps::from_config(config));
        let max_snack = config.stack.max_snack.unwrap_or(config::DEFAULT_MAX_SNACK);
        manager.set_max_snack(max_snack.min(config::MAX_MAX_SNACK));
        manager.prevent_duplicate = config.stack.prevent_duplicate.unwrap_or(false);
        manager
    }

    /// Sets how many snacks may be on screen at once (at least one).
    pub fn set_max_snack(&mut self, max_snack: usize) {
        self.max_snack = max_snack.max(1);
    }

    /// Refuses snacks whose message is already shown or queued.
    pub fn set_prevent_duplicate(&mut self, prevent: bool) {
        self.prevent_duplicate = prevent;
    }

    #[must_use]
    pub fn props(&self) -> &ItemProps<M> {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut ItemProps<M> {
        &mut self.props
    }

    /// Enqueues a snack.
    ///
    /// The snack is shown right away if there is room. When the stack is
    /// full, the oldest open snack is closed and the new one waits until that
    /// snack has left the screen.
    ///
    /// Snacks with an empty message or a key that is already in use are
    /// rejected.
    pub fn push(&mut self, snack: Snack<M>) -> Result<SnackKey> {
        let key = snack.key();

        if snack.message().trim().is_empty() {
            tracing::warn!(%key, "rejected snack with empty message");
            return Err(Error::InvalidSnack("message is empty".into()));
        }
        if self.contains(key) {
            tracing::warn!(%key, "rejected snack with duplicate key");
            return Err(Error::InvalidSnack(format!("key {key} is already in use")));
        }
        if self.prevent_duplicate && self.is_duplicate(snack.message()) {
            tracing::debug!(%key, "dropped duplicate snack");
            return Err(Error::DuplicateSnack(snack.message().to_owned()));
        }

        tracing::debug!(%key, variant = %snack.variant(), "snack enqueued");
        self.now = Instant::now();
        self.queue.push_back(snack);

        if self.active.len() >= self.max_snack {
            self.dismiss_oldest();
        }
        self.promote_from_queue(self.now);

        Ok(key)
    }

    /// Closes a snack by key.
    ///
    /// An open snack on screen starts its exit slide; a queued snack is
    /// dropped. Returns `false` if the snack was unknown or already closing.
    pub fn close(&mut self, key: SnackKey) -> bool {
        let now = self.now;
        if let Some(entry) = self.active.iter_mut().find(|e| e.snack.key() == key) {
            let closed = entry.close(now);
            if closed {
                tracing::debug!(%key, "snack closed");
            }
            return closed;
        }

        if let Some(pos) = self.queue.iter().position(|s| s.key() == key) {
            self.queue.remove(pos);
            tracing::debug!(%key, "queued snack dropped");
            return true;
        }

        false
    }

    /// Closes every snack on screen and empties the queue.
    pub fn close_all(&mut self) {
        let now = self.now;
        self.queue.clear();
        for entry in &mut self.active {
            entry.close(now);
        }
    }

    /// Removes a snack whose exit slide has finished.
    ///
    /// Open snacks are never removed. Returns `true` if the snack was removed.
    pub fn exited(&mut self, key: SnackKey) -> bool {
        let Some(pos) = self
            .active
            .iter()
            .position(|e| e.snack.key() == key && !e.snack.is_open())
        else {
            return false;
        };

        self.active.remove(pos);
        tracing::debug!(%key, "snack exited");

        // Snacks above the removed one move down into slots whose hover state
        // belonged to another snack; they get a fresh, unhovered start.
        let now = self.now;
        for entry in &mut self.active[pos..] {
            entry.popup.set_hovered(false, now);
        }

        self.promote_from_queue(now);
        true
    }

    /// Advances timers and transitions to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        let events: Vec<(SnackKey, PopupEvent)> = self
            .active
            .iter_mut()
            .filter_map(|e| {
                let open = e.snack.is_open();
                e.popup.tick(now, open).map(|event| (e.snack.key(), event))
            })
            .collect();

        for (key, event) in events {
            match event {
                PopupEvent::Close(reason) => self.request_close(key, reason),
                PopupEvent::Exited => self.finish_exit(key),
            }
        }
    }

    /// Handles a manager message.
    ///
    /// Returns the host message produced by an action handler, if any.
    pub fn update(&mut self, message: Message) -> Option<M> {
        match message {
            Message::Item(item::Message::ActionPressed(key)) => self.click(key),
            Message::Item(item::Message::Hovered(key, hovered)) => {
                let now = Instant::now();
                if let Some(entry) = self.active.iter_mut().find(|e| e.snack.key() == key) {
                    entry.popup.set_hovered(hovered, now);
                }
                None
            }
            Message::Tick(now) => {
                self.tick(now);
                None
            }
            Message::PointerPressed => {
                // A press on a hovered snack is inside it; anything else is a clickaway.
                let outside: Vec<SnackKey> = self
                    .active
                    .iter()
                    .filter(|e| !e.popup.is_hovered())
                    .map(|e| e.snack.key())
                    .collect();
                for key in outside {
                    self.request_close(key, CloseReason::Clickaway);
                }
                None
            }
            Message::EscapePressed => {
                let keys: Vec<SnackKey> = self.active.iter().map(|e| e.snack.key()).collect();
                for key in keys {
                    self.request_close(key, CloseReason::EscapeKeyDown);
                }
                None
            }
        }
    }

    /// Resolves an action press for `key`.
    pub fn click(&mut self, key: SnackKey) -> Option<M> {
        let (level, entry) = self
            .active
            .iter()
            .enumerate()
            .find(|(_, e)| e.snack.key() == key)?;

        let click = SnackbarItem::new(&entry.snack, level, &self.props).click();
        match click {
            Click::Handler(message) => Some(message),
            Click::Close(key) => {
                self.close(key);
                None
            }
        }
    }

    /// Returns the snack with `key` if it is on screen.
    #[must_use]
    pub fn get(&self, key: SnackKey) -> Option<&Snack<M>> {
        self.active
            .iter()
            .map(|e| &e.snack)
            .find(|s| s.key() == key)
    }

    /// Returns the stack level of the snack with `key`.
    #[must_use]
    pub fn level_of(&self, key: SnackKey) -> Option<usize> {
        self.active.iter().position(|e| e.snack.key() == key)
    }

    /// Returns the snacks on screen, level 0 first.
    pub fn active(&self) -> impl Iterator<Item = &Snack<M>> {
        self.active.iter().map(|e| &e.snack)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any snacks (on screen or queued).
    #[must_use]
    pub fn has_snacks(&self) -> bool {
        !self.active.is_empty() || !self.queue.is_empty()
    }

    /// Describes every snack on screen.
    #[must_use]
    pub fn render(&self) -> Vec<Rendered> {
        self.active
            .iter()
            .enumerate()
            .map(|(level, e)| SnackbarItem::new(&e.snack, level, &self.props).render())
            .collect()
    }

    /// Renders the overlay with every snack on screen.
    pub fn view(&self) -> Element<'_, Message> {
        if self.active.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let layers = self.active.iter().enumerate().map(|(level, e)| {
            SnackbarItem::new(&e.snack, level, &self.props)
                .view(e.popup.progress(self.now))
                .map(Message::Item)
        });

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Ticks and input listeners, installed only while snacks are on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.active.is_empty() {
            return Subscription::none();
        }

        Subscription::batch([
            time::every(TICK_INTERVAL).map(Message::Tick),
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Mouse(mouse::Event::ButtonPressed(_)) => {
                    Some(Message::PointerPressed)
                }
                iced::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                _ => None,
            }),
        ])
    }

    fn request_close(&mut self, key: SnackKey, reason: CloseReason) {
        let Some((level, entry)) = self
            .active
            .iter()
            .enumerate()
            .find(|(_, e)| e.snack.key() == key)
        else {
            return;
        };

        let closing = SnackbarItem::new(&entry.snack, level, &self.props).on_close(reason);
        if let Some(key) = closing {
            tracing::debug!(%key, %reason, "close requested");
            self.close(key);
        }
    }

    fn finish_exit(&mut self, key: SnackKey) {
        let Some((level, entry)) = self
            .active
            .iter()
            .enumerate()
            .find(|(_, e)| e.snack.key() == key)
        else {
            return;
        };

        let exited = SnackbarItem::new(&entry.snack, level, &self.props).on_exited();
        self.exited(exited);
    }

    fn contains(&self, key: SnackKey) -> bool {
        self.active.iter().any(|e| e.snack.key() == key)
            || self.queue.iter().any(|s| s.key() == key)
    }

    fn is_duplicate(&self, message: &str) -> bool {
        self.active
            .iter()
            .any(|e| e.snack.is_open() && e.snack.message() == message)
            || self.queue.iter().any(|s| s.message() == message)
    }

    /// Closes the oldest open snack that is not already on its way out.
    fn dismiss_oldest(&mut self) {
        let now = self.now;
        if let Some(entry) = self.active.iter_mut().find(|e| e.snack.is_open()) {
            tracing::debug!(key = %entry.snack.key(), "dismissing oldest snack");
            entry.close(now);
        }
    }

    /// Moves queued snacks on screen while there is room.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.active.len() < self.max_snack {
            let Some(snack) = self.queue.pop_front() else {
                break;
            };
            let popup = Popup::new(
                now,
                self.props.auto_hide_duration,
                self.props.transition_duration,
            );
            self.active.push(Entry { snack, popup });
        }
    }
}
