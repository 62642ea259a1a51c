// SPDX-License-Identifier: MPL-2.0
//! Popup lifecycle: auto-hide timer and slide transition.
//!
//! A `Popup` is the timing half of a snack on screen. It never changes the
//! snack's `open` flag itself; it reports [`PopupEvent::Close`] when the
//! auto-hide timer runs out and [`PopupEvent::Exited`] once the exit slide
//! has finished, and the owner decides what to do with them.
//!
//! All methods take the current `Instant` explicitly so the state machine
//! can be driven by the tick subscription and by tests alike.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Why a popup asks to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The auto-hide duration elapsed.
    Timeout,
    /// A pointer press landed outside the popup.
    Clickaway,
    /// The escape key was pressed.
    EscapeKeyDown,
}

impl CloseReason {
    /// Stable string tag of the reason.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CloseReason::Timeout => "timeout",
            CloseReason::Clickaway => "clickaway",
            CloseReason::EscapeKeyDown => "escapeKeyDown",
        }
    }
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloseReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeout" => Ok(CloseReason::Timeout),
            "clickaway" => Ok(CloseReason::Clickaway),
            "escapeKeyDown" => Ok(CloseReason::EscapeKeyDown),
            other => Err(format!("unknown close reason: {other}")),
        }
    }
}

/// Lifecycle events reported by [`Popup::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    Close(CloseReason),
    Exited,
}

/// Stage of the popup on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    Exited,
}

/// Timer and transition state of one popup.
#[derive(Debug, Clone)]
pub struct Popup {
    phase: Phase,
    phase_started: Instant,
    transition: Duration,
    /// Progress at which the exit slide started (an entering popup can be
    /// closed half-way in).
    exit_from: f32,
    /// Auto-hide time left when the timer was last paused or started.
    remaining: Option<Duration>,
    /// Set while the timer runs.
    running_since: Option<Instant>,
    hovered: bool,
    timed_out: bool,
}

impl Popup {
    /// Creates an entering popup. The auto-hide timer starts right away.
    ///
    /// `auto_hide` of `None` keeps the popup until it is closed explicitly.
    #[must_use]
    pub fn new(now: Instant, auto_hide: Option<Duration>, transition: Duration) -> Self {
        Self {
            phase: Phase::Entering,
            phase_started: now,
            transition,
            exit_from: 1.0,
            remaining: auto_hide,
            running_since: Some(now),
            hovered: false,
            timed_out: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pauses the auto-hide timer while hovered and resumes it afterwards.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;

        if hovered {
            if let (Some(remaining), Some(since)) = (self.remaining, self.running_since.take()) {
                self.remaining = Some(remaining.saturating_sub(now.duration_since(since)));
            }
        } else {
            self.running_since = Some(now);
        }
    }

    /// Slide progress from `0.0` (off-screen) to `1.0` (resting).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let moved = self.transition_fraction(now);
        match self.phase {
            Phase::Entering => moved.min(1.0),
            Phase::Visible => 1.0,
            Phase::Exiting => (self.exit_from - moved).max(0.0),
            Phase::Exited => 0.0,
        }
    }

    /// Starts the exit slide. Does nothing if the popup is already leaving.
    pub fn close(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Entering | Phase::Visible) {
            self.exit_from = self.progress(now);
            self.enter(Phase::Exiting, now);
        }
    }

    /// Advances the popup to `now`.
    ///
    /// `open` is the snack's current visibility flag. Each event is reported
    /// at most once: a timeout that runs out after the snack started closing
    /// is dropped.
    pub fn tick(&mut self, now: Instant, open: bool) -> Option<PopupEvent> {
        if !open {
            self.close(now);
        }

        match self.phase {
            Phase::Entering | Phase::Visible => {
                if self.phase == Phase::Entering && self.transition_fraction(now) >= 1.0 {
                    self.enter(Phase::Visible, now);
                }
                if self.timer_expired(now) {
                    self.timed_out = true;
                    return Some(PopupEvent::Close(CloseReason::Timeout));
                }
                None
            }
            Phase::Exiting => {
                if self.progress(now) <= 0.0 {
                    self.enter(Phase::Exited, now);
                    return Some(PopupEvent::Exited);
                }
                None
            }
            Phase::Exited => None,
        }
    }

    fn enter(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.phase_started = now;
    }

    fn transition_fraction(&self, now: Instant) -> f32 {
        if self.transition.is_zero() {
            return f32::INFINITY;
        }
        now.duration_since(self.phase_started).as_secs_f32() / self.transition.as_secs_f32()
    }

    fn timer_expired(&self, now: Instant) -> bool {
        if self.timed_out {
            return false;
        }
        match (self.remaining, self.running_since) {
            (Some(remaining), Some(since)) => now.duration_since(since) >= remaining,
            _ => false,
        }
    }
}
