// SPDX-License-Identifier: MPL-2.0
//! Stack placement of snacks.
//!
//! [`resolve`] maps a snack's stack level and anchor origin to the offset
//! from the anchored edge and the slide direction of its transition. It is a
//! pure function: the same inputs always give the same placement, whatever
//! order snacks are rendered in.

use super::anchor::{AnchorOrigin, Horizontal, Vertical};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{Padding, Vector};

/// Height reserved for one snack in the stack.
pub const SNACK_HEIGHT: f32 = sizing::SNACK_HEIGHT;

/// Gap between two stacked snacks.
pub const STACK_GUTTER: f32 = spacing::MD;

/// Direction a snack moves in while entering. Exiting runs it backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Displacement from the anchored edge along the stacking axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    /// Edge the distance is measured from.
    pub edge: Vertical,
    pub distance: f32,
}

/// Layout and transition parameters of one snack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub anchor: AnchorOrigin,
    pub offset: Offset,
    pub direction: Direction,
}

/// Resolves the placement of the snack at `level`.
///
/// A missing anchor origin falls back to [`AnchorOrigin::default`].
#[must_use]
pub fn resolve(level: usize, anchor: Option<AnchorOrigin>) -> Placement {
    let anchor = anchor.unwrap_or_default();
    Placement {
        anchor,
        offset: Offset {
            edge: anchor.vertical,
            distance: stack_offset(level),
        },
        direction: transition_direction(anchor),
    }
}

/// Distance of the snack at `level` from the anchored edge.
#[must_use]
pub fn stack_offset(level: usize) -> f32 {
    level as f32 * (SNACK_HEIGHT + STACK_GUTTER)
}

/// Slide direction for an anchor: horizontally anchored snacks slide in from
/// their side, centered ones from their vertical edge.
#[must_use]
pub fn transition_direction(anchor: AnchorOrigin) -> Direction {
    match (anchor.horizontal, anchor.vertical) {
        (Horizontal::Left, _) => Direction::Right,
        (Horizontal::Right, _) => Direction::Left,
        (Horizontal::Center, Vertical::Bottom) => Direction::Up,
        (Horizontal::Center, Vertical::Top) => Direction::Down,
    }
}

/// Translation of a sliding snack.
///
/// `progress` runs from `0.0` (fully off-screen, `travel` away) to `1.0`
/// (resting position).
#[must_use]
pub fn slide_translation(direction: Direction, progress: f32, travel: f32) -> Vector {
    let remaining = (1.0 - progress.clamp(0.0, 1.0)) * travel;
    match direction {
        Direction::Right => Vector::new(-remaining, 0.0),
        Direction::Left => Vector::new(remaining, 0.0),
        Direction::Up => Vector::new(0.0, remaining),
        Direction::Down => Vector::new(0.0, -remaining),
    }
}

impl Placement {
    /// Outer padding that puts the snack at its place inside a full-size
    /// layer, shifted by `translation`.
    ///
    /// Padding cannot be negative, so a snack sliding past the window edge
    /// stops at the edge.
    #[must_use]
    pub fn padding(&self, margin: f32, translation: Vector) -> Padding {
        let primary = margin + self.offset.distance;
        let (mut top, mut bottom) = match self.offset.edge {
            Vertical::Top => (primary + translation.y, 0.0),
            Vertical::Bottom => (0.0, primary - translation.y),
        };
        let (mut left, mut right) = match self.anchor.horizontal {
            Horizontal::Left => (margin + translation.x, 0.0),
            Horizontal::Right => (0.0, margin - translation.x),
            Horizontal::Center => (0.0, 0.0),
        };
        top = top.max(0.0);
        bottom = bottom.max(0.0);
        left = left.max(0.0);
        right = right.max(0.0);

        Padding {
            top,
            right,
            bottom,
            left,
        }
    }
}
