// SPDX-License-Identifier: MPL-2.0
//! Screen anchoring of snacks.

use std::fmt;
use std::str::FromStr;

/// Vertical edge a snack is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vertical {
    Top,
    #[default]
    Bottom,
}

/// Horizontal position a snack is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    #[default]
    Left,
    Center,
    Right,
}

/// Screen corner or edge a snack is docked to.
///
/// Defaults to bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnchorOrigin {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl AnchorOrigin {
    pub const fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Parses `"<vertical>-<horizontal>"` (e.g. `top-right`), falling back to
    /// the default origin when the value is not recognised.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for AnchorOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let (vertical, horizontal) = normalized
            .split_once('-')
            .ok_or_else(|| format!("invalid anchor origin: {s}"))?;

        let vertical = match vertical {
            "top" => Vertical::Top,
            "bottom" => Vertical::Bottom,
            other => return Err(format!("invalid vertical anchor: {other}")),
        };
        let horizontal = match horizontal {
            "left" => Horizontal::Left,
            "center" => Horizontal::Center,
            "right" => Horizontal::Right,
            other => return Err(format!("invalid horizontal anchor: {other}")),
        };

        Ok(Self::new(vertical, horizontal))
    }
}

impl fmt::Display for AnchorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            Vertical::Top => "top",
            Vertical::Bottom => "bottom",
        };
        let horizontal = match self.horizontal {
            Horizontal::Left => "left",
            Horizontal::Center => "center",
            Horizontal::Right => "right",
        };
        write!(f, "{vertical}-{horizontal}")
    }
}
