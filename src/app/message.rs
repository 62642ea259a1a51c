// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{SnackKey, SnackMessage, Variant};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Forwarded to the snack manager.
    Snack(SnackMessage),
    /// Show a sample snack of the given variant.
    Show(Variant),
    /// Show a snack with an "UNDO" action.
    ShowUndoable,
    /// The "UNDO" action of a snack was pressed.
    Undo(SnackKey),
    /// The "RETRY" action of an error snack was pressed.
    Retry(SnackKey),
    /// Move the stack to the next screen anchor.
    CycleAnchor,
    CloseAll,
    /// Persist the current settings to `settings.toml`.
    SaveSettings,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Anchor override, e.g. `top-right`.
    pub anchor: Option<String>,
    /// Number of snacks on screen at once.
    pub max_snack: Option<usize>,
    /// Hide variant icons.
    pub hide_icons: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SNACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
