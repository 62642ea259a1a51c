// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Timing**: Auto-hide delay and slide duration
//! - **Stack**: How many snacks share the screen

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-hide delay of a snack (in milliseconds).
pub const DEFAULT_AUTO_HIDE_MS: u64 = 5_000;

/// Default duration of the enter and exit slides (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 225;

/// Longest accepted auto-hide delay (in milliseconds).
pub const MAX_AUTO_HIDE_MS: u64 = 60_000;

/// Longest accepted slide duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2_000;

// ==========================================================================
// Stack Defaults
// ==========================================================================

/// Default number of snacks on screen at once.
pub const DEFAULT_MAX_SNACK: usize = 3;

/// Largest accepted number of snacks on screen at once.
pub const MAX_MAX_SNACK: usize = 10;

const _: () = {
    assert!(DEFAULT_AUTO_HIDE_MS <= MAX_AUTO_HIDE_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_MAX_SNACK >= 1 && DEFAULT_MAX_SNACK <= MAX_MAX_SNACK);
};
