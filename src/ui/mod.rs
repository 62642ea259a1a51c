// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - Snack queue, stacking and rendering
//! - [`icons`] - SVG icons for the snack variants
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod icons;
pub mod notifications;
