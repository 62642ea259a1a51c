// SPDX-License-Identifier: MPL-2.0
//! Variant icons.
//!
//! Icons are small inline SVG documents. Handles are created once on first
//! access via `OnceLock` and cloned afterwards, so building an [`IconSet`]
//! for every item is cheap.
//!
//! # Usage
//!
//! ```ignore
//! use iced_snack::ui::icons::IconSet;
//! use iced_snack::ui::notifications::Variant;
//!
//! let icons = IconSet::default();
//! let success = icons.svg(Variant::Success, 24.0);
//! ```

use crate::ui::notifications::Variant;
use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $source:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory($source.as_bytes()))
                .clone()
        }
    };
}

const BELL_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="white" d="M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2zm6-6V11c0-3.07-1.64-5.64-4.5-6.32V4a1.5 1.5 0 0 0-3 0v.68C7.63 5.36 6 7.92 6 11v5l-2 2v1h16v-1l-2-2z"/></svg>"#;

const ERROR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="white" d="M12 2C6.47 2 2 6.47 2 12s4.47 10 10 10 10-4.47 10-10S17.53 2 12 2zm5 13.59L15.59 17 12 13.41 8.41 17 7 15.59 10.59 12 7 8.41 8.41 7 12 10.59 15.59 7 17 8.41 13.41 12 17 15.59z"/></svg>"#;

const SUCCESS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="white" d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z"/></svg>"#;

const WARNING_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="white" d="M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z"/></svg>"#;

const INFO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="white" d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z"/></svg>"#;

define_icon!(bell, BELL_SVG, "Bell icon: neutral notification.");
define_icon!(error_circle, ERROR_SVG, "Error icon: cross in a circle.");
define_icon!(check_circle, SUCCESS_SVG, "Success icon: checkmark in a circle.");
define_icon!(warning_triangle, WARNING_SVG, "Warning icon: exclamation in a triangle.");
define_icon!(info_circle, INFO_SVG, "Info icon: letter i in a circle.");

/// Mapping from variant to icon.
#[derive(Debug, Clone)]
pub struct IconSet {
    pub default: Handle,
    pub error: Handle,
    pub success: Handle,
    pub warning: Handle,
    pub info: Handle,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            default: bell(),
            error: error_circle(),
            success: check_circle(),
            warning: warning_triangle(),
            info: info_circle(),
        }
    }
}

impl IconSet {
    /// Returns the icon handle for `variant`.
    #[must_use]
    pub fn get(&self, variant: Variant) -> &Handle {
        match variant {
            Variant::Default => &self.default,
            Variant::Error => &self.error,
            Variant::Success => &self.success,
            Variant::Warning => &self.warning,
            Variant::Info => &self.info,
        }
    }

    /// Returns a sized SVG widget for `variant`.
    #[must_use]
    pub fn svg<'a>(&self, variant: Variant, size: f32) -> Svg<'a> {
        Svg::new(self.get(variant).clone()).width(size).height(size)
    }
}
