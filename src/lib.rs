// SPDX-License-Identifier: MPL-2.0
//! `iced_snack` provides stacked snack notifications for Iced applications.
//!
//! Snacks are short messages docked to a screen corner. The crate handles
//! their queue, stacking, auto-hide timers, slide transitions, clickaway
//! filtering and action dispatch, and ships a small demo application.

#![doc(html_root_url = "https://docs.rs/iced_snack/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
