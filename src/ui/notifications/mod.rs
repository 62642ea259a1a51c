// SPDX-License-Identifier: MPL-2.0
//! Stacked snack notifications.
//!
//! A snack is a short message that slides in at a screen corner, stays for a
//! few seconds and slides out again. Several snacks stack on top of each
//! other without overlapping.
//!
//! # Components
//!
//! - [`notification`] - `Snack` record, `Variant` and content overrides
//! - [`anchor`] - Screen corner a snack is docked to
//! - [`position`] - Stack offset and slide direction of a snack
//! - [`popup`] - Auto-hide timer and slide transition
//! - [`item`] - Close filtering, action dispatch and rendering of one snack
//! - [`manager`] - Queue, stack limit and lifecycle of all snacks
//!
//! # Usage
//!
//! ```ignore
//! use iced_snack::ui::notifications::{Manager, Snack};
//!
//! let mut manager: Manager<Message> = Manager::new();
//! manager.push(Snack::success("Saved").with_action("UNDO").on_click_action(Message::Undo))?;
//!
//! // In the view function, layer the overlay on top of the content
//! let overlay = manager.view().map(Message::Snack);
//! ```

pub mod anchor;
pub mod item;
pub mod manager;
pub mod notification;
pub mod popup;
pub mod position;

pub use anchor::{AnchorOrigin, Horizontal, Vertical};
pub use item::{Click, Content, ItemProps, Rendered, SnackbarItem};
pub use manager::{Manager, Message as SnackMessage};
pub use notification::{ClickHandler, ContentProps, Snack, SnackKey, Variant};
pub use popup::{CloseReason, Phase, Popup, PopupEvent};
pub use position::{Direction, Offset, Placement};
