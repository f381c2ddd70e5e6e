//! Reusable widgets for the TUI
//!
//! Presentation primitives the dialogs compose.

pub mod button;
pub mod checkbox;
pub mod notification;

pub use button::Button;
pub use checkbox::Checkbox;
pub use notification::{Notification, NotificationKind, NotificationQueue, NotificationWidget};
