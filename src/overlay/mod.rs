pub mod notification;

pub use notification::{Notification, NotificationLevel, render_notification};
