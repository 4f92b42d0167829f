use crate::config::theme::ThemeStyles;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Error,
    Info,
}

/// One line surfaced to the user: a rejected start attempt, a completed run,
/// or an available update. At most one is shown at a time; a new one
/// replaces the old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

fn notification_prefix(level: NotificationLevel, theme: &ThemeStyles) -> (&'static str, Style) {
    match level {
        NotificationLevel::Error => ("Error: ", theme.error),
        NotificationLevel::Info => ("", theme.success),
    }
}

pub fn render_notification(
    f: &mut Frame,
    area: Rect,
    notification: &Notification,
    theme: &ThemeStyles,
) {
    let (prefix, style) = notification_prefix(notification.level, theme);
    let line = Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(notification.message.as_str(), style),
    ]);
    f.render_widget(Paragraph::new(line).style(theme.base_block), area);
}
