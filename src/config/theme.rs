use ratatui::style::{Color, Style, Stylize};

use crate::core::palette::ColorId;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub base_bg: Color,
    pub surface_bg: Color,
    pub panel_bg: Color,
    pub border: Color,
    pub border_active: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeStyles {
    pub base_block: Style,
    pub panel_block: Style,
    pub surface_block: Style,
    pub border: Style,
    pub border_active: Style,
    pub text: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub selection: Style,
}

pub const EVERFOREST_DARK: Theme = Theme {
    base_bg: rgb(0x2d, 0x35, 0x3b),
    surface_bg: rgb(0x34, 0x3f, 0x44),
    panel_bg: rgb(0x3d, 0x48, 0x4d),
    border: rgb(0x7a, 0x84, 0x78),
    border_active: rgb(0x85, 0x92, 0x89),
    text: rgb(0xd3, 0xc6, 0xaa),
    text_muted: rgb(0x85, 0x92, 0x89),
    accent: rgb(0x83, 0xc0, 0x92),
    success: rgb(0xa7, 0xc0, 0x80),
    warning: rgb(0xdb, 0xbc, 0x7f),
    error: rgb(0xe6, 0x7e, 0x80),
    selection_bg: rgb(0x7f, 0xbb, 0xb3),
    selection_fg: rgb(0x2d, 0x35, 0x3b),
};

#[must_use]
pub fn build_theme_styles(theme: Theme) -> ThemeStyles {
    ThemeStyles {
        base_block: Style::new().bg(theme.base_bg).fg(theme.text),
        panel_block: Style::new().bg(theme.panel_bg).fg(theme.text),
        surface_block: Style::new().bg(theme.surface_bg),
        border: Style::new().fg(theme.border),
        border_active: Style::new().fg(theme.border_active),
        text: Style::new().fg(theme.text),
        text_muted: Style::new().fg(theme.text_muted),
        accent: Style::new().fg(theme.accent).bold(),
        success: Style::new().fg(theme.success).bold(),
        warning: Style::new().fg(theme.warning).bold(),
        error: Style::new().fg(theme.error).bold(),
        selection: Style::new()
            .bg(theme.selection_bg)
            .fg(theme.selection_fg)
            .bold(),
    }
}

/// Terminal colors for the flashed palette. These are the colors the surface
/// actually flashes, distinct from the UI theme above.
#[must_use]
pub const fn flash_color(id: ColorId) -> Color {
    match id {
        ColorId::Red => rgb(0xe0, 0x3c, 0x31),
        ColorId::Orange => rgb(0xf0, 0x80, 0x1a),
        ColorId::Yellow => rgb(0xf0, 0xce, 0x15),
        ColorId::Green => rgb(0x32, 0xa8, 0x52),
        ColorId::Cyan => rgb(0x29, 0xb2, 0xb2),
        ColorId::Blue => rgb(0x25, 0x63, 0xeb),
        ColorId::Purple => rgb(0x8b, 0x2f, 0xc9),
        ColorId::Pink => rgb(0xe7, 0x5a, 0xb5),
    }
}

/// The white pause shown between two flashes.
pub const PAUSE_WHITE: Color = rgb(0xff, 0xff, 0xff);

const fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::Rgb(red, green, blue)
}
