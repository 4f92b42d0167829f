use crate::config::theme::{ThemeStyles, flash_color};
use crate::core::palette::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const SWATCH: &str = "██";

/// The color option list. Owns only the cursor; the toggle flags live in the
/// core [`Palette`].
#[derive(Debug, Default)]
pub struct PaletteComponent {
    cursor: usize,
}

impl PaletteComponent {
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, option_count: usize) {
        self.cursor = (self.cursor + 1).min(option_count.saturating_sub(1));
    }

    fn option_line(
        &self,
        index: usize,
        palette: &Palette,
        focused: bool,
        theme: &ThemeStyles,
    ) -> Line<'static> {
        let option = palette.options()[index];
        let marker = if option.selected { "[x]" } else { "[ ]" };
        let name_style = if focused && index == self.cursor {
            theme.selection
        } else if option.selected {
            theme.accent
        } else {
            theme.text
        };

        Line::from(vec![
            Span::styled(
                SWATCH.to_string(),
                Style::new().fg(flash_color(option.id)),
            ),
            Span::raw(" "),
            Span::styled(format!("{marker} {}", option.id.name()), name_style),
        ])
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        palette: &Palette,
        focused: bool,
        theme: &ThemeStyles,
    ) {
        let border = if focused {
            theme.border_active
        } else {
            theme.border
        };
        let block = Block::bordered()
            .border_style(border)
            .style(theme.panel_block)
            .title(" Colors ");

        let lines: Vec<Line> = (0..palette.len())
            .map(|index| self.option_line(index, palette, focused, theme))
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_top() {
        let mut component = PaletteComponent::default();
        component.move_up();
        assert_eq!(component.cursor(), 0);
    }

    #[test]
    fn test_cursor_stops_at_bottom() {
        let mut component = PaletteComponent::default();
        for _ in 0..20 {
            component.move_down(8);
        }
        assert_eq!(component.cursor(), 7);
    }
}
