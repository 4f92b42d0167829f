use crate::config::theme::ThemeStyles;
use crate::core::palette::Palette;
use crate::state::{RunStatus, State};
use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

#[derive(Debug, Default)]
pub struct UiComponent;

impl UiComponent {
    fn build_status_bar(
        app_state: &State,
        palette: &Palette,
        theme: &ThemeStyles,
    ) -> Vec<Span<'static>> {
        let selected_count = palette.selected().len();

        let run_status = {
            let text = app_state.run_status.to_string();
            let style = match app_state.run_status {
                RunStatus::Idle => theme.text_muted,
                RunStatus::Running { .. } => theme.warning,
                RunStatus::Finished { .. } => theme.success,
            };
            Span::styled(text, style)
        };

        vec![
            Span::styled(
                format!("{selected_count} colors selected"),
                theme.text_muted,
            ),
            Span::raw(" | "),
            run_status,
            Span::raw(" | "),
        ]
    }

    fn build_top_bar(theme: &ThemeStyles) -> Vec<Span<'static>> {
        vec![
            Span::styled("Press 'q' to quit", theme.text_muted),
            Span::raw(" | "),
            Span::styled("'s' to start", theme.text_muted),
            Span::raw(" | "),
            Span::styled("'?' for help", theme.text_muted),
        ]
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        full_area: ratatui::layout::Rect,
        app_state: &State,
        palette: &Palette,
        theme: &ThemeStyles,
    ) {
        let status_bar = Self::build_status_bar(app_state, palette, theme);
        let top_bar = Self::build_top_bar(theme);

        let block = Block::bordered()
            .border_style(theme.border)
            .style(theme.base_block)
            .title(Line::from(top_bar))
            .title_bottom(Line::from(status_bar));

        f.render_widget(block, full_area);
    }
}
