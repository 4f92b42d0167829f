use crate::config::theme::{PAUSE_WHITE, ThemeStyles, flash_color};
use crate::core::sequencer::SurfaceFill;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

/// The display surface. Its background is the only animated output: the
/// theme background when idle, white during a pause, a flash color otherwise.
#[derive(Debug, Default)]
pub struct SurfaceComponent;

impl SurfaceComponent {
    pub fn render(&mut self, f: &mut Frame, area: Rect, fill: SurfaceFill, theme: &ThemeStyles) {
        let fill_style = match fill {
            SurfaceFill::Default => theme.surface_block,
            SurfaceFill::White => Style::new().bg(PAUSE_WHITE),
            SurfaceFill::Flash(id) => Style::new().bg(flash_color(id)),
        };

        let block = Block::bordered()
            .border_style(theme.border)
            .style(fill_style);

        f.render_widget(block, area);
    }
}
