use ratatui::layout::{Constraint, Layout, Rect};

const CONTROLS_WIDTH: u16 = 32;
const INPUTS_HEIGHT: u16 = 9;
const NOTIFICATION_HEIGHT: u16 = 1;

#[derive(Debug, Clone)]
pub struct AppLayout {
    pub palette_area: Rect,
    pub inputs_area: Rect,
    pub notification_area: Rect,
    pub surface_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let content_area = ratatui::widgets::Block::bordered().inner(area);

        let [controls_area, surface_area] = Layout::horizontal([
            Constraint::Length(CONTROLS_WIDTH),
            Constraint::Fill(1),
        ])
        .split(content_area)[..] else {
            panic!("Failed to split")
        };

        let [palette_area, inputs_area, notification_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(INPUTS_HEIGHT),
            Constraint::Length(NOTIFICATION_HEIGHT),
        ])
        .split(controls_area)[..] else {
            panic!("Failed to split")
        };

        Self {
            palette_area,
            inputs_area,
            notification_area,
            surface_area,
        }
    }
}
