use crate::config::options::Options;
use crate::config::theme::ThemeStyles;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    DisplayTime,
    DelayTime,
    Repetitions,
}

impl InputId {
    fn label(self) -> &'static str {
        match self {
            InputId::DisplayTime => "Display time (s)",
            InputId::DelayTime => "Delay time (s)",
            InputId::Repetitions => "Repetitions",
        }
    }

    const fn all() -> [InputId; 3] {
        [
            InputId::DisplayTime,
            InputId::DelayTime,
            InputId::Repetitions,
        ]
    }
}

/// The three numeric text fields. Raw text is kept as typed; parsing and
/// range checks happen in `core::validate` when start is pressed.
#[derive(Debug)]
pub struct InputsComponent {
    display_time: String,
    delay_time: String,
    repetitions: String,
}

impl InputsComponent {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            display_time: format_seconds(options.display_time),
            delay_time: format_seconds(options.delay_time),
            repetitions: options.repetitions.to_string(),
        }
    }

    #[must_use]
    pub fn value(&self, id: InputId) -> &str {
        match id {
            InputId::DisplayTime => &self.display_time,
            InputId::DelayTime => &self.delay_time,
            InputId::Repetitions => &self.repetitions,
        }
    }

    fn buffer_mut(&mut self, id: InputId) -> &mut String {
        match id {
            InputId::DisplayTime => &mut self.display_time,
            InputId::DelayTime => &mut self.delay_time,
            InputId::Repetitions => &mut self.repetitions,
        }
    }

    fn is_valid_input_char(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }

    pub fn add_char(&mut self, id: InputId, c: char) {
        if Self::is_valid_input_char(c) {
            self.buffer_mut(id).push(c);
        }
    }

    pub fn backspace(&mut self, id: InputId) {
        self.buffer_mut(id).pop();
    }

    fn field_line(&self, id: InputId, focus: Option<InputId>, theme: &ThemeStyles) -> Line<'_> {
        let focused = focus == Some(id);
        let value_style = if focused { theme.selection } else { theme.text };
        let cursor = if focused { "_" } else { " " };

        Line::from(vec![
            Span::styled(format!("{:<17}", id.label()), theme.text_muted),
            Span::styled(format!("{}{cursor}", self.value(id)), value_style),
        ])
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        focus: Option<InputId>,
        theme: &ThemeStyles,
    ) {
        let border = if focus.is_some() {
            theme.border_active
        } else {
            theme.border
        };
        let block = Block::bordered()
            .border_style(border)
            .style(theme.panel_block)
            .title(" Timing ");

        let mut lines = Vec::new();
        for id in InputId::all() {
            lines.push(self.field_line(id, focus, theme));
            lines.push(Line::from(""));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn format_seconds(seconds: f64) -> String {
    // trims "1.0" to "1" but keeps "0.5"
    if seconds.fract() == 0.0 {
        format!("{seconds:.0}")
    } else {
        format!("{seconds}")
    }
}
