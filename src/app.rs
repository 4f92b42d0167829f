use std::pin::Pin;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode};
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::Sleep;
use tokio_stream::StreamExt;
use tracing::{debug, info};

use crate::components::help::HelpComponent;
use crate::components::inputs::{InputId, InputsComponent};
use crate::components::palette_pane::PaletteComponent;
use crate::components::surface::SurfaceComponent;
use crate::components::ui::UiComponent;
use crate::config::keybindings::{KeyAction, KeyBindings};
use crate::config::options::Options;
use crate::config::theme::{EVERFOREST_DARK, ThemeStyles, build_theme_styles};
use crate::core::palette::Palette;
use crate::core::sequencer::{Sequencer, Tick};
use crate::core::validate::validate;
use crate::layout::AppLayout;
use crate::overlay::notification::Notification;
use crate::state::{RunStatus, State};
use crate::update::{self, UpdateCheck};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Main,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Palette,
    Input(InputId),
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Palette => Focus::Input(InputId::DisplayTime),
            Focus::Input(InputId::DisplayTime) => Focus::Input(InputId::DelayTime),
            Focus::Input(InputId::DelayTime) => Focus::Input(InputId::Repetitions),
            Focus::Input(InputId::Repetitions) => Focus::Palette,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Palette => Focus::Input(InputId::Repetitions),
            Focus::Input(InputId::DisplayTime) => Focus::Palette,
            Focus::Input(InputId::DelayTime) => Focus::Input(InputId::DisplayTime),
            Focus::Input(InputId::Repetitions) => Focus::Input(InputId::DelayTime),
        }
    }
}

pub struct App {
    should_quit: bool,
    mode: AppMode,
    focus: Focus,
    app_state: State,
    palette: Palette,
    sequencer: Sequencer,
    /// The single armed transition. Dropped and re-armed on every tick, so a
    /// superseded run can never fire into the new one.
    deadline: Option<Pin<Box<Sleep>>>,
    ui_component: UiComponent,
    palette_component: PaletteComponent,
    inputs_component: InputsComponent,
    surface_component: SurfaceComponent,
    help_component: HelpComponent,
    keybindings: KeyBindings,
    styles: ThemeStyles,
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        let inputs_component = InputsComponent::new(&options);

        Self {
            should_quit: false,
            mode: AppMode::Main,
            focus: Focus::Palette,
            app_state: State::new(),
            palette: Palette::default(),
            sequencer: Sequencer::new(),
            deadline: None,
            ui_component: UiComponent,
            palette_component: PaletteComponent::default(),
            inputs_component,
            surface_component: SurfaceComponent,
            help_component: HelpComponent,
            keybindings: KeyBindings,
            styles: build_theme_styles(EVERFOREST_DARK),
            options,
        }
    }

    fn start_run(&mut self) {
        let selected = self.palette.selected();
        let result = validate(
            &selected,
            self.inputs_component.value(InputId::DisplayTime),
            self.inputs_component.value(InputId::DelayTime),
            self.inputs_component.value(InputId::Repetitions),
        );

        match result {
            Ok(config) => {
                self.app_state.notification = None;
                // discard any pending transition before arming a new one
                self.deadline = None;
                let tick = self.sequencer.start(config);
                self.apply_tick(tick);
            }
            Err(error) => {
                debug!(%error, "rejected start attempt");
                self.app_state.notification = Some(Notification::error(error.to_string()));
            }
        }
    }

    fn on_deadline(&mut self) {
        self.deadline = None;
        let tick = self.sequencer.advance();
        self.apply_tick(tick);
    }

    fn apply_tick(&mut self, tick: Tick) {
        self.app_state.surface = tick.fill;
        self.deadline = tick.next.map(|delay| Box::pin(tokio::time::sleep(delay)));

        if self.sequencer.is_running() {
            self.app_state.run_status = RunStatus::Running {
                completed: self.sequencer.completed(),
                total: self.sequencer.total(),
            };
        } else if let RunStatus::Running { total, .. } = self.app_state.run_status {
            self.app_state.run_status = RunStatus::Finished { total };
            self.app_state.notification =
                Some(Notification::info(format!("Run finished: {total} flashes")));
        }
    }

    fn on_update_check(&mut self, result: Option<UpdateCheck>) {
        if let Some(UpdateCheck::UpdateAvailable(version)) = result {
            info!(%version, "newer release available");
            self.app_state.notification = Some(Notification::info(format!(
                "flashbox v{version} is available"
            )));
        }
    }

    fn execute_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Help => AppMode::Main,
                    AppMode::Main => AppMode::Help,
                };
            }
            KeyAction::CloseWidget => self.mode = AppMode::Main,
            KeyAction::Start => self.start_run(),
            KeyAction::FocusNext => self.focus = self.focus.next(),
            KeyAction::FocusPrev => self.focus = self.focus.prev(),
            KeyAction::MoveUp => {
                if self.focus == Focus::Palette {
                    self.palette_component.move_up();
                }
            }
            KeyAction::MoveDown => {
                if self.focus == Focus::Palette {
                    self.palette_component.move_down(self.palette.len());
                }
            }
            KeyAction::ToggleColor => {
                if self.focus == Focus::Palette {
                    self.palette.toggle(self.palette_component.cursor());
                }
            }
            KeyAction::InputChar(c) => {
                if let Focus::Input(id) = self.focus {
                    self.inputs_component.add_char(id, c);
                }
            }
            KeyAction::InputBackspace => {
                if let Focus::Input(id) = self.focus {
                    self.inputs_component.backspace(id);
                }
            }
        }
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_press_event() {
            // help is modal: any key dismisses it
            if self.mode == AppMode::Help {
                self.mode = AppMode::Main;
                return;
            }

            if let Some(binding) = self.keybindings.lookup_binding(key.code, key.modifiers) {
                self.execute_action(binding.action);
                return;
            }

            if let KeyCode::Char(c) = key.code {
                self.execute_action(KeyAction::InputChar(c));
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let layout = AppLayout::new(frame.area());

        self.ui_component.render(
            frame,
            frame.area(),
            &self.app_state,
            &self.palette,
            &self.styles,
        );

        self.palette_component.render(
            frame,
            layout.palette_area,
            &self.palette,
            self.focus == Focus::Palette,
            &self.styles,
        );

        let input_focus = match self.focus {
            Focus::Input(id) => Some(id),
            Focus::Palette => None,
        };
        self.inputs_component
            .render(frame, layout.inputs_area, input_focus, &self.styles);

        self.surface_component.render(
            frame,
            layout.surface_area,
            self.app_state.surface,
            &self.styles,
        );

        if let Some(notification) = &self.app_state.notification {
            crate::overlay::notification::render_notification(
                frame,
                layout.notification_area,
                notification,
                &self.styles,
            );
        }

        if self.mode == AppMode::Help {
            self.help_component
                .render(frame, frame.area(), &self.keybindings);
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let (update_tx, mut update_rx) = mpsc::channel(1);
        update::spawn_update_check(update_tx);

        let period = Duration::from_secs_f32(1.0 / self.options.fps);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while !self.should_quit {
            tokio::select! {
                _ = interval.tick() => { terminal.draw(|frame| { self.render(frame) })?; },
                Some(Ok(event)) = events.next() => self.handle_event(&event),
                () = async {
                    match self.deadline.as_mut() {
                        Some(deadline) => deadline.as_mut().await,
                        None => std::future::pending().await,
                    }
                } => self.on_deadline(),
                Some(result) = update_rx.recv() => self.on_update_check(result),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequencer::SurfaceFill;
    use crate::overlay::notification::NotificationLevel;

    fn test_app() -> App {
        App::new(Options::default())
    }

    fn select_color(app: &mut App, index: usize) {
        app.palette.toggle(index);
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let mut app = test_app();
        for _ in 0..4 {
            app.execute_action(KeyAction::FocusNext);
        }
        assert_eq!(app.focus, Focus::Palette);
        app.execute_action(KeyAction::FocusPrev);
        assert_eq!(app.focus, Focus::Input(InputId::Repetitions));
    }

    #[test]
    fn test_toggle_action_targets_cursor() {
        let mut app = test_app();
        app.execute_action(KeyAction::MoveDown);
        app.execute_action(KeyAction::ToggleColor);
        assert_eq!(app.palette.selected().len(), 1);
        app.execute_action(KeyAction::ToggleColor);
        assert!(app.palette.selected().is_empty());
    }

    #[test]
    fn test_typed_chars_ignored_while_palette_focused() {
        let mut app = test_app();
        app.execute_action(KeyAction::InputChar('9'));
        assert_eq!(app.inputs_component.value(InputId::DisplayTime), "1");
    }

    #[test]
    fn test_start_with_empty_selection_arms_nothing() {
        let mut app = test_app();
        app.start_run();

        let notification = app.app_state.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(app.deadline.is_none());
        assert_eq!(app.app_state.surface, SurfaceFill::Default);
        assert_eq!(app.app_state.run_status, RunStatus::Idle);
    }

    #[tokio::test]
    async fn test_start_arms_one_deadline() {
        let mut app = test_app();
        select_color(&mut app, 0);
        app.start_run();

        assert!(app.deadline.is_some());
        assert!(app.app_state.notification.is_none());
        assert!(matches!(app.app_state.surface, SurfaceFill::Flash(_)));
        assert_eq!(
            app.app_state.run_status,
            RunStatus::Running {
                completed: 1,
                total: 10
            }
        );
    }

    #[tokio::test]
    async fn test_restart_supersedes_previous_run() {
        let mut app = test_app();
        select_color(&mut app, 0);
        app.start_run();
        app.on_deadline();
        assert_eq!(app.sequencer.completed(), 1);

        app.start_run();
        assert_eq!(app.sequencer.completed(), 1);
        assert_eq!(
            app.app_state.run_status,
            RunStatus::Running {
                completed: 1,
                total: 10
            }
        );
    }

    #[tokio::test]
    async fn test_run_walks_to_finished() {
        let mut app = test_app();
        select_color(&mut app, 3);
        // a single repetition: color, pause, done
        for _ in 0..2 {
            app.inputs_component.backspace(InputId::Repetitions);
        }
        app.inputs_component.add_char(InputId::Repetitions, '1');
        app.start_run();

        app.on_deadline();
        assert_eq!(app.app_state.surface, SurfaceFill::White);

        app.on_deadline();
        assert_eq!(app.app_state.surface, SurfaceFill::Default);
        assert!(app.deadline.is_none());
        assert_eq!(app.app_state.run_status, RunStatus::Finished { total: 1 });
        let notification = app.app_state.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Info);
    }
}
