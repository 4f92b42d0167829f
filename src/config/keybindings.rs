use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleHelp,
    CloseWidget,
    Start,
    FocusNext,
    FocusPrev,
    MoveUp,
    MoveDown,
    ToggleColor,
    InputChar(char),
    InputBackspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBindingCategory {
    Application,
    Controls,
}

pub struct Binding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub category: KeyBindingCategory,
    pub help: &'static str,
}

const KEY_BINDINGS: &[Binding] = &[
    Binding {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Quit,
        category: KeyBindingCategory::Application,
        help: "Quit application",
    },
    Binding {
        code: KeyCode::Char('?'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::ToggleHelp,
        category: KeyBindingCategory::Application,
        help: "Toggle this help",
    },
    Binding {
        code: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::CloseWidget,
        category: KeyBindingCategory::Application,
        help: "Close help",
    },
    Binding {
        code: KeyCode::Char('s'),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Start,
        category: KeyBindingCategory::Application,
        help: "Start a run",
    },
    Binding {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::Start,
        category: KeyBindingCategory::Application,
        help: "Start a run",
    },
    Binding {
        code: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::FocusNext,
        category: KeyBindingCategory::Controls,
        help: "Focus next control",
    },
    Binding {
        code: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        action: KeyAction::FocusPrev,
        category: KeyBindingCategory::Controls,
        help: "Focus previous control",
    },
    Binding {
        code: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveUp,
        category: KeyBindingCategory::Controls,
        help: "Move up in the palette",
    },
    Binding {
        code: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::MoveDown,
        category: KeyBindingCategory::Controls,
        help: "Move down in the palette",
    },
    Binding {
        code: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        action: KeyAction::ToggleColor,
        category: KeyBindingCategory::Controls,
        help: "Toggle the highlighted color",
    },
    Binding {
        code: KeyCode::Backspace,
        modifiers: KeyModifiers::NONE,
        action: KeyAction::InputBackspace,
        category: KeyBindingCategory::Controls,
        help: "Delete from the focused field",
    },
];

#[derive(Debug, Default)]
pub struct KeyBindings;

impl KeyBindings {
    pub fn lookup_binding(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<&'static Binding> {
        KEY_BINDINGS
            .iter()
            .find(|binding| binding.code == code && binding.modifiers == modifiers)
    }

    #[must_use]
    pub fn bindings(&self) -> &'static [Binding] {
        KEY_BINDINGS
    }
}

#[must_use]
pub fn format_key_for_display(code: KeyCode, modifiers: KeyModifiers) -> String {
    let key = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        other => format!("{other:?}"),
    };

    if modifiers.contains(KeyModifiers::SHIFT) && code != KeyCode::BackTab {
        format!("Shift+{key}")
    } else {
        key
    }
}
