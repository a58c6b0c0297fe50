use crate::focus::FocusTarget;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
    pub help_key: String,
    pub help_desc: String,
}

impl Binding {
    pub fn new(
        help_key: impl Into<String>,
        help_desc: impl Into<String>,
        keys: Vec<KeyEvent>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            help_desc: help_desc.into(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.iter().any(|k| key_event_matches(k, event))
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && pattern.modifiers == event.modifiers
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key_ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c)).with_modifiers(KeyModifiers {
        shift: false,
        ctrl: true,
        alt: false,
    })
}

pub fn key_shift(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code).with_modifiers(KeyModifiers {
        shift: true,
        ctrl: false,
        alt: false,
    })
}

/// Key bindings of the to-do widget. Text editing keys inside the field are not remappable.
#[derive(Clone, Debug)]
pub struct TodoKeymap {
    pub submit: Binding,
    pub activate: Binding,
    pub next_focus: Binding,
    pub prev_focus: Binding,
    pub back_to_input: Binding,
    pub cursor_up: Binding,
    pub cursor_down: Binding,
    pub edit: Binding,
    pub delete: Binding,
}

impl Default for TodoKeymap {
    fn default() -> Self {
        Self {
            submit: Binding::new("enter", "add/update", vec![key(KeyCode::Enter)]),
            activate: Binding::new(
                "enter/space",
                "press",
                vec![key(KeyCode::Enter), key_char(' ')],
            ),
            next_focus: Binding::new("tab", "next", vec![key(KeyCode::Tab)]),
            // Terminals report shift+tab as BackTab, usually with shift set.
            prev_focus: Binding::new(
                "shift+tab",
                "prev",
                vec![key(KeyCode::BackTab), key_shift(KeyCode::BackTab)],
            ),
            back_to_input: Binding::new("esc", "input", vec![key(KeyCode::Esc)]),
            cursor_up: Binding::new("↑/k", "up", vec![key(KeyCode::Up), key_char('k')]),
            cursor_down: Binding::new("↓/j", "down", vec![key(KeyCode::Down), key_char('j')]),
            edit: Binding::new("e/enter", "edit", vec![key_char('e'), key(KeyCode::Enter)]),
            delete: Binding::new("d/del", "delete", vec![key_char('d'), key(KeyCode::Delete)]),
        }
    }
}

impl TodoKeymap {
    /// Bindings worth advertising while `focus` is active.
    pub fn help_for(&self, focus: FocusTarget) -> Vec<Binding> {
        match focus {
            FocusTarget::Input => vec![self.submit.clone(), self.next_focus.clone()],
            FocusTarget::AddButton | FocusTarget::ResetButton => vec![
                self.activate.clone(),
                self.next_focus.clone(),
                self.back_to_input.clone(),
            ],
            FocusTarget::List => vec![
                self.cursor_up.clone(),
                self.cursor_down.clone(),
                self.edit.clone(),
                self.delete.clone(),
                self.back_to_input.clone(),
            ],
        }
    }
}
