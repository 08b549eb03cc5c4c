//! Keyboard shortcut dispatch for the interactive client.
//!
//! One binding at a time: registering a new action for a hotkey replaces
//! the previous one, and `unbind` tears it down so a dismissed screen
//! leaves nothing listening. The action reads the current selection from
//! the shared [`SelectionCell`] at the moment the key fires, never a
//! snapshot captured at registration time.

use tracing::debug;

use crate::domain::selection::{Selection, SelectionCell};

/// Modifier key portion of a hotkey combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Cmd on macOS, Ctrl elsewhere.
    Primary,
    None,
}

impl Modifier {
    /// Platform-appropriate display name for the primary modifier.
    pub fn primary_name() -> &'static str {
        if cfg!(target_os = "macos") { "cmd" } else { "ctrl" }
    }
}

/// Non-modifier key portion of a hotkey combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Esc,
    Char(char),
    Other,
}

/// A modifier + key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: KeyPress,
}

impl Hotkey {
    /// The default submit shortcut: primary modifier + Enter.
    pub fn generate_default() -> Self {
        Self {
            modifier: Modifier::Primary,
            key: KeyPress::Enter,
        }
    }

    /// Human-readable form, e.g. `ctrl+enter`.
    pub fn display(&self) -> String {
        let key = match self.key {
            KeyPress::Enter => "enter".to_string(),
            KeyPress::Esc => "esc".to_string(),
            KeyPress::Char(c) => c.to_string(),
            KeyPress::Other => "?".to_string(),
        };
        match self.modifier {
            Modifier::Primary => format!("{}+{key}", Modifier::primary_name()),
            Modifier::None => key,
        }
    }
}

struct Binding {
    hotkey: Hotkey,
    action: Box<dyn FnMut(Selection) + Send>,
}

/// Routes key presses to the single registered action.
pub struct HotkeyDispatcher {
    cell: SelectionCell,
    binding: Option<Binding>,
}

impl HotkeyDispatcher {
    pub fn new(cell: SelectionCell) -> Self {
        Self {
            cell,
            binding: None,
        }
    }

    /// Register `action` for `hotkey`, replacing any previous binding.
    pub fn bind<F>(&mut self, hotkey: Hotkey, action: F)
    where
        F: FnMut(Selection) + Send + 'static,
    {
        debug!(hotkey = %hotkey.display(), "hotkey bound");
        self.binding = Some(Binding {
            hotkey,
            action: Box::new(action),
        });
    }

    /// Remove the current binding, if any.
    pub fn unbind(&mut self) {
        if self.binding.take().is_some() {
            debug!("hotkey unbound");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Feed one key press; returns `true` if it matched the binding and the
    /// action ran. The action receives the selection as it is *now*.
    pub fn dispatch(&mut self, pressed: &Hotkey) -> bool {
        let Some(binding) = self.binding.as_mut() else {
            return false;
        };
        if binding.hotkey != *pressed {
            return false;
        }
        let current = self.cell.get();
        (binding.action)(current);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::compatibility::CompatibilityMatrix;
    use crate::domain::selection::SelectionState;

    fn state() -> SelectionState {
        SelectionState::new(CompatibilityMatrix::fallback())
    }

    #[test]
    fn dispatch_reads_current_selection_not_a_snapshot() {
        let mut state = state();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut dispatcher = HotkeyDispatcher::new(state.cell());
        dispatcher.bind(Hotkey::generate_default(), move |selection| {
            sink.lock().unwrap().push(selection.name.clone());
        });

        state.set_name("first");
        assert!(dispatcher.dispatch(&Hotkey::generate_default()));

        state.set_name("second");
        assert!(dispatcher.dispatch(&Hotkey::generate_default()));

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn non_matching_key_is_ignored() {
        let state = state();
        let mut dispatcher = HotkeyDispatcher::new(state.cell());
        dispatcher.bind(Hotkey::generate_default(), |_| {});

        let other = Hotkey {
            modifier: Modifier::None,
            key: KeyPress::Char('g'),
        };
        assert!(!dispatcher.dispatch(&other));
    }

    #[test]
    fn rebinding_replaces_the_previous_action() {
        let state = state();
        let hits = Arc::new(Mutex::new((0u32, 0u32)));

        let mut dispatcher = HotkeyDispatcher::new(state.cell());
        let first = Arc::clone(&hits);
        dispatcher.bind(Hotkey::generate_default(), move |_| {
            first.lock().unwrap().0 += 1;
        });
        let second = Arc::clone(&hits);
        dispatcher.bind(Hotkey::generate_default(), move |_| {
            second.lock().unwrap().1 += 1;
        });

        dispatcher.dispatch(&Hotkey::generate_default());
        assert_eq!(*hits.lock().unwrap(), (0, 1));
    }

    #[test]
    fn unbind_stops_dispatch() {
        let state = state();
        let mut dispatcher = HotkeyDispatcher::new(state.cell());
        dispatcher.bind(Hotkey::generate_default(), |_| {});
        assert!(dispatcher.is_bound());

        dispatcher.unbind();
        assert!(!dispatcher.is_bound());
        assert!(!dispatcher.dispatch(&Hotkey::generate_default()));
    }

    #[test]
    fn default_hotkey_display_names_platform_modifier() {
        let display = Hotkey::generate_default().display();
        assert!(display.ends_with("+enter"));
    }
}
