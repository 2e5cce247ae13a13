//! Keybinding registry for the window chrome.
//!
//! Chrome-level keys (close, reopen, minimize, maximize, theme, quit)
//! resolve through scoped bindings; navigation and the selection chord
//! stay raw-key concerns of the cursor engine. The same table drives
//! dispatch and the footer hint line.

use termfolio_surface::input::{Key, KeyEvent};

/// Which window state a binding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowScope {
    Active,
    Minimized,
    Closed,
}

/// Scope a binding is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    Global,
    Window(WindowScope),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub token: KeyToken,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyChord {
    #[must_use]
    pub const fn plain(token: KeyToken) -> Self {
        Self {
            token,
            shift: false,
            ctrl: false,
            alt: false,
        }
    }

    #[must_use]
    pub const fn ctrl_char(ch: char) -> Self {
        Self {
            token: KeyToken::Char(ch),
            shift: false,
            ctrl: true,
            alt: false,
        }
    }

    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        Self {
            token: match event.key {
                Key::Char(ch) => KeyToken::Char(ch),
                Key::Enter => KeyToken::Enter,
                Key::Escape => KeyToken::Escape,
                Key::Tab => KeyToken::Tab,
                Key::Backspace => KeyToken::Backspace,
                Key::Up => KeyToken::Up,
                Key::Down => KeyToken::Down,
                Key::Left => KeyToken::Left,
                Key::Right => KeyToken::Right,
            },
            shift: event.modifiers.shift,
            ctrl: event.modifiers.ctrl,
            alt: event.modifiers.alt,
        }
    }

    #[must_use]
    pub fn display(self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_owned());
        }
        if self.alt {
            parts.push("Alt".to_owned());
        }
        if self.shift {
            parts.push("Shift".to_owned());
        }
        let key = match self.token {
            KeyToken::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyToken::Enter => "Enter".to_owned(),
            KeyToken::Escape => "Esc".to_owned(),
            KeyToken::Tab => "Tab".to_owned(),
            KeyToken::Backspace => "Backspace".to_owned(),
            KeyToken::Up => "Up".to_owned(),
            KeyToken::Down => "Down".to_owned(),
            KeyToken::Left => "Left".to_owned(),
            KeyToken::Right => "Right".to_owned(),
        };
        parts.push(key);
        parts.join("+")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    CloseWindow,
    ReopenWindow,
    ToggleMinimize,
    ToggleMaximize,
    CycleTheme,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub scope: KeyScope,
    pub chord: KeyChord,
    pub command: KeyCommand,
    pub description: &'static str,
}

/// A (scope, chord) pair bound to more than one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConflict {
    pub scope: KeyScope,
    pub chord: KeyChord,
    pub commands: Vec<KeyCommand>,
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    /// The default chrome binding table.
    #[must_use]
    pub fn with_default_bindings() -> Self {
        let mut bindings = Vec::new();
        let mut bind =
            |scope: KeyScope, chord: KeyChord, command: KeyCommand, description: &'static str| {
                bindings.push(KeyBinding {
                    scope,
                    chord,
                    command,
                    description,
                });
            };

        for window in [WindowScope::Active, WindowScope::Minimized] {
            bind(
                KeyScope::Window(window),
                KeyChord::plain(KeyToken::Escape),
                KeyCommand::CloseWindow,
                "close window",
            );
            bind(
                KeyScope::Window(window),
                KeyChord::plain(KeyToken::Char('m')),
                KeyCommand::ToggleMinimize,
                "minimize",
            );
        }
        bind(
            KeyScope::Window(WindowScope::Active),
            KeyChord::plain(KeyToken::Char('f')),
            KeyCommand::ToggleMaximize,
            "maximize",
        );
        bind(
            KeyScope::Window(WindowScope::Active),
            KeyChord {
                token: KeyToken::Char('F'),
                shift: true,
                ctrl: false,
                alt: false,
            },
            KeyCommand::ToggleMaximize,
            "maximize",
        );
        bind(
            KeyScope::Window(WindowScope::Closed),
            KeyChord::plain(KeyToken::Char('o')),
            KeyCommand::ReopenWindow,
            "reopen window",
        );
        bind(
            KeyScope::Window(WindowScope::Closed),
            KeyChord::plain(KeyToken::Char('q')),
            KeyCommand::Quit,
            "quit",
        );
        bind(
            KeyScope::Global,
            KeyChord::ctrl_char('t'),
            KeyCommand::CycleTheme,
            "cycle theme",
        );

        Self { bindings }
    }

    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Resolve a chord: the window scope wins over global bindings.
    #[must_use]
    pub fn resolve(&self, window: WindowScope, chord: KeyChord) -> Option<KeyCommand> {
        self.bindings
            .iter()
            .find(|binding| binding.scope == KeyScope::Window(window) && binding.chord == chord)
            .or_else(|| {
                self.bindings
                    .iter()
                    .find(|binding| binding.scope == KeyScope::Global && binding.chord == chord)
            })
            .map(|binding| binding.command)
    }

    /// Hint entries for the footer line, scoped to the window state.
    #[must_use]
    pub fn hints(&self, window: WindowScope) -> Vec<(String, &'static str)> {
        let mut seen = Vec::new();
        let mut hints = Vec::new();
        for binding in &self.bindings {
            let in_scope = binding.scope == KeyScope::Window(window)
                || binding.scope == KeyScope::Global;
            if !in_scope || seen.contains(&binding.command) {
                continue;
            }
            seen.push(binding.command);
            hints.push((binding.chord.display(), binding.description));
        }
        hints
    }

    /// (scope, chord) pairs registered to more than one command.
    #[must_use]
    pub fn conflicts(&self) -> Vec<KeyConflict> {
        let mut conflicts = Vec::new();
        for (index, binding) in self.bindings.iter().enumerate() {
            if self.bindings[..index]
                .iter()
                .any(|prior| prior.scope == binding.scope && prior.chord == binding.chord)
            {
                continue;
            }
            let commands: Vec<KeyCommand> = self
                .bindings
                .iter()
                .filter(|other| other.scope == binding.scope && other.chord == binding.chord)
                .map(|other| other.command)
                .collect();
            if commands.len() > 1 {
                conflicts.push(KeyConflict {
                    scope: binding.scope,
                    chord: binding.chord,
                    commands,
                });
            }
        }
        conflicts
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_surface::input::Modifiers;

    #[test]
    fn default_bindings_have_no_conflicts() {
        let keymap = Keymap::with_default_bindings();
        assert!(keymap.conflicts().is_empty());
        assert_eq!(keymap.bindings().len(), 9);
    }

    #[test]
    fn escape_resolves_to_close_in_active_and_minimized_scopes() {
        let keymap = Keymap::with_default_bindings();
        let escape = KeyChord::plain(KeyToken::Escape);
        assert_eq!(
            keymap.resolve(WindowScope::Active, escape),
            Some(KeyCommand::CloseWindow)
        );
        assert_eq!(
            keymap.resolve(WindowScope::Minimized, escape),
            Some(KeyCommand::CloseWindow)
        );
        assert_eq!(keymap.resolve(WindowScope::Closed, escape), None);
    }

    #[test]
    fn maximize_binds_both_cases() {
        let keymap = Keymap::with_default_bindings();
        assert_eq!(
            keymap.resolve(WindowScope::Active, KeyChord::plain(KeyToken::Char('f'))),
            Some(KeyCommand::ToggleMaximize)
        );
        let shifted = KeyChord {
            token: KeyToken::Char('F'),
            shift: true,
            ctrl: false,
            alt: false,
        };
        assert_eq!(
            keymap.resolve(WindowScope::Active, shifted),
            Some(KeyCommand::ToggleMaximize)
        );
    }

    #[test]
    fn global_bindings_resolve_in_every_scope() {
        let keymap = Keymap::with_default_bindings();
        let chord = KeyChord::ctrl_char('t');
        for scope in [
            WindowScope::Active,
            WindowScope::Minimized,
            WindowScope::Closed,
        ] {
            assert_eq!(keymap.resolve(scope, chord), Some(KeyCommand::CycleTheme));
        }
    }

    #[test]
    fn chord_from_event_keeps_modifiers() {
        let chord = KeyChord::from_event(KeyEvent {
            key: Key::Char('t'),
            modifiers: Modifiers {
                shift: false,
                ctrl: true,
                alt: false,
            },
        });
        assert_eq!(chord, KeyChord::ctrl_char('t'));
    }

    #[test]
    fn chord_display_is_stable() {
        assert_eq!(KeyChord::ctrl_char('t').display(), "Ctrl+T");
        assert_eq!(KeyChord::plain(KeyToken::Escape).display(), "Esc");
        let shifted = KeyChord {
            token: KeyToken::Char('F'),
            shift: true,
            ctrl: false,
            alt: false,
        };
        assert_eq!(shifted.display(), "Shift+F");
    }

    #[test]
    fn hints_deduplicate_commands() {
        let keymap = Keymap::with_default_bindings();
        let hints = keymap.hints(WindowScope::Active);
        let maximize_hints = hints
            .iter()
            .filter(|(_, description)| *description == "maximize")
            .count();
        assert_eq!(maximize_hints, 1);
        assert!(hints.iter().any(|(_, d)| *d == "close window"));
        assert!(hints.iter().any(|(_, d)| *d == "cycle theme"));
    }
}
