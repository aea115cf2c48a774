//! Keyboard shortcuts.
//!
//! Only two actions are bound, each under both the Ctrl and the Cmd/Super
//! modifier so the same chords work on every desktop platform.

use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win/Super elsewhere
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Meta (Cmd/Win) modifier.
    pub const META: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            #[cfg(target_os = "macos")]
            parts.push("Cmd");
            #[cfg(not(target_os = "macos"))]
            parts.push("Super");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Something a shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Save,
    Load,
}

/// A modifier set plus a character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub modifiers: Modifiers,
    pub key: char,
}

impl KeyBinding {
    /// Creates a binding. Letter keys are stored lowercase.
    pub fn new(modifiers: Modifiers, key: char) -> Self {
        Self {
            modifiers,
            key: key.to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key.to_ascii_uppercase())
        } else {
            write!(f, "{}+{}", self.modifiers, self.key.to_ascii_uppercase())
        }
    }
}

/// Maps key chords to actions.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Keymap {
    /// Creates an empty keymap.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds a chord, replacing any previous action for it.
    pub fn bind(&mut self, binding: KeyBinding, action: Action) {
        self.bindings.insert(binding, action);
    }

    /// Looks up the action for a pressed key.
    ///
    /// `key` is the text the keyboard reports for the key; anything that is
    /// not a single character never matches.
    pub fn lookup(&self, modifiers: Modifiers, key: &str) -> Option<Action> {
        let mut chars = key.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        self.bindings.get(&KeyBinding::new(modifiers, c)).copied()
    }

    /// Returns every chord bound to `action`.
    pub fn bindings_for(&self, action: Action) -> Vec<KeyBinding> {
        let mut found: Vec<KeyBinding> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(b, _)| *b)
            .collect();
        found.sort_by_key(|b| (b.modifiers.meta, b.key));
        found
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        for modifiers in [Modifiers::CTRL, Modifiers::META] {
            keymap.bind(KeyBinding::new(modifiers, 's'), Action::Save);
            keymap.bind(KeyBinding::new(modifiers, 'o'), Action::Load);
        }
        keymap
    }
}
