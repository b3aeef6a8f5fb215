//! Keyboard Chords
//!
//! A chord is a key identifier plus a set of modifier expectations,
//! matched structurally against a live key event. A modifier left as
//! `None` is "don't care": the chord matches whether or not that modifier
//! is held. A modifier set to `Some(x)` must match the event exactly.
//!
//! Built-in command shortcuts use [`KeyChord::primary`], which accepts
//! either Ctrl or the platform Command key, the way cross-platform
//! editors bind their accelerators.

// Allow dead code - the chord builder covers all four modifiers even
// though the built-in registry only pins a subset
#![allow(dead_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Key Event
// ─────────────────────────────────────────────────────────────────────────────

/// A single key press with its live modifier state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Lowercased key name ("b", "tab", "enter", ...).
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyEvent {
    /// Build an event from a key name, lowercasing it so chord matching
    /// is case-insensitive.
    pub fn new(key: &str, ctrl: bool, meta: bool, shift: bool, alt: bool) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            ctrl,
            meta,
            shift,
            alt,
        }
    }

    /// A bare key press with no modifiers held.
    pub fn plain(key: &str) -> Self {
        Self::new(key, false, false, false, false)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Key Chord
// ─────────────────────────────────────────────────────────────────────────────

/// A shortcut pattern. `None` modifiers are wildcards, `Some` modifiers
/// must match the event exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    /// Lowercased key name this chord triggers on.
    pub key: String,
    pub ctrl: Option<bool>,
    pub meta: Option<bool>,
    pub shift: Option<bool>,
    pub alt: Option<bool>,
    /// Require Ctrl *or* the platform Command key. When set, `ctrl` and
    /// `meta` act as "either satisfies" rather than exact expectations.
    pub primary: bool,
}

impl KeyChord {
    /// A chord matching the bare key with every modifier a wildcard.
    pub fn bare(key: &str) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            ctrl: None,
            meta: None,
            shift: None,
            alt: None,
            primary: false,
        }
    }

    /// Ctrl-or-Cmd + key, the accelerator form every built-in uses.
    pub fn primary(key: &str) -> Self {
        Self {
            primary: true,
            ..Self::bare(key)
        }
    }

    /// Pin a modifier to an exact expectation.
    pub fn with_ctrl(mut self, down: bool) -> Self {
        self.ctrl = Some(down);
        self
    }

    pub fn with_meta(mut self, down: bool) -> Self {
        self.meta = Some(down);
        self
    }

    pub fn with_shift(mut self, down: bool) -> Self {
        self.shift = Some(down);
        self
    }

    pub fn with_alt(mut self, down: bool) -> Self {
        self.alt = Some(down);
        self
    }

    /// Structural match against a live event.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.key {
            return false;
        }
        if self.primary && !(event.ctrl || event.meta) {
            return false;
        }
        if !self.primary {
            if self.ctrl.is_some_and(|want| want != event.ctrl) {
                return false;
            }
            if self.meta.is_some_and(|want| want != event.meta) {
                return false;
            }
        }
        if self.shift.is_some_and(|want| want != event.shift) {
            return false;
        }
        if self.alt.is_some_and(|want| want != event.alt) {
            return false;
        }
        true
    }

    /// Human-readable label for tooltips ("Ctrl+B" style).
    pub fn label(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if self.primary {
            parts.push("Ctrl");
        } else {
            if self.ctrl == Some(true) {
                parts.push("Ctrl");
            }
            if self.meta == Some(true) {
                parts.push("Cmd");
            }
        }
        if self.shift == Some(true) {
            parts.push("Shift");
        }
        if self.alt == Some(true) {
            parts.push("Alt");
        }
        let mut key = self.key.clone();
        if let Some(first) = key.get(..1) {
            let upper = first.to_ascii_uppercase();
            key.replace_range(..1, &upper);
        }
        if parts.is_empty() {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_modifier_must_match() {
        let chord = KeyChord::bare("b").with_meta(true);
        assert!(chord.matches(&KeyEvent::new("b", false, true, false, false)));
        assert!(!chord.matches(&KeyEvent::new("b", false, false, false, false)));
    }

    #[test]
    fn test_unpinned_modifier_is_wildcard() {
        let chord = KeyChord::bare("b").with_meta(true);
        // Shift is unspecified, so it matches either way.
        assert!(chord.matches(&KeyEvent::new("b", false, true, true, false)));
    }

    #[test]
    fn test_key_mismatch() {
        let chord = KeyChord::primary("b");
        assert!(!chord.matches(&KeyEvent::new("i", true, false, false, false)));
    }

    #[test]
    fn test_primary_accepts_ctrl_or_cmd() {
        let chord = KeyChord::primary("k");
        assert!(chord.matches(&KeyEvent::new("k", true, false, false, false)));
        assert!(chord.matches(&KeyEvent::new("k", false, true, false, false)));
        assert!(!chord.matches(&KeyEvent::new("k", false, false, false, false)));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let chord = KeyChord::primary("b");
        assert!(chord.matches(&KeyEvent::new("B", true, false, false, false)));
    }

    #[test]
    fn test_pinned_false_rejects_held_modifier() {
        let chord = KeyChord::bare("tab").with_shift(false);
        assert!(chord.matches(&KeyEvent::plain("tab")));
        assert!(!chord.matches(&KeyEvent::new("tab", false, false, true, false)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(KeyChord::primary("b").label(), "Ctrl+B");
        assert_eq!(
            KeyChord::primary("s").with_shift(true).label(),
            "Ctrl+Shift+S"
        );
        assert_eq!(KeyChord::bare("tab").label(), "Tab");
    }
}
