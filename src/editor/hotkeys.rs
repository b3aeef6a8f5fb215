//! Hotkey Dispatcher
//!
//! Resolves a single key press against the structural edit keys and the
//! command registry. Terminal in one press: there is no multi-press
//! chord tracking.
//!
//! Resolution order is fixed and deliberate:
//!
//! 1. Structural keys: Tab indents by `tab_size`, Shift+Tab outdents.
//!    These are checked before the registry so a registered chord can
//!    never shadow them.
//! 2. The flattened registry (groups contribute their children) in
//!    registry order; the first matching chord wins. Duplicate chords
//!    are a registry configuration error, not a dispatch concern.
//! 3. No match: the event passes through untouched and the widget's
//!    default key handling applies.
//!
//! The return value says whether the event was consumed, so the shell
//! knows to suppress the default behaviour.

use log::debug;

use crate::commands::chord::KeyEvent;
use crate::commands::{flatten, Command};
use crate::editor::orchestrator::CommandOrchestrator;

/// Default number of spaces a Tab press inserts.
pub const DEFAULT_TAB_SIZE: usize = 2;

/// Dispatcher configuration supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyOptions {
    /// Spaces inserted/removed per Tab / Shift+Tab press.
    pub tab_size: usize,
}

impl Default for HotkeyOptions {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

/// Resolve one key press. Returns `true` when the event was consumed
/// (the shell must suppress the default), `false` to pass it through.
pub fn dispatch(
    event: &KeyEvent,
    registry: &[Command],
    orchestrator: &CommandOrchestrator,
    options: HotkeyOptions,
) -> bool {
    // Structural keys first. Tab with Ctrl/Cmd/Alt held is left alone so
    // window-level bindings (tab switching and the like) keep working.
    if event.key == "tab" && !event.ctrl && !event.meta && !event.alt {
        if event.shift {
            debug!("shift+tab: outdent by {}", options.tab_size);
            orchestrator.outdent(options.tab_size);
        } else {
            debug!("tab: indent by {}", options.tab_size);
            orchestrator.indent(options.tab_size);
        }
        return true;
    }

    for command in flatten(registry) {
        if let Some(chord) = &command.chord {
            if chord.matches(event) {
                debug!("hotkey '{}' -> command '{}'", chord.label(), command.name);
                orchestrator.execute(command);
                return true;
            }
        }
    }

    false
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
