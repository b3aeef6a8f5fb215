//! Command Orchestrator
//!
//! Bridges "a command was invoked" (toolbar click or hotkey) to a buffer
//! mutation on the live surface: read the selection fresh, run the
//! command's transformation, write the result back, and let the surface
//! fire its change notification so hosts observe the edit exactly like a
//! keystroke.
//!
//! The orchestrator holds a *non-owning* handle to the surface. The
//! shell owns the surface's lifetime; once it drops the `Rc` (the widget
//! unmounted), every call here becomes a silent no-op; the shell is
//! responsible for constructing a new orchestrator when the widget
//! remounts.

use std::rc::{Rc, Weak};

use log::debug;

use crate::commands::transform::{self, EditOutcome};
use crate::commands::Command;
use crate::editor::selection::SelectionState;
use crate::editor::surface::EditSurface;

/// Executes commands against one live [`EditSurface`].
pub struct CommandOrchestrator {
    surface: Weak<EditSurface>,
}

impl CommandOrchestrator {
    /// Bind to a live surface. Only a weak back-reference is kept.
    pub fn new(surface: &Rc<EditSurface>) -> Self {
        Self {
            surface: Rc::downgrade(surface),
        }
    }

    /// Execute a command.
    ///
    /// Two silent no-op cases by design: a group command (nothing to
    /// execute) and a stale surface (widget unmounted between event and
    /// dispatch). Neither is an error surface the user should see.
    pub fn execute(&self, command: &Command) {
        let Some(rule) = command.rule() else {
            debug!("command '{}' is a group, nothing to execute", command.name);
            return;
        };
        debug!("executing command '{}'", command.name);
        self.apply(|state| rule.apply(state));
    }

    /// Tab edit: insert spaces at the cursor or indent the selected lines.
    pub fn indent(&self, tab_size: usize) {
        self.apply(|state| transform::indent(state, tab_size));
    }

    /// Shift+Tab edit: outdent the touched lines.
    pub fn outdent(&self, tab_size: usize) {
        self.apply(|state| transform::outdent(state, tab_size));
    }

    /// Read-transform-write against the surface, or nothing if it is
    /// gone.
    fn apply(&self, transform: impl FnOnce(&SelectionState) -> EditOutcome) {
        let Some(surface) = self.surface.upgrade() else {
            debug!("surface detached, ignoring command");
            return;
        };
        let state = surface.selection_state();
        let outcome = transform(&state);
        surface.apply_edit(&outcome);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::default_commands;
    use std::cell::Cell;

    fn command(name: &str) -> Command {
        crate::commands::flatten(&default_commands())
            .into_iter()
            .find(|c| c.name == name)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_execute_bold_end_to_end() {
        let surface = Rc::new(EditSurface::new("hello world"));
        surface.sync_selection((0, 5));
        let orchestrator = CommandOrchestrator::new(&surface);

        orchestrator.execute(&command("bold"));

        assert_eq!(surface.value(), "**hello** world");
        assert_eq!(surface.selection(), (2, 7));
        assert!(surface.take_focus_request());
    }

    #[test]
    fn test_execute_quote_across_lines() {
        let surface = Rc::new(EditSurface::new("line one\nline two"));
        surface.sync_selection((0, 17));
        let orchestrator = CommandOrchestrator::new(&surface);

        orchestrator.execute(&command("quote"));

        assert_eq!(surface.value(), "> line one\n> line two");
        assert_eq!(surface.selection(), (2, 21));
    }

    #[test]
    fn test_group_command_is_a_noop() {
        let surface = Rc::new(EditSurface::new("text"));
        let orchestrator = CommandOrchestrator::new(&surface);
        let title = default_commands()
            .into_iter()
            .find(|c| c.name == "title")
            .unwrap();

        orchestrator.execute(&title);

        assert_eq!(surface.value(), "text");
        assert!(!surface.take_focus_request());
    }

    #[test]
    fn test_stale_surface_is_a_silent_noop() {
        let surface = Rc::new(EditSurface::new("text"));
        let orchestrator = CommandOrchestrator::new(&surface);
        drop(surface);

        // Must not panic, must not do anything observable.
        orchestrator.execute(&command("bold"));
        orchestrator.indent(2);
        orchestrator.outdent(2);
    }

    #[test]
    fn test_execution_fires_one_change_notification() {
        let surface = Rc::new(EditSurface::new("abc"));
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        surface.subscribe(move |_| sink.set(sink.get() + 1));
        let orchestrator = CommandOrchestrator::new(&surface);

        orchestrator.execute(&command("italic"));

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_indent_and_outdent_round_trip() {
        let surface = Rc::new(EditSurface::new("line"));
        surface.sync_selection((0, 0));
        let orchestrator = CommandOrchestrator::new(&surface);

        orchestrator.indent(2);
        assert_eq!(surface.value(), "  line");
        assert_eq!(surface.selection(), (2, 2));

        orchestrator.outdent(2);
        assert_eq!(surface.value(), "line");
        assert_eq!(surface.selection(), (0, 0));
    }

    #[test]
    fn test_selection_read_fresh_per_invocation() {
        let surface = Rc::new(EditSurface::new("alpha beta"));
        let orchestrator = CommandOrchestrator::new(&surface);

        surface.sync_selection((0, 5));
        orchestrator.execute(&command("bold"));
        assert_eq!(surface.value(), "**alpha** beta");

        // The second invocation sees the post-edit buffer and the moved
        // selection, not any cached snapshot.
        surface.sync_selection((10, 14));
        orchestrator.execute(&command("italic"));
        assert_eq!(surface.value(), "**alpha** _beta_");
    }
}
