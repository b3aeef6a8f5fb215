//! Live Edit Surface
//!
//! [`EditSurface`] models the text-input element the orchestrator writes
//! to: the buffer value, the selection byte range, a focus request flag,
//! the scroll offset, and registered change listeners.
//!
//! The listener path is the load-bearing part. Hosts observe edits
//! through [`EditSurface::subscribe`]; both user keystrokes
//! ([`EditSurface::commit_user_edit`]) and command-driven edits
//! ([`EditSurface::apply_edit`]) funnel through the same notification, so
//! a listener cannot distinguish a programmatic mutation from typing.
//! Simply overwriting the value field would skip listeners entirely,
//! the same trap as assigning to a DOM input's `value`.
//!
//! The surface is single-threaded by construction (`Rc` + `RefCell`);
//! all mutation happens inside the UI event that triggered it. Listeners
//! must not dispatch commands back into the surface synchronously;
//! command composition is unsupported.

use std::cell::RefCell;

use log::debug;

use crate::commands::transform::EditOutcome;
use crate::editor::selection::SelectionState;
use crate::string_utils::{ceil_char_boundary, floor_char_boundary};

/// Callback invoked with the new buffer contents after every edit.
pub type ChangeListener = Box<dyn FnMut(&str)>;

#[derive(Debug)]
struct SurfaceState {
    value: String,
    selection: (usize, usize),
    focus_requested: bool,
    scroll_offset: f32,
}

/// The single text-input surface commands operate on.
///
/// Owned by the editor shell via `Rc`; the orchestrator holds only a
/// `Weak` back-reference (see `orchestrator.rs`).
pub struct EditSurface {
    state: RefCell<SurfaceState>,
    listeners: RefCell<Vec<ChangeListener>>,
}

impl EditSurface {
    pub fn new(initial: &str) -> Self {
        Self {
            state: RefCell::new(SurfaceState {
                value: initial.to_string(),
                selection: (initial.len(), initial.len()),
                focus_requested: false,
                scroll_offset: 0.0,
            }),
            listeners: RefCell::new(Vec::new()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Current buffer contents.
    pub fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    /// Current selection byte range.
    pub fn selection(&self) -> (usize, usize) {
        self.state.borrow().selection
    }

    /// Fresh selection snapshot for a command invocation. Never cached:
    /// the surface is the single source of truth.
    pub fn selection_state(&self) -> SelectionState {
        let state = self.state.borrow();
        SelectionState::new(&state.value, state.selection.0, state.selection.1)
    }

    #[allow(dead_code)]
    pub fn scroll_offset(&self) -> f32 {
        self.state.borrow().scroll_offset
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a command outcome: replace the value, move the selection,
    /// request focus, and notify listeners. The scroll offset is left
    /// untouched so a full value replacement does not jump the view.
    pub fn apply_edit(&self, outcome: &EditOutcome) {
        {
            let mut state = self.state.borrow_mut();
            state.value = outcome.text.clone();
            state.selection = clamp_selection(&state.value, outcome.selection);
            state.focus_requested = true;
        }
        debug!(
            "applied edit: {} bytes, selection {:?}",
            outcome.text.len(),
            outcome.selection
        );
        self.emit_change();
    }

    /// Record an edit the user typed into the widget. Fires the same
    /// change notification as [`EditSurface::apply_edit`].
    pub fn commit_user_edit(&self, text: &str, selection: (usize, usize)) {
        {
            let mut state = self.state.borrow_mut();
            state.value = text.to_string();
            state.selection = clamp_selection(&state.value, selection);
        }
        self.emit_change();
    }

    /// Track a cursor/selection move that did not change the text. No
    /// change notification.
    pub fn sync_selection(&self, selection: (usize, usize)) {
        let mut state = self.state.borrow_mut();
        state.selection = clamp_selection(&state.value, selection);
    }

    pub fn set_scroll_offset(&self, offset: f32) {
        self.state.borrow_mut().scroll_offset = offset;
    }

    /// Ask the shell to focus the widget on the next frame.
    pub fn request_focus(&self) {
        self.state.borrow_mut().focus_requested = true;
    }

    /// Consume a pending focus request.
    pub fn take_focus_request(&self) -> bool {
        let mut state = self.state.borrow_mut();
        std::mem::take(&mut state.focus_requested)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Change Notification
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a change listener. Listeners fire for every edit, typed
    /// or programmatic, with the new buffer contents.
    pub fn subscribe(&self, listener: impl FnMut(&str) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn emit_change(&self) {
        // The state borrow is released before listeners run, so a
        // listener may read the surface it is observing.
        let value = self.value();
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(&value);
        }
    }
}

/// Clamp a selection range to the buffer, snapping to character
/// boundaries and normalising the order.
fn clamp_selection(text: &str, (start, end): (usize, usize)) -> (usize, usize) {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    (
        floor_char_boundary(text, start.min(text.len())),
        ceil_char_boundary(text, end.min(text.len())),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
