//! Selection State Reader
//!
//! A [`SelectionState`] is a point-in-time snapshot of the edit surface:
//! the full buffer plus the selection byte range. It is read fresh on
//! every command invocation and never cached: the surface is the single
//! source of truth and any cached copy would go stale the moment the user
//! types.
//!
//! Invariant: `0 <= selection_start <= selection_end <= text.len()`, both
//! offsets on UTF-8 character boundaries, and
//! `selected_text == text[selection_start..selection_end]`.

use crate::string_utils::{ceil_char_boundary, floor_char_boundary};

/// Snapshot of the buffer and current selection.
///
/// A collapsed selection (plain cursor) has `selection_start ==
/// selection_end` and an empty `selected_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// The full buffer text.
    pub text: String,
    /// The selected substring (empty when the selection is collapsed).
    pub selected_text: String,
    /// Selection start as a byte offset into `text`.
    pub selection_start: usize,
    /// Selection end as a byte offset into `text`.
    pub selection_end: usize,
}

impl SelectionState {
    /// Build a snapshot from raw offsets.
    ///
    /// Offsets are normalised so the invariant always holds: inverted
    /// ranges are swapped, out-of-range offsets clamp to the buffer
    /// length, and offsets inside a multi-byte character snap to the
    /// surrounding boundaries (start floors, end ceils).
    pub fn new(text: &str, start: usize, end: usize) -> Self {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        let start = floor_char_boundary(text, start.min(text.len()));
        let end = ceil_char_boundary(text, end.min(text.len()));
        Self {
            text: text.to_string(),
            selected_text: text[start..end].to_string(),
            selection_start: start,
            selection_end: end,
        }
    }

    /// Whether the selection is collapsed to a plain cursor.
    pub fn is_collapsed(&self) -> bool {
        self.selection_start == self.selection_end
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_selection() {
        let state = SelectionState::new("hello world", 5, 5);
        assert!(state.is_collapsed());
        assert_eq!(state.selected_text, "");
        assert_eq!(state.selection_start, 5);
        assert_eq!(state.selection_end, 5);
    }

    #[test]
    fn test_selected_substring_matches_range() {
        let state = SelectionState::new("hello world", 0, 5);
        assert_eq!(state.selected_text, "hello");
        assert_eq!(
            state.selected_text,
            state.text[state.selection_start..state.selection_end]
        );
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let state = SelectionState::new("hello world", 5, 0);
        assert_eq!(state.selection_start, 0);
        assert_eq!(state.selection_end, 5);
        assert_eq!(state.selected_text, "hello");
    }

    #[test]
    fn test_out_of_range_offsets_clamp() {
        let state = SelectionState::new("abc", 1, 99);
        assert_eq!(state.selection_end, 3);
        assert_eq!(state.selected_text, "bc");
    }

    #[test]
    fn test_offsets_snap_to_char_boundaries() {
        let text = "på läge"; // 'å' spans bytes 1..3
        let state = SelectionState::new(text, 2, 2);
        assert_eq!(state.selection_start, 1);
        // End ceils past the character, so the snapshot still slices safely.
        let state = SelectionState::new(text, 0, 2);
        assert_eq!(state.selected_text, "på");
    }

    #[test]
    fn test_empty_buffer() {
        let state = SelectionState::new("", 0, 0);
        assert!(state.is_collapsed());
        assert_eq!(state.text, "");
    }
}
