//! Command Model
//!
//! A [`Command`] is a named, optionally keyboard-triggerable buffer
//! transformation, possibly grouped with sibling commands for toolbar
//! presentation. Commands are immutable value objects; the registry
//! returned by [`default_commands`] is freshly allocated on every call so
//! a host may append or remove entries without affecting later calls.
//!
//! The kind is a tagged variant: a leaf carries exactly one [`EditRule`]
//! and a group carries only children, so a "leaf with children" or a
//! "group that executes" cannot be constructed.

pub mod chord;
pub mod transform;

use chord::KeyChord;
use transform::EditRule;

// ─────────────────────────────────────────────────────────────────────────────
// Command
// ─────────────────────────────────────────────────────────────────────────────

/// What invoking a command does: execute an edit rule, or nothing; a
/// group exists purely to structure the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// An executable command with its transformation rule.
    Leaf(EditRule),
    /// A presentation group with an ordered list of child commands.
    Group(Vec<Command>),
}

/// A toolbar/shortcut command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Unique identifier ("bold", "h1", ...).
    pub name: String,
    /// Display name for tooltips and menus.
    pub label: String,
    /// Toolbar glyph.
    pub icon: String,
    /// Optional shortcut chord.
    pub chord: Option<KeyChord>,
    pub kind: CommandKind,
}

impl Command {
    /// Construct an executable leaf command.
    pub fn leaf(name: &str, label: &str, icon: &str, chord: Option<KeyChord>, rule: EditRule) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            chord,
            kind: CommandKind::Leaf(rule),
        }
    }

    /// Construct a presentation group.
    pub fn group(name: &str, label: &str, icon: &str, children: Vec<Command>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            chord: None,
            kind: CommandKind::Group(children),
        }
    }

    /// The edit rule, if this is a leaf.
    pub fn rule(&self) -> Option<&EditRule> {
        match &self.kind {
            CommandKind::Leaf(rule) => Some(rule),
            CommandKind::Group(_) => None,
        }
    }

    #[allow(dead_code)]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, CommandKind::Group(_))
    }

    /// Tooltip text: label plus the shortcut when one is bound.
    pub fn tooltip(&self) -> String {
        match &self.chord {
            Some(chord) => format!("{} ({})", self.label, chord.label()),
            None => self.label.clone(),
        }
    }
}

/// Leaves in registry order, with groups contributing their children in
/// place. This is the scan order the hotkey dispatcher uses.
pub fn flatten(commands: &[Command]) -> Vec<&Command> {
    let mut out = Vec::new();
    for command in commands {
        match &command.kind {
            CommandKind::Leaf(_) => out.push(command),
            CommandKind::Group(children) => out.extend(flatten(children)),
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Default Registry
// ─────────────────────────────────────────────────────────────────────────────

/// The built-in command registry, freshly allocated per call.
pub fn default_commands() -> Vec<Command> {
    let headings = (1..=6)
        .map(|level| {
            Command::leaf(
                &format!("h{}", level),
                &format!("Heading {}", level),
                &format!("H{}", level),
                None,
                EditRule::line_prefix(&format!("{} ", "#".repeat(level))),
            )
        })
        .collect();

    vec![
        Command::leaf(
            "bold",
            "Bold",
            "𝐁",
            Some(KeyChord::primary("b")),
            EditRule::surround("**"),
        ),
        Command::leaf(
            "italic",
            "Italic",
            "𝐼",
            Some(KeyChord::primary("i")),
            EditRule::surround("_"),
        ),
        Command::leaf(
            "code",
            "Inline Code",
            "</>",
            Some(KeyChord::primary("j")),
            EditRule::surround("`"),
        ),
        Command::leaf(
            "link",
            "Insert Link",
            "🔗",
            Some(KeyChord::primary("k")),
            EditRule::wrap("[", "](url)"),
        ),
        Command::leaf(
            "quote",
            "Blockquote",
            "\u{275D}",
            Some(KeyChord::primary("q")),
            EditRule::line_prefix("> "),
        ),
        Command::leaf(
            "list",
            "Bullet List",
            "\u{2022}",
            Some(KeyChord::primary("l")),
            EditRule::line_prefix("- "),
        ),
        Command::group("title", "Heading", "H", headings),
        Command::leaf(
            "hr",
            "Horizontal Rule",
            "―",
            None,
            EditRule::wrap("\n\n---\n", ""),
        ),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use super::chord::KeyEvent;

    #[test]
    fn test_registry_is_fresh_per_call() {
        let mut first = default_commands();
        first.clear();
        let second = default_commands();
        assert!(!second.is_empty());
    }

    #[test]
    fn test_registry_names_are_unique() {
        let registry = default_commands();
        let flat = flatten(&registry);
        let mut names: Vec<&str> = flat.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_registry_has_no_duplicate_chords() {
        // Duplicate chords are a configuration error caught here, never
        // at dispatch time: first match in registry order wins.
        let registry = default_commands();
        let flat = flatten(&registry);
        let chords: Vec<&KeyChord> = flat.iter().filter_map(|c| c.chord.as_ref()).collect();
        for (i, a) in chords.iter().enumerate() {
            for b in &chords[i + 1..] {
                assert_ne!(a, b, "duplicate chord in default registry");
            }
        }
    }

    #[test]
    fn test_group_carries_no_rule() {
        let registry = default_commands();
        let title = registry.iter().find(|c| c.name == "title").unwrap();
        assert!(title.is_group());
        assert!(title.rule().is_none());
        match &title.kind {
            CommandKind::Group(children) => {
                assert_eq!(children.len(), 6);
                assert!(children.iter().all(|c| c.rule().is_some()));
            }
            CommandKind::Leaf(_) => unreachable!(),
        }
    }

    #[test]
    fn test_flatten_expands_groups_in_order() {
        let registry = default_commands();
        let flat = flatten(&registry);
        let names: Vec<&str> = flat.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "bold", "italic", "code", "link", "quote", "list", "h1", "h2", "h3", "h4", "h5",
                "h6", "hr"
            ]
        );
    }

    #[test]
    fn test_bold_chord_matches_its_event() {
        let registry = default_commands();
        let bold = registry.iter().find(|c| c.name == "bold").unwrap();
        let chord = bold.chord.as_ref().unwrap();
        assert!(chord.matches(&KeyEvent::new("b", true, false, false, false)));
        assert!(!chord.matches(&KeyEvent::plain("b")));
    }

    #[test]
    fn test_tooltip_includes_shortcut() {
        let registry = default_commands();
        let bold = registry.iter().find(|c| c.name == "bold").unwrap();
        assert_eq!(bold.tooltip(), "Bold (Ctrl+B)");
        let hr = registry.iter().find(|c| c.name == "hr").unwrap();
        assert_eq!(hr.tooltip(), "Horizontal Rule");
    }

    #[test]
    fn test_heading_rules_scale_with_level() {
        let registry = default_commands();
        let flat = flatten(&registry);
        let h3 = flat.iter().find(|c| c.name == "h3").unwrap();
        assert_eq!(h3.rule(), Some(&EditRule::line_prefix("### ")));
    }
}
