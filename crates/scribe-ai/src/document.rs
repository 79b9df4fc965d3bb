//! The editor surface the palette mutates.
//!
//! The real editor's document model is external; [`Document`] captures the
//! handful of operations the palette needs. [`TextDocument`] is a plain-text
//! implementation used by the CLI and tests. All positions are character
//! offsets.

use serde_json::Value;

/// A selection range `[from, to)` in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub from: usize,
    pub to: usize,
}

impl Selection {
    /// Build a range, swapping the ends if given backwards.
    pub fn new(from: usize, to: usize) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    pub fn caret(at: usize) -> Self {
        Self { from: at, to: at }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Zero for a hand-built range whose ends are reversed.
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }
}

/// Structured content inserted into the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Chart { data: Value },
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Chart { .. } => "chart",
        }
    }
}

pub trait Document {
    /// The current selection.
    fn selection(&self) -> Selection;

    fn set_selection(&mut self, selection: Selection);

    /// Replace `range` with `text` as a single edit.
    fn replace_range(&mut self, range: Selection, text: &str);

    /// Insert a structured node in place of the current selection.
    fn insert_node(&mut self, node: Node);

    /// Serialize the current selection to plain text.
    fn selection_text(&self) -> String;

    /// Up to `max_chars` characters immediately before the selection.
    fn preceding_text(&self, max_chars: usize) -> String;

    /// Apply or remove the AI highlight mark on the current selection.
    fn set_highlight(&mut self, on: bool);
}

/// A node anchored at a character offset.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub at: usize,
    pub node: Node,
}

/// In-memory plain-text document.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    text: String,
    selection: Selection,
    nodes: Vec<PlacedNode>,
    highlight: Option<Selection>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, from: usize, to: usize) -> Self {
        self.set_selection(Selection::new(from, to));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn highlight(&self) -> Option<Selection> {
        self.highlight
    }

    /// Number of characters in the document.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Text covered by `range`, clamped to the document.
    pub fn slice(&self, range: Selection) -> String {
        self.text
            .chars()
            .skip(range.from)
            .take(range.len())
            .collect()
    }

    fn clamp(&self, range: Selection) -> Selection {
        let len = self.char_len();
        Selection::new(range.from.min(len), range.to.min(len))
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn splice(&mut self, range: Selection, text: &str) -> Selection {
        let range = self.clamp(range);
        let start = self.byte_offset(range.from);
        let end = self.byte_offset(range.to);
        self.text.replace_range(start..end, text);

        let inserted = text.chars().count();
        for placed in &mut self.nodes {
            if placed.at >= range.to {
                placed.at = placed.at - range.len() + inserted;
            } else if placed.at > range.from {
                placed.at = range.from;
            }
        }
        Selection::new(range.from, range.from + inserted)
    }
}

impl Document for TextDocument {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = self.clamp(selection);
    }

    /// The inserted text becomes the new selection so a follow-up
    /// completion replaces it.
    fn replace_range(&mut self, range: Selection, text: &str) {
        self.selection = self.splice(range, text);
        self.highlight = None;
    }

    fn insert_node(&mut self, node: Node) {
        let at = self.splice(self.selection, "").from;
        self.nodes.push(PlacedNode { at, node });
        self.selection = Selection::caret(at);
        self.highlight = None;
    }

    fn selection_text(&self) -> String {
        self.slice(self.selection)
    }

    fn preceding_text(&self, max_chars: usize) -> String {
        let end = self.selection.from;
        let start = end.saturating_sub(max_chars);
        self.slice(Selection::new(start, end))
    }

    fn set_highlight(&mut self, on: bool) {
        self.highlight = on.then_some(self.selection);
    }
}
