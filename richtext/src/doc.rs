//! Document model: blocks of styled runs and caret-addressed text edits.
//!
//! A [`Document`] is an ordered list of [`Block`]s (paragraphs or list items),
//! each holding normalized [`Run`]s of text with one [`Style`] per run.
//! Positions address characters, not bytes, so the editing surface can map DOM
//! selections onto the model without caring about UTF-8 widths.
//!
//! Every edit here is pure: it clones the document, applies the change, and
//! returns the new value together with the selection the UI should show next.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// What a block renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Plain paragraph.
    #[default]
    Paragraph,
    /// Item of an unordered list.
    BulletItem,
    /// Item of an ordered list.
    NumberedItem,
}

impl BlockKind {
    #[must_use]
    pub fn is_list_item(self) -> bool {
        matches!(self, Self::BulletItem | Self::NumberedItem)
    }
}

/// A stretch of text sharing a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

impl Run {
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }

    /// Unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One paragraph or list item.
///
/// Runs are kept normalized: no empty runs and no two neighbours with the
/// same style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBlock")]
pub struct Block {
    pub kind: BlockKind,
    runs: Vec<Run>,
}

/// Wire shape of a block; normalized on the way in.
#[derive(Deserialize)]
struct RawBlock {
    #[serde(default)]
    kind: BlockKind,
    #[serde(default)]
    runs: Vec<Run>,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        Self::new(raw.kind, raw.runs)
    }
}

impl Block {
    #[must_use]
    pub fn new(kind: BlockKind, runs: Vec<Run>) -> Self {
        let mut block = Self { kind, runs: Vec::new() };
        block.set_runs(runs);
        block
    }

    /// Paragraph holding unstyled text.
    #[must_use]
    pub fn paragraph(text: &str) -> Self {
        Self::new(BlockKind::Paragraph, vec![Run::plain(text)])
    }

    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::char_len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs.
    #[must_use]
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub(crate) fn set_runs(&mut self, runs: Vec<Run>) {
        let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
        for run in runs {
            if run.text.is_empty() {
                continue;
            }
            if let Some(last) = merged.last_mut() {
                if last.style == run.style {
                    last.text.push_str(&run.text);
                    continue;
                }
            }
            merged.push(run);
        }
        self.runs = merged;
    }

    /// Runs covering the character range `from..to`, split at the edges.
    pub(crate) fn slice(&self, from: usize, to: usize) -> Vec<Run> {
        let mut out = Vec::new();
        let mut cursor = 0;
        for run in &self.runs {
            let len = run.char_len();
            let start = cursor;
            let end = cursor + len;
            cursor = end;
            if end <= from || start >= to {
                continue;
            }
            let lo = from.saturating_sub(start);
            let hi = (to - start).min(len);
            let text: String = run.text.chars().skip(lo).take(hi - lo).collect();
            out.push(Run::new(text, run.style.clone()));
        }
        out
    }

    /// Style that text typed at `offset` inherits: the character before the
    /// caret, or the first run when the caret sits at the start.
    pub(crate) fn style_at(&self, offset: usize) -> Style {
        if offset == 0 {
            return self.runs.first().map(|r| r.style.clone()).unwrap_or_default();
        }
        let mut cursor = 0;
        for run in &self.runs {
            let end = cursor + run.char_len();
            if offset <= end {
                return run.style.clone();
            }
            cursor = end;
        }
        self.runs.last().map(|r| r.style.clone()).unwrap_or_default()
    }

    /// Rewrite the style of every character in `from..to`.
    pub(crate) fn map_styles(&mut self, from: usize, to: usize, f: &mut impl FnMut(&mut Style)) {
        let len = self.len();
        let mut runs = self.slice(0, from);
        for mut run in self.slice(from, to) {
            f(&mut run.style);
            runs.push(run);
        }
        runs.extend(self.slice(to, len));
        self.set_runs(runs);
    }
}

/// A caret location: block index plus character offset inside that block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub block: usize,
    pub offset: usize,
}

impl Position {
    #[must_use]
    pub const fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// An ordered selection. `start <= end` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    start: Position,
    end: Position,
}

impl Range {
    /// Selection between two positions in either order (anchor/focus).
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b { Self { start: a, end: b } } else { Self { start: b, end: a } }
    }

    /// Collapsed selection.
    #[must_use]
    pub fn caret(at: Position) -> Self {
        Self { start: at, end: at }
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Position {
        self.end
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Result of an edit: the new document and the selection to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub document: Document,
    pub selection: Range,
}

/// A rich-text body. Always holds at least one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Block>", into = "Vec<Block>")]
pub struct Document {
    pub(crate) blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self { blocks: vec![Block::default()] }
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::from_blocks(blocks)
    }
}

impl From<Document> for Vec<Block> {
    fn from(doc: Document) -> Self {
        doc.blocks
    }
}

impl Document {
    /// Empty document with a single empty paragraph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() { Self::default() } else { Self { blocks } }
    }

    /// One unstyled paragraph per line.
    #[must_use]
    pub fn from_plain_text(text: &str) -> Self {
        Self::from_blocks(normalize_newlines(text).split('\n').map(Block::paragraph).collect())
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` when no block holds any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(Block::is_empty)
    }

    /// Block texts joined with newlines.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.blocks.iter().map(Block::text).collect::<Vec<_>>().join("\n")
    }

    #[must_use]
    pub fn end(&self) -> Position {
        let block = self.blocks.len().saturating_sub(1);
        let offset = self.blocks.get(block).map_or(0, Block::len);
        Position { block, offset }
    }

    /// Pull a position back inside the document.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        match self.blocks.get(pos.block) {
            Some(block) => Position { block: pos.block, offset: pos.offset.min(block.len()) },
            None => self.end(),
        }
    }

    #[must_use]
    pub fn clamp_range(&self, range: Range) -> Range {
        Range::new(self.clamp(range.start), self.clamp(range.end))
    }

    /// Same document with the selection clamped; used by no-op edits.
    pub(crate) fn unchanged(&self, range: Range) -> Edit {
        Edit { document: self.clone(), selection: self.clamp_range(range) }
    }

    /// Per-block `(index, from, to)` character spans covered by `range`,
    /// skipping blocks where the span is empty.
    pub(crate) fn segments(&self, range: Range) -> Vec<(usize, usize, usize)> {
        let range = self.clamp_range(range);
        (range.start.block..=range.end.block)
            .filter_map(|index| {
                let block = self.blocks.get(index)?;
                let from = if index == range.start.block { range.start.offset } else { 0 };
                let to = if index == range.end.block { range.end.offset } else { block.len() };
                (from < to).then_some((index, from, to))
            })
            .collect()
    }

    // ── Text edits ──────────────────────────────────────────────

    /// Replace the selection with `text`. Newlines start new blocks of the
    /// same kind.
    #[must_use]
    pub fn insert_text(&self, range: Range, text: &str) -> Edit {
        let mut doc = self.clone();
        let mut caret = doc.remove_range(range);
        for (index, line) in normalize_newlines(text).split('\n').enumerate() {
            if index > 0 {
                caret = doc.split_at(caret);
            }
            if !line.is_empty() {
                let style = doc.blocks[caret.block].style_at(caret.offset);
                caret = doc.insert_run(caret, Run::new(line, style));
            }
        }
        Edit { document: doc, selection: Range::caret(caret) }
    }

    /// Remove the selected text, merging blocks when the range spans several.
    #[must_use]
    pub fn delete(&self, range: Range) -> Edit {
        let mut doc = self.clone();
        let caret = doc.remove_range(range);
        Edit { document: doc, selection: Range::caret(caret) }
    }

    /// Backspace. At the start of a list item the item becomes a paragraph;
    /// at the start of any other block it merges into the previous one.
    #[must_use]
    pub fn delete_backward(&self, range: Range) -> Edit {
        let range = self.clamp_range(range);
        if !range.is_collapsed() {
            return self.delete(range);
        }
        let caret = range.start;
        if caret.offset > 0 {
            return self.delete(Range::new(Position::new(caret.block, caret.offset - 1), caret));
        }
        if self.blocks[caret.block].kind.is_list_item() {
            let mut doc = self.clone();
            doc.blocks[caret.block].kind = BlockKind::Paragraph;
            return Edit { document: doc, selection: range };
        }
        if caret.block == 0 {
            return self.unchanged(range);
        }
        let previous_end = Position::new(caret.block - 1, self.blocks[caret.block - 1].len());
        self.delete(Range::new(previous_end, caret))
    }

    /// Delete key. At the end of a block the next block is merged in.
    #[must_use]
    pub fn delete_forward(&self, range: Range) -> Edit {
        let range = self.clamp_range(range);
        if !range.is_collapsed() {
            return self.delete(range);
        }
        let caret = range.start;
        if caret.offset < self.blocks[caret.block].len() {
            return self.delete(Range::new(caret, Position::new(caret.block, caret.offset + 1)));
        }
        if caret.block + 1 < self.blocks.len() {
            return self.delete(Range::new(caret, Position::new(caret.block + 1, 0)));
        }
        self.unchanged(range)
    }

    /// Enter. Splits the block at the caret; pressing Enter in an empty list
    /// item leaves the list instead.
    #[must_use]
    pub fn split_block(&self, range: Range) -> Edit {
        let mut doc = self.clone();
        let caret = doc.remove_range(range);
        let block = &mut doc.blocks[caret.block];
        if block.kind.is_list_item() && block.is_empty() {
            block.kind = BlockKind::Paragraph;
            return Edit { document: doc, selection: Range::caret(caret) };
        }
        let next = doc.split_at(caret);
        Edit { document: doc, selection: Range::caret(next) }
    }

    // ── In-place helpers (operate on a private clone) ───────────

    pub(crate) fn remove_range(&mut self, range: Range) -> Position {
        let range = self.clamp_range(range);
        let (start, end) = (range.start, range.end);
        if start == end {
            return start;
        }
        if start.block == end.block {
            let block = &mut self.blocks[start.block];
            let len = block.len();
            let mut runs = block.slice(0, start.offset);
            runs.extend(block.slice(end.offset, len));
            block.set_runs(runs);
        } else {
            let tail = {
                let last = &self.blocks[end.block];
                last.slice(end.offset, last.len())
            };
            let first = &mut self.blocks[start.block];
            let mut runs = first.slice(0, start.offset);
            runs.extend(tail);
            first.set_runs(runs);
            self.blocks.drain(start.block + 1..=end.block);
        }
        start
    }

    pub(crate) fn insert_run(&mut self, at: Position, run: Run) -> Position {
        let at = self.clamp(at);
        let inserted = run.char_len();
        let block = &mut self.blocks[at.block];
        let len = block.len();
        let mut runs = block.slice(0, at.offset);
        runs.push(run);
        runs.extend(block.slice(at.offset, len));
        block.set_runs(runs);
        Position::new(at.block, at.offset + inserted)
    }

    fn split_at(&mut self, at: Position) -> Position {
        let at = self.clamp(at);
        let block = &mut self.blocks[at.block];
        let kind = block.kind;
        let len = block.len();
        let tail = block.slice(at.offset, len);
        let head = block.slice(0, at.offset);
        block.set_runs(head);
        self.blocks.insert(at.block + 1, Block::new(kind, tail));
        Position::new(at.block + 1, 0)
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
