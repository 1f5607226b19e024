//! Toolbar commands and the formatting transforms behind them.
//!
//! Inline toggles follow the behaviour editors usually have: if every
//! selected character already carries the attribute it is removed, otherwise
//! it is applied to the whole selection. Inline commands on a collapsed
//! selection leave the document untouched, except [`Command::Link`], which
//! inserts the URL itself as linked text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::doc::{BlockKind, Document, Edit, Range, Run};
use crate::style::{Color, FontSize, LinkTarget, Style};

/// A formatting action requested from the editor toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bold,
    Italic,
    Underline,
    FontSize(FontSize),
    Color(Color),
    BulletList,
    NumberedList,
    Link(LinkTarget),
    ClearFormatting,
}

impl Document {
    /// Apply a toolbar command to `range`.
    #[must_use]
    pub fn apply(&self, command: &Command, range: Range) -> Edit {
        match command {
            Command::Bold => self.toggle_bold(range),
            Command::Italic => self.toggle_italic(range),
            Command::Underline => self.toggle_underline(range),
            Command::FontSize(size) => self.set_font_size(range, *size),
            Command::Color(color) => self.set_color(range, *color),
            Command::BulletList => self.toggle_list(range, BlockKind::BulletItem),
            Command::NumberedList => self.toggle_list(range, BlockKind::NumberedItem),
            Command::Link(target) => self.insert_link(range, target),
            Command::ClearFormatting => self.clear_formatting(range),
        }
    }

    #[must_use]
    pub fn toggle_bold(&self, range: Range) -> Edit {
        self.toggle_inline(range, |s| s.bold, |s, on| s.bold = on)
    }

    #[must_use]
    pub fn toggle_italic(&self, range: Range) -> Edit {
        self.toggle_inline(range, |s| s.italic, |s, on| s.italic = on)
    }

    #[must_use]
    pub fn toggle_underline(&self, range: Range) -> Edit {
        self.toggle_inline(range, |s| s.underline, |s, on| s.underline = on)
    }

    #[must_use]
    pub fn set_font_size(&self, range: Range, size: FontSize) -> Edit {
        self.restyle(range, |s| s.size = Some(size))
    }

    #[must_use]
    pub fn set_color(&self, range: Range, color: Color) -> Edit {
        self.restyle(range, |s| s.color = Some(color))
    }

    /// Strip bold, italic, underline, size and colour. Links are kept.
    #[must_use]
    pub fn clear_formatting(&self, range: Range) -> Edit {
        self.restyle(range, |s| *s = s.without_formatting())
    }

    /// Link the selection to `target`, or insert the URL as linked text when
    /// the selection is collapsed.
    #[must_use]
    pub fn insert_link(&self, range: Range, target: &LinkTarget) -> Edit {
        let range = self.clamp_range(range);
        if !range.is_collapsed() {
            return self.restyle(range, |s| s.link = Some(target.clone()));
        }
        let mut doc = self.clone();
        let caret = range.start();
        let style = Style {
            link: Some(target.clone()),
            ..doc.blocks[caret.block].style_at(caret.offset)
        };
        let end = doc.insert_run(caret, Run::new(target.as_str(), style));
        Edit { document: doc, selection: Range::new(caret, end) }
    }

    /// Turn every block touched by `range` into `kind` list items, or back
    /// into paragraphs when they already all are.
    #[must_use]
    pub fn toggle_list(&self, range: Range, kind: BlockKind) -> Edit {
        let range = self.clamp_range(range);
        let touched = range.start().block..=range.end().block;
        let all_already = self.blocks[touched.clone()].iter().all(|b| b.kind == kind);
        let next = if all_already { BlockKind::Paragraph } else { kind };
        let mut doc = self.clone();
        for block in &mut doc.blocks[touched] {
            block.kind = next;
        }
        Edit { document: doc, selection: range }
    }

    /// Returns `true` when every character in `range` satisfies `pred`.
    /// A collapsed or empty range never qualifies.
    #[must_use]
    pub fn range_has(&self, range: Range, pred: impl Fn(&Style) -> bool) -> bool {
        let segments = self.segments(range);
        !segments.is_empty()
            && segments.iter().all(|&(index, from, to)| {
                self.blocks[index].slice(from, to).iter().all(|run| pred(&run.style))
            })
    }

    fn toggle_inline(&self, range: Range, get: fn(&Style) -> bool, set: fn(&mut Style, bool)) -> Edit {
        let range = self.clamp_range(range);
        if range.is_collapsed() {
            return self.unchanged(range);
        }
        let enable = !self.range_has(range, get);
        self.restyle(range, |s| set(s, enable))
    }

    fn restyle(&self, range: Range, mut f: impl FnMut(&mut Style)) -> Edit {
        let range = self.clamp_range(range);
        let mut doc = self.clone();
        for (index, from, to) in self.segments(range) {
            doc.blocks[index].map_styles(from, to, &mut f);
        }
        Edit { document: doc, selection: range }
    }
}
