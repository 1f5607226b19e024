//! Bridge between the editable surface in the DOM and the document model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The surface renders `richtext::html::to_html_annotated`, so every block
//! element carries `data-block="N"`. Reading the browser selection walks up to
//! that element and counts characters of the text nodes before the caret;
//! writing it walks the same text nodes forward. DOM offsets are UTF-16 code
//! units, model offsets are chars.
//!
//! Typing never mutates the DOM directly: `beforeinput` is cancelled and
//! translated into a [`BodyEdit`] by [`body_edit_for`].

#[cfg(test)]
#[path = "editor_dom_test.rs"]
mod editor_dom_test;

use crate::state::content_form::BodyEdit;

/// Attribute naming the block index on rendered block elements.
pub const BLOCK_ATTR: &str = "data-block";

/// Translate an `InputEvent.inputType` into a body edit. Unsupported input
/// types (drag-and-drop, history, IME composition) yield `None`.
#[must_use]
pub fn body_edit_for(input_type: &str, data: Option<String>) -> Option<BodyEdit> {
    match input_type {
        "insertText" | "insertReplacementText" | "insertFromPaste" | "insertFromYank" => {
            data.filter(|d| !d.is_empty()).map(BodyEdit::InsertText)
        }
        "insertParagraph" | "insertLineBreak" => Some(BodyEdit::InsertParagraph),
        "deleteContentBackward" | "deleteWordBackward" | "deleteSoftLineBackward" => Some(BodyEdit::DeleteBackward),
        "deleteContentForward" | "deleteWordForward" | "deleteSoftLineForward" | "deleteByCut" => {
            Some(BodyEdit::DeleteForward)
        }
        _ => None,
    }
}

/// Number of chars in the first `units` UTF-16 code units of `text`.
#[must_use]
pub fn utf16_to_char_offset(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (chars, c) in text.chars().enumerate() {
        if seen >= units {
            return chars;
        }
        seen += c.len_utf16();
    }
    text.chars().count()
}

/// UTF-16 length of the first `chars` chars of `text`.
#[must_use]
pub fn char_to_utf16_offset(text: &str, chars: usize) -> usize {
    text.chars().take(chars).map(char::len_utf16).sum()
}

#[cfg(feature = "hydrate")]
pub use dom::{read_selection, write_selection};

#[cfg(feature = "hydrate")]
mod dom {
    use richtext::{Position, Range};
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Node};

    use super::{BLOCK_ATTR, char_to_utf16_offset, utf16_to_char_offset};

    /// Current browser selection inside `surface`, as a model range. `None`
    /// when the selection is elsewhere on the page.
    pub fn read_selection(surface: &Element) -> Option<Range> {
        let selection = web_sys::window()?.get_selection().ok()??;
        let anchor = selection.anchor_node()?;
        let focus = selection.focus_node()?;
        let start = position_of(surface, &anchor, selection.anchor_offset())?;
        let end = position_of(surface, &focus, selection.focus_offset())?;
        Some(Range::new(start, end))
    }

    /// Place the browser selection at `range` inside `surface`.
    pub fn write_selection(surface: &Element, range: Range) {
        let Some(document) = surface.owner_document() else {
            return;
        };
        let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) else {
            return;
        };
        let (Some(start), Some(end)) = (dom_point(surface, range.start()), dom_point(surface, range.end())) else {
            return;
        };
        let Ok(dom_range) = document.create_range() else {
            return;
        };
        if dom_range.set_start(&start.0, start.1).is_err() || dom_range.set_end(&end.0, end.1).is_err() {
            return;
        }
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(&dom_range);
    }

    fn block_element(surface: &Element, node: &Node) -> Option<(Element, usize)> {
        let element = match node.dyn_ref::<Element>() {
            Some(el) => el.clone(),
            None => node.parent_element()?,
        };
        let block = element.closest(&format!("[{BLOCK_ATTR}]")).ok()??;
        if !surface.contains(Some(block.as_ref())) {
            return None;
        }
        let index = block.get_attribute(BLOCK_ATTR)?.parse().ok()?;
        Some((block, index))
    }

    fn position_of(surface: &Element, node: &Node, dom_offset: u32) -> Option<Position> {
        let (block, index) = block_element(surface, node)?;
        let mut chars = 0;
        let mut found = None;
        walk_text(&block, &mut |text_node, text| {
            if found.is_some() {
                return;
            }
            if text_node.is_same_node(Some(node)) {
                found = Some(chars + utf16_to_char_offset(text, dom_offset as usize));
            } else {
                chars += text.chars().count();
            }
        });
        // The caret sits on an element (e.g. an empty block): count the text
        // inside the children before the offset.
        let offset = found.unwrap_or_else(|| {
            if node.is_same_node(Some(block.as_ref())) {
                chars_before_child(&block, dom_offset)
            } else {
                chars
            }
        });
        Some(Position::new(index, offset))
    }

    fn chars_before_child(block: &Element, child_index: u32) -> usize {
        let children = block.child_nodes();
        let mut chars = 0;
        for i in 0..child_index.min(children.length()) {
            if let Some(child) = children.get(i) {
                chars += child.text_content().map_or(0, |t| t.chars().count());
            }
        }
        chars
    }

    fn dom_point(surface: &Element, pos: Position) -> Option<(Node, u32)> {
        let block = surface.query_selector(&format!("[{BLOCK_ATTR}=\"{}\"]", pos.block)).ok()??;
        let mut remaining = pos.offset;
        let mut point = None;
        let mut last_text = None;
        walk_text(&block, &mut |text_node, text| {
            if point.is_some() {
                return;
            }
            let len = text.chars().count();
            if remaining <= len {
                point = Some((text_node.clone(), char_to_utf16_offset(text, remaining)));
            } else {
                remaining -= len;
                last_text = Some((text_node.clone(), text.encode_utf16().count()));
            }
        });
        let (node, units) = match point.or(last_text) {
            Some(p) => p,
            None => (block.unchecked_into::<Node>(), 0),
        };
        Some((node, u32::try_from(units).unwrap_or(u32::MAX)))
    }

    fn walk_text(node: &Node, visit: &mut impl FnMut(&Node, &str)) {
        let children = node.child_nodes();
        for i in 0..children.length() {
            let Some(child) = children.get(i) else {
                continue;
            };
            if child.node_type() == Node::TEXT_NODE {
                let text = child.text_content().unwrap_or_default();
                visit(&child, &text);
            } else {
                walk_text(&child, visit);
            }
        }
    }
}
