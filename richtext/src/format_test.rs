use super::*;
use crate::doc::{Block, Position};

fn doc_of(lines: &[&str]) -> Document {
    Document::from_blocks(lines.iter().map(|l| Block::paragraph(l)).collect())
}

fn span(a: (usize, usize), b: (usize, usize)) -> Range {
    Range::new(Position::new(a.0, a.1), Position::new(b.0, b.1))
}

fn bold() -> Style {
    Style { bold: true, ..Style::default() }
}

fn link(url: &str) -> LinkTarget {
    LinkTarget::parse(url).unwrap()
}

// =============================================================
// Inline toggles
// =============================================================

#[test]
fn bold_applies_to_selection_only() {
    let edit = doc_of(&["hello world"]).toggle_bold(span((0, 0), (0, 5)));
    assert_eq!(edit.document.blocks()[0].runs(), [Run::new("hello", bold()), Run::plain(" world")]);
    assert_eq!(edit.selection, span((0, 0), (0, 5)));
}

#[test]
fn bold_twice_restores_plain_text() {
    let range = span((0, 0), (0, 5));
    let once = doc_of(&["hello world"]).toggle_bold(range);
    let twice = once.document.toggle_bold(range);
    assert_eq!(twice.document, doc_of(&["hello world"]));
}

#[test]
fn partially_bold_selection_becomes_fully_bold() {
    let doc = Document::from_blocks(vec![Block::new(
        BlockKind::Paragraph,
        vec![Run::new("he", bold()), Run::plain("llo")],
    )]);
    let edit = doc.toggle_bold(span((0, 0), (0, 5)));
    assert_eq!(edit.document.blocks()[0].runs(), [Run::new("hello", bold())]);
}

#[test]
fn toggles_on_collapsed_selection_are_noops() {
    let doc = doc_of(&["hello"]);
    let caret = Range::caret(Position::new(0, 2));
    assert_eq!(doc.toggle_bold(caret).document, doc);
    assert_eq!(doc.toggle_italic(caret).document, doc);
    assert_eq!(doc.toggle_underline(caret).document, doc);
}

#[test]
fn toggle_spans_multiple_blocks() {
    let edit = doc_of(&["ab", "cd"]).toggle_underline(span((0, 1), (1, 1)));
    let underline = Style { underline: true, ..Style::default() };
    assert_eq!(edit.document.blocks()[0].runs(), [Run::plain("a"), Run::new("b", underline.clone())]);
    assert_eq!(edit.document.blocks()[1].runs(), [Run::new("c", underline), Run::plain("d")]);
}

#[test]
fn range_has_requires_every_character() {
    let edit = doc_of(&["abc"]).toggle_italic(span((0, 0), (0, 2)));
    assert!(edit.document.range_has(span((0, 0), (0, 2)), |s| s.italic));
    assert!(!edit.document.range_has(span((0, 0), (0, 3)), |s| s.italic));
    assert!(!edit.document.range_has(Range::caret(Position::new(0, 1)), |s| s.italic));
}

// =============================================================
// Size, colour, clear
// =============================================================

#[test]
fn set_font_size_and_color() {
    let size = FontSize::new(5).unwrap();
    let color = Color::rgb(255, 0, 0);
    let doc = doc_of(&["abc"]);
    let sized = doc.set_font_size(span((0, 1), (0, 3)), size);
    let colored = sized.document.set_color(span((0, 0), (0, 3)), color);
    let runs = colored.document.blocks()[0].runs();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].style, Style { color: Some(color), ..Style::default() });
    assert_eq!(runs[1].style, Style { color: Some(color), size: Some(size), ..Style::default() });
}

#[test]
fn clear_formatting_keeps_links() {
    let target = link("https://intranet.example/rh");
    let doc = Document::from_blocks(vec![Block::new(
        BlockKind::Paragraph,
        vec![Run::new(
            "rh",
            Style { bold: true, color: Some(Color::rgb(0, 0, 255)), link: Some(target.clone()), ..Style::default() },
        )],
    )]);
    let edit = doc.clear_formatting(span((0, 0), (0, 2)));
    assert_eq!(
        edit.document.blocks()[0].runs(),
        [Run::new("rh", Style { link: Some(target), ..Style::default() })]
    );
}

// =============================================================
// Links
// =============================================================

#[test]
fn link_wraps_selected_text() {
    let target = link("https://example.com");
    let edit = doc_of(&["see site"]).insert_link(span((0, 4), (0, 8)), &target);
    let runs = edit.document.blocks()[0].runs();
    assert_eq!(runs[0], Run::plain("see "));
    assert_eq!(runs[1], Run::new("site", Style { link: Some(target), ..Style::default() }));
}

#[test]
fn link_on_collapsed_selection_inserts_url_text() {
    let target = link("https://x.y");
    let edit = Document::new().insert_link(Range::caret(Position::new(0, 0)), &target);
    assert_eq!(edit.document.plain_text(), "https://x.y");
    assert_eq!(edit.document.blocks()[0].runs()[0].style.link, Some(target));
    assert_eq!(edit.selection, span((0, 0), (0, 11)));
}

// =============================================================
// Lists
// =============================================================

#[test]
fn bullet_list_covers_every_touched_block() {
    let edit = doc_of(&["a", "b", "c"]).toggle_list(span((0, 0), (1, 0)), BlockKind::BulletItem);
    let kinds: Vec<_> = edit.document.blocks().iter().map(|b| b.kind).collect();
    assert_eq!(kinds, [BlockKind::BulletItem, BlockKind::BulletItem, BlockKind::Paragraph]);
}

#[test]
fn list_toggle_back_to_paragraphs() {
    let range = span((0, 0), (1, 0));
    let on = doc_of(&["a", "b"]).toggle_list(range, BlockKind::NumberedItem);
    let off = on.document.toggle_list(range, BlockKind::NumberedItem);
    assert!(off.document.blocks().iter().all(|b| b.kind == BlockKind::Paragraph));
}

#[test]
fn numbered_list_replaces_bullets() {
    let on = doc_of(&["a"]).toggle_list(Range::caret(Position::new(0, 0)), BlockKind::BulletItem);
    let switched = on.document.toggle_list(Range::caret(Position::new(0, 0)), BlockKind::NumberedItem);
    assert_eq!(switched.document.blocks()[0].kind, BlockKind::NumberedItem);
}

// =============================================================
// Command dispatch
// =============================================================

#[test]
fn apply_dispatches_to_transforms() {
    let doc = doc_of(&["abc", "def"]);
    let range = span((0, 0), (1, 2));
    assert_eq!(doc.apply(&Command::Italic, range), doc.toggle_italic(range));
    assert_eq!(doc.apply(&Command::BulletList, range), doc.toggle_list(range, BlockKind::BulletItem));
    assert_eq!(doc.apply(&Command::ClearFormatting, range), doc.clear_formatting(range));
    let size = FontSize::new(2).unwrap();
    assert_eq!(doc.apply(&Command::FontSize(size), range), doc.set_font_size(range, size));
}
