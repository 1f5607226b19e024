use super::*;

fn bold() -> Style {
    Style { bold: true, ..Style::default() }
}

fn doc_of(lines: &[&str]) -> Document {
    Document::from_blocks(lines.iter().map(|l| Block::paragraph(l)).collect())
}

fn texts(doc: &Document) -> Vec<String> {
    doc.blocks().iter().map(Block::text).collect()
}

fn caret(block: usize, offset: usize) -> Range {
    Range::caret(Position::new(block, offset))
}

fn span(a: (usize, usize), b: (usize, usize)) -> Range {
    Range::new(Position::new(a.0, a.1), Position::new(b.0, b.1))
}

// =============================================================
// Construction
// =============================================================

#[test]
fn default_document_is_one_empty_paragraph() {
    let doc = Document::new();
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.blocks()[0].kind, BlockKind::Paragraph);
    assert!(doc.is_empty());
    assert_eq!(doc.plain_text(), "");
}

#[test]
fn from_blocks_never_yields_zero_blocks() {
    assert_eq!(Document::from_blocks(Vec::new()), Document::default());
}

#[test]
fn from_plain_text_splits_on_any_newline() {
    let doc = Document::from_plain_text("a\r\nb\rc\nd");
    assert_eq!(texts(&doc), ["a", "b", "c", "d"]);
    assert_eq!(doc.plain_text(), "a\nb\nc\nd");
}

#[test]
fn block_new_drops_empty_runs_and_merges_equal_styles() {
    let block = Block::new(
        BlockKind::Paragraph,
        vec![Run::plain("a"), Run::plain(""), Run::plain("b"), Run::new("c", bold()), Run::new("d", bold())],
    );
    assert_eq!(block.runs(), [Run::plain("ab"), Run::new("cd", bold())]);
    assert_eq!(block.len(), 4);
}

#[test]
fn lengths_count_characters_not_bytes() {
    let block = Block::paragraph("ção");
    assert_eq!(block.len(), 3);
}

// =============================================================
// Positions and ranges
// =============================================================

#[test]
fn range_new_orders_positions() {
    let range = span((1, 0), (0, 4));
    assert_eq!(range.start(), Position::new(0, 4));
    assert_eq!(range.end(), Position::new(1, 0));
    assert!(!range.is_collapsed());
    assert!(caret(0, 0).is_collapsed());
}

#[test]
fn clamp_pulls_positions_inside() {
    let doc = doc_of(&["abc"]);
    assert_eq!(doc.clamp(Position::new(0, 10)), Position::new(0, 3));
    assert_eq!(doc.clamp(Position::new(5, 0)), Position::new(0, 3));
    assert_eq!(doc.end(), Position::new(0, 3));
}

// =============================================================
// Text edits
// =============================================================

#[test]
fn insert_text_into_empty_document() {
    let edit = Document::new().insert_text(caret(0, 0), "Olá");
    assert_eq!(edit.document.plain_text(), "Olá");
    assert_eq!(edit.selection, caret(0, 3));
}

#[test]
fn insert_text_inherits_style_before_caret() {
    let doc = Document::from_blocks(vec![Block::new(BlockKind::Paragraph, vec![Run::new("ab", bold())])]);
    let edit = doc.insert_text(caret(0, 2), "c");
    assert_eq!(edit.document.blocks()[0].runs(), [Run::new("abc", bold())]);
}

#[test]
fn insert_text_at_block_start_inherits_first_run() {
    let doc = Document::from_blocks(vec![Block::new(BlockKind::Paragraph, vec![Run::new("b", bold())])]);
    let edit = doc.insert_text(caret(0, 0), "a");
    assert_eq!(edit.document.blocks()[0].runs(), [Run::new("ab", bold())]);
}

#[test]
fn insert_text_replaces_selection() {
    let edit = doc_of(&["hello world"]).insert_text(span((0, 0), (0, 5)), "bye");
    assert_eq!(edit.document.plain_text(), "bye world");
    assert_eq!(edit.selection, caret(0, 3));
}

#[test]
fn insert_text_with_newline_splits_block() {
    let edit = doc_of(&["abcd"]).insert_text(caret(0, 2), "x\ny");
    assert_eq!(texts(&edit.document), ["abx", "ycd"]);
    assert_eq!(edit.selection, caret(1, 1));
}

#[test]
fn insert_text_handles_multibyte_offsets() {
    let edit = doc_of(&["ção"]).insert_text(caret(0, 1), "X");
    assert_eq!(edit.document.plain_text(), "çXão");
}

#[test]
fn delete_across_blocks_merges() {
    let edit = doc_of(&["abc", "def", "ghi"]).delete(span((0, 1), (2, 1)));
    assert_eq!(texts(&edit.document), ["ahi"]);
    assert_eq!(edit.selection, caret(0, 1));
}

#[test]
fn delete_backward_removes_previous_char() {
    let edit = doc_of(&["abc"]).delete_backward(caret(0, 2));
    assert_eq!(edit.document.plain_text(), "ac");
    assert_eq!(edit.selection, caret(0, 1));
}

#[test]
fn delete_backward_at_list_item_start_leaves_list() {
    let doc = Document::from_blocks(vec![
        Block::paragraph("a"),
        Block::new(BlockKind::BulletItem, vec![Run::plain("b")]),
    ]);
    let edit = doc.delete_backward(caret(1, 0));
    assert_eq!(edit.document.block_count(), 2);
    assert_eq!(edit.document.blocks()[1].kind, BlockKind::Paragraph);
    assert_eq!(edit.document.blocks()[1].text(), "b");
}

#[test]
fn delete_backward_at_paragraph_start_merges_with_previous() {
    let edit = doc_of(&["ab", "cd"]).delete_backward(caret(1, 0));
    assert_eq!(texts(&edit.document), ["abcd"]);
    assert_eq!(edit.selection, caret(0, 2));
}

#[test]
fn delete_backward_at_document_start_is_noop() {
    let doc = doc_of(&["ab"]);
    let edit = doc.delete_backward(caret(0, 0));
    assert_eq!(edit.document, doc);
}

#[test]
fn delete_forward_at_block_end_merges_next() {
    let edit = doc_of(&["ab", "cd"]).delete_forward(caret(0, 2));
    assert_eq!(texts(&edit.document), ["abcd"]);
    assert_eq!(edit.selection, caret(0, 2));
}

#[test]
fn delete_forward_at_document_end_is_noop() {
    let doc = doc_of(&["ab"]);
    assert_eq!(doc.delete_forward(caret(0, 2)).document, doc);
}

#[test]
fn split_block_keeps_list_kind() {
    let doc = Document::from_blocks(vec![Block::new(BlockKind::NumberedItem, vec![Run::plain("abcd")])]);
    let edit = doc.split_block(caret(0, 2));
    assert_eq!(texts(&edit.document), ["ab", "cd"]);
    assert!(edit.document.blocks().iter().all(|b| b.kind == BlockKind::NumberedItem));
    assert_eq!(edit.selection, caret(1, 0));
}

#[test]
fn split_block_on_empty_list_item_leaves_list() {
    let doc = Document::from_blocks(vec![
        Block::new(BlockKind::BulletItem, vec![Run::plain("a")]),
        Block::new(BlockKind::BulletItem, Vec::new()),
    ]);
    let edit = doc.split_block(caret(1, 0));
    assert_eq!(edit.document.block_count(), 2);
    assert_eq!(edit.document.blocks()[1].kind, BlockKind::Paragraph);
}

#[test]
fn edits_do_not_touch_the_original() {
    let doc = doc_of(&["abc"]);
    let _edit = doc.insert_text(caret(0, 0), "x");
    assert_eq!(doc.plain_text(), "abc");
}

// =============================================================
// Serde
// =============================================================

#[test]
fn empty_block_list_deserializes_to_default() {
    let doc: Document = serde_json::from_str("[]").unwrap();
    assert_eq!(doc, Document::default());
}

#[test]
fn deserialized_blocks_are_normalized() {
    let json = r#"[{"kind":"bullet_item","runs":[
        {"text":"a","style":{"bold":false,"italic":false,"underline":false}},
        {"text":"","style":{"bold":true,"italic":false,"underline":false}},
        {"text":"b","style":{"bold":false,"italic":false,"underline":false}}
    ]}]"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.blocks()[0].kind, BlockKind::BulletItem);
    assert_eq!(doc.blocks()[0].runs(), [Run::plain("ab")]);
}

#[test]
fn document_serde_round_trip() {
    let doc = Document::from_blocks(vec![
        Block::new(BlockKind::Paragraph, vec![Run::plain("a"), Run::new("b", bold())]),
        Block::new(BlockKind::NumberedItem, vec![Run::plain("c")]),
    ]);
    let json = serde_json::to_string(&doc).unwrap();
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}
