use super::*;

// =============================================================
// body_edit_for
// =============================================================

#[test]
fn typing_maps_to_insert_text() {
    assert_eq!(body_edit_for("insertText", Some("a".to_owned())), Some(BodyEdit::InsertText("a".to_owned())));
    assert_eq!(
        body_edit_for("insertFromPaste", Some("colado".to_owned())),
        Some(BodyEdit::InsertText("colado".to_owned()))
    );
}

#[test]
fn insert_without_data_is_ignored() {
    assert_eq!(body_edit_for("insertText", None), None);
    assert_eq!(body_edit_for("insertText", Some(String::new())), None);
}

#[test]
fn enter_and_deletes() {
    assert_eq!(body_edit_for("insertParagraph", None), Some(BodyEdit::InsertParagraph));
    assert_eq!(body_edit_for("insertLineBreak", None), Some(BodyEdit::InsertParagraph));
    assert_eq!(body_edit_for("deleteContentBackward", None), Some(BodyEdit::DeleteBackward));
    assert_eq!(body_edit_for("deleteContentForward", None), Some(BodyEdit::DeleteForward));
}

#[test]
fn unsupported_input_types_are_ignored() {
    for kind in ["historyUndo", "insertFromDrop", "formatBold", "insertCompositionText"] {
        assert_eq!(body_edit_for(kind, Some("x".to_owned())), None, "{kind}");
    }
}

// =============================================================
// UTF-16 offsets
// =============================================================

#[test]
fn ascii_offsets_are_identical() {
    assert_eq!(utf16_to_char_offset("hello", 3), 3);
    assert_eq!(char_to_utf16_offset("hello", 3), 3);
}

#[test]
fn astral_chars_take_two_units() {
    let text = "a😀b";
    assert_eq!(char_to_utf16_offset(text, 2), 3);
    assert_eq!(utf16_to_char_offset(text, 3), 2);
    assert_eq!(utf16_to_char_offset(text, 1), 1);
}

#[test]
fn offsets_past_end_clamp_to_length() {
    assert_eq!(utf16_to_char_offset("ação", 99), 4);
    assert_eq!(char_to_utf16_offset("ação", 99), 4);
}
