use super::*;

#[test]
fn sizes_pick_a_unit() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2048), "2 KB");
    assert_eq!(format_size(5 * 1024 * 1024 + 400 * 1024), "5.4 MB");
}

#[test]
fn picked_label_shows_name_and_size() {
    assert_eq!(picked_label(&SelectedFile::named("deck.pptx", 1024 * 1024)), "deck.pptx (1.0 MB)");
}
