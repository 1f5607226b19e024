use super::*;

fn record() -> ContentRecord {
    ContentRecord::default()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_draft_is_empty_with_default_author() {
    let draft = Draft::default();
    assert_eq!(draft.title, "");
    assert_eq!(draft.category, "");
    assert_eq!(draft.author, "Administrador");
    assert!(!draft.featured);
    assert!(draft.tags.is_empty());
    assert!(draft.body.is_empty());
    assert_eq!(draft.attachment_kind, None);
}

// =============================================================
// from_record
// =============================================================

#[test]
fn from_record_title_and_category_name() {
    let draft = Draft::from_record(&ContentRecord {
        titulo: Some("A".to_owned()),
        categoria_nome: Some("Geral".to_owned()),
        ..record()
    });
    assert_eq!(draft.title, "A");
    assert_eq!(draft.category, "Geral");
    assert_eq!(draft.author, "Administrador");
}

#[test]
fn from_record_falls_back_to_category_field() {
    let draft = Draft::from_record(&ContentRecord {
        categoria_nome: Some(String::new()),
        categoria: Some("RH".to_owned()),
        ..record()
    });
    assert_eq!(draft.category, "RH");
}

#[test]
fn from_record_empty_author_uses_default() {
    let draft = Draft::from_record(&ContentRecord { autor: Some(String::new()), ..record() });
    assert_eq!(draft.author, DEFAULT_AUTHOR);
    let draft = Draft::from_record(&ContentRecord { autor: Some("Ana".to_owned()), ..record() });
    assert_eq!(draft.author, "Ana");
}

#[test]
fn from_record_fills_every_field() {
    let draft = Draft::from_record(&ContentRecord {
        id: Some("9".to_owned()),
        titulo: Some("Onboarding".to_owned()),
        categoria: Some("Integração".to_owned()),
        descricao: Some("Boas-vindas".to_owned()),
        conteudo: Some("<p>Olá <b>time</b></p>".to_owned()),
        autor: Some("Ana".to_owned()),
        destaque: Some(true),
        tags: Some(vec!["rh".to_owned(), " rh ".to_owned(), String::new(), "novo".to_owned()]),
        logo_url: Some("/logo.png".to_owned()),
        tipo: Some("PDF".to_owned()),
        ..record()
    });
    assert_eq!(draft.title, "Onboarding");
    assert_eq!(draft.category, "Integração");
    assert_eq!(draft.description, "Boas-vindas");
    assert_eq!(draft.body.plain_text(), "Olá time");
    assert!(draft.featured);
    assert_eq!(draft.tags, ["rh", "novo"]);
    assert_eq!(draft.logo_url, "/logo.png");
    assert_eq!(draft.attachment_kind, Some(AttachmentKind::Pdf));
}

#[test]
fn from_empty_record_equals_default() {
    assert_eq!(Draft::from_record(&record()), Draft::default());
}

// =============================================================
// Field edits and tags
// =============================================================

#[test]
fn apply_merges_single_field() {
    let mut draft = Draft::default();
    draft.apply(FieldEdit::Title("T".to_owned()));
    draft.apply(FieldEdit::Featured(true));
    draft.apply(FieldEdit::LogoUrl("/x.png".to_owned()));
    assert_eq!(draft.title, "T");
    assert!(draft.featured);
    assert_eq!(draft.logo_url, "/x.png");
    assert_eq!(draft.author, DEFAULT_AUTHOR);
}

#[test]
fn push_tag_ignores_blank_and_duplicates() {
    let mut draft = Draft::default();
    assert!(!draft.push_tag(""));
    assert!(!draft.push_tag("  "));
    assert!(draft.push_tag("x"));
    assert!(!draft.push_tag("x"));
    assert!(!draft.push_tag(" x "));
    assert!(draft.push_tag("X"));
    assert_eq!(draft.tags, ["x", "X"]);
}

#[test]
fn remove_tag_removes_exact_match_only() {
    let mut draft = Draft::default();
    draft.push_tag("a");
    draft.push_tag("b");
    assert!(!draft.remove_tag("A"));
    assert!(draft.remove_tag("a"));
    assert_eq!(draft.tags, ["b"]);
}

// =============================================================
// Required fields and payload
// =============================================================

#[test]
fn missing_required_depends_on_kind() {
    let mut draft = Draft::default();
    draft.apply(FieldEdit::Title("T".to_owned()));
    draft.apply(FieldEdit::Category("C".to_owned()));
    assert!(!draft.missing_required(ContentKind::News));
    assert!(draft.missing_required(ContentKind::Training));
    draft.apply(FieldEdit::Description("D".to_owned()));
    assert!(!draft.missing_required(ContentKind::Training));
    draft.apply(FieldEdit::Category("   ".to_owned()));
    assert!(draft.missing_required(ContentKind::News));
}

#[test]
fn payload_renders_body_html() {
    let mut draft = Draft::default();
    draft.body = richtext::Document::from_plain_text("linha 1\nlinha 2");
    draft.attachment_kind = Some(AttachmentKind::Ppt);
    let payload = draft.to_payload();
    assert_eq!(payload.conteudo, "<p>linha 1</p><p>linha 2</p>");
    assert_eq!(payload.autor, "Administrador");
    assert_eq!(payload.tipo.as_deref(), Some("PPT"));
}

#[test]
fn empty_body_renders_empty_string() {
    assert_eq!(Draft::default().to_payload().conteudo, "");
}

// =============================================================
// ContentKind
// =============================================================

#[test]
fn kind_names() {
    assert_eq!(ContentKind::News.as_str(), "noticia");
    assert_eq!(ContentKind::Training.as_str(), "treinamento");
    assert_eq!(ContentKind::News.collection(), "noticias");
    assert_eq!(ContentKind::Training.collection(), "treinamentos");
    assert!(ContentKind::Training.allows_category_creation());
    assert!(!ContentKind::News.allows_category_creation());
}

#[test]
fn kind_labels() {
    assert_eq!(ContentKind::News.label(), "Notícia");
    assert_eq!(ContentKind::Training.label(), "Treinamento");
    assert_eq!(ContentKind::Training.saved_notice(), "Treinamento salvo com sucesso.");
}
