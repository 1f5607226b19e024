use super::*;

fn category(nome: &str, tipo: &str) -> Category {
    Category { id: None, nome: nome.to_owned(), tipo: tipo.to_owned() }
}

fn catalog() -> Vec<Category> {
    vec![
        category("Geral", "noticias"),
        category("Segurança", "treinamentos"),
        category("Eventos", "noticias"),
        category("Geral", "noticias"),
        category("  ", "noticias"),
        category("RH", "treinamentos"),
    ]
}

#[test]
fn options_are_scoped_by_kind() {
    assert_eq!(options_for(&catalog(), ContentKind::News, ""), ["Geral", "Eventos"]);
    assert_eq!(options_for(&catalog(), ContentKind::Training, ""), ["Segurança", "RH"]);
}

#[test]
fn unknown_current_category_is_kept() {
    assert_eq!(options_for(&catalog(), ContentKind::News, "Arquivo"), ["Geral", "Eventos", "Arquivo"]);
    assert_eq!(options_for(&catalog(), ContentKind::News, "Eventos"), ["Geral", "Eventos"]);
}

#[test]
fn empty_catalog_yields_only_current() {
    assert!(options_for(&[], ContentKind::Training, "").is_empty());
    assert_eq!(options_for(&[], ContentKind::Training, "Novo"), ["Novo"]);
}

#[test]
fn only_training_accepts_new_categories() {
    assert_eq!(new_category(ContentKind::Training, "  Compliance "), Some("Compliance".to_owned()));
    assert_eq!(new_category(ContentKind::Training, "   "), None);
    assert_eq!(new_category(ContentKind::News, "Compliance"), None);
}
