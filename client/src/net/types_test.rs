use super::*;

// =============================================================
// ContentRecord
// =============================================================

#[test]
fn content_record_accepts_sparse_json() {
    let record: ContentRecord = serde_json::from_str(r#"{"titulo":"A","categoria_nome":"Geral"}"#).unwrap();
    assert_eq!(record.titulo.as_deref(), Some("A"));
    assert_eq!(record.categoria_nome.as_deref(), Some("Geral"));
    assert_eq!(record.id, None);
    assert_eq!(record.tags, None);
}

#[test]
fn content_record_accepts_numeric_id() {
    let record: ContentRecord = serde_json::from_str(r#"{"id":42}"#).unwrap();
    assert_eq!(record.id.as_deref(), Some("42"));
}

#[test]
fn content_record_accepts_null_id() {
    let record: ContentRecord = serde_json::from_str(r#"{"id":null,"destaque":true}"#).unwrap();
    assert_eq!(record.id, None);
    assert_eq!(record.destaque, Some(true));
}

#[test]
fn content_record_rejects_object_id() {
    assert!(serde_json::from_str::<ContentRecord>(r#"{"id":{"x":1}}"#).is_err());
}

// =============================================================
// ContentPayload
// =============================================================

#[test]
fn payload_omits_absent_tipo() {
    let payload = ContentPayload {
        titulo: "T".to_owned(),
        categoria: "C".to_owned(),
        descricao: String::new(),
        conteudo: "<p>x</p>".to_owned(),
        autor: "Administrador".to_owned(),
        destaque: false,
        tags: Vec::new(),
        logo_url: String::new(),
        tipo: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("tipo").is_none());
    assert_eq!(json["conteudo"], "<p>x</p>");
}

// =============================================================
// SessionInfo
// =============================================================

#[test]
fn session_info_defaults_profile_and_admin() {
    let info: SessionInfo = serde_json::from_str(r#"{"user":{"id":"u1","email":"ana@example.com"}}"#).unwrap();
    assert_eq!(info.user.email, "ana@example.com");
    assert_eq!(info.profile, None);
    assert!(!info.is_admin);
}

#[test]
fn session_info_reads_profile() {
    let info: SessionInfo = serde_json::from_str(
        r#"{"user":{"id":7,"email":"a@b.c"},"profile":{"nome":"Ana","cargo":"RH"},"is_admin":true}"#,
    )
    .unwrap();
    assert_eq!(info.user.id, "7");
    assert_eq!(info.profile.and_then(|p| p.cargo).as_deref(), Some("RH"));
    assert!(info.is_admin);
}
