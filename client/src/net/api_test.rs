use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn new_item_posts_to_collection() {
    assert_eq!(
        save_endpoint("/api", ContentKind::News, None),
        (SaveMethod::Post, "/api/noticias".to_owned())
    );
    assert_eq!(
        save_endpoint("/api", ContentKind::Training, None),
        (SaveMethod::Post, "/api/treinamentos".to_owned())
    );
}

#[test]
fn edited_item_puts_to_record() {
    assert_eq!(
        save_endpoint("https://intra.example/api", ContentKind::Training, Some("42")),
        (SaveMethod::Put, "https://intra.example/api/treinamentos/42".to_owned())
    );
}

#[test]
fn auth_and_category_endpoints() {
    assert_eq!(session_endpoint("/api"), "/api/auth/me");
    assert_eq!(logout_endpoint("/api"), "/api/auth/logout");
    assert_eq!(categories_endpoint("/api"), "/api/categorias");
}

// =============================================================
// Save response
// =============================================================

#[test]
fn save_response_success_flag_is_honoured() {
    assert!(save_succeeded(r#"{"success": true}"#));
    assert!(!save_succeeded(r#"{"success": false, "message": "duplicado"}"#));
}

#[test]
fn save_response_without_flag_counts_as_saved() {
    assert!(save_succeeded(""));
    assert!(save_succeeded(r#"{"id": 7}"#));
    assert!(save_succeeded("OK"));
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_save_is_unavailable() {
    let saver = HttpContentSaver::new("/api");
    let request = SaveRequest {
        kind: ContentKind::News,
        editing_id: None,
        payload: crate::state::draft::Draft::default().to_payload(),
        file: None,
    };
    let result = futures::executor::block_on(saver.save(&request));
    assert_eq!(result, Err(ApiError::Unavailable("content save")));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_session_is_absent() {
    let provider = HttpSessionProvider::new("/api");
    assert_eq!(futures::executor::block_on(provider.current_session()), Ok(None));
}
