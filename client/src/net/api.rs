//! REST collaborators for the portal API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`], since saving
//! and signing out are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the state layer decides what the
//! user sees. Nothing here panics or shows UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Category, SessionInfo};
use crate::state::content_form::{ContentSaver, SaveRequest};
use crate::state::session::SessionProvider;

#[cfg(any(test, feature = "hydrate"))]
use crate::state::draft::ContentKind;

/// Multipart field holding the JSON payload.
pub const PAYLOAD_FIELD: &str = "dados";
/// Multipart field holding the attachment.
pub const FILE_FIELD: &str = "arquivo";

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveMethod {
    Post,
    Put,
}

/// Create with `POST {base}/{collection}`, update with
/// `PUT {base}/{collection}/{id}`.
#[cfg(any(test, feature = "hydrate"))]
fn save_endpoint(base: &str, kind: ContentKind, editing_id: Option<&str>) -> (SaveMethod, String) {
    match editing_id {
        Some(id) => (SaveMethod::Put, format!("{base}/{}/{id}", kind.collection())),
        None => (SaveMethod::Post, format!("{base}/{}", kind.collection())),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn categories_endpoint(base: &str) -> String {
    format!("{base}/categorias")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_endpoint(base: &str) -> String {
    format!("{base}/auth/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/logout")
}

/// Read the save response body. The API may answer `{"success": false}` to
/// decline a save without an error status; anything else counts as saved.
#[cfg(any(test, feature = "hydrate"))]
fn save_succeeded(body: &str) -> bool {
    #[derive(serde::Deserialize)]
    struct SaveResponse {
        success: Option<bool>,
    }
    match serde_json::from_str::<SaveResponse>(body) {
        Ok(SaveResponse { success: Some(flag) }) => flag,
        _ => true,
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_transport(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

/// Build the multipart body: JSON payload plus the optional attachment.
#[cfg(feature = "hydrate")]
fn multipart_body(request: &SaveRequest) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| js_transport(&e))?;
    let json = serde_json::to_string(&request.payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    form.append_with_str(PAYLOAD_FIELD, &json).map_err(|e| js_transport(&e))?;

    if let Some(file) = &request.file {
        let Some(data) = file.data.as_deref() else {
            return Err(ApiError::Unavailable("attachment contents"));
        };
        let bytes = js_sys::Uint8Array::from(data);
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| js_transport(&e))?;
        form.append_with_blob_and_filename(FILE_FIELD, &blob, &file.name)
            .map_err(|e| js_transport(&e))?;
    }
    Ok(form)
}

/// Saves news and training items through the portal API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpContentSaver {
    api_base: String,
}

impl HttpContentSaver {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl ContentSaver for HttpContentSaver {
    async fn save(&self, request: &SaveRequest) -> Result<bool, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let (method, url) = save_endpoint(&self.api_base, request.kind, request.editing_id.as_deref());
            let builder = match method {
                SaveMethod::Post => gloo_net::http::Request::post(&url),
                SaveMethod::Put => gloo_net::http::Request::put(&url),
            };
            let resp = builder
                .body(multipart_body(request)?)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(ApiError::Status { context: "save", status: resp.status() });
            }
            let body = resp.text().await.map_err(transport)?;
            Ok(save_succeeded(&body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.api_base, request);
            Err(ApiError::Unavailable("content save"))
        }
    }
}

/// Reads and ends the browser session through the portal API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSessionProvider {
    api_base: String,
}

impl HttpSessionProvider {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl SessionProvider for HttpSessionProvider {
    async fn current_session(&self) -> Result<Option<SessionInfo>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&session_endpoint(&self.api_base))
                .send()
                .await
                .map_err(transport)?;
            if resp.status() == 401 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(ApiError::Status { context: "session", status: resp.status() });
            }
            let info = resp.json::<SessionInfo>().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(Some(info))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.api_base;
            Ok(None)
        }
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&logout_endpoint(&self.api_base))
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(ApiError::Status { context: "logout", status: resp.status() });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.api_base;
            Err(ApiError::Unavailable("sign-out"))
        }
    }
}

/// Fetch every category from `{base}/categorias`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the body is not a list
/// of categories.
pub async fn fetch_categories(api_base: &str) -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&categories_endpoint(api_base))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(ApiError::Status { context: "categories", status: resp.status() });
        }
        resp.json::<Vec<Category>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        Ok(Vec::new())
    }
}
