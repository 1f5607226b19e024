//! Wire DTOs exchanged with the portal API.
//!
//! DESIGN
//! ======
//! Field names stay in Portuguese because that is what the API speaks. Read
//! types (`ContentRecord`, `SessionInfo`) are lenient: every field is
//! optional and numeric ids are accepted alongside string ids, since records
//! come from more than one backend version.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A news article or training item as returned by the API, used to prefill
/// the form in edit mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub titulo: Option<String>,
    /// Display name of the category when the API joins it in.
    #[serde(default)]
    pub categoria_nome: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    /// Article body as stored HTML.
    #[serde(default)]
    pub conteudo: Option<String>,
    #[serde(default)]
    pub autor: Option<String>,
    #[serde(default)]
    pub destaque: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub logo_url: Option<String>,
    /// `PDF` or `PPT` for training attachments.
    #[serde(default)]
    pub tipo: Option<String>,
}

/// Body sent to the save endpoint as the `dados` part of the upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentPayload {
    pub titulo: String,
    pub categoria: String,
    pub descricao: String,
    /// Article body rendered to HTML.
    pub conteudo: String,
    pub autor: String,
    pub destaque: bool,
    pub tags: Vec<String>,
    pub logo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

/// A category offered by the selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<String>,
    pub nome: String,
    /// `noticias` or `treinamentos`.
    pub tipo: String,
}

/// Authenticated account identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Display profile attached to an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub nome: Option<String>,
    /// Job title.
    #[serde(default)]
    pub cargo: Option<String>,
}

/// What `/auth/me` reports about the current browser session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user: SessionUser,
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub is_admin: bool,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value).ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(value).map(Some).ok_or_else(|| D::Error::custom("expected string or integer id"))
}

fn id_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}
