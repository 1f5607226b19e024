//! Validation of the single file attached to a training item.

#[cfg(test)]
#[path = "attachment_test.rs"]
mod attachment_test;

use serde::{Deserialize, Serialize};

/// Upload ceiling when no configuration overrides it: 10 MiB.
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions accepted for training material, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "ppt", "pptx"];

/// Value of the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.ppt,.pptx";

/// Presentation format stored with a training item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "PPT")]
    Ppt,
}

impl AttachmentKind {
    /// Wire value (`PDF` / `PPT`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Ppt => "PPT",
        }
    }

    /// Parse a stored `tipo`, case-insensitively.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PDF" => Some(Self::Pdf),
            "PPT" | "PPTX" => Some(Self::Ppt),
            _ => None,
        }
    }
}

/// A file the user picked. `data` is `None` until the browser has read it.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes as reported by the picker.
    pub size: u64,
    pub mime: String,
    pub data: Option<Vec<u8>>,
}

impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("mime", &self.mime)
            .field("data", &self.data.as_ref().map(|d| format!("[{} bytes]", d.len())))
            .finish()
    }
}

impl SelectedFile {
    /// Metadata-only file, used before the contents have been read.
    #[must_use]
    pub fn named(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size, mime: String::new(), data: None }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

/// Outcome of the last file selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileValidation {
    pub errors: Vec<String>,
}

impl FileValidation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn failed(error: &AttachmentError) -> Self {
        Self { errors: vec![error.to_string()] }
    }
}

/// Why a picked file was refused. Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachmentError {
    #[error("Formato de arquivo não suportado. Use PDF, PPT ou PPTX.")]
    UnsupportedFormat,
    #[error("Arquivo muito grande. Máximo {max_mb}MB.")]
    TooLarge { max_mb: u64 },
    #[error("Não foi possível ler o arquivo. Selecione-o novamente.")]
    Unreadable,
}

/// Lowercased text after the last `.` of `name`, if there is one.
#[must_use]
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check format first, then size. `max_bytes` is inclusive.
///
/// # Errors
///
/// Returns the first rule the file breaks.
pub fn validate_attachment(name: &str, size: u64, max_bytes: u64) -> Result<AttachmentKind, AttachmentError> {
    let ext = extension_of(name).ok_or(AttachmentError::UnsupportedFormat)?;
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AttachmentError::UnsupportedFormat);
    }
    if size > max_bytes {
        return Err(AttachmentError::TooLarge { max_mb: max_bytes / (1024 * 1024) });
    }
    Ok(if ext == "pdf" { AttachmentKind::Pdf } else { AttachmentKind::Ppt })
}
