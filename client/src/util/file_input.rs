//! Browser file-picker glue for the attachment field.
//!
//! The form validates the picked file from its name and size before any
//! bytes are read; the contents are loaded afterwards and attached with
//! `ContentForm::attach_contents` under the ticket `pick_file` returned.

use crate::state::attachment::SelectedFile;

/// The first file of the `<input type="file">` that fired `ev`, if any.
#[cfg(feature = "hydrate")]
pub fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Metadata of a browser `File`, without its contents.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn describe(file: &web_sys::File) -> SelectedFile {
    SelectedFile { mime: file.type_(), ..SelectedFile::named(file.name(), file.size() as u64) }
}

/// Read the whole file into memory.
///
/// # Errors
///
/// Returns [`ApiError::Transport`](crate::net::error::ApiError) when the
/// browser fails to read the file.
#[cfg(feature = "hydrate")]
pub async fn read_bytes(file: &web_sys::File) -> Result<Vec<u8>, crate::net::error::ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| crate::net::error::ApiError::Transport(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Human-readable size for the picked-file row, e.g. `2.4 MB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Label for the picked-file row.
#[must_use]
pub fn picked_label(file: &SelectedFile) -> String {
    format!("{} ({})", file.name, format_size(file.size))
}

#[cfg(test)]
#[path = "file_input_test.rs"]
mod file_input_test;
