//! Controller behind the news/training modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminModal` holds a `ContentForm` in an `RwSignal` and forwards every user
//! event to it. The controller owns the draft, the single pending attachment,
//! the tag input buffer, file validation, the submitting flag and a dialog
//! sub-state that stands in for browser `alert`/`prompt`.
//!
//! DESIGN
//! ======
//! Submission is split into `begin_submit` and `finish_submit` so the
//! component can release the signal while the save request is in flight.
//! The form cannot be closed meanwhile, and a finish with no save in flight
//! is ignored. The async `submit` does both steps for callers that own the
//! form outright.

#[cfg(test)]
#[path = "content_form_test.rs"]
mod content_form_test;

use richtext::{Command, LinkTarget, Range};

use super::attachment::{AttachmentError, AttachmentKind, FileValidation, SelectedFile, validate_attachment};
use super::draft::{ContentKind, Draft, FieldEdit};
use crate::net::error::ApiError;
use crate::net::types::{ContentPayload, ContentRecord};

pub const MSG_REQUIRED_FIELDS: &str = "Preencha todos os campos obrigatórios.";
pub const MSG_MISSING_ATTACHMENT: &str = "Por favor, selecione um arquivo para o treinamento.";
pub const MSG_FILE_LOADING: &str = "Aguarde o carregamento do arquivo.";
pub const MSG_SAVE_FAILED: &str = "Erro ao salvar. Tente novamente.";
pub const MSG_UNSAFE_LINK: &str = "Endereço de link não permitido.";

/// Modal sub-state layered over the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormDialog {
    #[default]
    None,
    /// A message the user must acknowledge.
    Alert(String),
    /// Asking for the URL of a link to insert at the current selection.
    LinkPrompt,
}

/// A structured edit reported by the rich-text surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyEdit {
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    InsertParagraph,
}

/// Everything the save collaborator needs for one submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub kind: ContentKind,
    /// Id of the record being edited; `None` creates a new one.
    pub editing_id: Option<String>,
    pub payload: ContentPayload,
    /// Newly picked attachment. `None` in edit mode keeps the current file.
    pub file: Option<SelectedFile>,
}

/// Persists a submission.
///
/// `Ok(true)` means the item was stored. `Ok(false)` means the collaborator
/// declined without raising an error.
#[async_trait::async_trait(?Send)]
pub trait ContentSaver: Send + Sync {
    async fn save(&self, request: &SaveRequest) -> Result<bool, ApiError>;
}

/// Why a submission never reached the save collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("required fields are missing")]
    MissingRequired,
    #[error("a new training item needs an attachment")]
    MissingAttachment,
    #[error("the attachment is still being read")]
    AttachmentLoading,
}

/// How a submission that reached the collaborator ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the form has been reset and closed.
    Saved,
    /// The collaborator answered `false`; the draft is kept for another try.
    NotSaved,
    /// The collaborator raised; an alert is showing and the draft is kept.
    Failed,
}

/// State machine for one modal instance.
#[derive(Clone, Debug)]
pub struct ContentForm {
    kind: ContentKind,
    max_upload_bytes: u64,
    open: bool,
    editing: Option<ContentRecord>,
    draft: Draft,
    file: Option<SelectedFile>,
    /// Bumped on every pick and reset so late reads of an older file miss.
    file_pick: u64,
    tag_input: String,
    validation: FileValidation,
    submitting: bool,
    dialog: FormDialog,
    selection: Range,
}

impl ContentForm {
    #[must_use]
    pub fn new(kind: ContentKind, max_upload_bytes: u64) -> Self {
        Self {
            kind,
            max_upload_bytes,
            open: false,
            editing: None,
            draft: Draft::default(),
            file: None,
            file_pick: 0,
            tag_input: String::new(),
            validation: FileValidation::default(),
            submitting: false,
            dialog: FormDialog::None,
            selection: Range::default(),
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn pending_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Ticket of the pending file, for matching its contents once read.
    #[must_use]
    pub fn pending_pick(&self) -> Option<u64> {
        self.file.as_ref().map(|_| self.file_pick)
    }

    #[must_use]
    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    #[must_use]
    pub fn validation(&self) -> &FileValidation {
        &self.validation
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn dialog(&self) -> &FormDialog {
        &self.dialog
    }

    #[must_use]
    pub fn selection(&self) -> Range {
        self.selection
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Show the form, prefilled from `editing` or empty.
    pub fn open(&mut self, editing: Option<ContentRecord>) {
        self.draft = editing.as_ref().map(Draft::from_record).unwrap_or_default();
        self.editing = editing;
        self.clear_transient();
        self.open = true;
    }

    /// Hide the form. The draft is rebuilt on the next `open`. Refused while
    /// a save is in flight; returns whether the form is now closed.
    pub fn close(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.open = false;
        self.dialog = FormDialog::None;
        true
    }

    fn clear_transient(&mut self) {
        self.file = None;
        self.file_pick += 1;
        self.tag_input.clear();
        self.validation = FileValidation::default();
        self.dialog = FormDialog::None;
        self.selection = Range::default();
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.editing = None;
        self.clear_transient();
        self.open = false;
    }

    // ── Fields ──────────────────────────────────────────────────

    pub fn set_field(&mut self, edit: FieldEdit) {
        self.draft.apply(edit);
    }

    pub fn set_tag_input(&mut self, text: String) {
        self.tag_input = text;
    }

    /// Validate and store a picked file. A picker that returned nothing is a
    /// no-op. Returns the ticket to pass to [`Self::attach_contents`] when
    /// the file was accepted.
    pub fn pick_file(&mut self, picked: Option<SelectedFile>) -> Option<u64> {
        let file = picked?;
        self.select_file(file).then_some(self.file_pick)
    }

    /// Validate `file` (format first, then size). On failure the pending file
    /// is dropped and the validation holds exactly one message.
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        self.file_pick += 1;
        match validate_attachment(&file.name, file.size, self.max_upload_bytes) {
            Ok(kind) => {
                self.validation = FileValidation::default();
                self.draft.attachment_kind = Some(kind);
                self.file = Some(file);
                true
            }
            Err(err) => {
                log::debug!("rejected attachment {}: {err}", file.name);
                self.reject_file(&err);
                false
            }
        }
    }

    /// Fill in the bytes of the pending file once the browser has read it.
    /// Ignored when `pick` is stale or the contents are already there.
    pub fn attach_contents(&mut self, pick: u64, mime: String, data: Vec<u8>) -> bool {
        if pick != self.file_pick {
            return false;
        }
        match &mut self.file {
            Some(file) if !file.is_loaded() => {
                file.mime = mime;
                file.data = Some(data);
                true
            }
            _ => false,
        }
    }

    /// The browser could not read the file behind `pick`: drop it and show
    /// why. Ignored when `pick` is stale.
    pub fn contents_failed(&mut self, pick: u64) -> bool {
        if pick != self.file_pick || self.file.is_none() {
            return false;
        }
        self.reject_file(&AttachmentError::Unreadable);
        true
    }

    fn reject_file(&mut self, err: &AttachmentError) {
        self.validation = FileValidation::failed(err);
        self.file = None;
        self.draft.attachment_kind =
            self.editing.as_ref().and_then(|r| r.tipo.as_deref()).and_then(AttachmentKind::from_wire);
    }

    /// Append a trimmed tag. Blank and duplicate tags are ignored; the input
    /// buffer is cleared only when the tag was added.
    pub fn add_tag(&mut self, text: &str) -> bool {
        let added = self.draft.push_tag(text);
        if added {
            self.tag_input.clear();
        }
        added
    }

    /// Add whatever is in the tag input buffer.
    pub fn add_tag_from_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.tag_input);
        let added = self.add_tag(&text);
        if !added {
            self.tag_input = text;
        }
        added
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.draft.remove_tag(tag)
    }

    // ── Rich-text body ──────────────────────────────────────────

    /// Record where the caret/selection sits in the body.
    pub fn set_selection(&mut self, range: Range) {
        self.selection = self.draft.body.clamp_range(range);
    }

    /// Apply a toolbar command at the current selection.
    pub fn apply_command(&mut self, command: &Command) {
        let edit = self.draft.body.apply(command, self.selection);
        self.draft.body = edit.document;
        self.selection = edit.selection;
    }

    /// Apply a typing/deletion event at the current selection.
    pub fn edit_body(&mut self, edit: BodyEdit) {
        let body = &self.draft.body;
        let result = match edit {
            BodyEdit::InsertText(text) => body.insert_text(self.selection, &text),
            BodyEdit::DeleteBackward => body.delete_backward(self.selection),
            BodyEdit::DeleteForward => body.delete_forward(self.selection),
            BodyEdit::InsertParagraph => body.split_block(self.selection),
        };
        self.draft.body = result.document;
        self.selection = result.selection;
    }

    /// Open the link URL prompt.
    pub fn request_link(&mut self) {
        self.dialog = FormDialog::LinkPrompt;
    }

    /// Apply the URL typed into the link prompt. Blank input cancels; a
    /// script URL replaces the prompt with an alert.
    pub fn confirm_link(&mut self, url: &str) {
        if url.trim().is_empty() {
            self.dialog = FormDialog::None;
            return;
        }
        match LinkTarget::parse(url) {
            Ok(target) => {
                self.dialog = FormDialog::None;
                self.apply_command(&Command::Link(target));
            }
            Err(err) => {
                log::warn!("link refused: {err}");
                self.dialog = FormDialog::Alert(MSG_UNSAFE_LINK.to_owned());
            }
        }
    }

    /// Close whatever dialog is showing.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = FormDialog::None;
    }

    // ── Submission ──────────────────────────────────────────────

    /// Check preconditions and mark the form as submitting.
    ///
    /// # Errors
    ///
    /// Returns the reason the save must not start. Every reason except
    /// [`SubmitRejection::AlreadySubmitting`] also opens an alert.
    pub fn begin_submit(&mut self) -> Result<SaveRequest, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        if self.draft.missing_required(self.kind) {
            self.dialog = FormDialog::Alert(MSG_REQUIRED_FIELDS.to_owned());
            return Err(SubmitRejection::MissingRequired);
        }
        if self.kind.is_training() && !self.is_editing() && self.file.is_none() {
            self.dialog = FormDialog::Alert(MSG_MISSING_ATTACHMENT.to_owned());
            return Err(SubmitRejection::MissingAttachment);
        }
        if self.file.as_ref().is_some_and(|f| !f.is_loaded()) {
            self.dialog = FormDialog::Alert(MSG_FILE_LOADING.to_owned());
            return Err(SubmitRejection::AttachmentLoading);
        }
        self.submitting = true;
        Ok(SaveRequest {
            kind: self.kind,
            editing_id: self.editing.as_ref().and_then(|r| r.id.clone()),
            payload: self.draft.to_payload(),
            file: self.file.clone(),
        })
    }

    /// Fold the collaborator's answer back in. Returns `None`, leaving the
    /// form untouched, when no save is in flight.
    pub fn finish_submit(&mut self, result: Result<bool, ApiError>) -> Option<SubmitOutcome> {
        if !self.submitting {
            log::warn!("ignoring save result for a {} form with no save in flight", self.kind.as_str());
            return None;
        }
        Some(self.settle(result))
    }

    fn settle(&mut self, result: Result<bool, ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(true) => {
                log::info!("{} saved", self.kind.as_str());
                self.reset();
                SubmitOutcome::Saved
            }
            Ok(false) => {
                log::warn!("{} save returned false; keeping draft", self.kind.as_str());
                SubmitOutcome::NotSaved
            }
            Err(err) => {
                log::error!("Erro ao salvar: {err}");
                self.dialog = FormDialog::Alert(MSG_SAVE_FAILED.to_owned());
                SubmitOutcome::Failed
            }
        }
    }

    /// Run a full submission against `saver`.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitRejection`] when the save never started.
    pub async fn submit(&mut self, saver: &dyn ContentSaver) -> Result<SubmitOutcome, SubmitRejection> {
        let request = self.begin_submit()?;
        let result = saver.save(&request).await;
        Ok(self.settle(result))
    }

    // ── View helpers ────────────────────────────────────────────

    /// Modal title, e.g. `Adicionar Notícia` or `Editar Treinamento`.
    #[must_use]
    pub fn heading(&self) -> String {
        let verb = if self.is_editing() { "Editar" } else { "Adicionar" };
        format!("{verb} {}", self.kind.label())
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Salvando..."
        } else if self.is_editing() {
            "Atualizar"
        } else {
            "Salvar"
        }
    }

    /// The attachment is only mandatory when creating.
    #[must_use]
    pub fn file_required_marker(&self) -> &'static str {
        if self.is_editing() { "" } else { "*" }
    }

    /// Whether to tell the user an empty picker keeps the current file.
    #[must_use]
    pub fn shows_keep_file_hint(&self) -> bool {
        self.is_editing()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        let file_loading = self.file.as_ref().is_some_and(|f| !f.is_loaded());
        let invalid_new_file = self.kind.is_training() && !self.is_editing() && !self.validation.is_valid();
        !(self.submitting || file_loading || invalid_new_file)
    }
}
