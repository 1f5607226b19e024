//! The record being edited in the content form.
//!
//! DESIGN
//! ======
//! `Draft` is a plain value: the form controller owns one, user input merges
//! into it through typed [`FieldEdit`]s, and it converts to the wire payload
//! only at submit time. The article body is a `richtext::Document`, never raw
//! HTML, so formatting commands stay pure.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use richtext::Document;

use super::attachment::AttachmentKind;
use crate::net::types::{ContentPayload, ContentRecord};

/// Author used when a record has none.
pub const DEFAULT_AUTHOR: &str = "Administrador";

/// Which of the two content types the form is handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// News article with a rich-text body.
    #[default]
    News,
    /// Training material with an attached presentation.
    Training,
}

impl ContentKind {
    /// Singular wire name (`noticia` / `treinamento`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::News => "noticia",
            Self::Training => "treinamento",
        }
    }

    /// Plural collection name, used both as the category scope and as the
    /// API path segment.
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::News => "noticias",
            Self::Training => "treinamentos",
        }
    }

    /// Training categories may be created on the fly from the selector.
    #[must_use]
    pub fn allows_category_creation(self) -> bool {
        self == Self::Training
    }

    #[must_use]
    pub fn is_training(self) -> bool {
        self == Self::Training
    }

    /// Noun used in headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::News => "Notícia",
            Self::Training => "Treinamento",
        }
    }

    /// Confirmation shown on the page after a successful save.
    #[must_use]
    pub fn saved_notice(self) -> &'static str {
        match self {
            Self::News => "Notícia salva com sucesso.",
            Self::Training => "Treinamento salvo com sucesso.",
        }
    }
}

/// A single typed change to the draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEdit {
    Title(String),
    Category(String),
    Description(String),
    Author(String),
    Featured(bool),
    LogoUrl(String),
}

/// Form contents for one news or training item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub category: String,
    pub description: String,
    pub body: Document,
    pub author: String,
    pub featured: bool,
    /// Unique, non-blank, in insertion order.
    pub tags: Vec<String>,
    pub logo_url: String,
    /// Derived from the picked file, or carried over from the edited record.
    pub attachment_kind: Option<AttachmentKind>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            body: Document::default(),
            author: DEFAULT_AUTHOR.to_owned(),
            featured: false,
            tags: Vec::new(),
            logo_url: String::new(),
            attachment_kind: None,
        }
    }
}

impl Draft {
    /// Populate a draft from an existing record, field by field, falling back
    /// to the defaults for anything absent.
    #[must_use]
    pub fn from_record(record: &ContentRecord) -> Self {
        let category = [&record.categoria_nome, &record.categoria]
            .into_iter()
            .flatten()
            .find(|c| !c.is_empty())
            .cloned()
            .unwrap_or_default();
        let author = record.autor.clone().filter(|a| !a.is_empty()).unwrap_or_else(|| DEFAULT_AUTHOR.to_owned());

        let mut draft = Self {
            title: record.titulo.clone().unwrap_or_default(),
            category,
            description: record.descricao.clone().unwrap_or_default(),
            body: record.conteudo.as_deref().map(richtext::parse::from_html).unwrap_or_default(),
            author,
            featured: record.destaque.unwrap_or(false),
            tags: Vec::new(),
            logo_url: record.logo_url.clone().unwrap_or_default(),
            attachment_kind: record.tipo.as_deref().and_then(AttachmentKind::from_wire),
        };
        for tag in record.tags.iter().flatten() {
            draft.push_tag(tag);
        }
        draft
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Title(v) => self.title = v,
            FieldEdit::Category(v) => self.category = v,
            FieldEdit::Description(v) => self.description = v,
            FieldEdit::Author(v) => self.author = v,
            FieldEdit::Featured(v) => self.featured = v,
            FieldEdit::LogoUrl(v) => self.logo_url = v,
        }
    }

    /// Append `raw` trimmed. Returns `false` when it was blank or already
    /// present (exact, case-sensitive match).
    pub fn push_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Remove the first exact match. Returns whether anything was removed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` when a field the form marks as required is blank.
    #[must_use]
    pub fn missing_required(&self, kind: ContentKind) -> bool {
        let blank = |s: &str| s.trim().is_empty();
        blank(&self.title) || blank(&self.category) || (kind.is_training() && blank(&self.description))
    }

    /// Wire payload for the save endpoint.
    #[must_use]
    pub fn to_payload(&self) -> ContentPayload {
        ContentPayload {
            titulo: self.title.clone(),
            categoria: self.category.clone(),
            descricao: self.description.clone(),
            conteudo: richtext::html::to_html(&self.body),
            autor: self.author.clone(),
            destaque: self.featured,
            tags: self.tags.clone(),
            logo_url: self.logo_url.clone(),
            tipo: self.attachment_kind.map(|k| k.as_str().to_owned()),
        }
    }
}
