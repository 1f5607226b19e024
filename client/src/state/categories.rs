//! Category choices offered by the selector.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use super::draft::ContentKind;
use crate::net::types::Category;

/// Names of the categories scoped to `kind`, in API order, without
/// duplicates. `current` is appended when it is set but unknown, so an edited
/// record never loses its category.
#[must_use]
pub fn options_for(all: &[Category], kind: ContentKind, current: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for category in all.iter().filter(|c| c.tipo == kind.collection()) {
        let name = category.nome.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }
    let current = current.trim();
    if !current.is_empty() && !names.iter().any(|n| n == current) {
        names.push(current.to_owned());
    }
    names
}

/// Validate a category typed into the "new category" box. Only kinds that
/// allow creation accept one.
#[must_use]
pub fn new_category(kind: ContentKind, raw: &str) -> Option<String> {
    let name = raw.trim();
    (kind.allows_category_creation() && !name.is_empty()).then(|| name.to_owned())
}
