//! Inline styling for text runs.
//!
//! `Style` is the full set of attributes a run can carry. The value types
//! (`FontSize`, `Color`, `LinkTarget`) validate on construction and on serde
//! deserialization, so a document can never hold an out-of-range size or a
//! script URL.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{BLOCKED_LINK_SCHEMES, FONT_SIZE_KEYWORDS, MAX_FONT_SIZE, MIN_FONT_SIZE};

/// Errors raised when building style values from user or stored input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("font size must be between 1 and 7, got {0}")]
    FontSize(u8),
    #[error("invalid colour: {0}")]
    Color(String),
    #[error("link target is empty")]
    EmptyLink,
    #[error("link scheme not allowed: {0}")]
    UnsafeLink(String),
}

/// Attributes applied to one run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font-size step, `None` for the body default.
    pub size: Option<FontSize>,
    /// Foreground colour, `None` for the body default.
    pub color: Option<Color>,
    /// Hyperlink the run points at.
    pub link: Option<LinkTarget>,
}

impl Style {
    /// Returns `true` if the run carries no attributes at all.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Copy of this style with every visual attribute removed. Links survive.
    #[must_use]
    pub fn without_formatting(&self) -> Self {
        Self { link: self.link.clone(), ..Self::default() }
    }
}

// =============================================================
// FontSize
// =============================================================

/// Font-size step in the classic 1–7 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FontSize(u8);

impl FontSize {
    /// Build a size step.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::FontSize`] when `step` is outside `1..=7`.
    pub fn new(step: u8) -> Result<Self, StyleError> {
        if (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&step) {
            Ok(Self(step))
        } else {
            Err(StyleError::FontSize(step))
        }
    }

    #[must_use]
    pub fn step(self) -> u8 {
        self.0
    }

    /// CSS `font-size` keyword used when rendering this step.
    #[must_use]
    pub fn css_keyword(self) -> &'static str {
        FONT_SIZE_KEYWORDS[usize::from(self.0 - MIN_FONT_SIZE)]
    }

    /// Inverse of [`FontSize::css_keyword`].
    #[must_use]
    pub fn from_css_keyword(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim().to_ascii_lowercase();
        FONT_SIZE_KEYWORDS
            .iter()
            .zip(MIN_FONT_SIZE..=MAX_FONT_SIZE)
            .find(|(k, _)| **k == keyword)
            .map(|(_, step)| Self(step))
    }
}

impl TryFrom<u8> for FontSize {
    type Error = StyleError;

    fn try_from(step: u8) -> Result<Self, Self::Error> {
        Self::new(step)
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

// =============================================================
// Color
// =============================================================

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB`, `#RRGGBB` or `rgb(r, g, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Color`] for anything else.
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let trimmed = raw.trim();
        parse_hex(trimmed)
            .or_else(|| parse_rgb_function(trimmed))
            .ok_or_else(|| StyleError::Color(trimmed.to_owned()))
    }

    #[must_use]
    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Canonical lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

fn parse_hex(raw: &str) -> Option<Color> {
    let hex = raw.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = hex_channel(&hex[0..1].repeat(2))?;
            let g = hex_channel(&hex[1..2].repeat(2))?;
            let b = hex_channel(&hex[2..3].repeat(2))?;
            Some(Color::rgb(r, g, b))
        }
        6 => {
            let r = hex_channel(&hex[0..2])?;
            let g = hex_channel(&hex[2..4])?;
            let b = hex_channel(&hex[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

fn hex_channel(digits: &str) -> Option<u8> {
    match u8::from_str_radix(digits, 16) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn decimal_channel(digits: &str) -> Option<u8> {
    match digits.parse::<u8>() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn parse_rgb_function(raw: &str) -> Option<Color> {
    let lower = raw.to_ascii_lowercase();
    let inner = lower.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut channels = inner.split(',').map(|part| decimal_channel(part.trim()));
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    if channels.next().is_some() {
        return None;
    }
    Some(Color::rgb(r, g, b))
}

// =============================================================
// LinkTarget
// =============================================================

/// A hyperlink destination that passed the scheme check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkTarget(String);

impl LinkTarget {
    /// Validate a URL typed by the user or read from stored markup.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::EmptyLink`] for blank input and
    /// [`StyleError::UnsafeLink`] for script-capable schemes.
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StyleError::EmptyLink);
        }
        // Browsers ignore embedded whitespace and control characters in the scheme.
        let squashed: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect::<String>()
            .to_ascii_lowercase();
        if let Some(scheme) = BLOCKED_LINK_SCHEMES.iter().find(|s| squashed.starts_with(**s)) {
            return Err(StyleError::UnsafeLink((*scheme).to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LinkTarget {
    type Error = StyleError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<LinkTarget> for String {
    fn from(link: LinkTarget) -> Self {
        link.0
    }
}
