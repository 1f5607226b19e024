//! Lenient HTML import.
//!
//! Stored bodies come from older editors and from pasted content, so the
//! reader accepts arbitrary markup and keeps what the document model can
//! express: block structure, list items, bold/italic/underline, links, colour
//! and size. Everything else is flattened to text. Unsafe links are dropped
//! but their text is kept.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use html_escape::decode_html_entities;

use crate::doc::{Block, BlockKind, Document, Run};
use crate::style::{Color, FontSize, LinkTarget, Style};

/// Parse stored HTML into a document. Never fails; unrecognised markup is
/// reduced to its text.
#[must_use]
pub fn from_html(html: &str) -> Document {
    let mut builder = Builder::default();
    for token in Tokenizer::new(html) {
        builder.push(token);
    }
    builder.finish()
}

// =============================================================
// Tokenizer
// =============================================================

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open { name: String, attrs: Vec<(String, String)>, self_closing: bool },
    Close(String),
}

struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Skip a markup declaration (`<!-- -->`, `<!DOCTYPE>`, `<?...?>`).
    fn skip_declaration(&mut self) {
        let rest = self.rest();
        let end = if rest.starts_with("<!--") {
            rest.find("-->").map_or(rest.len(), |i| i + 3)
        } else {
            rest.find('>').map_or(rest.len(), |i| i + 1)
        };
        self.pos += end;
    }

    fn read_tag(&mut self) -> Token<'a> {
        let rest = self.rest();
        let end = tag_end(rest);
        let inner = &rest[1..end - 1];
        self.pos += end.min(rest.len());

        if let Some(name) = inner.strip_prefix('/') {
            return Token::Close(tag_name(name));
        }
        let self_closing = inner.trim_end().ends_with('/');
        let inner = inner.trim_end().trim_end_matches('/');
        let name = tag_name(inner);
        let attrs = parse_attrs(&inner[name.len().min(inner.len())..]);
        Token::Open { name, attrs, self_closing }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return None;
            }
            if rest.starts_with('<') {
                match rest[1..].chars().next() {
                    Some('!' | '?') => {
                        self.skip_declaration();
                        continue;
                    }
                    Some(c) if c == '/' || c.is_ascii_alphabetic() => return Some(self.read_tag()),
                    _ => {}
                }
            }
            // Text up to the next tag-like `<`; a stray `<` is kept as text.
            let skip = usize::from(rest.starts_with('<'));
            let end = rest[skip..]
                .char_indices()
                .find(|&(i, c)| c == '<' && starts_markup(&rest[skip + i..]))
                .map_or(rest.len(), |(i, _)| skip + i);
            self.pos += end;
            return Some(Token::Text(&rest[..end]));
        }
    }
}

fn starts_markup(s: &str) -> bool {
    matches!(s[1..].chars().next(), Some(c) if c == '/' || c == '!' || c == '?' || c.is_ascii_alphabetic())
}

/// Byte index just past the closing `>` of the tag starting at `s[0]`,
/// ignoring `>` inside quoted attribute values. An unterminated tag runs to
/// the end of input, reported as `s.len() + 1`.
fn tag_end(s: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices().skip(1) {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return i + 1,
            None => {}
        }
    }
    s.len() + 1
}

fn tag_name(s: &str) -> String {
    s.trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn parse_attrs(s: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = s.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace() || *c == '/').is_some() {}
        let mut name = String::new();
        while let Some(c) = chars.next_if(|c| !c.is_whitespace() && *c != '=' && *c != '/') {
            name.push(c);
        }
        if name.is_empty() {
            return attrs;
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let mut value = String::new();
        if chars.next_if_eq(&'=').is_some() {
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            match chars.next_if(|c| *c == '"' || *c == '\'') {
                Some(quote) => {
                    for c in chars.by_ref() {
                        if c == quote {
                            break;
                        }
                        value.push(c);
                    }
                }
                None => {
                    while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                        value.push(c);
                    }
                }
            }
        }
        attrs.push((name.to_ascii_lowercase(), decode_html_entities(&value).into_owned()));
    }
}

// =============================================================
// Builder
// =============================================================

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre", "section", "article", "header", "footer",
];

const VOID_TAGS: &[&str] = &[
    "area", "base", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

const SKIPPED_TAGS: &[&str] = &["script", "style"];

#[derive(Default)]
struct Builder {
    blocks: Vec<Block>,
    runs: Vec<Run>,
    /// Inline formatting scopes: tag name and the style inside it.
    inline: Vec<(String, Style)>,
    /// Open `ul`/`ol` elements, innermost last.
    lists: Vec<BlockKind>,
    /// Kind of the `li` currently open, if any.
    item_kind: Option<BlockKind>,
    /// Name of the script/style element whose contents are being skipped.
    skipping: Option<String>,
    /// Whether the last character pushed was a collapsed space.
    pending_space: bool,
}

impl Builder {
    fn push(&mut self, token: Token<'_>) {
        if let Some(skipped) = &self.skipping {
            if matches!(&token, Token::Close(name) if name == skipped) {
                self.skipping = None;
            }
            return;
        }
        match token {
            Token::Text(text) => self.text(text),
            Token::Open { name, attrs, self_closing } => self.open(name, &attrs, self_closing),
            Token::Close(name) => self.close(&name),
        }
    }

    fn current_style(&self) -> Style {
        self.inline.last().map(|(_, s)| s.clone()).unwrap_or_default()
    }

    fn current_kind(&self) -> BlockKind {
        self.item_kind.unwrap_or(BlockKind::Paragraph)
    }

    fn text(&mut self, raw: &str) {
        let decoded = decode_html_entities(raw);
        let mut out = String::with_capacity(decoded.len());
        for c in decoded.chars() {
            if c.is_ascii_whitespace() {
                let at_start = self.runs.is_empty() && out.is_empty();
                if !self.pending_space && !at_start {
                    out.push(' ');
                    self.pending_space = true;
                }
            } else {
                out.push(c);
                self.pending_space = false;
            }
        }
        if !out.is_empty() {
            self.runs.push(Run::new(out, self.current_style()));
        }
    }

    fn open(&mut self, name: String, attrs: &[(String, String)], self_closing: bool) {
        let name_str = name.as_str();
        if SKIPPED_TAGS.contains(&name_str) {
            if !self_closing {
                self.skipping = Some(name);
            }
            return;
        }
        match name_str {
            "br" => self.line_break(),
            "ul" | "ol" => {
                self.flush();
                self.lists.push(if name_str == "ul" { BlockKind::BulletItem } else { BlockKind::NumberedItem });
            }
            "li" => {
                self.flush();
                self.item_kind = Some(self.lists.last().copied().unwrap_or(BlockKind::BulletItem));
            }
            _ if BLOCK_TAGS.contains(&name_str) => self.flush(),
            _ if VOID_TAGS.contains(&name_str) || self_closing => {}
            _ => {
                let mut style = self.current_style();
                apply_inline(&mut style, name_str, attrs);
                self.inline.push((name, style));
            }
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "ul" | "ol" => {
                self.flush();
                self.lists.pop();
                self.item_kind = None;
            }
            "li" => {
                self.flush();
                self.item_kind = None;
            }
            _ if BLOCK_TAGS.contains(&name) => self.flush(),
            _ => {
                if let Some(index) = self.inline.iter().rposition(|(tag, _)| tag == name) {
                    self.inline.truncate(index);
                }
            }
        }
    }

    /// End the current block. Nothing is emitted when no text was collected.
    fn flush(&mut self) {
        self.pending_space = false;
        let mut runs = std::mem::take(&mut self.runs);
        while let Some(last) = runs.last_mut() {
            let trimmed = last.text.trim_end_matches(' ').len();
            last.text.truncate(trimmed);
            if !last.text.is_empty() {
                break;
            }
            runs.pop();
        }
        if !runs.is_empty() {
            self.blocks.push(Block::new(self.current_kind(), runs));
        }
    }

    /// `<br>` ends the current line; on an empty line it stands for a blank
    /// block of its own.
    fn line_break(&mut self) {
        if self.runs.is_empty() {
            self.blocks.push(Block::new(self.current_kind(), Vec::new()));
            self.pending_space = false;
        } else {
            self.flush();
        }
    }

    fn finish(mut self) -> Document {
        self.flush();
        Document::from_blocks(self.blocks)
    }
}

/// Fold the formatting a tag implies into `style`.
fn apply_inline(style: &mut Style, tag: &str, attrs: &[(String, String)]) {
    match tag {
        "b" | "strong" => style.bold = true,
        "i" | "em" => style.italic = true,
        "u" | "ins" => style.underline = true,
        "a" => {
            if let Some(Ok(target)) = attr(attrs, "href").map(LinkTarget::parse) {
                style.link = Some(target);
            }
        }
        "font" => {
            if let Some(size) = attr(attrs, "size").and_then(parse_size_step) {
                style.size = Some(size);
            }
            if let Some(Ok(color)) = attr(attrs, "color").map(Color::parse) {
                style.color = Some(color);
            }
        }
        _ => {}
    }
    if let Some(css) = attr(attrs, "style") {
        apply_css(style, css);
    }
}

fn apply_css(style: &mut Style, css: &str) {
    for declaration in css.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match property.trim().to_ascii_lowercase().as_str() {
            "color" => {
                if let Ok(color) = Color::parse(value) {
                    style.color = Some(color);
                }
            }
            "font-size" => {
                if let Some(size) = FontSize::from_css_keyword(value) {
                    style.size = Some(size);
                }
            }
            "font-weight" => style.bold = value == "bold" || value.parse::<u16>().is_ok_and(|w| w >= 600),
            "font-style" => style.italic = value == "italic",
            "text-decoration" | "text-decoration-line" => {
                if value.contains("underline") {
                    style.underline = true;
                }
            }
            _ => {}
        }
    }
}

fn parse_size_step(raw: &str) -> Option<FontSize> {
    match raw.trim().parse::<u8>().map(FontSize::new) {
        Ok(Ok(size)) => Some(size),
        _ => None,
    }
}

fn attr<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
}
