//! HTML rendering.
//!
//! Two flavours share one renderer: [`to_html`] produces the markup stored as
//! an article body, [`to_html_annotated`] adds `data-block` indices so the
//! editing surface can map DOM selections back onto document positions.
//! Nesting order is fixed (`a` > `span` > `strong` > `em` > `u`) so that
//! [`crate::parse::from_html`] reads the output back unchanged.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::doc::{BlockKind, Document, Run};

/// Storage markup. An empty document renders as the empty string.
#[must_use]
pub fn to_html(doc: &Document) -> String {
    if doc.is_empty() && doc.block_count() == 1 && doc.blocks()[0].kind == BlockKind::Paragraph {
        return String::new();
    }
    render(doc, false)
}

/// Editor-surface markup with a `data-block` attribute on every block.
#[must_use]
pub fn to_html_annotated(doc: &Document) -> String {
    render(doc, true)
}

fn render(doc: &Document, annotate: bool) -> String {
    let mut out = String::new();
    let mut open_list: Option<&'static str> = None;

    for (index, block) in doc.blocks().iter().enumerate() {
        let list = list_tag(block.kind);
        if open_list != list {
            if let Some(tag) = open_list {
                out.push_str(&format!("</{tag}>"));
            }
            if let Some(tag) = list {
                out.push_str(&format!("<{tag}>"));
            }
            open_list = list;
        }

        let tag = if list.is_some() { "li" } else { "p" };
        if annotate {
            out.push_str(&format!("<{tag} data-block=\"{index}\">"));
        } else {
            out.push_str(&format!("<{tag}>"));
        }
        if block.is_empty() {
            out.push_str("<br>");
        } else {
            for run in block.runs() {
                render_run(&mut out, run);
            }
        }
        out.push_str(&format!("</{tag}>"));
    }

    if let Some(tag) = open_list {
        out.push_str(&format!("</{tag}>"));
    }
    out
}

fn list_tag(kind: BlockKind) -> Option<&'static str> {
    match kind {
        BlockKind::Paragraph => None,
        BlockKind::BulletItem => Some("ul"),
        BlockKind::NumberedItem => Some("ol"),
    }
}

fn render_run(out: &mut String, run: &Run) {
    let style = &run.style;
    let mut closers: Vec<&str> = Vec::new();

    if let Some(link) = &style.link {
        out.push_str(&format!("<a href=\"{}\">", encode_double_quoted_attribute(link.as_str())));
        closers.push("</a>");
    }

    let mut css = Vec::new();
    if let Some(color) = style.color {
        css.push(format!("color: {color}"));
    }
    if let Some(size) = style.size {
        css.push(format!("font-size: {}", size.css_keyword()));
    }
    if !css.is_empty() {
        out.push_str(&format!("<span style=\"{}\">", css.join("; ")));
        closers.push("</span>");
    }

    for (on, open, close) in [
        (style.bold, "<strong>", "</strong>"),
        (style.italic, "<em>", "</em>"),
        (style.underline, "<u>", "</u>"),
    ] {
        if on {
            out.push_str(open);
            closers.push(close);
        }
    }

    out.push_str(&encode_text(&run.text));
    for close in closers.iter().rev() {
        out.push_str(close);
    }
}
