// Minimal HTML writer for section markup. Every animated element carries a
// `data-motion` attribute naming its ElementId so JS can measure and update it.

use std::fmt::Write;

use crate::style::MotionStyle;
use crate::types::ElementId;

/// Opening tag description.
#[derive(Debug, Clone, Default)]
pub struct Tag {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    style: String,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Tag {
            name,
            ..Default::default()
        }
    }

    pub fn motion(self, id: &ElementId) -> Self {
        self.attr("data-motion", id.as_str())
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Link that opens in a new tab.
    pub fn external(self, href: &str) -> Self {
        self.attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }

    /// Append raw CSS declarations.
    pub fn css(mut self, css: &str) -> Self {
        self.style.push_str(css);
        self
    }

    /// Append a first-frame motion style.
    pub fn initial(self, style: &MotionStyle) -> Self {
        let css = style.to_css();
        self.css(&css)
    }
}

/// Accumulates HTML.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Markup::default()
    }

    fn open(&mut self, tag: &Tag) {
        let _ = write!(self.buf, "<{}", tag.name);
        for (name, value) in &tag.attrs {
            let _ = write!(self.buf, " {}=\"{}\"", name, escape(value));
        }
        if !tag.style.is_empty() {
            let _ = write!(self.buf, " style=\"{}\"", escape(&tag.style));
        }
        self.buf.push('>');
    }

    /// Element with children written by `body`.
    pub fn element(&mut self, tag: Tag, body: impl FnOnce(&mut Markup)) {
        self.open(&tag);
        body(self);
        let _ = write!(self.buf, "</{}>", tag.name);
    }

    /// Element containing only escaped text.
    pub fn text_element(&mut self, tag: Tag, text: &str) {
        self.element(tag, |m| m.text(text));
    }

    /// Void element such as `<img>` or `<br>`.
    pub fn void(&mut self, tag: Tag) {
        self.open(&tag);
    }

    pub fn text(&mut self, text: &str) {
        self.buf.push_str(&escape(text));
    }

    /// Trusted markup, e.g. inline SVG icons.
    pub fn raw(&mut self, html: &str) {
        self.buf.push_str(html);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
