//! Element tree → indented HTML text.

use serde_json::Value;

use crate::ir::{Element, Node};

pub struct Codegen {
    out: String,
    depth: usize,
    indent: usize,
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

impl Codegen {
    pub fn new() -> Self {
        Self::with_indent(2)
    }
    pub fn with_indent(indent: usize) -> Self {
        Self { out: String::new(), depth: 0, indent }
    }
    pub fn into_string(self) -> String {
        self.out
    }
    /// Raw line at the current depth.
    pub fn line(&mut self, text: &str) {
        self.pad();
        self.out.push_str(text);
        self.out.push('\n');
    }
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }
    pub fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }
    pub fn emit_all<'a>(&mut self, nodes: impl IntoIterator<Item = &'a Node>) {
        for node in nodes {
            self.emit(node);
        }
    }
    pub fn emit(&mut self, node: &Node) {
        match node {
            Node::Text { text } => self.line(&escape_text(text)),
            Node::Element(el) => self.emit_element(el),
        }
    }

    fn emit_element(&mut self, el: &Element) {
        let open = open_tag(el);
        if el.tag.is_void() {
            self.line(&open);
            return;
        }
        let close = format!("</{}>", el.tag.as_str());
        let text_only = el.children.iter().all(|c| matches!(c, Node::Text { .. }));
        if text_only {
            // `<label for="x">Name</label>` on one line
            self.line(&format!("{open}{}{close}", escape_text(&el.text_content())));
            return;
        }
        self.open(&open);
        self.emit_all(&el.children);
        self.close(&close);
    }

    fn pad(&mut self) {
        for _ in 0..self.depth * self.indent {
            self.out.push(' ');
        }
    }
}

fn open_tag(el: &Element) -> String {
    let mut s = format!("<{}", el.tag.as_str());
    if let Some(id) = &el.id {
        s.push_str(&format!(" id=\"{}\"", escape_attr(id)));
    }
    if !el.classes.is_empty() {
        s.push_str(&format!(" class=\"{}\"", escape_attr(&el.classes.join(" "))));
    }
    for (key, value) in &el.attrs {
        // the derived id and classes always win
        if key == "id" || key == "class" || !is_attr_name(key) {
            continue;
        }
        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => {
                s.push_str(&format!(" {key}"));
            }
            Value::String(text) => {
                s.push_str(&format!(" {key}=\"{}\"", escape_attr(text)));
            }
            Value::Number(n) => {
                s.push_str(&format!(" {key}=\"{n}\""));
            }
            Value::Array(_) | Value::Object(_) => {
                s.push_str(&format!(" {key}=\"{}\"", escape_attr(&value.to_string())));
            }
        }
    }
    s.push('>');
    s
}

/// Keys that can't be written as an attribute name (spaces, quotes, `=`…) are skipped.
fn is_attr_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '>' | '/' | '='))
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
