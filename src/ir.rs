// Strongly-typed element tree produced by lowering. No schema types here.
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    H2,
    Form,
    Div,
    Label,
    Input,
    Button,
    Span,
    A,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::H2 => "h2",
            Tag::Form => "form",
            Tag::Div => "div",
            Tag::Label => "label",
            Tag::Input => "input",
            Tag::Button => "button",
            Tag::Span => "span",
            Tag::A => "a",
        }
    }
    /// Elements written without a closing tag.
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Input)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Ordered attribute bag; later writes of the same key replace earlier ones in place.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A run of sibling nodes with no container of its own.
pub type Fragment = Vec<Node>;

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTION
// ————————————————————————————————————————————————————————————————————————————

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self { tag, id: None, classes: Vec::new(), attrs: IndexMap::new(), children: Vec::new() }
    }
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
    /// Space separated class list, e.g. `"row mb-3"`.
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes = classes.split_whitespace().map(str::to_string).collect();
        self
    }
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::text(text));
        self
    }
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }
    pub fn extend(&mut self, children: impl IntoIterator<Item = Node>) {
        self.children.extend(children);
    }
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }
    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text { text } => out.push_str(text),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }
    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
    /// Depth-first search for an element with the given id, including `self`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.elements().find_map(|el| el.find_by_id(id))
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text { .. } => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ASSEMBLED TREE
// ————————————————————————————————————————————————————————————————————————————

/// Compiled form, ordered title → fields → buttons → references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledTree {
    pub title: Element,
    pub fields: Vec<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Fragment>,
}

impl AssembledTree {
    /// Body nodes of the form, in their fixed order.
    pub fn body(&self) -> impl Iterator<Item = &Node> {
        self.fields
            .iter()
            .flatten()
            .chain(self.buttons.iter().flatten())
            .chain(self.references.iter().flatten())
    }
    /// Title followed by a `form#form` element holding the body.
    pub fn to_nodes(&self) -> Fragment {
        let mut form = Element::new(Tag::Form).with_id("form");
        form.extend(self.body().cloned());
        vec![self.title.clone().into(), form.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_content_is_recursive() {
        let el = Element::new(Tag::Div)
            .with_text("a")
            .with_child(Element::new(Tag::Span).with_text("b"));
        assert_eq!(el.text_content(), "ab");
    }

    #[test]
    fn find_by_id_searches_descendants() {
        let el = Element::new(Tag::Div).with_child(
            Element::new(Tag::Div).with_child(Element::new(Tag::Input).with_id("deep")),
        );
        assert_eq!(el.find_by_id("deep").map(|e| e.tag), Some(Tag::Input));
        assert!(el.find_by_id("missing").is_none());
    }

    #[test]
    fn body_order_is_fields_then_buttons_then_references() {
        let marker = |s: &str| vec![Node::text(s)];
        let tree = AssembledTree {
            title: Element::new(Tag::H2),
            fields: vec![marker("f1"), marker("f2")],
            buttons: Some(marker("b")),
            references: Some(marker("r")),
        };
        let order: Vec<String> = tree
            .body()
            .map(|n| match n {
                Node::Text { text } => text.clone(),
                Node::Element(_) => String::new(),
            })
            .collect();
        assert_eq!(order, ["f1", "f2", "b", "r"]);
    }
}
