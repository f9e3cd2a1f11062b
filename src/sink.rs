//! Everything that lives on the caller's side of the compiler: the display surface the tree is
//! attached to, the persistent error area, and the mask bindings collected during lowering.
use crate::codegen::{escape_text, Codegen};
use crate::error::FormError;
use crate::ir::{AssembledTree, Element, Node, Tag};
use crate::lower::{self, MaskHook};
use crate::source::{Preprocess, SchemaSource};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// A display surface. Callers always `clear` before attaching a rebuilt tree.
pub trait CompilationSink {
    fn clear(&mut self);
    fn attach(&mut self, tree: AssembledTree);
    /// Mask requests recorded while the attached tree was lowered.
    fn bind_masks(&mut self, _masks: MaskBindings) {}
}

/// Ordered `(element id, pattern)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskBindings(Vec<(String, String)>);

/// Failure messages, accumulated until reset.
#[derive(Debug, Clone, Default)]
pub struct ErrorArea {
    messages: Vec<String>,
}

/// Renders the attached tree as an HTML document (or a bare fragment).
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    tree: Option<AssembledTree>,
    masks: MaskBindings,
    pub fragment: bool,
    pub indent: Option<usize>,
}

/// Load → compile → attach loop around one sink.
pub struct Workbench<S> {
    pub sink: S,
    pub errors: ErrorArea,
    pub preprocess: Preprocess,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl MaskHook for MaskBindings {
    fn apply(&mut self, element_id: &str, pattern: &str) {
        self.0.push((element_id.to_string(), pattern.to_string()));
    }
}

impl MaskBindings {
    pub fn bindings(&self) -> &[(String, String)] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// jQuery mask plugin calls, one per binding.
    pub fn script_lines(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(id, pattern)| {
                format!("$({}).mask({});", js_string(&format!("#{id}")), js_string(pattern))
            })
            .collect()
    }
}

fn js_string(s: &str) -> String {
    // JSON string literals are valid JS; `</` is split so the script can't be closed early
    serde_json::Value::from(s).to_string().replace("</", "<\\/")
}

impl ErrorArea {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
    pub fn reset(&mut self) {
        self.messages.clear();
    }
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
    /// `div#invalid` with one span per message; `None` when there is nothing to show.
    pub fn to_element(&self) -> Option<Element> {
        if self.messages.is_empty() {
            return None;
        }
        let mut area = Element::new(Tag::Div).with_id("invalid");
        for message in &self.messages {
            area.push(Element::new(Tag::Span).with_text(message.as_str()));
        }
        Some(area)
    }
}

impl CompilationSink for HtmlPage {
    fn clear(&mut self) {
        self.tree = None;
        self.masks = MaskBindings::default();
    }
    fn attach(&mut self, tree: AssembledTree) {
        self.tree = Some(tree);
    }
    fn bind_masks(&mut self, masks: MaskBindings) {
        self.masks = masks;
    }
}

impl HtmlPage {
    /// Empty page; `indent` of `None` keeps the codegen default.
    pub fn new(fragment: bool, indent: Option<usize>) -> Self {
        Self { fragment, indent, ..Self::default() }
    }

    pub fn tree(&self) -> Option<&AssembledTree> {
        self.tree.as_ref()
    }
    pub fn masks(&self) -> &MaskBindings {
        &self.masks
    }

    pub fn render(&self, errors: &ErrorArea) -> String {
        let mut cg = match self.indent {
            Some(indent) => Codegen::with_indent(indent),
            None => Codegen::new(),
        };
        if self.fragment {
            self.render_body(&mut cg, errors);
            return cg.into_string();
        }
        let title = self
            .tree
            .as_ref()
            .map(|tree| tree.title.text_content())
            .unwrap_or_default();
        cg.line("<!DOCTYPE html>");
        cg.open("<html>");
        cg.open("<head>");
        cg.line("<meta charset=\"utf-8\">");
        cg.line(&format!("<title>{}</title>", escape_text(&title)));
        cg.close("</head>");
        cg.open("<body>");
        self.render_body(&mut cg, errors);
        cg.close("</body>");
        cg.close("</html>");
        cg.into_string()
    }

    fn render_body(&self, cg: &mut Codegen, errors: &ErrorArea) {
        let mut root = Element::new(Tag::Div).with_id("formRoot");
        if let Some(tree) = &self.tree {
            root.extend(tree.to_nodes());
        }
        cg.emit(&Node::from(root));
        if let Some(area) = errors.to_element() {
            cg.emit(&Node::from(area));
        }
        if !self.masks.is_empty() {
            cg.open("<script>");
            for line in self.masks.script_lines() {
                cg.line(&line);
            }
            cg.close("</script>");
        }
    }
}

impl<S: CompilationSink> Workbench<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, errors: ErrorArea::default(), preprocess: Preprocess::default() }
    }

    /// Clears the sink, then compiles `source` into it. A failure is also appended to the
    /// error area.
    pub fn load(&mut self, source: &SchemaSource) -> Result<(), FormError> {
        self.sink.clear();
        self.compile(source).inspect_err(|error| {
            log::error!("{error}");
            self.errors.push(error.to_string());
        })
    }

    /// The "clear form" action: empty surface, empty error area.
    pub fn reset(&mut self) {
        self.sink.clear();
        self.errors.reset();
    }

    fn compile(&mut self, source: &SchemaSource) -> Result<(), FormError> {
        let schema = source.load(&self.preprocess)?;
        let mut masks = MaskBindings::default();
        let tree = lower::assemble(&schema, &source.fallback_name(), &mut masks)?;
        log::info!(
            "{}: {} field(s), {} mask(s)",
            source.display_name(),
            tree.fields.len(),
            masks.bindings().len()
        );
        self.sink.attach(tree);
        self.sink.bind_masks(masks);
        Ok(())
    }
}
