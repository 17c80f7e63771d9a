//! Content tree → markup text rendering.
//!
//! This module provides pure rendering logic that turns a content tree into
//! markup source in one of two dialects. No I/O is performed here.

use serde::{Deserialize, Serialize};

use crate::model::{Kind, Node, Value};

use super::escape::{calculate_fence_length, calculate_inline_code_ticks, quote_string};

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// The host engine's own markup (`*bold*`, `_emph_`, `= Heading`).
    #[default]
    #[serde(alias = "typ")]
    Native,
    /// CommonMark (`**bold**`, `*emph*`, `# Heading`).
    #[serde(alias = "md")]
    Markdown,
}

/// Serialize a content tree to markup text.
///
/// `indent` is the number of spaces continuation lines start with; list,
/// enum, and term item bodies are rendered two spaces deeper than their
/// marker. Kinds without a dedicated rule fall back to their children, then
/// their body, then their `text` attribute, and otherwise render as nothing,
/// so this never fails.
///
/// # Examples
///
/// ```
/// use unveil::markup::{Dialect, serialize};
/// use unveil::model::Node;
///
/// let heading = Node::heading(2, Node::text("Results"));
/// assert_eq!(serialize(&heading, Dialect::Markdown, 0), "## Results\n");
/// assert_eq!(serialize(&heading, Dialect::Native, 0), "== Results\n");
/// ```
pub fn serialize(node: &Node, dialect: Dialect, indent: usize) -> String {
    let mut ctx = RenderContext::new(dialect);
    ctx.walk_node(node, indent);
    ctx.output
}

/// Rendering state (pure string accumulation).
struct RenderContext {
    dialect: Dialect,
    output: String,
}

impl RenderContext {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            output: String::new(),
        }
    }

    fn markdown(&self) -> bool {
        self.dialect == Dialect::Markdown
    }

    fn write_newline(&mut self, indent: usize) {
        self.output.push('\n');
        self.write_indent(indent);
    }

    fn write_indent(&mut self, indent: usize) {
        self.output.extend(std::iter::repeat_n(' ', indent));
    }

    fn walk_node(&mut self, node: &Node, indent: usize) {
        match node.kind() {
            Kind::Raw => self.write_raw(node, indent),

            Kind::Text if node.text_attr().is_some() => {
                let text = node.text_attr().unwrap_or_default();
                self.output.push_str(text);
            }

            Kind::ListItem => {
                self.output.push_str("- ");
                self.walk_body(node, indent + 2);
            }

            Kind::EnumItem => {
                self.output.push_str("+ ");
                self.walk_body(node, indent + 2);
            }

            Kind::TermItem => {
                self.output.push_str("/ ");
                if let Some(term) = node.attr("term") {
                    self.walk_value(term, indent);
                }
                self.output.push_str(": ");
                self.walk_body(node, indent + 2);
            }

            Kind::Linebreak => self.write_newline(indent),

            Kind::Parbreak => {
                self.output.push('\n');
                self.write_newline(indent);
            }

            Kind::Strong => {
                let marker = if self.markdown() { "**" } else { "*" };
                self.output.push_str(marker);
                self.walk_body(node, indent);
                self.output.push_str(marker);
            }

            Kind::Emph => {
                let marker = if self.markdown() { "*" } else { "_" };
                self.output.push_str(marker);
                self.walk_body(node, indent);
                self.output.push_str(marker);
            }

            Kind::Link if node.attr("dest").and_then(Value::as_str).is_some() => {
                let dest = node.attr("dest").and_then(Value::as_str).unwrap_or_default();
                if self.markdown() {
                    self.output.push('[');
                    self.walk_body(node, indent);
                    self.output.push_str("](");
                    self.output.push_str(dest);
                    self.output.push(')');
                } else {
                    self.output.push_str("#link(");
                    self.output.push_str(&quote_string(dest));
                    self.output.push_str(")[");
                    self.walk_body(node, indent);
                    self.output.push(']');
                }
            }

            Kind::Heading => {
                let marker = if self.markdown() { '#' } else { '=' };
                let depth = node.depth().unwrap_or(1).max(1) as usize;
                self.output.extend(std::iter::repeat_n(marker, depth));
                self.output.push(' ');
                self.walk_body(node, indent);
                self.output.push('\n');
            }

            Kind::Smartquote => {
                let double = node.attr("double").and_then(Value::as_bool).unwrap_or(true);
                self.output.push(if double { '"' } else { '\'' });
            }

            Kind::Element(name) if name == "space" => self.output.push(' '),

            _ => self.walk_fallback(node, indent),
        }
    }

    /// Children, then body, then the `text` attribute, then nothing.
    fn walk_fallback(&mut self, node: &Node, indent: usize) {
        if let Some(children) = node.children() {
            for child in children {
                self.walk_node(child, indent);
            }
        } else if let Some(body) = node.body() {
            self.walk_node(body, indent);
        } else if let Some(text) = node.attr("text") {
            self.walk_value(text, indent);
        }
    }

    fn walk_body(&mut self, node: &Node, indent: usize) {
        if let Some(body) = node.body() {
            self.walk_node(body, indent);
        }
    }

    fn walk_value(&mut self, value: &Value, indent: usize) {
        match value {
            Value::Str(s) => self.output.push_str(s),
            Value::Content(node) => self.walk_node(node, indent),
            _ => {}
        }
    }

    fn write_raw(&mut self, node: &Node, indent: usize) {
        let text = node.text_attr().unwrap_or_default();
        let block = node.attr("block").and_then(Value::as_bool).unwrap_or(false);

        if block {
            let fence: String = "`".repeat(calculate_fence_length(text, '`'));
            let lang = node.attr("lang").and_then(Value::as_str).unwrap_or_default();
            self.write_newline(indent);
            self.output.push_str(&fence);
            self.output.push_str(lang);
            for line in text.split('\n') {
                self.write_newline(indent);
                self.output.push_str(line);
            }
            self.write_newline(indent);
            self.output.push_str(&fence);
        } else {
            let ticks = "`".repeat(calculate_inline_code_ticks(text));
            let spacer = if text.starts_with('`') || text.ends_with('`') {
                " "
            } else {
                ""
            };
            self.output.push_str(&ticks);
            self.output.push_str(spacer);
            self.output.push_str(text);
            self.output.push_str(spacer);
            self.output.push_str(&ticks);
        }
    }
}
