/*
 * syntax.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Parsing JavaScript and classifying the node shapes the rewriter cares about.

use crate::error::{TranspileError, TranspileResult};
use std::ops::Range;
use tree_sitter::{Node, Parser, Tree};
use weft_source_map::{OffsetIndex, SourceOffset, Span, offset_to_location};
use weft_treesitter_ast::first_error_node;

/// The original source text together with its byte/char offset index.
#[derive(Debug)]
pub struct SourceText<'s> {
    pub text: &'s str,
    index: OffsetIndex,
}

impl<'s> SourceText<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            text,
            index: OffsetIndex::new(text),
        }
    }

    pub fn char_offset(&self, byte: usize) -> SourceOffset {
        self.index.char_offset(byte)
    }

    pub fn span(&self, bytes: Range<usize>) -> Span {
        self.index.span(bytes)
    }

    pub fn slice(&self, bytes: Range<usize>) -> &'s str {
        &self.text[bytes]
    }

    pub fn node_text(&self, node: Node<'_>) -> &'s str {
        self.slice(node.byte_range())
    }

    /// 1-based line and column of a byte position.
    pub fn line_column(&self, byte: usize) -> (usize, usize) {
        offset_to_location(self.text, self.char_offset(byte))
            .map(|loc| (loc.row + 1, loc.column + 1))
            .unwrap_or((1, 1))
    }
}

/// Parse `source` as a JavaScript program.
///
/// Any `ERROR` or `MISSING` node makes the whole parse fail.
pub fn parse(source: &SourceText<'_>) -> TranspileResult<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_javascript::LANGUAGE.into())?;

    let Some(tree) = parser.parse(source.text, None) else {
        return Err(TranspileError::Parse {
            message: "tree-sitter produced no tree".to_string(),
            offset: 0,
            line: 1,
            column: 1,
        });
    };

    let root = tree.root_node();
    if root.has_error() {
        let node = first_error_node(root).unwrap_or(root);
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            format!("unexpected `{}`", excerpt(source.node_text(node)))
        };
        let (line, column) = source.line_column(node.start_byte());
        return Err(TranspileError::Parse {
            message,
            offset: source.char_offset(node.start_byte()),
            line,
            column,
        });
    }

    Ok(tree)
}

/// First line of `text`, shortened for an error message.
fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 24;
    let line = text.lines().next().unwrap_or_default().trim();
    if line.chars().count() > MAX_CHARS {
        let short: String = line.chars().take(MAX_CHARS).collect();
        format!("{short}...")
    } else {
        line.to_string()
    }
}

/// Top-level statements of a program, skipping comments and a hash-bang line.
pub fn top_level_statements<'tree>(root: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .filter(|node| !node.is_extra() && node.kind() != "hash_bang_line")
        .collect()
}

/// Named children that are not comments.
pub fn named_values<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
}

/// How a call's callee is spelled.
#[derive(Debug, Clone, Copy)]
pub enum Callee<'s> {
    /// `name(...)`
    Identifier(&'s str),
    /// `object.property(...)`
    Member { property: &'s str },
    /// Anything else (`f()()`, `(a || b)()`, ...)
    Other,
}

/// The pieces of a call expression rewrites reuse.
#[derive(Debug, Clone)]
pub struct CallParts<'tree> {
    pub call: Node<'tree>,
    pub function: Node<'tree>,
    pub arguments: Node<'tree>,
    /// Argument expressions, comments excluded
    pub values: Vec<Node<'tree>>,
}

impl CallParts<'_> {
    /// Byte range between the parentheses, or `None` for `()`.
    ///
    /// Comments count as content, so `(/* c */)` yields its inner range.
    pub fn inner_arguments(&self) -> Option<Range<usize>> {
        let range = self.arguments.byte_range();
        let inner = range.start + 1..range.end.saturating_sub(1);
        (inner.start < inner.end).then_some(inner)
    }
}

/// The node shapes the rewrite rules are defined over.
#[derive(Debug, Clone)]
pub enum NodeKind<'tree, 's> {
    /// ``tag`...` ``; `tag` is `None` for non-identifier tags such as `String.raw`
    TaggedTemplate {
        tag: Option<&'s str>,
        template: Node<'tree>,
    },
    /// `` `...` ``
    TemplateString { tagged: bool },
    /// `"..."` or `'...'`
    StringLiteral { quote: Quote },
    /// `callee(args)`
    Call {
        callee: Callee<'s>,
        parts: CallParts<'tree>,
        awaited: bool,
    },
    /// `label: body`
    LabeledStatement {
        label: &'s str,
        /// The labelled expression when the body is an expression statement
        expression: Option<Node<'tree>>,
    },
    Other,
}

/// Classify `node` into one of the shapes in [`NodeKind`].
pub fn classify<'tree, 's>(node: Node<'tree>, source: &SourceText<'s>) -> NodeKind<'tree, 's> {
    match node.kind() {
        "call_expression" => classify_call(node, source),
        "template_string" => NodeKind::TemplateString {
            tagged: is_tag_argument(node),
        },
        "string" => {
            let quote = if source.node_text(node).starts_with('"') {
                Quote::Double
            } else {
                Quote::Single
            };
            NodeKind::StringLiteral { quote }
        }
        "labeled_statement" => {
            let (Some(label), Some(body)) = (
                node.child_by_field_name("label"),
                node.child_by_field_name("body"),
            ) else {
                return NodeKind::Other;
            };
            let expression = if body.kind() == "expression_statement" {
                named_values(body).into_iter().next()
            } else {
                None
            };
            NodeKind::LabeledStatement {
                label: source.node_text(label),
                expression,
            }
        }
        _ => NodeKind::Other,
    }
}

fn classify_call<'tree, 's>(node: Node<'tree>, source: &SourceText<'s>) -> NodeKind<'tree, 's> {
    let (Some(function), Some(arguments)) = (
        node.child_by_field_name("function"),
        node.child_by_field_name("arguments"),
    ) else {
        return NodeKind::Other;
    };

    if arguments.kind() == "template_string" {
        let tag = (function.kind() == "identifier").then(|| source.node_text(function));
        return NodeKind::TaggedTemplate {
            tag,
            template: arguments,
        };
    }

    let callee = match function.kind() {
        "identifier" => Callee::Identifier(source.node_text(function)),
        "member_expression" => match function.child_by_field_name("property") {
            Some(property) => Callee::Member {
                property: source.node_text(property),
            },
            None => Callee::Other,
        },
        _ => Callee::Other,
    };
    let awaited = node
        .parent()
        .is_some_and(|parent| parent.kind() == "await_expression");

    NodeKind::Call {
        callee,
        parts: CallParts {
            call: node,
            function,
            values: named_values(arguments),
            arguments,
        },
        awaited,
    }
}

/// True when `template` is the quasi of a tagged template.
fn is_tag_argument(template: Node<'_>) -> bool {
    template.parent().is_some_and(|parent| {
        parent.kind() == "call_expression"
            && parent
                .child_by_field_name("arguments")
                .is_some_and(|arguments| arguments.id() == template.id())
    })
}

/// Raw text of a template's first quasi.
pub fn first_quasi<'s>(template: Node<'_>, source: &SourceText<'s>) -> &'s str {
    let range = template.byte_range();
    let end = named_values(template)
        .into_iter()
        .find(|child| child.kind() == "template_substitution")
        .map(|child| child.start_byte())
        .unwrap_or(range.end - 1);
    source.slice(range.start + 1..end)
}

/// Node kinds that can be the object of a member access without parentheses.
pub fn is_member_safe(kind: &str) -> bool {
    matches!(
        kind,
        "call_expression"
            | "member_expression"
            | "subscript_expression"
            | "identifier"
            | "parenthesized_expression"
            | "string"
            | "template_string"
            | "array"
            | "this"
            | "true"
            | "false"
            | "null"
            | "regex"
    )
}
