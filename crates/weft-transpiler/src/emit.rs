/*
 * emit.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Replacement nodes and their serialization.
//!
//! The tree-sitter tree is never mutated. Rewrites are recorded as
//! byte-range replacements in a [`Splice`]; serializing a range copies the
//! original text and renders each replacement in place. A replacement may
//! embed original source through [`Emit::Source`], which is rendered with
//! any replacements nested inside it, so wrapping rewrites compose with the
//! rewrites of the subtrees they wrap.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::ops::Range;

/// A synthesized JavaScript expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Emit {
    /// A bare identifier, emitted verbatim
    Identifier(String),
    /// A double-quoted string literal
    Str(String),
    /// A single-quoted string literal, used for widget IDs
    IdLiteral(String),
    Number(usize),
    /// Original source text, with nested replacements applied
    Source(Range<usize>),
    Parens(Box<Emit>),
    Call {
        callee: Box<Emit>,
        arguments: Arguments,
    },
    Member {
        object: Box<Emit>,
        property: String,
    },
    /// `await <argument>`
    Await(Box<Emit>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Arguments {
    List(Vec<Emit>),
    /// A synthesized first argument followed by the original argument text
    Prefixed {
        prefix: Box<Emit>,
        rest: Option<Range<usize>>,
    },
}

impl Emit {
    pub fn call(callee: Emit, arguments: Vec<Emit>) -> Self {
        Emit::Call {
            callee: Box::new(callee),
            arguments: Arguments::List(arguments),
        }
    }

    pub fn prefixed_call(callee: Emit, prefix: Emit, rest: Option<Range<usize>>) -> Self {
        Emit::Call {
            callee: Box::new(callee),
            arguments: Arguments::Prefixed {
                prefix: Box::new(prefix),
                rest,
            },
        }
    }

    pub fn method(object: Emit, property: &str, arguments: Vec<Emit>) -> Self {
        let member = Emit::Member {
            object: Box::new(object),
            property: property.to_string(),
        };
        Emit::call(member, arguments)
    }

    pub fn parens(self) -> Self {
        Emit::Parens(Box::new(self))
    }
}

/// Key ordering puts outer replacements before the ones nested in them.
type EditKey = (usize, Reverse<usize>);

/// Byte-range replacements over one source text.
#[derive(Debug, Default)]
pub struct Splice {
    edits: BTreeMap<EditKey, Emit>,
}

impl Splice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `range` with `emit`.
    pub fn replace(&mut self, range: Range<usize>, emit: Emit) {
        self.edits.insert((range.start, Reverse(range.end)), emit);
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Serialize `range` of `source` with all replacements applied.
    pub fn render(&self, source: &str, range: Range<usize>) -> String {
        let mut out = String::with_capacity(range.len());
        self.render_range(source, range, None, &mut out);
        out
    }

    fn render_range(
        &self,
        source: &str,
        range: Range<usize>,
        owner: Option<EditKey>,
        out: &mut String,
    ) {
        let mut cursor = range.start;
        let lower = (range.start, Reverse(usize::MAX));
        for (&key, emit) in self.edits.range(lower..) {
            let (start, Reverse(end)) = key;
            if start >= range.end {
                break;
            }
            // Nested in an edit already rendered, the edit being rendered,
            // or straddling the range boundary
            if start < cursor || Some(key) == owner || end > range.end {
                continue;
            }
            out.push_str(&source[cursor..start]);
            self.render_emit(source, emit, key, out);
            cursor = end;
        }
        out.push_str(&source[cursor..range.end]);
    }

    fn render_emit(&self, source: &str, emit: &Emit, owner: EditKey, out: &mut String) {
        match emit {
            Emit::Identifier(name) => out.push_str(name),
            Emit::Str(value) => out.push_str(&json_string(value)),
            Emit::IdLiteral(value) => {
                out.push('\'');
                for ch in value.chars() {
                    if ch == '\'' || ch == '\\' {
                        out.push('\\');
                    }
                    out.push(ch);
                }
                out.push('\'');
            }
            Emit::Number(value) => out.push_str(&value.to_string()),
            Emit::Source(range) => self.render_range(source, range.clone(), Some(owner), out),
            Emit::Parens(inner) => {
                out.push('(');
                self.render_emit(source, inner, owner, out);
                out.push(')');
            }
            Emit::Call { callee, arguments } => {
                self.render_emit(source, callee, owner, out);
                out.push('(');
                match arguments {
                    Arguments::List(items) => {
                        for (i, item) in items.iter().enumerate() {
                            if i > 0 {
                                out.push_str(", ");
                            }
                            self.render_emit(source, item, owner, out);
                        }
                    }
                    Arguments::Prefixed { prefix, rest } => {
                        self.render_emit(source, prefix, owner, out);
                        if let Some(rest) = rest {
                            let mut tail = String::new();
                            self.render_range(source, rest.clone(), Some(owner), &mut tail);
                            let tail = tail.trim_start();
                            if !tail.is_empty() {
                                out.push_str(", ");
                                out.push_str(tail);
                            }
                        }
                    }
                }
                out.push(')');
            }
            Emit::Member { object, property } => {
                self.render_emit(source, object, owner, out);
                out.push('.');
                out.push_str(property);
            }
            Emit::Await(argument) => {
                out.push_str("await ");
                self.render_emit(source, argument, owner, out);
            }
        }
    }
}

/// `value` as a double-quoted JavaScript string literal.
pub fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
