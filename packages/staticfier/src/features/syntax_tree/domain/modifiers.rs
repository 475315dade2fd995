//! Declaration modifiers
//!
//! A modifier list keeps every token's leading text (`prefix`) so a
//! rewritten list prints back with the author's spacing and comments.

use serde::{Deserialize, Serialize};

use crate::shared::models::{NodeId, Span};

/// Modifier kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKind {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Synchronized,
    Native,
    Transient,
    Volatile,
    Strictfp,
    Default,
    Sealed,
    NonSealed,
    /// `@Foo`, `@Foo(bar = 1)`
    Annotation,
}

impl ModifierKind {
    /// Map a keyword token to its kind
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            "static" => Some(Self::Static),
            "final" => Some(Self::Final),
            "abstract" => Some(Self::Abstract),
            "synchronized" => Some(Self::Synchronized),
            "native" => Some(Self::Native),
            "transient" => Some(Self::Transient),
            "volatile" => Some(Self::Volatile),
            "strictfp" => Some(Self::Strictfp),
            "default" => Some(Self::Default),
            "sealed" => Some(Self::Sealed),
            "non-sealed" => Some(Self::NonSealed),
            _ => None,
        }
    }

    /// Source keyword (annotations have no fixed keyword)
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Strictfp => "strictfp",
            Self::Default => "default",
            Self::Sealed => "sealed",
            Self::NonSealed => "non-sealed",
            Self::Annotation => "@",
        }
    }
}

/// A single modifier token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub id: NodeId,
    pub kind: ModifierKind,
    /// Token text as written (`private`, `@Deprecated`)
    pub text: String,
    /// Source text between the previous modifier and this one
    pub prefix: String,
    /// `None` for modifiers created by a rewrite
    pub span: Option<Span>,
}

impl Modifier {
    /// Modifier read from source
    pub fn parsed(id: NodeId, kind: ModifierKind, text: impl Into<String>, prefix: impl Into<String>, span: Span) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
            prefix: prefix.into(),
            span: Some(span),
        }
    }

    /// Modifier created by a rewrite
    pub fn synthesized(kind: ModifierKind, prefix: impl Into<String>) -> Self {
        Self {
            id: NodeId::SYNTHETIC,
            kind,
            text: kind.keyword().to_string(),
            prefix: prefix.into(),
            span: None,
        }
    }
}

/// Ordered modifier list of one declaration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModifierList {
    pub items: Vec<Modifier>,
    /// Range covering the first through last modifier; `None` when the
    /// declaration has no modifiers
    pub span: Option<Span>,
    /// Where a modifier list would start (declaration start)
    pub anchor: Span,
}

impl ModifierList {
    pub fn new(items: Vec<Modifier>, span: Option<Span>, anchor: Span) -> Self {
        Self { items, span, anchor }
    }

    pub fn empty(anchor: Span) -> Self {
        Self {
            items: Vec::new(),
            span: None,
            anchor,
        }
    }

    pub fn has(&self, kind: ModifierKind) -> bool {
        self.items.iter().any(|m| m.kind == kind)
    }

    pub fn position(&self, kind: ModifierKind) -> Option<usize> {
        self.items.iter().position(|m| m.kind == kind)
    }

    pub fn count(&self, kind: ModifierKind) -> usize {
        self.items.iter().filter(|m| m.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.items.iter()
    }

    /// Keywords in order, annotations included by their text
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|m| m.text.as_str()).collect()
    }

    /// Print the list back to source text
    ///
    /// The first token never carries a prefix: the list span starts at it.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, modifier) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(&modifier.prefix);
            }
            out.push_str(&modifier.text);
        }
        out
    }
}
