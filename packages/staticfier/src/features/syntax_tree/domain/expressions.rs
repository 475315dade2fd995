//! Expression nodes
//!
//! A closed set of variants. Traversals match exhaustively so that a new
//! variant has to be handled everywhere before the crate compiles.

use crate::shared::models::{NodeId, Span};

use super::references::{Identifier, MethodRef};
use super::statements::{Block, SwitchBlock};

/// Expression node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub id: NodeId,
    pub span: Span,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(id: NodeId, span: Span, kind: ExprKind) -> Self {
        Self { id, span, kind }
    }

    /// Same node with a different kind (id and span are kept)
    pub fn with_kind(&self, kind: ExprKind) -> Self {
        Self {
            id: self.id,
            span: self.span,
            kind,
        }
    }

    pub fn is_this(&self) -> bool {
        matches!(self.kind, ExprKind::This)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// Numeric, string, char, boolean or null literal (text as written)
    Literal(String),
    /// Bare simple name
    Name(Identifier),
    /// A type in expression position (`String` in `String::valueOf`), or the
    /// qualifier a rewritten `this` becomes
    TypeName(String),
    This,
    /// `Outer.this`
    QualifiedThis(String),
    Super,
    FieldAccess {
        target: Box<Expr>,
        field: Identifier,
    },
    MethodInvocation(Box<MethodInvocation>),
    NewClass(Box<NewClass>),
    NewArray {
        element_type: String,
        dimensions: Vec<Expr>,
        initializer: Option<Vec<Expr>>,
    },
    ArrayInitializer(Vec<Expr>),
    ArrayAccess {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    Assign {
        target: Box<Expr>,
        operator: String,
        value: Box<Expr>,
    },
    Binary {
        lhs: Box<Expr>,
        operator: String,
        rhs: Box<Expr>,
    },
    Unary {
        operator: String,
        operand: Box<Expr>,
        postfix: bool,
    },
    Ternary {
        condition: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
    Cast {
        target_type: String,
        expr: Box<Expr>,
    },
    InstanceOf {
        expr: Box<Expr>,
        target_type: String,
        bindings: Vec<String>,
    },
    Lambda {
        params: Vec<String>,
        body: LambdaBody,
    },
    /// `target::name`
    MethodReference {
        target: Box<Expr>,
        name: String,
    },
    ClassLiteral(String),
    Parenthesized(Box<Expr>),
    Switch(Box<SwitchBlock>),
    /// Syntax the front end does not model (tree-sitter kind)
    Unsupported(String),
}

/// Method call `select.name(args)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInvocation {
    /// Explicit receiver; `None` for an implicit self-call
    pub select: Option<Expr>,
    pub name: String,
    pub args: Vec<Expr>,
    /// Resolved target method
    pub method: Option<MethodRef>,
}

/// Object creation `outer.new ClassName(args) { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub class_name: String,
    pub outer: Option<Expr>,
    pub args: Vec<Expr>,
    /// Anonymous class body present
    pub has_body: bool,
    /// Set by the resolver when the created type is an inner class whose
    /// enclosing instance is supplied implicitly
    pub captures_enclosing_instance: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LambdaBody {
    Expr(Box<Expr>),
    Block(Block),
}
