//! Statement nodes

use crate::shared::models::{NodeId, Span};

use super::expressions::Expr;

/// `{ ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: NodeId,
    pub span: Span,
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(id: NodeId, span: Span, stmts: Vec<Stmt>) -> Self {
        Self { id, span, stmts }
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub id: NodeId,
    pub span: Span,
    pub kind: StmtKind,
}

impl Stmt {
    pub fn new(id: NodeId, span: Span, kind: StmtKind) -> Self {
        Self { id, span, kind }
    }

    pub fn with_kind(&self, kind: StmtKind) -> Self {
        Self {
            id: self.id,
            span: self.span,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    LocalVar {
        var_type: String,
        declarators: Vec<VarDeclarator>,
    },
    Expression(Expr),
    Block(Block),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    DoWhile {
        body: Box<Stmt>,
        condition: Expr,
    },
    For {
        init: Vec<Stmt>,
        condition: Option<Expr>,
        update: Vec<Expr>,
        body: Box<Stmt>,
    },
    ForEach {
        var_type: String,
        name: String,
        iterable: Expr,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
    Throw(Expr),
    Yield(Expr),
    Break(Option<String>),
    Continue(Option<String>),
    Try {
        resources: Vec<Resource>,
        body: Block,
        catches: Vec<CatchClause>,
        finally: Option<Block>,
    },
    Switch(SwitchBlock),
    Synchronized {
        lock: Expr,
        body: Block,
    },
    Labeled {
        label: String,
        body: Box<Stmt>,
    },
    Assert {
        condition: Expr,
        message: Option<Expr>,
    },
    /// Class, record, enum or interface declared inside a body (opaque)
    LocalClass(String),
    Empty,
    /// Syntax the front end does not model (tree-sitter kind)
    Unsupported(String),
}

/// `name = init` inside a local variable declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDeclarator {
    pub name: String,
    pub init: Option<Expr>,
    pub span: Span,
}

/// try-with-resources entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Declaration {
        var_type: String,
        name: String,
        init: Expr,
    },
    /// Effectively-final variable or field used as a resource
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchClause {
    pub param: String,
    pub types: Vec<String>,
    pub body: Block,
}

/// Switch statement or expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchBlock {
    pub selector: Expr,
    pub arms: Vec<SwitchArm>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchArm {
    pub labels: Vec<CaseLabel>,
    pub is_default: bool,
    pub guard: Option<Expr>,
    /// Statements of a `case X:` group, or the single statement of a `case X ->` rule
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseLabel {
    Expr(Expr),
    /// Type or record pattern; introduces bindings into the arm
    Pattern {
        pattern_type: String,
        bindings: Vec<String>,
    },
}
