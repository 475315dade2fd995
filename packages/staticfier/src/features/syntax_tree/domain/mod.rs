//! Syntax tree domain models

mod declarations;
mod expressions;
mod modifiers;
mod references;
mod statements;

pub use declarations::{
    CompilationUnit, FieldDecl, ImportDecl, MethodDeclaration, Parameter, TypeDecl, TypeKind,
    TypeRef,
};
pub use expressions::{Expr, ExprKind, LambdaBody, MethodInvocation, NewClass};
pub use modifiers::{Modifier, ModifierKind, ModifierList};
pub use references::{FieldRef, Identifier, MethodRef, Owner, Resolution};
pub use statements::{
    Block, CaseLabel, CatchClause, Resource, Stmt, StmtKind, SwitchArm, SwitchBlock, VarDeclarator,
};
