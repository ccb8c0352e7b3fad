use std::slice::Iter;

use crate::Position;

use super::{
    declarations::{ClassDecl, EnumDecl, FuncDecl, VarDecl},
    expressions::{Expr, Reference},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub pos: Position,
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub pos: Position,
    pub kind: StmtKind,
}

/// Statement alternatives, in the order the parser tries them.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Return(ReturnStmt),
    If(IfStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    Block(Block),
    VarDecl(VarDecl),
    FuncDecl(FuncDecl),
    ClassDecl(ClassDecl),
    EnumDecl(EnumDecl),
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub pos: Position,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub pos: Position,
    pub condition: Expr,
    pub main: Block,
    pub else_block: Option<Block>,
}

/// `for target in source { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub pos: Position,
    pub target: Reference,
    pub source: Expr,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub pos: Position,
    pub target: Expr,
    pub cases: Vec<CaseStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStmt {
    pub pos: Position,
    pub selector: CaseSelector,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseSelector {
    Default,
    Case(CaseSelect),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseSelect {
    pub pos: Position,
    pub kind: CaseSelectKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseSelectKind {
    EnumCase(EnumCase),
    Expr(Expr),
}

/// `.Name(binding)?` inside a switch case.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumCase {
    pub pos: Position,
    pub name: String,
    pub binding: Option<String>,
}
