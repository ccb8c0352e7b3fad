use std::fmt::Display;

use crate::{visitor::Node, Position};

use super::declarations::{
    CaseDecl, ClassDecl, EnumDecl, FuncDecl, ImportDecl, InitialiserDecl, VarDecl,
};

/// Root of a parsed source buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    pub pos: Position,
    pub declarations: Vec<RootDecl>,
}

impl Ast {
    /// Finds the first root declaration with the given name.
    pub fn find_decl(&self, name: &str) -> Option<Decl<'_>> {
        self.decls()
            .into_iter()
            .find(|decl| decl.name() == Some(name))
    }
}

/// Declaration modifier keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Pub,
    Override,
    Static,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Modifier> {
        match keyword {
            "pub" => Some(Modifier::Pub),
            "override" => Some(Modifier::Override),
            "static" => Some(Modifier::Static),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Pub => "pub",
            Modifier::Override => "override",
            Modifier::Static => "static",
        }
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifiers in source order. Duplicates are kept; order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modifiers(pub Vec<Modifier>);

impl Modifiers {
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Modifier> {
        self.0.iter()
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct RootDecl {
    pub pos: Position,
    pub modifiers: Modifiers,
    pub kind: RootDeclKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RootDeclKind {
    Class(ClassDecl),
    Import(ImportDecl),
    Enum(EnumDecl),
    Var(VarDecl),
    Func(FuncDecl),
}

impl RootDecl {
    pub fn decl(&self) -> Decl<'_> {
        match &self.kind {
            RootDeclKind::Class(class) => Decl::Class(class),
            RootDeclKind::Import(import) => Decl::Import(import),
            RootDeclKind::Enum(enum_decl) => Decl::Enum(enum_decl),
            RootDeclKind::Var(var) => Decl::Var(var),
            RootDeclKind::Func(func) => Decl::Func(func),
        }
    }
}

/// Any node that can stand as a declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decl<'a> {
    Class(&'a ClassDecl),
    Import(&'a ImportDecl),
    Enum(&'a EnumDecl),
    Var(&'a VarDecl),
    Func(&'a FuncDecl),
    Case(&'a CaseDecl),
    Initialiser(&'a InitialiserDecl),
}

impl<'a> Decl<'a> {
    /// The declared name. Imports are named by alias, falling back to the
    /// imported path; variable groups by their first variable.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Decl::Class(class) => Some(&class.type_decl.name),
            Decl::Import(import) => Some(import.alias.as_deref().unwrap_or(&import.path)),
            Decl::Enum(enum_decl) => Some(&enum_decl.type_decl.name),
            Decl::Var(var) => var.vars.first().map(|asgn| asgn.name.as_str()),
            Decl::Func(func) => Some(&func.name),
            Decl::Case(case) => Some(&case.name),
            Decl::Initialiser(_) => None,
        }
    }

    pub fn position(&self) -> &'a Position {
        match *self {
            Decl::Class(class) => &class.pos,
            Decl::Import(import) => &import.pos,
            Decl::Enum(enum_decl) => &enum_decl.pos,
            Decl::Var(var) => &var.pos,
            Decl::Func(func) => &func.pos,
            Decl::Case(case) => &case.pos,
            Decl::Initialiser(init) => &init.pos,
        }
    }

    pub fn node(&self) -> Node<'a> {
        match *self {
            Decl::Class(class) => Node::ClassDecl(class),
            Decl::Import(import) => Node::ImportDecl(import),
            Decl::Enum(enum_decl) => Node::EnumDecl(enum_decl),
            Decl::Var(var) => Node::VarDecl(var),
            Decl::Func(func) => Node::FuncDecl(func),
            Decl::Case(case) => Node::CaseDecl(case),
            Decl::Initialiser(init) => Node::InitialiserDecl(init),
        }
    }
}

/// A node owning nested declarations.
pub trait Decls {
    /// Immediate child declarations, in source order.
    fn decls(&self) -> Vec<Decl<'_>>;
}

impl Decls for Ast {
    fn decls(&self) -> Vec<Decl<'_>> {
        self.declarations.iter().map(RootDecl::decl).collect()
    }
}
