use crate::Position;

use super::{
    ast::{Decl, Decls, Modifiers},
    expressions::{Expr, Reference},
    statements::Block,
    types::TypeDecl,
};

/// `import alias? "path"`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub pos: Position,
    pub alias: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub pos: Position,
    pub type_decl: TypeDecl,
    pub members: Vec<EnumMember>,
}

impl Decls for EnumDecl {
    fn decls(&self) -> Vec<Decl<'_>> {
        self.members.iter().map(EnumMember::decl).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub pos: Position,
    pub modifiers: Modifiers,
    pub kind: EnumMemberKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnumMemberKind {
    Case(CaseDecl),
    Var(VarDecl),
    Func(FuncDecl),
    Class(ClassDecl),
    Enum(EnumDecl),
    Initialiser(InitialiserDecl),
}

impl EnumMember {
    pub fn decl(&self) -> Decl<'_> {
        match &self.kind {
            EnumMemberKind::Case(case) => Decl::Case(case),
            EnumMemberKind::Var(var) => Decl::Var(var),
            EnumMemberKind::Func(func) => Decl::Func(func),
            EnumMemberKind::Class(class) => Decl::Class(class),
            EnumMemberKind::Enum(enum_decl) => Decl::Enum(enum_decl),
            EnumMemberKind::Initialiser(init) => Decl::Initialiser(init),
        }
    }
}

/// An enum variant, `case Name(Payload)?`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDecl {
    pub pos: Position,
    pub name: String,
    pub payload: Option<TypeDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub pos: Position,
    pub type_decl: TypeDecl,
    pub members: Vec<ClassMember>,
}

impl Decls for ClassDecl {
    fn decls(&self) -> Vec<Decl<'_>> {
        self.members.iter().map(ClassMember::decl).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMember {
    pub pos: Position,
    pub modifiers: Modifiers,
    pub kind: ClassMemberKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMemberKind {
    Var(VarDecl),
    Func(FuncDecl),
    Class(ClassDecl),
    Enum(EnumDecl),
    Initialiser(InitialiserDecl),
}

impl ClassMember {
    pub fn decl(&self) -> Decl<'_> {
        match &self.kind {
            ClassMemberKind::Var(var) => Decl::Var(var),
            ClassMemberKind::Func(func) => Decl::Func(func),
            ClassMemberKind::Class(class) => Decl::Class(class),
            ClassMemberKind::Enum(enum_decl) => Decl::Enum(enum_decl),
            ClassMemberKind::Initialiser(init) => Decl::Initialiser(init),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitialiserDecl {
    pub pos: Position,
    pub parameters: Vec<Parameters>,
    pub throws: bool,
    pub body: Block,
}

/// One or more parameter names sharing a type, `a, b: T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub pos: Position,
    pub names: Vec<String>,
    pub type_ref: Reference,
}

/// `let a: T = x, b = y`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub pos: Position,
    pub vars: Vec<VarDeclAsgn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclAsgn {
    pub pos: Position,
    pub name: String,
    pub type_ref: Option<Reference>,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub pos: Position,
    pub name: String,
    pub parameters: Vec<Parameters>,
    pub throws: bool,
    pub return_type: Option<Reference>,
    pub body: Block,
}

impl FuncDecl {
    /// Parameter names flattened across groups, in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .flat_map(|group| group.names.iter().map(String::as_str))
    }
}
