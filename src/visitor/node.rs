use std::fmt::Display;

use crate::{
    ast::{
        ast::{Ast, RootDecl},
        declarations::{
            CaseDecl, ClassDecl, ClassMember, EnumDecl, EnumMember, FuncDecl, ImportDecl,
            InitialiserDecl, Parameters, VarDecl, VarDeclAsgn,
        },
        expressions::{
            ArrayLiteral, Call, DictOrSetEntryLiteral, DictOrSetLiteral, Expr, ExprKind, Literal,
            Reference, ReferenceNext, ReferenceNextKind, Terminal, TerminalKind, Unary, UnaryKind,
        },
        statements::{
            Block, CaseSelect, CaseSelectKind, CaseSelector, CaseStmt, EnumCase, ForStmt, IfStmt,
            ReturnStmt, Stmt, StmtKind, SwitchStmt,
        },
        types::{TypeDecl, TypeParamDecl},
    },
    Position,
};

/// Declares `Node`, `NodeKind` and the `From<&T>` conversions for every
/// node type. Variants are named after the type they borrow.
macro_rules! define_nodes {
    ($($name:ident),* $(,)?) => {
        /// A borrowed reference to any AST node.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Node<'a> {
            $($name(&'a $name),)*
        }

        /// The type of a [`Node`], without the reference.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($name,)*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$name,)*];
        }

        impl<'a> Node<'a> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$name(_) => NodeKind::$name,)*
                }
            }

            pub fn position(&self) -> &'a Position {
                match *self {
                    $(Node::$name(node) => &node.pos,)*
                }
            }
        }

        $(
            impl<'a> From<&'a $name> for Node<'a> {
                fn from(node: &'a $name) -> Self {
                    Node::$name(node)
                }
            }
        )*
    };
}

define_nodes! {
    Ast,
    RootDecl,
    ImportDecl,
    EnumDecl,
    EnumMember,
    CaseDecl,
    ClassDecl,
    ClassMember,
    InitialiserDecl,
    TypeDecl,
    TypeParamDecl,
    Parameters,
    VarDecl,
    VarDeclAsgn,
    FuncDecl,
    Stmt,
    Block,
    ReturnStmt,
    IfStmt,
    ForStmt,
    SwitchStmt,
    CaseStmt,
    CaseSelect,
    EnumCase,
    Expr,
    Unary,
    Terminal,
    Literal,
    Reference,
    ReferenceNext,
    Call,
    ArrayLiteral,
    DictOrSetLiteral,
    DictOrSetEntryLiteral,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> Node<'a> {
    /// Immediate children in visit order. Absent optional children are
    /// left out.
    pub fn children(&self) -> Vec<Node<'a>> {
        let mut children: Vec<Node<'a>> = vec![];

        match *self {
            Node::Ast(ast) => children.extend(ast.declarations.iter().map(Node::from)),
            Node::RootDecl(root) => children.push(root.decl().node()),
            Node::ImportDecl(_) => {}
            Node::EnumDecl(enum_decl) => {
                children.push(Node::from(&enum_decl.type_decl));
                children.extend(enum_decl.members.iter().map(Node::from));
            }
            Node::EnumMember(member) => children.push(member.decl().node()),
            Node::CaseDecl(case) => children.extend(case.payload.iter().map(Node::from)),
            Node::ClassDecl(class) => {
                children.push(Node::from(&class.type_decl));
                children.extend(class.members.iter().map(Node::from));
            }
            Node::ClassMember(member) => children.push(member.decl().node()),
            Node::InitialiserDecl(init) => {
                children.extend(init.parameters.iter().map(Node::from));
                children.push(Node::from(&init.body));
            }
            Node::TypeDecl(type_decl) => {
                children.extend(type_decl.type_parameters.iter().map(Node::from))
            }
            Node::TypeParamDecl(param) => children.extend(param.constraints.iter().map(Node::from)),
            Node::Parameters(params) => children.push(Node::from(&params.type_ref)),
            Node::VarDecl(var) => children.extend(var.vars.iter().map(Node::from)),
            Node::VarDeclAsgn(asgn) => {
                children.extend(asgn.type_ref.iter().map(Node::from));
                children.extend(asgn.default.iter().map(Node::from));
            }
            Node::FuncDecl(func) => {
                children.extend(func.parameters.iter().map(Node::from));
                children.extend(func.return_type.iter().map(Node::from));
                children.push(Node::from(&func.body));
            }
            Node::Stmt(stmt) => children.push(match &stmt.kind {
                StmtKind::Return(ret) => Node::from(ret),
                StmtKind::If(if_stmt) => Node::from(if_stmt),
                StmtKind::For(for_stmt) => Node::from(for_stmt),
                StmtKind::Switch(switch) => Node::from(switch),
                StmtKind::Block(block) => Node::from(block),
                StmtKind::VarDecl(var) => Node::from(var),
                StmtKind::FuncDecl(func) => Node::from(func),
                StmtKind::ClassDecl(class) => Node::from(class),
                StmtKind::EnumDecl(enum_decl) => Node::from(enum_decl),
                StmtKind::Expression(expr) => Node::from(expr),
            }),
            Node::Block(block) => children.extend(block.statements.iter().map(Node::from)),
            Node::ReturnStmt(ret) => children.extend(ret.value.iter().map(Node::from)),
            Node::IfStmt(if_stmt) => {
                children.push(Node::from(&if_stmt.condition));
                children.push(Node::from(&if_stmt.main));
                children.extend(if_stmt.else_block.iter().map(Node::from));
            }
            Node::ForStmt(for_stmt) => {
                children.push(Node::from(&for_stmt.target));
                children.push(Node::from(&for_stmt.source));
                children.push(Node::from(&for_stmt.body));
            }
            Node::SwitchStmt(switch) => {
                children.push(Node::from(&switch.target));
                children.extend(switch.cases.iter().map(Node::from));
            }
            Node::CaseStmt(case) => {
                if let CaseSelector::Case(select) = &case.selector {
                    children.push(Node::from(select));
                }
                children.extend(case.body.iter().map(Node::from));
            }
            Node::CaseSelect(select) => children.push(match &select.kind {
                CaseSelectKind::EnumCase(enum_case) => Node::from(enum_case),
                CaseSelectKind::Expr(expr) => Node::from(expr),
            }),
            Node::EnumCase(_) => {}
            Node::Expr(expr) => match &expr.kind {
                ExprKind::Binary { left, right, .. } => {
                    children.push(Node::from(&**left));
                    children.push(Node::from(&**right));
                }
                ExprKind::Unary(unary) => children.push(Node::from(unary)),
            },
            Node::Unary(unary) => children.push(match &unary.kind {
                UnaryKind::Prefix { operand, .. } => Node::from(&**operand),
                UnaryKind::Terminal(terminal) => Node::from(terminal),
            }),
            Node::Terminal(terminal) => children.push(match &terminal.kind {
                TerminalKind::Array(array) => Node::from(array),
                TerminalKind::DictOrSet(dict) => Node::from(dict),
                TerminalKind::Paren(expr) => Node::from(&**expr),
                TerminalKind::Literal(literal) => Node::from(literal),
                TerminalKind::Reference(reference) => Node::from(reference),
            }),
            Node::Literal(_) => {}
            Node::Reference(reference) => children.extend(reference.next.iter().map(Node::from)),
            Node::ReferenceNext(next) => match &next.kind {
                ReferenceNextKind::Member(_) => {}
                ReferenceNextKind::Index(expr) => children.push(Node::from(&**expr)),
                ReferenceNextKind::Call(call) => children.push(Node::from(call)),
            },
            Node::Call(call) => children.extend(call.arguments.iter().map(Node::from)),
            Node::ArrayLiteral(array) => children.extend(array.elements.iter().map(Node::from)),
            Node::DictOrSetLiteral(dict) => children.extend(dict.entries.iter().map(Node::from)),
            Node::DictOrSetEntryLiteral(entry) => {
                children.push(Node::from(&entry.key));
                children.extend(entry.value.iter().map(Node::from));
            }
        }

        children
    }
}
