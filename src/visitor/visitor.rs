use std::cell::RefCell;

use crate::ast::{
    ast::{Ast, RootDecl},
    declarations::{
        CaseDecl, ClassDecl, ClassMember, EnumDecl, EnumMember, FuncDecl, ImportDecl,
        InitialiserDecl, Parameters, VarDecl, VarDeclAsgn,
    },
    expressions::{
        ArrayLiteral, Call, DictOrSetEntryLiteral, DictOrSetLiteral, Expr, Literal, Reference,
        ReferenceNext, Terminal, Unary,
    },
    statements::{
        Block, CaseSelect, CaseStmt, EnumCase, ForStmt, IfStmt, ReturnStmt, Stmt, SwitchStmt,
    },
    types::{TypeDecl, TypeParamDecl},
};

use super::node::Node;

/// Callback driven by [`visit_func`]. It receives each node together with the
/// continuation that descends into the node's children.
pub type VisitorFunc<'v, 'a, E> =
    dyn for<'w> Fn(Node<'a>, Next<'w, 'a, E>) -> Result<(), E> + 'v;

/// Continuation handed to a [`VisitorFunc`].
pub struct Next<'w, 'a, E> {
    node: Node<'a>,
    visitor: &'w VisitorFunc<'w, 'a, E>,
}

impl<'w, 'a, E> Next<'w, 'a, E> {
    /// Walks the children of the current node when `result` is `Ok`.
    /// An `Err` is returned untouched and the children are skipped.
    pub fn call(self, result: Result<(), E>) -> Result<(), E> {
        result?;

        for child in self.node.children() {
            visit_func(child, self.visitor)?;
        }

        Ok(())
    }

    pub fn node(&self) -> Node<'a> {
        self.node
    }
}

/// Depth-first traversal calling `visitor` for every node. The walk stops
/// at the first error and returns it.
pub fn visit_func<'a, E>(
    node: impl Into<Node<'a>>,
    visitor: &VisitorFunc<'_, 'a, E>,
) -> Result<(), E> {
    let node = node.into();
    visitor(node, Next { node, visitor })
}

/// Error returned from typed visitor methods.
#[derive(Debug, Clone, PartialEq)]
pub enum VisitError<E> {
    /// Skip the children of the current node and carry on with its siblings.
    TerminateRecursion,
    /// Stop the whole walk with an error.
    Abort(E),
}

impl<E> From<E> for VisitError<E> {
    fn from(error: E) -> Self {
        VisitError::Abort(error)
    }
}

pub type VisitResult<E> = Result<(), VisitError<E>>;

/// Typed traversal. Every method defaults to `Ok(())`, so implementors only
/// override the node types they care about.
pub trait Visitor<'a> {
    type Error;

    fn visit_ast(&mut self, _node: &'a Ast) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_root_decl(&mut self, _node: &'a RootDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_import_decl(&mut self, _node: &'a ImportDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_enum_decl(&mut self, _node: &'a EnumDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_enum_member(&mut self, _node: &'a EnumMember) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_case_decl(&mut self, _node: &'a CaseDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_class_decl(&mut self, _node: &'a ClassDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_class_member(&mut self, _node: &'a ClassMember) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_initialiser_decl(&mut self, _node: &'a InitialiserDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_type_decl(&mut self, _node: &'a TypeDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_type_param_decl(&mut self, _node: &'a TypeParamDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_parameters(&mut self, _node: &'a Parameters) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_var_decl(&mut self, _node: &'a VarDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_var_decl_asgn(&mut self, _node: &'a VarDeclAsgn) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_func_decl(&mut self, _node: &'a FuncDecl) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_stmt(&mut self, _node: &'a Stmt) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_block(&mut self, _node: &'a Block) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_return_stmt(&mut self, _node: &'a ReturnStmt) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_if_stmt(&mut self, _node: &'a IfStmt) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_for_stmt(&mut self, _node: &'a ForStmt) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_switch_stmt(&mut self, _node: &'a SwitchStmt) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_case_stmt(&mut self, _node: &'a CaseStmt) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_case_select(&mut self, _node: &'a CaseSelect) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_enum_case(&mut self, _node: &'a EnumCase) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_expr(&mut self, _node: &'a Expr) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_unary(&mut self, _node: &'a Unary) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_terminal(&mut self, _node: &'a Terminal) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_literal(&mut self, _node: &'a Literal) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_reference(&mut self, _node: &'a Reference) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_reference_next(&mut self, _node: &'a ReferenceNext) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_call(&mut self, _node: &'a Call) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_array_literal(&mut self, _node: &'a ArrayLiteral) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_dict_or_set_literal(
        &mut self,
        _node: &'a DictOrSetLiteral,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }
    fn visit_dict_or_set_entry_literal(
        &mut self,
        _node: &'a DictOrSetEntryLiteral,
    ) -> VisitResult<Self::Error> {
        Ok(())
    }
}

/// A visitor that accepts every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVisitor;

impl<'a> Visitor<'a> for DefaultVisitor {
    type Error = std::convert::Infallible;
}

/// Walks `node` depth-first, calling the matching `visit_*` method of
/// `visitor` for every node.
pub fn visit<'a, V>(node: impl Into<Node<'a>>, visitor: &mut V) -> Result<(), V::Error>
where
    V: Visitor<'a> + ?Sized,
{
    let visitor = RefCell::new(visitor);

    visit_func(node, &|node, next| {
        let result = dispatch(&mut **visitor.borrow_mut(), node);

        match result {
            Ok(()) => next.call(Ok(())),
            Err(VisitError::TerminateRecursion) => Ok(()),
            Err(VisitError::Abort(error)) => next.call(Err(error)),
        }
    })
}

fn dispatch<'a, V>(visitor: &mut V, node: Node<'a>) -> VisitResult<V::Error>
where
    V: Visitor<'a> + ?Sized,
{
    match node {
        Node::Ast(n) => visitor.visit_ast(n),
        Node::RootDecl(n) => visitor.visit_root_decl(n),
        Node::ImportDecl(n) => visitor.visit_import_decl(n),
        Node::EnumDecl(n) => visitor.visit_enum_decl(n),
        Node::EnumMember(n) => visitor.visit_enum_member(n),
        Node::CaseDecl(n) => visitor.visit_case_decl(n),
        Node::ClassDecl(n) => visitor.visit_class_decl(n),
        Node::ClassMember(n) => visitor.visit_class_member(n),
        Node::InitialiserDecl(n) => visitor.visit_initialiser_decl(n),
        Node::TypeDecl(n) => visitor.visit_type_decl(n),
        Node::TypeParamDecl(n) => visitor.visit_type_param_decl(n),
        Node::Parameters(n) => visitor.visit_parameters(n),
        Node::VarDecl(n) => visitor.visit_var_decl(n),
        Node::VarDeclAsgn(n) => visitor.visit_var_decl_asgn(n),
        Node::FuncDecl(n) => visitor.visit_func_decl(n),
        Node::Stmt(n) => visitor.visit_stmt(n),
        Node::Block(n) => visitor.visit_block(n),
        Node::ReturnStmt(n) => visitor.visit_return_stmt(n),
        Node::IfStmt(n) => visitor.visit_if_stmt(n),
        Node::ForStmt(n) => visitor.visit_for_stmt(n),
        Node::SwitchStmt(n) => visitor.visit_switch_stmt(n),
        Node::CaseStmt(n) => visitor.visit_case_stmt(n),
        Node::CaseSelect(n) => visitor.visit_case_select(n),
        Node::EnumCase(n) => visitor.visit_enum_case(n),
        Node::Expr(n) => visitor.visit_expr(n),
        Node::Unary(n) => visitor.visit_unary(n),
        Node::Terminal(n) => visitor.visit_terminal(n),
        Node::Literal(n) => visitor.visit_literal(n),
        Node::Reference(n) => visitor.visit_reference(n),
        Node::ReferenceNext(n) => visitor.visit_reference_next(n),
        Node::Call(n) => visitor.visit_call(n),
        Node::ArrayLiteral(n) => visitor.visit_array_literal(n),
        Node::DictOrSetLiteral(n) => visitor.visit_dict_or_set_literal(n),
        Node::DictOrSetEntryLiteral(n) => visitor.visit_dict_or_set_entry_literal(n),
    }
}
