//! Traversal of the AST.
//!
//! - node: `Node`, a borrowed reference to any AST node, and its children
//! - visitor: the callback walk (`visit_func`) and the typed `Visitor` trait
//!   layered on top of it (`visit`)

pub mod node;
pub mod visitor;

pub use node::{Node, NodeKind};
pub use visitor::{
    visit, visit_func, DefaultVisitor, Next, VisitError, VisitResult, Visitor, VisitorFunc,
};
