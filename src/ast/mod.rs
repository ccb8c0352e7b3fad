/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The root node, modifiers and the Decl/Decls capability
/// - declarations: Import, enum, class, function, initialiser and variable declarations
/// - statements: Blocks and the statement alternatives
/// - expressions: Operators, expression trees, references and literals
/// - types: Declared type names and type parameters
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;
