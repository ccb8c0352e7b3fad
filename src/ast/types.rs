use crate::Position;

use super::expressions::Reference;

/// A declared type name with optional type parameters, `Name<T, U: A>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub pos: Position,
    pub name: String,
    pub type_parameters: Vec<TypeParamDecl>,
}

impl TypeDecl {
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}

/// A type parameter and its constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParamDecl {
    pub pos: Position,
    pub name: String,
    pub constraints: Vec<Reference>,
}
