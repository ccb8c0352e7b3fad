use crate::{
    ast::types::{TypeDecl, TypeParamDecl},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_reference, parser::Parser};

/// `Ident ( "<" TypeParamDecl ( "," TypeParamDecl )* ","? ">" )?`
pub fn parse_type_decl(parser: &mut Parser) -> Result<TypeDecl, Error> {
    let pos = parser.get_position();
    let name = parser.expect(TokenKind::Ident)?.value;

    let type_parameters = parser
        .attempt(|parser| {
            parser.expect_literal("<")?;
            let params = parser.separated(",", parse_type_param_decl)?;
            parser.optional_literal(",")?;
            parser.expect_literal(">")?;
            Ok(params)
        })?
        .unwrap_or_default();

    Ok(TypeDecl {
        pos,
        name,
        type_parameters,
    })
}

/// `Ident ( ":" Reference ( "," Reference )* )?`
///
/// The constraint list is greedy, `<T: A, B>` constrains `T` by both.
pub fn parse_type_param_decl(parser: &mut Parser) -> Result<TypeParamDecl, Error> {
    let pos = parser.get_position();
    let name = parser.expect(TokenKind::Ident)?.value;

    let constraints = parser
        .attempt(|parser| {
            parser.expect_literal(":")?;
            parser.separated(",", parse_reference)
        })?
        .unwrap_or_default();

    Ok(TypeParamDecl {
        pos,
        name,
        constraints,
    })
}
