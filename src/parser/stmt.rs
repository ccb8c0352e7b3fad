use crate::{
    ast::statements::{
        Block, CaseSelect, CaseSelectKind, CaseSelector, CaseStmt, EnumCase, ForStmt, IfStmt,
        ReturnStmt, Stmt, StmtKind, SwitchStmt,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    decl::{parse_class_decl, parse_enum_decl, parse_func_decl, parse_var_decl},
    expr::{parse_expr, parse_reference},
    parser::Parser,
};

/// Statement alternatives, tried in order. Expressions come last.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let pos = parser.get_position();
    let kind = parser.choice(&[
        |parser| Ok(StmtKind::Return(parse_return_stmt(parser)?)),
        |parser| Ok(StmtKind::If(parse_if_stmt(parser)?)),
        |parser| Ok(StmtKind::For(parse_for_stmt(parser)?)),
        |parser| Ok(StmtKind::Switch(parse_switch_stmt(parser)?)),
        |parser| Ok(StmtKind::Block(parse_block(parser)?)),
        |parser| Ok(StmtKind::VarDecl(parse_var_decl(parser)?)),
        |parser| Ok(StmtKind::FuncDecl(parse_func_decl(parser)?)),
        |parser| Ok(StmtKind::ClassDecl(parse_class_decl(parser)?)),
        |parser| Ok(StmtKind::EnumDecl(parse_enum_decl(parser)?)),
        |parser| Ok(StmtKind::Expression(parse_expr(parser)?)),
    ])?;

    Ok(Stmt { pos, kind })
}

/// `( Stmt ( ";" Stmt )* ";"? )?`
fn parse_stmt_list(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let statements = parser.optional_separated(";", parse_stmt)?;
    if !statements.is_empty() {
        parser.optional_literal(";")?;
    }
    Ok(statements)
}

/// `"{" ( Stmt ( ";" Stmt )* ";"? )? "}"`
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let pos = parser.get_position();
    parser.expect_literal("{")?;
    let statements = parser.nested(parse_stmt_list)?;
    parser.expect_literal("}")?;

    Ok(Block { pos, statements })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<ReturnStmt, Error> {
    let pos = parser.get_position();
    parser.expect_literal("return")?;
    let value = parser.attempt(parse_expr)?;

    Ok(ReturnStmt { pos, value })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<IfStmt, Error> {
    let pos = parser.get_position();
    parser.expect_literal("if")?;
    let condition = parse_expr(parser)?;
    let main = parse_block(parser)?;
    let else_block = parser.attempt(|parser| {
        parser.expect_literal("else")?;
        parse_block(parser)
    })?;

    Ok(IfStmt {
        pos,
        condition,
        main,
        else_block,
    })
}

/// `"for" Reference "in" Expr Block`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<ForStmt, Error> {
    let pos = parser.get_position();
    parser.expect_literal("for")?;
    let target = parse_reference(parser)?;
    parser.expect_literal("in")?;
    let source = parse_expr(parser)?;
    let body = parse_block(parser)?;

    Ok(ForStmt {
        pos,
        target,
        source,
        body,
    })
}

/// `"switch" Expr "{" CaseStmt* "}"`
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<SwitchStmt, Error> {
    let pos = parser.get_position();
    parser.expect_literal("switch")?;
    let target = parse_expr(parser)?;
    parser.expect_literal("{")?;
    let cases = parser.repeat(parse_case_stmt)?;
    parser.expect_literal("}")?;

    Ok(SwitchStmt { pos, target, cases })
}

/// `( "default" | "case" CaseSelect ) ":" ( Stmt ( ";" Stmt )* ";"? )?`
fn parse_case_stmt(parser: &mut Parser) -> Result<CaseStmt, Error> {
    let pos = parser.get_position();
    let selector = parser.choice(&[
        |parser| {
            parser.expect_literal("default")?;
            Ok(CaseSelector::Default)
        },
        |parser| {
            parser.expect_literal("case")?;
            Ok(CaseSelector::Case(parse_case_select(parser)?))
        },
    ])?;
    parser.expect_literal(":")?;
    let body = parse_stmt_list(parser)?;

    Ok(CaseStmt {
        pos,
        selector,
        body,
    })
}

/// `EnumCase | Expr`
fn parse_case_select(parser: &mut Parser) -> Result<CaseSelect, Error> {
    let pos = parser.get_position();
    let kind = parser.choice(&[
        |parser| Ok(CaseSelectKind::EnumCase(parse_enum_case(parser)?)),
        |parser| Ok(CaseSelectKind::Expr(parse_expr(parser)?)),
    ])?;

    Ok(CaseSelect { pos, kind })
}

/// `"." Ident ( "(" Ident ")" )?`
fn parse_enum_case(parser: &mut Parser) -> Result<EnumCase, Error> {
    let pos = parser.get_position();
    parser.expect_literal(".")?;
    let name = parser.expect(TokenKind::Ident)?.value;
    let binding = parser.attempt(|parser| {
        parser.expect_literal("(")?;
        let binding = parser.expect(TokenKind::Ident)?.value;
        parser.expect_literal(")")?;
        Ok(binding)
    })?;

    Ok(EnumCase { pos, name, binding })
}
