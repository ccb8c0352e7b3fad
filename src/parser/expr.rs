use crate::{
    ast::expressions::{
        ArrayLiteral, Call, DictOrSetEntryLiteral, DictOrSetLiteral, Expr, ExprKind, Literal,
        LiteralKind, Op, Reference, ReferenceNext, ReferenceNextKind, Terminal, TerminalKind,
        Unary, UnaryKind,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, BindingPower, PREFIX_OPERATORS},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| parse_binary_expr(parser, BindingPower::Default))
}

/// Precedence climbing over `Unary ( BinaryOp Unary )*`. Only operators
/// binding tighter than `min` are folded into the result.
pub fn parse_binary_expr(parser: &mut Parser, min: BindingPower) -> Result<Expr, Error> {
    let unary = parse_unary(parser)?;
    let mut left = Expr {
        pos: unary.pos.clone(),
        kind: ExprKind::Unary(unary),
    };

    while let Some((op, binding_power)) = binary_operator(parser.current_token()) {
        if binding_power <= min {
            break;
        }

        parser.advance();
        let right = parse_binary_expr(parser, binding_power.right_operand())?;

        let pos = left.pos.clone();
        left = Expr {
            pos,
            kind: ExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
        };
    }

    Ok(left)
}

/// `( "!" | "-" ) Unary | Terminal`
pub fn parse_unary(parser: &mut Parser) -> Result<Unary, Error> {
    parser.choice(&[parse_prefix_unary, parse_terminal_unary])
}

fn parse_prefix_unary(parser: &mut Parser) -> Result<Unary, Error> {
    let pos = parser.get_position();
    let op = match parser.expect_one_of(&PREFIX_OPERATORS)?.value.as_str() {
        "!" => Op::Not,
        _ => Op::Sub,
    };
    let operand = parser.nested(parse_unary)?;

    Ok(Unary {
        pos,
        kind: UnaryKind::Prefix {
            op,
            operand: Box::new(operand),
        },
    })
}

fn parse_terminal_unary(parser: &mut Parser) -> Result<Unary, Error> {
    let terminal = parse_terminal(parser)?;
    Ok(Unary {
        pos: terminal.pos.clone(),
        kind: UnaryKind::Terminal(terminal),
    })
}

/// `ArrayLiteral | DictOrSetLiteral | "(" Expr ")" | Literal | Reference`
pub fn parse_terminal(parser: &mut Parser) -> Result<Terminal, Error> {
    let pos = parser.get_position();
    let kind = parser.choice(&[
        |parser| Ok(TerminalKind::Array(parse_array_literal(parser)?)),
        |parser| Ok(TerminalKind::DictOrSet(parse_dict_or_set_literal(parser)?)),
        parse_paren_expr,
        |parser| Ok(TerminalKind::Literal(parse_literal(parser)?)),
        |parser| Ok(TerminalKind::Reference(parse_reference(parser)?)),
    ])?;

    Ok(Terminal { pos, kind })
}

fn parse_paren_expr(parser: &mut Parser) -> Result<TerminalKind, Error> {
    parser.expect_literal("(")?;
    let expr = parse_expr(parser)?;
    parser.expect_literal(")")?;
    Ok(TerminalKind::Paren(Box::new(expr)))
}

/// `Number | String`
pub fn parse_literal(parser: &mut Parser) -> Result<Literal, Error> {
    let pos = parser.get_position();
    let kind = parser.choice(&[parse_number, |parser| {
        Ok(LiteralKind::Str(parser.expect(TokenKind::String)?.value))
    }])?;

    Ok(Literal { pos, kind })
}

fn parse_number(parser: &mut Parser) -> Result<LiteralKind, Error> {
    let token = parser.expect(TokenKind::Number)?;
    // Digits past the f64 range parse to infinity rather than failing.
    match token.value.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(LiteralKind::Number(value)),
        _ => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}

/// `Ident ReferenceNext*`
pub fn parse_reference(parser: &mut Parser) -> Result<Reference, Error> {
    let pos = parser.get_position();
    let name = parser.expect(TokenKind::Ident)?.value;
    let next = parser.repeat(parse_reference_next)?;

    Ok(Reference { pos, name, next })
}

/// `"." Ident | "[" Expr "]" | Call`
fn parse_reference_next(parser: &mut Parser) -> Result<ReferenceNext, Error> {
    let pos = parser.get_position();
    let kind = parser.choice(&[
        |parser| {
            parser.expect_literal(".")?;
            let member = parser.expect(TokenKind::Ident)?.value;
            Ok(ReferenceNextKind::Member(member))
        },
        |parser| {
            parser.expect_literal("[")?;
            let index = parse_expr(parser)?;
            parser.expect_literal("]")?;
            Ok(ReferenceNextKind::Index(Box::new(index)))
        },
        |parser| Ok(ReferenceNextKind::Call(parse_call(parser)?)),
    ])?;

    Ok(ReferenceNext { pos, kind })
}

/// `"(" ( Expr ( "," Expr )* )? ","? ")"`
pub fn parse_call(parser: &mut Parser) -> Result<Call, Error> {
    let pos = parser.get_position();
    parser.expect_literal("(")?;
    let arguments = parser.optional_separated(",", parse_expr)?;
    parser.optional_literal(",")?;
    parser.expect_literal(")")?;

    Ok(Call { pos, arguments })
}

/// `"[" ( Expr ( "," Expr )* )? ","? "]"`
pub fn parse_array_literal(parser: &mut Parser) -> Result<ArrayLiteral, Error> {
    let pos = parser.get_position();
    parser.expect_literal("[")?;
    let elements = parser.optional_separated(",", parse_expr)?;
    parser.optional_literal(",")?;
    parser.expect_literal("]")?;

    Ok(ArrayLiteral { pos, elements })
}

/// `"{" ( Entry ( "," Entry )* )? ","? "}"`
pub fn parse_dict_or_set_literal(parser: &mut Parser) -> Result<DictOrSetLiteral, Error> {
    let pos = parser.get_position();
    parser.expect_literal("{")?;
    let entries = parser.optional_separated(",", parse_dict_or_set_entry)?;
    parser.optional_literal(",")?;
    parser.expect_literal("}")?;

    Ok(DictOrSetLiteral { pos, entries })
}

/// `Expr ( ":" Expr )?`
fn parse_dict_or_set_entry(parser: &mut Parser) -> Result<DictOrSetEntryLiteral, Error> {
    let pos = parser.get_position();
    let key = parse_expr(parser)?;
    let value = parser.attempt(|parser| {
        parser.expect_literal(":")?;
        parse_expr(parser)
    })?;

    Ok(DictOrSetEntryLiteral { pos, key, value })
}
