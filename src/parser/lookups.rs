use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::Op,
    lexer::tokens::{Token, TokenKind},
};

/// Binary operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Assignment,
    Send,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Power,
}

impl BindingPower {
    /// Minimum power accepted on the right of an operator at this level.
    /// Assignment and power step down a level, which makes them
    /// right-associative.
    pub fn right_operand(&self) -> BindingPower {
        match self {
            BindingPower::Assignment => BindingPower::Default,
            BindingPower::Power => BindingPower::Multiplicative,
            other => *other,
        }
    }
}

lazy_static! {
    static ref BINARY_OPERATORS: HashMap<&'static str, (Op, BindingPower)> = {
        let mut table = HashMap::new();
        let mut led = |op: Op, binding_power: BindingPower| {
            table.insert(op.as_str(), (op, binding_power));
        };

        // Assignment
        led(Op::Asgn, BindingPower::Assignment);
        led(Op::AddAsgn, BindingPower::Assignment);
        led(Op::SubAsgn, BindingPower::Assignment);
        led(Op::MulAsgn, BindingPower::Assignment);
        led(Op::DivAsgn, BindingPower::Assignment);
        led(Op::ModAsgn, BindingPower::Assignment);
        led(Op::PowAsgn, BindingPower::Assignment);

        led(Op::Send, BindingPower::Send);

        // Logical
        led(Op::Or, BindingPower::LogicalOr);
        led(Op::And, BindingPower::LogicalAnd);

        // Equality and relational
        led(Op::Eq, BindingPower::Equality);
        led(Op::Ne, BindingPower::Equality);
        led(Op::Lt, BindingPower::Relational);
        led(Op::Gt, BindingPower::Relational);
        led(Op::Le, BindingPower::Relational);
        led(Op::Ge, BindingPower::Relational);

        // Additive and multiplicative
        led(Op::Add, BindingPower::Additive);
        led(Op::Sub, BindingPower::Additive);
        led(Op::Mul, BindingPower::Multiplicative);
        led(Op::Div, BindingPower::Multiplicative);
        led(Op::Mod, BindingPower::Multiplicative);

        led(Op::Pow, BindingPower::Power);

        table
    };
}

/// Prefix operators accepted by `Unary`.
pub const PREFIX_OPERATORS: [&str; 2] = ["!", "-"];

/// The binary operator spelled by `token`, with its binding power.
pub fn binary_operator(token: &Token) -> Option<(Op, BindingPower)> {
    if token.kind != TokenKind::Operator {
        return None;
    }

    BINARY_OPERATORS.get(token.value.as_str()).copied()
}
