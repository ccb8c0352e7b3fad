use std::fmt::Display;

use crate::Position;

/// Operators, binary and unary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ModAsgn,
    Ge,
    Le,
    And,
    Or,
    Eq,
    Ne,
    AddAsgn,
    SubAsgn,
    MulAsgn,
    DivAsgn,
    PowAsgn,
    Sub,
    Asgn,
    Add,
    Mul,
    Div,
    Lt,
    Gt,
    Mod,
    Pow,
    Not,
    Send,
}

impl Op {
    pub const ALL: [Op; 23] = [
        Op::ModAsgn,
        Op::Ge,
        Op::Le,
        Op::And,
        Op::Or,
        Op::Eq,
        Op::Ne,
        Op::AddAsgn,
        Op::SubAsgn,
        Op::MulAsgn,
        Op::DivAsgn,
        Op::PowAsgn,
        Op::Sub,
        Op::Asgn,
        Op::Add,
        Op::Mul,
        Op::Div,
        Op::Lt,
        Op::Gt,
        Op::Mod,
        Op::Pow,
        Op::Not,
        Op::Send,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Op::ModAsgn => "%=",
            Op::Ge => ">=",
            Op::Le => "<=",
            Op::And => "&&",
            Op::Or => "||",
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::AddAsgn => "+=",
            Op::SubAsgn => "-=",
            Op::MulAsgn => "*=",
            Op::DivAsgn => "/=",
            Op::PowAsgn => "^=",
            Op::Sub => "-",
            Op::Asgn => "=",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Lt => "<",
            Op::Gt => ">",
            Op::Mod => "%",
            Op::Pow => "^",
            Op::Not => "!",
            Op::Send => "->",
        }
    }

    pub fn from_operator(text: &str) -> Option<Op> {
        Op::ALL.into_iter().find(|op| op.as_str() == text)
    }

    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            Op::Asgn
                | Op::AddAsgn
                | Op::SubAsgn
                | Op::MulAsgn
                | Op::DivAsgn
                | Op::ModAsgn
                | Op::PowAsgn
        )
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub pos: Position,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Binary {
        left: Box<Expr>,
        op: Op,
        right: Box<Expr>,
    },
    Unary(Unary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub pos: Position,
    pub kind: UnaryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnaryKind {
    /// `!x` or `-x`
    Prefix { op: Op, operand: Box<Unary> },
    Terminal(Terminal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    pub pos: Position,
    pub kind: TerminalKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TerminalKind {
    Array(ArrayLiteral),
    DictOrSet(DictOrSetLiteral),
    Paren(Box<Expr>),
    Literal(Literal),
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub pos: Position,
    pub kind: LiteralKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralKind {
    Number(f64),
    Str(String),
}

/// A name followed by member, index and call suffixes, `a.b[0](x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub pos: Position,
    pub name: String,
    pub next: Vec<ReferenceNext>,
}

impl Reference {
    /// The dotted path up to the first index or call suffix.
    pub fn path(&self) -> String {
        let mut path = self.name.clone();
        for next in &self.next {
            match &next.kind {
                ReferenceNextKind::Member(member) => {
                    path.push('.');
                    path.push_str(member);
                }
                _ => break,
            }
        }
        path
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceNext {
    pub pos: Position,
    pub kind: ReferenceNextKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceNextKind {
    Member(String),
    Index(Box<Expr>),
    Call(Call),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub pos: Position,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub pos: Position,
    pub elements: Vec<Expr>,
}

/// `{k: v, ...}` or `{a, b}`; entries without a value make a set.
#[derive(Debug, Clone, PartialEq)]
pub struct DictOrSetLiteral {
    pub pos: Position,
    pub entries: Vec<DictOrSetEntryLiteral>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictOrSetEntryLiteral {
    pub pos: Position,
    pub key: Expr,
    pub value: Option<Expr>,
}
