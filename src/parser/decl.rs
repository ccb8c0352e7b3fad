use crate::{
    ast::{
        ast::{Ast, Modifier, Modifiers, RootDecl, RootDeclKind},
        declarations::{
            CaseDecl, ClassDecl, ClassMember, ClassMemberKind, EnumDecl, EnumMember,
            EnumMemberKind, FuncDecl, ImportDecl, InitialiserDecl, Parameters, VarDecl,
            VarDeclAsgn,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_reference},
    parser::{Parser, Rule},
    stmt::parse_block,
    types::parse_type_decl,
};

/// `RootDecl* EOF`
pub fn parse_ast(parser: &mut Parser) -> Result<Ast, Error> {
    let pos = parser.get_position();
    let declarations = parser.repeat(parse_root_decl)?;
    parser.expect(TokenKind::EOF)?;

    Ok(Ast { pos, declarations })
}

/// A declaration followed by an optional `;`. Variables require it.
pub fn parse_root_decl(parser: &mut Parser) -> Result<RootDecl, Error> {
    let pos = parser.get_position();
    let modifiers = parse_modifiers(parser)?;
    let kind = parser.choice(&[
        |parser| {
            let class = parse_class_decl(parser)?;
            parser.optional_literal(";")?;
            Ok(RootDeclKind::Class(class))
        },
        |parser| {
            let import = parse_import_decl(parser)?;
            parser.optional_literal(";")?;
            Ok(RootDeclKind::Import(import))
        },
        |parser| {
            let enum_decl = parse_enum_decl(parser)?;
            parser.optional_literal(";")?;
            Ok(RootDeclKind::Enum(enum_decl))
        },
        |parser| {
            let var = parse_var_decl(parser)?;
            parser.expect_literal(";")?;
            Ok(RootDeclKind::Var(var))
        },
        |parser| {
            let func = parse_func_decl(parser)?;
            parser.optional_literal(";")?;
            Ok(RootDeclKind::Func(func))
        },
    ])?;

    Ok(RootDecl {
        pos,
        modifiers,
        kind,
    })
}

fn parse_modifiers(parser: &mut Parser) -> Result<Modifiers, Error> {
    let tokens = parser.repeat(|parser| parser.expect(TokenKind::Modifier))?;

    Ok(Modifiers(
        tokens
            .iter()
            .filter_map(|token| Modifier::from_keyword(&token.value))
            .collect(),
    ))
}

/// `"import" Ident? String`
pub fn parse_import_decl(parser: &mut Parser) -> Result<ImportDecl, Error> {
    let pos = parser.get_position();
    parser.expect_literal("import")?;
    let alias = parser.attempt(|parser| Ok(parser.expect(TokenKind::Ident)?.value))?;
    let path = parser.expect(TokenKind::String)?.value;

    Ok(ImportDecl { pos, alias, path })
}

/// `( member ( ";" member )* ";"? )?` between braces.
fn parse_members<T>(parser: &mut Parser, member: Rule<T>) -> Result<Vec<T>, Error> {
    parser.expect_literal("{")?;
    let members = parser.nested(|parser| parser.optional_separated(";", member))?;
    if !members.is_empty() {
        parser.optional_literal(";")?;
    }
    parser.expect_literal("}")?;

    Ok(members)
}

/// `"enum" TypeDecl "{" members "}"`
pub fn parse_enum_decl(parser: &mut Parser) -> Result<EnumDecl, Error> {
    let pos = parser.get_position();
    parser.expect_literal("enum")?;
    let type_decl = parse_type_decl(parser)?;
    let members = parse_members(parser, parse_enum_member)?;

    Ok(EnumDecl {
        pos,
        type_decl,
        members,
    })
}

fn parse_enum_member(parser: &mut Parser) -> Result<EnumMember, Error> {
    let pos = parser.get_position();
    let modifiers = parse_modifiers(parser)?;
    let kind = parser.choice(&[
        |parser| Ok(EnumMemberKind::Case(parse_case_decl(parser)?)),
        |parser| Ok(EnumMemberKind::Var(parse_var_decl(parser)?)),
        |parser| Ok(EnumMemberKind::Func(parse_func_decl(parser)?)),
        |parser| Ok(EnumMemberKind::Class(parse_class_decl(parser)?)),
        |parser| Ok(EnumMemberKind::Enum(parse_enum_decl(parser)?)),
        |parser| Ok(EnumMemberKind::Initialiser(parse_initialiser_decl(parser)?)),
    ])?;

    Ok(EnumMember {
        pos,
        modifiers,
        kind,
    })
}

/// `"case" Ident ( "(" TypeDecl ")" )?`
pub fn parse_case_decl(parser: &mut Parser) -> Result<CaseDecl, Error> {
    let pos = parser.get_position();
    parser.expect_literal("case")?;
    let name = parser.expect(TokenKind::Ident)?.value;
    let payload = parser.attempt(|parser| {
        parser.expect_literal("(")?;
        let payload = parse_type_decl(parser)?;
        parser.expect_literal(")")?;
        Ok(payload)
    })?;

    Ok(CaseDecl { pos, name, payload })
}

/// `"class" TypeDecl "{" members "}"`
pub fn parse_class_decl(parser: &mut Parser) -> Result<ClassDecl, Error> {
    let pos = parser.get_position();
    parser.expect_literal("class")?;
    let type_decl = parse_type_decl(parser)?;
    let members = parse_members(parser, parse_class_member)?;

    Ok(ClassDecl {
        pos,
        type_decl,
        members,
    })
}

fn parse_class_member(parser: &mut Parser) -> Result<ClassMember, Error> {
    let pos = parser.get_position();
    let modifiers = parse_modifiers(parser)?;
    let kind = parser.choice(&[
        |parser| Ok(ClassMemberKind::Var(parse_var_decl(parser)?)),
        |parser| Ok(ClassMemberKind::Func(parse_func_decl(parser)?)),
        |parser| Ok(ClassMemberKind::Class(parse_class_decl(parser)?)),
        |parser| Ok(ClassMemberKind::Enum(parse_enum_decl(parser)?)),
        |parser| Ok(ClassMemberKind::Initialiser(parse_initialiser_decl(parser)?)),
    ])?;

    Ok(ClassMember {
        pos,
        modifiers,
        kind,
    })
}

/// `"(" ( Parameters ( "," Parameters )* )? ","? ")"`
fn parse_parameter_list(parser: &mut Parser) -> Result<Vec<Parameters>, Error> {
    parser.expect_literal("(")?;
    let parameters = parser.optional_separated(",", parse_parameters)?;
    parser.optional_literal(",")?;
    parser.expect_literal(")")?;

    Ok(parameters)
}

/// `"init" ParameterList "throws"? Block`
pub fn parse_initialiser_decl(parser: &mut Parser) -> Result<InitialiserDecl, Error> {
    let pos = parser.get_position();
    parser.expect_literal("init")?;
    let parameters = parse_parameter_list(parser)?;
    let throws = parser.optional_literal("throws")?;
    let body = parse_block(parser)?;

    Ok(InitialiserDecl {
        pos,
        parameters,
        throws,
        body,
    })
}

/// `Ident ( "," Ident )* ":" Reference`
pub fn parse_parameters(parser: &mut Parser) -> Result<Parameters, Error> {
    let pos = parser.get_position();
    let names = parser.separated(",", |parser| Ok(parser.expect(TokenKind::Ident)?.value))?;
    parser.expect_literal(":")?;
    let type_ref = parse_reference(parser)?;

    Ok(Parameters {
        pos,
        names,
        type_ref,
    })
}

/// `"let" VarDeclAsgn ( "," VarDeclAsgn )*`
pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDecl, Error> {
    let pos = parser.get_position();
    parser.expect_literal("let")?;
    let vars = parser.separated(",", parse_var_decl_asgn)?;

    Ok(VarDecl { pos, vars })
}

/// `Ident ( ":" Reference )? ( "=" Expr )?`
fn parse_var_decl_asgn(parser: &mut Parser) -> Result<VarDeclAsgn, Error> {
    let pos = parser.get_position();
    let name = parser.expect(TokenKind::Ident)?.value;
    let type_ref = parser.attempt(|parser| {
        parser.expect_literal(":")?;
        parse_reference(parser)
    })?;
    let default = parser.attempt(|parser| {
        parser.expect_literal("=")?;
        parse_expr(parser)
    })?;

    Ok(VarDeclAsgn {
        pos,
        name,
        type_ref,
        default,
    })
}

/// `"fn" Ident ParameterList "throws"? ( ":" Reference )? Block`
pub fn parse_func_decl(parser: &mut Parser) -> Result<FuncDecl, Error> {
    let pos = parser.get_position();
    parser.expect_literal("fn")?;
    let name = parser.expect(TokenKind::Ident)?.value;
    let parameters = parse_parameter_list(parser)?;
    let throws = parser.optional_literal("throws")?;
    let return_type = parser.attempt(|parser| {
        parser.expect_literal(":")?;
        parse_reference(parser)
    })?;
    let body = parse_block(parser)?;

    Ok(FuncDecl {
        pos,
        name,
        parameters,
        throws,
        return_type,
        body,
    })
}
