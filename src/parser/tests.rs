//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Root declarations and the separators between them
//! - Enum and class members, type parameters
//! - Statements and switch cases
//! - Expression precedence and associativity
//! - Backtracking and error reporting

use crate::{
    ast::{
        ast::{Modifier, RootDeclKind},
        declarations::{ClassMemberKind, EnumMemberKind},
        expressions::{
            Expr, ExprKind, LiteralKind, ReferenceNextKind, TerminalKind, Unary, UnaryKind,
        },
        statements::{CaseSelectKind, CaseSelector, StmtKind},
    },
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::{lexer::tokenize, tokens::Token},
};

use super::parser::{
    parse_string, parse_string_with_options, ParseOptions, Parser, Rule, MAX_NESTING,
};

fn root_kind(source: &str) -> RootDeclKind {
    let ast = parse_string(source).unwrap();
    assert_eq!(ast.declarations.len(), 1, "{source}");
    ast.declarations[0].kind.clone()
}

fn var_default(source: &str) -> Expr {
    match root_kind(source) {
        RootDeclKind::Var(var) => var.vars[0].default.clone().unwrap(),
        other => panic!("expected a variable, got {:?}", other),
    }
}

fn render(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Binary { left, op, right } => {
            format!("({} {} {})", op, render(left), render(right))
        }
        ExprKind::Unary(unary) => render_unary(unary),
    }
}

fn render_unary(unary: &Unary) -> String {
    match &unary.kind {
        UnaryKind::Prefix { op, operand } => format!("({}{})", op, render_unary(operand)),
        UnaryKind::Terminal(terminal) => match &terminal.kind {
            TerminalKind::Literal(literal) => match &literal.kind {
                LiteralKind::Number(value) => value.to_string(),
                LiteralKind::Str(value) => format!("{:?}", value),
            },
            TerminalKind::Reference(reference) => reference.path(),
            TerminalKind::Paren(expr) => render(expr),
            TerminalKind::Array(_) => String::from("[..]"),
            TerminalKind::DictOrSet(_) => String::from("{..}"),
        },
    }
}

fn parse_error(source: &str) -> Error {
    parse_string(source).unwrap_err()
}

#[test]
fn test_parse_empty_source() {
    let ast = parse_string("").unwrap();
    assert!(ast.declarations.is_empty());

    let ast = parse_string("// nothing here\n").unwrap();
    assert!(ast.declarations.is_empty());
}

#[test]
fn test_root_decl_routed_by_leading_keyword() {
    assert!(matches!(root_kind("class A {}"), RootDeclKind::Class(_)));
    assert!(matches!(root_kind("import \"std/io\""), RootDeclKind::Import(_)));
    assert!(matches!(root_kind("enum E {}"), RootDeclKind::Enum(_)));
    assert!(matches!(root_kind("let a;"), RootDeclKind::Var(_)));
    assert!(matches!(root_kind("fn f() {}"), RootDeclKind::Func(_)));
}

#[test]
fn test_root_decl_modifiers() {
    let ast = parse_string("pub static fn f() {}").unwrap();
    let root = &ast.declarations[0];

    assert_eq!(root.modifiers.0, vec![Modifier::Pub, Modifier::Static]);
    assert!(root.modifiers.contains(Modifier::Static));
    assert!(!root.modifiers.contains(Modifier::Override));
}

#[test]
fn test_import_alias() {
    match root_kind("import io \"std/io\";") {
        RootDeclKind::Import(import) => {
            assert_eq!(import.alias.as_deref(), Some("io"));
            assert_eq!(import.path, "std/io");
        }
        other => panic!("expected an import, got {:?}", other),
    }

    match root_kind("import 'std/io'") {
        RootDeclKind::Import(import) => assert!(import.alias.is_none()),
        other => panic!("expected an import, got {:?}", other),
    }
}

#[test]
fn test_trailing_separator_equivalence() {
    let with = parse_string("enum E { case A; case B; }").unwrap();
    let without = parse_string("enum E { case A; case B }").unwrap();
    let terminated = parse_string("enum E { case A; case B; };").unwrap();

    assert_eq!(with, without);
    assert_eq!(with, terminated);

    match &with.declarations[0].kind {
        RootDeclKind::Enum(enum_decl) => assert_eq!(enum_decl.members.len(), 2),
        other => panic!("expected an enum, got {:?}", other),
    }
}

#[test]
fn test_separator_policy() {
    assert!(parse_string("import \"a\"; enum E {}; fn f() {}; class C {};").is_ok());
    assert!(parse_string("import \"a\" enum E {} fn f() {} class C {}").is_ok());
    assert!(parse_string("class C { let a; let b }").is_ok());
    assert!(parse_string("fn f() { switch x { case 1: a; b; default: c; } }").is_ok());

    // Members must be separated, a `let` declaration must be terminated.
    assert!(parse_string("class C { let a let b }").is_err());
    assert!(parse_string("let a").is_err());
    // A lone separator is not a member.
    assert!(parse_string("class C { ; }").is_err());
}

#[test]
fn test_let_without_name() {
    let error = parse_error("let;");

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.expected(), ["<ident>"]);
    assert_eq!(error.get_position().offset, 3);
    assert_eq!(error.get_position().column, 4);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: vec![String::from("<ident>")],
            found: String::from(";"),
        }
    );
}

#[test]
fn test_let_without_semicolon() {
    let error = parse_error("let a = 1");

    assert_eq!(error.expected(), ["\",\"", "\";\""]);
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedToken { found, .. } if found == "EOF"
    ));
    assert_eq!(error.get_position().offset, 9);
}

#[test]
fn test_committed_alternative_reports_deepest_error() {
    let error = parse_error("fn f() { let = 1 }");

    assert_eq!(error.expected(), ["<ident>"]);
    assert_eq!(error.get_position().offset, 13);
}

#[test]
fn test_unterminated_string_is_lex_error() {
    let error = parse_error("let a = \"abc;");

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_position().offset, 8);
}

#[test]
fn test_number_past_float_range() {
    let digits = format!("1{}", "0".repeat(400));
    let error = parse_error(&format!("let a = {};", digits));

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.get_impl(), &ErrorImpl::NumberParseError { token: digits });
    assert_eq!(error.get_position().offset, 8);
    assert!(error.get_tip().to_string().contains("float limit"));

    let largest = format!("1{}", "0".repeat(300));
    let RootDeclKind::Var(var) = root_kind(&format!("let a = {};", largest)) else {
        panic!("expected a variable");
    };
    assert!(var.vars[0].default.is_some());
}

#[test]
fn test_deep_parentheses_fail_cleanly() {
    let source = format!("let a = {}x{};", "(".repeat(10_000), ")".repeat(10_000));
    let error = parse_error(&source);

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NestingTooDeep { limit: MAX_NESTING }
    );
    // The limit trips on the expression opened after MAX_NESTING parentheses.
    assert_eq!(error.get_position().offset as usize, 8 + MAX_NESTING);

    let source = format!("let a = {}x{};", "(".repeat(100), ")".repeat(100));
    assert!(parse_string(&source).is_ok());
}

#[test]
fn test_deep_blocks_and_prefixes_fail_cleanly() {
    let source = format!("fn f() {}{}", "{".repeat(10_000), "}".repeat(10_000));
    assert!(matches!(
        parse_error(&source).get_impl(),
        ErrorImpl::NestingTooDeep { .. }
    ));

    let source = format!("let a = {}x;", "!".repeat(10_000));
    assert!(matches!(
        parse_error(&source).get_impl(),
        ErrorImpl::NestingTooDeep { .. }
    ));

    let source = format!("let a = {}x;", "!".repeat(50));
    assert!(parse_string(&source).is_ok());
}

#[test]
fn test_parse_options_name_the_file() {
    let options = ParseOptions::with_file("main.lang");
    let ast = parse_string_with_options("fn f() {}", &options).unwrap();
    assert_eq!(&*ast.pos.file, "main.lang");

    let error = parse_string_with_options("let;", &options).unwrap_err();
    assert_eq!(error.to_string(), "main.lang:1:4: unexpected token \";\" (expected <ident>)");

    let ast = parse_string("fn f() {}").unwrap();
    assert_eq!(&*ast.pos.file, "<input>");
}

#[test]
fn test_declaration_positions() {
    let ast = parse_string("let a;\n  fn f() {}").unwrap();
    let func = &ast.declarations[1];

    assert_eq!(func.pos.line, 2);
    assert_eq!(func.pos.column, 3);
    assert_eq!(func.pos.offset, 9);
}

#[test]
fn test_type_parameters() {
    let type_decl = match root_kind("class Pair<K, V,> {}") {
        RootDeclKind::Class(class) => class.type_decl,
        other => panic!("expected a class, got {:?}", other),
    };
    let names: Vec<&str> = type_decl
        .type_parameters
        .iter()
        .map(|param| param.name.as_str())
        .collect();
    assert_eq!(names, ["K", "V"]);
    assert!(type_decl.type_parameters[0].constraints.is_empty());

    let type_decl = match root_kind("class Box<T: A, B> {}") {
        RootDeclKind::Class(class) => class.type_decl,
        other => panic!("expected a class, got {:?}", other),
    };
    assert_eq!(type_decl.type_parameters.len(), 1);
    let constraints: Vec<String> = type_decl.type_parameters[0]
        .constraints
        .iter()
        .map(|constraint| constraint.path())
        .collect();
    assert_eq!(constraints, ["A", "B"]);

    let type_decl = match root_kind("class Name<T, U: A> {}") {
        RootDeclKind::Class(class) => class.type_decl,
        other => panic!("expected a class, got {:?}", other),
    };
    let params: Vec<(&str, usize)> = type_decl
        .type_parameters
        .iter()
        .map(|param| (param.name.as_str(), param.constraints.len()))
        .collect();
    assert_eq!(params, [("T", 0), ("U", 1)]);
}

#[test]
fn test_constraint_list_is_greedy() {
    let error = parse_error("class C<T: A, U: B> {}");
    assert!(error.expected().contains(&String::from("\">\"")));
}

#[test]
fn test_enum_members() {
    let source = "enum Option<T> {
        case None;
        case Some(T);
        fn get(): T { return value };
        init(value: T) throws {};
        enum Inner {}
    }";

    let enum_decl = match root_kind(source) {
        RootDeclKind::Enum(enum_decl) => enum_decl,
        other => panic!("expected an enum, got {:?}", other),
    };

    assert!(enum_decl.type_decl.is_generic());
    assert_eq!(enum_decl.members.len(), 5);
    assert!(matches!(
        &enum_decl.members[0].kind,
        EnumMemberKind::Case(case) if case.name == "None" && case.payload.is_none()
    ));
    assert!(matches!(
        &enum_decl.members[1].kind,
        EnumMemberKind::Case(case) if case.payload.as_ref().map(|p| p.name.as_str()) == Some("T")
    ));
    assert!(matches!(
        &enum_decl.members[2].kind,
        EnumMemberKind::Func(func) if func.return_type.is_some()
    ));
    assert!(matches!(
        &enum_decl.members[3].kind,
        EnumMemberKind::Initialiser(init) if init.throws && init.parameters.len() == 1
    ));
    assert!(matches!(&enum_decl.members[4].kind, EnumMemberKind::Enum(_)));
}

#[test]
fn test_class_members() {
    let source = "class C {
        pub static let a: Int = 1;
        override fn f(a, b: Int, c: Str,) {}
    }";

    let class = match root_kind(source) {
        RootDeclKind::Class(class) => class,
        other => panic!("expected a class, got {:?}", other),
    };

    assert_eq!(class.members.len(), 2);
    assert_eq!(
        class.members[0].modifiers.0,
        vec![Modifier::Pub, Modifier::Static]
    );

    match &class.members[1].kind {
        ClassMemberKind::Func(func) => {
            assert!(class.members[1].modifiers.contains(Modifier::Override));
            assert_eq!(func.parameters.len(), 2);
            assert_eq!(func.parameter_names().collect::<Vec<_>>(), ["a", "b", "c"]);
            assert_eq!(func.parameters[0].type_ref.name, "Int");
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_var_decl_group() {
    let var = match root_kind("let a: Int = 1, b, c = d;") {
        RootDeclKind::Var(var) => var,
        other => panic!("expected a variable, got {:?}", other),
    };

    assert_eq!(var.vars.len(), 3);
    assert_eq!(var.vars[0].type_ref.as_ref().map(|r| r.name.as_str()), Some("Int"));
    assert!(var.vars[1].type_ref.is_none() && var.vars[1].default.is_none());
    assert!(var.vars[2].default.is_some());
}

#[test]
fn test_statements() {
    let source = "fn f() {
        for x in xs {
            if x { return x } else { return }
        };
        { let y = 1 };
        fn g() {};
        class K {};
        enum L {};
        y
    }";

    let func = match root_kind(source) {
        RootDeclKind::Func(func) => func,
        other => panic!("expected a function, got {:?}", other),
    };

    let statements = &func.body.statements;
    assert_eq!(statements.len(), 6);
    assert!(matches!(statements[1].kind, StmtKind::Block(_)));
    assert!(matches!(statements[2].kind, StmtKind::FuncDecl(_)));
    assert!(matches!(statements[3].kind, StmtKind::ClassDecl(_)));
    assert!(matches!(statements[4].kind, StmtKind::EnumDecl(_)));
    assert!(matches!(statements[5].kind, StmtKind::Expression(_)));

    let StmtKind::For(for_stmt) = &statements[0].kind else {
        panic!("expected a for loop, got {:?}", statements[0].kind);
    };
    assert_eq!(for_stmt.target.name, "x");

    let StmtKind::If(if_stmt) = &for_stmt.body.statements[0].kind else {
        panic!("expected an if statement");
    };
    assert!(matches!(
        &if_stmt.main.statements[0].kind,
        StmtKind::Return(ret) if ret.value.is_some()
    ));
    let else_block = if_stmt.else_block.as_ref().unwrap();
    assert!(matches!(
        &else_block.statements[0].kind,
        StmtKind::Return(ret) if ret.value.is_none()
    ));
}

#[test]
fn test_switch_cases() {
    let source = "fn f() {
        switch x {
            case .Some(v): a; b;
            case 1: c
            default: d
        }
    }";

    let func = match root_kind(source) {
        RootDeclKind::Func(func) => func,
        other => panic!("expected a function, got {:?}", other),
    };
    let StmtKind::Switch(switch) = &func.body.statements[0].kind else {
        panic!("expected a switch");
    };

    assert_eq!(switch.cases.len(), 3);

    let CaseSelector::Case(select) = &switch.cases[0].selector else {
        panic!("expected a case selector");
    };
    assert!(matches!(
        &select.kind,
        CaseSelectKind::EnumCase(case) if case.name == "Some" && case.binding.as_deref() == Some("v")
    ));
    assert_eq!(switch.cases[0].body.len(), 2);

    assert!(matches!(
        &switch.cases[1].selector,
        CaseSelector::Case(select) if matches!(select.kind, CaseSelectKind::Expr(_))
    ));
    assert_eq!(switch.cases[2].selector, CaseSelector::Default);
    assert_eq!(switch.cases[2].body.len(), 1);
}

#[test]
fn test_expression_precedence() {
    let cases = [
        ("1 + 2 * 3", "(+ 1 (* 2 3))"),
        ("1 - 2 - 3", "(- (- 1 2) 3)"),
        ("b = c = 1", "(= b (= c 1))"),
        ("b += 2 ^ 3 ^ 4", "(+= b (^ 2 (^ 3 4)))"),
        ("a || b && c == d", "(|| a (&& b (== c d)))"),
        ("a < b == c >= d", "(== (< a b) (>= c d))"),
        ("-a * b % c", "(% (* (-a) b) c)"),
        ("!a && b", "(&& (!a) b)"),
        ("x -> y + 1", "(-> x (+ y 1))"),
        ("(1 + 2) * 3", "(* (+ 1 2) 3)"),
        ("a.b - \"s\"", "(- a.b \"s\")"),
    ];

    for (source, expected) in cases {
        let expr = var_default(&format!("let v = {};", source));
        assert_eq!(render(&expr), expected, "{source}");
    }
}

#[test]
fn test_reference_suffixes() {
    let expr = var_default("let v = a.b[0](x, y,);");
    let ExprKind::Unary(unary) = &expr.kind else {
        panic!("expected a unary");
    };
    let UnaryKind::Terminal(terminal) = &unary.kind else {
        panic!("expected a terminal");
    };
    let TerminalKind::Reference(reference) = &terminal.kind else {
        panic!("expected a reference");
    };

    assert_eq!(reference.name, "a");
    assert_eq!(reference.next.len(), 3);
    assert_eq!(reference.next[0].kind, ReferenceNextKind::Member(String::from("b")));
    assert!(matches!(reference.next[1].kind, ReferenceNextKind::Index(_)));
    assert!(matches!(
        &reference.next[2].kind,
        ReferenceNextKind::Call(call) if call.arguments.len() == 2
    ));
}

#[test]
fn test_collection_literals() {
    let var = match root_kind("let a = [1, 2,], b = {k: 1, j: 2}, c = {1, 2}, d = {};") {
        RootDeclKind::Var(var) => var,
        other => panic!("expected a variable, got {:?}", other),
    };

    let terminal = |index: usize| -> TerminalKind {
        let default = var.vars[index].default.as_ref().unwrap();
        match &default.kind {
            ExprKind::Unary(Unary {
                kind: UnaryKind::Terminal(terminal),
                ..
            }) => terminal.kind.clone(),
            other => panic!("expected a terminal, got {:?}", other),
        }
    };

    assert!(matches!(terminal(0), TerminalKind::Array(array) if array.elements.len() == 2));
    assert!(matches!(
        terminal(1),
        TerminalKind::DictOrSet(dict) if dict.entries.iter().all(|entry| entry.value.is_some())
    ));
    assert!(matches!(
        terminal(2),
        TerminalKind::DictOrSet(set) if set.entries.iter().all(|entry| entry.value.is_none())
    ));
    assert!(matches!(terminal(3), TerminalKind::DictOrSet(empty) if empty.entries.is_empty()));
}

fn literal_a(parser: &mut Parser) -> Result<Token, Error> {
    parser.expect_literal("a")
}

fn a_then_x(parser: &mut Parser) -> Result<Token, Error> {
    parser.expect_literal("a")?;
    parser.expect_literal("x")
}

fn a_b_then_x(parser: &mut Parser) -> Result<Token, Error> {
    parser.expect_literal("a")?;
    parser.expect_literal("b")?;
    parser.expect_literal("x")
}

fn a_b_c(parser: &mut Parser) -> Result<Token, Error> {
    parser.expect_literal("a")?;
    parser.expect_literal("b")?;
    parser.expect_literal("c")
}

#[test]
fn test_choice_backtracks_within_lookahead() {
    let mut parser = Parser::new(tokenize("a b", None).unwrap());
    let alternatives: [Rule<Token>; 2] = [a_then_x, literal_a];

    let token = parser.choice(&alternatives).unwrap();
    assert_eq!(token.value, "a");
    assert_eq!(parser.cursor(), 1);
}

#[test]
fn test_choice_commits_past_lookahead() {
    let mut parser = Parser::new(tokenize("a b c", None).unwrap());
    let alternatives: [Rule<Token>; 2] = [a_b_then_x, a_b_c];

    let error = parser.choice(&alternatives).unwrap_err();
    assert_eq!(error.expected(), ["\"x\""]);
    assert_eq!(error.get_position().offset, 4);
}

#[test]
fn test_attempt_rewinds_absent_parts() {
    let mut parser = Parser::new(tokenize("a b", None).unwrap());

    assert!(parser.attempt(a_then_x).unwrap().is_none());
    assert_eq!(parser.cursor(), 0);
    assert_eq!(parser.repeat(literal_a).unwrap().len(), 1);
    assert!(parser.optional_literal("b").unwrap());
}

#[test]
fn test_soft_keywords_match_identifiers() {
    // `class`, `init`, `return` and `else` are plain identifiers to the lexer.
    assert!(parse_string("class C { init() { return } }").is_ok());
    assert!(matches!(root_kind("let class = 1;"), RootDeclKind::Var(_)));
}
