use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use frontend::{
    ast::{
        ast::Ast,
        declarations::{
            CaseDecl, ClassDecl, EnumDecl, FuncDecl, ImportDecl, InitialiserDecl, VarDeclAsgn,
        },
    },
    display_error,
    lexer::lexer::tokenize,
    parse_string_with_options,
    visitor::{visit, VisitResult, Visitor},
    ParseOptions, Position,
};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "frontend", version, about = "Lex, parse and inspect a source file")]
struct Args {
    /// Source file to read
    file: PathBuf,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree
    #[arg(long)]
    ast: bool,

    /// Print every declaration with its position (the default)
    #[arg(long)]
    summary: bool,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let source = read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());
    debug!(file = %file_name, bytes = source.len(), "read source");

    if args.tokens {
        match tokenize(&source, Some(file_name.as_str())) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{:<12} {}", token.span.start.to_string(), token);
                }
            }
            Err(error) => {
                eprint!("{}", display_error(&error, &source));
                return Ok(ExitCode::FAILURE);
            }
        }
        if !args.ast && !args.summary {
            return Ok(ExitCode::SUCCESS);
        }
    }

    let options = ParseOptions::with_file(file_name);
    let ast = match parse_string_with_options(&source, &options) {
        Ok(ast) => ast,
        Err(error) => {
            eprint!("{}", display_error(&error, &source));
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.ast {
        println!("{:#?}", ast);
    }
    if args.summary || !args.ast {
        print_summary(&ast);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(ast: &Ast) {
    let mut summary = Summary::default();
    match visit(ast, &mut summary) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    for (position, kind, name) in &summary.entries {
        println!("{:<12} {:<6} {}", position.to_string(), kind, name);
    }
    println!("{} declarations", summary.entries.len());
}

/// Collects every declaration in the tree, nested ones included.
#[derive(Default)]
struct Summary {
    entries: Vec<(Position, &'static str, String)>,
}

impl Summary {
    fn push(&mut self, position: &Position, kind: &'static str, name: impl Into<String>) {
        self.entries.push((position.clone(), kind, name.into()));
    }
}

impl<'a> Visitor<'a> for Summary {
    type Error = std::convert::Infallible;

    fn visit_import_decl(&mut self, node: &'a ImportDecl) -> VisitResult<Self::Error> {
        let name = node.alias.as_deref().unwrap_or(&node.path);
        self.push(&node.pos, "import", name);
        Ok(())
    }

    fn visit_enum_decl(&mut self, node: &'a EnumDecl) -> VisitResult<Self::Error> {
        self.push(&node.pos, "enum", &node.type_decl.name);
        Ok(())
    }

    fn visit_case_decl(&mut self, node: &'a CaseDecl) -> VisitResult<Self::Error> {
        self.push(&node.pos, "case", &node.name);
        Ok(())
    }

    fn visit_class_decl(&mut self, node: &'a ClassDecl) -> VisitResult<Self::Error> {
        self.push(&node.pos, "class", &node.type_decl.name);
        Ok(())
    }

    fn visit_initialiser_decl(&mut self, node: &'a InitialiserDecl) -> VisitResult<Self::Error> {
        self.push(&node.pos, "init", "init");
        Ok(())
    }

    fn visit_var_decl_asgn(&mut self, node: &'a VarDeclAsgn) -> VisitResult<Self::Error> {
        self.push(&node.pos, "let", &node.name);
        Ok(())
    }

    fn visit_func_decl(&mut self, node: &'a FuncDecl) -> VisitResult<Self::Error> {
        let parameters: Vec<&str> = node.parameter_names().collect();
        self.push(
            &node.pos,
            "fn",
            format!("{}({})", node.name, parameters.join(", ")),
        );
        Ok(())
    }
}
