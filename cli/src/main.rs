use std::io::BufRead;
use std::io::BufReader;

use clap::Parser;
use miette::Result;
use reedline::Signal;
use styx::{Engine, EngineOptions, NumberMode, render_error};
use styx_core::parser::DEFAULT_MAX_DEPTH;
use thiserror::Error;

mod highlighter;
mod lexer;
mod repl;

const BANNER: &str = "Styx Version 0.0.0.0.3\nPress Ctrl+c to Exit";

/// Styx - a prefix-notation calculator
#[derive(Parser, Debug)]
#[command(name = "styx")]
#[command(about = "Evaluate prefix arithmetic such as `* (+ 1 2) (- 10 4)`", long_about = None)]
struct Args {
    /// Evaluate with 64-bit integers instead of floating point
    #[arg(long)]
    integer: bool,

    /// Maximum nesting of expressions
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parsed syntax tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Do not read or write the history file
    #[arg(long)]
    no_history: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

#[derive(Debug, Error, miette::Diagnostic)]
enum CliError {
    #[error("failed to read from stdin")]
    #[diagnostic(code(styx::stdin))]
    Stdin(#[source] std::io::Error),

    #[error("line editor failed")]
    #[diagnostic(code(styx::line_editor))]
    LineEditor(#[source] std::io::Error),
}

/// Evaluate one submitted line and render its result. Blank lines give `None`.
fn evaluate_input(
    engine: &Engine,
    input: &str,
    debug_parse: bool,
) -> Option<Result<String, styx::Error>> {
    if input.trim().is_empty() {
        return None;
    }

    let tree = match engine.parse(input) {
        Ok(tree) => tree,
        Err(e) => return Some(Err(e)),
    };

    if debug_parse {
        println!("=== Parsed Tree ===");
        println!("{:#?}", tree);
        println!();
    }

    let rendered = match engine.options().number_mode {
        NumberMode::Float => engine.evaluate::<f64>(&tree).to_string(),
        NumberMode::Integer => engine.evaluate::<i64>(&tree).to_string(),
    };
    Some(Ok(rendered))
}

fn interpret_input(engine: &Engine, input: &str, debug_parse: bool) {
    match evaluate_input(engine, input, debug_parse) {
        Some(Ok(rendered)) => println!("{}", rendered),
        Some(Err(e)) => render_error(&e),
        None => {}
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the log level; default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let engine = Engine::new(EngineOptions {
        max_depth: args.max_depth,
        number_mode: if args.integer {
            NumberMode::Integer
        } else {
            NumberMode::Float
        },
    });

    if let Some(expr) = args.expression {
        interpret_input(&engine, &expr, args.debug_parse);
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) {
        let mut line_editor = repl::setup_reedline(!args.no_history);
        let prompt = repl::StyxPrompt;

        println!("{}", BANNER);

        loop {
            let sig = line_editor
                .read_line(&prompt)
                .map_err(CliError::LineEditor)?;

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&engine, &buffer, args.debug_parse);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    return Ok(());
                }
            }
        }
    } else {
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.map_err(CliError::Stdin)?;
            interpret_input(&engine, &line, args.debug_parse);
        }
    }

    Ok(())
}
