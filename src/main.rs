// fncc: fn declaration compiler with a stage inspector

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fncc::compile_traced;
use fncc::snapshot::PipelineTrace;
use fncc::ui::App;

/// Environment variable holding the log filter, e.g. `FNCC_LOG=debug`
const LOG_ENV: &str = "FNCC_LOG";

/// Which stage result to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Generated text
    Output,
    /// Token sequence as JSON
    Tokens,
    /// Source AST as JSON
    Ast,
    /// Target AST as JSON
    Target,
}

/// Compile `fn name(params){body}` declarations into `function` syntax.
///
/// Example: `fncc -e 'fn test(arg){}'` prints `function test(arg){}`.
#[derive(Debug, Parser)]
#[command(name = "fncc", version, about)]
struct Cli {
    /// Source file to compile (reads stdin when omitted)
    #[arg(conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Compile the given source text instead of a file
    #[arg(short, long)]
    expr: Option<String>,

    /// Stage result to print
    #[arg(long, value_enum, default_value_t = Emit::Output)]
    emit: Emit,

    /// Open the terminal stage inspector
    #[arg(long, conflicts_with = "emit")]
    inspect: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(&cli)?;

    debug!(bytes = source.len(), "compiling");
    let trace = compile_traced(&source);
    info!(
        stages = trace.completed(),
        success = trace.is_success(),
        "pipeline finished"
    );

    if cli.inspect {
        return inspect(trace);
    }

    match cli.emit {
        Emit::Output => {
            let output = trace.result?;
            println!("{}", output);
        }
        Emit::Tokens => emit_json(&trace, trace.artifacts.tokens.as_ref())?,
        Emit::Ast => emit_json(&trace, trace.artifacts.source_ast.as_ref())?,
        Emit::Target => emit_json(&trace, trace.artifacts.target_ast.as_ref())?,
    }

    Ok(())
}

fn read_source(cli: &Cli) -> io::Result<String> {
    if let Some(expr) = &cli.expr {
        return Ok(expr.clone());
    }

    match &cli.file {
        Some(path) => {
            info!(path = %path.display(), "reading source file");
            fs::read_to_string(path)
        }
        None => {
            info!("reading source from stdin");
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Print a stage artifact as JSON, or the error that kept it from being built
fn emit_json<T: serde::Serialize>(
    trace: &PipelineTrace,
    artifact: Option<&T>,
) -> Result<(), Box<dyn std::error::Error>> {
    match artifact {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
        None => match &trace.result {
            Err(e) => Err(e.clone().into()),
            Ok(_) => Err("stage artifact missing from a successful run".into()),
        },
    }
}

fn inspect(trace: PipelineTrace) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(trace);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
