use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use reckon::{
    Session, interpreter::environment::ConstantTable, util::format::format_significant,
};
use tracing_subscriber::EnvFilter;

/// reckon evaluates arithmetic and logical expressions with variables,
/// constants and a library of mathematical functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of significant digits used when printing results.
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..=20))]
    precision: u8,

    /// Start without the built-in constants (pi, e, phi, ...).
    #[arg(long)]
    no_constants: bool,

    /// Expressions to evaluate in order. Starts an interactive session when
    /// none are given.
    #[arg(allow_hyphen_values = true)]
    expressions: Vec<String>,
}

const PROMPT: &str = "» ";

const HELP: &str = "\
Enter an expression to evaluate it, e.g. `2 + 3 * 4`, `x = sin(30)`, `5!`.
Operators: + - * / ^ !  < > <= >= == !=  && ||  and `name = value`.
Commands:
  help             show this message
  vars, variables  list assigned variables
  reset            remove all variables
  exit, quit       leave";

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    let precision = usize::from(args.precision);
    let mut session = if args.no_constants {
        Session::with_constants(ConstantTable::new())
    } else {
        Session::new()
    };

    if args.expressions.is_empty() {
        return match run_repl(&mut session, precision) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            },
        };
    }

    let mut failed = false;
    for expression in &args.expressions {
        match session.evaluate(expression) {
            Ok(value) => println!("{}", format_significant(value, precision)),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Installs a stderr subscriber filtered by `RECKON_LOG`, defaulting to
/// `warn`.
fn init_logging() {
    let env_filter = EnvFilter::try_from_env("RECKON_LOG")
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(env_filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}

/// Reads lines from stdin until end of input or `exit`.
fn run_repl(session: &mut Session, precision: usize) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "" => {},
            "exit" | "quit" => return Ok(()),
            "help" => writeln!(stdout, "{HELP}")?,
            "vars" | "variables" => print_variables(&mut stdout, session, precision)?,
            "reset" => {
                session.reset();
                writeln!(stdout, "variables cleared")?;
            },
            input => match session.evaluate(input) {
                Ok(value) => writeln!(stdout, "= {}", format_significant(value, precision))?,
                Err(e) => writeln!(stdout, "error: {e}")?,
            },
        }
    }
}

fn print_variables(out: &mut impl Write, session: &Session, precision: usize) -> io::Result<()> {
    let variables = session.variables();
    if variables.is_empty() {
        return writeln!(out, "no variables defined");
    }
    for (name, value) in variables.iter_sorted() {
        writeln!(out, "{name} = {}", format_significant(value, precision))?;
    }
    Ok(())
}
