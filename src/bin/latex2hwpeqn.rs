//! latex2hwpeqn - LaTeX math on stdin, HwpEqn on stdout
//!
//! Exit codes: 0 success, 1 no input, 2 conversion failed.

use clap::Parser;
use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use hwpmath::{latex_to_hwpeqn, ConversionError, ConversionResult};

#[derive(Parser)]
#[command(name = "latex2hwpeqn")]
#[command(version)]
#[command(about = "Convert LaTeX math to Hancom HwpEqn equation syntax", long_about = None)]
struct Cli {
    /// LaTeX source, used when stdin is a terminal or empty
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    latex: Vec<String>,
}

fn read_input(cli: &Cli) -> ConversionResult<String> {
    let stdin = io::stdin();
    let mut buffer = String::new();
    if !stdin.is_terminal() {
        stdin.lock().read_to_string(&mut buffer)?;
    }
    if buffer.trim().is_empty() {
        buffer = cli.latex.join(" ");
    }

    let latex = buffer.trim();
    if latex.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    Ok(latex.to_string())
}

fn run(cli: &Cli) -> ConversionResult<String> {
    let latex = read_input(cli)?;
    Ok(latex_to_hwpeqn(&latex)?)
}

fn main() -> ExitCode {
    hwpmath::utils::logging::init_logging();
    let cli = Cli::parse();

    let output = match run(&cli) {
        Ok(output) => output,
        Err(ConversionError::EmptyInput) => {
            eprintln!("No LaTeX provided. Pipe LaTeX on stdin or pass it as arguments.");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Failed to convert LaTeX: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("Failed to convert LaTeX: {}", e);
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
