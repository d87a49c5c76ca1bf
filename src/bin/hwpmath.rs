//! hwpmath CLI - LaTeX math to Unicode text or HwpEqn

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};

use hwpmath::{
    convert_dialect, latex_to_hwpeqn, latex_to_hwpeqn_with_report, latex_to_unicode_with_report,
    strip_math_delimiters, symbols_in, Dialect, LossReport, SymbolClass,
};

#[derive(Parser)]
#[command(name = "hwpmath")]
#[command(version)]
#[command(about = "hwpmath - LaTeX math to Unicode text and Hancom HwpEqn", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Output notation
    #[arg(short, long, value_enum, default_value_t = Target::Unicode)]
    target: Target,

    /// Write a loss report JSON to this path (unicode, or hwpeqn with --lenient)
    #[arg(long)]
    report: Option<String>,

    /// On a parse error, emit the input unchanged instead of failing
    #[arg(long)]
    lenient: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the LaTeX commands the Unicode converter knows
    Symbols {
        /// Only list this class
        #[arg(value_enum)]
        class: Option<ClassArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    /// Unicode text (never fails)
    Unicode,
    /// Hancom HwpEqn
    Hwpeqn,
    /// Normalized LaTeX
    Latex,
}

#[derive(Clone, Copy, ValueEnum)]
enum ClassArg {
    GreekLower,
    GreekUpper,
    Binary,
    Relation,
    Set,
    Arrow,
    Calculus,
    Logic,
    Misc,
}

impl From<ClassArg> for SymbolClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::GreekLower => SymbolClass::GreekLower,
            ClassArg::GreekUpper => SymbolClass::GreekUpper,
            ClassArg::Binary => SymbolClass::BinaryOperator,
            ClassArg::Relation => SymbolClass::Relation,
            ClassArg::Set => SymbolClass::SetOperator,
            ClassArg::Arrow => SymbolClass::Arrow,
            ClassArg::Calculus => SymbolClass::Calculus,
            ClassArg::Logic => SymbolClass::Logic,
            ClassArg::Misc => SymbolClass::Misc,
        }
    }
}

fn main() -> io::Result<()> {
    hwpmath::utils::logging::init_logging();
    let cli = Cli::parse();

    if let Some(Commands::Symbols { class }) = cli.command {
        print_symbols(class.map(SymbolClass::from));
        return Ok(());
    }

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = match cli.target {
        Target::Unicode => {
            let converted = latex_to_unicode_with_report(&input);
            write_report(cli.report.as_deref(), &converted.report)?;
            converted.content
        }
        Target::Hwpeqn if cli.lenient => {
            let converted = latex_to_hwpeqn_with_report(&input);
            write_report(cli.report.as_deref(), &converted.report)?;
            converted.content
        }
        Target::Hwpeqn => match latex_to_hwpeqn(&input) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Failed to convert LaTeX: {}", e);
                std::process::exit(2);
            }
        },
        Target::Latex => {
            let body = strip_math_delimiters(input.trim()).trim();
            match convert_dialect(body, Dialect::Latex, Dialect::Latex) {
                Ok(output) => output,
                Err(_) if cli.lenient => keep_input(&input),
                Err(e) => {
                    eprintln!("Failed to convert LaTeX: {}", e);
                    std::process::exit(2);
                }
            }
        }
    };

    let reported = matches!(cli.target, Target::Unicode)
        || (cli.lenient && matches!(cli.target, Target::Hwpeqn));
    if cli.report.is_some() && !reported {
        eprintln!("--report is only written for the unicode target and lenient hwpeqn");
    }

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

fn write_report(path: Option<&str>, report: &LossReport) -> io::Result<()> {
    if let Some(path) = path {
        let serialized = serde_json::to_string_pretty(report)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        fs::write(path, serialized)?;
    }
    Ok(())
}

fn keep_input(input: &str) -> String {
    tracing::warn!("LaTeX normalization failed, keeping input");
    input.to_string()
}

fn print_symbols(only: Option<SymbolClass>) {
    let classes: Vec<SymbolClass> = match only {
        Some(class) => vec![class],
        None => SymbolClass::ALL.to_vec(),
    };

    for (i, class) in classes.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", class.label());
        for (name, glyph) in symbols_in(class) {
            println!("  \\{:<16} {}", name, glyph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_is_default_target() {
        let cli = Cli::parse_from(["hwpmath"]);
        assert!(matches!(cli.target, Target::Unicode));
        assert!(!cli.lenient);
    }

    #[test]
    fn test_symbols_subcommand() {
        let cli = Cli::parse_from(["hwpmath", "symbols", "arrow"]);
        match cli.command {
            Some(Commands::Symbols { class: Some(class) }) => {
                assert_eq!(SymbolClass::from(class), SymbolClass::Arrow);
            }
            _ => panic!("expected symbols subcommand"),
        }
    }
}
