// befunge: run a Befunge program from a file

use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use befunge::interpreter::engine::Interpreter;
use crossterm::style::Stylize;

/// Command-line options
#[derive(Debug, Default)]
struct Options {
    path: String,
    max_steps: Option<u64>,
    seed: Option<u64>,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--max-steps" => options.max_steps = Some(parse_number(arg, iter.next())?),
            "--seed" => options.seed = Some(parse_number(arg, iter.next())?),
            "-v" | "--verbose" => options.verbose = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option '{}'", flag)),
            file => {
                if path.replace(file.to_string()).is_some() {
                    return Err("More than one program file given".to_string());
                }
            }
        }
    }

    options.path = path.ok_or_else(|| "No input file provided".to_string())?;
    Ok(options)
}

fn parse_number(flag: &str, value: Option<&String>) -> Result<u64, String> {
    let value = value.ok_or_else(|| format!("Missing value for {}", flag))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: '{}'", flag, value))
}

fn report(message: impl Display) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

fn usage(program_name: &str) {
    eprintln!();
    eprintln!(
        "Usage: {} <program.bf> [--max-steps N] [--seed N] [--verbose]",
        program_name
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-steps N   stop with an error after N steps without halting");
    eprintln!("  --seed N        seed the random direction opcode '?'");
    eprintln!("  -v, --verbose   print progress to stderr");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("befunge");

    let options = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(options) => options,
        Err(message) => {
            report(message);
            usage(program_name);
            process::exit(1);
        }
    };

    if !Path::new(&options.path).exists() {
        report(format!("File '{}' not found", options.path));
        process::exit(1);
    }

    let source = fs::read_to_string(&options.path)?;

    if options.verbose {
        eprintln!(
            "Loaded {} ({} rows).",
            options.path,
            source.lines().count()
        );
    }

    let mut interpreter = match options.seed {
        Some(seed) => Interpreter::seeded(seed),
        None => Interpreter::new(),
    };

    let result = match options.max_steps {
        Some(limit) => interpreter.run_bounded(&source, limit).map(|_| ()),
        None => {
            interpreter.run(&source);
            Ok(())
        }
    };

    let mut stdout = io::stdout();
    write!(stdout, "{}", interpreter.output())?;
    stdout.flush()?;

    match result {
        Ok(()) => {
            if options.verbose {
                eprintln!("Halted after {} steps.", interpreter.steps());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!();
            report(e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_options() {
        let options =
            parse_args(&args(&["prog.bf", "--max-steps", "500", "--seed", "9", "-v"])).unwrap();

        assert_eq!(options.path, "prog.bf");
        assert_eq!(options.max_steps, Some(500));
        assert_eq!(options.seed, Some(9));
        assert!(options.verbose);
    }

    #[test]
    fn test_parse_defaults() {
        let options = parse_args(&args(&["prog.bf"])).unwrap();

        assert_eq!(options.max_steps, None);
        assert_eq!(options.seed, None);
        assert!(!options.verbose);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["a.bf", "b.bf"])).is_err());
        assert!(parse_args(&args(&["a.bf", "--max-steps"])).is_err());
        assert!(parse_args(&args(&["a.bf", "--seed", "x"])).is_err());
        assert!(parse_args(&args(&["a.bf", "--trace"])).is_err());
    }
}
