use std::fs;

use clap::Parser;
use exprtree::{evaluate, parse};

/// exprtree evaluates arithmetic expressions such as `(1 + 2) * 3`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the contents as a path to a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression tree instead of its value.
    #[arg(short, long)]
    tree: bool,

    contents: String,
}

fn run(expression: &str, tree: bool) -> Result<String, exprtree::error::EvalError> {
    if tree {
        parse(expression).map(|expr| format!("{expr:#?}"))
    } else {
        evaluate(expression).map(|value| value.to_string())
    }
}

fn main() {
    let args = Args::parse();

    let expressions: Vec<String> = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        });
        script.lines()
              .filter(|line| !line.trim().is_empty())
              .map(str::to_string)
              .collect()
    } else {
        vec![args.contents]
    };

    let mut failed = false;
    for expression in &expressions {
        match run(expression, args.tree) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
