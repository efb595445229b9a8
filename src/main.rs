use std::fs;

use clap::{ArgAction, Parser};
use cinder::{evaluate, parse};
use tracing::{Level, info};

/// cinder runs programs written in a small C-like teaching language and
/// prints the integer returned by `main`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells cinder to read the program from a file instead of taking it
    /// literally.
    #[arg(short, long)]
    file: bool,

    /// Binds an integer input visible to `main`. May be given several times;
    /// bindings are applied in order.
    #[arg(short, long, value_name = "NAME=VALUE", value_parser = parse_binding)]
    bind: Vec<(String, i64)>,

    /// Prints the parsed program instead of running it.
    #[arg(long)]
    dump_ast: bool,

    /// Logs more detail to stderr: `-v` for debug, `-vv` for trace.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn parse_binding(raw: &str) -> Result<(String, i64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_target(false)
                             .with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let program = parse(&script).unwrap_or_else(|e| {
                                      eprintln!("{e}");
                                      std::process::exit(1);
                                  });

    if args.dump_ast {
        println!("{program:#?}");
        return;
    }

    info!(functions = program.functions.len(),
          bindings = args.bind.len(),
          "starting program");
    match evaluate(&program, args.bind) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
