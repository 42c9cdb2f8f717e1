//! `jsm`: command-line front end for the `jsmin_core` minifier.
//!
//! Minifies each input in order (files, or stdin when none are given) and
//! writes the concatenated result to stdout or to `--output`. Nothing is
//! written unless every input minifies cleanly.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive; overrides `-v`.
const LOG_ENV: &str = "JSM_LOG";

/// Strip comments and insignificant whitespace from JavaScript.
#[derive(Debug, Parser)]
#[command(name = "jsm")]
#[command(version)]
#[command(about = "Strip comments and insignificant whitespace from JavaScript")]
struct Cli {
    /// Input files, minified and concatenated in order (`-` or none: stdin)
    files: Vec<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print input and output sizes for every file to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Where one piece of source text comes from.
#[derive(Debug)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn from_args(files: &[PathBuf]) -> Vec<Input> {
        if files.is_empty() {
            return vec![Input::Stdin];
        }
        files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }

    fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .context("failed to read stdin")?;
                Ok(source)
            }
            Input::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Minify every input into one buffer, failing on the first bad input.
fn minify_all(inputs: &[Input], stats: bool) -> Result<String> {
    let mut out = String::new();
    for input in inputs {
        let source = input.read()?;
        let before = out.len();
        if let Err(err) = jsmin_core::minify_into(&source, &mut out) {
            let location = format!("failed to minify {input}:{}", err.start());
            return Err(anyhow::Error::new(err).context(location));
        }
        let written = out.len() - before;
        info!(file = %input, input_bytes = source.len(), output_bytes = written, "minified");
        if stats {
            eprintln!("{input}: {} -> {written} bytes", source.len());
        }
    }
    Ok(out)
}

fn run(cli: &Cli) -> Result<()> {
    let inputs = Input::from_args(&cli.files);
    debug!(count = inputs.len(), "collected inputs");
    let out = minify_all(&inputs, cli.stats)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &out).with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(out.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}
