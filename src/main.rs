use std::{error::Error, fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use sicxe_lexer::{Token, Tokenizer, render_optab, render_tokens};
use tracing::Level;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// SIC/XE assembly source file
    source: PathBuf,

    /// Also print the operation table
    #[arg(long)]
    optab: bool,

    /// One of `TRACE`, `DEBUG`, `INFO`, `WARN`, or `ERROR`
    #[arg(short, long, default_value_t = Level::INFO)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = main_real(args) {
        tracing::error!("{e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn main_real(args: Args) -> Result<(), Box<dyn Error>> {
    let source = fs::read(&args.source)
        .map_err(|e| format!("Could not open file {}: {e}", args.source.display()))?;

    let tokenizer = Tokenizer::new()?;
    let mut tokens = tokenizer.tokenize_bytes(&source)?;
    tracing::info!(tokens = tokens.len(), "tokenized {}", args.source.display());
    tokens.push(Token::end_of_input(source.len()));

    if args.optab {
        println!("{}", render_optab(tokenizer.optab()));
    }
    print!("{}", render_tokens(&tokens));

    Ok(())
}
