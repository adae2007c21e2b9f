// sanasto-tokenize: Show how text splits into tokens.
//
// Prints every word run with its byte span and kind, in source order:
//   WORD   [   0..   5]: Thiss
//   NUMBER [  30..  32]: 42
//
// With --distinct, prints the normalized token set instead, sorted.
//
// Usage:
//   sanasto-tokenize [--distinct] [FILE]    (FILE defaults to stdin)

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use sanasto_check::{TokenKind, tokenize, word_spans};
use sanasto_cli::{CliError, fatal, init_logging, read_source};

#[derive(Parser, Debug)]
#[command(name = "sanasto-tokenize", version, about = "Show how text splits into tokens")]
struct Cli {
    /// Text to tokenize (`-` for stdin)
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Print the sorted distinct lowercase tokens instead of every run
    #[arg(long)]
    distinct: bool,

    /// Log details to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let text = read_source(&cli.file)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.distinct {
        let tokens = tokenize(&text);
        log::info!("{} distinct tokens", tokens.len());
        for token in tokens.sorted() {
            writeln!(out, "{token}")?;
        }
    } else {
        for span in word_spans(&text) {
            let kind = match span.kind() {
                TokenKind::Word => "WORD",
                TokenKind::Number => "NUMBER",
            };
            writeln!(
                out,
                "{kind:6} [{:>4}..{:>4}]: {}",
                span.start,
                span.end(),
                span.text
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        fatal(&e.to_string());
    }
}
