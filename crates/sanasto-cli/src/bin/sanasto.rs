// sanasto: Report the words of a text that a dictionary does not know.
//
// Both files are split into lowercase words (runs of [A-Za-z0-9_]). Each
// distinct input word missing from the dictionary is printed once, sorted.
// Numbers are never reported.
//
// Usage:
//   sanasto [OPTIONS] INPUT [DICTIONARY]
//
// The dictionary defaults to $SANASTO_DICT. Either path may be `-` for stdin.
// Timings and format warnings go to stderr (-v for more); stdout carries
// only the report.

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::info;

use sanasto_check::{CheckOptions, SpellChecker};
use sanasto_cli::{
    CliError, FormatCheckArg, NumbersArg, OutputFormat, fatal, init_logging, is_stdin,
    read_source, resolve_dictionary, write_report,
};

#[derive(Parser, Debug)]
#[command(
    name = "sanasto",
    version,
    about = "Report the words of a text that a dictionary does not know"
)]
struct Cli {
    /// Text to check
    input: PathBuf,

    /// Dictionary of correct words, one per line
    #[arg(env = "SANASTO_DICT")]
    dictionary: Option<PathBuf>,

    /// Which tokens count as numbers and are never reported
    #[arg(long, value_enum, default_value_t = NumbersArg::DigitsOnly)]
    numbers: NumbersArg,

    /// What to do when a source is not one word per line
    #[arg(long, value_enum, default_value_t = FormatCheckArg::Warn)]
    format_check: FormatCheckArg,

    /// Expected lines-to-words ratio for the format check
    #[arg(long, default_value_t = 1.0)]
    expected_ratio: f64,

    /// Run the format check on the input too
    #[arg(long)]
    check_input_format: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Include known words in JSON output
    #[arg(long)]
    known: bool,

    /// Log timings (-v) and details (-vv) to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let dictionary_path = resolve_dictionary(cli.dictionary)?;
    if is_stdin(&cli.input) && is_stdin(&dictionary_path) {
        return Err(CliError::StdinTwice);
    }

    let options = CheckOptions {
        number_policy: cli.numbers.into(),
        format_check: cli.format_check.into(),
        expected_ratio: cli.expected_ratio,
        check_input_format: cli.check_input_format,
    };

    info!("reading dictionary {}", dictionary_path.display());
    let dictionary = read_source(&dictionary_path)?;
    let checker = SpellChecker::from_dictionary_text(&dictionary, options)?;

    info!("reading input {}", cli.input.display());
    let input = read_source(&cli.input)?;
    let result = checker.classify_text(&input)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_report(&mut out, &result, cli.format, cli.known)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        fatal(&e.to_string());
    }
}
