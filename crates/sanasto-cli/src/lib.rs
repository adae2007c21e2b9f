// sanasto-cli: shared utilities for CLI tools.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::ValueEnum;
use log::LevelFilter;
use serde::Serialize;

use sanasto_check::{CheckError, Classification, FormatCheck, NumberPolicy, Token};

/// Path that stands for standard input.
const STDIN_PATH: &str = "-";

/// Error type for the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A source file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No dictionary argument and no `SANASTO_DICT`.
    #[error("no dictionary given (pass a path or set SANASTO_DICT)")]
    MissingDictionary,

    /// Both sources would be read from standard input.
    #[error("input and dictionary cannot both be read from stdin")]
    StdinTwice,

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Option values
// ---------------------------------------------------------------------------

/// `--numbers` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumbersArg {
    /// Skip tokens made of digits only.
    DigitsOnly,
    /// Skip every token starting with a digit (ordinals like 1st).
    LeadingDigit,
}

impl From<NumbersArg> for NumberPolicy {
    fn from(arg: NumbersArg) -> Self {
        match arg {
            NumbersArg::DigitsOnly => NumberPolicy::DigitsOnly,
            NumbersArg::LeadingDigit => NumberPolicy::LeadingDigit,
        }
    }
}

/// `--format-check` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatCheckArg {
    Off,
    Warn,
    Strict,
}

impl From<FormatCheckArg> for FormatCheck {
    fn from(arg: FormatCheckArg) -> Self {
        match arg {
            FormatCheckArg::Off => FormatCheck::Off,
            FormatCheckArg::Warn => FormatCheck::Warn,
            FormatCheckArg::Strict => FormatCheck::Strict,
        }
    }
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One unknown token per line.
    #[default]
    Plain,
    /// A JSON document.
    Json,
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Read a whole text source; `-` reads standard input.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    let unavailable = |source| CliError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(unavailable)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(unavailable)
    }
}

/// Whether `path` stands for standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Pick the dictionary path: the explicit argument, else `SANASTO_DICT`.
///
/// clap already folds the environment variable into the argument; this
/// only turns its absence into an error.
pub fn resolve_dictionary(dict: Option<PathBuf>) -> Result<PathBuf, CliError> {
    dict.filter(|p| !p.as_os_str().is_empty())
        .ok_or(CliError::MissingDictionary)
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    unknown: &'a [Token],
    #[serde(skip_serializing_if = "Option::is_none")]
    known: Option<&'a [Token]>,
    numbers_skipped: usize,
}

/// Write a classification to `out`.
///
/// Plain output lists only the unknown tokens, one per line. JSON output
/// includes the known tokens too when `include_known` is set.
pub fn write_report<W: Write>(
    out: &mut W,
    result: &Classification,
    format: OutputFormat,
    include_known: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Plain => {
            for token in &result.unknown {
                writeln!(out, "{token}")?;
            }
        }
        OutputFormat::Json => {
            let report = JsonReport {
                unknown: &result.unknown,
                known: include_known.then_some(result.known.as_slice()),
                numbers_skipped: result.numbers_skipped,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Process helpers
// ---------------------------------------------------------------------------

/// Initialize logging on stderr.
///
/// Each `-v` raises the default level once (warn, then info, then debug).
/// `RUST_LOG` is applied last and overrides that default.
pub fn init_logging(verbosity: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(verbosity_level(verbosity));
    builder.parse_default_env();
    let _ = builder.try_init();
}

fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
