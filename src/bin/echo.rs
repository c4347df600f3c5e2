//! echo - display a line of text
//!
//! Escape interpretation is decided by a scan of the argument tokens, so
//! `-e -E` and `-E -e` resolve by position, the later flag winning. Text that
//! is not UTF-8 is written as given.

use clap::{ArgAction, Parser};
use lineutils_core::cli::{logging, normalize_flag_spellings, raw_tokens, CliResult, FlagSpellings};
use lineutils_core::{echo, AppConfig, EchoError, EchoOptions};
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

/// Options accepted with either one or two dashes
const SPELLINGS: FlagSpellings<'static> = FlagSpellings {
    long: &["help", "version"],
    short: &['n', 'e', 'E'],
};

/// Echo the STRING(s) to standard output.
#[derive(Parser, Debug)]
#[command(
    name = "echo",
    version = lineutils_core::VERSION,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// do not output the trailing newline
    #[arg(short = 'n')]
    no_newline: bool,

    /// enable interpretation of backslash escapes
    #[arg(short = 'e')]
    enable_escapes: bool,

    /// disable interpretation of backslash escapes (default)
    #[arg(short = 'E')]
    #[allow(dead_code)]
    disable_escapes: bool,

    /// display this help and exit
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// output version information and exit
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Text to print
    #[arg(value_name = "STRING", trailing_var_arg = true, allow_hyphen_values = true)]
    strings: Vec<OsString>,
}

fn main() -> ExitCode {
    let argv = normalize_flag_spellings(std::env::args_os(), SPELLINGS);
    let cli = Cli::parse_from(argv.iter());

    let level = match AppConfig::load() {
        Ok(config) => config.logging.level,
        Err(e) => {
            logging::init(logging::DEFAULT_LEVEL);
            tracing::error!("{}", e);
            return CliResult::config_error(e.to_string()).to_exit_code();
        }
    };
    logging::init(&level);

    let options = EchoOptions::from_tokens(cli.no_newline, cli.enable_escapes, raw_tokens(argv.iter()));
    tracing::debug!(?options, "resolved escape mode");

    let result = match echo(&mut io::stdout().lock(), &cli.strings, &options) {
        Ok(()) => CliResult::success(),
        Err(EchoError::Escape(e)) => CliResult::failure(e.to_string()),
        Err(EchoError::Io(e)) => CliResult::from(e),
    };
    if let (false, Some(msg)) = (result.is_success(), result.message()) {
        tracing::error!("{}", msg);
    }
    result.to_exit_code()
}
