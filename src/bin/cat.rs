//! cat - concatenate files to standard output
//!
//! Lines pass through squeezing, numbering and the show-ends/show-tabs
//! formatter before they are written.

use anyhow::Context;
use clap::{ArgAction, Parser};
use lineutils_core::cli::{logging, normalize_flag_spellings, CliResult, FlagSpellings};
use lineutils_core::{AppConfig, Concatenator, EffectiveFlags, RawFlags, Source};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Options accepted with either one or two dashes
const SPELLINGS: FlagSpellings<'static> = FlagSpellings {
    long: &["help", "version"],
    short: &['A', 'b', 'e', 'E', 'n', 's', 't', 'T', 'u', 'v'],
};

/// Concatenate FILE(s) to standard output.
#[derive(Parser, Debug)]
#[command(
    name = "cat",
    version = lineutils_core::VERSION,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    after_help = "With no FILE, or when FILE is -, read standard input.\n\n\
                  Every option may be spelled with one or two dashes (-n is the same as --n).\n\
                  -v is accepted but has no effect."
)]
struct Cli {
    /// equivalent to -vET
    #[arg(short = 'A', long = "show-all")]
    show_all: bool,

    /// number nonempty output lines, overrides -n
    #[arg(short = 'b', long = "number-nonblank")]
    number_nonblank: bool,

    /// equivalent to -vE
    #[arg(short = 'e')]
    show_ends_nonprinting: bool,

    /// display $ at end of each line
    #[arg(short = 'E', long = "show-ends")]
    show_ends: bool,

    /// number all output lines
    #[arg(short = 'n', long = "number")]
    number: bool,

    /// suppress repeated empty output lines
    #[arg(short = 's', long = "squeeze-blank")]
    squeeze_blank: bool,

    /// equivalent to -vT
    #[arg(short = 't')]
    show_tabs_nonprinting: bool,

    /// display TAB characters as ^I
    #[arg(short = 'T', long = "show-tabs")]
    show_tabs: bool,

    /// (ignored)
    #[arg(short = 'u')]
    unbuffered: bool,

    /// use ^ and M- notation, except for LFD and TAB (no effect)
    #[arg(short = 'v', long = "show-nonprinting")]
    show_nonprinting: bool,

    /// display this help and exit
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// output version information and exit
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Files to concatenate
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn raw_flags(&self) -> RawFlags {
        RawFlags {
            show_all: self.show_all,
            number_nonblank: self.number_nonblank,
            show_ends_nonprinting: self.show_ends_nonprinting,
            show_ends: self.show_ends,
            squeeze_blank: self.squeeze_blank,
            number: self.number,
            show_tabs_nonprinting: self.show_tabs_nonprinting,
            show_tabs: self.show_tabs,
            unbuffered: self.unbuffered,
            show_nonprinting: self.show_nonprinting,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_flag_spellings(std::env::args_os(), SPELLINGS));

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            logging::init(logging::DEFAULT_LEVEL);
            let result = CliResult::config_error(e.to_string());
            tracing::error!("{}", e);
            return result.to_exit_code();
        }
    };
    logging::init(&config.logging.level);
    config.apply_env(|key| std::env::var(key).ok());

    let result = run(&cli, &config).unwrap_or_else(CliResult::from);
    if let (false, Some(msg)) = (result.is_success(), result.message()) {
        tracing::error!("{}", msg);
    }
    result.to_exit_code()
}

fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<CliResult> {
    let flags = EffectiveFlags::normalize(&cli.raw_flags());
    let sources = Source::from_args(&cli.files);
    tracing::debug!(?flags, sources = sources.len(), "starting");

    let mut cat = Concatenator::new(flags, io::stdout().lock());
    let summary = cat.run(&sources).context("write error")?;

    if config.cat.strict_exit && summary.has_failures() {
        return Ok(CliResult::failure(format!(
            "{} of {} sources failed",
            summary.open_failures + summary.read_failures,
            summary.sources
        )));
    }
    Ok(CliResult::success())
}
