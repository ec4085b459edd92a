//! CLI argument definitions for the Abjad calculator.

use std::path::PathBuf;

use abjad_model::Convention;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "abjad",
    version,
    about = "Abjad letter numerology - name totals, profiles and compatibility",
    long_about = "Compute Abjad letter totals of Arabic names under the Maghribi or \
                  Mashriqi convention.\n\n\
                  Latin-script names are transliterated on a best-effort basis; \
                  Arabic script gives exact results."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file to use instead of the one in the config folder.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize Arabic text the way totals see it.
    Normalize(NormalizeArgs),

    /// Compute the Abjad total of a name.
    Total(TotalArgs),

    /// Full profile of a name: element, burj, planet and letter balance.
    Profile(ProfileArgs),

    /// Compatibility of two names.
    Compat(CompatArgs),

    /// Transliterate a Latin-script name into Arabic script.
    Translit(TranslitArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Keep tashkil and Quranic marks.
    #[arg(long = "keep-diacritics")]
    pub keep_diacritics: bool,

    /// Keep hamza forms (أ إ آ ؤ ئ ء) instead of folding them to their carrier.
    #[arg(long = "keep-hamza")]
    pub keep_hamza: bool,

    /// Do not expand the Allah ligature.
    #[arg(long = "no-allah")]
    pub no_allah: bool,

    /// Keep ta marbuta (ة) distinct instead of folding it to ha (ه).
    #[arg(long = "distinct-ta-marbuta")]
    pub distinct_ta_marbuta: bool,

    /// Keep tatweel (ـ).
    #[arg(long = "keep-tatweel")]
    pub keep_tatweel: bool,

    /// Remove all whitespace.
    #[arg(long = "no-spaces")]
    pub no_spaces: bool,
}

#[derive(Args)]
pub struct TotalArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Letter-value convention (default from settings).
    #[arg(long = "convention", value_enum)]
    pub convention: Option<ConventionArg>,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Mother's name; shifts the burj.
    #[arg(long = "mother", value_name = "NAME")]
    pub mother: Option<String>,

    /// Letter-value convention (default from settings).
    #[arg(long = "convention", value_enum)]
    pub convention: Option<ConventionArg>,
}

#[derive(Args)]
pub struct CompatArgs {
    #[arg(value_name = "NAME_A")]
    pub name_a: String,

    #[arg(value_name = "NAME_B")]
    pub name_b: String,

    /// First person's mother; with --mother-b enables the daily layer.
    #[arg(long = "mother-a", value_name = "NAME")]
    pub mother_a: Option<String>,

    /// Second person's mother.
    #[arg(long = "mother-b", value_name = "NAME")]
    pub mother_b: Option<String>,

    /// Letter-value convention (default from settings).
    #[arg(long = "convention", value_enum)]
    pub convention: Option<ConventionArg>,

    /// Print how each method contributed to the overall score.
    #[arg(long = "explain")]
    pub explain: bool,
}

#[derive(Args)]
pub struct TranslitArgs {
    #[arg(value_name = "TEXT")]
    pub text: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ConventionArg {
    Maghribi,
    Mashriqi,
}

impl From<ConventionArg> for Convention {
    fn from(value: ConventionArg) -> Self {
        match value {
            ConventionArg::Maghribi => Convention::Maghribi,
            ConventionArg::Mashriqi => Convention::Mashriqi,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
