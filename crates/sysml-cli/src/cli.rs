//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sysml_model::{CategoryPolicy, Stereotype, UniquenessScope};

#[derive(Parser)]
#[command(
    name = "sysml",
    version,
    about = "Check a YAML systems model and render its diagrams",
    long_about = "Check a systems-engineering model stored as a directory of YAML documents.\n\n\
                  `validate` runs the fixed rule battery and reports issues by severity.\n\
                  `generate-diagrams` renders PlantUML views of the same model."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a model directory and report issues.
    ///
    /// Exits with status 1 when any error-severity issue is found.
    Validate(ValidateArgs),

    /// Render PlantUML diagrams for a model directory.
    GenerateDiagrams(DiagramArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Directory containing the model's `*.yaml` documents.
    #[arg(value_name = "MODEL_DIR")]
    pub model_dir: PathBuf,

    /// Keep document keys outside the known categories instead of
    /// ignoring them. Their elements take part in reference resolution and
    /// the duplicate-identifier check.
    #[arg(long = "permissive")]
    pub permissive: bool,

    /// Which elements the duplicate-identifier check scans.
    #[arg(long = "uniqueness", value_enum, default_value = "top-level")]
    pub uniqueness: UniquenessArg,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

impl ValidateArgs {
    pub fn policy(&self) -> CategoryPolicy {
        if self.permissive {
            CategoryPolicy::Permissive
        } else {
            CategoryPolicy::Strict
        }
    }
}

#[derive(Parser)]
pub struct DiagramArgs {
    /// Directory containing the model's `*.yaml` documents.
    #[arg(value_name = "MODEL_DIR")]
    pub model_dir: PathBuf,

    /// Directory the `.puml` files are written to (created if missing).
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Title of the system boundary in the use case diagram.
    #[arg(long = "system-name", value_name = "NAME", default_value = "System")]
    pub system_name: String,

    /// Architecture layer shown by the block and interface diagrams.
    #[arg(long = "architecture", value_enum, default_value = "logical")]
    pub architecture: ArchitectureArg,

    /// Ignore document keys outside the known categories.
    #[arg(long = "strict")]
    pub strict: bool,
}

impl DiagramArgs {
    pub fn policy(&self) -> CategoryPolicy {
        if self.strict {
            CategoryPolicy::Strict
        } else {
            CategoryPolicy::Permissive
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum UniquenessArg {
    /// Top-level category lists only.
    TopLevel,
    /// Include parts, ports, flow properties and operations.
    Full,
}

impl From<UniquenessArg> for UniquenessScope {
    fn from(value: UniquenessArg) -> Self {
        match value {
            UniquenessArg::TopLevel => UniquenessScope::TopLevel,
            UniquenessArg::Full => UniquenessScope::Full,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ArchitectureArg {
    Logical,
    Physical,
}

impl From<ArchitectureArg> for Stereotype {
    fn from(value: ArchitectureArg) -> Self {
        match value {
            ArchitectureArg::Logical => Stereotype::Logical,
            ArchitectureArg::Physical => Stereotype::Physical,
        }
    }
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
