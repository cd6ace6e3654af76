use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "leadscope",
    version,
    about = "Multi-rater leadership self-assessment scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory searched for leadscope.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one assessment file or every assessment under a directory
    Score(ScoreCommand),
    /// Score a single rater's answers on their own
    Rater(RaterCommand),
    /// Classify a raw esteem/trust/driver/adaptability/resolution tuple
    Classify(ClassifyCommand),
    /// List or export the question catalog
    Catalog(CatalogCommand),
    /// Show completion progress for an assessment
    Status(StatusCommand),
    /// Start a new assessment file
    New(NewCommand),
    /// Record one answer in an assessment file
    Answer(AnswerCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TableChoice {
    Archetype,
    Achiever,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RaterChoice {
    #[value(name = "self")]
    SelfRater,
    Rater1,
    Rater2,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub table: Option<TableChoice>,
}

#[derive(Args)]
pub struct RaterCommand {
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "self")]
    pub rater: RaterChoice,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub table: Option<TableChoice>,
}

#[derive(Args)]
pub struct ClassifyCommand {
    #[arg(allow_negative_numbers = true)]
    pub esteem: i32,
    #[arg(allow_negative_numbers = true)]
    pub trust: i32,
    #[arg(allow_negative_numbers = true)]
    pub driver: i32,
    #[arg(allow_negative_numbers = true)]
    pub adaptability: i32,
    #[arg(allow_negative_numbers = true)]
    pub problem_resolution: i32,
    #[arg(long, value_enum)]
    pub table: Option<TableChoice>,
}

#[derive(Args)]
pub struct CatalogCommand {
    /// Only list questions in this section
    #[arg(long)]
    pub section: Option<String>,
    /// Write the catalog snapshot as JSON to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Args)]
pub struct StatusCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct NewCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(Args)]
pub struct AnswerCommand {
    pub path: PathBuf,
    #[arg(long, value_enum)]
    pub rater: RaterChoice,
    #[arg(long)]
    pub question: String,
    #[arg(long)]
    pub score: u8,
    /// Rater email, required the first time an external rater answers
    #[arg(long)]
    pub email: Option<String>,
    /// Rater name, required the first time an external rater answers
    #[arg(long)]
    pub name: Option<String>,
}
