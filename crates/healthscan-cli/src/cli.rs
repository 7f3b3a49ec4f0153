use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use healthscan_core::models::symptom::SymptomCategory;

#[derive(Debug, Parser)]
#[command(name = "healthscan")]
#[command(about = "Rule-based symptom, mood and medical report analysis")]
#[command(version)]
pub struct Cli {
    /// Taxonomy JSON file to use instead of the built-in tables
    #[arg(long, global = true)]
    pub taxonomy: Option<PathBuf>,

    /// Config file (defaults to <config dir>/healthscan/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank possible conditions for free text or a list of symptom ids
    Analyze(AnalyzeArgs),
    /// Classify the emotional state of a journal entry
    Emotion {
        #[arg(long)]
        text: String,
    },
    /// Extract symptoms, mood and lifestyle cues from a journal entry
    Context {
        #[arg(long)]
        text: String,
    },
    /// Symptoms, mood, lifestyle and risk factors of a journal entry at once
    Insights {
        #[arg(long)]
        text: String,
    },
    /// Analyze the plain text of a medical report
    Report {
        #[arg(long)]
        file: PathBuf,
    },
    /// List known symptoms
    Symptoms {
        /// Only symptoms in this category (e.g. Respiratory)
        #[arg(long)]
        category: Option<SymptomCategory>,
        /// Only symptoms whose name or category contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// List known conditions
    Conditions,
    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Free-text symptom description
    #[arg(long)]
    pub text: Option<String>,
    /// Comma-separated symptom ids
    #[arg(long, value_delimiter = ',')]
    pub symptoms: Option<Vec<String>>,
    /// Plain-text file holding a symptom description
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Drop conditions at or below this percentage
    #[arg(long)]
    pub min_probability: Option<u32>,

    /// Return at most this many conditions
    #[arg(long)]
    pub max_conditions: Option<usize>,

    /// Fail on unknown symptom ids instead of skipping them
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}
