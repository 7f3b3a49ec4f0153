use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use healthscan_analysis::{emotion, insights, report, AnalysisConfig, Analyzer};
use healthscan_core::models::analysis::{AnalysisInput, AnalysisResult};
use healthscan_core::models::symptom::{Symptom, SymptomCategory};
use healthscan_taxonomy::Taxonomy;

use crate::cli::{AnalyzeArgs, Cli, Commands, ConfigCommand, InputArgs};
use crate::config::{self, HealthscanConfig};

/// The built-in taxonomy, or the one read from `path`.
pub fn load_taxonomy(path: Option<&Path>) -> eyre::Result<Cow<'static, Taxonomy>> {
    match path {
        Some(path) => Ok(Cow::Owned(Taxonomy::from_path(path)?)),
        None => Ok(Cow::Borrowed(healthscan_taxonomy::builtin())),
    }
}

/// Turn the mutually exclusive input flags into an analysis input.
pub fn read_input(args: &InputArgs) -> eyre::Result<AnalysisInput> {
    if let Some(text) = &args.text {
        return Ok(AnalysisInput::text(text.as_str()));
    }
    if let Some(ids) = &args.symptoms {
        return Ok(AnalysisInput::symptom_ids(ids.iter().map(String::as_str)));
    }
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
        return Ok(AnalysisInput::Text(text));
    }
    Err(eyre::eyre!("one of --text, --symptoms or --file is required"))
}

/// File settings with command-line overrides applied on top.
pub fn effective_analysis_config(file: &AnalysisConfig, args: &AnalyzeArgs) -> AnalysisConfig {
    AnalysisConfig {
        min_probability: args.min_probability.unwrap_or(file.min_probability),
        max_conditions: args.max_conditions.unwrap_or(file.max_conditions),
        reject_unknown_ids: args.strict || file.reject_unknown_ids,
    }
}

pub fn run_analyze(
    taxonomy: &Taxonomy,
    config: AnalysisConfig,
    input: &AnalysisInput,
) -> eyre::Result<AnalysisResult> {
    let analyzer = Analyzer::new(taxonomy, config)?;
    Ok(analyzer.analyze(input)?)
}

/// Symptoms filtered by category and/or a name search.
pub fn list_symptoms<'t>(
    taxonomy: &'t Taxonomy,
    category: Option<SymptomCategory>,
    search: Option<&str>,
) -> Vec<&'t Symptom> {
    let candidates = match search {
        Some(query) => taxonomy.search_symptoms(query),
        None => taxonomy.symptoms().iter().collect(),
    };
    candidates
        .into_iter()
        .filter(|s| category.is_none_or(|c| s.category == c))
        .collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn config_path(cli: &Cli) -> eyre::Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => config::default_config_path(),
    }
}

pub fn run(cli: Cli) -> eyre::Result<()> {
    let config_path = config_path(&cli)?;

    if let Commands::Config(command) = &cli.command {
        return run_config(command, &config_path);
    }

    let file_config = config::load_config(&config_path)?;
    let taxonomy_path = cli.taxonomy.as_deref().or(file_config.taxonomy_path.as_deref());
    let taxonomy = load_taxonomy(taxonomy_path)?;
    debug!(
        symptoms = taxonomy.symptoms().len(),
        conditions = taxonomy.conditions().len(),
        "taxonomy ready"
    );

    match &cli.command {
        Commands::Analyze(args) => {
            let input = read_input(&args.input)?;
            let config = effective_analysis_config(&file_config.analysis, args);
            let result = run_analyze(&taxonomy, config, &input)?;
            print_json(&result)
        }
        Commands::Emotion { text } => print_json(&emotion::analyze_emotional_state(text)),
        Commands::Context { text } => {
            print_json(&emotion::extract_health_context(text, &taxonomy))
        }
        Commands::Insights { text } => print_json(&insights::analyze_health_text(
            text,
            &taxonomy,
            file_config.analysis,
        )?),
        Commands::Report { file } => {
            let text = std::fs::read_to_string(file)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))?;
            print_json(&report::analyze_report(&text))
        }
        Commands::Symptoms { category, search } => {
            print_json(&list_symptoms(&taxonomy, *category, search.as_deref()))
        }
        Commands::Conditions => print_json(taxonomy.conditions()),
        Commands::Config(_) => Ok(()),
    }
}

fn run_config(command: &ConfigCommand, path: &Path) -> eyre::Result<()> {
    match command {
        ConfigCommand::Show => print_json(&config::load_config(path)?),
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                ));
            }
            config::save_config(&HealthscanConfig::current(), path)?;
            info!(path = %path.display(), "config initialised");
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
