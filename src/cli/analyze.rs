use crate::config::Config;
use crate::error::AppError;
use clap::ValueEnum;
use nutrition::{analyze, color_for, icon_for, AnalysisResult, Recipe, UserProfile};
use serde::Serialize;
use std::path::{Path, PathBuf};

const UNNAMED_RECIPE: &str = "Receta sin nombre";

/// Rendering chosen for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Compact presentation of one analyzed recipe, used by list surfaces.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeBadge {
    pub name: String,
    pub overall_risk: u8,
    pub is_safe: bool,
    pub color: &'static str,
    pub icon: &'static str,
}

impl RecipeBadge {
    fn new(recipe: &Recipe, result: &AnalysisResult) -> Self {
        RecipeBadge {
            name: recipe
                .name
                .clone()
                .unwrap_or_else(|| UNNAMED_RECIPE.to_string()),
            overall_risk: result.overall_risk,
            is_safe: result.is_safe,
            color: color_for(result.overall_risk),
            icon: icon_for(result.overall_risk),
        }
    }
}

/// Analyze one recipe file against an optional profile file and print the
/// result in the requested format.
#[tracing::instrument(skip(config))]
pub fn analyze_command(
    config: Config,
    recipe_path: PathBuf,
    profile_path: Option<PathBuf>,
    format_override: Option<OutputFormat>,
) -> Result<(), AppError> {
    let format = resolve_format(&config, format_override)?;
    let recipe = load_recipe(&recipe_path)?;
    let profile = profile_path.as_deref().map(load_profile).transpose()?;

    let result = analyze(Some(&recipe), profile.as_ref());
    tracing::info!(
        overall_risk = result.overall_risk,
        is_safe = result.is_safe,
        warning_count = result.warnings.len(),
        "analysis finished"
    );

    match format {
        OutputFormat::Json => println!("{}", result.to_json()?),
        OutputFormat::Text => println!("{}", render_report(&recipe, &result)),
    }

    Ok(())
}

/// Analyze every recipe in a JSON array file and print one badge per
/// recipe.
#[tracing::instrument(skip(config))]
pub fn batch_command(
    config: Config,
    recipes_path: PathBuf,
    profile_path: Option<PathBuf>,
    format_override: Option<OutputFormat>,
) -> Result<(), AppError> {
    let format = resolve_format(&config, format_override)?;
    let recipes = load_recipes(&recipes_path)?;
    let profile = profile_path.as_deref().map(load_profile).transpose()?;

    let badges: Vec<RecipeBadge> = recipes
        .iter()
        .map(|recipe| {
            let result = analyze(Some(recipe), profile.as_ref());
            RecipeBadge::new(recipe, &result)
        })
        .collect();
    tracing::info!(recipe_count = badges.len(), "batch analysis finished");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&badges)?),
        OutputFormat::Text => {
            for badge in &badges {
                println!("{} {:>3}% {}", badge.icon, badge.overall_risk, badge.name);
            }
        }
    }

    Ok(())
}

fn resolve_format(
    config: &Config,
    cli_override: Option<OutputFormat>,
) -> Result<OutputFormat, AppError> {
    match cli_override {
        Some(format) => Ok(format),
        None => OutputFormat::from_str(&config.output.format, true)
            .map_err(AppError::ValidationError),
    }
}

fn load_recipe(path: &Path) -> Result<Recipe, AppError> {
    let json = read_file(path)?;
    Recipe::from_json(&json).map_err(|source| json_parse_error(path, source))
}

fn load_recipes(path: &Path) -> Result<Vec<Recipe>, AppError> {
    let json = read_file(path)?;
    serde_json::from_str(&json).map_err(|source| json_parse_error(path, source))
}

fn load_profile(path: &Path) -> Result<UserProfile, AppError> {
    let json = read_file(path)?;
    UserProfile::from_json(&json).map_err(|source| json_parse_error(path, source))
}

fn read_file(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| {
        tracing::error!("failed to read {}: {source}", path.display());
        AppError::FileReadError {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn json_parse_error(path: &Path, source: serde_json::Error) -> AppError {
    tracing::error!("invalid JSON in {}: {source}", path.display());
    AppError::JsonParseError {
        path: path.to_path_buf(),
        source,
    }
}

fn render_report(recipe: &Recipe, result: &AnalysisResult) -> String {
    let name = recipe.name.as_deref().unwrap_or(UNNAMED_RECIPE);
    let mut lines = vec![
        format!("{} {}", icon_for(result.overall_risk), name),
        format!("Riesgo general: {}%", result.overall_risk),
        result.summary.clone(),
    ];

    for warning in &result.warnings {
        lines.push(String::new());
        lines.push(format!(
            "[{}] riesgo {}%",
            warning.category, warning.risk_percentage
        ));
        for reason in &warning.reasons {
            lines.push(format!("  - {reason}"));
        }
        if !warning.affected_ingredients.is_empty() {
            let affected: Vec<&str> = warning
                .affected_ingredients
                .iter()
                .map(String::as_str)
                .collect();
            lines.push(format!("  Ingredientes: {}", affected.join(", ")));
        }
        for recommendation in &warning.recommendations {
            lines.push(format!("  Sugerencia: {recommendation}"));
        }
    }

    lines.join("\n")
}
