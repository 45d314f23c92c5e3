use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{AsRefStr, Display, EnumString};

/// One recipe ingredient as received from the catalog.
///
/// `quantity` and `unit` are pass-through display fields; the analysis only
/// reads `name`. Entries whose name is missing or blank are skipped by the
/// detectors rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            quantity: None,
            unit: None,
        }
    }
}

/// Recipe data needed for compatibility analysis.
///
/// `name` is a presentation pass-through used by hosts to label results;
/// `calories` is per serving when the catalog knows it. Both are optional
/// and their absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

impl Recipe {
    /// Deserialize from the catalog's JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Health section of a user profile. Every list defaults to empty: an
/// absent list means "no constraint", never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthInfo {
    pub allergies: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub health_conditions: Vec<String>,
    pub health_goals: Vec<String>,
}

/// Food preferences section of a user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub disliked_ingredients: Vec<String>,
}

/// Personal data section of a user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_goal: Option<f64>,
}

/// User profile as stored by the app. All sections are optional; a profile
/// without `health_info` yields a trivial "profile incomplete" analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_info: Option<HealthInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_info: Option<PersonalInfo>,
}

impl UserProfile {
    /// Deserialize from the app's JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Severity attached to a single warning.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Caution,
    Warning,
    Danger,
}

/// Category a warning was raised under. Disliked-ingredient warnings report
/// under `Nutrition` (the preference category of the profile editor).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WarningCategory {
    Allergy,
    Restriction,
    Health,
    Goal,
    Calories,
    Nutrition,
}

/// One triggered category: why it fired and what to do about it.
///
/// `affected_ingredients` is a deduplicated, deterministically ordered set
/// of the original-cased ingredient names that caused the match. It is
/// empty only for the calorie category, which is a whole-recipe property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub level: RiskLevel,
    pub risk_percentage: u8,
    pub category: WarningCategory,
    pub reasons: Vec<String>,
    pub affected_ingredients: BTreeSet<String>,
    pub recommendations: Vec<String>,
}

/// Outcome of one analysis run. Recomputed on every call; holds no
/// identity and is never cached by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_risk: u8,
    pub is_safe: bool,
    pub warnings: Vec<Warning>,
    pub summary: String,
}

impl AnalysisResult {
    /// Serialize to the JSON shape consumed by app screens.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a previously serialized result.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
