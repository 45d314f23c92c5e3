use crate::banding;
use crate::detectors::{
    AllergyDetector, CalorieLoadDetector, Detector, DislikedIngredientDetector,
    HealthConditionDetector, HealthGoalDetector, RestrictionDetector,
};
use crate::types::{AnalysisResult, Recipe, UserProfile};

/// Summary used when there is no recipe data worth analyzing.
pub const SUMMARY_NO_RECIPE: &str = "No hay información suficiente para analizar esta receta.";

/// Summary used when the user has not filled in their health profile.
pub const SUMMARY_NO_PROFILE: &str =
    "Completa tu perfil de salud para recibir un análisis personalizado.";

/// The six detectors in their fixed evaluation order. The order is part of
/// the output contract: warnings appear in this order, never sorted by
/// severity.
fn detectors() -> [&'static dyn Detector; 6] {
    [
        &AllergyDetector,
        &RestrictionDetector,
        &HealthConditionDetector,
        &HealthGoalDetector,
        &CalorieLoadDetector,
        &DislikedIngredientDetector,
    ]
}

/// Analyze a recipe against a user profile and report compatibility.
///
/// Runs the six category detectors in fixed order, aggregates their
/// warnings into an overall risk (the maximum of the individual risk
/// percentages) and attaches a banded summary. Total over its inputs:
/// absent or empty data degrades to a trivial safe result, it never
/// fails.
///
/// # Arguments
/// * `recipe` - The recipe to evaluate, `None` when no recipe is loaded
/// * `profile` - The user's profile, `None` for unauthenticated users
///
/// # Returns
/// An [`AnalysisResult`] with the overall risk, the safety verdict, the
/// warnings in evaluation order and a user-facing summary.
pub fn analyze(recipe: Option<&Recipe>, profile: Option<&UserProfile>) -> AnalysisResult {
    let Some(recipe) = recipe else {
        return trivial(SUMMARY_NO_RECIPE);
    };
    if recipe.ingredients.is_empty() {
        return trivial(SUMMARY_NO_RECIPE);
    }
    let Some(profile) = profile else {
        return trivial(SUMMARY_NO_PROFILE);
    };
    if profile.health_info.is_none() {
        return trivial(SUMMARY_NO_PROFILE);
    }

    let mut warnings = Vec::new();
    for detector in detectors() {
        if let Some(warning) = detector.detect(recipe, profile) {
            warnings.push(warning);
        }
    }

    let overall_risk = warnings
        .iter()
        .map(|w| w.risk_percentage)
        .max()
        .unwrap_or(0);

    tracing::debug!(
        warning_count = warnings.len(),
        overall_risk,
        is_safe = banding::is_safe(overall_risk),
        "recipe analysis complete"
    );

    AnalysisResult {
        overall_risk,
        is_safe: banding::is_safe(overall_risk),
        warnings,
        summary: banding::summary_for(overall_risk).to_string(),
    }
}

fn trivial(summary: &str) -> AnalysisResult {
    AnalysisResult {
        overall_risk: 0,
        is_safe: true,
        warnings: Vec::new(),
        summary: summary.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HealthInfo, Ingredient, PersonalInfo, Preferences, WarningCategory};

    fn recipe(names: &[&str]) -> Recipe {
        Recipe {
            name: None,
            ingredients: names.iter().map(|n| Ingredient::new(*n)).collect(),
            calories: None,
        }
    }

    fn full_profile() -> UserProfile {
        UserProfile {
            health_info: Some(HealthInfo {
                allergies: vec!["lácteos".to_string()],
                dietary_restrictions: vec!["vegetariano".to_string()],
                health_conditions: vec!["diabetes".to_string()],
                health_goals: vec!["perder peso".to_string()],
            }),
            preferences: Some(Preferences {
                disliked_ingredients: vec!["cebolla".to_string()],
            }),
            personal_info: Some(PersonalInfo {
                daily_calorie_goal: Some(2000.0),
            }),
        }
    }

    #[test]
    fn test_missing_recipe_returns_guard_summary() {
        let result = analyze(None, Some(&full_profile()));
        assert_eq!(result.overall_risk, 0);
        assert!(result.is_safe);
        assert!(result.warnings.is_empty());
        assert_eq!(result.summary, SUMMARY_NO_RECIPE);
    }

    #[test]
    fn test_empty_ingredients_returns_guard_summary() {
        let empty = recipe(&[]);
        let result = analyze(Some(&empty), Some(&full_profile()));
        assert_eq!(result.summary, SUMMARY_NO_RECIPE);
    }

    #[test]
    fn test_missing_profile_returns_distinct_guard_summary() {
        let r = recipe(&["arroz", "agua"]);
        let result = analyze(Some(&r), None);
        assert!(result.is_safe);
        assert_eq!(result.summary, SUMMARY_NO_PROFILE);
        assert_ne!(result.summary, SUMMARY_NO_RECIPE);
    }

    #[test]
    fn test_profile_without_health_info_returns_profile_guard() {
        let r = recipe(&["arroz"]);
        let profile = UserProfile {
            preferences: Some(Preferences {
                disliked_ingredients: vec!["arroz".to_string()],
            }),
            ..UserProfile::default()
        };
        let result = analyze(Some(&r), Some(&profile));
        assert!(result.warnings.is_empty());
        assert_eq!(result.summary, SUMMARY_NO_PROFILE);
    }

    #[test]
    fn test_warnings_follow_fixed_evaluation_order() {
        let r = Recipe {
            calories: Some(1300.0),
            ..recipe(&["leche", "pollo", "azúcar", "cebolla"])
        };
        let result = analyze(Some(&r), Some(&full_profile()));

        let categories: Vec<WarningCategory> =
            result.warnings.iter().map(|w| w.category).collect();
        assert_eq!(
            categories,
            vec![
                WarningCategory::Allergy,
                WarningCategory::Restriction,
                WarningCategory::Health,
                WarningCategory::Goal,
                WarningCategory::Calories,
                WarningCategory::Nutrition,
            ]
        );
    }

    #[test]
    fn test_overall_risk_is_maximum_not_sum() {
        let r = recipe(&["leche", "azúcar"]);
        let result = analyze(Some(&r), Some(&full_profile()));
        assert_eq!(result.overall_risk, 100);
        assert!(!result.is_safe);
    }

    #[test]
    fn test_clean_recipe_summary_reports_no_conflicts() {
        let r = recipe(&["arroz", "agua"]);
        let profile = UserProfile {
            health_info: Some(HealthInfo::default()),
            ..UserProfile::default()
        };
        let result = analyze(Some(&r), Some(&profile));
        assert_eq!(result.overall_risk, 0);
        assert!(result.is_safe);
        assert!(result.warnings.is_empty());
        assert_eq!(result.summary, banding::SUMMARY_NO_CONFLICTS);
        assert_ne!(result.summary, SUMMARY_NO_PROFILE);
    }
}
