use crate::taxonomy;
use crate::types::{Recipe, RiskLevel, UserProfile, Warning, WarningCategory};
use std::collections::BTreeSet;

/// Detector trait for evaluating one risk category against a recipe.
///
/// A detector inspects the recipe's ingredients against one list of the
/// user's profile and produces at most one [`Warning`]. Detectors are
/// independent of each other; the analyzer runs them in a fixed order and
/// only aggregates their outputs.
pub trait Detector {
    /// Evaluate this category, returning a warning when at least one
    /// conflict was found and `None` otherwise.
    fn detect(&self, recipe: &Recipe, profile: &UserProfile) -> Option<Warning>;
}

/// Flags ingredients matching the user's declared allergies.
pub struct AllergyDetector;

/// Flags ingredients incompatible with the user's dietary restrictions.
pub struct RestrictionDetector;

/// Flags ingredients contraindicated for the user's health conditions.
pub struct HealthConditionDetector;

/// Flags ingredients on the avoid list of the user's health goals.
pub struct HealthGoalDetector;

/// Flags recipes whose calories take a large share of the daily goal.
pub struct CalorieLoadDetector;

/// Flags ingredients the user has marked as disliked.
pub struct DislikedIngredientDetector;

const ALLERGY_RECOMMENDATIONS: &[&str] = &[
    "Evita esta receta por completo.",
    "Revisa la etiqueta de cada ingrediente antes de cocinar.",
    "Busca una versión libre del alérgeno.",
];

const RESTRICTION_RECOMMENDATIONS: &[&str] = &[
    "Busca una versión de la receta adaptada a tu dieta.",
    "Sustituye los ingredientes señalados por alternativas compatibles.",
];

const HEALTH_RECOMMENDATIONS: &[&str] = &[
    "Consulta a tu médico o nutriólogo antes de consumirla.",
    "Si decides prepararla, modera la porción.",
];

const GOAL_RECOMMENDATIONS: &[&str] = &[
    "Sustituye los ingredientes señalados por opciones más ligeras.",
    "Ajusta la porción para mantenerte dentro de tu objetivo.",
];

const CALORIE_RECOMMENDATIONS: &[&str] = &[
    "Considera una porción más pequeña.",
    "Equilibra las demás comidas del día con opciones ligeras.",
];

const DISLIKED_RECOMMENDATIONS: &[&str] =
    &["Puedes omitir o sustituir estos ingredientes al prepararla."];

/// Matches accumulated by one keyword scan: the reason strings in scan
/// order plus the deduplicated set of original-cased ingredient names.
struct KeywordMatches {
    reasons: Vec<String>,
    affected: BTreeSet<String>,
}

/// Scan every ingredient of `recipe` for keywords derived from `items`.
///
/// For each profile item, its keyword list is resolved through `lookup`;
/// an item with no curated entry falls back to its own canonical string as
/// the sole keyword, so free-text profile entries still match. Matching is
/// case-insensitive substring containment over the ingredient name, and
/// one reason is produced per matched (ingredient, keyword) pair via
/// `reason(ingredient, keyword, item)`. Blank ingredient names are skipped.
fn scan_ingredients<L, R>(recipe: &Recipe, items: &[String], lookup: L, reason: R) -> KeywordMatches
where
    L: Fn(&str) -> Option<&'static [&'static str]>,
    R: Fn(&str, &str, &str) -> String,
{
    let mut matches = KeywordMatches {
        reasons: Vec::new(),
        affected: BTreeSet::new(),
    };

    for raw_item in items {
        let item = taxonomy::canonical(raw_item);
        if item.is_empty() {
            continue;
        }
        let keywords: Vec<String> = match lookup(&item) {
            Some(list) => list.iter().map(|k| (*k).to_string()).collect(),
            None => vec![item.clone()],
        };

        for ingredient in &recipe.ingredients {
            let name = ingredient.name.trim();
            if name.is_empty() {
                continue;
            }
            let lowered = name.to_lowercase();
            for keyword in &keywords {
                if lowered.contains(keyword.as_str()) {
                    matches.affected.insert(name.to_string());
                    matches.reasons.push(reason(name, keyword, &item));
                }
            }
        }
    }

    matches
}

/// Build the category's single warning, or `None` when nothing matched.
/// A keyword warning never carries an empty affected set.
fn build_warning(
    matches: KeywordMatches,
    level: RiskLevel,
    risk_percentage: u8,
    category: WarningCategory,
    recommendations: &[&str],
) -> Option<Warning> {
    if matches.affected.is_empty() {
        return None;
    }
    Some(Warning {
        level,
        risk_percentage,
        category,
        reasons: matches.reasons,
        affected_ingredients: matches.affected,
        recommendations: recommendations.iter().map(|r| (*r).to_string()).collect(),
    })
}

impl Detector for AllergyDetector {
    fn detect(&self, recipe: &Recipe, profile: &UserProfile) -> Option<Warning> {
        let allergies = profile.health_info.as_ref()?.allergies.as_slice();
        if allergies.is_empty() || recipe.ingredients.is_empty() {
            return None;
        }

        let matches = scan_ingredients(
            recipe,
            allergies,
            taxonomy::allergen_keywords,
            |ingredient, keyword, item| {
                format!("\"{ingredient}\" puede contener {keyword} (alergia: {item})")
            },
        );
        build_warning(
            matches,
            RiskLevel::Danger,
            100,
            WarningCategory::Allergy,
            ALLERGY_RECOMMENDATIONS,
        )
    }
}

impl Detector for RestrictionDetector {
    fn detect(&self, recipe: &Recipe, profile: &UserProfile) -> Option<Warning> {
        let restrictions = profile.health_info.as_ref()?.dietary_restrictions.as_slice();
        if restrictions.is_empty() || recipe.ingredients.is_empty() {
            return None;
        }

        let matches = scan_ingredients(
            recipe,
            restrictions,
            taxonomy::restriction_keywords,
            |ingredient, keyword, item| {
                format!("\"{ingredient}\" contiene {keyword}, no compatible con tu dieta {item}")
            },
        );
        build_warning(
            matches,
            RiskLevel::Warning,
            80,
            WarningCategory::Restriction,
            RESTRICTION_RECOMMENDATIONS,
        )
    }
}

impl Detector for HealthConditionDetector {
    fn detect(&self, recipe: &Recipe, profile: &UserProfile) -> Option<Warning> {
        let conditions = profile.health_info.as_ref()?.health_conditions.as_slice();
        if conditions.is_empty() || recipe.ingredients.is_empty() {
            return None;
        }

        let matches = scan_ingredients(
            recipe,
            conditions,
            taxonomy::condition_keywords,
            |ingredient, keyword, item| {
                format!("\"{ingredient}\" contiene {keyword}, no recomendado si tienes {item}")
            },
        );
        build_warning(
            matches,
            RiskLevel::Warning,
            70,
            WarningCategory::Health,
            HEALTH_RECOMMENDATIONS,
        )
    }
}

impl Detector for HealthGoalDetector {
    /// Goals only warn on their curated avoid list. Unknown goals produce
    /// no match (no single-keyword fallback: goal entries are structured
    /// avoid/prefer pairs, not flat keyword lists), and the risk stays at
    /// 50 no matter how many goals or ingredients matched.
    fn detect(&self, recipe: &Recipe, profile: &UserProfile) -> Option<Warning> {
        let goals = profile.health_info.as_ref()?.health_goals.as_slice();
        if goals.is_empty() || recipe.ingredients.is_empty() {
            return None;
        }

        let mut matches = KeywordMatches {
            reasons: Vec::new(),
            affected: BTreeSet::new(),
        };
        for raw_goal in goals {
            let goal = taxonomy::canonical(raw_goal);
            let Some(guidance) = taxonomy::goal_guidance(&goal) else {
                continue;
            };
            for ingredient in &recipe.ingredients {
                let name = ingredient.name.trim();
                if name.is_empty() {
                    continue;
                }
                let lowered = name.to_lowercase();
                for keyword in guidance.avoid {
                    if lowered.contains(keyword) {
                        matches.affected.insert(name.to_string());
                        matches.reasons.push(format!(
                            "\"{name}\" contiene {keyword}, lo que no favorece tu objetivo de {goal}"
                        ));
                    }
                }
            }
        }

        build_warning(
            matches,
            RiskLevel::Caution,
            50,
            WarningCategory::Goal,
            GOAL_RECOMMENDATIONS,
        )
    }
}

impl Detector for CalorieLoadDetector {
    /// Compares per-serving calories to the user's daily goal. Below 40%
    /// of the goal there is nothing to report; 40–60% is a caution, above
    /// 60% a warning. No ingredient attribution: calorie load is a
    /// property of the whole recipe.
    fn detect(&self, recipe: &Recipe, profile: &UserProfile) -> Option<Warning> {
        let calories = recipe.calories?;
        let goal = profile.personal_info.as_ref()?.daily_calorie_goal?;
        if goal <= 0.0 {
            // A non-positive goal is malformed profile data; treat as absent.
            return None;
        }

        let pct = calories / goal * 100.0;
        if pct < 40.0 {
            return None;
        }
        let (level, risk_percentage) = if pct > 60.0 {
            (RiskLevel::Warning, 50)
        } else {
            (RiskLevel::Caution, 30)
        };

        Some(Warning {
            level,
            risk_percentage,
            category: WarningCategory::Calories,
            reasons: vec![
                format!("Esta receta aporta {calories:.0} calorías por porción."),
                format!("Equivale al {pct:.1}% de tu meta diaria de {goal:.0} calorías."),
            ],
            affected_ingredients: BTreeSet::new(),
            recommendations: CALORIE_RECOMMENDATIONS
                .iter()
                .map(|r| (*r).to_string())
                .collect(),
        })
    }
}

impl Detector for DislikedIngredientDetector {
    fn detect(&self, recipe: &Recipe, profile: &UserProfile) -> Option<Warning> {
        let disliked = profile.preferences.as_ref()?.disliked_ingredients.as_slice();
        if disliked.is_empty() || recipe.ingredients.is_empty() {
            return None;
        }

        // No curated table for preferences: every item matches by its own
        // name through the fallback path of the scan.
        let matches = scan_ingredients(
            recipe,
            disliked,
            |_| None,
            |ingredient, _keyword, item| {
                format!("\"{ingredient}\" contiene {item}, que prefieres evitar")
            },
        );
        build_warning(
            matches,
            RiskLevel::Caution,
            20,
            WarningCategory::Nutrition,
            DISLIKED_RECOMMENDATIONS,
        )
    }
}
