//! Static keyword taxonomies mapping canonical profile items to the
//! ingredient substrings that indicate their presence.
//!
//! Keys and keywords are lowercase Spanish, matching the language of the
//! profile editor and the recipe catalog. Lookups are exact on the
//! canonical form of the profile item; detectors fall back to the item
//! string itself when a flat table has no entry (see [`canonical`]).

/// Normalize a profile item or ingredient term for taxonomy lookup.
///
/// Trims surrounding whitespace and lowercases (Unicode-aware, so
/// "Lácteos" becomes "lácteos").
pub fn canonical(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Substrings that reveal a known allergen inside an ingredient name.
///
/// Returns `None` for allergies outside the curated set; callers then use
/// the item string itself as the sole keyword.
pub fn allergen_keywords(item: &str) -> Option<&'static [&'static str]> {
    let keywords: &[&str] = match item {
        "lácteos" => &[
            "leche",
            "queso",
            "yogur",
            "mantequilla",
            "crema",
            "nata",
            "suero",
            "lactosa",
        ],
        "gluten" => &[
            "trigo", "harina", "pan", "pasta", "cebada", "centeno", "galleta",
        ],
        "maní" => &["maní", "cacahuate", "cacahuete"],
        "frutos secos" => &[
            "nuez",
            "nueces",
            "almendra",
            "avellana",
            "pistache",
            "anacardo",
            "castaña",
        ],
        "mariscos" => &[
            "camarón",
            "langosta",
            "cangrejo",
            "almeja",
            "mejillón",
            "ostión",
            "calamar",
            "pulpo",
        ],
        "pescado" => &[
            "pescado", "atún", "salmón", "sardina", "bacalao", "trucha", "anchoa",
        ],
        "huevo" => &["huevo", "clara", "yema", "mayonesa"],
        "soya" => &["soya", "soja", "tofu", "edamame"],
        "ajonjolí" => &["ajonjolí", "sésamo", "tahini"],
        _ => return None,
    };
    Some(keywords)
}

/// Substrings incompatible with a known dietary restriction.
pub fn restriction_keywords(item: &str) -> Option<&'static [&'static str]> {
    let keywords: &[&str] = match item {
        "vegetariano" => &[
            "carne", "pollo", "res", "cerdo", "pescado", "mariscos", "atún", "jamón", "tocino",
            "chorizo",
        ],
        "vegano" => &[
            "carne",
            "pollo",
            "res",
            "cerdo",
            "pescado",
            "mariscos",
            "leche",
            "queso",
            "huevo",
            "miel",
            "mantequilla",
            "yogur",
            "crema",
        ],
        "sin gluten" => &[
            "trigo", "harina", "pan", "pasta", "cebada", "centeno", "galleta",
        ],
        "sin lactosa" => &["leche", "queso", "crema", "mantequilla", "yogur", "nata"],
        "keto" | "cetogénica" => &["azúcar", "arroz", "pasta", "pan", "papa", "harina", "maíz"],
        "bajo en sodio" => &["sal", "embutido", "jamón", "tocino", "consomé"],
        _ => return None,
    };
    Some(keywords)
}

/// Substrings contraindicated for a known health condition.
pub fn condition_keywords(item: &str) -> Option<&'static [&'static str]> {
    let keywords: &[&str] = match item {
        "diabetes" => &["azúcar", "miel", "jarabe", "dulce", "refresco", "jugo"],
        "hipertensión" => &["sal", "sodio", "embutido", "tocino", "jamón", "consomé"],
        "colesterol alto" => &[
            "manteca",
            "tocino",
            "chicharrón",
            "mantequilla",
            "crema",
            "frito",
            "yema",
        ],
        "celiaquía" => &["trigo", "harina", "cebada", "centeno", "pan", "pasta"],
        "gastritis" => &["chile", "picante", "café", "vinagre", "refresco", "alcohol"],
        "enfermedad renal" => &["sal", "sodio", "embutido", "consomé", "refresco"],
        _ => return None,
    };
    Some(keywords)
}

/// Avoid/prefer keyword pair for a health goal.
///
/// `prefer` is informational only: the goal detector warns on `avoid`
/// matches and does not award positive signal for preferred ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalGuidance {
    pub avoid: &'static [&'static str],
    pub prefer: &'static [&'static str],
}

/// Guidance for a known health goal.
///
/// Goals are structured avoid/prefer pairs, so unknown goals return `None`
/// and produce no match at all: the single-keyword fallback used by the
/// flat tables does not apply here.
pub fn goal_guidance(goal: &str) -> Option<GoalGuidance> {
    let guidance = match goal {
        "perder peso" => GoalGuidance {
            avoid: &[
                "azúcar", "frito", "manteca", "crema", "refresco", "dulce", "mayonesa",
            ],
            prefer: &["verdura", "ensalada", "pollo", "pescado", "avena", "fruta"],
        },
        "ganar masa muscular" => GoalGuidance {
            avoid: &["refresco", "alcohol", "frito"],
            prefer: &["pollo", "huevo", "atún", "res", "avena", "leche", "frijol"],
        },
        "comer saludable" => GoalGuidance {
            avoid: &["frito", "refresco", "embutido", "azúcar"],
            prefer: &["verdura", "fruta", "avena", "pescado"],
        },
        "bajar colesterol" => GoalGuidance {
            avoid: &[
                "manteca",
                "tocino",
                "chicharrón",
                "mantequilla",
                "yema",
                "frito",
            ],
            prefer: &["avena", "pescado", "nuez", "aceite de oliva"],
        },
        _ => return None,
    };
    Some(guidance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_trims_and_lowercases() {
        assert_eq!(canonical("  Lácteos "), "lácteos");
        assert_eq!(canonical("VEGETARIANO"), "vegetariano");
        assert_eq!(canonical(""), "");
    }

    #[test]
    fn test_allergen_lookup_known_key() {
        let keywords = allergen_keywords("lácteos").expect("curated allergen");
        assert!(keywords.contains(&"leche"));
        assert!(keywords.contains(&"lactosa"));
    }

    #[test]
    fn test_allergen_lookup_unknown_key() {
        assert!(allergen_keywords("durazno").is_none());
    }

    #[test]
    fn test_restriction_lookup_alias() {
        // "keto" and "cetogénica" share one entry
        assert_eq!(
            restriction_keywords("keto"),
            restriction_keywords("cetogénica")
        );
    }

    #[test]
    fn test_goal_guidance_has_avoid_and_prefer() {
        let guidance = goal_guidance("perder peso").expect("curated goal");
        assert!(guidance.avoid.contains(&"azúcar"));
        assert!(guidance.prefer.contains(&"verdura"));
    }

    #[test]
    fn test_goal_guidance_unknown_goal() {
        assert!(goal_guidance("correr un maratón").is_none());
    }

    #[test]
    fn test_keywords_are_canonical_form() {
        // Tables are keyed and populated in canonical (lowercase) form so
        // a lowercased ingredient name can match by plain containment.
        for table in [allergen_keywords, restriction_keywords, condition_keywords] {
            for key in ["lácteos", "vegetariano", "diabetes"] {
                if let Some(keywords) = table(key) {
                    for keyword in keywords {
                        assert_eq!(*keyword, keyword.to_lowercase());
                    }
                }
            }
        }
    }
}
