use crate::types::RiskLevel;

/// Presentation data for one contiguous risk interval.
///
/// The four intervals (0–25, 26–50, 51–75, 76–100) are defined once, in
/// [`band_for`]; `is_safe`, `summary_for`, `color_for` and `icon_for` all
/// derive from it so the thresholds cannot drift apart.
#[derive(Debug, PartialEq, Eq)]
pub struct Band {
    pub level: RiskLevel,
    pub color: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
}

static BANDS: [Band; 4] = [
    Band {
        level: RiskLevel::Safe,
        color: "#4CAF50",
        icon: "✅",
        summary: "Esta receta es generalmente segura para ti.",
    },
    Band {
        level: RiskLevel::Caution,
        color: "#FFC107",
        icon: "⚠️",
        summary: "Consume esta receta con moderación.",
    },
    Band {
        level: RiskLevel::Warning,
        color: "#FF9800",
        icon: "⛔",
        summary: "Te recomendamos evitar esta receta.",
    },
    Band {
        level: RiskLevel::Danger,
        color: "#F44336",
        icon: "🚨",
        summary: "¡Atención! Esta receta es riesgosa para tu salud.",
    },
];

/// Summary for a risk of exactly zero: the analysis ran and found nothing,
/// which reads differently from "low risk".
pub const SUMMARY_NO_CONFLICTS: &str = "Esta receta no presenta conflictos con tu perfil.";

/// Map an overall risk percentage to its presentation band.
pub fn band_for(risk: u8) -> &'static Band {
    match risk {
        0..=25 => &BANDS[0],
        26..=50 => &BANDS[1],
        51..=75 => &BANDS[2],
        _ => &BANDS[3],
    }
}

/// Whether a recipe with this overall risk is considered safe to show
/// without a prominent warning. Equivalent to `risk < 26`.
pub fn is_safe(risk: u8) -> bool {
    band_for(risk).level == RiskLevel::Safe
}

/// Badge color for the given risk, as a hex token for UI collaborators.
pub fn color_for(risk: u8) -> &'static str {
    band_for(risk).color
}

/// Badge glyph for the given risk.
pub fn icon_for(risk: u8) -> &'static str {
    band_for(risk).icon
}

/// Human-readable summary for the given risk.
pub fn summary_for(risk: u8) -> &'static str {
    if risk == 0 {
        return SUMMARY_NO_CONFLICTS;
    }
    band_for(risk).summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band_for(0).level, RiskLevel::Safe);
        assert_eq!(band_for(25).level, RiskLevel::Safe);
        assert_eq!(band_for(26).level, RiskLevel::Caution);
        assert_eq!(band_for(50).level, RiskLevel::Caution);
        assert_eq!(band_for(51).level, RiskLevel::Warning);
        assert_eq!(band_for(75).level, RiskLevel::Warning);
        assert_eq!(band_for(76).level, RiskLevel::Danger);
        assert_eq!(band_for(100).level, RiskLevel::Danger);
    }

    #[test]
    fn test_is_safe_matches_band() {
        for risk in 0..=100u8 {
            assert_eq!(
                is_safe(risk),
                risk < 26,
                "is_safe({}) must stay aligned with the first band",
                risk
            );
        }
    }

    #[test]
    fn test_color_and_icon_stay_in_lockstep_with_level() {
        for risk in 0..=100u8 {
            let band = band_for(risk);
            assert_eq!(color_for(risk), band.color);
            assert_eq!(icon_for(risk), band.icon);
        }
        assert_eq!(color_for(10), "#4CAF50");
        assert_eq!(color_for(40), "#FFC107");
        assert_eq!(color_for(70), "#FF9800");
        assert_eq!(color_for(90), "#F44336");
    }

    #[test]
    fn test_zero_risk_has_distinct_summary() {
        assert_ne!(summary_for(0), summary_for(10));
        assert_eq!(summary_for(1), summary_for(25));
        assert_ne!(summary_for(25), summary_for(26));
    }
}
