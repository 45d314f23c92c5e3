pub mod analyzer;
pub mod banding;
pub mod detectors;
pub mod taxonomy;
pub mod types;

pub use analyzer::{analyze, SUMMARY_NO_PROFILE, SUMMARY_NO_RECIPE};
pub use banding::{band_for, color_for, icon_for, is_safe, summary_for, Band, SUMMARY_NO_CONFLICTS};
pub use detectors::{
    AllergyDetector, CalorieLoadDetector, Detector, DislikedIngredientDetector,
    HealthConditionDetector, HealthGoalDetector, RestrictionDetector,
};
pub use taxonomy::{canonical, goal_guidance, GoalGuidance};
pub use types::{
    AnalysisResult, HealthInfo, Ingredient, PersonalInfo, Preferences, Recipe, RiskLevel,
    UserProfile, Warning, WarningCategory,
};
