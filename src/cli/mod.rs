pub mod analyze;

pub use analyze::{analyze_command, batch_command, OutputFormat, RecipeBadge};
