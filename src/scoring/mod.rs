pub mod checks;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod slug;
pub mod validation;

pub use config::*;
pub use criteria::{Criterion, ScoringMode, GLOBAL_CRITERIA, SUBJECT_CRITERIA};
pub use engine::{CriterionResult, ScoreReport, SeoCalculator};
pub use validation::validate_scoring;
