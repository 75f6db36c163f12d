// Core matching pipeline exports
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod transform;

pub use matcher::{rescore_with_weights, Matcher};
pub use scoring::{apply_experience_penalty, passes_budget_constraint, FactorScore};
pub use similarity::{budget_fit, experience_level_match, jaccard_similarity, schedule_overlap};
pub use transform::transform_quiz_answers;
