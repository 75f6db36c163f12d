//! FitMatch Algo - trainer matching service for the FitMatch coaching platform
//!
//! This library implements the trainer-client matching engine: a pure,
//! multi-factor weighted scoring pipeline that transforms quiz answers into a
//! user profile, scores trainers across six factors, and produces a ranked,
//! explained result list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rescore_with_weights, transform_quiz_answers, Matcher};
pub use models::{
    MatchBreakdown, MatchResult, MatchWeights, QuizAnswers, Trainer, UserProfile,
};
pub use services::{generate_booking_slots, TrainerStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let profile = transform_quiz_answers(&QuizAnswers::default(), "UTC");
        assert_eq!(profile.completeness, 0);

        let matcher = Matcher::with_default_weights();
        assert!(matcher.weights().is_valid_sum());
    }
}
