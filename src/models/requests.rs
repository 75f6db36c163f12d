use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MatchWeights, QuizAnswers, UserProfile};

/// Request to run the matching engine against the trainer roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub profile: UserProfile,
    /// Optional custom weight set; missing factors fall back to defaults.
    /// Must sum to 1.0 within 0.01 - checked in the handler.
    #[serde(default)]
    pub weights: Option<MatchWeights>,
    /// Optional cap on returned results
    #[serde(default)]
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u16>,
}

/// Request to transform raw quiz answers into a user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizProfileRequest {
    pub answers: QuizAnswers,
    /// IANA zone of the client; defaults to UTC when omitted
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Query parameters for the bookable-slot endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SlotQuery {
    #[validate(length(min = 1))]
    pub day: String,
    #[serde(default = "default_duration")]
    #[validate(range(min = 15, max = 180))]
    pub duration: u32,
}

fn default_duration() -> u32 {
    60
}
