use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchResult, Trainer, UserProfile};
use crate::services::slots::BookableSlot;

/// Response for the find-matches endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FindMatchesResponse<'a> {
    pub matches: Vec<MatchResult<'a>>,
    pub count: usize,
    pub total_trainers: usize,
}

/// Response for the quiz-profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizProfileResponse {
    pub profile: UserProfile,
}

/// Response for the trainer list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TrainerListResponse<'a> {
    pub trainers: &'a [Trainer],
    pub count: usize,
}

/// Response for the bookable-slot endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub trainer_id: String,
    pub day: String,
    pub duration_minutes: u32,
    pub slots: Vec<BookableSlot>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
