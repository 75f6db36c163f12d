use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{transform_quiz_answers, Matcher};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, QuizProfileRequest,
    QuizProfileResponse,
};
use crate::services::TrainerStore;

const DEFAULT_TIMEZONE: &str = "UTC";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TrainerStore>,
    pub matcher: Matcher,
}

/// Configure matching-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/quiz/profile", web::post().to(quiz_profile))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Transform quiz answers into a user profile
///
/// POST /api/v1/quiz/profile
///
/// Request body:
/// ```json
/// {
///   "answers": { "goals": ["muscle-gain"], "budget": "50-75" },
///   "timezone": "America/New_York"
/// }
/// ```
async fn quiz_profile(req: web::Json<QuizProfileRequest>) -> impl Responder {
    let timezone = req.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE);
    let profile = transform_quiz_answers(&req.answers, timezone);

    tracing::debug!(
        "Transformed quiz answers into profile (completeness: {})",
        profile.completeness
    );

    HttpResponse::Ok().json(QuizProfileResponse { profile })
}

/// Run the matching engine against the trainer roster
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "profile": { ... },
///   "weights": { "goalAlignment": 0.25, ... },
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Weight-sum invariant is owned by this boundary, never by the engine
    if let Some(weights) = &req.weights {
        if !weights.is_valid_sum() {
            tracing::info!("Rejected custom weights with sum {}", weights.sum());
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_weights".to_string(),
                message: "Custom weights must sum to 1.0".to_string(),
                status_code: 400,
            });
        }
    }

    let trainers = state.store.all();
    if trainers.is_empty() {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "no_trainers".to_string(),
            message: "No trainers available".to_string(),
            status_code: 404,
        });
    }

    let weights = req.weights.unwrap_or(*state.matcher.weights());
    let mut matches = state
        .matcher
        .match_trainers_with_weights(&req.profile, trainers, &weights);

    if let Some(limit) = req.limit {
        matches.truncate(limit as usize);
    }

    tracing::info!(
        "Returning {} matches (completeness: {}, {} trainers considered)",
        matches.len(),
        req.profile.completeness,
        trainers.len()
    );

    let count = matches.len();
    HttpResponse::Ok().json(FindMatchesResponse {
        matches,
        count,
        total_trainers: trainers.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
