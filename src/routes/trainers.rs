use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, SlotQuery, SlotsResponse, TrainerListResponse};
use crate::routes::matches::AppState;
use crate::services::generate_booking_slots;

/// Configure trainer roster routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/trainers", web::get().to(list_trainers))
        .route("/trainers/{id}", web::get().to(get_trainer))
        .route("/trainers/{id}/slots", web::get().to(get_booking_slots));
}

/// List the full trainer roster
///
/// GET /api/v1/trainers
async fn list_trainers(state: web::Data<AppState>) -> impl Responder {
    let trainers = state.store.all();
    HttpResponse::Ok().json(TrainerListResponse {
        trainers,
        count: trainers.len(),
    })
}

/// Fetch a single trainer by id
///
/// GET /api/v1/trainers/{id}
async fn get_trainer(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get(&id) {
        Some(trainer) => HttpResponse::Ok().json(trainer),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "trainer_not_found".to_string(),
            message: format!("No trainer with id {}", id),
            status_code: 404,
        }),
    }
}

/// Enumerate bookable slots for a trainer on a given day
///
/// GET /api/v1/trainers/{id}/slots?day=monday&duration=60
async fn get_booking_slots(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SlotQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let id = path.into_inner();

    let Some(trainer) = state.store.get(&id) else {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "trainer_not_found".to_string(),
            message: format!("No trainer with id {}", id),
            status_code: 404,
        });
    };

    let slots = generate_booking_slots(&trainer.availability, &query.day, query.duration);

    tracing::debug!(
        "Generated {} bookable slots for trainer {} on {}",
        slots.len(),
        id,
        query.day
    );

    HttpResponse::Ok().json(SlotsResponse {
        trainer_id: id,
        day: query.day.clone(),
        duration_minutes: query.duration,
        slots,
    })
}
