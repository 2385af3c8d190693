use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/day/:date", get(handlers::get_day))
        .route("/api/exercises", post(handlers::log_exercise))
        .route("/api/exercises/names", get(handlers::exercise_names))
        .route(
            "/api/exercises/:id",
            put(handlers::update_exercise).delete(handlers::delete_exercise),
        )
        .route("/api/body-weight", put(handlers::upsert_body_weight))
        .route("/api/body-weight/:date", delete(handlers::delete_body_weight))
        .route("/api/progress", get(handlers::get_progress))
        .route(
            "/api/progress/exercise/:name",
            get(handlers::exercise_progress),
        )
        .with_state(state)
}
