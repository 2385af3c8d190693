use crate::errors::AppError;
use crate::models::{
    AppData, DayResponse, ExerciseLog, ExerciseProgressResponse, LogExerciseRequest, Metric,
    ProgressResponse, SetEntry, UpdateExerciseRequest, UpsertWeightRequest, PRESET_EXERCISES,
};
use crate::progress;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

const DEFAULT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub window_days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseProgressQuery {
    #[serde(default)]
    pub metric: Metric,
    pub window_days: Option<i64>,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let data = state.data.lock().await;
    let exercises = data.exercises_on(&date);
    let body_weight = data.body_weights.get(&date).copied();
    Html(render_index(&date, &exercises, body_weight))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<DayResponse>, AppError> {
    day_response(&state, today_string()).await
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&date)?;
    day_response(&state, date).await
}

async fn day_response(state: &AppState, date: String) -> Result<Json<DayResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(DayResponse {
        exercises: data.exercises_on(&date),
        body_weight: data.body_weights.get(&date).copied(),
        date,
    }))
}

pub async fn log_exercise(
    State(state): State<AppState>,
    Json(payload): Json<LogExerciseRequest>,
) -> Result<(StatusCode, Json<ExerciseLog>), AppError> {
    let date = parse_date(&payload.date)?;
    let name = validate_name(&payload.name)?;
    validate_sets(&payload.sets)?;

    let mut data = state.data.lock().await;
    let log = ExerciseLog {
        id: data.alloc_id(),
        name,
        date,
        sets: payload.sets,
    };
    data.exercises.push(log.clone());
    persist_data(&state.data_path, &data).await?;

    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateExerciseRequest>,
) -> Result<Json<ExerciseLog>, AppError> {
    let name = validate_name(&payload.name)?;
    validate_sets(&payload.sets)?;

    let mut data = state.data.lock().await;
    let updated = {
        let log = data
            .exercises
            .iter_mut()
            .find(|log| log.id == id)
            .ok_or_else(|| AppError::not_found(format!("no exercise with id {id}")))?;
        log.name = name;
        log.sets = payload.sets;
        log.clone()
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(updated))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let before = data.exercises.len();
    data.exercises.retain(|log| log.id != id);
    if data.exercises.len() == before {
        return Err(AppError::not_found(format!("no exercise with id {id}")));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn upsert_body_weight(
    State(state): State<AppState>,
    Json(payload): Json<UpsertWeightRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&payload.date)?;
    if !payload.weight.is_finite() || payload.weight <= 0.0 {
        return Err(AppError::bad_request("weight must be a positive number"));
    }

    let mut data = state.data.lock().await;
    data.body_weights.insert(date.clone(), payload.weight);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(DayResponse {
        exercises: data.exercises_on(&date),
        body_weight: Some(payload.weight),
        date,
    }))
}

pub async fn delete_body_weight(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<StatusCode, AppError> {
    let date = parse_date(&date)?;
    let mut data = state.data.lock().await;
    if data.body_weights.remove(&date).is_none() {
        return Err(AppError::not_found(format!("no body weight for {date}")));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn exercise_names(State(state): State<AppState>) -> Json<Vec<String>> {
    let data = state.data.lock().await;
    let mut names: BTreeSet<String> = PRESET_EXERCISES.iter().map(|s| s.to_string()).collect();
    names.extend(data.exercises.iter().map(|log| log.name.clone()));
    Json(names.into_iter().collect())
}

pub async fn get_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<ProgressResponse>, AppError> {
    let window_days = validate_window(query.window_days)?;
    let data = state.data.lock().await;
    let (exercises, body_weights) = windowed(&data, window_days);
    let days = progress::build_workout_days(&exercises, &body_weights);

    Ok(Json(ProgressResponse {
        window_days,
        weight_series: progress::weight_series(&days),
        volume_series: progress::volume_series(&days),
        exercise_frequency: progress::exercise_frequency(&days),
    }))
}

pub async fn exercise_progress(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ExerciseProgressQuery>,
) -> Result<Json<ExerciseProgressResponse>, AppError> {
    let window_days = validate_window(query.window_days)?;
    let data = state.data.lock().await;
    let (exercises, body_weights) = windowed(&data, window_days);
    let days = progress::build_workout_days(&exercises, &body_weights);

    let points = progress::exercise_series(&days, &name);
    let trend = progress::trend(&points, query.metric);

    Ok(Json(ExerciseProgressResponse {
        name,
        metric: query.metric,
        points,
        trend,
    }))
}

/// Snapshot of the records inside the trailing window. ISO date strings
/// order like dates, so the cutoff is a plain string comparison.
fn windowed(data: &AppData, window_days: i64) -> (Vec<ExerciseLog>, BTreeMap<String, f64>) {
    let start = progress::window_start(Local::now().date_naive(), window_days);
    let exercises = data
        .exercises
        .iter()
        .filter(|log| log.date.as_str() >= start.as_str())
        .cloned()
        .collect();
    let body_weights = data
        .body_weights
        .range(start..)
        .map(|(date, weight)| (date.clone(), *weight))
        .collect();
    (exercises, body_weights)
}

fn validate_window(window_days: Option<i64>) -> Result<i64, AppError> {
    match window_days {
        None => Ok(DEFAULT_WINDOW_DAYS),
        Some(days) if days > 0 => Ok(days),
        Some(_) => Err(AppError::bad_request("window_days must be positive")),
    }
}

fn parse_date(date: &str) -> Result<String, AppError> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.to_string())
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("exercise name must not be empty"));
    }
    Ok(name.to_string())
}

fn validate_sets(sets: &[SetEntry]) -> Result<(), AppError> {
    if sets.is_empty() {
        return Err(AppError::bad_request("an exercise needs at least one set"));
    }
    if sets
        .iter()
        .any(|set| !set.weight.is_finite() || set.weight < 0.0)
    {
        return Err(AppError::bad_request(
            "set weights must be non-negative numbers",
        ));
    }
    Ok(())
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
