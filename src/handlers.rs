use crate::calendar::{build_day_slots, resolve_window};
use crate::errors::AppError;
use crate::models::{WeekQuery, WeekResponse};
use crate::records::validate_batch;
use crate::state::AppState;
use crate::stats::build_summary;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.clock.now()))
}

pub async fn get_week(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekResponse>, AppError> {
    let today = state.clock.now().date();
    let reference = match &query.date {
        Some(raw) => parse_reference_date(raw)?,
        None => today,
    };
    let window = resolve_window(reference, query.offset.unwrap_or(0));

    {
        let mut current = state.current.lock().await;
        if current.as_ref() != Some(&window) {
            debug!("current window -> {}..{}", window.monday, window.sunday);
        }
        *current = Some(window);
    }

    // A failed or malformed fetch means an empty window, never a 5xx.
    let records = match state.source.fetch_records(window.monday, window.sunday).await {
        Ok(records) => match validate_batch(window.monday, window.sunday, &records) {
            Ok(()) => records,
            Err(err) => {
                warn!("discarding record batch: {err}");
                Vec::new()
            }
        },
        Err(err) => {
            warn!("record source failed: {err}");
            Vec::new()
        }
    };

    let summary = build_summary(&records);
    let days = build_day_slots(&window, today);

    Ok(Json(WeekResponse {
        window,
        days,
        records,
        summary,
    }))
}

fn parse_reference_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))
}
