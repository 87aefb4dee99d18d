use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::mock;
use crate::models::analytics::DashboardSummary;
use crate::stats;

// GET /dashboard/summary - Headline totals for the landing page
#[utoipa::path(
    get,
    path = "/dashboard/summary",
    responses((status = 200, description = "Store-wide totals and averages", body = DashboardSummary)),
    tag = "dashboard"
)]
pub async fn get_dashboard_summary(
    State(pool): State<SqlitePool>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let total_matches = db::count_matches(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch dashboard summary"))?;
    let total_champions = db::count_distinct_champions(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch dashboard summary"))?;
    let total_players = db::count_players(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch dashboard summary"))?;
    let avg_length_sec = db::avg_game_length_seconds(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch dashboard summary"))?;
    let avg_kills = db::avg_kills_per_game(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch dashboard summary"))?;
    let (blue_games, blue_wins) = db::blue_side_record(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch dashboard summary"))?;

    Ok(Json(DashboardSummary {
        total_matches,
        total_champions,
        total_players,
        avg_game_length_min: avg_length_sec.map(|sec| stats::round1(sec / 60.0)),
        avg_kills_per_game: avg_kills.map(stats::round1),
        blue_side_win_rate: stats::pct(blue_wins.unwrap_or(0), blue_games).map(stats::round1),
        changes: mock::dashboard_changes(),
    }))
}
