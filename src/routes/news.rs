use std::num::NonZeroU32;

use axum::{extract::State, response::Json};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::{ApiError, ErrorBody};
use crate::extract::ApiQuery;
use crate::models::analytics::NewsRecentActivity;

// Query parameters for the activity feed
#[derive(Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    limit: Option<NonZeroU32>,
}

// GET /news/recent-activity - Latest completed matches as feed items.
// Timestamps come from match dates, so the feed reads the same on every call.
#[utoipa::path(
    get,
    path = "/news/recent-activity",
    params(("limit" = Option<u32>, Query, description = "Number of items, at least 1 (default 10)")),
    responses(
        (status = 200, description = "Newest matches first", body = [NewsRecentActivity]),
        (status = 400, description = "Invalid limit", body = ErrorBody)
    ),
    tag = "news"
)]
pub async fn get_recent_activity(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<NewsQuery>,
) -> Result<Json<Vec<NewsRecentActivity>>, ApiError> {
    let limit = params.limit.map(|l| i64::from(l.get())).unwrap_or(10);

    let rows = db::get_recent_matches(&pool, limit)
        .await
        .map_err(ApiError::db("Failed to fetch recent activity"))?;

    let items = rows
        .into_iter()
        .map(|row| {
            let title = match &row.winner_name {
                Some(winner) => format!("{} win {} match", winner, row.league),
                None => format!("{} match completed", row.league),
            };
            NewsRecentActivity {
                activity_type: "match_completed".to_string(),
                title,
                timestamp: row.date,
                game_id: Some(row.gameid),
                player_id: None,
            }
        })
        .collect();

    Ok(Json(items))
}
