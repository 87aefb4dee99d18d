use std::num::NonZeroU32;

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::{ApiError, ErrorBody};
use crate::extract::ApiQuery;
use crate::models::Match;

// Query parameters for listing matches. NonZeroU32 rejects limit=0 during
// deserialization, so the handler only ever sees usable page sizes.
#[derive(Deserialize)]
pub struct ListMatchesQuery {
    #[serde(default)]
    limit: Option<NonZeroU32>,
    #[serde(default)]
    offset: Option<u32>,
}

// GET /matches - List matches ordered by date
#[utoipa::path(
    get,
    path = "/matches",
    params(
        ("limit" = Option<u32>, Query, description = "Page size, at least 1 (default 10)"),
        ("offset" = Option<u32>, Query, description = "Rows to skip (default 0)")
    ),
    responses(
        (status = 200, description = "Matches in (date, gameid) order", body = [Match]),
        (status = 400, description = "Invalid pagination parameters", body = ErrorBody)
    ),
    tag = "matches"
)]
pub async fn get_matches(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<ListMatchesQuery>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let limit = params.limit.map(|l| i64::from(l.get())).unwrap_or(10);
    let offset = params.offset.map(i64::from).unwrap_or(0);

    let matches = db::get_matches(&pool, limit, offset)
        .await
        .map_err(ApiError::db("Failed to fetch matches"))?;

    Ok(Json(matches))
}

// GET /matches/{gameid} - Get a single match
#[utoipa::path(
    get,
    path = "/matches/{gameid}",
    params(("gameid" = String, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "Match found", body = Match),
        (status = 404, description = "No match with this gameid", body = ErrorBody)
    ),
    tag = "matches"
)]
pub async fn get_match_by_gameid(
    State(pool): State<SqlitePool>,
    Path(gameid): Path<String>,
) -> Result<Json<Match>, ApiError> {
    let found = db::get_match_by_gameid(&pool, &gameid)
        .await
        .map_err(ApiError::db("Failed to fetch match"))?
        .ok_or(ApiError::NotFound("Match not found"))?;

    Ok(Json(found))
}
