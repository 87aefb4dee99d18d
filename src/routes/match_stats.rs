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
use crate::models::{PlayerMatchStat, TeamMatchStat};

// Query parameters for stat line listings. Absent limit means the whole table.
#[derive(Deserialize)]
pub struct ListStatsQuery {
    #[serde(default)]
    limit: Option<NonZeroU32>,
    #[serde(default)]
    offset: Option<u32>,
}

impl ListStatsQuery {
    fn limit_or_unbounded(&self) -> i64 {
        self.limit.map(|l| i64::from(l.get())).unwrap_or(-1)
    }

    fn offset_or_zero(&self) -> i64 {
        self.offset.map(i64::from).unwrap_or(0)
    }
}

// GET /team-match-stats - List per-team stat lines
#[utoipa::path(
    get,
    path = "/team-match-stats",
    params(
        ("limit" = Option<u32>, Query, description = "Page size, at least 1 (absent = all rows)"),
        ("offset" = Option<u32>, Query, description = "Rows to skip (default 0)")
    ),
    responses(
        (status = 200, description = "Stat lines in (gameid, side) order", body = [TeamMatchStat]),
        (status = 400, description = "Invalid pagination parameters", body = ErrorBody)
    ),
    tag = "match-stats"
)]
pub async fn get_team_match_stats(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<ListStatsQuery>,
) -> Result<Json<Vec<TeamMatchStat>>, ApiError> {
    let rows = db::get_team_match_stats(&pool, params.limit_or_unbounded(), params.offset_or_zero())
        .await
        .map_err(ApiError::db("Failed to fetch team match stats"))?;

    Ok(Json(rows))
}

// GET /team-match-stats/{gameid} - Both teams' stat lines for one game
#[utoipa::path(
    get,
    path = "/team-match-stats/{gameid}",
    params(("gameid" = String, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "Stat lines for the game", body = [TeamMatchStat]),
        (status = 404, description = "No stat lines for this gameid", body = ErrorBody)
    ),
    tag = "match-stats"
)]
pub async fn get_team_match_stats_by_gameid(
    State(pool): State<SqlitePool>,
    Path(gameid): Path<String>,
) -> Result<Json<Vec<TeamMatchStat>>, ApiError> {
    let rows = db::get_team_match_stats_by_gameid(&pool, &gameid)
        .await
        .map_err(ApiError::db("Failed to fetch team match stats"))?;

    if rows.is_empty() {
        return Err(ApiError::NotFound("Team match stats not found for this gameid"));
    }

    Ok(Json(rows))
}

// GET /player-match-stats - List per-player stat lines
#[utoipa::path(
    get,
    path = "/player-match-stats",
    params(
        ("limit" = Option<u32>, Query, description = "Page size, at least 1 (absent = all rows)"),
        ("offset" = Option<u32>, Query, description = "Rows to skip (default 0)")
    ),
    responses(
        (status = 200, description = "Stat lines in (gameid, participantid) order", body = [PlayerMatchStat]),
        (status = 400, description = "Invalid pagination parameters", body = ErrorBody)
    ),
    tag = "match-stats"
)]
pub async fn get_player_match_stats(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<ListStatsQuery>,
) -> Result<Json<Vec<PlayerMatchStat>>, ApiError> {
    let rows = db::get_player_match_stats(&pool, params.limit_or_unbounded(), params.offset_or_zero())
        .await
        .map_err(ApiError::db("Failed to fetch player match stats"))?;

    Ok(Json(rows))
}

// GET /player-match-stats/{gameid} - All ten stat lines for one game
#[utoipa::path(
    get,
    path = "/player-match-stats/{gameid}",
    params(("gameid" = String, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "Stat lines for the game", body = [PlayerMatchStat]),
        (status = 404, description = "No stat lines for this gameid", body = ErrorBody)
    ),
    tag = "match-stats"
)]
pub async fn get_player_match_stats_by_gameid(
    State(pool): State<SqlitePool>,
    Path(gameid): Path<String>,
) -> Result<Json<Vec<PlayerMatchStat>>, ApiError> {
    let rows = db::get_player_match_stats_by_gameid(&pool, &gameid)
        .await
        .map_err(ApiError::db("Failed to fetch player match stats"))?;

    if rows.is_empty() {
        return Err(ApiError::NotFound("Player match stats not found for this gameid"));
    }

    Ok(Json(rows))
}
