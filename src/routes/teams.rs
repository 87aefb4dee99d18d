use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::{ApiError, ErrorBody};
use crate::models::Team;

// GET /teams - List all teams
#[utoipa::path(
    get,
    path = "/teams",
    responses((status = 200, description = "All teams ordered by name", body = [Team])),
    tag = "teams"
)]
pub async fn get_teams(State(pool): State<SqlitePool>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = db::get_all_teams(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch teams"))?;

    Ok(Json(teams))
}

// GET /teams/{teamid} - Get a single team
#[utoipa::path(
    get,
    path = "/teams/{teamid}",
    params(("teamid" = String, Path, description = "Team identifier")),
    responses(
        (status = 200, description = "Team found", body = Team),
        (status = 404, description = "No team with this id", body = ErrorBody)
    ),
    tag = "teams"
)]
pub async fn get_team_by_id(
    State(pool): State<SqlitePool>,
    Path(teamid): Path<String>,
) -> Result<Json<Team>, ApiError> {
    let team = db::get_team_by_id(&pool, &teamid)
        .await
        .map_err(ApiError::db("Failed to fetch team"))?
        .ok_or(ApiError::NotFound("Team not found"))?;

    Ok(Json(team))
}
