use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::{ApiError, ErrorBody};
use crate::extract::ApiQuery;
use crate::mock;
use crate::models::analytics::{ChampionPoolEntry, PlayerComparison, PlayerStats, SeasonStats};
use crate::models::Player;
use crate::stats;

// GET /players - List all players
#[utoipa::path(
    get,
    path = "/players",
    responses((status = 200, description = "All players ordered by name", body = [Player])),
    tag = "players"
)]
pub async fn get_players(State(pool): State<SqlitePool>) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::get_all_players(&pool)
        .await
        .map_err(ApiError::db("Failed to fetch players"))?;

    Ok(Json(players))
}

// GET /players/{playerid} - Get a single player
#[utoipa::path(
    get,
    path = "/players/{playerid}",
    params(("playerid" = String, Path, description = "Player identifier")),
    responses(
        (status = 200, description = "Player found", body = Player),
        (status = 404, description = "No player with this id", body = ErrorBody)
    ),
    tag = "players"
)]
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    Path(playerid): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = db::get_player_by_id(&pool, &playerid)
        .await
        .map_err(ApiError::db("Failed to fetch player"))?
        .ok_or(ApiError::NotFound("Player not found"))?;

    Ok(Json(player))
}

// Query parameters for player season stats
#[derive(Deserialize)]
pub struct PlayerStatsQuery {
    #[serde(default)]
    year: Option<i64>,
}

// GET /players/{playerid}/stats - Season aggregates with a league baseline block
#[utoipa::path(
    get,
    path = "/players/{playerid}/stats",
    params(
        ("playerid" = String, Path, description = "Player identifier"),
        ("year" = Option<i64>, Query, description = "Restrict aggregates to one season")
    ),
    responses(
        (status = 200, description = "Season stats and champion pool", body = PlayerStats),
        (status = 404, description = "No player with this id", body = ErrorBody)
    ),
    tag = "players"
)]
pub async fn get_player_stats(
    State(pool): State<SqlitePool>,
    Path(playerid): Path<String>,
    ApiQuery(params): ApiQuery<PlayerStatsQuery>,
) -> Result<Json<PlayerStats>, ApiError> {
    let player = db::get_player_by_id(&pool, &playerid)
        .await
        .map_err(ApiError::db("Failed to fetch player"))?
        .ok_or(ApiError::NotFound("Player not found"))?;

    let summary = db::get_player_season_summary(&pool, &playerid, params.year)
        .await
        .map_err(ApiError::db("Failed to fetch player stats"))?;
    let pool_rows = db::get_player_champion_pool(&pool, &playerid, params.year)
        .await
        .map_err(ApiError::db("Failed to fetch player stats"))?;
    let team_name = db::get_player_recent_team(&pool, &playerid)
        .await
        .map_err(ApiError::db("Failed to fetch player stats"))?;
    let role = db::get_player_top_position(&pool, &playerid, params.year)
        .await
        .map_err(ApiError::db("Failed to fetch player stats"))?;

    let season_stats = SeasonStats {
        games: summary.games,
        win_rate: stats::pct(summary.wins.unwrap_or(0), summary.games).map(stats::round1),
        kda: summary.kda.map(stats::round2),
        damage_share: summary.damage_share.map(stats::round2),
        gpm: summary.gpm.map(stats::round1),
        cspm: summary.cspm.map(stats::round1),
    };

    let champion_pool = pool_rows
        .into_iter()
        .map(|row| ChampionPoolEntry {
            champion_name: row.champion_name,
            win_rate: stats::pct(row.wins, row.games).map(stats::round1).unwrap_or(0.0),
            games: row.games,
        })
        .collect();

    Ok(Json(PlayerStats {
        player_name: player.playername,
        team_name,
        role,
        season_stats,
        champion_pool,
        comparison_stats: mock::comparison_stats(),
    }))
}

// Query parameters for player comparison
#[derive(Deserialize)]
pub struct CompareQuery {
    player_ids: String,
}

// GET /players/compare?player_ids=a,b - Side-by-side stat lines
#[utoipa::path(
    get,
    path = "/players/compare",
    params(("player_ids" = String, Query, description = "Comma-separated player identifiers")),
    responses(
        (status = 200, description = "One stat line per requested player", body = [PlayerComparison]),
        (status = 400, description = "Missing or empty player_ids", body = ErrorBody)
    ),
    tag = "players"
)]
pub async fn compare_players(
    ApiQuery(params): ApiQuery<CompareQuery>,
) -> Result<Json<Vec<PlayerComparison>>, ApiError> {
    let ids: Vec<String> = params
        .player_ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    if ids.is_empty() {
        return Err(ApiError::Validation(
            "player_ids must name at least one player".to_string(),
        ));
    }

    Ok(Json(mock::player_comparisons(&ids)))
}
