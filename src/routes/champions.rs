use std::cmp::Ordering;
use std::collections::BTreeMap;

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
use crate::models::analytics::{
    ChampionHistoricalPerformance, ChampionMatchup, ChampionMetaTierList, ChampionPowerTimeline,
    ChampionStats, LeaguePerformance,
};
use crate::stats;

// Query parameters scoping champion analytics. `patch` is numeric in the
// dataset, so a non-numeric value fails deserialization with a 400.
#[derive(Deserialize)]
pub struct ChampionScopeQuery {
    #[serde(default)]
    patch: Option<f64>,
    #[serde(default)]
    role: Option<String>,
}

// Tier cutoffs over the already-rounded win and pick rates
fn tier_for(win_rate: f64, pick_rate: f64) -> &'static str {
    if win_rate >= 54.0 && pick_rate >= 8.0 {
        "S"
    } else if win_rate >= 52.0 {
        "A"
    } else if win_rate >= 49.0 {
        "B"
    } else if win_rate >= 46.0 {
        "C"
    } else {
        "D"
    }
}

// GET /champions/meta-tier-list - Pick/win/tier table for the scoped meta
#[utoipa::path(
    get,
    path = "/champions/meta-tier-list",
    params(
        ("patch" = Option<f64>, Query, description = "Restrict to one patch"),
        ("role" = Option<String>, Query, description = "Restrict to one position")
    ),
    responses(
        (status = 200, description = "Champions ordered by win rate then pick rate", body = [ChampionMetaTierList]),
        (status = 400, description = "Invalid scope parameters", body = ErrorBody)
    ),
    tag = "champions"
)]
pub async fn get_meta_tier_list(
    State(pool): State<SqlitePool>,
    ApiQuery(params): ApiQuery<ChampionScopeQuery>,
) -> Result<Json<Vec<ChampionMetaTierList>>, ApiError> {
    let groups = db::get_champion_groups(&pool, params.patch, params.role.as_deref())
        .await
        .map_err(ApiError::db("Failed to fetch champion meta"))?;
    let scope_games = db::count_games_with_picks(&pool, params.patch)
        .await
        .map_err(ApiError::db("Failed to fetch champion meta"))?;

    let mut rows: Vec<ChampionMetaTierList> = groups
        .into_iter()
        .map(|group| {
            let pick_rate = stats::pct(group.games, scope_games)
                .map(stats::round1)
                .unwrap_or(0.0);
            let win_rate = stats::pct(group.wins, group.games)
                .map(stats::round1)
                .unwrap_or(0.0);
            ChampionMetaTierList {
                champion_name: group.champion_name,
                role: group.role,
                pick_rate,
                win_rate,
                tier: tier_for(win_rate, pick_rate).to_string(),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.pick_rate.partial_cmp(&a.pick_rate).unwrap_or(Ordering::Equal))
            .then_with(|| a.champion_name.cmp(&b.champion_name))
    });

    Ok(Json(rows))
}

// GET /champions/{champion_name}/stats - Scouting card for one champion
#[utoipa::path(
    get,
    path = "/champions/{champion_name}/stats",
    params(
        ("champion_name" = String, Path, description = "Champion name as it appears in the dataset"),
        ("patch" = Option<f64>, Query, description = "Restrict to one patch"),
        ("role" = Option<String>, Query, description = "Restrict to one position")
    ),
    responses(
        (status = 200, description = "Rates, per-league splits and lane matchups", body = ChampionStats),
        (status = 400, description = "Invalid scope parameters", body = ErrorBody),
        (status = 404, description = "Champion never picked in this scope", body = ErrorBody)
    ),
    tag = "champions"
)]
pub async fn get_champion_stats(
    State(pool): State<SqlitePool>,
    Path(champion_name): Path<String>,
    ApiQuery(params): ApiQuery<ChampionScopeQuery>,
) -> Result<Json<ChampionStats>, ApiError> {
    let summary = db::get_champion_summary(&pool, &champion_name, params.patch, params.role.as_deref())
        .await
        .map_err(ApiError::db("Failed to fetch champion stats"))?;

    if summary.games == 0 {
        return Err(ApiError::NotFound("Champion not found"));
    }

    let scope_games = db::count_games_with_picks(&pool, params.patch)
        .await
        .map_err(ApiError::db("Failed to fetch champion stats"))?;
    let banned_games = db::count_games_champion_banned(&pool, &champion_name, params.patch)
        .await
        .map_err(ApiError::db("Failed to fetch champion stats"))?;
    let league_rows = db::get_champion_league_splits(&pool, &champion_name, params.patch, params.role.as_deref())
        .await
        .map_err(ApiError::db("Failed to fetch champion stats"))?;
    let matchup_rows = db::get_champion_matchups(&pool, &champion_name, params.patch, params.role.as_deref())
        .await
        .map_err(ApiError::db("Failed to fetch champion stats"))?;

    let role = match params.role {
        Some(role) => role,
        None => db::get_champion_top_position(&pool, &champion_name, params.patch)
            .await
            .map_err(ApiError::db("Failed to fetch champion stats"))?
            .unwrap_or_default(),
    };

    let performance_by_league: BTreeMap<String, LeaguePerformance> = league_rows
        .into_iter()
        .map(|row| {
            let perf = LeaguePerformance {
                win_rate: stats::pct(row.wins, row.games).map(stats::round1).unwrap_or(0.0),
                games: row.games,
            };
            (row.league, perf)
        })
        .collect();

    let mut matchups: Vec<ChampionMatchup> = matchup_rows
        .into_iter()
        .map(|row| ChampionMatchup {
            opponent_champion: row.opponent_champion,
            win_rate: stats::pct(row.wins, row.games).map(stats::round1).unwrap_or(0.0),
            games: row.games,
        })
        .collect();

    matchups.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.games.cmp(&a.games))
            .then_with(|| a.opponent_champion.cmp(&b.opponent_champion))
    });
    let best_matchups: Vec<ChampionMatchup> = matchups.iter().take(3).cloned().collect();

    matchups.sort_by(|a, b| {
        a.win_rate
            .partial_cmp(&b.win_rate)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.games.cmp(&b.games))
            .then_with(|| a.opponent_champion.cmp(&b.opponent_champion))
    });
    let worst_matchups: Vec<ChampionMatchup> = matchups.into_iter().take(3).collect();

    Ok(Json(ChampionStats {
        champion_name,
        role,
        pick_rate: stats::pct(summary.games, scope_games).map(stats::round1).unwrap_or(0.0),
        win_rate: stats::pct(summary.wins.unwrap_or(0), summary.games)
            .map(stats::round1)
            .unwrap_or(0.0),
        ban_rate: stats::pct(banned_games, scope_games).map(stats::round1).unwrap_or(0.0),
        total_games: summary.games,
        avg_kda: summary.avg_kda.map(stats::round2).unwrap_or(0.0),
        performance_by_league,
        best_matchups,
        worst_matchups,
    }))
}

// GET /champions/{champion_name}/power-timeline - Canned game-length curve
#[utoipa::path(
    get,
    path = "/champions/{champion_name}/power-timeline",
    params(("champion_name" = String, Path, description = "Champion name")),
    responses((status = 200, description = "Win rate by minute", body = ChampionPowerTimeline)),
    tag = "champions"
)]
pub async fn get_power_timeline(Path(champion_name): Path<String>) -> Json<ChampionPowerTimeline> {
    Json(mock::power_timeline(&champion_name))
}

// GET /champions/{champion_name}/historical-performance - Canned season history
#[utoipa::path(
    get,
    path = "/champions/{champion_name}/historical-performance",
    params(("champion_name" = String, Path, description = "Champion name")),
    responses((status = 200, description = "Season-by-season record", body = ChampionHistoricalPerformance)),
    tag = "champions"
)]
pub async fn get_historical_performance(
    Path(champion_name): Path<String>,
) -> Json<ChampionHistoricalPerformance> {
    Json(mock::historical_performance(&champion_name))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_util::{app, get_json, get_text, seed, test_pool};

    #[tokio::test]
    async fn tier_list_ranks_by_win_then_pick_rate() {
        let pool = test_pool().await;
        seed(&pool).await;

        let (status, body) = get_json(app(pool), "/champions/meta-tier-list?patch=15.02").await;

        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0]["champion_name"], "Azir");
        assert_eq!(rows[0]["win_rate"], 100.0);
        assert_eq!(rows[0]["pick_rate"], 66.7);
        assert_eq!(rows[0]["tier"], "S");

        assert_eq!(rows[1]["champion_name"], "Sylas");
        assert_eq!(rows[1]["win_rate"], 50.0);
        assert_eq!(rows[1]["tier"], "B");

        // tie on (win_rate, pick_rate) falls back to name order
        assert_eq!(rows[2]["champion_name"], "Ahri");
        assert_eq!(rows[3]["champion_name"], "Taliyah");
        assert_eq!(rows[2]["tier"], "D");
        assert_eq!(rows[3]["tier"], "D");
    }

    #[tokio::test]
    async fn tier_list_without_scope_covers_all_patches() {
        let pool = test_pool().await;
        seed(&pool).await;

        let (status, body) = get_json(app(pool), "/champions/meta-tier-list").await;

        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().unwrap();
        assert_eq!(rows[0]["champion_name"], "Azir");
        assert_eq!(rows[0]["pick_rate"], 80.0);
        assert_eq!(rows[0]["win_rate"], 100.0);
    }

    #[tokio::test]
    async fn tier_list_on_empty_scope_is_an_empty_array() {
        let pool = test_pool().await;
        seed(&pool).await;

        let (status, body) = get_json(app(pool), "/champions/meta-tier-list?patch=14.01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn non_numeric_patch_is_rejected() {
        let pool = test_pool().await;

        let (status, _) = get_json(app(pool), "/champions/meta-tier-list?patch=fifteen").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn champion_stats_builds_the_scouting_card() {
        let pool = test_pool().await;
        seed(&pool).await;

        let (status, body) = get_json(app(pool), "/champions/Azir/stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["champion_name"], "Azir");
        assert_eq!(body["role"], "mid");
        assert_eq!(body["total_games"], 4);
        assert_eq!(body["pick_rate"], 80.0);
        assert_eq!(body["win_rate"], 100.0);
        assert_eq!(body["ban_rate"], 20.0);
        assert_eq!(body["avg_kda"], 10.63);

        assert_eq!(
            body["performance_by_league"],
            json!({
                "LCK": {"win_rate": 100.0, "games": 3},
                "LPL": {"win_rate": 100.0, "games": 1}
            })
        );
        assert_eq!(
            body["best_matchups"],
            json!([
                {"opponent_champion": "Ahri", "win_rate": 100.0, "games": 3},
                {"opponent_champion": "Sylas", "win_rate": 100.0, "games": 1}
            ])
        );
        assert_eq!(
            body["worst_matchups"],
            json!([
                {"opponent_champion": "Sylas", "win_rate": 100.0, "games": 1},
                {"opponent_champion": "Ahri", "win_rate": 100.0, "games": 3}
            ])
        );
    }

    #[tokio::test]
    async fn champion_stats_patch_scope_shrinks_the_card() {
        let pool = test_pool().await;
        seed(&pool).await;

        let (status, body) = get_json(app(pool), "/champions/Sylas/stats?patch=15.02").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_games"], 2);
        assert_eq!(body["win_rate"], 50.0);
        assert_eq!(body["pick_rate"], 66.7);
    }

    #[tokio::test]
    async fn champion_stats_unknown_champion_is_404() {
        let pool = test_pool().await;
        seed(&pool).await;

        let (status, body) = get_json(app(pool), "/champions/Zoe/stats").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Champion not found"}));
    }

    #[tokio::test]
    async fn repeated_reads_are_byte_identical() {
        let pool = test_pool().await;
        seed(&pool).await;

        let (_, first) = get_text(app(pool.clone()), "/champions/Azir/stats").await;
        let (_, second) = get_text(app(pool), "/champions/Azir/stats").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn stub_payloads_echo_the_champion_name() {
        let pool = test_pool().await;

        let (status, body) = get_json(app(pool.clone()), "/champions/Azir/power-timeline").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::to_value(crate::mock::power_timeline("Azir")).unwrap());

        let (status, body) =
            get_json(app(pool), "/champions/Aurora/historical-performance").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::to_value(crate::mock::historical_performance("Aurora")).unwrap()
        );
    }
}
