use axum::{
    routing::{get, post},
    Router,
};
use sqlx::sqlite::SqlitePool;

pub mod alerts;
pub mod champions;
pub mod dashboard;
pub mod docs;
pub mod draft;
pub mod health;
pub mod leagues;
pub mod match_stats;
pub mod matches;
pub mod news;
pub mod patches;
pub mod players;
pub mod predictions;
pub mod teams;

/// Every route in the API, mapped once. The pool is the only shared state.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(|| async { "Nexus Analytics API - v1.0" }))
        .route("/health", get(health::health_check))
        // Core records
        .route("/matches", get(matches::get_matches))
        .route("/matches/{gameid}", get(matches::get_match_by_gameid))
        .route("/teams", get(teams::get_teams))
        .route("/teams/{teamid}", get(teams::get_team_by_id))
        .route("/players", get(players::get_players))
        .route("/players/compare", get(players::compare_players))
        .route("/players/{playerid}", get(players::get_player_by_id))
        .route("/players/{playerid}/stats", get(players::get_player_stats))
        // Raw stat lines
        .route("/team-match-stats", get(match_stats::get_team_match_stats))
        .route("/team-match-stats/{gameid}", get(match_stats::get_team_match_stats_by_gameid))
        .route("/player-match-stats", get(match_stats::get_player_match_stats))
        .route("/player-match-stats/{gameid}", get(match_stats::get_player_match_stats_by_gameid))
        // Analytics
        .route("/dashboard/summary", get(dashboard::get_dashboard_summary))
        .route("/champions/meta-tier-list", get(champions::get_meta_tier_list))
        .route("/champions/{champion_name}/stats", get(champions::get_champion_stats))
        .route("/champions/{champion_name}/power-timeline", get(champions::get_power_timeline))
        .route(
            "/champions/{champion_name}/historical-performance",
            get(champions::get_historical_performance),
        )
        .route("/news/recent-activity", get(news::get_recent_activity))
        .route("/draft/analysis", get(draft::get_draft_analysis))
        .route("/team-compositions/winning", get(draft::get_winning_compositions))
        .route("/leagues/meta-comparison", get(leagues::get_meta_comparison))
        .route("/patches/{patch}/evolution", get(patches::get_patch_evolution))
        .route("/predictions/match", post(predictions::predict_match))
        .route("/recommendations/champion", post(predictions::recommend_champion))
        .route("/alerts/meta-shifts", get(alerts::get_meta_shift_alerts))
        .route("/alerts/player-performance", get(alerts::get_player_performance_alerts))
        // API documentation
        .route("/doc", get(docs::openapi_doc))
        .route("/swagger-ui", get(docs::swagger_ui))
        .with_state(pool)
}
