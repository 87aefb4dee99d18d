use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::models::analytics::{
    AvoidChampion, BanPriority, BaselineRankings, BaselineStats, ChampionHistoricalPerformance,
    ChampionMatchup, ChampionMetaTierList, ChampionPick, ChampionPowerTimeline,
    ChampionPoolEntry, ChampionRecommendation, ChampionStats, ChampionTrend, ComparisonStats,
    CounterPick, DashboardChanges, DashboardSummary, DecliningChampion, DraftAnalysis,
    EmergingChampion, FlexPick, LeagueMeta, LeagueMetaComparison, LeaguePerformance,
    MatchPrediction, MetaShiftAlert,
    NewsRecentActivity, PatchEvolution, PatchWeek, PickPriority, PlayerComparison, PlayerNote,
    PlayerPerformanceAlert, PlayerStats, PredictMatchRequest, RecommendationSituation,
    SeasonRecord, SeasonStats, StableChampion, TeamComposition, TimelinePoint,
};
use crate::models::{HealthResponse, Match, Player, PlayerMatchStat, Team, TeamMatchStat};

/// Static registry of every documented route and schema. `/doc` serializes it,
/// `/swagger-ui` renders it.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nexus Analytics API",
        version = "1.0.0",
        description = "Read-oriented esports analytics over match, team and player records"
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::matches::get_matches,
        crate::routes::matches::get_match_by_gameid,
        crate::routes::teams::get_teams,
        crate::routes::teams::get_team_by_id,
        crate::routes::players::get_players,
        crate::routes::players::get_player_by_id,
        crate::routes::players::get_player_stats,
        crate::routes::players::compare_players,
        crate::routes::match_stats::get_team_match_stats,
        crate::routes::match_stats::get_team_match_stats_by_gameid,
        crate::routes::match_stats::get_player_match_stats,
        crate::routes::match_stats::get_player_match_stats_by_gameid,
        crate::routes::dashboard::get_dashboard_summary,
        crate::routes::champions::get_meta_tier_list,
        crate::routes::champions::get_champion_stats,
        crate::routes::champions::get_power_timeline,
        crate::routes::champions::get_historical_performance,
        crate::routes::news::get_recent_activity,
        crate::routes::draft::get_draft_analysis,
        crate::routes::draft::get_winning_compositions,
        crate::routes::leagues::get_meta_comparison,
        crate::routes::patches::get_patch_evolution,
        crate::routes::predictions::predict_match,
        crate::routes::predictions::recommend_champion,
        crate::routes::alerts::get_meta_shift_alerts,
        crate::routes::alerts::get_player_performance_alerts,
    ),
    components(schemas(
        ErrorBody,
        HealthResponse,
        Match,
        Team,
        Player,
        TeamMatchStat,
        PlayerMatchStat,
        DashboardSummary,
        DashboardChanges,
        ChampionMetaTierList,
        ChampionStats,
        LeaguePerformance,
        ChampionMatchup,
        ChampionPowerTimeline,
        TimelinePoint,
        ChampionHistoricalPerformance,
        SeasonRecord,
        NewsRecentActivity,
        PlayerStats,
        SeasonStats,
        ChampionPoolEntry,
        ComparisonStats,
        BaselineStats,
        BaselineRankings,
        PlayerComparison,
        DraftAnalysis,
        PickPriority,
        BanPriority,
        FlexPick,
        CounterPick,
        TeamComposition,
        LeagueMetaComparison,
        LeagueMeta,
        PatchEvolution,
        PatchWeek,
        EmergingChampion,
        DecliningChampion,
        StableChampion,
        PredictMatchRequest,
        MatchPrediction,
        RecommendationSituation,
        ChampionRecommendation,
        ChampionPick,
        AvoidChampion,
        MetaShiftAlert,
        ChampionTrend,
        PlayerPerformanceAlert,
        PlayerNote,
    )),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "matches", description = "Match records"),
        (name = "teams", description = "Team records"),
        (name = "players", description = "Player records and season stats"),
        (name = "match-stats", description = "Raw per-game stat lines"),
        (name = "dashboard", description = "Store-wide summary"),
        (name = "champions", description = "Champion meta analytics"),
        (name = "news", description = "Recent activity feed"),
        (name = "draft", description = "Draft preparation tables"),
        (name = "leagues", description = "Cross-league comparisons"),
        (name = "patches", description = "Patch meta evolution"),
        (name = "predictions", description = "Match and draft predictions"),
        (name = "alerts", description = "Meta and player form alerts")
    )
)]
pub struct ApiDoc;
