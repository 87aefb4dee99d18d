//! Derived payloads for the analytics endpoints, plus the internal row
//! types their queries decode into.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- internal query rows ---

#[derive(Debug, sqlx::FromRow)]
pub struct ChampionGroupRow {
    pub champion_name: String,
    pub role: String,
    pub games: i64,
    pub wins: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct ChampionSummaryRow {
    pub games: i64,
    pub wins: Option<i64>,
    pub avg_kda: Option<f64>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct LeagueSplitRow {
    pub league: String,
    pub games: i64,
    pub wins: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct MatchupRow {
    pub opponent_champion: String,
    pub games: i64,
    pub wins: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct SeasonSummaryRow {
    pub games: i64,
    pub wins: Option<i64>,
    pub kda: Option<f64>,
    pub damage_share: Option<f64>,
    pub gpm: Option<f64>,
    pub cspm: Option<f64>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct ChampionPoolRow {
    pub champion_name: String,
    pub games: i64,
    pub wins: i64,
}

#[derive(Debug, sqlx::FromRow)]
pub struct RecentMatchRow {
    pub gameid: String,
    pub league: String,
    pub date: String,
    pub winner_name: Option<String>,
}

// --- dashboard ---

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardChanges {
    pub matches_this_week: i64,
    pub new_champions: i64,
    pub active_players_change: i64,
    pub game_length_change_sec: f64,
    pub kills_change: f64,
    pub blue_side_change: f64,
}

/// Averages are null when no matches exist yet.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub total_matches: i64,
    pub total_champions: i64,
    pub total_players: i64,
    pub avg_game_length_min: Option<f64>,
    pub avg_kills_per_game: Option<f64>,
    pub blue_side_win_rate: Option<f64>,
    pub changes: DashboardChanges,
}

// --- champions ---

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionMetaTierList {
    pub champion_name: String,
    pub role: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub tier: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaguePerformance {
    pub win_rate: f64,
    pub games: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChampionMatchup {
    pub opponent_champion: String,
    pub win_rate: f64,
    pub games: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionStats {
    pub champion_name: String,
    pub role: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub ban_rate: f64,
    pub total_games: i64,
    pub avg_kda: f64,
    pub performance_by_league: BTreeMap<String, LeaguePerformance>,
    pub best_matchups: Vec<ChampionMatchup>,
    pub worst_matchups: Vec<ChampionMatchup>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TimelinePoint {
    pub minute: i64,
    pub win_rate: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionPowerTimeline {
    pub champion_name: String,
    pub win_rate_by_minute: Vec<TimelinePoint>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonRecord {
    pub season: String,
    pub split: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub notes: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionHistoricalPerformance {
    pub champion_name: String,
    pub season_data: Vec<SeasonRecord>,
    pub prediction: String,
}

// --- news ---

#[derive(Debug, Serialize, ToSchema)]
pub struct NewsRecentActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

// --- players ---

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonStats {
    pub games: i64,
    pub win_rate: Option<f64>,
    pub kda: Option<f64>,
    pub damage_share: Option<f64>,
    pub gpm: Option<f64>,
    pub cspm: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionPoolEntry {
    pub champion_name: String,
    pub games: i64,
    pub win_rate: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BaselineStats {
    pub kda: f64,
    pub damage: f64,
    pub gold: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BaselineRankings {
    pub kda: i64,
    pub damage: i64,
    pub gold: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ComparisonStats {
    #[serde(rename = "LCK_mid_avg")]
    pub lck_mid_avg: BaselineStats,
    pub rankings: BaselineRankings,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerStats {
    pub player_name: String,
    pub team_name: Option<String>,
    pub role: Option<String>,
    pub season_stats: SeasonStats,
    pub champion_pool: Vec<ChampionPoolEntry>,
    pub comparison_stats: ComparisonStats,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerComparison {
    pub player_id: String,
    pub player_name: String,
    pub games: i64,
    pub win_rate: f64,
    pub kda: f64,
    pub dpm: f64,
    pub gpm: f64,
    pub cspm: f64,
    pub champion_pool_size: i64,
    pub most_played_champion: String,
}

// --- draft ---

#[derive(Debug, Serialize, ToSchema)]
pub struct PickPriority {
    pub champion_name: String,
    pub role: String,
    pub first_pick_win_rate: f64,
    pub first_picks_count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BanPriority {
    pub champion_name: String,
    pub ban_rate: f64,
    pub total_games_in_patch: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FlexPick {
    pub champion_name: String,
    pub roles: Vec<String>,
    pub global_win_rate: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CounterPick {
    pub champion_name: String,
    pub vs_champion: String,
    pub win_rate: f64,
    pub games: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DraftAnalysis {
    pub pick_priority: Vec<PickPriority>,
    pub ban_priority: Vec<BanPriority>,
    pub flex_picks: Vec<FlexPick>,
    pub counter_picks: Vec<CounterPick>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamComposition {
    pub name: String,
    pub win_rate: f64,
    pub games: i64,
    pub description: String,
    pub example_champions: Vec<String>,
}

// --- leagues ---

#[derive(Debug, Serialize, ToSchema)]
pub struct LeagueMeta {
    pub avg_game_time_min: f64,
    pub avg_kills_per_game: f64,
    pub most_picked_champions: Vec<String>,
    pub unique_meta_description: String,
}

/// Keyed by league id. BTreeMap keeps the key order stable across calls.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeagueMetaComparison(pub BTreeMap<String, LeagueMeta>);

// --- patches ---

#[derive(Debug, Serialize, ToSchema)]
pub struct EmergingChampion {
    pub champion_name: String,
    pub win_rate_change: String,
    pub pick_rate_change: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DecliningChampion {
    pub champion_name: String,
    pub win_rate_trend: String,
    pub pick_rate_trend: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StableChampion {
    pub champion_name: String,
    pub win_rate: f64,
    pub pick_rate: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PatchWeek {
    pub week_start_date: String,
    pub emerging_champions: Vec<EmergingChampion>,
    pub declining_champions: Vec<DecliningChampion>,
    pub stable_champions: Vec<StableChampion>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PatchEvolution {
    pub patch_number: String,
    pub weeks: Vec<PatchWeek>,
}

// --- predictions ---

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PredictMatchRequest {
    pub team1_id: String,
    pub team2_id: String,
    pub recent_games: Option<i64>,
    pub team1_players: Option<Vec<String>>,
    pub team2_players: Option<Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchPrediction {
    pub team1_id: String,
    pub team2_id: String,
    pub team1_win_probability: f64,
    pub most_likely_score: String,
    pub confidence: String,
    pub key_factors: Vec<String>,
}

/// Echoed back inside the recommendation payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecommendationSituation {
    pub side: String,
    pub pick_number: i64,
    pub role: String,
    pub enemy_team_champions: Vec<String>,
    pub your_team_champions: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionPick {
    pub champion_name: String,
    pub tier: String,
    pub win_rate_vs_comp_type: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvoidChampion {
    pub champion_name: String,
    pub reason: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionRecommendation {
    pub situation: RecommendationSituation,
    pub recommendations: Vec<ChampionPick>,
    pub avoid_champions: Vec<AvoidChampion>,
}

// --- alerts ---

#[derive(Debug, Serialize, ToSchema)]
pub struct ChampionTrend {
    pub champion_name: String,
    pub role: String,
    pub win_rate_trend: String,
    pub pick_rate_trend: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetaShiftAlert {
    pub timestamp: String,
    pub rising_threats: Vec<ChampionTrend>,
    pub declining_picks: Vec<ChampionTrend>,
    pub immediate_actions: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerNote {
    pub player_name: String,
    pub team_name: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerPerformanceAlert {
    pub timestamp: String,
    pub hot_streaks: Vec<PlayerNote>,
    pub concerning_trends: Vec<PlayerNote>,
    pub injury_alerts: Vec<PlayerNote>,
}
