use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::models::analytics::{
    ChampionGroupRow, ChampionPoolRow, ChampionSummaryRow, LeagueSplitRow, MatchupRow,
    RecentMatchRow, SeasonSummaryRow,
};
use crate::models::{Match, Player, PlayerMatchStat, Team, TeamMatchStat};

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

// Match queries
pub async fn get_matches(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"SELECT * FROM matches ORDER BY date, gameid LIMIT ? OFFSET ?"#
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_match_by_gameid(pool: &SqlitePool, gameid: &str) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"SELECT * FROM matches WHERE gameid = ?"#
    )
    .bind(gameid)
    .fetch_optional(pool)
    .await
}

// Team queries
pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT * FROM teams ORDER BY teamname"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_team_by_id(pool: &SqlitePool, teamid: &str) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT * FROM teams WHERE teamid = ?"#
    )
    .bind(teamid)
    .fetch_optional(pool)
    .await
}

// Player queries
pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players ORDER BY playername"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &SqlitePool, playerid: &str) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE playerid = ?"#
    )
    .bind(playerid)
    .fetch_optional(pool)
    .await
}

// Stat line queries - LIMIT -1 means no limit in SQLite
pub async fn get_team_match_stats(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<TeamMatchStat>, sqlx::Error> {
    sqlx::query_as::<_, TeamMatchStat>(
        r#"SELECT * FROM team_match_stats ORDER BY gameid, side LIMIT ? OFFSET ?"#
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_team_match_stats_by_gameid(pool: &SqlitePool, gameid: &str) -> Result<Vec<TeamMatchStat>, sqlx::Error> {
    sqlx::query_as::<_, TeamMatchStat>(
        r#"SELECT * FROM team_match_stats WHERE gameid = ? ORDER BY side"#
    )
    .bind(gameid)
    .fetch_all(pool)
    .await
}

pub async fn get_player_match_stats(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<PlayerMatchStat>, sqlx::Error> {
    sqlx::query_as::<_, PlayerMatchStat>(
        r#"SELECT * FROM player_match_stats ORDER BY gameid, participantid LIMIT ? OFFSET ?"#
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn get_player_match_stats_by_gameid(pool: &SqlitePool, gameid: &str) -> Result<Vec<PlayerMatchStat>, sqlx::Error> {
    sqlx::query_as::<_, PlayerMatchStat>(
        r#"SELECT * FROM player_match_stats WHERE gameid = ? ORDER BY participantid"#
    )
    .bind(gameid)
    .fetch_all(pool)
    .await
}

// Dashboard aggregates
pub async fn count_matches(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM matches"#)
        .fetch_one(pool)
        .await
}

pub async fn count_distinct_champions(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(DISTINCT champion) FROM player_match_stats"#)
        .fetch_one(pool)
        .await
}

pub async fn count_players(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM players"#)
        .fetch_one(pool)
        .await
}

pub async fn avg_game_length_seconds(pool: &SqlitePool) -> Result<Option<f64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<f64>>(r#"SELECT AVG(gamelength) FROM matches"#)
        .fetch_one(pool)
        .await
}

pub async fn avg_kills_per_game(pool: &SqlitePool) -> Result<Option<f64>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<f64>>(
        r#"SELECT AVG(total_kills)
           FROM (SELECT SUM(teamkills) AS total_kills FROM team_match_stats GROUP BY gameid)"#
    )
    .fetch_one(pool)
    .await
}

/// Returns (games, wins) for the blue side. `wins` is null when no games exist.
pub async fn blue_side_record(pool: &SqlitePool) -> Result<(i64, Option<i64>), sqlx::Error> {
    sqlx::query_as::<_, (i64, Option<i64>)>(
        r#"SELECT COUNT(*), SUM(result) FROM team_match_stats WHERE side = 'Blue'"#
    )
    .fetch_one(pool)
    .await
}

// Champion aggregates - patch and role filters bind twice so NULL disables them
pub async fn get_champion_groups(
    pool: &SqlitePool,
    patch: Option<f64>,
    role: Option<&str>,
) -> Result<Vec<ChampionGroupRow>, sqlx::Error> {
    sqlx::query_as::<_, ChampionGroupRow>(
        r#"SELECT
               pms.champion AS champion_name,
               pms.position AS role,
               COUNT(*) AS games,
               SUM(CASE WHEN pms.teamid = m.winner_teamid THEN 1 ELSE 0 END) AS wins
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE (? IS NULL OR m.patch = ?)
             AND (? IS NULL OR pms.position = ?)
           GROUP BY pms.champion, pms.position"#
    )
    .bind(patch)
    .bind(patch)
    .bind(role)
    .bind(role)
    .fetch_all(pool)
    .await
}

pub async fn count_games_with_picks(pool: &SqlitePool, patch: Option<f64>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(DISTINCT pms.gameid)
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE (? IS NULL OR m.patch = ?)"#
    )
    .bind(patch)
    .bind(patch)
    .fetch_one(pool)
    .await
}

pub async fn get_champion_summary(
    pool: &SqlitePool,
    champion: &str,
    patch: Option<f64>,
    role: Option<&str>,
) -> Result<ChampionSummaryRow, sqlx::Error> {
    sqlx::query_as::<_, ChampionSummaryRow>(
        r#"SELECT
               COUNT(*) AS games,
               SUM(CASE WHEN pms.teamid = m.winner_teamid THEN 1 ELSE 0 END) AS wins,
               AVG(CAST(pms.kills + pms.assists AS REAL)
                   / CASE WHEN pms.deaths = 0 THEN 1 ELSE pms.deaths END) AS avg_kda
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE pms.champion = ?
             AND (? IS NULL OR m.patch = ?)
             AND (? IS NULL OR pms.position = ?)"#
    )
    .bind(champion)
    .bind(patch)
    .bind(patch)
    .bind(role)
    .bind(role)
    .fetch_one(pool)
    .await
}

pub async fn count_games_champion_banned(
    pool: &SqlitePool,
    champion: &str,
    patch: Option<f64>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(DISTINCT tms.gameid)
           FROM team_match_stats tms
           JOIN matches m ON m.gameid = tms.gameid
           WHERE ? IN (tms.ban1, tms.ban2, tms.ban3, tms.ban4, tms.ban5)
             AND (? IS NULL OR m.patch = ?)"#
    )
    .bind(champion)
    .bind(patch)
    .bind(patch)
    .fetch_one(pool)
    .await
}

pub async fn get_champion_league_splits(
    pool: &SqlitePool,
    champion: &str,
    patch: Option<f64>,
    role: Option<&str>,
) -> Result<Vec<LeagueSplitRow>, sqlx::Error> {
    sqlx::query_as::<_, LeagueSplitRow>(
        r#"SELECT
               m.league AS league,
               COUNT(*) AS games,
               SUM(CASE WHEN pms.teamid = m.winner_teamid THEN 1 ELSE 0 END) AS wins
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE pms.champion = ?
             AND (? IS NULL OR m.patch = ?)
             AND (? IS NULL OR pms.position = ?)
           GROUP BY m.league
           ORDER BY m.league"#
    )
    .bind(champion)
    .bind(patch)
    .bind(patch)
    .bind(role)
    .bind(role)
    .fetch_all(pool)
    .await
}

/// Lane opponents are the enemy rows with the same position in the same game.
pub async fn get_champion_matchups(
    pool: &SqlitePool,
    champion: &str,
    patch: Option<f64>,
    role: Option<&str>,
) -> Result<Vec<MatchupRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchupRow>(
        r#"SELECT
               o.champion AS opponent_champion,
               COUNT(*) AS games,
               SUM(CASE WHEN p.teamid = m.winner_teamid THEN 1 ELSE 0 END) AS wins
           FROM player_match_stats p
           JOIN player_match_stats o
               ON o.gameid = p.gameid AND o.position = p.position AND o.side <> p.side
           JOIN matches m ON m.gameid = p.gameid
           WHERE p.champion = ?
             AND (? IS NULL OR m.patch = ?)
             AND (? IS NULL OR p.position = ?)
           GROUP BY o.champion
           ORDER BY o.champion"#
    )
    .bind(champion)
    .bind(patch)
    .bind(patch)
    .bind(role)
    .bind(role)
    .fetch_all(pool)
    .await
}

pub async fn get_champion_top_position(
    pool: &SqlitePool,
    champion: &str,
    patch: Option<f64>,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"SELECT pms.position
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE pms.champion = ?
             AND (? IS NULL OR m.patch = ?)
           GROUP BY pms.position
           ORDER BY COUNT(*) DESC, pms.position
           LIMIT 1"#
    )
    .bind(champion)
    .bind(patch)
    .bind(patch)
    .fetch_optional(pool)
    .await
}

// Player aggregates
pub async fn get_player_season_summary(
    pool: &SqlitePool,
    playerid: &str,
    year: Option<i64>,
) -> Result<SeasonSummaryRow, sqlx::Error> {
    sqlx::query_as::<_, SeasonSummaryRow>(
        r#"SELECT
               COUNT(*) AS games,
               SUM(CASE WHEN pms.teamid = m.winner_teamid THEN 1 ELSE 0 END) AS wins,
               AVG(CAST(pms.kills + pms.assists AS REAL)
                   / CASE WHEN pms.deaths = 0 THEN 1 ELSE pms.deaths END) AS kda,
               AVG(pms.damageshare) AS damage_share,
               AVG(pms."earned gpm") AS gpm,
               AVG(pms.cspm) AS cspm
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE pms.playerid = ?
             AND (? IS NULL OR m.year = ?)"#
    )
    .bind(playerid)
    .bind(year)
    .bind(year)
    .fetch_one(pool)
    .await
}

pub async fn get_player_champion_pool(
    pool: &SqlitePool,
    playerid: &str,
    year: Option<i64>,
) -> Result<Vec<ChampionPoolRow>, sqlx::Error> {
    sqlx::query_as::<_, ChampionPoolRow>(
        r#"SELECT
               pms.champion AS champion_name,
               COUNT(*) AS games,
               SUM(CASE WHEN pms.teamid = m.winner_teamid THEN 1 ELSE 0 END) AS wins
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE pms.playerid = ?
             AND (? IS NULL OR m.year = ?)
           GROUP BY pms.champion
           ORDER BY games DESC, pms.champion
           LIMIT 5"#
    )
    .bind(playerid)
    .bind(year)
    .bind(year)
    .fetch_all(pool)
    .await
}

pub async fn get_player_recent_team(pool: &SqlitePool, playerid: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"SELECT t.teamname
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           JOIN teams t ON t.teamid = pms.teamid
           WHERE pms.playerid = ?
           ORDER BY m.date DESC, m.gameid DESC
           LIMIT 1"#
    )
    .bind(playerid)
    .fetch_optional(pool)
    .await
}

pub async fn get_player_top_position(
    pool: &SqlitePool,
    playerid: &str,
    year: Option<i64>,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"SELECT pms.position
           FROM player_match_stats pms
           JOIN matches m ON m.gameid = pms.gameid
           WHERE pms.playerid = ?
             AND (? IS NULL OR m.year = ?)
           GROUP BY pms.position
           ORDER BY COUNT(*) DESC, pms.position
           LIMIT 1"#
    )
    .bind(playerid)
    .bind(year)
    .bind(year)
    .fetch_optional(pool)
    .await
}

// News feed queries
pub async fn get_recent_matches(pool: &SqlitePool, limit: i64) -> Result<Vec<RecentMatchRow>, sqlx::Error> {
    sqlx::query_as::<_, RecentMatchRow>(
        r#"SELECT
               m.gameid AS gameid,
               m.league AS league,
               m.date AS date,
               t.teamname AS winner_name
           FROM matches m
           LEFT JOIN teams t ON t.teamid = m.winner_teamid
           ORDER BY m.date DESC, m.gameid DESC
           LIMIT ?"#
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
