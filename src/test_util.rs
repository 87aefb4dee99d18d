//! Shared fixtures for route tests: an in-memory database with the five
//! tables, a small seeded store with hand-checkable aggregates, and oneshot
//! request helpers.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::util::ServiceExt;

const CREATE_MATCHES: &str = r#"
CREATE TABLE matches (
    gameid TEXT PRIMARY KEY,
    datacompleteness TEXT NOT NULL,
    url TEXT,
    league TEXT NOT NULL,
    year INTEGER NOT NULL,
    split TEXT,
    playoffs INTEGER NOT NULL,
    date TEXT NOT NULL,
    game INTEGER NOT NULL,
    patch REAL,
    gamelength INTEGER NOT NULL,
    winner_teamid TEXT
)"#;

const CREATE_TEAMS: &str = r#"
CREATE TABLE teams (
    teamid TEXT PRIMARY KEY,
    teamname TEXT NOT NULL
)"#;

const CREATE_PLAYERS: &str = r#"
CREATE TABLE players (
    playerid TEXT PRIMARY KEY,
    playername TEXT NOT NULL
)"#;

const CREATE_TEAM_MATCH_STATS: &str = r#"
CREATE TABLE team_match_stats (
    gameid TEXT NOT NULL,
    teamid TEXT NOT NULL,
    side TEXT NOT NULL,
    result INTEGER NOT NULL,
    teamkills INTEGER NOT NULL,
    teamdeaths INTEGER NOT NULL,
    ban1 TEXT,
    ban2 TEXT,
    ban3 TEXT,
    ban4 TEXT,
    ban5 TEXT,
    firstdragon INTEGER,
    dragons INTEGER,
    opp_dragons INTEGER,
    elementaldrakes INTEGER,
    opp_elementaldrakes INTEGER,
    infernals INTEGER,
    mountains INTEGER,
    clouds INTEGER,
    oceans INTEGER,
    chemtechs INTEGER,
    hextechs INTEGER,
    "dragons (type unknown)" INTEGER,
    elders INTEGER,
    opp_elders INTEGER,
    firstherald INTEGER,
    heralds INTEGER,
    opp_heralds INTEGER,
    void_grubs INTEGER,
    opp_void_grubs INTEGER,
    firstbaron INTEGER,
    barons INTEGER,
    opp_barons INTEGER,
    atakhans INTEGER,
    opp_atakhans INTEGER,
    firsttower INTEGER,
    towers INTEGER,
    opp_towers INTEGER,
    firstmidtower INTEGER,
    firsttothreetowers INTEGER,
    turretplates INTEGER,
    opp_turretplates INTEGER,
    inhibitors INTEGER,
    opp_inhibitors INTEGER,
    "team kpm" REAL,
    ckpm REAL
)"#;

const CREATE_PLAYER_MATCH_STATS: &str = r#"
CREATE TABLE player_match_stats (
    participantid INTEGER NOT NULL,
    gameid TEXT NOT NULL,
    playerid TEXT NOT NULL,
    teamid TEXT NOT NULL,
    side TEXT NOT NULL,
    position TEXT NOT NULL,
    champion TEXT NOT NULL,
    kills INTEGER NOT NULL,
    deaths INTEGER NOT NULL,
    assists INTEGER NOT NULL,
    doublekills INTEGER,
    triplekills INTEGER,
    quadrakills INTEGER,
    pentakills INTEGER,
    firstblood INTEGER,
    firstbloodkill INTEGER,
    firstbloodassist INTEGER,
    firstbloodvictim INTEGER,
    damagetochampions INTEGER,
    dpm REAL,
    damageshare REAL,
    damagetakenperminute REAL,
    damagemitigatedperminute REAL,
    wardsplaced INTEGER,
    wpm REAL,
    wardskilled INTEGER,
    wcpm REAL,
    controlwardsbought INTEGER,
    visionscore INTEGER,
    vspm REAL,
    totalgold INTEGER,
    earnedgold INTEGER,
    "earned gpm" REAL,
    earnedgoldshare REAL,
    goldspent INTEGER,
    gspd REAL,
    gpr REAL,
    "total cs" INTEGER,
    minionkills INTEGER,
    monsterkills INTEGER,
    monsterkillsownjungle INTEGER,
    monsterkillsenemyjungle INTEGER,
    cspm REAL,
    goldat10 INTEGER,
    xpat10 INTEGER,
    csat10 INTEGER,
    opp_goldat10 INTEGER,
    opp_xpat10 INTEGER,
    opp_csat10 INTEGER,
    golddiffat10 INTEGER,
    xpdiffat10 INTEGER,
    csdiffat10 INTEGER,
    killsat10 INTEGER,
    assistsat10 INTEGER,
    deathsat10 INTEGER,
    opp_killsat10 INTEGER,
    opp_assistsat10 INTEGER,
    opp_deathsat10 INTEGER,
    goldat15 INTEGER,
    xpat15 INTEGER,
    csat15 INTEGER,
    opp_goldat15 INTEGER,
    opp_xpat15 INTEGER,
    opp_csat15 INTEGER,
    golddiffat15 INTEGER,
    xpdiffat15 INTEGER,
    csdiffat15 INTEGER,
    killsat15 INTEGER,
    assistsat15 INTEGER,
    deathsat15 INTEGER,
    opp_killsat15 INTEGER,
    opp_assistsat15 INTEGER,
    opp_deathsat15 INTEGER,
    pick1 TEXT,
    pick2 TEXT,
    pick3 TEXT,
    pick4 TEXT,
    pick5 TEXT
)"#;

/// One connection only: a second pooled connection to `sqlite::memory:`
/// would open a separate empty database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    for ddl in [
        CREATE_MATCHES,
        CREATE_TEAMS,
        CREATE_PLAYERS,
        CREATE_TEAM_MATCH_STATS,
        CREATE_PLAYER_MATCH_STATS,
    ] {
        sqlx::query(ddl).execute(&pool).await.unwrap();
    }

    pool
}

pub fn app(pool: SqlitePool) -> Router {
    crate::routes::router(pool)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn insert_team(pool: &SqlitePool, teamid: &str, teamname: &str) {
    sqlx::query("INSERT INTO teams (teamid, teamname) VALUES (?, ?)")
        .bind(teamid)
        .bind(teamname)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_player(pool: &SqlitePool, playerid: &str, playername: &str) {
    sqlx::query("INSERT INTO players (playerid, playername) VALUES (?, ?)")
        .bind(playerid)
        .bind(playername)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_match(
    pool: &SqlitePool,
    gameid: &str,
    league: &str,
    year: i64,
    date: &str,
    patch: Option<f64>,
    winner_teamid: Option<&str>,
) {
    sqlx::query(
        r#"INSERT INTO matches
           (gameid, datacompleteness, url, league, year, split, playoffs, date, game,
            patch, gamelength, winner_teamid)
           VALUES (?, 'complete', NULL, ?, ?, 'Spring', 0, ?, 1, ?, 1900, ?)"#,
    )
    .bind(gameid)
    .bind(league)
    .bind(year)
    .bind(date)
    .bind(patch)
    .bind(winner_teamid)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_team_stat(
    pool: &SqlitePool,
    gameid: &str,
    teamid: &str,
    side: &str,
    result: i64,
    teamkills: i64,
    teamdeaths: i64,
) {
    sqlx::query(
        r#"INSERT INTO team_match_stats (gameid, teamid, side, result, teamkills, teamdeaths)
           VALUES (?, ?, ?, ?, ?, ?)"#,
    )
    .bind(gameid)
    .bind(teamid)
    .bind(side)
    .bind(result)
    .bind(teamkills)
    .bind(teamdeaths)
    .execute(pool)
    .await
    .unwrap();
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_player_stat(
    pool: &SqlitePool,
    participantid: i64,
    gameid: &str,
    playerid: &str,
    teamid: &str,
    side: &str,
    position: &str,
    champion: &str,
    kills: i64,
    deaths: i64,
    assists: i64,
    damageshare: Option<f64>,
    earned_gpm: Option<f64>,
    cspm: Option<f64>,
) {
    sqlx::query(
        r#"INSERT INTO player_match_stats
           (participantid, gameid, playerid, teamid, side, position, champion,
            kills, deaths, assists, damageshare, "earned gpm", cspm)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(participantid)
    .bind(gameid)
    .bind(playerid)
    .bind(teamid)
    .bind(side)
    .bind(position)
    .bind(champion)
    .bind(kills)
    .bind(deaths)
    .bind(assists)
    .bind(damageshare)
    .bind(earned_gpm)
    .bind(cspm)
    .execute(pool)
    .await
    .unwrap();
}

/// Five finished games across three leagues, mid lane stat lines only.
/// Totals used by the tests: Azir goes 4-0 with a 10.625 raw KDA, blue side
/// wins 3 of 5, and every game sums to the kills used by the dashboard.
pub async fn seed(pool: &SqlitePool) {
    insert_team(pool, "t1", "T1").await;
    insert_team(pool, "geng", "Gen.G").await;
    insert_team(pool, "jdg", "JDG").await;
    insert_team(pool, "blg", "BLG").await;
    insert_team(pool, "g2", "G2").await;
    insert_team(pool, "fnc", "FNC").await;

    insert_player(pool, "faker", "Faker").await;
    insert_player(pool, "chovy", "Chovy").await;
    insert_player(pool, "knight", "Knight").await;
    insert_player(pool, "creme", "Creme").await;
    insert_player(pool, "caps", "Caps").await;
    insert_player(pool, "humanoid", "Humanoid").await;

    insert_match(pool, "LCK-2025-0001", "LCK", 2025, "2025-01-15 17:00:00", Some(15.01), Some("t1")).await;
    insert_match(pool, "LCK-2025-0002", "LCK", 2025, "2025-01-16 17:00:00", Some(15.01), Some("geng")).await;
    insert_match(pool, "LCK-2025-0003", "LCK", 2025, "2025-01-22 17:00:00", Some(15.02), Some("t1")).await;
    insert_match(pool, "LPL-2025-0101", "LPL", 2025, "2025-01-23 15:00:00", Some(15.02), Some("jdg")).await;
    insert_match(pool, "LEC-2025-0201", "LEC", 2025, "2025-01-24 18:00:00", Some(15.02), Some("g2")).await;

    insert_team_stat(pool, "LCK-2025-0001", "t1", "Blue", 1, 18, 9).await;
    insert_team_stat(pool, "LCK-2025-0001", "geng", "Red", 0, 9, 18).await;
    insert_team_stat(pool, "LCK-2025-0002", "t1", "Blue", 0, 11, 22).await;
    insert_team_stat(pool, "LCK-2025-0002", "geng", "Red", 1, 22, 11).await;
    insert_team_stat(pool, "LCK-2025-0003", "t1", "Blue", 1, 20, 7).await;
    insert_team_stat(pool, "LCK-2025-0003", "geng", "Red", 0, 7, 20).await;
    insert_team_stat(pool, "LPL-2025-0101", "jdg", "Blue", 1, 25, 14).await;
    insert_team_stat(pool, "LPL-2025-0101", "blg", "Red", 0, 14, 25).await;
    insert_team_stat(pool, "LEC-2025-0201", "fnc", "Blue", 0, 8, 19).await;
    insert_team_stat(pool, "LEC-2025-0201", "g2", "Red", 1, 19, 8).await;

    insert_player_stat(pool, 3, "LCK-2025-0001", "faker", "t1", "Blue", "mid", "Azir", 6, 2, 7, Some(0.28), Some(420.0), Some(9.1)).await;
    insert_player_stat(pool, 8, "LCK-2025-0001", "chovy", "geng", "Red", "mid", "Ahri", 4, 5, 3, Some(0.31), Some(395.0), Some(9.3)).await;
    insert_player_stat(pool, 3, "LCK-2025-0002", "faker", "t1", "Blue", "mid", "Ahri", 2, 4, 5, Some(0.22), Some(380.0), Some(8.5)).await;
    insert_player_stat(pool, 8, "LCK-2025-0002", "chovy", "geng", "Red", "mid", "Azir", 8, 1, 6, Some(0.33), Some(450.0), Some(9.8)).await;
    insert_player_stat(pool, 3, "LCK-2025-0003", "faker", "t1", "Blue", "mid", "Azir", 7, 1, 8, Some(0.31), Some(430.0), Some(9.4)).await;
    insert_player_stat(pool, 8, "LCK-2025-0003", "chovy", "geng", "Red", "mid", "Sylas", 3, 6, 4, Some(0.26), Some(360.0), Some(8.2)).await;
    insert_player_stat(pool, 3, "LPL-2025-0101", "knight", "jdg", "Blue", "mid", "Azir", 5, 2, 9, Some(0.30), Some(440.0), Some(9.6)).await;
    insert_player_stat(pool, 8, "LPL-2025-0101", "creme", "blg", "Red", "mid", "Ahri", 2, 5, 3, Some(0.24), Some(350.0), Some(8.0)).await;
    insert_player_stat(pool, 3, "LEC-2025-0201", "humanoid", "fnc", "Blue", "mid", "Taliyah", 1, 5, 3, Some(0.21), Some(330.0), Some(7.9)).await;
    insert_player_stat(pool, 8, "LEC-2025-0201", "caps", "g2", "Red", "mid", "Sylas", 6, 3, 7, Some(0.29), Some(410.0), Some(9.0)).await;

    // one banned champion so ban rate math has a row to find
    sqlx::query(
        "UPDATE team_match_stats SET ban1 = 'Azir' WHERE gameid = 'LEC-2025-0201' AND teamid = 'fnc'",
    )
    .execute(pool)
    .await
    .unwrap();
}
