use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod analytics;

/// One row per game. `patch` and `winner_teamid` can be absent for games
/// ingested with partial data.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Match {
    pub gameid: String,
    pub datacompleteness: String,
    pub url: Option<String>,
    pub league: String,
    pub year: i64,
    pub split: Option<String>,
    pub playoffs: i64,
    pub date: String,
    pub game: i64,
    pub patch: Option<f64>,
    pub gamelength: i64,
    pub winner_teamid: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Team {
    pub teamid: String,
    pub teamname: String,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Player {
    pub playerid: String,
    pub playername: String,
}

/// Per-team stat line, two rows per game (one per side). Column names with
/// spaces come from the upstream dataset and are preserved on the wire.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct TeamMatchStat {
    pub gameid: String,
    pub teamid: String,
    pub side: String,
    pub result: i64,
    pub teamkills: i64,
    pub teamdeaths: i64,
    pub ban1: Option<String>,
    pub ban2: Option<String>,
    pub ban3: Option<String>,
    pub ban4: Option<String>,
    pub ban5: Option<String>,
    pub firstdragon: Option<i64>,
    pub dragons: Option<i64>,
    pub opp_dragons: Option<i64>,
    pub elementaldrakes: Option<i64>,
    pub opp_elementaldrakes: Option<i64>,
    pub infernals: Option<i64>,
    pub mountains: Option<i64>,
    pub clouds: Option<i64>,
    pub oceans: Option<i64>,
    pub chemtechs: Option<i64>,
    pub hextechs: Option<i64>,
    #[serde(rename = "dragons (type unknown)")]
    #[sqlx(rename = "dragons (type unknown)")]
    pub dragons_type_unknown: Option<i64>,
    pub elders: Option<i64>,
    pub opp_elders: Option<i64>,
    pub firstherald: Option<i64>,
    pub heralds: Option<i64>,
    pub opp_heralds: Option<i64>,
    pub void_grubs: Option<i64>,
    pub opp_void_grubs: Option<i64>,
    pub firstbaron: Option<i64>,
    pub barons: Option<i64>,
    pub opp_barons: Option<i64>,
    pub atakhans: Option<i64>,
    pub opp_atakhans: Option<i64>,
    pub firsttower: Option<i64>,
    pub towers: Option<i64>,
    pub opp_towers: Option<i64>,
    pub firstmidtower: Option<i64>,
    pub firsttothreetowers: Option<i64>,
    pub turretplates: Option<i64>,
    pub opp_turretplates: Option<i64>,
    pub inhibitors: Option<i64>,
    pub opp_inhibitors: Option<i64>,
    #[serde(rename = "team kpm")]
    #[sqlx(rename = "team kpm")]
    pub team_kpm: Option<f64>,
    pub ckpm: Option<f64>,
}

/// Per-player stat line, ten rows per game. The 10/15-minute columns are
/// timeline snapshots and are null for games without timeline data.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct PlayerMatchStat {
    pub participantid: i64,
    pub gameid: String,
    pub playerid: String,
    pub teamid: String,
    pub side: String,
    pub position: String,
    pub champion: String,
    pub kills: i64,
    pub deaths: i64,
    pub assists: i64,
    pub doublekills: Option<i64>,
    pub triplekills: Option<i64>,
    pub quadrakills: Option<i64>,
    pub pentakills: Option<i64>,
    pub firstblood: Option<i64>,
    pub firstbloodkill: Option<i64>,
    pub firstbloodassist: Option<i64>,
    pub firstbloodvictim: Option<i64>,
    pub damagetochampions: Option<i64>,
    pub dpm: Option<f64>,
    pub damageshare: Option<f64>,
    pub damagetakenperminute: Option<f64>,
    pub damagemitigatedperminute: Option<f64>,
    pub wardsplaced: Option<i64>,
    pub wpm: Option<f64>,
    pub wardskilled: Option<i64>,
    pub wcpm: Option<f64>,
    pub controlwardsbought: Option<i64>,
    pub visionscore: Option<i64>,
    pub vspm: Option<f64>,
    pub totalgold: Option<i64>,
    pub earnedgold: Option<i64>,
    #[serde(rename = "earned gpm")]
    #[sqlx(rename = "earned gpm")]
    pub earned_gpm: Option<f64>,
    pub earnedgoldshare: Option<f64>,
    pub goldspent: Option<i64>,
    pub gspd: Option<f64>,
    pub gpr: Option<f64>,
    #[serde(rename = "total cs")]
    #[sqlx(rename = "total cs")]
    pub total_cs: Option<i64>,
    pub minionkills: Option<i64>,
    pub monsterkills: Option<i64>,
    pub monsterkillsownjungle: Option<i64>,
    pub monsterkillsenemyjungle: Option<i64>,
    pub cspm: Option<f64>,
    pub goldat10: Option<i64>,
    pub xpat10: Option<i64>,
    pub csat10: Option<i64>,
    pub opp_goldat10: Option<i64>,
    pub opp_xpat10: Option<i64>,
    pub opp_csat10: Option<i64>,
    pub golddiffat10: Option<i64>,
    pub xpdiffat10: Option<i64>,
    pub csdiffat10: Option<i64>,
    pub killsat10: Option<i64>,
    pub assistsat10: Option<i64>,
    pub deathsat10: Option<i64>,
    pub opp_killsat10: Option<i64>,
    pub opp_assistsat10: Option<i64>,
    pub opp_deathsat10: Option<i64>,
    pub goldat15: Option<i64>,
    pub xpat15: Option<i64>,
    pub csat15: Option<i64>,
    pub opp_goldat15: Option<i64>,
    pub opp_xpat15: Option<i64>,
    pub opp_csat15: Option<i64>,
    pub golddiffat15: Option<i64>,
    pub xpdiffat15: Option<i64>,
    pub csdiffat15: Option<i64>,
    pub killsat15: Option<i64>,
    pub assistsat15: Option<i64>,
    pub deathsat15: Option<i64>,
    pub opp_killsat15: Option<i64>,
    pub opp_assistsat15: Option<i64>,
    pub opp_deathsat15: Option<i64>,
    pub pick1: Option<String>,
    pub pick2: Option<String>,
    pub pick3: Option<String>,
    pub pick4: Option<String>,
    pub pick5: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
