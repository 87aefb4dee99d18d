use axum::response::Json;

use crate::mock;
use crate::models::analytics::{MetaShiftAlert, PlayerPerformanceAlert};

// GET /alerts/meta-shifts - Rising and falling picks to react to.
// The timestamp is the only field in the API that changes between calls.
#[utoipa::path(
    get,
    path = "/alerts/meta-shifts",
    responses((status = 200, description = "Current meta movement", body = MetaShiftAlert)),
    tag = "alerts"
)]
pub async fn get_meta_shift_alerts() -> Json<MetaShiftAlert> {
    Json(mock::meta_shift_alert())
}

// GET /alerts/player-performance - Player form notes for scouting
#[utoipa::path(
    get,
    path = "/alerts/player-performance",
    responses((status = 200, description = "Streaks, slumps and injury notes", body = PlayerPerformanceAlert)),
    tag = "alerts"
)]
pub async fn get_player_performance_alerts() -> Json<PlayerPerformanceAlert> {
    Json(mock::player_performance_alert())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_util::{app, get_json, test_pool};

    #[tokio::test]
    async fn meta_shift_alert_carries_a_fresh_timestamp() {
        let pool = test_pool().await;

        let (status, body) = get_json(app(pool), "/alerts/meta-shifts").await;

        assert_eq!(status, StatusCode::OK);
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(!body["rising_threats"].as_array().unwrap().is_empty());
        assert!(!body["immediate_actions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn player_performance_alert_lists_all_note_groups() {
        let pool = test_pool().await;

        let (status, body) = get_json(app(pool), "/alerts/player-performance").await;

        assert_eq!(status, StatusCode::OK);
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(!body["hot_streaks"].as_array().unwrap().is_empty());
        assert!(!body["concerning_trends"].as_array().unwrap().is_empty());
        assert!(!body["injury_alerts"].as_array().unwrap().is_empty());
    }
}
