use axum::response::Json;

use crate::mock;
use crate::models::analytics::LeagueMetaComparison;

// GET /leagues/meta-comparison - Regional meta snapshot keyed by league
#[utoipa::path(
    get,
    path = "/leagues/meta-comparison",
    responses((status = 200, description = "Per-league pace and pick profile", body = LeagueMetaComparison)),
    tag = "leagues"
)]
pub async fn get_meta_comparison() -> Json<LeagueMetaComparison> {
    Json(mock::league_meta_comparison())
}
