use axum::response::Json;

use crate::mock;
use crate::models::analytics::{DraftAnalysis, TeamComposition};

// GET /draft/analysis - Pick and ban priorities for the current patch
#[utoipa::path(
    get,
    path = "/draft/analysis",
    responses((status = 200, description = "Pick, ban, flex and counter tables", body = DraftAnalysis)),
    tag = "draft"
)]
pub async fn get_draft_analysis() -> Json<DraftAnalysis> {
    Json(mock::draft_analysis())
}

// GET /team-compositions/winning - Composition archetypes that win
#[utoipa::path(
    get,
    path = "/team-compositions/winning",
    responses((status = 200, description = "Archetypes with win rates", body = [TeamComposition])),
    tag = "draft"
)]
pub async fn get_winning_compositions() -> Json<Vec<TeamComposition>> {
    Json(mock::winning_compositions())
}
