use axum::response::Json;

use crate::error::ErrorBody;
use crate::extract::ApiJson;
use crate::mock;
use crate::models::analytics::{
    ChampionRecommendation, MatchPrediction, PredictMatchRequest, RecommendationSituation,
};

// POST /predictions/match - Win probability for an upcoming series
#[utoipa::path(
    post,
    path = "/predictions/match",
    request_body = PredictMatchRequest,
    responses(
        (status = 200, description = "Prediction with echoed team ids", body = MatchPrediction),
        (status = 400, description = "Malformed request body", body = ErrorBody)
    ),
    tag = "predictions"
)]
pub async fn predict_match(ApiJson(req): ApiJson<PredictMatchRequest>) -> Json<MatchPrediction> {
    Json(mock::match_prediction(req.team1_id, req.team2_id))
}

// POST /recommendations/champion - Draft-time pick suggestions
#[utoipa::path(
    post,
    path = "/recommendations/champion",
    request_body = RecommendationSituation,
    responses(
        (status = 200, description = "Picks to take and picks to avoid", body = ChampionRecommendation),
        (status = 400, description = "Malformed request body", body = ErrorBody)
    ),
    tag = "predictions"
)]
pub async fn recommend_champion(
    ApiJson(situation): ApiJson<RecommendationSituation>,
) -> Json<ChampionRecommendation> {
    Json(mock::champion_recommendation(situation))
}
