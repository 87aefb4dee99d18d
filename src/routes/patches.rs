use axum::{extract::Path, response::Json};

use crate::mock;
use crate::models::analytics::PatchEvolution;

// GET /patches/{patch}/evolution - Week-by-week movement within a patch
#[utoipa::path(
    get,
    path = "/patches/{patch}/evolution",
    params(("patch" = String, Path, description = "Patch number, e.g. 15.12")),
    responses((status = 200, description = "Weekly emerging/declining/stable picks", body = PatchEvolution)),
    tag = "patches"
)]
pub async fn get_patch_evolution(Path(patch): Path<String>) -> Json<PatchEvolution> {
    Json(mock::patch_evolution(&patch))
}
