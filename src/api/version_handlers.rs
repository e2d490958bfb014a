use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::model::Build;

pub async fn get_version(State(state): State<AppState>) -> Json<Build> {
    Json(state.build.as_ref().clone())
}
