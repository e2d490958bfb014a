use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::api::error::{parse_json_body, ApiError};
use crate::api::state::AppState;
use crate::model::Post;

pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    match state.posts.find_all().await {
        Ok(posts) => Ok(Json(posts)),
        Err(e) => Err(ApiError::storage(&*state.logger, e)),
    }
}

pub async fn create_post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post: Post = parse_json_body(&body)?;

    match state.post_service.create(post).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e) => Err(ApiError::storage(&*state.logger, e)),
    }
}

pub async fn delete_posts(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    match state.posts.delete_all().await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(ApiError::storage(&*state.logger, e)),
    }
}
