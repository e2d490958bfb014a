use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::api::error::{
    parse_json_body, ApiError, BUCKET_OR_ID_REQUIRED, BUCKET_REQUIRED, SINGLE_BUCKET_REQUIRED,
};
use crate::api::query::QueryParams;
use crate::api::state::AppState;
use crate::model::NamedTagList;

/// `GET /namedTagLists?bucket=..` lists every record in the given buckets.
pub async fn get_named_tag_lists(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<Json<Vec<NamedTagList>>, ApiError> {
    let buckets = params.values("bucket");
    if buckets.is_empty() {
        return Err(ApiError::BadRequest(BUCKET_REQUIRED));
    }

    match state.named_tag_lists.find_all(&buckets).await {
        Ok(named_tag_lists) => Ok(Json(named_tag_lists)),
        Err(e) => Err(ApiError::storage(&*state.logger, e)),
    }
}

/// `POST /namedTagLists?bucket=..` creates a record in exactly one bucket.
pub async fn create_named_tag_list(
    State(state): State<AppState>,
    params: QueryParams,
    body: Bytes,
) -> Result<(StatusCode, Json<NamedTagList>), ApiError> {
    let bucket = match params.values("bucket").as_slice() {
        [] => return Err(ApiError::BadRequest(BUCKET_REQUIRED)),
        [bucket] => bucket.clone(),
        _ => return Err(ApiError::BadRequest(SINGLE_BUCKET_REQUIRED)),
    };
    let named_tag_list: NamedTagList = parse_json_body(&body)?;

    match state
        .named_tag_list_service
        .create(&bucket, named_tag_list)
        .await
    {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e) => Err(ApiError::storage(&*state.logger, e)),
    }
}

/// `PUT /namedTagLists?id=..` replaces name and tags of the listed ids.
pub async fn replace_named_tag_lists(
    State(state): State<AppState>,
    params: QueryParams,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let ids = params.values("id");
    let replacement: NamedTagList = parse_json_body(&body)?;

    match state
        .named_tag_lists
        .replace_by_ids(&ids, &replacement)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(ApiError::storage(&*state.logger, e)),
    }
}

/// `DELETE /namedTagLists?id=..` or `DELETE /namedTagLists?bucket=..`.
/// Ids take precedence when both are supplied.
pub async fn delete_named_tag_lists(
    State(state): State<AppState>,
    params: QueryParams,
) -> Result<StatusCode, ApiError> {
    let ids = params.values("id");
    let result = if !ids.is_empty() {
        state.named_tag_lists.delete_by_ids(&ids).await
    } else {
        let buckets = params.values("bucket");
        if buckets.is_empty() {
            return Err(ApiError::BadRequest(BUCKET_OR_ID_REQUIRED));
        }
        state.named_tag_lists.delete_all(&buckets).await
    };

    match result {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(ApiError::storage(&*state.logger, e)),
    }
}
