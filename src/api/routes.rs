use axum::{
    http::StatusCode,
    routing::{get, MethodRouter},
    Router,
};

use crate::api::state::AppState;
use crate::api::{named_tag_list_handlers, post_handlers, version_handlers};

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}

fn named_tag_list_routes() -> MethodRouter<AppState> {
    get(named_tag_list_handlers::get_named_tag_lists)
        .post(named_tag_list_handlers::create_named_tag_list)
        .put(named_tag_list_handlers::replace_named_tag_lists)
        .delete(named_tag_list_handlers::delete_named_tag_lists)
        .fallback(not_found)
}

fn post_routes() -> MethodRouter<AppState> {
    get(post_handlers::get_posts)
        .post(post_handlers::create_post)
        .delete(post_handlers::delete_posts)
        .fallback(not_found)
}

/// Method-sensitive dispatch. Anything unmatched, including a known path
/// with an unsupported method, is a plain-text 404.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/namedTagLists", named_tag_list_routes())
        .route("/posts", post_routes())
        .route(
            "/version",
            get(version_handlers::get_version).fallback(not_found),
        )
        .fallback(not_found)
}
