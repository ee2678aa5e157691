//! HTTP endpoint handlers.

use std::{path::Path, sync::Arc};

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::ui::state::AppState;

const LOGIN_PAGE: &str = "login.html";
const ROOM_PAGE: &str = "room.html";

/// Query parameters of the room page
#[derive(Debug, Deserialize)]
pub struct RoomPageQuery {
    /// room id
    pub r: Option<String>,
    /// display name
    pub n: Option<String>,
}

impl RoomPageQuery {
    fn is_complete(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.r) && present(&self.n)
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `GET /login`
pub async fn login_page(State(state): State<Arc<AppState>>) -> Response {
    serve_page(&state.static_dir, LOGIN_PAGE).await
}

/// `GET /?r=<room>&n=<name>`; redirects to `/login` when either is missing
pub async fn room_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomPageQuery>,
) -> Response {
    if !query.is_complete() {
        return Redirect::to("/login").into_response();
    }
    serve_page(&state.static_dir, ROOM_PAGE).await
}

async fn serve_page(static_dir: &Path, page: &str) -> Response {
    let path = static_dir.join(page);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read page {}: {}", path.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_query_requires_both_params() {
        // テスト項目: r と n の両方が空でないときだけルームページを表示する
        // given (前提条件):
        let cases = [
            (Some("R1"), Some("Dana"), true),
            (Some("R1"), None, false),
            (None, Some("Dana"), false),
            (Some(""), Some("Dana"), false),
            (None, None, false),
        ];

        for (r, n, expected) in cases {
            // when (操作):
            let query = RoomPageQuery {
                r: r.map(str::to_string),
                n: n.map(str::to_string),
            };

            // then (期待する結果):
            assert_eq!(query.is_complete(), expected, "r={:?}, n={:?}", r, n);
        }
    }
}
