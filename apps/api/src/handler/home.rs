//! ルートハンドラ

use axum::http::StatusCode;

/// `GET /` - 空のボディで 200 を返す
pub async fn home() -> StatusCode {
    StatusCode::OK
}
