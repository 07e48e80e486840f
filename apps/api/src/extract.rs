//! # リクエスト抽出
//!
//! axum 標準の抽出器をラップし、拒否時のレスポンスを [`ApiError`] に揃える。
//!
//! - [`JsonBody`]: ボディの JSON。不正な JSON や Content-Type 不一致は 400、サイズ超過は 413
//! - [`parse_id`]: パスの ID。10 進数字でなければ該当レコードは存在しないため 404

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON ボディ抽出器
///
/// `axum::Json` の拒否（構文エラー、型不一致、Content-Type 欠落）を
/// [`ApiError::Validation`] に変換する。
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// パスセグメントを整数 ID として解釈する
///
/// 受け付けるのは 10 進数字のみ（符号なし）。
/// 解釈できない場合は `entity` の [`ApiError::NotFound`] を返す。
pub fn parse_id(raw: &str, entity: &'static str) -> Result<i64, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound(entity));
    }
    raw.parse().map_err(|_| ApiError::NotFound(entity))
}
