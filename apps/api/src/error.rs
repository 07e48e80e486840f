//! # API エラー定義
//!
//! API 層のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError / InfraError / JsonRejection
//!        ↓ From
//! ApiError
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + JSON)
//! ```
//!
//! ## レスポンスの対応
//!
//! | バリアント | ステータス | ボディ |
//! |-----------|-----------|--------|
//! | `NotFound` | 404 | `{"error": "<Entity> not found"}` |
//! | `Validation` | 400 | `{"errors": ["validation errors"]}` |
//! | `PayloadTooLarge` | 413 | `{"error": "Payload Too Large"}` |
//! | `Database` / `Internal` | 500 | `{"error": "Internal Server Error"}` |
//!
//! 違反の詳細や内部エラーの原因はクライアントに返さず、ログにのみ出力する。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cosmic_domain::{DomainError, ValidationErrors, Violation};
use cosmic_infra::{InfraError, InfraErrorKind};
use cosmic_shared::{ErrorResponse, ValidationErrorResponse};
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// エンティティが見つからない（"Scientist" など）
    #[error("{0} が見つかりません")]
    NotFound(&'static str),

    /// 検証エラー
    #[error("バリデーションエラー: {0}")]
    Validation(ValidationErrors),

    /// ボディがサイズ上限を超えている
    #[error("リクエストボディが大きすぎます")]
    PayloadTooLarge,

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(errors) => Self::Validation(errors),
            DomainError::NotFound { entity_type, .. } => Self::NotFound(entity_type),
        }
    }
}

/// 制約違反は事前検証をすり抜けた検証エラーとして扱う
impl From<InfraError> for ApiError {
    fn from(error: InfraError) -> Self {
        match error.kind() {
            InfraErrorKind::ConstraintViolation(message) => {
                Self::Validation(Violation::new("constraint", message.as_str()).into())
            }
            _ => Self::Database(error),
        }
    }
}

/// 不正な JSON・Content-Type 不一致・型不一致はすべて検証エラー
///
/// サイズ上限の超過だけは 413 のまま返す。
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }
        Self::Validation(Violation::new("body", rejection.body_text()).into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(entity) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found(entity))).into_response()
            }
            ApiError::Validation(errors) => {
                tracing::info!(violations = %errors, "リクエストを検証エラーで拒否しました");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse::generic()),
                )
                    .into_response()
            }
            ApiError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse::payload_too_large()),
            )
                .into_response(),
            ApiError::Database(error) => {
                tracing::error!(
                    error = %error,
                    span_trace = %error.span_trace(),
                    "データベースエラー"
                );
                internal_error_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "内部エラー");
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error()),
    )
        .into_response()
}
