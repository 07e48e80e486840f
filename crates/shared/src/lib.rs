//! # Cosmic 共有ユーティリティ
//!
//! API サーバーとシードツールで共通利用するユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` への変換は API 側の責務）

pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, ValidationErrorResponse};
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
