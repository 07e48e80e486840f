//! # エラーレスポンス
//!
//! API が返すエラーボディの構造体を提供する。
//!
//! ## 設計
//!
//! - 純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API 側の責務
//! - ボディの形は 2 種類に固定する
//!
//! | 構造体 | JSON | 用途 |
//! |--------|------|------|
//! | [`ErrorResponse`] | `{"error": "..."}` | 404 / 413 / 500 |
//! | [`ValidationErrorResponse`] | `{"errors": ["..."]}` | 400 |

use serde::{Deserialize, Serialize};

/// バリデーションエラー時にクライアントへ返す固定メッセージ
///
/// 違反の詳細はログに出力し、レスポンスには含めない。
pub const VALIDATION_ERRORS_MESSAGE: &str = "validation errors";

/// 単一メッセージのエラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 404 Not Found
    ///
    /// メッセージは `"<Entity> not found"` の形式。
    pub fn not_found(entity: &str) -> Self {
        Self::new(format!("{entity} not found"))
    }

    /// 413 Payload Too Large
    pub fn payload_too_large() -> Self {
        Self::new("Payload Too Large")
    }

    /// 500 Internal Server Error
    ///
    /// メッセージは固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}

/// バリデーションエラーのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

impl ValidationErrorResponse {
    /// 固定メッセージ 1 件のレスポンスを作成する
    pub fn generic() -> Self {
        Self {
            errors: vec![VALIDATION_ERRORS_MESSAGE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_not_foundはエンティティ名を含むメッセージになる() {
        let json = serde_json::to_value(ErrorResponse::not_found("Scientist")).unwrap();

        assert_eq!(json, json!({ "error": "Scientist not found" }));
    }

    #[test]
    fn test_payload_too_largeは固定メッセージになる() {
        let json = serde_json::to_value(ErrorResponse::payload_too_large()).unwrap();

        assert_eq!(json, json!({ "error": "Payload Too Large" }));
    }

    #[test]
    fn test_internal_errorは固定メッセージになる() {
        let json = serde_json::to_value(ErrorResponse::internal_error()).unwrap();

        assert_eq!(json, json!({ "error": "Internal Server Error" }));
    }

    #[test]
    fn test_genericはerrors配列に固定メッセージを1件持つ() {
        let json = serde_json::to_value(ValidationErrorResponse::generic()).unwrap();

        assert_eq!(json, json!({ "errors": ["validation errors"] }));
    }

    #[test]
    fn test_jsonデシリアライズが正しく動作する() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{ "error": "Scientist not found" }"#).unwrap();

        assert_eq!(error, ErrorResponse::not_found("Scientist"));
    }
}
