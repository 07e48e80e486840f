//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **事前検証**: 永続化の前にすべての制約を検査し、違反を [`ValidationErrors`]
//!   として一括で返す
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **HTTP ステータスへのマッピング**: API 層でステータスコードに変換する
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須値の欠落、重複、存在しない参照 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use cosmic_domain::{DomainError, ValidationErrors, Violation};
//!
//! let mut errors = ValidationErrors::new();
//! errors.add(Violation::new("name", "名前は必須です"));
//!
//! let result: Result<(), DomainError> = errors.finish();
//! assert!(matches!(result, Err(DomainError::Validation(_))));
//! ```

use std::fmt;

use thiserror::Error;

/// 単一フィールドの制約違反
///
/// `field` にはリクエスト上のキー名（`"name"`, `"scientist_id"` など）を入れる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field:   String,
    message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field:   field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 制約違反の集合
///
/// 検証中に見つかった違反をすべて蓄積する。
/// [`finish`](ValidationErrors::finish) で空なら `Ok`、
/// 違反があれば [`DomainError::Validation`] に変換する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 違反が 1 件だけのエラー集合を作成する
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// 検証結果を取り込む
    ///
    /// 成功時は値を `Some` で返し、失敗時は違反を記録して `None` を返す。
    /// 複数フィールドを検証して違反をまとめて報告するために使う。
    pub fn check<T>(&mut self, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.add(violation);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// 違反がなければ `Ok(())`、あれば [`DomainError::Validation`] を返す
    pub fn finish(self) -> Result<(), DomainError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        Self::single(violation)
    }
}

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須値の欠落、文字数超過、一意制約の重複、存在しない参照など。
    #[error("バリデーションエラー: {0}")]
    Validation(ValidationErrors),

    /// エンティティが見つからない
    ///
    /// # フィールド
    ///
    /// - `entity_type`: エンティティの種類（"Scientist" など）
    /// - `id`: 検索に使用した識別子
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Scientist", "Planet", "Mission"）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}

impl From<Violation> for DomainError {
    fn from(violation: Violation) -> Self {
        Self::Validation(ValidationErrors::single(violation))
    }
}
