//! # Cosmic ドメイン層
//!
//! 科学者・惑星・ミッションのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: DB が採番する整数 ID を持つオブジェクト（Scientist, Planet, Mission）
//! - **値オブジェクト**: 生成時に検証される Newtype（名前、研究分野など）
//! - **事前検証**: 永続化の前に全フィールドを検証し、違反をまとめて返す
//! - **ドメインエラー**: 検証失敗と未検出を区別するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメインエラーと検証違反の定義
//! - [`value_objects`] - 検証付き文字列型
//! - [`scientist`] - 科学者エンティティと更新リクエスト
//! - [`planet`] - 惑星エンティティ
//! - [`mission`] - ミッションエンティティ
//!
//! ## 使用例
//!
//! ```rust
//! use cosmic_domain::{DomainError, scientist::NewScientist};
//!
//! let new_scientist = NewScientist::new(
//!     Some("Ada Lovelace".to_string()),
//!     Some("Computing".to_string()),
//! )
//! .unwrap();
//! assert_eq!(new_scientist.name().as_str(), "Ada Lovelace");
//!
//! // 必須フィールドの欠落は検証エラー
//! let result = NewScientist::new(None, Some("Computing".to_string()));
//! assert!(matches!(result, Err(DomainError::Validation(_))));
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod mission;
pub mod planet;
pub mod scientist;
pub mod value_objects;

pub use error::{DomainError, ValidationErrors, Violation};
