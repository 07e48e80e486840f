//! # Cosmic インフラ層
//!
//! データベースとの接続・永続化を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはリポジトリトレイトとその SQLite 実装を提供する。
//! ストレージの詳細をカプセル化し、ユースケース層をインフラの変更から保護する。
//!
//! ## 責務
//!
//! - **データベース接続**: SQLite への接続プール管理とマイグレーション
//! - **リポジトリ実装**: 科学者・惑星・ミッションの永続化
//! - **テスト用フェイク**: `test-utils` feature でインメモリ実装を公開
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - SQLite 接続プールとマイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと SQLite 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use cosmic_infra::{db, repository::SqliteScientistRepository};
//!
//! async fn setup() -> Result<(), cosmic_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://app.db").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let scientists = SqliteScientistRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
