//! # リポジトリ実装
//!
//! 科学者・惑星・ミッションの永続化を担当するリポジトリトレイトと、
//! その SQLite 実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト境界**: ユースケース層は `Arc<dyn XxxRepository>` 経由で利用する
//! - **実行時クエリ**: `sqlx::query_as` と `bind` で組み立て、行型から
//!   ドメインエンティティへ変換する
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod mission_repository;
pub mod planet_repository;
pub mod scientist_repository;

pub use mission_repository::{MissionRepository, SqliteMissionRepository};
pub use planet_repository::{PlanetRepository, SqlitePlanetRepository};
pub use scientist_repository::{ScientistRepository, SqliteScientistRepository};

use cosmic_domain::Violation;

use crate::error::InfraError;

/// DB に保存済みの値が値オブジェクトの検証を通らなかった場合のエラー
///
/// 書き込みは常に検証済みの値で行うため、通常は発生しない。
fn corrupted_row(table: &str, id: i64, violation: Violation) -> InfraError {
    InfraError::unexpected(format!("{table}(id={id}) の値が不正です: {violation}"))
}
