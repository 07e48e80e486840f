//! # SQLite データベース接続管理
//!
//! データベース接続プールの作成とマイグレーションを行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 接続を再利用し、リクエストごとの接続確立を避ける
//! - **外部キーの有効化**: SQLite は接続ごとに外部キー検査が無効なため、
//!   接続オプションで常に `foreign_keys = ON` にする
//! - **インメモリ DB**: `sqlite::memory:` は接続ごとに別の DB になるため、
//!   接続数を 1 に固定し、アイドル切断もしない
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use cosmic_infra::db;
//!
//! async fn example() -> Result<(), cosmic_infra::InfraError> {
//!     let pool = db::create_pool("sqlite://app.db").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scientists")
//!         .fetch_one(&pool)
//!         .await?;
//!     Ok(())
//! }
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// ファイル DB の最大接続数
const MAX_CONNECTIONS: u32 = 5;

/// 接続取得のタイムアウト
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// 接続 URL から SQLite の接続オプションを作成する
///
/// ファイルが存在しなければ作成し、外部キー検査を有効にする。
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, InfraError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    Ok(options)
}

/// URL がインメモリ DB を指しているか
fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// SQLite 接続プールを作成する
///
/// アプリケーション起動時に一度だけ呼び出し、作成したプールを
/// アプリケーション全体で共有する。
///
/// # 引数
///
/// * `database_url` - SQLite 接続 URL
///   - ファイル: `sqlite://app.db`
///   - インメモリ: `sqlite::memory:`
///
/// # 設定値
///
/// - ファイル DB: `max_connections(5)`
/// - インメモリ DB: `max_connections(1)`、アイドル切断・寿命なし
/// - `acquire_timeout(5秒)`
#[tracing::instrument(skip_all, level = "debug")]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, InfraError> {
    let options = connect_options(database_url)?;

    let pool_options = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    let pool = pool_options
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    tracing::debug!(memory = is_memory_url(database_url), "接続プールを作成しました");
    Ok(pool)
}

/// マイグレーション適用済みのインメモリ DB を作成する
///
/// テストやデモ用途で使う。
pub async fn create_memory_pool() -> Result<SqlitePool, InfraError> {
    let pool = create_pool("sqlite::memory:").await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// データベースマイグレーションを実行する
///
/// `sqlx::migrate!()` マクロで埋め込まれたマイグレーションファイルを
/// 順番に適用する。適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// 全テーブルのデータを削除する
///
/// シードツールが投入前に呼び出す。外部キーの参照順（ミッション → 科学者・惑星）で
/// 削除し、AUTOINCREMENT の採番もリセットする。
pub async fn clear_all(pool: &SqlitePool) -> Result<(), InfraError> {
    let mut tx = pool.begin().await?;
    for statement in [
        "DELETE FROM missions",
        "DELETE FROM scientists",
        "DELETE FROM planets",
        "DELETE FROM sqlite_sequence",
    ] {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}

/// データベースに到達できるか確認する
///
/// Readiness Check で使用する。
pub async fn ping(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("sqlite::memory:", true)]
    #[case("sqlite://file:cosmic?mode=memory&cache=shared", true)]
    #[case("sqlite://app.db", false)]
    fn test_インメモリurlを判定できる(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_memory_url(url), expected);
    }

    #[tokio::test]
    async fn test_インメモリdbにマイグレーションを適用できる() {
        let pool = create_memory_pool().await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scientists")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert!(ping(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn test_外部キー検査が有効になっている() {
        let pool = create_memory_pool().await.unwrap();

        let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(enabled, 1);
    }
}
