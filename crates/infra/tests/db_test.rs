//! db モジュール統合テスト
//!
//! シード投入前のクリア処理を確認する。

mod common;

use common::{count_rows, insert_mission, insert_planet, insert_scientist, setup_pool};
use cosmic_infra::db;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_clear_allで全テーブルが空になり採番がリセットされる() {
    let pool = setup_pool().await;
    let scientist = insert_scientist(&pool, "Ada Lovelace", "Computing").await;
    let planet = insert_planet(&pool, "Proxima b").await;
    insert_mission(&pool, "Analytical", &scientist, &planet).await;

    db::clear_all(&pool).await.unwrap();

    assert_eq!(count_rows(&pool, "missions").await, 0);
    assert_eq!(count_rows(&pool, "scientists").await, 0);
    assert_eq!(count_rows(&pool, "planets").await, 0);

    let again = insert_scientist(&pool, "Ada Lovelace", "Computing").await;
    assert_eq!(again.id().as_i64(), 1);
}
