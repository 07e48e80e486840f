//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するプール生成・エンティティ投入ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use cosmic_domain::{
    mission::{Mission, NewMission},
    planet::{NewPlanet, Planet},
    scientist::{NewScientist, Scientist},
};
use cosmic_infra::{
    db,
    repository::{
        MissionRepository,
        PlanetRepository,
        ScientistRepository,
        SqliteMissionRepository,
        SqlitePlanetRepository,
        SqliteScientistRepository,
    },
};
use sqlx::SqlitePool;

/// マイグレーション適用済みのインメモリ DB を作成する
pub async fn setup_pool() -> SqlitePool {
    db::create_memory_pool()
        .await
        .expect("インメモリ DB の作成に失敗")
}

/// 科学者を DB に作成するヘルパー
pub async fn insert_scientist(pool: &SqlitePool, name: &str, field_of_study: &str) -> Scientist {
    let new_scientist =
        NewScientist::new(Some(name.to_string()), Some(field_of_study.to_string())).unwrap();
    SqliteScientistRepository::new(pool.clone())
        .insert(&new_scientist)
        .await
        .expect("科学者の作成に失敗")
}

/// 惑星を DB に作成するヘルパー
pub async fn insert_planet(pool: &SqlitePool, name: &str) -> Planet {
    let new_planet = NewPlanet::new(
        Some(name.to_string()),
        Some("4.24 light-years".to_string()),
        Some("Proxima Centauri".to_string()),
    )
    .unwrap();
    SqlitePlanetRepository::new(pool.clone())
        .insert(&new_planet)
        .await
        .expect("惑星の作成に失敗")
}

/// ミッションを DB に作成するヘルパー
pub async fn insert_mission(
    pool: &SqlitePool,
    name: &str,
    scientist: &Scientist,
    planet: &Planet,
) -> Mission {
    let new_mission = NewMission::new(
        Some(name.to_string()),
        Some(scientist.id().as_i64()),
        Some(planet.id().as_i64()),
    )
    .unwrap();
    SqliteMissionRepository::new(pool.clone())
        .insert(&new_mission)
        .await
        .expect("ミッションの作成に失敗")
}

/// テーブルの行数を数える
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("行数の取得に失敗");
    count
}
