//! PlanetRepository 統合テスト
//!
//! マイグレーション適用済みのインメモリ SQLite を使用する。

mod common;

use common::{insert_planet, setup_pool};
use cosmic_domain::planet::{NewPlanet, PlanetId};
use cosmic_infra::repository::{PlanetRepository, SqlitePlanetRepository};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_任意フィールドがnullのまま保存できる() {
    let pool = setup_pool().await;
    let sut = SqlitePlanetRepository::new(pool);
    let new_planet = NewPlanet::new(Some("Kepler-22b".to_string()), None, None).unwrap();

    let planet = sut.insert(&new_planet).await.unwrap();

    let found = sut.find_by_id(planet.id()).await.unwrap().unwrap();
    assert!(found.distance_from_earth().is_none());
    assert!(found.nearest_star().is_none());
}

#[tokio::test]
async fn test_同じ名前の惑星は制約違反になる() {
    let pool = setup_pool().await;
    insert_planet(&pool, "Proxima b").await;
    let sut = SqlitePlanetRepository::new(pool);
    let duplicate = NewPlanet::new(Some("Proxima b".to_string()), None, None).unwrap();

    let result = sut.insert(&duplicate).await;

    assert!(result.unwrap_err().is_constraint_violation());
}

#[tokio::test]
async fn test_find_allはid順に返す() {
    let pool = setup_pool().await;
    let first = insert_planet(&pool, "Proxima b").await;
    let second = insert_planet(&pool, "Kepler-22b").await;
    let sut = SqlitePlanetRepository::new(pool);

    let planets = sut.find_all().await.unwrap();

    assert_eq!(planets, vec![first, second]);
}

#[tokio::test]
async fn test_find_by_idsは存在するidだけを返す() {
    let pool = setup_pool().await;
    let first = insert_planet(&pool, "Proxima b").await;
    insert_planet(&pool, "Kepler-22b").await;
    let third = insert_planet(&pool, "TRAPPIST-1e").await;
    let sut = SqlitePlanetRepository::new(pool);

    let planets = sut
        .find_by_ids(&[third.id(), PlanetId::from_i64(999), first.id()])
        .await
        .unwrap();

    assert_eq!(planets, vec![first, third]);
}

#[tokio::test]
async fn test_find_by_idsに空のスライスを渡すと空を返す() {
    let pool = setup_pool().await;
    let sut = SqlitePlanetRepository::new(pool);

    let planets = sut.find_by_ids(&[]).await.unwrap();

    assert!(planets.is_empty());
}
