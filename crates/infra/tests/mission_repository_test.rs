//! MissionRepository 統合テスト
//!
//! マイグレーション適用済みのインメモリ SQLite を使用する。
//! 外部キー制約が有効であることもここで確認する。

mod common;

use common::{count_rows, insert_mission, insert_planet, insert_scientist, setup_pool};
use cosmic_domain::mission::NewMission;
use cosmic_infra::repository::{MissionRepository, SqliteMissionRepository};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[tokio::test]
async fn test_insertしたミッションは採番されたid付きで返る() {
    let pool = setup_pool().await;
    let scientist = insert_scientist(&pool, "Ada Lovelace", "Computing").await;
    let planet = insert_planet(&pool, "Proxima b").await;
    let sut = SqliteMissionRepository::new(pool);
    let new_mission = NewMission::new(
        Some("Voyager".to_string()),
        Some(scientist.id().as_i64()),
        Some(planet.id().as_i64()),
    )
    .unwrap();

    let mission = sut.insert(&new_mission).await.unwrap();

    assert_eq!(mission.scientist_id(), scientist.id());
    assert_eq!(mission.planet_id(), planet.id());
    assert_eq!(mission.name().as_str(), "Voyager");
    let found = sut.find_by_scientist(scientist.id()).await.unwrap();
    assert_eq!(found, vec![mission]);
}

#[tokio::test]
async fn test_find_by_scientistは所有するミッションだけをid順に返す() {
    let pool = setup_pool().await;
    let owner = insert_scientist(&pool, "Ada Lovelace", "Computing").await;
    let other = insert_scientist(&pool, "Carl Sagan", "Astronomy").await;
    let planet = insert_planet(&pool, "Proxima b").await;
    let first = insert_mission(&pool, "Analytical", &owner, &planet).await;
    insert_mission(&pool, "Cosmos", &other, &planet).await;
    let second = insert_mission(&pool, "Engine", &owner, &planet).await;
    let sut = SqliteMissionRepository::new(pool);

    let missions = sut.find_by_scientist(owner.id()).await.unwrap();

    assert_eq!(missions, vec![first, second]);
}

#[tokio::test]
async fn test_ミッションがない科学者は空を返す() {
    let pool = setup_pool().await;
    let scientist = insert_scientist(&pool, "Ada Lovelace", "Computing").await;
    let sut = SqliteMissionRepository::new(pool);

    let missions = sut.find_by_scientist(scientist.id()).await.unwrap();

    assert!(missions.is_empty());
}

#[rstest]
#[case::科学者が存在しない(true, false)]
#[case::惑星が存在しない(false, true)]
#[tokio::test]
async fn test_存在しない参照は外部キー制約違反になり行が増えない(
    #[case] missing_scientist: bool,
    #[case] missing_planet: bool,
) {
    let pool = setup_pool().await;
    let scientist = insert_scientist(&pool, "Ada Lovelace", "Computing").await;
    let planet = insert_planet(&pool, "Proxima b").await;
    let scientist_id = if missing_scientist {
        999
    } else {
        scientist.id().as_i64()
    };
    let planet_id = if missing_planet {
        999
    } else {
        planet.id().as_i64()
    };
    let sut = SqliteMissionRepository::new(pool.clone());
    let new_mission =
        NewMission::new(Some("Voyager".to_string()), Some(scientist_id), Some(planet_id)).unwrap();

    let result = sut.insert(&new_mission).await;

    assert!(result.unwrap_err().is_constraint_violation());
    assert_eq!(count_rows(&pool, "missions").await, 0);
}

#[tokio::test]
async fn test_科学者の行を直接削除してもミッションはカスケード削除される() {
    let pool = setup_pool().await;
    let scientist = insert_scientist(&pool, "Ada Lovelace", "Computing").await;
    let planet = insert_planet(&pool, "Proxima b").await;
    insert_mission(&pool, "Analytical", &scientist, &planet).await;

    sqlx::query("DELETE FROM scientists WHERE id = ?")
        .bind(scientist.id().as_i64())
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(count_rows(&pool, "missions").await, 0);
}
