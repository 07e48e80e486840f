//! # シードツール
//!
//! 開発用の初期データを投入する。
//!
//! HTTP API には惑星の登録経路がないため、`GET /planets` で返すデータはこのツールで作る。
//! 実行のたびに全テーブルを空にしてから投入し直す。
//!
//! ```bash
//! cargo run -p cosmic-api --bin cosmic-seed
//! ```

use anyhow::Context;
use cosmic_api::config::ApiConfig;
use cosmic_domain::{mission::NewMission, planet::NewPlanet, scientist::NewScientist};
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
use cosmic_shared::observability::{TracingConfig, init_tracing};

/// (名前, 地球からの距離, 最寄りの恒星)
const PLANETS: &[(&str, Option<&str>, Option<&str>)] = &[
    ("Proxima Centauri b", Some("4.24 light-years"), Some("Proxima Centauri")),
    ("TRAPPIST-1e", Some("39.5 light-years"), Some("TRAPPIST-1")),
    ("Kepler-442b", Some("1,206 light-years"), Some("Kepler-442")),
    ("Mars", Some("225 million km"), Some("Sun")),
    ("Europa", None, Some("Sun")),
];

/// (名前, 研究分野)
const SCIENTISTS: &[(&str, &str)] = &[
    ("Carl Sagan", "Astronomy"),
    ("Katherine Johnson", "Orbital Mechanics"),
    ("Vera Rubin", "Astrophysics"),
    ("Carolyn Porco", "Planetary Science"),
];

/// (ミッション名, SCIENTISTS の添字, PLANETS の添字)
const MISSIONS: &[(&str, usize, usize)] = &[
    ("Pale Blue Dot Survey", 0, 3),
    ("Habitable Zone Sweep", 0, 1),
    ("Trajectory Calibration", 1, 3),
    ("Dark Matter Census", 2, 2),
    ("Ice Shell Flyby", 3, 4),
    ("Red Dwarf Watch", 3, 0),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _tracing_guard = init_tracing(TracingConfig::from_env("cosmic-seed"));

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;
    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;

    db::clear_all(&pool)
        .await
        .context("既存データの削除に失敗しました")?;
    tracing::info!("既存データを削除しました");

    let planet_repository = SqlitePlanetRepository::new(pool.clone());
    let mut planets = Vec::with_capacity(PLANETS.len());
    for &(name, distance, star) in PLANETS {
        let new_planet = NewPlanet::new(
            Some(name.to_string()),
            distance.map(str::to_string),
            star.map(str::to_string),
        )?;
        planets.push(planet_repository.insert(&new_planet).await?);
    }

    let scientist_repository = SqliteScientistRepository::new(pool.clone());
    let mut scientists = Vec::with_capacity(SCIENTISTS.len());
    for &(name, field_of_study) in SCIENTISTS {
        let new_scientist =
            NewScientist::new(Some(name.to_string()), Some(field_of_study.to_string()))?;
        scientists.push(scientist_repository.insert(&new_scientist).await?);
    }

    let mission_repository = SqliteMissionRepository::new(pool);
    for &(name, scientist_index, planet_index) in MISSIONS {
        let new_mission = NewMission::new(
            Some(name.to_string()),
            Some(scientists[scientist_index].id().as_i64()),
            Some(planets[planet_index].id().as_i64()),
        )?;
        mission_repository.insert(&new_mission).await?;
    }

    tracing::info!(
        planets = planets.len(),
        scientists = scientists.len(),
        missions = MISSIONS.len(),
        "シードデータを投入しました"
    );
    Ok(())
}
