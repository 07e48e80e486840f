//! # PlanetRepository
//!
//! 惑星の永続化を担当するリポジトリ。
//!
//! HTTP API に惑星の書き込み経路はなく、`insert` はシードツールから使う。

use async_trait::async_trait;
use cosmic_domain::{
    Violation,
    planet::{NewPlanet, Planet, PlanetId},
    value_objects::{DistanceFromEarth, PlanetName, StarName},
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::corrupted_row;
use crate::error::InfraError;

/// 惑星リポジトリトレイト
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// 全惑星を ID 順に取得する
    async fn find_all(&self) -> Result<Vec<Planet>, InfraError>;

    /// ID で惑星を検索する
    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, InfraError>;

    /// 複数の ID で惑星をまとめて取得する
    ///
    /// 存在しない ID は無視する。順序は ID 順。
    async fn find_by_ids(&self, ids: &[PlanetId]) -> Result<Vec<Planet>, InfraError>;

    /// 惑星を挿入し、採番された ID 付きで返す
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, InfraError>;
}

/// SQLite 実装の PlanetRepository
#[derive(Debug, Clone)]
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// planets テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct PlanetRow {
    id:                  i64,
    name:                String,
    distance_from_earth: Option<String>,
    nearest_star:        Option<String>,
}

impl TryFrom<PlanetRow> for Planet {
    type Error = InfraError;

    fn try_from(row: PlanetRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupted = |v: Violation| corrupted_row("planets", id, v);
        let name = PlanetName::new(row.name).map_err(corrupted)?;
        let distance_from_earth = row
            .distance_from_earth
            .map(DistanceFromEarth::new)
            .transpose()
            .map_err(corrupted)?;
        let nearest_star = row
            .nearest_star
            .map(StarName::new)
            .transpose()
            .map_err(corrupted)?;
        Ok(Planet::from_db(
            PlanetId::from_i64(row.id),
            name,
            distance_from_earth,
            nearest_star,
        ))
    }
}

#[async_trait]
impl PlanetRepository for SqlitePlanetRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Planet>, InfraError> {
        let rows: Vec<PlanetRow> = sqlx::query_as(
            r#"
            SELECT id, name, distance_from_earth, nearest_star
            FROM planets
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Planet::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, InfraError> {
        let row: Option<PlanetRow> = sqlx::query_as(
            r#"
            SELECT id, name, distance_from_earth, nearest_star
            FROM planets
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Planet::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[PlanetId]) -> Result<Vec<Planet>, InfraError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, name, distance_from_earth, nearest_star FROM planets WHERE id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id.as_i64());
        }
        separated.push_unseparated(") ORDER BY id");

        let rows: Vec<PlanetRow> = builder.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter().map(Planet::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(name = %planet.name()))]
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, InfraError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO planets (name, distance_from_earth, nearest_star)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(planet.name().as_str())
        .bind(planet.distance_from_earth().map(|d| d.as_str()))
        .bind(planet.nearest_star().map(|s| s.as_str()))
        .fetch_one(&self.pool)
        .await?;

        Ok(planet.clone().into_planet(PlanetId::from_i64(id)))
    }
}
