//! # MissionRepository
//!
//! ミッションの永続化を担当するリポジトリ。
//!
//! 参照先（科学者・惑星）の存在確認はユースケース層が行う。
//! 確認をすり抜けた場合は外部キー制約違反として
//! [`InfraErrorKind::ConstraintViolation`](crate::InfraErrorKind::ConstraintViolation) になる。

use async_trait::async_trait;
use cosmic_domain::{
    mission::{Mission, MissionId, NewMission},
    planet::PlanetId,
    scientist::ScientistId,
    value_objects::MissionName,
};
use sqlx::SqlitePool;

use super::corrupted_row;
use crate::error::InfraError;

/// ミッションリポジトリトレイト
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// 科学者が所有するミッションを ID 順に取得する
    async fn find_by_scientist(
        &self,
        scientist_id: ScientistId,
    ) -> Result<Vec<Mission>, InfraError>;

    /// ミッションを挿入し、採番された ID 付きで返す
    async fn insert(&self, mission: &NewMission) -> Result<Mission, InfraError>;
}

/// SQLite 実装の MissionRepository
#[derive(Debug, Clone)]
pub struct SqliteMissionRepository {
    pool: SqlitePool,
}

impl SqliteMissionRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// missions テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct MissionRow {
    id:           i64,
    name:         String,
    scientist_id: i64,
    planet_id:    i64,
}

impl TryFrom<MissionRow> for Mission {
    type Error = InfraError;

    fn try_from(row: MissionRow) -> Result<Self, Self::Error> {
        let name = MissionName::new(row.name).map_err(|v| corrupted_row("missions", row.id, v))?;
        Ok(Mission::from_db(
            MissionId::from_i64(row.id),
            name,
            ScientistId::from_i64(row.scientist_id),
            PlanetId::from_i64(row.planet_id),
        ))
    }
}

#[async_trait]
impl MissionRepository for SqliteMissionRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(scientist_id = %scientist_id))]
    async fn find_by_scientist(
        &self,
        scientist_id: ScientistId,
    ) -> Result<Vec<Mission>, InfraError> {
        let rows: Vec<MissionRow> = sqlx::query_as(
            r#"
            SELECT id, name, scientist_id, planet_id
            FROM missions
            WHERE scientist_id = ?
            ORDER BY id
            "#,
        )
        .bind(scientist_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Mission::try_from).collect()
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(scientist_id = %mission.scientist_id(), planet_id = %mission.planet_id())
    )]
    async fn insert(&self, mission: &NewMission) -> Result<Mission, InfraError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO missions (name, scientist_id, planet_id)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(mission.name().as_str())
        .bind(mission.scientist_id().as_i64())
        .bind(mission.planet_id().as_i64())
        .fetch_one(&self.pool)
        .await?;

        Ok(mission.clone().into_mission(MissionId::from_i64(id)))
    }
}
