//! # ScientistRepository
//!
//! 科学者の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **一意性**: `name` の一意性は UNIQUE 制約で保証し、違反は
//!   [`InfraErrorKind::ConstraintViolation`](crate::InfraErrorKind::ConstraintViolation) になる
//! - **カスケード削除**: 削除はトランザクション内でミッション → 科学者の順に行う。
//!   外部キーの `ON DELETE CASCADE` と同じ結果を、接続設定に依存せず保証する

use async_trait::async_trait;
use cosmic_domain::{
    scientist::{NewScientist, Scientist, ScientistId},
    value_objects::{FieldOfStudy, ScientistName},
};
use sqlx::SqlitePool;

use super::corrupted_row;
use crate::error::InfraError;

/// 科学者リポジトリトレイト
#[async_trait]
pub trait ScientistRepository: Send + Sync {
    /// 全科学者を ID 順に取得する
    async fn find_all(&self) -> Result<Vec<Scientist>, InfraError>;

    /// ID で科学者を検索する
    async fn find_by_id(&self, id: ScientistId) -> Result<Option<Scientist>, InfraError>;

    /// 名前で科学者を検索する（一意性チェック用）
    async fn find_by_name(&self, name: &ScientistName) -> Result<Option<Scientist>, InfraError>;

    /// 科学者を挿入し、採番された ID 付きで返す
    async fn insert(&self, scientist: &NewScientist) -> Result<Scientist, InfraError>;

    /// 科学者の名前と研究分野を更新する
    async fn update(&self, scientist: &Scientist) -> Result<(), InfraError>;

    /// 科学者と所有するミッションを削除する
    ///
    /// 削除したミッションの件数を返す。
    async fn delete(&self, id: ScientistId) -> Result<u64, InfraError>;
}

/// SQLite 実装の ScientistRepository
#[derive(Debug, Clone)]
pub struct SqliteScientistRepository {
    pool: SqlitePool,
}

impl SqliteScientistRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// scientists テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct ScientistRow {
    id:             i64,
    name:           String,
    field_of_study: String,
}

impl TryFrom<ScientistRow> for Scientist {
    type Error = InfraError;

    fn try_from(row: ScientistRow) -> Result<Self, Self::Error> {
        let name =
            ScientistName::new(row.name).map_err(|v| corrupted_row("scientists", row.id, v))?;
        let field_of_study = FieldOfStudy::new(row.field_of_study)
            .map_err(|v| corrupted_row("scientists", row.id, v))?;
        Ok(Scientist::from_db(
            ScientistId::from_i64(row.id),
            name,
            field_of_study,
        ))
    }
}

#[async_trait]
impl ScientistRepository for SqliteScientistRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Scientist>, InfraError> {
        let rows: Vec<ScientistRow> = sqlx::query_as(
            r#"
            SELECT id, name, field_of_study
            FROM scientists
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Scientist::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn find_by_id(&self, id: ScientistId) -> Result<Option<Scientist>, InfraError> {
        let row: Option<ScientistRow> = sqlx::query_as(
            r#"
            SELECT id, name, field_of_study
            FROM scientists
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Scientist::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(name = %name))]
    async fn find_by_name(&self, name: &ScientistName) -> Result<Option<Scientist>, InfraError> {
        let row: Option<ScientistRow> = sqlx::query_as(
            r#"
            SELECT id, name, field_of_study
            FROM scientists
            WHERE name = ?
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Scientist::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(name = %scientist.name()))]
    async fn insert(&self, scientist: &NewScientist) -> Result<Scientist, InfraError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO scientists (name, field_of_study)
            VALUES (?, ?)
            RETURNING id
            "#,
        )
        .bind(scientist.name().as_str())
        .bind(scientist.field_of_study().as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(scientist.clone().into_scientist(ScientistId::from_i64(id)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %scientist.id()))]
    async fn update(&self, scientist: &Scientist) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE scientists
            SET name = ?, field_of_study = ?
            WHERE id = ?
            "#,
        )
        .bind(scientist.name().as_str())
        .bind(scientist.field_of_study().as_str())
        .bind(scientist.id().as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn delete(&self, id: ScientistId) -> Result<u64, InfraError> {
        let mut tx = self.pool.begin().await?;

        let missions = sqlx::query("DELETE FROM missions WHERE scientist_id = ?")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM scientists WHERE id = ?")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(missions, "科学者を削除しました");
        Ok(missions)
    }
}
