//! 科学者管理ユースケース

use std::sync::Arc;

use cosmic_domain::{
    DomainError,
    Violation,
    scientist::{NewScientist, Scientist, ScientistId, ScientistUpdate},
    value_objects::ScientistName,
};
use cosmic_infra::repository::{MissionRepository, PlanetRepository, ScientistRepository};
use serde_json::{Map, Value};

use super::{helpers::attach_relations, mission::MissionWithRelations};
use crate::error::ApiError;

/// 科学者作成の入力
#[derive(Debug, Clone, Default)]
pub struct CreateScientistInput {
    pub name:           Option<String>,
    pub field_of_study: Option<String>,
}

/// 科学者更新の入力
///
/// `fields` は PATCH ボディの JSON オブジェクトそのもの。
#[derive(Debug, Clone)]
pub struct UpdateScientistInput {
    pub scientist_id: ScientistId,
    pub fields:       Map<String, Value>,
}

/// 所有するミッションを伴う科学者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScientistWithMissions {
    pub scientist: Scientist,
    pub missions:  Vec<MissionWithRelations>,
}

/// 科学者管理ユースケース
pub struct ScientistUseCaseImpl {
    scientist_repository: Arc<dyn ScientistRepository>,
    planet_repository:    Arc<dyn PlanetRepository>,
    mission_repository:   Arc<dyn MissionRepository>,
}

impl ScientistUseCaseImpl {
    pub fn new(
        scientist_repository: Arc<dyn ScientistRepository>,
        planet_repository: Arc<dyn PlanetRepository>,
        mission_repository: Arc<dyn MissionRepository>,
    ) -> Self {
        Self {
            scientist_repository,
            planet_repository,
            mission_repository,
        }
    }

    /// 全科学者を ID 順に取得する
    pub async fn list_scientists(&self) -> Result<Vec<Scientist>, ApiError> {
        Ok(self.scientist_repository.find_all().await?)
    }

    /// 科学者を所有ミッション付きで取得する
    pub async fn get_scientist(&self, id: ScientistId) -> Result<ScientistWithMissions, ApiError> {
        let scientist = self.find_scientist(id).await?;
        let missions = self.mission_repository.find_by_scientist(id).await?;
        let missions =
            attach_relations(self.planet_repository.as_ref(), &scientist, missions).await?;

        Ok(ScientistWithMissions {
            scientist,
            missions,
        })
    }

    /// 科学者を作成する
    ///
    /// 1. 必須フィールドを検証
    /// 2. 同名の科学者がいないことを確認
    /// 3. DB に挿入（確認後の競合は UNIQUE 制約違反として検証エラーになる）
    pub async fn create_scientist(
        &self,
        input: CreateScientistInput,
    ) -> Result<Scientist, ApiError> {
        let new_scientist = NewScientist::new(input.name, input.field_of_study)?;

        self.ensure_name_available(new_scientist.name(), None).await?;

        let scientist = self.scientist_repository.insert(&new_scientist).await?;
        tracing::info!(scientist_id = %scientist.id(), "科学者を作成しました");
        Ok(scientist)
    }

    /// 科学者を部分更新する
    ///
    /// 1. 対象の存在を確認
    /// 2. 許可リストでボディのキーを検証
    /// 3. 名前を変更する場合は、自分以外に同名がいないことを確認
    /// 4. 変更があれば DB を更新
    ///
    /// 空のオブジェクトは何も書き込まず、現在の状態を返す。
    pub async fn update_scientist(
        &self,
        input: UpdateScientistInput,
    ) -> Result<Scientist, ApiError> {
        let scientist = self.find_scientist(input.scientist_id).await?;

        let update = ScientistUpdate::from_fields(&input.fields).inspect_err(|e| {
            tracing::info!(
                scientist_id = %input.scientist_id,
                error = %e,
                "更新リクエストを拒否しました"
            );
        })?;
        if update.is_empty() {
            return Ok(scientist);
        }

        if let Some(name) = update.name() {
            self.ensure_name_available(name, Some(scientist.id())).await?;
        }

        let updated = scientist.apply(update);
        self.scientist_repository.update(&updated).await?;
        tracing::info!(scientist_id = %updated.id(), "科学者を更新しました");
        Ok(updated)
    }

    /// 科学者と所有するミッションを削除する
    pub async fn delete_scientist(&self, id: ScientistId) -> Result<(), ApiError> {
        self.find_scientist(id).await?;

        let removed_missions = self.scientist_repository.delete(id).await?;
        tracing::info!(scientist_id = %id, removed_missions, "科学者を削除しました");
        Ok(())
    }

    /// 科学者が存在することを確認する
    pub async fn ensure_scientist_exists(&self, id: ScientistId) -> Result<(), ApiError> {
        self.find_scientist(id).await.map(|_| ())
    }

    async fn find_scientist(&self, id: ScientistId) -> Result<Scientist, ApiError> {
        self.scientist_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                ApiError::from(DomainError::NotFound {
                    entity_type: "Scientist",
                    id:          id.to_string(),
                })
            })
    }

    /// 名前が他の科学者に使われていないことを確認する
    ///
    /// `exclude` に指定した科学者自身との一致は重複として扱わない。
    async fn ensure_name_available(
        &self,
        name: &ScientistName,
        exclude: Option<ScientistId>,
    ) -> Result<(), ApiError> {
        match self.scientist_repository.find_by_name(name).await? {
            Some(existing) if Some(existing.id()) != exclude => {
                tracing::info!(
                    name = %name,
                    existing_id = %existing.id(),
                    "同名の科学者が存在するため拒否しました"
                );
                Err(ApiError::Validation(
                    Violation::new(ScientistName::FIELD, "同名の科学者が既に存在します").into(),
                ))
            }
            _ => Ok(()),
        }
    }
}
