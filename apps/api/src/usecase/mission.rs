//! ミッション管理ユースケース

use std::sync::Arc;

use cosmic_domain::{
    ValidationErrors,
    Violation,
    mission::{Mission, NewMission},
    planet::Planet,
    scientist::Scientist,
};
use cosmic_infra::repository::{MissionRepository, PlanetRepository, ScientistRepository};

use crate::error::ApiError;

/// ミッション作成の入力
///
/// 値はリクエストのまま受け取り、検証はユースケースで行う。
#[derive(Debug, Clone, Default)]
pub struct CreateMissionInput {
    pub name:         Option<String>,
    pub scientist_id: Option<i64>,
    pub planet_id:    Option<i64>,
}

/// 参照先の科学者・惑星を伴うミッション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionWithRelations {
    pub mission:   Mission,
    pub scientist: Scientist,
    pub planet:    Planet,
}

/// ミッション管理ユースケース
pub struct MissionUseCaseImpl {
    scientist_repository: Arc<dyn ScientistRepository>,
    planet_repository:    Arc<dyn PlanetRepository>,
    mission_repository:   Arc<dyn MissionRepository>,
}

impl MissionUseCaseImpl {
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

    /// ミッションを作成する
    ///
    /// 1. 必須フィールドを検証
    /// 2. 参照先の科学者・惑星の存在を確認（両方の違反をまとめて返す）
    /// 3. DB に挿入（外部キー制約違反は検証エラーとして返る）
    pub async fn create_mission(
        &self,
        input: CreateMissionInput,
    ) -> Result<MissionWithRelations, ApiError> {
        let new_mission = NewMission::new(input.name, input.scientist_id, input.planet_id)?;

        let scientist = self
            .scientist_repository
            .find_by_id(new_mission.scientist_id())
            .await?;
        let planet = self
            .planet_repository
            .find_by_id(new_mission.planet_id())
            .await?;

        let (scientist, planet) = match (scientist, planet) {
            (Some(scientist), Some(planet)) => (scientist, planet),
            (scientist, planet) => {
                let mut errors = ValidationErrors::new();
                if scientist.is_none() {
                    errors.add(Violation::new("scientist_id", "科学者が存在しません"));
                }
                if planet.is_none() {
                    errors.add(Violation::new("planet_id", "惑星が存在しません"));
                }
                tracing::info!(
                    scientist_id = %new_mission.scientist_id(),
                    planet_id = %new_mission.planet_id(),
                    "参照先が存在しないためミッションを作成しません"
                );
                return Err(ApiError::Validation(errors));
            }
        };

        let mission = self.mission_repository.insert(&new_mission).await?;
        tracing::info!(mission_id = %mission.id(), "ミッションを作成しました");

        Ok(MissionWithRelations {
            mission,
            scientist,
            planet,
        })
    }
}
