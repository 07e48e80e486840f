//! # ミッション
//!
//! 科学者と惑星を結ぶ関連エンティティ。
//!
//! ## 不変条件
//!
//! - ミッションは作成時点で存在する科学者と惑星を参照する
//! - 参照先の存在確認はユースケース層で永続化の前に行う（DB の外部キー制約は最終防衛線）
//!
//! [`NewMission::new`] はリクエスト値の形式だけを検証し、
//! 参照先の存在は検証しない。

use crate::{
    DomainError,
    ValidationErrors,
    Violation,
    planet::PlanetId,
    scientist::ScientistId,
    value_objects::MissionName,
};

define_integer_id! {
    /// ミッションの一意識別子
    pub struct MissionId;
}

/// ミッションエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    id:           MissionId,
    name:         MissionName,
    scientist_id: ScientistId,
    planet_id:    PlanetId,
}

impl Mission {
    /// 既存のデータからミッションを復元する（データベースから取得時）
    pub fn from_db(
        id: MissionId,
        name: MissionName,
        scientist_id: ScientistId,
        planet_id: PlanetId,
    ) -> Self {
        Self {
            id,
            name,
            scientist_id,
            planet_id,
        }
    }

    pub fn id(&self) -> MissionId {
        self.id
    }

    pub fn name(&self) -> &MissionName {
        &self.name
    }

    pub fn scientist_id(&self) -> ScientistId {
        self.scientist_id
    }

    pub fn planet_id(&self) -> PlanetId {
        self.planet_id
    }
}

/// 新規作成するミッション（ID 採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMission {
    name:         MissionName,
    scientist_id: ScientistId,
    planet_id:    PlanetId,
}

impl NewMission {
    /// リクエストの値を検証して作成する
    ///
    /// `name`, `scientist_id`, `planet_id` はすべて必須。
    pub fn new(
        name: Option<String>,
        scientist_id: Option<i64>,
        planet_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        let mut errors = ValidationErrors::new();
        let name = errors.check(MissionName::required(name));
        let scientist_id = errors.check(
            scientist_id
                .map(ScientistId::from_i64)
                .ok_or_else(|| Violation::new("scientist_id", "科学者 ID は必須です")),
        );
        let planet_id = errors.check(
            planet_id
                .map(PlanetId::from_i64)
                .ok_or_else(|| Violation::new("planet_id", "惑星 ID は必須です")),
        );

        match (name, scientist_id, planet_id) {
            (Some(name), Some(scientist_id), Some(planet_id)) => Ok(Self {
                name,
                scientist_id,
                planet_id,
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }

    pub fn name(&self) -> &MissionName {
        &self.name
    }

    pub fn scientist_id(&self) -> ScientistId {
        self.scientist_id
    }

    pub fn planet_id(&self) -> PlanetId {
        self.planet_id
    }

    /// 採番された ID を付与して [`Mission`] にする
    pub fn into_mission(self, id: MissionId) -> Mission {
        Mission::from_db(id, self.name, self.scientist_id, self.planet_id)
    }
}
