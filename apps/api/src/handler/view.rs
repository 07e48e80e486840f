//! # レスポンスのビュー型
//!
//! エンドポイントごとに出力するフィールドを固定した射影。
//!
//! | ビュー | フィールド |
//! |-------|-----------|
//! | [`ScientistSummary`] | `id`, `name`, `field_of_study` |
//! | [`ScientistDetail`] | 上記 + `missions` |
//! | [`PlanetSummary`] | `id`, `name`, `distance_from_earth`, `nearest_star` |
//! | [`MissionDetail`] | `id`, `name`, `scientist_id`, `planet_id`, `scientist`, `planet` |
//!
//! 一覧では `missions` を含めず、詳細でのみ含める。
//! ミッションに埋め込む科学者は [`ScientistSummary`] のため、循環しない。

use cosmic_domain::{planet::Planet, scientist::Scientist};
use serde::Serialize;

use crate::usecase::{MissionWithRelations, ScientistWithMissions};

/// 科学者の要約（一覧・更新結果・ミッションへの埋め込み）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScientistSummary {
    pub id:             i64,
    pub name:           String,
    pub field_of_study: String,
}

impl From<&Scientist> for ScientistSummary {
    fn from(scientist: &Scientist) -> Self {
        Self {
            id:             scientist.id().as_i64(),
            name:           scientist.name().as_str().to_string(),
            field_of_study: scientist.field_of_study().as_str().to_string(),
        }
    }
}

/// 科学者の詳細（ID 指定取得・作成結果）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScientistDetail {
    pub id:             i64,
    pub name:           String,
    pub field_of_study: String,
    pub missions:       Vec<MissionDetail>,
}

impl ScientistDetail {
    /// ミッションを持たない科学者の詳細（作成直後）
    pub fn without_missions(scientist: &Scientist) -> Self {
        let summary = ScientistSummary::from(scientist);
        Self {
            id:             summary.id,
            name:           summary.name,
            field_of_study: summary.field_of_study,
            missions:       Vec::new(),
        }
    }
}

impl From<&ScientistWithMissions> for ScientistDetail {
    fn from(value: &ScientistWithMissions) -> Self {
        Self {
            missions: value.missions.iter().map(MissionDetail::from).collect(),
            ..Self::without_missions(&value.scientist)
        }
    }
}

/// 惑星の要約
///
/// 未設定の `distance_from_earth`, `nearest_star` は `null` で出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanetSummary {
    pub id:                  i64,
    pub name:                String,
    pub distance_from_earth: Option<String>,
    pub nearest_star:        Option<String>,
}

impl From<&Planet> for PlanetSummary {
    fn from(planet: &Planet) -> Self {
        Self {
            id:                  planet.id().as_i64(),
            name:                planet.name().as_str().to_string(),
            distance_from_earth: planet
                .distance_from_earth()
                .map(|d| d.as_str().to_string()),
            nearest_star:        planet.nearest_star().map(|s| s.as_str().to_string()),
        }
    }
}

/// ミッションの詳細（参照先の要約を埋め込む）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionDetail {
    pub id:           i64,
    pub name:         String,
    pub scientist_id: i64,
    pub planet_id:    i64,
    pub scientist:    ScientistSummary,
    pub planet:       PlanetSummary,
}

impl From<&MissionWithRelations> for MissionDetail {
    fn from(value: &MissionWithRelations) -> Self {
        Self {
            id:           value.mission.id().as_i64(),
            name:         value.mission.name().as_str().to_string(),
            scientist_id: value.mission.scientist_id().as_i64(),
            planet_id:    value.mission.planet_id().as_i64(),
            scientist:    ScientistSummary::from(&value.scientist),
            planet:       PlanetSummary::from(&value.planet),
        }
    }
}
