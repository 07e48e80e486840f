//! ユースケース間で共有するヘルパー

use std::collections::BTreeMap;

use cosmic_domain::{mission::Mission, scientist::Scientist};
use cosmic_infra::repository::PlanetRepository;

use super::mission::MissionWithRelations;
use crate::error::ApiError;

/// 科学者が所有するミッションに参照先を付与する
///
/// 惑星はまとめて 1 回のクエリで取得する。
/// 参照先の惑星が見つからない場合は外部キーが壊れているため内部エラーとする。
pub(crate) async fn attach_relations(
    planet_repository: &dyn PlanetRepository,
    scientist: &Scientist,
    missions: Vec<Mission>,
) -> Result<Vec<MissionWithRelations>, ApiError> {
    let mut planet_ids: Vec<_> = missions.iter().map(Mission::planet_id).collect();
    planet_ids.sort_by_key(|id| id.as_i64());
    planet_ids.dedup();

    let planets: BTreeMap<i64, _> = planet_repository
        .find_by_ids(&planet_ids)
        .await?
        .into_iter()
        .map(|planet| (planet.id().as_i64(), planet))
        .collect();

    missions
        .into_iter()
        .map(|mission| {
            let planet = planets
                .get(&mission.planet_id().as_i64())
                .cloned()
                .ok_or_else(|| {
                    ApiError::Internal(format!(
                        "ミッション {} の惑星 {} が見つかりません",
                        mission.id(),
                        mission.planet_id()
                    ))
                })?;
            Ok(MissionWithRelations {
                mission,
                scientist: scientist.clone(),
                planet,
            })
        })
        .collect()
}
