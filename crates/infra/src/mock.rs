//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! cosmic-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 3 つのリポジトリトレイトを 1 つのストアで実装し、
//! 一意制約・外部キー制約・カスケード削除を SQLite 実装と同じ結果になるよう再現する。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cosmic_domain::{
    mission::{Mission, MissionId, NewMission},
    planet::{NewPlanet, Planet, PlanetId},
    scientist::{NewScientist, Scientist, ScientistId},
    value_objects::ScientistName,
};

use crate::{
    error::InfraError,
    repository::{MissionRepository, PlanetRepository, ScientistRepository},
};

#[derive(Default)]
struct Store {
    scientists: Vec<Scientist>,
    planets:    Vec<Planet>,
    missions:   Vec<Mission>,
    last_id:    i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

// ===== MockRepository =====

/// インメモリのリポジトリ
///
/// `Clone` したインスタンスは同じストアを共有する。
#[derive(Clone, Default)]
pub struct MockRepository {
    store: Arc<Mutex<Store>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 科学者を直接追加する
    pub fn add_scientist(&self, name: &str, field_of_study: &str) -> Scientist {
        let new_scientist =
            NewScientist::new(Some(name.to_string()), Some(field_of_study.to_string())).unwrap();
        let mut store = self.store.lock().unwrap();
        let scientist = new_scientist.into_scientist(ScientistId::from_i64(store.next_id()));
        store.scientists.push(scientist.clone());
        scientist
    }

    /// 惑星を直接追加する
    pub fn add_planet(&self, name: &str) -> Planet {
        let new_planet = NewPlanet::new(Some(name.to_string()), None, None).unwrap();
        let mut store = self.store.lock().unwrap();
        let planet = new_planet.into_planet(PlanetId::from_i64(store.next_id()));
        store.planets.push(planet.clone());
        planet
    }

    /// ミッションを直接追加する
    pub fn add_mission(&self, name: &str, scientist_id: ScientistId, planet_id: PlanetId) -> Mission {
        let new_mission = NewMission::new(
            Some(name.to_string()),
            Some(scientist_id.as_i64()),
            Some(planet_id.as_i64()),
        )
        .unwrap();
        let mut store = self.store.lock().unwrap();
        let mission = new_mission.into_mission(MissionId::from_i64(store.next_id()));
        store.missions.push(mission.clone());
        mission
    }

    /// 保存されている科学者の件数
    pub fn scientist_count(&self) -> usize {
        self.store.lock().unwrap().scientists.len()
    }

    /// 保存されているミッションの件数
    pub fn mission_count(&self) -> usize {
        self.store.lock().unwrap().missions.len()
    }
}

#[async_trait]
impl ScientistRepository for MockRepository {
    async fn find_all(&self) -> Result<Vec<Scientist>, InfraError> {
        Ok(self.store.lock().unwrap().scientists.clone())
    }

    async fn find_by_id(&self, id: ScientistId) -> Result<Option<Scientist>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .scientists
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &ScientistName) -> Result<Option<Scientist>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .scientists
            .iter()
            .find(|s| s.name() == name)
            .cloned())
    }

    async fn insert(&self, scientist: &NewScientist) -> Result<Scientist, InfraError> {
        let mut store = self.store.lock().unwrap();
        if store.scientists.iter().any(|s| s.name() == scientist.name()) {
            return Err(InfraError::constraint_violation(
                "UNIQUE constraint failed: scientists.name",
            ));
        }
        let id = ScientistId::from_i64(store.next_id());
        let scientist = scientist.clone().into_scientist(id);
        store.scientists.push(scientist.clone());
        Ok(scientist)
    }

    async fn update(&self, scientist: &Scientist) -> Result<(), InfraError> {
        let mut store = self.store.lock().unwrap();
        if store
            .scientists
            .iter()
            .any(|s| s.id() != scientist.id() && s.name() == scientist.name())
        {
            return Err(InfraError::constraint_violation(
                "UNIQUE constraint failed: scientists.name",
            ));
        }
        if let Some(existing) = store.scientists.iter_mut().find(|s| s.id() == scientist.id()) {
            *existing = scientist.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: ScientistId) -> Result<u64, InfraError> {
        let mut store = self.store.lock().unwrap();
        let before = store.missions.len();
        store.missions.retain(|m| m.scientist_id() != id);
        let removed = before - store.missions.len();
        store.scientists.retain(|s| s.id() != id);
        Ok(removed as u64)
    }
}

#[async_trait]
impl PlanetRepository for MockRepository {
    async fn find_all(&self) -> Result<Vec<Planet>, InfraError> {
        Ok(self.store.lock().unwrap().planets.clone())
    }

    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .planets
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[PlanetId]) -> Result<Vec<Planet>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .planets
            .iter()
            .filter(|p| ids.contains(&p.id()))
            .cloned()
            .collect())
    }

    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, InfraError> {
        let mut store = self.store.lock().unwrap();
        if store.planets.iter().any(|p| p.name() == planet.name()) {
            return Err(InfraError::constraint_violation(
                "UNIQUE constraint failed: planets.name",
            ));
        }
        let id = PlanetId::from_i64(store.next_id());
        let planet = planet.clone().into_planet(id);
        store.planets.push(planet.clone());
        Ok(planet)
    }
}

#[async_trait]
impl MissionRepository for MockRepository {
    async fn find_by_scientist(
        &self,
        scientist_id: ScientistId,
    ) -> Result<Vec<Mission>, InfraError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .missions
            .iter()
            .filter(|m| m.scientist_id() == scientist_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, mission: &NewMission) -> Result<Mission, InfraError> {
        let mut store = self.store.lock().unwrap();
        let scientist_exists = store
            .scientists
            .iter()
            .any(|s| s.id() == mission.scientist_id());
        let planet_exists = store.planets.iter().any(|p| p.id() == mission.planet_id());
        if !scientist_exists || !planet_exists {
            return Err(InfraError::constraint_violation(
                "FOREIGN KEY constraint failed",
            ));
        }
        let id = MissionId::from_i64(store.next_id());
        let mission = mission.clone().into_mission(id);
        store.missions.push(mission.clone());
        Ok(mission)
    }
}
