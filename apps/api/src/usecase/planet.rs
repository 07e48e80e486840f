//! 惑星参照ユースケース

use std::sync::Arc;

use cosmic_domain::planet::Planet;
use cosmic_infra::repository::PlanetRepository;

use crate::error::ApiError;

/// 惑星参照ユースケース
///
/// HTTP API からは一覧取得のみ。惑星の登録はシードツールが行う。
pub struct PlanetUseCaseImpl {
    planet_repository: Arc<dyn PlanetRepository>,
}

impl PlanetUseCaseImpl {
    pub fn new(planet_repository: Arc<dyn PlanetRepository>) -> Self {
        Self { planet_repository }
    }

    /// 全惑星を ID 順に取得する
    pub async fn list_planets(&self) -> Result<Vec<Planet>, ApiError> {
        Ok(self.planet_repository.find_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use cosmic_infra::mock::MockRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_登録済みの惑星をすべて返す() {
        let repo = MockRepository::new();
        let proxima = repo.add_planet("Proxima b");
        let kepler = repo.add_planet("Kepler-22b");
        let sut = PlanetUseCaseImpl::new(Arc::new(repo));

        let planets = sut.list_planets().await.unwrap();

        assert_eq!(planets, vec![proxima, kepler]);
    }

    #[tokio::test]
    async fn test_惑星がなければ空を返す() {
        let sut = PlanetUseCaseImpl::new(Arc::new(MockRepository::new()));

        let planets = sut.list_planets().await.unwrap();

        assert!(planets.is_empty());
    }
}
