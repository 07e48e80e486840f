//! # 惑星
//!
//! ミッションの目的地となる惑星エンティティ。
//!
//! HTTP API からは一覧取得のみ可能で、作成はシードツールや
//! ストレージ層から行う。

use crate::{
    DomainError,
    ValidationErrors,
    value_objects::{DistanceFromEarth, PlanetName, StarName},
};

define_integer_id! {
    /// 惑星の一意識別子
    pub struct PlanetId;
}

/// 惑星エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    id:                  PlanetId,
    name:                PlanetName,
    distance_from_earth: Option<DistanceFromEarth>,
    nearest_star:        Option<StarName>,
}

impl Planet {
    /// 既存のデータから惑星を復元する（データベースから取得時）
    pub fn from_db(
        id: PlanetId,
        name: PlanetName,
        distance_from_earth: Option<DistanceFromEarth>,
        nearest_star: Option<StarName>,
    ) -> Self {
        Self {
            id,
            name,
            distance_from_earth,
            nearest_star,
        }
    }

    pub fn id(&self) -> PlanetId {
        self.id
    }

    pub fn name(&self) -> &PlanetName {
        &self.name
    }

    pub fn distance_from_earth(&self) -> Option<&DistanceFromEarth> {
        self.distance_from_earth.as_ref()
    }

    pub fn nearest_star(&self) -> Option<&StarName> {
        self.nearest_star.as_ref()
    }
}

/// 新規作成する惑星（ID 採番前）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    name:                PlanetName,
    distance_from_earth: Option<DistanceFromEarth>,
    nearest_star:        Option<StarName>,
}

impl NewPlanet {
    /// 値を検証して作成する
    ///
    /// `name` は必須。`distance_from_earth` と `nearest_star` は任意だが、
    /// 指定された場合は空文字列や最大長超過を違反とする。
    pub fn new(
        name: Option<String>,
        distance_from_earth: Option<String>,
        nearest_star: Option<String>,
    ) -> Result<Self, DomainError> {
        let mut errors = ValidationErrors::new();
        let name = errors.check(PlanetName::required(name));
        let distance_from_earth = errors.check(
            distance_from_earth
                .map(DistanceFromEarth::new)
                .transpose(),
        );
        let nearest_star = errors.check(nearest_star.map(StarName::new).transpose());

        match (name, distance_from_earth, nearest_star) {
            (Some(name), Some(distance_from_earth), Some(nearest_star)) => Ok(Self {
                name,
                distance_from_earth,
                nearest_star,
            }),
            _ => Err(DomainError::Validation(errors)),
        }
    }

    pub fn name(&self) -> &PlanetName {
        &self.name
    }

    pub fn distance_from_earth(&self) -> Option<&DistanceFromEarth> {
        self.distance_from_earth.as_ref()
    }

    pub fn nearest_star(&self) -> Option<&StarName> {
        self.nearest_star.as_ref()
    }

    /// 採番された ID を付与して [`Planet`] にする
    pub fn into_planet(self, id: PlanetId) -> Planet {
        Planet::from_db(id, self.name, self.distance_from_earth, self.nearest_star)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_任意フィールドなしで作成できる() {
        let sut = NewPlanet::new(Some("Kepler-22b".to_string()), None, None).unwrap();

        assert_eq!(sut.name().as_str(), "Kepler-22b");
        assert!(sut.distance_from_earth().is_none());
        assert!(sut.nearest_star().is_none());
    }

    #[test]
    fn test_任意フィールドありで作成できる() {
        let planet = NewPlanet::new(
            Some("Proxima b".to_string()),
            Some("4.24 light-years".to_string()),
            Some("Proxima Centauri".to_string()),
        )
        .unwrap()
        .into_planet(PlanetId::from_i64(3));

        assert_eq!(planet.id().as_i64(), 3);
        assert_eq!(
            planet.distance_from_earth().map(|d| d.as_str()),
            Some("4.24 light-years")
        );
        assert_eq!(
            planet.nearest_star().map(|s| s.as_str()),
            Some("Proxima Centauri")
        );
    }

    #[test]
    fn test_名前の欠落と空の任意フィールドがまとめて報告される() {
        let result = NewPlanet::new(None, Some(" ".to_string()), None);

        let Err(DomainError::Validation(errors)) = result else {
            panic!("Validation エラーになるべき");
        };
        let fields: Vec<&str> = errors.violations().iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec!["name", "distance_from_earth"]);
    }
}
