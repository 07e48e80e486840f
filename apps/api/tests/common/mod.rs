//! HTTP テスト共通ヘルパー
//!
//! マイグレーション適用済みのインメモリ DB でルーター全体を組み立て、
//! `oneshot` でリクエストを 1 件ずつ送る。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use cosmic_api::build_router;
use cosmic_domain::{
    mission::{Mission, NewMission},
    planet::{NewPlanet, Planet},
    scientist::{NewScientist, Scientist},
};
use cosmic_infra::{
    db,
    repository::{
        MissionRepository,
        PlanetRepository,
        ScientistRepository,
        SqliteMissionRepository,
        SqlitePlanetRepository,
        SqliteScientistRepository,
    },
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// テスト対象のアプリケーション
pub struct TestApp {
    pub router: Router,
    pub pool:   SqlitePool,
}

/// レスポンスのステータスとボディ
pub struct TestResponse {
    pub status: StatusCode,
    pub body:   String,
}

impl TestResponse {
    /// ボディを JSON として解釈する
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("JSON ではないボディ: {e}: {:?}", self.body))
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = db::create_memory_pool()
            .await
            .expect("インメモリ DB の作成に失敗");
        Self {
            router: build_router(pool.clone()),
            pool,
        }
    }

    /// ボディなしのリクエストを送る
    pub async fn request(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// JSON ボディ付きのリクエストを送る
    pub async fn request_json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        self.request_raw(method, uri, Some("application/json"), body.to_string())
            .await
    }

    /// Content-Type とボディを任意に指定してリクエストを送る
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// 科学者を DB に直接作成する
    pub async fn insert_scientist(&self, name: &str, field_of_study: &str) -> Scientist {
        let new_scientist =
            NewScientist::new(Some(name.to_string()), Some(field_of_study.to_string())).unwrap();
        SqliteScientistRepository::new(self.pool.clone())
            .insert(&new_scientist)
            .await
            .expect("科学者の作成に失敗")
    }

    /// 惑星を DB に直接作成する
    pub async fn insert_planet(
        &self,
        name: &str,
        distance_from_earth: Option<&str>,
        nearest_star: Option<&str>,
    ) -> Planet {
        let new_planet = NewPlanet::new(
            Some(name.to_string()),
            distance_from_earth.map(str::to_string),
            nearest_star.map(str::to_string),
        )
        .unwrap();
        SqlitePlanetRepository::new(self.pool.clone())
            .insert(&new_planet)
            .await
            .expect("惑星の作成に失敗")
    }

    /// ミッションを DB に直接作成する
    pub async fn insert_mission(&self, name: &str, scientist: &Scientist, planet: &Planet) -> Mission {
        let new_mission = NewMission::new(
            Some(name.to_string()),
            Some(scientist.id().as_i64()),
            Some(planet.id().as_i64()),
        )
        .unwrap();
        SqliteMissionRepository::new(self.pool.clone())
            .insert(&new_mission)
            .await
            .expect("ミッションの作成に失敗")
    }

    /// テーブルの行数を数える
    pub async fn count_rows(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("行数の取得に失敗");
        count
    }
}
