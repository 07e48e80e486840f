//! # ルーター構築
//!
//! リポジトリ・ユースケース・ハンドラを組み立てて axum の [`Router`] を返す。
//! API サーバーと HTTP テストが同じルーターを使う。
//!
//! ## レイヤー構成（外側から）
//!
//! ```text
//! SetRequestIdLayer → PropagateRequestIdLayer → TraceLayer → CanonicalLogLineLayer → handler
//! ```

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use cosmic_infra::repository::{
    MissionRepository,
    PlanetRepository,
    ScientistRepository,
    SqliteMissionRepository,
    SqlitePlanetRepository,
    SqliteScientistRepository,
};
use cosmic_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::make_request_span,
};
use sqlx::SqlitePool;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        MissionState,
        PlanetState,
        ReadinessState,
        ScientistState,
        create_mission,
        create_scientist,
        delete_scientist,
        get_scientist,
        health_check,
        home,
        list_planets,
        list_scientists,
        readiness_check,
        update_scientist,
    },
    usecase::{MissionUseCaseImpl, PlanetUseCaseImpl, ScientistUseCaseImpl},
};

/// アプリケーション全体のルーターを構築する
pub fn build_router(pool: SqlitePool) -> Router {
    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    let scientist_repository: Arc<dyn ScientistRepository> =
        Arc::new(SqliteScientistRepository::new(pool.clone()));
    let planet_repository: Arc<dyn PlanetRepository> =
        Arc::new(SqlitePlanetRepository::new(pool.clone()));
    let mission_repository: Arc<dyn MissionRepository> =
        Arc::new(SqliteMissionRepository::new(pool));

    let scientist_state = Arc::new(ScientistState {
        usecase: ScientistUseCaseImpl::new(
            scientist_repository.clone(),
            planet_repository.clone(),
            mission_repository.clone(),
        ),
    });
    let planet_state = Arc::new(PlanetState {
        usecase: PlanetUseCaseImpl::new(planet_repository.clone()),
    });
    let mission_state = Arc::new(MissionState {
        usecase: MissionUseCaseImpl::new(
            scientist_repository,
            planet_repository,
            mission_repository,
        ),
    });

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/scientists", get(list_scientists).post(create_scientist))
                .route(
                    "/scientists/{id}",
                    get(get_scientist)
                        .patch(update_scientist)
                        .delete(delete_scientist),
                )
                .with_state(scientist_state),
        )
        .merge(
            Router::new()
                .route("/planets", get(list_planets))
                .with_state(planet_state),
        )
        .merge(
            Router::new()
                .route("/missions", post(create_mission))
                .with_state(mission_state),
        )
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
