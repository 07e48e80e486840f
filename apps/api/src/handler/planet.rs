//! # 惑星ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /planets` - 惑星一覧

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use super::view::PlanetSummary;
use crate::{error::ApiError, usecase::PlanetUseCaseImpl};

/// 惑星 API の共有状態
pub struct PlanetState {
    pub usecase: PlanetUseCaseImpl,
}

/// GET /planets
pub async fn list_planets(
    State(state): State<Arc<PlanetState>>,
) -> Result<impl IntoResponse, ApiError> {
    let planets = state.usecase.list_planets().await?;
    let response: Vec<PlanetSummary> = planets.iter().map(PlanetSummary::from).collect();
    Ok(Json(response))
}
