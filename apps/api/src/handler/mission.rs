//! # ミッションハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /missions` - ミッション作成

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use super::view::MissionDetail;
use crate::{
    error::ApiError,
    extract::JsonBody,
    usecase::{CreateMissionInput, MissionUseCaseImpl},
};

/// ミッション API の共有状態
pub struct MissionState {
    pub usecase: MissionUseCaseImpl,
}

/// ミッション作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateMissionRequest {
    pub name:         Option<String>,
    pub scientist_id: Option<i64>,
    pub planet_id:    Option<i64>,
}

/// POST /missions
pub async fn create_mission(
    State(state): State<Arc<MissionState>>,
    JsonBody(req): JsonBody<CreateMissionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateMissionInput {
        name:         req.name,
        scientist_id: req.scientist_id,
        planet_id:    req.planet_id,
    };
    let mission = state.usecase.create_mission(input).await?;
    Ok((StatusCode::CREATED, Json(MissionDetail::from(&mission))))
}
