//! # 科学者ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /scientists` - 科学者一覧（ミッションを含まない）
//! - `GET /scientists/{id}` - 科学者詳細（ミッションを含む）
//! - `PATCH /scientists/{id}` - 科学者の部分更新
//! - `DELETE /scientists/{id}` - 科学者と所有するミッションの削除
//! - `POST /scientists` - 科学者作成

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use cosmic_domain::scientist::ScientistId;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::view::{ScientistDetail, ScientistSummary};
use crate::{
    error::ApiError,
    extract::{JsonBody, parse_id},
    usecase::{CreateScientistInput, ScientistUseCaseImpl, UpdateScientistInput},
};

const ENTITY: &str = "Scientist";

/// 科学者 API の共有状態
pub struct ScientistState {
    pub usecase: ScientistUseCaseImpl,
}

/// 科学者作成リクエスト
///
/// 欠落と `null` はユースケースの検証で、型不一致は JSON の解析で拒否される。
#[derive(Debug, Deserialize)]
pub struct CreateScientistRequest {
    pub name:           Option<String>,
    pub field_of_study: Option<String>,
}

fn scientist_id(raw: &str) -> Result<ScientistId, ApiError> {
    parse_id(raw, ENTITY).map(ScientistId::from_i64)
}

/// GET /scientists
pub async fn list_scientists(
    State(state): State<Arc<ScientistState>>,
) -> Result<impl IntoResponse, ApiError> {
    let scientists = state.usecase.list_scientists().await?;
    let response: Vec<ScientistSummary> = scientists.iter().map(ScientistSummary::from).collect();
    Ok(Json(response))
}

/// GET /scientists/{id}
pub async fn get_scientist(
    State(state): State<Arc<ScientistState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let scientist = state.usecase.get_scientist(scientist_id(&id)?).await?;
    Ok(Json(ScientistDetail::from(&scientist)))
}

/// PATCH /scientists/{id}
///
/// ボディは JSON オブジェクト。更新結果をミッションなしの要約で返す。
///
/// 対象の存在確認をボディの解析エラーより先に行うため、
/// 存在しない科学者へはボディに関わらず 404 を返す。
pub async fn update_scientist(
    State(state): State<Arc<ScientistState>>,
    Path(id): Path<String>,
    body: Result<JsonBody<Map<String, Value>>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let scientist_id = scientist_id(&id)?;
    let fields = match body {
        Ok(JsonBody(fields)) => fields,
        Err(rejection) => {
            state.usecase.ensure_scientist_exists(scientist_id).await?;
            return Err(rejection);
        }
    };

    let input = UpdateScientistInput {
        scientist_id,
        fields,
    };
    let scientist = state.usecase.update_scientist(input).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ScientistSummary::from(&scientist)),
    ))
}

/// DELETE /scientists/{id}
pub async fn delete_scientist(
    State(state): State<Arc<ScientistState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.usecase.delete_scientist(scientist_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /scientists
pub async fn create_scientist(
    State(state): State<Arc<ScientistState>>,
    JsonBody(req): JsonBody<CreateScientistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateScientistInput {
        name:           req.name,
        field_of_study: req.field_of_study,
    };
    let scientist = state.usecase.create_scientist(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ScientistDetail::without_missions(&scientist)),
    ))
}
