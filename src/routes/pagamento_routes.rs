use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::pagamento_dto::{CreatePagamentoRequest, PagamentoResponse};
use crate::services::pagamento_service::PagamentoService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pagamento_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_pagamento))
        .route("/", get(list_pagamentos))
        .route("/:id", get(get_pagamento))
        .route("/aluguel/:aluguel_id", get(get_pagamento_por_aluguel))
}

async fn create_pagamento(
    State(state): State<AppState>,
    Json(request): Json<CreatePagamentoRequest>,
) -> Result<(StatusCode, Json<PagamentoResponse>), AppError> {
    let service = PagamentoService::new(state.pool.clone());
    let pagamento = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(pagamento)))
}

async fn list_pagamentos(
    State(state): State<AppState>,
) -> Result<Json<Vec<PagamentoResponse>>, AppError> {
    let service = PagamentoService::new(state.pool.clone());
    Ok(Json(service.find_all().await?))
}

async fn get_pagamento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PagamentoResponse>, AppError> {
    let service = PagamentoService::new(state.pool.clone());
    Ok(Json(service.find_one(id).await?))
}

async fn get_pagamento_por_aluguel(
    State(state): State<AppState>,
    Path(aluguel_id): Path<Uuid>,
) -> Result<Json<Option<PagamentoResponse>>, AppError> {
    let service = PagamentoService::new(state.pool.clone());
    Ok(Json(service.find_por_aluguel(aluguel_id).await?))
}
