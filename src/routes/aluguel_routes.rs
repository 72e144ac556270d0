use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::aluguel_dto::{AluguelResponse, CreateAluguelRequest, FinalizarAluguelRequest};
use crate::services::aluguel_service::AluguelService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_aluguel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_aluguel))
        .route("/", get(list_alugueis))
        .route("/:id", get(get_aluguel))
        .route("/:id/finalizar", patch(finalizar_aluguel))
}

async fn create_aluguel(
    State(state): State<AppState>,
    Json(request): Json<CreateAluguelRequest>,
) -> Result<(StatusCode, Json<AluguelResponse>), AppError> {
    let service = AluguelService::new(state.pool.clone());
    let aluguel = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(aluguel)))
}

async fn list_alugueis(
    State(state): State<AppState>,
) -> Result<Json<Vec<AluguelResponse>>, AppError> {
    let service = AluguelService::new(state.pool.clone());
    Ok(Json(service.find_all().await?))
}

async fn get_aluguel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AluguelResponse>, AppError> {
    let service = AluguelService::new(state.pool.clone());
    Ok(Json(service.find_one(id).await?))
}

async fn finalizar_aluguel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinalizarAluguelRequest>,
) -> Result<Json<AluguelResponse>, AppError> {
    let service = AluguelService::new(state.pool.clone());
    Ok(Json(service.finalizar(id, request).await?))
}
