use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::dto::reserva_dto::{CreateReservaRequest, ReservaResponse};
use crate::services::reserva_service::ReservaService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reserva_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reserva))
        .route("/", get(list_reservas))
        .route("/:id", get(get_reserva))
        .route("/:id/cancelar", patch(cancelar_reserva))
}

async fn create_reserva(
    State(state): State<AppState>,
    Json(request): Json<CreateReservaRequest>,
) -> Result<(StatusCode, Json<ReservaResponse>), AppError> {
    let service = ReservaService::new(state.pool.clone());
    let reserva = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(reserva)))
}

async fn list_reservas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservaResponse>>, AppError> {
    let service = ReservaService::new(state.pool.clone());
    Ok(Json(service.find_all().await?))
}

async fn get_reserva(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservaResponse>, AppError> {
    let service = ReservaService::new(state.pool.clone());
    Ok(Json(service.find_one(id).await?))
}

async fn cancelar_reserva(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservaResponse>, AppError> {
    let service = ReservaService::new(state.pool.clone());
    Ok(Json(service.cancelar(id).await?))
}
