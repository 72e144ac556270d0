use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::veiculo_controller::VeiculoController;
use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoFiltros};
use crate::models::veiculo::Veiculo;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_veiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_veiculo))
        .route("/", get(list_veiculos))
        .route("/:id", get(get_veiculo))
        .route("/:id", patch(update_veiculo))
        .route("/:id", delete(delete_veiculo))
}

async fn create_veiculo(
    State(state): State<AppState>,
    Json(request): Json<CreateVeiculoRequest>,
) -> Result<(StatusCode, Json<Veiculo>), AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let veiculo = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(veiculo)))
}

async fn list_veiculos(
    State(state): State<AppState>,
    Query(filtros): Query<VeiculoFiltros>,
) -> Result<Json<Vec<Veiculo>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    Ok(Json(controller.list(filtros).await?))
}

async fn get_veiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Veiculo>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_veiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVeiculoRequest>,
) -> Result<Json<Veiculo>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_veiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Veículo removido com sucesso"
    })))
}
