use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::{CreateClienteRequest, UpdateClienteRequest};
use crate::models::cliente::Cliente;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cliente))
        .route("/", get(list_clientes))
        .route("/:id", get(get_cliente))
        .route("/:id", patch(update_cliente))
        .route("/:id", delete(deactivate_cliente))
}

async fn create_cliente(
    State(state): State<AppState>,
    Json(request): Json<CreateClienteRequest>,
) -> Result<(StatusCode, Json<Cliente>), AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let cliente = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(cliente)))
}

async fn list_clientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Cliente>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClienteRequest>,
) -> Result<Json<Cliente>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn deactivate_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Cliente>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.deactivate(id).await?))
}
