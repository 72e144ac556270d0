use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::funcionario_controller::FuncionarioController;
use crate::dto::funcionario_dto::{CreateFuncionarioRequest, UpdateFuncionarioRequest};
use crate::models::funcionario::Funcionario;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_funcionario_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_funcionario))
        .route("/", get(list_funcionarios))
        .route("/:id", get(get_funcionario))
        .route("/:id", patch(update_funcionario))
        .route("/:id", delete(deactivate_funcionario))
}

async fn create_funcionario(
    State(state): State<AppState>,
    Json(request): Json<CreateFuncionarioRequest>,
) -> Result<(StatusCode, Json<Funcionario>), AppError> {
    let controller = FuncionarioController::new(state.pool.clone());
    let funcionario = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(funcionario)))
}

async fn list_funcionarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<Funcionario>>, AppError> {
    let controller = FuncionarioController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_funcionario(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Funcionario>, AppError> {
    let controller = FuncionarioController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_funcionario(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFuncionarioRequest>,
) -> Result<Json<Funcionario>, AppError> {
    let controller = FuncionarioController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn deactivate_funcionario(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Funcionario>, AppError> {
    let controller = FuncionarioController::new(state.pool.clone());
    Ok(Json(controller.deactivate(id).await?))
}
