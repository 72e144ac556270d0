use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::categoria_controller::CategoriaController;
use crate::dto::categoria_dto::CreateCategoriaRequest;
use crate::models::categoria::Categoria;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_categoria_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_categoria))
        .route("/", get(list_categorias))
        .route("/:id", get(get_categoria))
}

async fn create_categoria(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoriaRequest>,
) -> Result<(StatusCode, Json<Categoria>), AppError> {
    let controller = CategoriaController::new(state.pool.clone());
    let categoria = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(categoria)))
}

async fn list_categorias(
    State(state): State<AppState>,
) -> Result<Json<Vec<Categoria>>, AppError> {
    let controller = CategoriaController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_categoria(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Categoria>, AppError> {
    let controller = CategoriaController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}
