use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::categoria_dto::CreateCategoriaRequest;
use crate::models::categoria::Categoria;
use crate::repositories::categoria_repository::CategoriaRepository;
use crate::utils::errors::AppError;

pub struct CategoriaController {
    repository: CategoriaRepository,
}

impl CategoriaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CategoriaRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCategoriaRequest) -> Result<Categoria, AppError> {
        request.validate()?;

        if self.repository.nome_exists(&request.nome).await? {
            return Err(AppError::Conflict("Categoria já cadastrada".to_string()));
        }

        self.repository.create(request.nome, request.descricao).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Categoria, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Categoria>, AppError> {
        self.repository.find_all().await
    }
}
