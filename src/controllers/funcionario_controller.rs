use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::funcionario_dto::{CreateFuncionarioRequest, UpdateFuncionarioRequest};
use crate::models::funcionario::Funcionario;
use crate::repositories::funcionario_repository::FuncionarioRepository;
use crate::utils::errors::AppError;

pub struct FuncionarioController {
    repository: FuncionarioRepository,
}

impl FuncionarioController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuncionarioRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateFuncionarioRequest) -> Result<Funcionario, AppError> {
        request.validate()?;

        if self.repository.matricula_exists(&request.matricula).await? {
            return Err(AppError::Conflict(
                "Matrícula já cadastrada no sistema".to_string(),
            ));
        }

        self.repository
            .create(request.nome, request.matricula, request.cargo, request.telefone)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Funcionario, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Funcionário não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Funcionario>, AppError> {
        self.repository.find_all_ativos().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFuncionarioRequest,
    ) -> Result<Funcionario, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.nome, request.cargo, request.telefone, request.ativo)
            .await
    }

    pub async fn deactivate(&self, id: Uuid) -> Result<Funcionario, AppError> {
        self.repository.desativar(id).await
    }
}
