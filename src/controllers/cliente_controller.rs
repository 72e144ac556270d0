use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::cliente_dto::{CreateClienteRequest, UpdateClienteRequest};
use crate::models::cliente::Cliente;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::AppError;

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClienteRequest) -> Result<Cliente, AppError> {
        request.validate()?;

        if self.repository.cpf_exists(&request.cpf).await? {
            return Err(AppError::Conflict("CPF já cadastrado no sistema".to_string()));
        }

        self.repository
            .create(
                request.nome,
                request.cpf,
                request.email,
                request.telefone,
                request.endereco,
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Cliente, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Cliente>, AppError> {
        self.repository.find_all_ativos().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateClienteRequest,
    ) -> Result<Cliente, AppError> {
        request.validate()?;

        self.repository
            .update(
                id,
                request.nome,
                request.email,
                request.telefone,
                request.endereco,
                request.ativo,
            )
            .await
    }

    pub async fn deactivate(&self, id: Uuid) -> Result<Cliente, AppError> {
        self.repository.desativar(id).await
    }
}
