use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoFiltros};
use crate::models::veiculo::Veiculo;
use crate::repositories::aluguel_repository::AluguelRepository;
use crate::repositories::categoria_repository::CategoriaRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;

pub struct VeiculoController {
    repository: VeiculoRepository,
    categorias: CategoriaRepository,
    alugueis: AluguelRepository,
}

impl VeiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VeiculoRepository::new(pool.clone()),
            categorias: CategoriaRepository::new(pool.clone()),
            alugueis: AluguelRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVeiculoRequest) -> Result<Veiculo, AppError> {
        request.validate()?;

        if request.valor_diaria.is_sign_negative() {
            return Err(AppError::BadRequest(
                "Valor da diária deve ser positivo".to_string(),
            ));
        }

        if self.repository.placa_exists(&request.placa).await? {
            return Err(AppError::Conflict("Placa já cadastrada no sistema".to_string()));
        }

        self.categorias
            .find_by_id(request.categoria_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))?;

        self.repository.create(request).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Veiculo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))
    }

    pub async fn list(&self, filtros: VeiculoFiltros) -> Result<Vec<Veiculo>, AppError> {
        self.repository.find_all(&filtros).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVeiculoRequest,
    ) -> Result<Veiculo, AppError> {
        request.validate()?;

        if let Some(categoria_id) = request.categoria_id {
            self.categorias
                .find_by_id(categoria_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Categoria não encontrada".to_string()))?;
        }

        self.repository.update(id, request).await
    }

    /// Remoção física só é permitida sem aluguel ativo referenciando o
    /// veículo.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        if self.alugueis.existe_ativo_por_veiculo(id).await? {
            return Err(AppError::BadRequest(
                "Não é possível remover veículo com aluguéis ativos".to_string(),
            ));
        }

        self.repository.delete(id).await
    }
}
