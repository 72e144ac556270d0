use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoFiltros};
use crate::models::veiculo::Veiculo;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct VeiculoRepository {
    pool: PgPool,
}

impl VeiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVeiculoRequest) -> Result<Veiculo, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            INSERT INTO veiculos (
                id, placa, marca, modelo, ano, cor, valor_diaria, tipo, disponivel,
                categoria_id, numero_portas, possui_ar_condicionado, cilindradas,
                bau, capacidade_carga, criado_em
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, TRUE, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.placa)
        .bind(request.marca)
        .bind(request.modelo)
        .bind(request.ano)
        .bind(request.cor)
        .bind(request.valor_diaria)
        .bind(request.tipo)
        .bind(request.categoria_id)
        .bind(request.numero_portas)
        .bind(request.possui_ar_condicionado)
        .bind(request.cilindradas)
        .bind(request.bau)
        .bind(request.capacidade_carga)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Placa já cadastrada no sistema"))?;

        Ok(veiculo)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Veiculo>, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>("SELECT * FROM veiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(veiculo)
    }

    pub async fn find_all(&self, filtros: &VeiculoFiltros) -> Result<Vec<Veiculo>, AppError> {
        let veiculos = sqlx::query_as::<_, Veiculo>(
            r#"
            SELECT * FROM veiculos
            WHERE ($1::tipo_veiculo IS NULL OR tipo = $1)
              AND ($2::boolean IS NULL OR disponivel = $2)
            ORDER BY modelo ASC
            "#,
        )
        .bind(filtros.tipo)
        .bind(filtros.disponivel)
        .fetch_all(&self.pool)
        .await?;

        Ok(veiculos)
    }

    /// Veículos ligados a uma reserva pela tabela de junção
    pub async fn find_por_reserva(&self, reserva_id: Uuid) -> Result<Vec<Veiculo>, AppError> {
        let veiculos = sqlx::query_as::<_, Veiculo>(
            r#"
            SELECT v.* FROM veiculos v
            JOIN reserva_veiculos rv ON rv.veiculo_id = v.id
            WHERE rv.reserva_id = $1
            ORDER BY v.modelo ASC
            "#,
        )
        .bind(reserva_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(veiculos)
    }

    pub async fn placa_exists(&self, placa: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM veiculos WHERE placa = $1)")
                .bind(placa)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn set_disponibilidade(&self, id: Uuid, disponivel: bool) -> Result<Veiculo, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>(
            "UPDATE veiculos SET disponivel = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(disponivel)
        .fetch_one(&self.pool)
        .await?;

        Ok(veiculo)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVeiculoRequest,
    ) -> Result<Veiculo, AppError> {
        let atual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            UPDATE veiculos
            SET marca = $2, modelo = $3, ano = $4, cor = $5, valor_diaria = $6,
                disponivel = $7, categoria_id = $8, numero_portas = $9,
                possui_ar_condicionado = $10, cilindradas = $11, bau = $12,
                capacidade_carga = $13
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.marca.unwrap_or(atual.marca))
        .bind(request.modelo.unwrap_or(atual.modelo))
        .bind(request.ano.unwrap_or(atual.ano))
        .bind(request.cor.unwrap_or(atual.cor))
        .bind(request.valor_diaria.unwrap_or(atual.valor_diaria))
        .bind(request.disponivel.unwrap_or(atual.disponivel))
        .bind(request.categoria_id.unwrap_or(atual.categoria_id))
        .bind(request.numero_portas.or(atual.numero_portas))
        .bind(request.possui_ar_condicionado.or(atual.possui_ar_condicionado))
        .bind(request.cilindradas.or(atual.cilindradas))
        .bind(request.bau.or(atual.bau))
        .bind(request.capacidade_carga.or(atual.capacidade_carga))
        .fetch_one(&self.pool)
        .await?;

        Ok(veiculo)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM veiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
