use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::aluguel::Aluguel;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct AluguelRepository {
    pool: PgPool,
}

impl AluguelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere o aluguel e marca o veículo como indisponível na mesma
    /// transação. O índice único parcial sobre alugueis ativos faz uma
    /// segunda conversão concorrente do mesmo veículo falhar aqui.
    pub async fn criar_e_bloquear_veiculo(
        &self,
        data_inicio: DateTime<Utc>,
        valor_total: Decimal,
        reserva_id: Uuid,
        cliente_id: Uuid,
        veiculo_id: Uuid,
    ) -> Result<Aluguel, AppError> {
        let mut tx = self.pool.begin().await?;

        let aluguel = sqlx::query_as::<_, Aluguel>(
            r#"
            INSERT INTO alugueis (id, data_inicio, data_fim, valor_total, finalizado, reserva_id, cliente_id, veiculo_id)
            VALUES ($1, $2, NULL, $3, FALSE, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data_inicio)
        .bind(valor_total)
        .bind(reserva_id)
        .bind(cliente_id)
        .bind(veiculo_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "Veículo já possui aluguel ativo"))?;

        sqlx::query("UPDATE veiculos SET disponivel = FALSE WHERE id = $1")
            .bind(veiculo_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(aluguel)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Aluguel>, AppError> {
        let aluguel = sqlx::query_as::<_, Aluguel>("SELECT * FROM alugueis WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(aluguel)
    }

    pub async fn find_all(&self) -> Result<Vec<Aluguel>, AppError> {
        let alugueis =
            sqlx::query_as::<_, Aluguel>("SELECT * FROM alugueis ORDER BY data_inicio DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(alugueis)
    }

    pub async fn find_por_reserva(&self, reserva_id: Uuid) -> Result<Option<Aluguel>, AppError> {
        let aluguel =
            sqlx::query_as::<_, Aluguel>("SELECT * FROM alugueis WHERE reserva_id = $1")
                .bind(reserva_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(aluguel)
    }

    pub async fn existe_ativo_por_veiculo(&self, veiculo_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM alugueis WHERE veiculo_id = $1 AND NOT finalizado)",
        )
        .bind(veiculo_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Fecha o aluguel e devolve o veículo ao estoque disponível na mesma
    /// transação.
    pub async fn finalizar_e_liberar_veiculo(
        &self,
        id: Uuid,
        data_fim: DateTime<Utc>,
        veiculo_id: Uuid,
    ) -> Result<Aluguel, AppError> {
        let mut tx = self.pool.begin().await?;

        let aluguel = sqlx::query_as::<_, Aluguel>(
            r#"
            UPDATE alugueis
            SET data_fim = $2, finalizado = TRUE
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data_fim)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE veiculos SET disponivel = TRUE WHERE id = $1")
            .bind(veiculo_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(aluguel)
    }
}
