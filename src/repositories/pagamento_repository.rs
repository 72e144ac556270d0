use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::pagamento::{Pagamento, TipoPagamento};
use crate::utils::errors::{map_unique_violation, AppError};

pub struct PagamentoRepository {
    pool: PgPool,
}

impl PagamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A constraint UNIQUE em aluguel_id garante no máximo um pagamento por
    /// aluguel mesmo sob requisições concorrentes.
    pub async fn create(
        &self,
        tipo: TipoPagamento,
        valor: Decimal,
        aluguel_id: Uuid,
    ) -> Result<Pagamento, AppError> {
        let pagamento = sqlx::query_as::<_, Pagamento>(
            r#"
            INSERT INTO pagamentos (id, tipo, valor, data_pagamento, aluguel_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tipo)
        .bind(valor)
        .bind(Utc::now())
        .bind(aluguel_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Aluguel já possui pagamento registrado"))?;

        Ok(pagamento)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Pagamento>, AppError> {
        let pagamento = sqlx::query_as::<_, Pagamento>("SELECT * FROM pagamentos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pagamento)
    }

    pub async fn find_all(&self) -> Result<Vec<Pagamento>, AppError> {
        let pagamentos = sqlx::query_as::<_, Pagamento>(
            "SELECT * FROM pagamentos ORDER BY data_pagamento DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pagamentos)
    }

    /// Zero ou um resultado, pela constraint 1:1
    pub async fn find_por_aluguel(&self, aluguel_id: Uuid) -> Result<Option<Pagamento>, AppError> {
        let pagamento =
            sqlx::query_as::<_, Pagamento>("SELECT * FROM pagamentos WHERE aluguel_id = $1")
                .bind(aluguel_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(pagamento)
    }
}
