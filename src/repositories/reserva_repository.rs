use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::reserva::Reserva;
use crate::utils::errors::AppError;

pub struct ReservaRepository {
    pool: PgPool,
}

impl ReservaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere a reserva e uma linha de junção por veículo na mesma
    /// transação. Ou todas as linhas entram ou nenhuma entra.
    pub async fn criar_com_veiculos(
        &self,
        data_inicio: DateTime<Utc>,
        data_fim: DateTime<Utc>,
        cliente_id: Uuid,
        funcionario_id: Uuid,
        veiculo_ids: &[Uuid],
    ) -> Result<Reserva, AppError> {
        let mut tx = self.pool.begin().await?;

        let reserva = sqlx::query_as::<_, Reserva>(
            r#"
            INSERT INTO reservas (id, data_reserva, data_inicio, data_fim, cancelada, cliente_id, funcionario_id)
            VALUES ($1, $2, $3, $4, FALSE, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Utc::now())
        .bind(data_inicio)
        .bind(data_fim)
        .bind(cliente_id)
        .bind(funcionario_id)
        .fetch_one(&mut *tx)
        .await?;

        for veiculo_id in veiculo_ids {
            sqlx::query(
                "INSERT INTO reserva_veiculos (id, reserva_id, veiculo_id) VALUES ($1, $2, $3)",
            )
            .bind(Uuid::new_v4())
            .bind(reserva.id)
            .bind(veiculo_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(reserva)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reserva>, AppError> {
        let reserva = sqlx::query_as::<_, Reserva>("SELECT * FROM reservas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(reserva)
    }

    pub async fn find_all(&self) -> Result<Vec<Reserva>, AppError> {
        let reservas =
            sqlx::query_as::<_, Reserva>("SELECT * FROM reservas ORDER BY data_reserva DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(reservas)
    }

    pub async fn cancelar(&self, id: Uuid) -> Result<Reserva, AppError> {
        let reserva = sqlx::query_as::<_, Reserva>(
            "UPDATE reservas SET cancelada = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(reserva)
    }

    /// Conta reservas não canceladas do veículo cujo período conflita com
    /// `[inicio, fim]`. Os três ramos do OR cobrem extremidade inicial
    /// dentro, extremidade final dentro e contenção completa, com limites
    /// inclusivos: períodos que se tocam na fronteira conflitam.
    pub async fn contar_conflitos(
        &self,
        veiculo_id: Uuid,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM reservas r
            JOIN reserva_veiculos rv ON rv.reserva_id = r.id
            WHERE rv.veiculo_id = $1
              AND NOT r.cancelada
              AND (
                    (r.data_inicio <= $2 AND r.data_fim >= $2)
                 OR (r.data_inicio <= $3 AND r.data_fim >= $3)
                 OR (r.data_inicio >= $2 AND r.data_fim <= $3)
              )
            "#,
        )
        .bind(veiculo_id)
        .bind(inicio)
        .bind(fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
