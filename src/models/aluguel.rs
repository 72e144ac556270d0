//! Modelo de Aluguel
//!
//! Um aluguel nasce de exatamente uma reserva e ocupa exatamente um
//! veículo. Enquanto `finalizado` for falso o veículo fica indisponível.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Aluguel {
    pub id: Uuid,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: Option<DateTime<Utc>>,
    pub valor_total: Decimal,
    pub finalizado: bool,
    pub reserva_id: Uuid,
    pub cliente_id: Uuid,
    pub veiculo_id: Uuid,
}
