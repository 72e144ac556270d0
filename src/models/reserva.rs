//! Modelos de Reserva
//!
//! Uma reserva liga um cliente e um funcionário a um ou mais veículos por
//! um período. A linha de junção `reserva_veiculos` permite múltiplos
//! veículos na mesma reserva.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reserva {
    pub id: Uuid,
    pub data_reserva: DateTime<Utc>,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: DateTime<Utc>,
    pub cancelada: bool,
    pub cliente_id: Uuid,
    pub funcionario_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservaVeiculo {
    pub id: Uuid,
    pub reserva_id: Uuid,
    pub veiculo_id: Uuid,
}
