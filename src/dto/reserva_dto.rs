use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::cliente::Cliente;
use crate::models::funcionario::Funcionario;
use crate::models::veiculo::Veiculo;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservaRequest {
    pub data_inicio: DateTime<Utc>,

    pub data_fim: DateTime<Utc>,

    pub cliente_id: Uuid,

    pub funcionario_id: Uuid,

    #[validate(length(min = 1, message = "Deve haver pelo menos um veículo"))]
    pub veiculo_ids: Vec<Uuid>,
}

/// Reserva com as associações populadas
#[derive(Debug, Serialize)]
pub struct ReservaResponse {
    pub id: Uuid,
    pub data_reserva: DateTime<Utc>,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: DateTime<Utc>,
    pub cancelada: bool,
    pub cliente: Cliente,
    pub funcionario: Funcionario,
    pub veiculos: Vec<Veiculo>,
}
