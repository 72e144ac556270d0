use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::cliente::Cliente;
use crate::models::pagamento::Pagamento;
use crate::models::reserva::Reserva;
use crate::models::veiculo::Veiculo;

#[derive(Debug, Deserialize)]
pub struct CreateAluguelRequest {
    pub reserva_id: Uuid,

    pub veiculo_id: Uuid,

    /// Data de retirada; quando ausente vale a data de início da reserva
    pub data_inicio: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct FinalizarAluguelRequest {
    pub data_fim: DateTime<Utc>,
}

/// Aluguel com as associações populadas
#[derive(Debug, Serialize)]
pub struct AluguelResponse {
    pub id: Uuid,
    pub data_inicio: DateTime<Utc>,
    pub data_fim: Option<DateTime<Utc>>,
    pub valor_total: Decimal,
    pub finalizado: bool,
    pub reserva: Reserva,
    pub cliente: Cliente,
    pub veiculo: Veiculo,
    pub pagamento: Option<Pagamento>,
}
