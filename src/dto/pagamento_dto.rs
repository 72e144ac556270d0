use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::aluguel::Aluguel;
use crate::models::cliente::Cliente;
use crate::models::pagamento::TipoPagamento;
use crate::models::veiculo::Veiculo;

#[derive(Debug, Deserialize)]
pub struct CreatePagamentoRequest {
    pub tipo: TipoPagamento,

    pub valor: Decimal,

    pub aluguel_id: Uuid,
}

/// Pagamento com o aluguel e suas partes populados
#[derive(Debug, Serialize)]
pub struct PagamentoResponse {
    pub id: Uuid,
    pub tipo: TipoPagamento,
    pub valor: Decimal,
    pub data_pagamento: DateTime<Utc>,
    pub aluguel: Aluguel,
    pub cliente: Cliente,
    pub veiculo: Veiculo,
}
