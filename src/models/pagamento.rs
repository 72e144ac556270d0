use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Forma de pagamento - mapeia o ENUM tipo_pagamento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "tipo_pagamento")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoPagamento {
    #[sqlx(rename = "DINHEIRO")]
    Dinheiro,
    #[sqlx(rename = "CARTAO_CREDITO")]
    CartaoCredito,
    #[sqlx(rename = "CARTAO_DEBITO")]
    CartaoDebito,
    #[sqlx(rename = "PIX")]
    Pix,
}

/// Registro de pagamento, exatamente um por aluguel
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pagamento {
    pub id: Uuid,
    pub tipo: TipoPagamento,
    pub valor: Decimal,
    pub data_pagamento: DateTime<Utc>,
    pub aluguel_id: Uuid,
}
