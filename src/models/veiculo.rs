//! Modelo de Veículo
//!
//! Mapeia a tabela `veiculos`, incluindo os campos específicos de cada
//! tipo (carro, moto, caminhão) como colunas opcionais.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo do veículo - mapeia o ENUM tipo_veiculo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "tipo_veiculo")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoVeiculo {
    #[sqlx(rename = "CARRO")]
    Carro,
    #[sqlx(rename = "MOTO")]
    Moto,
    #[sqlx(rename = "CAMINHAO")]
    Caminhao,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Veiculo {
    pub id: Uuid,
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub cor: String,
    pub valor_diaria: Decimal,
    pub tipo: TipoVeiculo,
    pub disponivel: bool,
    pub categoria_id: Uuid,
    pub numero_portas: Option<i32>,
    pub possui_ar_condicionado: Option<bool>,
    pub cilindradas: Option<i32>,
    pub bau: Option<bool>,
    pub capacidade_carga: Option<Decimal>,
    pub criado_em: DateTime<Utc>,
}
