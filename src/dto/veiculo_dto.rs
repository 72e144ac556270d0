use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::veiculo::TipoVeiculo;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVeiculoRequest {
    #[validate(length(min = 1, message = "Placa é obrigatória"))]
    pub placa: String,

    #[validate(length(min = 1, message = "Marca é obrigatória"))]
    pub marca: String,

    #[validate(length(min = 1, message = "Modelo é obrigatório"))]
    pub modelo: String,

    #[validate(range(min = 1900, message = "Ano inválido"))]
    pub ano: i32,

    #[validate(length(min = 1, message = "Cor é obrigatória"))]
    pub cor: String,

    pub valor_diaria: Decimal,

    pub tipo: TipoVeiculo,

    pub categoria_id: Uuid,

    // Campos específicos para CARRO
    pub numero_portas: Option<i32>,
    pub possui_ar_condicionado: Option<bool>,

    // Campos específicos para MOTO
    pub cilindradas: Option<i32>,
    pub bau: Option<bool>,

    // Campos específicos para CAMINHAO
    pub capacidade_carga: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVeiculoRequest {
    pub marca: Option<String>,
    pub modelo: Option<String>,

    #[validate(range(min = 1900, message = "Ano inválido"))]
    pub ano: Option<i32>,

    pub cor: Option<String>,
    pub valor_diaria: Option<Decimal>,
    pub disponivel: Option<bool>,
    pub categoria_id: Option<Uuid>,
    pub numero_portas: Option<i32>,
    pub possui_ar_condicionado: Option<bool>,
    pub cilindradas: Option<i32>,
    pub bau: Option<bool>,
    pub capacidade_carga: Option<Decimal>,
}

/// Filtros de listagem de veículos
#[derive(Debug, Deserialize)]
pub struct VeiculoFiltros {
    pub tipo: Option<TipoVeiculo>,
    pub disponivel: Option<bool>,
}
