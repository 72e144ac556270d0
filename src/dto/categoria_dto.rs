use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoriaRequest {
    #[validate(length(min = 1, message = "Nome é obrigatório"))]
    pub nome: String,

    #[validate(length(min = 1, message = "Descrição é obrigatória"))]
    pub descricao: String,
}
