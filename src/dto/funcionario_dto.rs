use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuncionarioRequest {
    #[validate(length(min = 1, message = "Nome é obrigatório"))]
    pub nome: String,

    #[validate(length(min = 1, message = "Matrícula é obrigatória"))]
    pub matricula: String,

    #[validate(length(min = 1, message = "Cargo é obrigatório"))]
    pub cargo: String,

    #[validate(length(min = 1, message = "Telefone é obrigatório"))]
    pub telefone: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFuncionarioRequest {
    #[validate(length(min = 1))]
    pub nome: Option<String>,

    pub cargo: Option<String>,
    pub telefone: Option<String>,
    pub ativo: Option<bool>,
}
