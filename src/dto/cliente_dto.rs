use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClienteRequest {
    #[validate(length(min = 1, message = "Nome é obrigatório"))]
    pub nome: String,

    #[validate(length(equal = 11, message = "CPF deve ter 11 dígitos"))]
    pub cpf: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "Telefone é obrigatório"))]
    pub telefone: String,

    #[validate(length(min = 1, message = "Endereço é obrigatório"))]
    pub endereco: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClienteRequest {
    #[validate(length(min = 1))]
    pub nome: Option<String>,

    #[validate(email(message = "E-mail inválido"))]
    pub email: Option<String>,

    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub ativo: Option<bool>,
}
