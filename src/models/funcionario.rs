use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Funcionario {
    pub id: Uuid,
    pub nome: String,
    pub matricula: String,
    pub cargo: String,
    pub telefone: String,
    pub ativo: bool,
    pub criado_em: DateTime<Utc>,
}
