use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Categoria {
    pub id: Uuid,
    pub nome: String,
    pub descricao: String,
    pub criado_em: DateTime<Utc>,
}
