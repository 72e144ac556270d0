use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cliente::Cliente;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: String,
        cpf: String,
        email: String,
        telefone: String,
        endereco: String,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (id, nome, cpf, email, telefone, endereco, ativo, criado_em)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(cpf)
        .bind(email)
        .bind(telefone)
        .bind(endereco)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "CPF já cadastrado no sistema"))?;

        Ok(cliente)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn find_all_ativos(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes WHERE ativo ORDER BY nome ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn cpf_exists(&self, cpf: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clientes WHERE cpf = $1)")
                .bind(cpf)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nome: Option<String>,
        email: Option<String>,
        telefone: Option<String>,
        endereco: Option<String>,
        ativo: Option<bool>,
    ) -> Result<Cliente, AppError> {
        let atual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nome = $2, email = $3, telefone = $4, endereco = $5, ativo = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome.unwrap_or(atual.nome))
        .bind(email.unwrap_or(atual.email))
        .bind(telefone.unwrap_or(atual.telefone))
        .bind(endereco.unwrap_or(atual.endereco))
        .bind(ativo.unwrap_or(atual.ativo))
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    /// Soft delete: o cliente sai das listagens mas a linha permanece
    pub async fn desativar(&self, id: Uuid) -> Result<Cliente, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        let cliente = sqlx::query_as::<_, Cliente>(
            "UPDATE clientes SET ativo = FALSE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }
}
