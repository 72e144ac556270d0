use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::funcionario::Funcionario;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct FuncionarioRepository {
    pool: PgPool,
}

impl FuncionarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nome: String,
        matricula: String,
        cargo: String,
        telefone: String,
    ) -> Result<Funcionario, AppError> {
        let funcionario = sqlx::query_as::<_, Funcionario>(
            r#"
            INSERT INTO funcionarios (id, nome, matricula, cargo, telefone, ativo, criado_em)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(matricula)
        .bind(cargo)
        .bind(telefone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Matrícula já cadastrada no sistema"))?;

        Ok(funcionario)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Funcionario>, AppError> {
        let funcionario =
            sqlx::query_as::<_, Funcionario>("SELECT * FROM funcionarios WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(funcionario)
    }

    pub async fn find_all_ativos(&self) -> Result<Vec<Funcionario>, AppError> {
        let funcionarios = sqlx::query_as::<_, Funcionario>(
            "SELECT * FROM funcionarios WHERE ativo ORDER BY nome ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(funcionarios)
    }

    pub async fn matricula_exists(&self, matricula: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM funcionarios WHERE matricula = $1)")
                .bind(matricula)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nome: Option<String>,
        cargo: Option<String>,
        telefone: Option<String>,
        ativo: Option<bool>,
    ) -> Result<Funcionario, AppError> {
        let atual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Funcionário não encontrado".to_string()))?;

        let funcionario = sqlx::query_as::<_, Funcionario>(
            r#"
            UPDATE funcionarios
            SET nome = $2, cargo = $3, telefone = $4, ativo = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nome.unwrap_or(atual.nome))
        .bind(cargo.unwrap_or(atual.cargo))
        .bind(telefone.unwrap_or(atual.telefone))
        .bind(ativo.unwrap_or(atual.ativo))
        .fetch_one(&self.pool)
        .await?;

        Ok(funcionario)
    }

    pub async fn desativar(&self, id: Uuid) -> Result<Funcionario, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Funcionário não encontrado".to_string()))?;

        let funcionario = sqlx::query_as::<_, Funcionario>(
            "UPDATE funcionarios SET ativo = FALSE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(funcionario)
    }
}
