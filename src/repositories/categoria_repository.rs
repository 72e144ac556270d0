use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::categoria::Categoria;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct CategoriaRepository {
    pool: PgPool,
}

impl CategoriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, nome: String, descricao: String) -> Result<Categoria, AppError> {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            INSERT INTO categorias (id, nome, descricao, criado_em)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(descricao)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Categoria já cadastrada"))?;

        Ok(categoria)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Categoria>, AppError> {
        let categoria = sqlx::query_as::<_, Categoria>("SELECT * FROM categorias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(categoria)
    }

    pub async fn find_all(&self) -> Result<Vec<Categoria>, AppError> {
        let categorias =
            sqlx::query_as::<_, Categoria>("SELECT * FROM categorias ORDER BY nome ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(categorias)
    }

    pub async fn nome_exists(&self, nome: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categorias WHERE nome = $1)")
                .bind(nome)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }
}
