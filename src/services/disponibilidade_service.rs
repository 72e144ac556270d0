//! Verificação de disponibilidade de veículos
//!
//! Decide se um veículo pode ser reservado para um período: o veículo
//! precisa estar com a flag `disponivel` ligada e não pode ter nenhuma
//! reserva não cancelada cujo período conflite com o solicitado.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repositories::reserva_repository::ReservaRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;

pub struct DisponibilidadeService {
    veiculos: VeiculoRepository,
    reservas: ReservaRepository,
}

impl DisponibilidadeService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            veiculos: VeiculoRepository::new(pool.clone()),
            reservas: ReservaRepository::new(pool),
        }
    }

    /// Leitura pura, sem efeitos colaterais. A flag desligada encerra a
    /// verificação antes da consulta de conflitos: veículo sob aluguel
    /// ativo nunca está disponível.
    pub async fn verificar(
        &self,
        veiculo_id: Uuid,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let veiculo = self
            .veiculos
            .find_by_id(veiculo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        if !veiculo.disponivel {
            return Ok(false);
        }

        let conflitos = self.reservas.contar_conflitos(veiculo_id, inicio, fim).await?;

        Ok(conflitos == 0)
    }
}
