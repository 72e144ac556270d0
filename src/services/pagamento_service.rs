//! Registro de pagamentos
//!
//! Exatamente um pagamento por aluguel, criado antes da finalização e com
//! valor que cubra o total. A finalização do aluguel depende desse
//! registro existir.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::pagamento_dto::{CreatePagamentoRequest, PagamentoResponse};
use crate::models::aluguel::Aluguel;
use crate::models::pagamento::Pagamento;
use crate::repositories::aluguel_repository::AluguelRepository;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::pagamento_repository::PagamentoRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;

pub struct PagamentoService {
    pagamentos: PagamentoRepository,
    alugueis: AluguelRepository,
    clientes: ClienteRepository,
    veiculos: VeiculoRepository,
}

/// Guardas de registro: duplicidade é conflito (409), aluguel fechado e
/// valor insuficiente são violações de regra de negócio (400).
fn validar_registro(
    aluguel: &Aluguel,
    ja_tem_pagamento: bool,
    valor: Decimal,
) -> Result<(), AppError> {
    if ja_tem_pagamento {
        return Err(AppError::Conflict(
            "Aluguel já possui pagamento registrado".to_string(),
        ));
    }

    if aluguel.finalizado {
        return Err(AppError::BadRequest(
            "Não é possível registrar pagamento para aluguel finalizado".to_string(),
        ));
    }

    if valor.is_sign_negative() {
        return Err(AppError::BadRequest("Valor deve ser positivo".to_string()));
    }

    if valor < aluguel.valor_total {
        return Err(AppError::BadRequest(format!(
            "Valor do pagamento (R$ {}) é inferior ao valor total do aluguel (R$ {})",
            valor, aluguel.valor_total
        )));
    }

    Ok(())
}

impl PagamentoService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pagamentos: PagamentoRepository::new(pool.clone()),
            alugueis: AluguelRepository::new(pool.clone()),
            clientes: ClienteRepository::new(pool.clone()),
            veiculos: VeiculoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreatePagamentoRequest,
    ) -> Result<PagamentoResponse, AppError> {
        let aluguel = self
            .alugueis
            .find_by_id(request.aluguel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aluguel não encontrado".to_string()))?;

        let ja_tem_pagamento = self
            .pagamentos
            .find_por_aluguel(request.aluguel_id)
            .await?
            .is_some();

        validar_registro(&aluguel, ja_tem_pagamento, request.valor)?;

        let pagamento = self
            .pagamentos
            .create(request.tipo, request.valor, request.aluguel_id)
            .await?;

        tracing::info!(
            pagamento_id = %pagamento.id,
            aluguel_id = %request.aluguel_id,
            valor = %request.valor,
            "Pagamento registrado"
        );

        self.montar_resposta(pagamento, aluguel).await
    }

    pub async fn find_all(&self) -> Result<Vec<PagamentoResponse>, AppError> {
        let pagamentos = self.pagamentos.find_all().await?;

        let mut respostas = Vec::with_capacity(pagamentos.len());
        for pagamento in pagamentos {
            let aluguel = self
                .alugueis
                .find_by_id(pagamento.aluguel_id)
                .await?
                .ok_or_else(|| AppError::Internal("Aluguel do pagamento ausente".to_string()))?;
            respostas.push(self.montar_resposta(pagamento, aluguel).await?);
        }

        Ok(respostas)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<PagamentoResponse, AppError> {
        let pagamento = self
            .pagamentos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pagamento não encontrado".to_string()))?;

        let aluguel = self
            .alugueis
            .find_by_id(pagamento.aluguel_id)
            .await?
            .ok_or_else(|| AppError::Internal("Aluguel do pagamento ausente".to_string()))?;

        self.montar_resposta(pagamento, aluguel).await
    }

    /// Zero ou um pagamento por aluguel; devolve o aluguel validado antes
    pub async fn find_por_aluguel(
        &self,
        aluguel_id: Uuid,
    ) -> Result<Option<PagamentoResponse>, AppError> {
        let aluguel = self
            .alugueis
            .find_by_id(aluguel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aluguel não encontrado".to_string()))?;

        match self.pagamentos.find_por_aluguel(aluguel_id).await? {
            Some(pagamento) => Ok(Some(self.montar_resposta(pagamento, aluguel).await?)),
            None => Ok(None),
        }
    }

    async fn montar_resposta(
        &self,
        pagamento: Pagamento,
        aluguel: Aluguel,
    ) -> Result<PagamentoResponse, AppError> {
        let cliente = self
            .clientes
            .find_by_id(aluguel.cliente_id)
            .await?
            .ok_or_else(|| AppError::Internal("Cliente do aluguel ausente".to_string()))?;

        let veiculo = self
            .veiculos
            .find_by_id(aluguel.veiculo_id)
            .await?
            .ok_or_else(|| AppError::Internal("Veículo do aluguel ausente".to_string()))?;

        Ok(PagamentoResponse {
            id: pagamento.id,
            tipo: pagamento.tipo,
            valor: pagamento.valor,
            data_pagamento: pagamento.data_pagamento,
            aluguel,
            cliente,
            veiculo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn aluguel_base() -> Aluguel {
        Aluguel {
            id: Uuid::new_v4(),
            data_inicio: Utc.with_ymd_and_hms(2025, 6, 3, 10, 0, 0).unwrap(),
            data_fim: None,
            valor_total: dec!(160.00),
            finalizado: false,
            reserva_id: Uuid::new_v4(),
            cliente_id: Uuid::new_v4(),
            veiculo_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn pagamento_exato_passa() {
        assert!(validar_registro(&aluguel_base(), false, dec!(160.00)).is_ok());
    }

    #[test]
    fn pagamento_acima_do_total_passa() {
        assert!(validar_registro(&aluguel_base(), false, dec!(200.00)).is_ok());
    }

    #[test]
    fn pagamento_insuficiente_falha() {
        let err = validar_registro(&aluguel_base(), false, dec!(159.99)).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("inferior")),
            other => panic!("erro inesperado: {other}"),
        }
    }

    #[test]
    fn pagamento_negativo_falha() {
        let err = validar_registro(&aluguel_base(), false, dec!(-10.00)).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn pagamento_duplicado_e_conflito() {
        let err = validar_registro(&aluguel_base(), true, dec!(160.00)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn pagamento_para_aluguel_finalizado_falha() {
        let aluguel = Aluguel {
            finalizado: true,
            ..aluguel_base()
        };
        let err = validar_registro(&aluguel, false, dec!(160.00)).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("finalizado")),
            other => panic!("erro inesperado: {other}"),
        }
    }
}
