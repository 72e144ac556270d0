//! Conversão de reserva em aluguel e finalização
//!
//! A conversão recalcula o valor total a partir do período da reserva e da
//! diária do veículo, e bloqueia o veículo enquanto o aluguel estiver
//! ativo. A finalização só passa com pagamento registrado que cubra o
//! total, e devolve o veículo ao estoque disponível.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::aluguel_dto::{AluguelResponse, CreateAluguelRequest, FinalizarAluguelRequest};
use crate::models::aluguel::Aluguel;
use crate::models::veiculo::Veiculo;
use crate::repositories::aluguel_repository::AluguelRepository;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::pagamento_repository::PagamentoRepository;
use crate::repositories::reserva_repository::ReservaRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::services::reserva_service::ReservaService;
use crate::utils::datas::diarias_cobradas;
use crate::utils::errors::AppError;

pub struct AluguelService {
    alugueis: AluguelRepository,
    reservas: ReservaRepository,
    clientes: ClienteRepository,
    veiculos: VeiculoRepository,
    pagamentos: PagamentoRepository,
    reserva_service: ReservaService,
}

/// Valor total do aluguel: diárias (teto, mínimo de uma) vezes a diária do
/// veículo.
fn calcular_valor_total(
    inicio: DateTime<Utc>,
    fim: DateTime<Utc>,
    valor_diaria: Decimal,
) -> Decimal {
    Decimal::from(diarias_cobradas(inicio, fim)) * valor_diaria
}

/// O veículo escolhido precisa fazer parte da reserva que origina o
/// aluguel.
fn veiculo_esta_na_reserva(veiculos: &[Veiculo], veiculo_id: Uuid) -> bool {
    veiculos.iter().any(|v| v.id == veiculo_id)
}

/// Guardas de finalização, na ordem em que o chamador as percebe:
/// aluguel já fechado, pagamento ausente, data de devolução inválida.
fn validar_finalizacao(
    aluguel: &Aluguel,
    tem_pagamento: bool,
    data_fim: DateTime<Utc>,
) -> Result<(), AppError> {
    if aluguel.finalizado {
        return Err(AppError::BadRequest("Aluguel já está finalizado".to_string()));
    }

    if !tem_pagamento {
        return Err(AppError::BadRequest(
            "Aluguel não pode ser finalizado sem pagamento".to_string(),
        ));
    }

    if data_fim < aluguel.data_inicio {
        return Err(AppError::BadRequest(
            "Data de fim não pode ser anterior à data de início".to_string(),
        ));
    }

    Ok(())
}

impl AluguelService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            alugueis: AluguelRepository::new(pool.clone()),
            reservas: ReservaRepository::new(pool.clone()),
            clientes: ClienteRepository::new(pool.clone()),
            veiculos: VeiculoRepository::new(pool.clone()),
            pagamentos: PagamentoRepository::new(pool.clone()),
            reserva_service: ReservaService::new(pool),
        }
    }

    pub async fn create(&self, request: CreateAluguelRequest) -> Result<AluguelResponse, AppError> {
        let reserva = self
            .reserva_service
            .validar_para_aluguel(request.reserva_id)
            .await?;

        let veiculos_da_reserva = self.veiculos.find_por_reserva(reserva.id).await?;
        if !veiculo_esta_na_reserva(&veiculos_da_reserva, request.veiculo_id) {
            return Err(AppError::BadRequest(
                "Veículo não está incluído nesta reserva".to_string(),
            ));
        }

        // Exclusividade entre reservas: o veículo pode ter várias reservas
        // históricas, mas no máximo um aluguel ativo
        if self.alugueis.existe_ativo_por_veiculo(request.veiculo_id).await? {
            return Err(AppError::BadRequest(
                "Veículo já possui aluguel ativo".to_string(),
            ));
        }

        let veiculo = self
            .veiculos
            .find_by_id(request.veiculo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        let valor_total =
            calcular_valor_total(reserva.data_inicio, reserva.data_fim, veiculo.valor_diaria);
        let data_inicio = request.data_inicio.unwrap_or(reserva.data_inicio);

        let aluguel = self
            .alugueis
            .criar_e_bloquear_veiculo(
                data_inicio,
                valor_total,
                reserva.id,
                reserva.cliente_id,
                request.veiculo_id,
            )
            .await?;

        tracing::info!(
            aluguel_id = %aluguel.id,
            veiculo_id = %request.veiculo_id,
            %valor_total,
            "Reserva convertida em aluguel"
        );

        self.montar_resposta(aluguel).await
    }

    pub async fn find_all(&self) -> Result<Vec<AluguelResponse>, AppError> {
        let alugueis = self.alugueis.find_all().await?;

        let mut respostas = Vec::with_capacity(alugueis.len());
        for aluguel in alugueis {
            respostas.push(self.montar_resposta(aluguel).await?);
        }

        Ok(respostas)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<AluguelResponse, AppError> {
        let aluguel = self
            .alugueis
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aluguel não encontrado".to_string()))?;

        self.montar_resposta(aluguel).await
    }

    pub async fn finalizar(
        &self,
        id: Uuid,
        request: FinalizarAluguelRequest,
    ) -> Result<AluguelResponse, AppError> {
        let aluguel = self
            .alugueis
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Aluguel não encontrado".to_string()))?;

        let tem_pagamento = self.pagamentos.find_por_aluguel(id).await?.is_some();

        validar_finalizacao(&aluguel, tem_pagamento, request.data_fim)?;

        let finalizado = self
            .alugueis
            .finalizar_e_liberar_veiculo(id, request.data_fim, aluguel.veiculo_id)
            .await?;

        tracing::info!(
            aluguel_id = %id,
            veiculo_id = %aluguel.veiculo_id,
            "Aluguel finalizado, veículo liberado"
        );

        self.montar_resposta(finalizado).await
    }

    async fn montar_resposta(&self, aluguel: Aluguel) -> Result<AluguelResponse, AppError> {
        let reserva = self
            .reservas
            .find_by_id(aluguel.reserva_id)
            .await?
            .ok_or_else(|| AppError::Internal("Reserva do aluguel ausente".to_string()))?;

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

        let pagamento = self.pagamentos.find_por_aluguel(aluguel.id).await?;

        Ok(AluguelResponse {
            id: aluguel.id,
            data_inicio: aluguel.data_inicio,
            data_fim: aluguel.data_fim,
            valor_total: aluguel.valor_total,
            finalizado: aluguel.finalizado,
            reserva,
            cliente,
            veiculo,
            pagamento,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::veiculo::TipoVeiculo;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn dia(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, 10, 0, 0).unwrap()
    }

    fn veiculo(id: Uuid, modelo: &str) -> Veiculo {
        Veiculo {
            id,
            placa: "ABC1234".to_string(),
            marca: "Volkswagen".to_string(),
            modelo: modelo.to_string(),
            ano: 2022,
            cor: "Branco".to_string(),
            valor_diaria: dec!(80.00),
            tipo: TipoVeiculo::Carro,
            disponivel: true,
            categoria_id: Uuid::new_v4(),
            numero_portas: Some(4),
            possui_ar_condicionado: Some(true),
            cilindradas: None,
            bau: None,
            capacidade_carga: None,
            criado_em: dia(1),
        }
    }

    fn aluguel_base() -> Aluguel {
        Aluguel {
            id: Uuid::new_v4(),
            data_inicio: dia(3),
            data_fim: None,
            valor_total: dec!(160.00),
            finalizado: false,
            reserva_id: Uuid::new_v4(),
            cliente_id: Uuid::new_v4(),
            veiculo_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn valor_total_duas_diarias() {
        // Reserva de dois dias a R$ 80,00 por dia
        assert_eq!(calcular_valor_total(dia(3), dia(5), dec!(80.00)), dec!(160.00));
    }

    #[test]
    fn valor_total_arredonda_diaria_parcial() {
        let fim = dia(3) + Duration::days(1) + Duration::hours(2);
        assert_eq!(calcular_valor_total(dia(3), fim, dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn valor_total_minimo_uma_diaria() {
        let fim = dia(3) + Duration::hours(4);
        assert_eq!(calcular_valor_total(dia(3), fim, dec!(90.00)), dec!(90.00));
    }

    #[test]
    fn veiculo_fora_da_reserva_nao_passa() {
        let v1 = Uuid::new_v4();
        let veiculos = vec![veiculo(v1, "Gol")];
        assert!(veiculo_esta_na_reserva(&veiculos, v1));
        assert!(!veiculo_esta_na_reserva(&veiculos, Uuid::new_v4()));
    }

    #[test]
    fn finalizacao_valida_passa() {
        assert!(validar_finalizacao(&aluguel_base(), true, dia(5)).is_ok());
    }

    #[test]
    fn finalizacao_repetida_falha() {
        let aluguel = Aluguel {
            finalizado: true,
            ..aluguel_base()
        };
        let err = validar_finalizacao(&aluguel, true, dia(5)).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("finalizado")),
            other => panic!("erro inesperado: {other}"),
        }
    }

    #[test]
    fn finalizacao_sem_pagamento_falha() {
        let err = validar_finalizacao(&aluguel_base(), false, dia(5)).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("pagamento")),
            other => panic!("erro inesperado: {other}"),
        }
    }

    #[test]
    fn finalizacao_com_data_anterior_ao_inicio_falha() {
        let err = validar_finalizacao(&aluguel_base(), true, dia(2)).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("anterior")),
            other => panic!("erro inesperado: {other}"),
        }
    }

    #[test]
    fn finalizacao_no_proprio_dia_de_inicio_passa() {
        assert!(validar_finalizacao(&aluguel_base(), true, dia(3)).is_ok());
    }
}
