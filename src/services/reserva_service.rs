//! Ciclo de vida de reservas
//!
//! Criação com validação de período, cliente, funcionário ativo e
//! disponibilidade de cada veículo; cancelamento com as devidas guardas;
//! e a validação usada pela conversão em aluguel.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::reserva_dto::{CreateReservaRequest, ReservaResponse};
use crate::models::reserva::Reserva;
use crate::repositories::aluguel_repository::AluguelRepository;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::funcionario_repository::FuncionarioRepository;
use crate::repositories::reserva_repository::ReservaRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::services::disponibilidade_service::DisponibilidadeService;
use crate::utils::errors::AppError;

pub struct ReservaService {
    reservas: ReservaRepository,
    clientes: ClienteRepository,
    funcionarios: FuncionarioRepository,
    veiculos: VeiculoRepository,
    alugueis: AluguelRepository,
    disponibilidade: DisponibilidadeService,
}

/// Período solicitado deve começar antes de terminar e não pode começar
/// antes do instante da criação.
fn validar_periodo(
    inicio: DateTime<Utc>,
    fim: DateTime<Utc>,
    agora: DateTime<Utc>,
) -> Result<(), AppError> {
    if inicio >= fim {
        return Err(AppError::BadRequest(
            "Data de início deve ser anterior à data de fim".to_string(),
        ));
    }

    if inicio < agora {
        return Err(AppError::BadRequest(
            "Data de início não pode ser no passado".to_string(),
        ));
    }

    Ok(())
}

/// Guardas de cancelamento: reserva cancelada não cancela de novo e
/// reserva com aluguel associado não cancela nunca.
fn validar_cancelamento(reserva: &Reserva, tem_aluguel: bool) -> Result<(), AppError> {
    if reserva.cancelada {
        return Err(AppError::BadRequest("Reserva já está cancelada".to_string()));
    }

    if tem_aluguel {
        return Err(AppError::BadRequest(
            "Não é possível cancelar reserva com aluguel associado".to_string(),
        ));
    }

    Ok(())
}

impl ReservaService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reservas: ReservaRepository::new(pool.clone()),
            clientes: ClienteRepository::new(pool.clone()),
            funcionarios: FuncionarioRepository::new(pool.clone()),
            veiculos: VeiculoRepository::new(pool.clone()),
            alugueis: AluguelRepository::new(pool.clone()),
            disponibilidade: DisponibilidadeService::new(pool),
        }
    }

    pub async fn create(&self, request: CreateReservaRequest) -> Result<ReservaResponse, AppError> {
        request.validate()?;

        validar_periodo(request.data_inicio, request.data_fim, Utc::now())?;

        self.clientes
            .find_by_id(request.cliente_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))?;

        let funcionario = self
            .funcionarios
            .find_by_id(request.funcionario_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Funcionário não encontrado".to_string()))?;

        if !funcionario.ativo {
            return Err(AppError::BadRequest(
                "Funcionário inativo não pode realizar operações".to_string(),
            ));
        }

        // Avalia os veículos na ordem enviada; a primeira indisponibilidade
        // derruba a criação inteira
        for veiculo_id in &request.veiculo_ids {
            let disponivel = self
                .disponibilidade
                .verificar(*veiculo_id, request.data_inicio, request.data_fim)
                .await?;

            if !disponivel {
                let veiculo = self
                    .veiculos
                    .find_by_id(*veiculo_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

                return Err(AppError::BadRequest(format!(
                    "Veículo {} não disponível para o período selecionado",
                    veiculo.modelo
                )));
            }
        }

        let reserva = self
            .reservas
            .criar_com_veiculos(
                request.data_inicio,
                request.data_fim,
                request.cliente_id,
                request.funcionario_id,
                &request.veiculo_ids,
            )
            .await?;

        tracing::info!(
            reserva_id = %reserva.id,
            veiculos = request.veiculo_ids.len(),
            "Reserva criada"
        );

        self.montar_resposta(reserva).await
    }

    pub async fn find_all(&self) -> Result<Vec<ReservaResponse>, AppError> {
        let reservas = self.reservas.find_all().await?;

        let mut respostas = Vec::with_capacity(reservas.len());
        for reserva in reservas {
            respostas.push(self.montar_resposta(reserva).await?);
        }

        Ok(respostas)
    }

    pub async fn find_one(&self, id: Uuid) -> Result<ReservaResponse, AppError> {
        let reserva = self
            .reservas
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada".to_string()))?;

        self.montar_resposta(reserva).await
    }

    pub async fn cancelar(&self, id: Uuid) -> Result<ReservaResponse, AppError> {
        let reserva = self
            .reservas
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada".to_string()))?;

        let tem_aluguel = self.alugueis.find_por_reserva(id).await?.is_some();

        validar_cancelamento(&reserva, tem_aluguel)?;

        let cancelada = self.reservas.cancelar(id).await?;

        tracing::info!(reserva_id = %id, "Reserva cancelada");

        self.montar_resposta(cancelada).await
    }

    /// Usada pela conversão em aluguel: reserva cancelada ou já convertida
    /// não pode gerar aluguel.
    pub async fn validar_para_aluguel(&self, id: Uuid) -> Result<Reserva, AppError> {
        let reserva = self
            .reservas
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva não encontrada".to_string()))?;

        if reserva.cancelada {
            return Err(AppError::BadRequest(
                "Reserva cancelada não pode gerar aluguel".to_string(),
            ));
        }

        if self.alugueis.find_por_reserva(id).await?.is_some() {
            return Err(AppError::BadRequest(
                "Reserva já possui aluguel associado".to_string(),
            ));
        }

        Ok(reserva)
    }

    async fn montar_resposta(&self, reserva: Reserva) -> Result<ReservaResponse, AppError> {
        let cliente = self
            .clientes
            .find_by_id(reserva.cliente_id)
            .await?
            .ok_or_else(|| AppError::Internal("Cliente da reserva ausente".to_string()))?;

        let funcionario = self
            .funcionarios
            .find_by_id(reserva.funcionario_id)
            .await?
            .ok_or_else(|| AppError::Internal("Funcionário da reserva ausente".to_string()))?;

        let veiculos = self.veiculos.find_por_reserva(reserva.id).await?;

        Ok(ReservaResponse {
            id: reserva.id,
            data_reserva: reserva.data_reserva,
            data_inicio: reserva.data_inicio,
            data_fim: reserva.data_fim,
            cancelada: reserva.cancelada,
            cliente,
            funcionario,
            veiculos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn agora() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
    }

    fn reserva_base() -> Reserva {
        Reserva {
            id: Uuid::new_v4(),
            data_reserva: agora(),
            data_inicio: agora() + Duration::days(3),
            data_fim: agora() + Duration::days(5),
            cancelada: false,
            cliente_id: Uuid::new_v4(),
            funcionario_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn periodo_invertido_falha() {
        let t = agora();
        let err = validar_periodo(t + Duration::days(5), t + Duration::days(3), t).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn periodo_vazio_falha() {
        let t = agora();
        let inicio = t + Duration::days(3);
        assert!(validar_periodo(inicio, inicio, t).is_err());
    }

    #[test]
    fn inicio_no_passado_falha() {
        let t = agora();
        let err = validar_periodo(t - Duration::hours(1), t + Duration::days(2), t).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("passado")),
            other => panic!("erro inesperado: {other}"),
        }
    }

    #[test]
    fn inicio_no_instante_atual_passa() {
        let t = agora();
        assert!(validar_periodo(t, t + Duration::days(2), t).is_ok());
    }

    #[test]
    fn cancelamento_de_reserva_valida_passa() {
        assert!(validar_cancelamento(&reserva_base(), false).is_ok());
    }

    #[test]
    fn cancelamento_repetido_falha() {
        let reserva = Reserva {
            cancelada: true,
            ..reserva_base()
        };
        let err = validar_cancelamento(&reserva, false).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("cancelada")),
            other => panic!("erro inesperado: {other}"),
        }
    }

    #[test]
    fn cancelamento_com_aluguel_falha() {
        let err = validar_cancelamento(&reserva_base(), true).unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("aluguel")),
            other => panic!("erro inesperado: {other}"),
        }
    }
}
