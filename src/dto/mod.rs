pub mod aluguel_dto;
pub mod categoria_dto;
pub mod cliente_dto;
pub mod funcionario_dto;
pub mod pagamento_dto;
pub mod reserva_dto;
pub mod veiculo_dto;
