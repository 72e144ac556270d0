pub mod aluguel_repository;
pub mod categoria_repository;
pub mod cliente_repository;
pub mod funcionario_repository;
pub mod pagamento_repository;
pub mod reserva_repository;
pub mod veiculo_repository;
