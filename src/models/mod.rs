pub mod aluguel;
pub mod categoria;
pub mod cliente;
pub mod funcionario;
pub mod pagamento;
pub mod reserva;
pub mod veiculo;
