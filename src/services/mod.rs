pub mod aluguel_service;
pub mod disponibilidade_service;
pub mod pagamento_service;
pub mod reserva_service;
