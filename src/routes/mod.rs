use axum::Router;

use crate::state::AppState;

pub mod aluguel_routes;
pub mod categoria_routes;
pub mod cliente_routes;
pub mod funcionario_routes;
pub mod pagamento_routes;
pub mod reserva_routes;
pub mod veiculo_routes;

/// Router da API com um sub-router por recurso
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/clientes", cliente_routes::create_cliente_router())
        .nest("/funcionarios", funcionario_routes::create_funcionario_router())
        .nest("/categorias", categoria_routes::create_categoria_router())
        .nest("/veiculos", veiculo_routes::create_veiculo_router())
        .nest("/reservas", reserva_routes::create_reserva_router())
        .nest("/alugueis", aluguel_routes::create_aluguel_router())
        .nest("/pagamentos", pagamento_routes::create_pagamento_router())
}
