use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use locar_backend::config::database::{run_migrations, DatabaseConfig};
use locar_backend::config::environment::EnvironmentConfig;
use locar_backend::create_app;
use locar_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 LoCar - Sistema de Gestão de Reservas e Aluguel de Veículos");
    info!("==============================================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar banco de dados
    let pool = match DatabaseConfig::from_env().create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    run_migrations(&pool).await?;
    info!("✅ Migrações aplicadas");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = create_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET   /health - Health check");
    info!("   POST  /api/clientes | GET /api/clientes[/:id]");
    info!("   POST  /api/funcionarios | GET /api/funcionarios[/:id]");
    info!("   POST  /api/categorias | GET /api/categorias[/:id]");
    info!("   POST  /api/veiculos | GET /api/veiculos[/:id]");
    info!("   POST  /api/reservas | PATCH /api/reservas/:id/cancelar");
    info!("   POST  /api/alugueis | PATCH /api/alugueis/:id/finalizar");
    info!("   POST  /api/pagamentos | GET /api/pagamentos/aluguel/:id");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
