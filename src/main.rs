use dotenvy::dotenv;
use tracing::{error, info};
use villagehub::logging::init_logging;
use villagehub::router::init_router;
use villagehub::state::init_app_state;
use villagehub_config::ServerConfig;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    if let Err(e) = run().await {
        error!(error = ?e, "Server exited with an error");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let server = ServerConfig::from_env();
    let state = init_app_state().await?;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server.bind_address()).await?;
    info!(address = %server.bind_address(), "Server listening");
    info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app).await?;
    Ok(())
}
