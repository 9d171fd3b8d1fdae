use dayflow_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    let log_dir = config.log_dir();
    init_logger_with_file(None, log_dir.to_str());

    tracing::info!("Dayflow server starting...");

    // 2. State: database, schema, seeded Admin
    let state = ServerState::initialize(&config).await?;

    // 3. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
