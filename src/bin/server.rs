use choice_maker::env_config;
use choice_maker::question_bank::QuestionBank;
use choice_maker::server::{create_router, AppState};
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    let log_level = env_config::log_level();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .compact()
        .init();

    let bank_path = env_config::question_bank_path();
    let bank = QuestionBank::load_or_builtin(&bank_path);
    info!("Question bank ready ({} questions)", bank.len());

    let state = AppState::new(bank);
    let app = create_router(state);

    let port = env_config::server_port();
    let addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to [{}]: {:?}", port, e);
            return;
        }
    };

    info!("Log level [{}]", log_level);
    info!("Server started at port [{}]", port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {:?}", e);
    }

    info!("Stopping server...");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
