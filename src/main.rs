use std::sync::Arc;
use std::time::Duration;

use payment_gateway::bank::http::HttpBank;
use payment_gateway::bank::retry::RetryPolicy;
use payment_gateway::config::AppConfig;
use payment_gateway::repo::payments_repo::PaymentsRepo;
use payment_gateway::service::payment_service::PaymentService;
use payment_gateway::{router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let bank = HttpBank {
        endpoint: cfg.bank_url.clone(),
        timeout_ms: cfg.bank_timeout_ms,
        client: reqwest::Client::new(),
        retry: RetryPolicy {
            max_attempts: cfg.retry_max_attempts,
            base_delay: Duration::from_millis(cfg.retry_base_delay_ms),
            multiplier: 2,
        },
    };

    let payment_service = PaymentService {
        payments_repo: PaymentsRepo::new(),
        bank: Arc::new(bank),
    };

    let state = AppState { payment_service };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
