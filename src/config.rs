#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bank_url: String,
    pub bank_timeout_ms: u64,
    pub retry_max_attempts: u32,
    pub retry_base_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            bank_url: std::env::var("BANK_URL")
                .unwrap_or_else(|_| "http://localhost:8080/payments".to_string()),
            bank_timeout_ms: std::env::var("BANK_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            retry_max_attempts: std::env::var("BANK_RETRY_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(3),
            retry_base_delay_ms: std::env::var("BANK_RETRY_BASE_DELAY_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(100),
        }
    }
}
