pub mod bank;
pub mod config;
pub mod domain {
    pub mod error;
    pub mod payment;
}
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
}
pub mod repo {
    pub mod payments_repo;
}
pub mod service {
    pub mod payment_service;
}
pub mod validation;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

pub fn router(state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/health", get(http::handlers::payments::health))
        .route("/api/payments", post(http::handlers::payments::create_payment))
        .route("/api/payments/:id", get(http::handlers::payments::get_payment))
        .with_state(state)
}
