use std::time::Duration;

use payment_gateway::bank::http::HttpBank;
use payment_gateway::bank::retry::RetryPolicy;
use payment_gateway::bank::{AcquiringBank, BankCaptureRequest, BankError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn capture_request() -> BankCaptureRequest {
    BankCaptureRequest {
        card_number: "2222405343248877".to_string(),
        expiry_date: "04/2035".to_string(),
        currency: "GBP".to_string(),
        amount: 100,
        cvv: "123".to_string(),
    }
}

fn client_for(server: &MockServer) -> HttpBank {
    HttpBank {
        endpoint: format!("{}/payments", server.uri()),
        timeout_ms: 2_000,
        client: reqwest::Client::new(),
        retry: RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(5),
            multiplier: 2,
        },
    }
}

#[tokio::test]
async fn authorized_capture_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorized": true,
            "authorization_code": "0bb07405-6d44-4b50-a14f-7ae0beff13ad"
        })))
        .mount(&server)
        .await;

    let resp = client_for(&server).capture(&capture_request()).await.unwrap();
    assert!(resp.authorized);
    assert_eq!(resp.authorization_code, "0bb07405-6d44-4b50-a14f-7ae0beff13ad");
}

#[tokio::test]
async fn declined_capture_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorized": false,
            "authorization_code": ""
        })))
        .mount(&server)
        .await;

    let resp = client_for(&server).capture(&capture_request()).await.unwrap();
    assert!(!resp.authorized);
    assert_eq!(resp.authorization_code, "");
}

#[tokio::test]
async fn bank_4xx_passes_through_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let err = client_for(&server).capture(&capture_request()).await.unwrap_err();
    match err {
        BankError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Bank returned HTTP 400 code");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn bank_5xx_is_retried_until_exhaustion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).capture(&capture_request()).await.unwrap_err();
    match err {
        BankError::Unavailable { attempts, .. } => assert_eq!(attempts, 3),
        other => panic!("expected Unavailable, got {:?}", other),
    }

    assert!(server.received_requests().await.unwrap().len() >= 3);
}

#[tokio::test]
async fn unparseable_200_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).capture(&capture_request()).await.unwrap_err();
    assert!(matches!(err, BankError::InvalidResponse { .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn connection_failure_surfaces_as_unavailable() {
    // bind-then-drop leaves a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let bank = HttpBank {
        endpoint: format!("http://{}/payments", addr),
        timeout_ms: 500,
        client: reqwest::Client::new(),
        retry: RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(5),
            multiplier: 2,
        },
    };

    let err = bank.capture(&capture_request()).await.unwrap_err();
    assert!(matches!(err, BankError::Unavailable { attempts: 3, .. }));
}
