mod common;

use axum::http::StatusCode;
use common::{default_app, get, post_form, test_app};
use gymfinder::config::PaymentConfig;
use gymfinder::AppConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FILLED: &str = "date=2024-03-25&time=10%3A00&duration=2&card_number=4242424242424242&card_expiry=12%2F30&card_cvc=123";

fn app_with_payments(api_base: String, client_secret: &str) -> axum::Router {
    test_app(AppConfig {
        payment: PaymentConfig {
            api_base,
            client_secret: client_secret.to_string(),
            ..PaymentConfig::default()
        },
        ..AppConfig::default()
    })
}

#[tokio::test]
async fn booking_page_names_the_gym() {
    let (status, body) = get(default_app(), "/booking/3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Book a Session at Iron Pumpers"));
    assert!(body.contains("action=\"/booking/3\""));
    assert!(body.contains(">Book Now</button>"));
}

#[tokio::test]
async fn booking_unknown_gym_is_not_found() {
    let (status, body) = get(default_app(), "/booking/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Gym not found"));
}

#[tokio::test]
async fn empty_submission_is_blocked() {
    let server = MockServer::start().await;
    let app = app_with_payments(server.uri(), "pi_1_secret_x");

    let (status, body) = post_form(app, "/booking/1", "date=&time=&duration=").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Date is required"));
    assert!(body.contains("Time is required"));
    assert!(body.contains("Duration is required"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn submitting_to_an_unknown_gym_is_not_found() {
    let server = MockServer::start().await;
    let app = app_with_payments(server.uri(), "pi_1_secret_x");

    let (status, body) = post_form(app, "/booking/7", FILLED).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Gym not found"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn rejected_values_are_escaped_when_redisplayed() {
    let (status, body) = post_form(
        default_app(),
        "/booking/1",
        "date=%3Cx%3E&time=%22%3E%3Cscript%3E&duration=1",
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("value=\"&lt;x&gt;\""));
    assert!(body.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    assert!(!body.contains("<x>"));
    assert!(!body.contains("\"><script>"));
    assert!(body.contains("Enter a valid date"));
    assert!(body.contains("Enter a valid time"));
}

#[tokio::test]
async fn placeholder_secret_shows_payment_error() {
    let (status, body) = post_form(default_app(), "/booking/1", FILLED).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert!(body.contains("Invalid client secret: client_secret_test"));
    assert!(body.contains("value=\"2024-03-25\""));
    assert!(body.contains("<option value=\"2\" selected>2 hours</option>"));
}

#[tokio::test]
async fn declined_card_message_is_displayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents/pi_1/confirm"))
        .respond_with(
            ResponseTemplate::new(402)
                .set_body_json(json!({"error": {"message": "Your card was declined."}})),
        )
        .mount(&server)
        .await;

    let app = app_with_payments(server.uri(), "pi_1_secret_x");
    let (status, body) = post_form(app, "/booking/1", FILLED).await;

    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert!(body.contains("Your card was declined."));
}

#[tokio::test]
async fn successful_payment_confirms_the_booking() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/payment_intents/pi_1/confirm"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "pi_1", "status": "succeeded"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = app_with_payments(server.uri(), "pi_1_secret_x");
    let (status, body) = post_form(app, "/booking/1", FILLED).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Booking Confirmed"));
    assert!(body.contains("FitZone"));
    assert!(body.contains("2024-03-25 at 10:00 AM for 2 hours"));
}
