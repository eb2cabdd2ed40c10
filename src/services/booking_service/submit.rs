use log::{info, warn};
use uuid::Uuid;

use super::validate::validate_booking;
use crate::models::{
    BookingFieldErrors, BookingForm, BookingGym, BookingOutcome, BookingRequest, CardDetails,
};
use crate::services::PaymentClient;

/// Validates the form and, only if it passes, confirms the payment.
///
/// `Err` means the submission was blocked by validation and nothing was sent.
/// `Ok` carries how the payment went: `Failed` with the message to show, or
/// `Confirmed` with the accepted request.
pub async fn submit_booking(
    payments: &PaymentClient,
    gym: &BookingGym,
    form: BookingForm,
) -> Result<BookingOutcome, BookingFieldErrors> {
    let form = form.trimmed();
    let valid = validate_booking(&form)?;

    let request = BookingRequest {
        reference: Uuid::new_v4(),
        gym: gym.clone(),
        date: valid.date,
        time: valid.time,
        duration: valid.duration,
    };
    let card = CardDetails {
        number: form.card_number,
        expiry: form.card_expiry,
        cvc: form.card_cvc,
    };

    info!(
        "confirming payment for booking {} at {}",
        request.reference, gym.name
    );

    let outcome = match payments.confirm_card_payment(&card).await {
        Ok(_) => {
            info!(
                "Booking confirmed: {}",
                serde_json::to_string(&request).unwrap_or_else(|_| request.reference.to_string())
            );
            BookingOutcome::Confirmed(request)
        }
        Err(e) => {
            warn!("payment failed for booking {}: {}", request.reference, e);
            BookingOutcome::Failed(e.to_string())
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaymentConfig;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gym() -> BookingGym {
        BookingGym {
            id: 1,
            name: "FitZone".to_string(),
        }
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            date: "2024-03-25".to_string(),
            time: "10:00".to_string(),
            duration: "1".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            card_expiry: "12/30".to_string(),
            card_cvc: "123".to_string(),
        }
    }

    fn payments(api_base: String, client_secret: &str) -> PaymentClient {
        PaymentClient::new(PaymentConfig {
            api_base,
            client_secret: client_secret.to_string(),
            ..PaymentConfig::default()
        })
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_payment() {
        let server = MockServer::start().await;
        let result = submit_booking(
            &payments(server.uri(), "pi_1_secret_x"),
            &gym(),
            BookingForm::default(),
        )
        .await;

        assert!(result.is_err());
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn placeholder_secret_reports_failure() {
        let outcome = submit_booking(
            &payments("http://127.0.0.1:9".to_string(), "client_secret_test"),
            &gym(),
            filled_form(),
        )
        .await
        .unwrap();

        assert_eq!(
            outcome,
            BookingOutcome::Failed("Invalid client secret: client_secret_test".to_string())
        );
    }

    #[tokio::test]
    async fn confirmed_payment_confirms_booking() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "pi_1", "status": "succeeded"})),
            )
            .mount(&server)
            .await;

        let outcome = submit_booking(
            &payments(server.uri(), "pi_1_secret_x"),
            &gym(),
            filled_form(),
        )
        .await
        .unwrap();

        match outcome {
            BookingOutcome::Confirmed(request) => {
                assert_eq!(request.gym, gym());
                assert_eq!(request.date.to_string(), "2024-03-25");
            }
            other => panic!("expected confirmation, got {:?}", other),
        }
    }
}
