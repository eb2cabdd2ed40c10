use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::PaymentConfig;
use crate::models::CardDetails;

pub const PAYMENT_FALLBACK_MESSAGE: &str = "An error occurred during payment.";

// Statuses that mean the charge went through or will without further input
const CONFIRMED_STATUSES: [&str; 3] = ["succeeded", "processing", "requires_capture"];

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Invalid client secret: {0}")]
    InvalidClientSecret(String),

    #[error("{}", .0.as_deref().unwrap_or(PAYMENT_FALLBACK_MESSAGE))]
    Declined(Option<String>),

    #[error("Payment was not completed (status: {0})")]
    Unconfirmed(String),

    #[error("Payment service unavailable: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Client secrets look like `pi_123_secret_abc`; the part before `_secret_`
/// names the payment intent.
pub fn intent_id_from_secret(client_secret: &str) -> Result<&str, PaymentError> {
    match client_secret.split_once("_secret_") {
        Some((intent, suffix)) if intent.starts_with("pi_") && !suffix.is_empty() => Ok(intent),
        _ => Err(PaymentError::InvalidClientSecret(client_secret.to_string())),
    }
}

/// Confirms card payments against the hosted payment test API
pub struct PaymentClient {
    config: PaymentConfig,
    http: Client,
}

impl PaymentClient {
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub async fn confirm_card_payment(
        &self,
        card: &CardDetails,
    ) -> Result<PaymentIntent, PaymentError> {
        let intent_id = intent_id_from_secret(&self.config.client_secret)?;
        let url = format!(
            "{}/v1/payment_intents/{}/confirm",
            self.config.api_base.trim_end_matches('/'),
            intent_id
        );
        let (exp_month, exp_year) = card
            .expiry
            .split_once('/')
            .unwrap_or((card.expiry.as_str(), ""));

        let form = [
            ("key", self.config.publishable_key.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("payment_method_data[type]", "card"),
            ("payment_method_data[card][number]", card.number.as_str()),
            ("payment_method_data[card][exp_month]", exp_month.trim()),
            ("payment_method_data[card][exp_year]", exp_year.trim()),
            ("payment_method_data[card][cvc]", card.cvc.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message);
            warn!("payment confirmation for {} rejected with {}", intent_id, status);
            return Err(PaymentError::Declined(message));
        }

        let intent: PaymentIntent = response.json().await?;
        if CONFIRMED_STATUSES.contains(&intent.status.as_str()) {
            info!("payment intent {} confirmed ({})", intent.id, intent.status);
            Ok(intent)
        } else {
            Err(PaymentError::Unconfirmed(intent.status))
        }
    }
}
