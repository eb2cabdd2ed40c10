pub mod client;

pub use client::{
    intent_id_from_secret, PaymentClient, PaymentError, PaymentIntent, PAYMENT_FALLBACK_MESSAGE,
};
