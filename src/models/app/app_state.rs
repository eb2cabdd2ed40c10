use crate::config::AppConfig;
use crate::kv::QueryCache;
use crate::models::UserProfile;
use crate::services::{mock_profile, PaymentClient};

pub struct AppState {
    pub query_cache: QueryCache,
    pub payments: PaymentClient,
    pub profile: UserProfile,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            query_cache: QueryCache::new(config.query),
            payments: PaymentClient::new(config.payment),
            profile: mock_profile(),
        }
    }
}
