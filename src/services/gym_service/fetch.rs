use log::debug;

use super::catalog::catalog;
use crate::error::AppError;
use crate::kv::{QueryCache, QueryKey};
use crate::models::{BookingGym, Gym, GymSummary};

pub fn parse_gym_id(raw: &str) -> Result<u32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidGymId(raw.to_string()))
}

/// Every gym in the directory. The location only keys the query; there is no
/// geographic filtering behind it.
pub async fn fetch_gyms(location: &str) -> Result<Vec<GymSummary>, AppError> {
    debug!("fetching gyms near {:?}", location);
    Ok(catalog().iter().map(Gym::summary).collect())
}

pub async fn fetch_gym_details(id: &str) -> Result<Gym, AppError> {
    let id = parse_gym_id(id)?;
    catalog()
        .into_iter()
        .find(|gym| gym.id == id)
        .ok_or(AppError::GymNotFound(id))
}

pub async fn fetch_booking_gym(id: &str) -> Result<BookingGym, AppError> {
    fetch_gym_details(id).await.map(|gym| gym.booking_gym())
}

pub async fn load_gyms(cache: &QueryCache, location: &str) -> Result<Vec<GymSummary>, AppError> {
    cache
        .fetch_query(QueryKey::new("gyms").with(location), || fetch_gyms(location))
        .await
}

pub async fn load_gym(cache: &QueryCache, id: &str) -> Result<Gym, AppError> {
    cache
        .fetch_query(QueryKey::new("gym").with(id), || fetch_gym_details(id))
        .await
}

pub async fn load_booking_gym(cache: &QueryCache, id: &str) -> Result<BookingGym, AppError> {
    cache
        .fetch_query(QueryKey::new("booking").with(id), || fetch_booking_gym(id))
        .await
}
