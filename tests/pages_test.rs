mod common;

use axum::http::StatusCode;
use common::{default_app, get};

#[tokio::test]
async fn landing_page_links_to_search() {
    let (status, body) = get(default_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to GymFinder"));
    assert!(body.contains("Discover and book gyms near you with ease."));
    assert!(body.contains("Find Gyms Now"));
    assert!(body.contains("href=\"/profile\""));
}

#[tokio::test]
async fn gym_list_waits_for_a_location() {
    let (status, body) = get(default_app(), "/gyms").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Find Gyms Near You"));
    assert!(!body.contains("href=\"/gym/1\""));
}

#[tokio::test]
async fn gym_list_shows_every_gym_for_a_location() {
    let (status, body) = get(default_app(), "/gyms?location=Cityville").await;
    assert_eq!(status, StatusCode::OK);
    for (id, name) in [(1, "FitZone"), (2, "PowerHouse Gym"), (3, "Iron Pumpers")] {
        assert!(body.contains(&format!("href=\"/gym/{}\"", id)));
        assert!(body.contains(name));
    }
    assert!(body.contains("<span>4.7</span>"));
}

#[tokio::test]
async fn gym_details_render_the_requested_record() {
    let (status, body) = get(default_app(), "/gym/2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("PowerHouse Gym"));
    assert!(body.contains("456 Elm St, Townsburg"));
    assert!(body.contains(">4.2</span>"));
    assert!(body.contains("Hourly: $8"));
    assert!(body.contains("Monthly: $40"));
    assert!(body.contains("href=\"/booking/2\""));
}

#[tokio::test]
async fn unknown_gym_is_not_found() {
    let (status, body) = get(default_app(), "/gym/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Gym not found"));
}

#[tokio::test]
async fn malformed_gym_id_shows_an_error() {
    let (status, body) = get(default_app(), "/gym/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("An error occurred: invalid gym id: abc"));
}

#[tokio::test]
async fn profile_renders_the_mock_account() {
    let (status, body) = get(default_app(), "/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Your Profile"));
    assert!(body.contains("John Doe"));
    assert!(body.contains("2024-03-28 at 2:00 PM"));
    assert!(body.contains("Mastercard ending in 5555"));
}
