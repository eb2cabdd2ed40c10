use serde::{Deserialize, Serialize};

const THUMBNAIL_WIDTH: u32 = 300;
const BANNER_WIDTH: u32 = 1350;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub hourly: u32,
    pub monthly: u32,
}

// Full record behind the details page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gym {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub rating: f32,
    pub image: String,
    pub description: String,
    pub hours: String,
    pub pricing: Pricing,
}

// Card shown in the gym list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymSummary {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub rating: f32,
    pub image: String,
}

// What the booking page needs to know about a gym
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingGym {
    pub id: u32,
    pub name: String,
}

impl Gym {
    /// `image` holds the photo URL without sizing; the banner asks for the wide crop.
    pub fn banner_url(&self) -> String {
        sized_image(&self.image, BANNER_WIDTH)
    }

    pub fn summary(&self) -> GymSummary {
        GymSummary {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            rating: self.rating,
            image: self.image.clone(),
        }
    }

    pub fn booking_gym(&self) -> BookingGym {
        BookingGym {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

impl GymSummary {
    pub fn thumbnail_url(&self) -> String {
        sized_image(&self.image, THUMBNAIL_WIDTH)
    }
}

pub fn sized_image(base: &str, width: u32) -> String {
    format!(
        "{}?ixlib=rb-1.2.1&auto=format&fit=crop&w={}&q=80",
        base, width
    )
}
