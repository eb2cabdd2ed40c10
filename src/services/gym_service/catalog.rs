use crate::models::{Gym, Pricing};

pub const GYM_PHOTO: &str = "https://images.unsplash.com/photo-1534438327276-14e5300c3a48";

// Mock records standing in for a gym directory API
pub fn catalog() -> Vec<Gym> {
    vec![
        Gym {
            id: 1,
            name: "FitZone".to_string(),
            address: "123 Main St, Cityville".to_string(),
            rating: 4.5,
            image: GYM_PHOTO.to_string(),
            description: "FitZone is a state-of-the-art gym facility offering a wide range of equipment and classes for all fitness levels.".to_string(),
            hours: "Monday - Friday: 6am - 10pm, Saturday - Sunday: 8am - 8pm".to_string(),
            pricing: Pricing {
                hourly: 10,
                monthly: 50,
            },
        },
        Gym {
            id: 2,
            name: "PowerHouse Gym".to_string(),
            address: "456 Elm St, Townsburg".to_string(),
            rating: 4.2,
            image: GYM_PHOTO.to_string(),
            description: "PowerHouse Gym is a no-frills strength floor with free weights, squat racks and lifting platforms.".to_string(),
            hours: "Monday - Sunday: 5am - 11pm".to_string(),
            pricing: Pricing {
                hourly: 8,
                monthly: 40,
            },
        },
        Gym {
            id: 3,
            name: "Iron Pumpers".to_string(),
            address: "789 Oak St, Fitnessville".to_string(),
            rating: 4.7,
            image: GYM_PHOTO.to_string(),
            description: "Iron Pumpers combines a bodybuilding floor with group classes and personal coaching.".to_string(),
            hours: "Monday - Friday: 6am - 9pm, Saturday: 8am - 6pm, Sunday: closed".to_string(),
            pricing: Pricing {
                hourly: 12,
                monthly: 60,
            },
        },
    ]
}
