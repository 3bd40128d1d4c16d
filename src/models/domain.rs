use serde::{Deserialize, Serialize};

/// Restaurant record as served by the Melp dataset
///
/// Mirrors the published JSON shape. Every field beyond `id` and `name` is
/// optional because the dataset is not guaranteed to be complete; unknown
/// fields in the source documents are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Rating in `[0, 5]`, not necessarily integral. A missing rating
    /// excludes the record from every rating-dependent computation.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Restaurant {
    /// Helper to reach the nested coordinates, if the record has any
    pub fn location(&self) -> Option<&Location> {
        self.address.as_ref()?.location.as_ref()
    }

    /// Helper to get the city, skipping empty strings
    pub fn city(&self) -> Option<&str> {
        let city = self.address.as_ref()?.city.as_deref()?;
        if city.is_empty() {
            None
        } else {
            Some(city)
        }
    }
}

/// Contact details, passed through untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Postal address with optional coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// Geographic coordinates in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Marker color tier derived from a restaurant's rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingTier {
    Gold,
    Green,
    Orange,
    Red,
}

impl RatingTier {
    /// Classify a rating into its marker tier
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            RatingTier::Gold
        } else if rating >= 4.0 {
            RatingTier::Green
        } else if rating >= 3.5 {
            RatingTier::Orange
        } else {
            RatingTier::Red
        }
    }
}
