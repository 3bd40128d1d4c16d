use crate::core::distance::haversine_distance;
use crate::models::Restaurant;
use serde::{Deserialize, Serialize};

/// Descriptive statistics over the restaurants inside a search radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusStats {
    pub count: usize,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "stdDeviation")]
    pub std_deviation: f64,
    /// The in-radius subset, unordered, serialized as `restaurants`
    #[serde(rename = "restaurants")]
    pub members: Vec<Restaurant>,
}

impl RadiusStats {
    fn empty() -> Self {
        Self {
            count: 0,
            average_rating: 0.0,
            std_deviation: 0.0,
            members: Vec::new(),
        }
    }
}

/// Analyze the restaurants within `radius_m` of a center point
///
/// Keeps restaurants that have coordinates, carry a rating, and lie within
/// the radius (boundary inclusive), then computes the count, mean rating,
/// and population standard deviation (divisor = count) of the subset.
/// The two statistics are rounded to 2 decimal places, half away from zero.
///
/// An empty subset is a defined terminal case: all statistics are 0 and
/// `members` is empty. The input list is never mutated.
pub fn analyze_in_radius(
    restaurants: &[Restaurant],
    center_lat: f64,
    center_lng: f64,
    radius_m: f64,
) -> RadiusStats {
    let members: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| r.rating.is_some())
        .filter(|r| match r.location() {
            Some(loc) => {
                haversine_distance(center_lat, center_lng, loc.lat, loc.lng) <= radius_m
            }
            None => false,
        })
        .cloned()
        .collect();

    let count = members.len();

    if count == 0 {
        return RadiusStats::empty();
    }

    let ratings: Vec<f64> = members.iter().filter_map(|r| r.rating).collect();

    let average = ratings.iter().sum::<f64>() / count as f64;

    let variance = ratings
        .iter()
        .map(|rating| (rating - average).powi(2))
        .sum::<f64>()
        / count as f64;

    RadiusStats {
        count,
        average_rating: round_to_2dp(average),
        std_deviation: round_to_2dp(variance.sqrt()),
        members,
    }
}

/// Round to 2 decimal places, half away from zero (`f64::round` semantics)
#[inline]
fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
