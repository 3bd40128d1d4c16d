use crate::core::distance::haversine_distance;
use crate::models::Restaurant;
use serde::{Deserialize, Serialize};

/// Restaurant with its distance from the search center attached
///
/// The source entity is preserved as-is; the distance is a derived field,
/// serialized flattened next to the restaurant's own fields under the
/// `distance` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(rename = "distance")]
    pub distance_m: f64,
}

/// Recommend restaurants around a center point, nearest first
///
/// Keeps restaurants that have coordinates, lie within `radius_m` of the
/// center (boundary inclusive), and whose rating falls inside
/// `[min_rating, max_rating]` (inclusive on both bounds; unrated records
/// never qualify). The survivors are sorted ascending by distance with a
/// stable sort, so equal distances retain the input order.
///
/// The full sorted sequence is returned; truncating to a top-N is the
/// caller's concern.
pub fn recommend_restaurants(
    restaurants: &[Restaurant],
    center_lat: f64,
    center_lng: f64,
    radius_m: f64,
    min_rating: f64,
    max_rating: f64,
) -> Vec<RankedRestaurant> {
    let mut ranked: Vec<RankedRestaurant> = restaurants
        .iter()
        .filter_map(|r| {
            let loc = r.location()?;
            let distance_m = haversine_distance(center_lat, center_lng, loc.lat, loc.lng);

            Some(RankedRestaurant {
                restaurant: r.clone(),
                distance_m,
            })
        })
        .filter(|ranked| {
            ranked.distance_m <= radius_m
                && ranked
                    .restaurant
                    .rating
                    .map(|rating| rating >= min_rating && rating <= max_rating)
                    .unwrap_or(false)
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_m
            .partial_cmp(&b.distance_m)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}
