use crate::models::Restaurant;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whole-dataset statistics for the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    #[serde(rename = "totalRestaurants")]
    pub total_restaurants: usize,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    /// Restaurants rated 4.5 or higher
    #[serde(rename = "topRated")]
    pub top_rated: usize,
    /// Distinct non-empty cities across the dataset
    pub cities: usize,
}

/// Summarize the full restaurant list
///
/// Totals include unlocatable and unrated records. The average is taken over
/// rated restaurants only and rounded to 1 decimal place, half away from
/// zero; it is 0 when nothing is rated.
pub fn summarize_restaurants(restaurants: &[Restaurant]) -> DatasetSummary {
    let total_restaurants = restaurants.len();

    let ratings: Vec<f64> = restaurants.iter().filter_map(|r| r.rating).collect();

    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (average * 10.0).round() / 10.0
    };

    let top_rated = ratings.iter().filter(|&&rating| rating >= 4.5).count();

    let cities = restaurants
        .iter()
        .filter_map(|r| r.city())
        .collect::<HashSet<_>>()
        .len();

    DatasetSummary {
        total_restaurants,
        average_rating,
        top_rated,
        cities,
    }
}

/// Filter the card grid by a rating floor
///
/// A floor of 5 keeps only restaurants rated exactly 5; any lower floor
/// keeps ratings in the half-open interval `[floor, floor + 1)`. Unrated
/// restaurants never match.
pub fn filter_by_rating_floor(restaurants: &[Restaurant], floor: f64) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| match r.rating {
            Some(rating) if floor >= 5.0 => rating == 5.0,
            Some(rating) => rating >= floor && rating < floor + 1.0,
            None => false,
        })
        .cloned()
        .collect()
}
