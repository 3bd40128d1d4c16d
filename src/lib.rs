//! Melp Geo - Geospatial analytics core for the Melp restaurant discovery app
//!
//! This library provides the analytics behind the Melp discovery page:
//! great-circle distances, radius-bounded rating statistics, distance-ranked
//! recommendations, and the dataset-wide summary figures, plus the client
//! that fetches the published restaurant dataset.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    analyze_in_radius, haversine_distance, recommend_restaurants, summarize_restaurants,
    RadiusStats, RankedRestaurant,
};
pub use crate::models::{RatingTier, Restaurant};
pub use crate::services::{DatasetClient, DatasetError};
