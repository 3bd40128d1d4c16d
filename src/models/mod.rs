// Model exports
pub mod domain;

pub use domain::{Address, Contact, Location, RatingTier, Restaurant};
