// Service exports
pub mod dataset;

pub use dataset::{DatasetClient, DatasetError};
