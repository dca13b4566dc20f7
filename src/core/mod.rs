//! Configuration, response models and the logging seam

pub mod config;
pub mod logger;
pub mod models;
