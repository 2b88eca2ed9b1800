pub mod analysis;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod data;
pub mod ephemeris;
pub mod models;
pub mod physics;
