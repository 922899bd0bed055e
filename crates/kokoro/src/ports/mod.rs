//! Ports - Abstract Interfaces
//!
//! Traits that define boundaries between the domain and infrastructure.

pub mod repositories;
pub mod services;

pub use repositories::{keys, StateRepository};
pub use services::{CompanionProvider, WeatherObservation, WeatherProvider, WeatherQuery};
