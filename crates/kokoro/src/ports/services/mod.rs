//! Service Ports
//!
//! External service interfaces.

pub mod companion;
pub mod weather;

pub use companion::CompanionProvider;
pub use weather::{WeatherObservation, WeatherProvider, WeatherQuery};
