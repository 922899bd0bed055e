//! Weather Provider Port
//!
//! Abstract interface for the upstream weather lookup. One external call
//! per invocation, no caching of its own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::WeatherCondition;

/// Location forms accepted by the lookup. Coordinates take priority when
/// both are supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    Coordinates { lat: f64, lon: f64 },
    PostalCode(String),
}

/// Normalized upstream observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub condition: WeatherCondition,
    pub temp_c: f64,
    /// Human-readable description from the upstream
    pub message: String,
    /// Resolved place name, when the upstream reports one
    pub place: Option<String>,
}

/// Weather lookup interface
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherObservation, DomainError>;
}
