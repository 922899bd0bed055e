//! OpenWeatherMap client
//!
//! Implements the WeatherProvider port: one upstream call per lookup,
//! reshaped to the app's four-field weather. No caching, no retries;
//! the request fails fast on an 8 second timeout.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use kokoro::{DomainError, WeatherCondition, WeatherObservation, WeatherProvider, WeatherQuery};

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// OpenWeatherMap implementation of the weather port
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
}

impl OpenWeatherClient {
    /// Creates a new client using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, query: &WeatherQuery) -> Result<WeatherObservation, DomainError> {
        let mut request = self
            .client
            .get(BASE_URL)
            .query(&[("appid", self.api_key.as_str())])
            .query(&[("units", "metric"), ("lang", "ja")]);

        request = match query {
            WeatherQuery::Coordinates { lat, lon } => {
                request.query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            }
            // Postal codes are Japanese
            WeatherQuery::PostalCode(zip) => request.query(&[("zip", format!("{},JP", zip))]),
        };

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::ExternalService(format!(
                "OpenWeatherMap error: {}",
                response.status()
            )));
        }

        let upstream: UpstreamResponse = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Parse error: {}", e)))?;

        Ok(reshape(upstream))
    }
}

// ============================================
// Upstream Response Types
// ============================================

#[derive(Deserialize)]
struct UpstreamResponse {
    #[serde(default)]
    weather: Vec<UpstreamWeather>,
    main: UpstreamMain,
    name: Option<String>,
}

#[derive(Deserialize)]
struct UpstreamWeather {
    main: String,
    description: String,
}

#[derive(Deserialize)]
struct UpstreamMain {
    temp: f64,
}

/// Keep only what the app needs, mapped to its condition vocabulary.
fn reshape(upstream: UpstreamResponse) -> WeatherObservation {
    let (condition, message) = upstream
        .weather
        .first()
        .map(|w| (WeatherCondition::from_upstream(&w.main), w.description.clone()))
        .unwrap_or((WeatherCondition::Sun, String::new()));

    WeatherObservation {
        condition,
        temp_c: upstream.main.temp,
        message,
        place: upstream.name.filter(|name| !name.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(main: &str, description: &str, name: Option<&str>) -> UpstreamResponse {
        UpstreamResponse {
            weather: vec![UpstreamWeather {
                main: main.to_string(),
                description: description.to_string(),
            }],
            main: UpstreamMain { temp: 21.3 },
            name: name.map(|n| n.to_string()),
        }
    }

    #[test]
    fn test_reshape_keeps_four_fields() {
        let observation = reshape(upstream("Clouds", "厚い雲", Some("Shibuya")));
        assert_eq!(observation.condition, WeatherCondition::Cloud);
        assert_eq!(observation.temp_c, 21.3);
        assert_eq!(observation.message, "厚い雲");
        assert_eq!(observation.place.as_deref(), Some("Shibuya"));
    }

    #[test]
    fn test_reshape_thunderstorm_is_rain() {
        let observation = reshape(upstream("Thunderstorm", "雷雨", None));
        assert_eq!(observation.condition, WeatherCondition::Rain);
    }

    #[test]
    fn test_reshape_handles_missing_weather_entry() {
        let observation = reshape(UpstreamResponse {
            weather: Vec::new(),
            main: UpstreamMain { temp: 2.0 },
            name: Some(String::new()),
        });
        assert_eq!(observation.condition, WeatherCondition::Sun);
        assert!(observation.place.is_none());
    }
}
