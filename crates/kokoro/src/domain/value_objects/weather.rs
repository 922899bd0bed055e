//! WeatherCondition - the app's four-value weather vocabulary

use serde::{Deserialize, Serialize};

/// Weather condition as shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    #[default]
    Sun,
    Cloud,
    Rain,
    Snow,
}

impl WeatherCondition {
    /// Map the upstream condition vocabulary by case-insensitive substring.
    /// Thunder counts as rain; anything unrecognized counts as sun.
    pub fn from_upstream(condition: &str) -> Self {
        let lower = condition.to_lowercase();
        if lower.contains("clear") {
            WeatherCondition::Sun
        } else if lower.contains("cloud") {
            WeatherCondition::Cloud
        } else if lower.contains("rain") || lower.contains("drizzle") || lower.contains("thunder") {
            WeatherCondition::Rain
        } else if lower.contains("snow") {
            WeatherCondition::Snow
        } else {
            WeatherCondition::Sun
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherCondition::Sun => write!(f, "sun"),
            WeatherCondition::Cloud => write!(f, "cloud"),
            WeatherCondition::Rain => write!(f, "rain"),
            WeatherCondition::Snow => write!(f, "snow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_maps_to_sun() {
        assert_eq!(WeatherCondition::from_upstream("Clear"), WeatherCondition::Sun);
    }

    #[test]
    fn test_thunderstorm_maps_to_rain() {
        assert_eq!(
            WeatherCondition::from_upstream("Thunderstorm"),
            WeatherCondition::Rain
        );
    }

    #[test]
    fn test_drizzle_maps_to_rain() {
        assert_eq!(
            WeatherCondition::from_upstream("Drizzle"),
            WeatherCondition::Rain
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            WeatherCondition::from_upstream("CLOUDS"),
            WeatherCondition::Cloud
        );
        assert_eq!(WeatherCondition::from_upstream("snow"), WeatherCondition::Snow);
    }

    #[test]
    fn test_unrecognized_defaults_to_sun() {
        assert_eq!(WeatherCondition::from_upstream("Haze"), WeatherCondition::Sun);
        assert_eq!(WeatherCondition::from_upstream(""), WeatherCondition::Sun);
    }
}
