use reqwest::Url;

use crate::{error::WeatherError, model::WeatherQuery};

/// Current-weather endpoint of OpenWeather.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const UNITS: &str = "metric";

/// Builds request URLs for the weather endpoint.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    api_key: String,
}

impl RequestBuilder {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compose the full request URL for `query`.
    ///
    /// City names are percent-encoded (`New York` becomes `New%20York`);
    /// coordinates are written as plain decimals. Nothing is sent.
    pub fn build_url(&self, query: &WeatherQuery) -> Result<Url, WeatherError> {
        let location = match query {
            WeatherQuery::City { name } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(WeatherError::RequestConstruction("city name is empty".into()));
                }
                format!("q={}", urlencoding::encode(name))
            }
            WeatherQuery::Coordinates { latitude, longitude } => {
                validate_coordinates(*latitude, *longitude)?;
                format!("lat={latitude}&lon={longitude}")
            }
        };

        let mut url = parse_base_url(&self.base_url)?;

        let params =
            format!("{location}&appid={}&units={UNITS}", urlencoding::encode(&self.api_key));
        // Keep any parameters the configured endpoint already carries.
        let full_query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{params}"),
            _ => params,
        };
        url.set_query(Some(&full_query));

        Ok(url)
    }
}

/// Parse a configured endpoint, rejecting anything the request parameters
/// could not be appended to.
pub fn parse_base_url(raw: &str) -> Result<Url, WeatherError> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        WeatherError::RequestConstruction(format!("invalid base URL '{raw}': {e}"))
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(WeatherError::RequestConstruction(format!(
            "base URL '{raw}' must be an http(s) URL"
        )));
    }
    if url.fragment().is_some() {
        return Err(WeatherError::RequestConstruction(format!(
            "base URL '{raw}' must not contain a fragment"
        )));
    }

    Ok(url)
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(WeatherError::RequestConstruction(format!(
            "invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude -180 to 180"
        )));
    }
    Ok(())
}
