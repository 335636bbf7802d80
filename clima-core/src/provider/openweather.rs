use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::WeatherError,
    model::{WeatherModel, WeatherQuery},
    request::RequestBuilder,
};

use super::WeatherProvider;

/// Current-weather lookups against the OpenWeather API.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// provider can serve any number of overlapping lookups.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    requests: RequestBuilder,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self::with_client(RequestBuilder::new(base_url, api_key), Client::new())
    }

    pub fn with_client(requests: RequestBuilder, http: Client) -> Self {
        Self { requests, http }
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherModel, WeatherError> {
        self.fetch(&WeatherQuery::city(city)).await
    }

    pub async fn fetch_weather_by_coordinates(
        &self,
        lat: f64,
        long: f64,
    ) -> Result<WeatherModel, WeatherError> {
        self.fetch(&WeatherQuery::coordinates(lat, long)).await
    }

    #[instrument(skip_all, fields(query = %query))]
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherModel, WeatherError> {
        let url = self.requests.build_url(query)?;

        debug!(endpoint = self.requests.base_url(), "Sending weather request");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        debug!(%status, bytes = body.len(), "Received weather response");

        if !status.is_success() {
            return Err(WeatherError::Status { status, message: error_message(&body) });
        }

        let model = decode(&body)?;

        debug!(city = %model.city_name, condition_id = model.condition_id, "Mapped weather model");

        Ok(model)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, query: &WeatherQuery) -> Result<WeatherModel, WeatherError> {
        self.fetch(query).await
    }
}

/// Wire format of a current-weather response.
///
/// Only the fields the model needs are declared; anything else in the body
/// is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    pub name: String,
    pub main: MainPayload,
    pub weather: Vec<ConditionPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainPayload {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionPayload {
    pub description: String,
    pub id: i32,
}

impl TryFrom<WeatherPayload> for WeatherModel {
    type Error = WeatherError;

    fn try_from(payload: WeatherPayload) -> Result<Self, Self::Error> {
        let condition = payload.weather.first().ok_or(WeatherError::MissingCondition)?;

        Ok(WeatherModel {
            condition_id: condition.id,
            city_name: payload.name,
            temperature: payload.main.temp,
        })
    }
}

/// Decode a response body straight into the display model.
pub fn decode(body: &str) -> Result<WeatherModel, WeatherError> {
    let payload: WeatherPayload = serde_json::from_str(body)?;
    WeatherModel::try_from(payload)
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<OwErrorBody>(body) {
        Ok(err) => err.message,
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
