//! Core library for the `clima` weather lookup.
//!
//! This crate defines:
//! - Request building for city-name and coordinate lookups
//! - Fetching, decoding and mapping API responses into a display model
//! - Callback-style delivery of lookup outcomes
//! - Configuration & credentials handling
//!
//! It is used by `clima-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod model;
pub mod observer;
pub mod provider;
pub mod request;

pub use config::Config;
pub use error::{ErrorKind, WeatherError};
pub use model::{WeatherModel, WeatherQuery, condition_icon};
pub use observer::{WeatherObserver, spawn_fetch};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use request::{DEFAULT_BASE_URL, RequestBuilder, parse_base_url};
