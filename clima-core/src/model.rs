use serde::Serialize;

/// What to look weather up by.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City { name: String },
    Coordinates { latitude: f64, longitude: f64 },
}

impl WeatherQuery {
    pub fn city(name: impl Into<String>) -> Self {
        WeatherQuery::City { name: name.into() }
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        WeatherQuery::Coordinates { latitude, longitude }
    }
}

impl std::fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherQuery::City { name } => f.write_str(name),
            WeatherQuery::Coordinates { latitude, longitude } => {
                write!(f, "{latitude}, {longitude}")
            }
        }
    }
}

/// Display-ready weather for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherModel {
    pub condition_id: i32,
    pub city_name: String,
    /// Degrees Celsius.
    pub temperature: f64,
}

impl WeatherModel {
    /// Temperature with exactly one decimal place, e.g. `"22.0"`.
    ///
    /// The stored binary value is rounded to the nearest representation, so
    /// `-3.05` (really `-3.0499...`) renders as `"-3.0"`.
    pub fn temperature_string(&self) -> String {
        format!("{:.1}", self.temperature)
    }

    /// Symbol name of the icon for this condition.
    pub fn condition_name(&self) -> &'static str {
        condition_icon(self.condition_id)
    }
}

/// Maps an API condition id onto an icon symbol name.
pub fn condition_icon(condition_id: i32) -> &'static str {
    match condition_id {
        200..=232 => "cloud.bolt",
        300..=321 => "cloud.drizzle",
        500..=531 => "cloud.rain",
        600..=622 => "cloud.snow",
        701..=781 => "cloud.fog",
        800 => "sun.max",
        801..=804 => "cloud.bolt",
        _ => "thermometer.low",
    }
}
