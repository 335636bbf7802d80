use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use clima_core::{
    Config, WeatherError, WeatherModel, WeatherObserver, WeatherProvider, WeatherQuery,
    parse_base_url, provider_from_config, spawn_fetch,
};
use inquire::{Password, Text};
use serde::Serialize;
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Current weather by city name or coordinates")]
pub struct Cli {
    /// Print results as JSON, one object per line.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key (and optionally a custom endpoint).
    Configure,

    /// Show weather for one or more cities, looked up concurrently.
    City {
        /// City names, e.g. "New York".
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show weather at a latitude/longitude pair.
    Coords {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::City { names } => {
                let provider = load_provider()?;
                show_cities(provider, names, self.json).await
            }
            Command::Coords { lat, lon } => {
                let provider = load_provider()?;
                let model = provider
                    .get_weather(&WeatherQuery::coordinates(lat, lon))
                    .await
                    .with_context(|| format!("Lookup for ({lat}, {lon}) failed"))?;
                println!("{}", render(&model, self.json)?);
                Ok(())
            }
        }
    }
}

fn load_provider() -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let config = Config::load()?.with_env_overrides();
    debug!(endpoint = %config.base_url, "Loaded configuration");
    Ok(Arc::from(provider_from_config(&config)?))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let base_url = Text::new("API endpoint:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read API endpoint")?;

    config.set_api_key(api_key.trim().to_string());
    config.base_url = validated_endpoint(&base_url)?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

/// Normalized endpoint, or an error if lookups against it could never work.
fn validated_endpoint(raw: &str) -> anyhow::Result<String> {
    let url = parse_base_url(raw).context("Refusing to save API endpoint")?;
    Ok(url.to_string())
}

async fn show_cities(
    provider: Arc<dyn WeatherProvider>,
    names: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    let failures = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = names
        .into_iter()
        .map(|name| {
            let observer = Arc::new(ConsoleObserver {
                label: name.clone(),
                json,
                failures: failures.clone(),
            });
            spawn_fetch(provider.clone(), WeatherQuery::city(name), observer)
        })
        .collect();

    let total = handles.len();
    for handle in handles {
        handle.await.context("Weather lookup task panicked")?;
    }

    let failed = failures.load(Ordering::SeqCst);
    if failed > 0 {
        bail!("{failed} of {total} lookups failed");
    }
    Ok(())
}

/// Prints each outcome as soon as its lookup completes.
struct ConsoleObserver {
    label: String,
    json: bool,
    failures: Arc<AtomicUsize>,
}

impl WeatherObserver for ConsoleObserver {
    fn on_success(&self, model: WeatherModel) {
        match render(&model, self.json) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                self.failures.fetch_add(1, Ordering::SeqCst);
                eprintln!("{}: {err:#}", self.label);
            }
        }
    }

    fn on_failure(&self, error: WeatherError) {
        self.failures.fetch_add(1, Ordering::SeqCst);
        eprintln!("{}: {error}", self.label);
    }
}

/// JSON shape of one result: the model plus its derived display fields.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    model: &'a WeatherModel,
    condition_name: &'static str,
    temperature_string: String,
}

fn render(model: &WeatherModel, json: bool) -> anyhow::Result<String> {
    if json {
        let report = JsonReport {
            model,
            condition_name: model.condition_name(),
            temperature_string: model.temperature_string(),
        };
        return serde_json::to_string(&report).context("Failed to serialize weather result");
    }

    Ok(format!(
        "{:<16} {:>7}°C  {}",
        model.condition_name(),
        model.temperature_string(),
        model.city_name
    ))
}
