use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct WeatherApi {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Deserialize)]
pub struct DisplayParameters {
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,
}

impl Default for DisplayParameters {
    fn default() -> Self {
        DisplayParameters { forecast_days: default_forecast_days() }
    }
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub weather_api: WeatherApi,
    #[serde(default)]
    pub display: DisplayParameters,
    pub general: General,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_forecast_days() -> usize {
    5
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}
