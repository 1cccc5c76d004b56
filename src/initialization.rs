use log::info;
use crate::config::{load_config, Config};
use crate::errors::CityWeatherInitError;
use crate::logger::init_logger;
use crate::manager_openweather::OpenWeather;

/// Initializes logging and returns Config and OpenWeather structs
///
/// # Arguments
///
/// * 'config_file' - path to the configuration file
pub fn init(config_file: &str) -> Result<(Config, OpenWeather), CityWeatherInitError> {
    let config = load_config(config_file)?;

    init_logger(&config.general)?;

    info!("cityweather version: {}", env!("CARGO_PKG_VERSION"));

    let owm = OpenWeather::new(
        config.weather_api.api_key.clone(),
        config.weather_api.base_url.clone(),
    );

    Ok((config, owm))
}
