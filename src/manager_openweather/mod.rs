pub mod errors;

use std::time::Duration;
use chrono::Local;
use ureq::Agent;
use crate::manager_openweather::errors::OwmError;
use crate::models::owm_current::CurrentWeatherResponse;
use crate::models::owm_forecast::ForecastResponse;
use crate::models::report::{CurrentConditions, WeatherSample};

/// Units are fixed to metric, the tool has no localization
const UNITS: &str = "metric";

/// Struct for managing weather data retrieval from OpenWeatherMap
pub struct OpenWeather {
    agent: Agent,
    api_key: String,
    base_url: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching current weather and
    /// forecasts from the OpenWeatherMap API
    ///
    /// # Arguments
    ///
    /// * 'api_key' - the api key for OpenWeatherMap
    /// * 'base_url' - base url of the OpenWeatherMap API
    pub fn new(api_key: String, base_url: String) -> OpenWeather {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self { agent, api_key, base_url }
    }

    /// Retrieves the current weather conditions for the given city.
    /// An unknown city is reported by the API as an http error status and
    /// surfaces as an OwmError.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city to get current conditions for
    pub fn current_weather(&self, city: &str) -> Result<CurrentConditions, OwmError> {
        let url = format!("{}/weather", self.base_url);

        let json = self.agent
            .get(url)
            .query("q", city)
            .query("appid", &self.api_key)
            .query("units", UNITS)
            .call()?
            .body_mut()
            .read_to_string()?;

        let document: CurrentWeatherResponse = serde_json::from_str(&json)?;

        current_conditions(document)
    }

    /// Retrieves the forecast for the given city. The raw forecast holds
    /// several days worth of samples in 3 hour intervals which are returned
    /// in delivery order, reduction to daily entries is up to the caller.
    ///
    /// # Arguments
    ///
    /// * 'city' - name of the city to get a forecast for
    pub fn forecast(&self, city: &str) -> Result<Vec<WeatherSample>, OwmError> {
        let url = format!("{}/forecast", self.base_url);

        let json = self.agent
            .get(url)
            .query("q", city)
            .query("appid", &self.api_key)
            .query("units", UNITS)
            .call()?
            .body_mut()
            .read_to_string()?;

        let document: ForecastResponse = serde_json::from_str(&json)?;

        forecast_series(document)
    }
}

/// Maps a current weather document onto the domain struct. The first entry
/// of the weather array represents the condition, same as the forecast.
///
/// # Arguments
///
/// * 'document' - the deserialized current weather document
fn current_conditions(document: CurrentWeatherResponse) -> Result<CurrentConditions, OwmError> {
    let condition = document.weather.into_iter().next()
        .ok_or_else(|| OwmError("no condition in current weather document".to_string()))?;

    Ok(CurrentConditions {
        city: document.name,
        date_time: document.dt.with_timezone(&Local),
        temperature: document.main.temp,
        description: condition.description,
        icon: condition.icon,
        humidity: document.main.humidity,
        wind_speed: document.wind.speed,
    })
}

/// Maps a forecast document onto a series of domain samples, keeping the
/// delivery order
///
/// # Arguments
///
/// * 'document' - the deserialized forecast document
fn forecast_series(document: ForecastResponse) -> Result<Vec<WeatherSample>, OwmError> {
    let mut series: Vec<WeatherSample> = Vec::with_capacity(document.list.len());

    for entry in document.list {
        let condition = entry.weather.into_iter().next()
            .ok_or_else(|| OwmError("no condition in forecast entry".to_string()))?;

        series.push(WeatherSample {
            date_time: entry.dt.with_timezone(&Local),
            temperature: entry.main.temp,
            description: condition.description,
            icon: condition.icon,
        });
    }

    Ok(series)
}
