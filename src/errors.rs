use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;
use crate::manager_openweather::errors::OwmError;

#[derive(Error, Debug)]
#[error("error in configuration: {0}")]
pub struct ConfigError(pub String);
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> ConfigError {
        ConfigError(format!("config file error: {}", e.to_string()))
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> ConfigError {
        ConfigError(format!("config document error: {}", e.to_string()))
    }
}

pub struct CityWeatherInitError(pub String);

impl fmt::Display for CityWeatherInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CityWeatherInitError: {}", self.0)
    }
}
impl From<ConfigError> for CityWeatherInitError {
    fn from(e: ConfigError) -> Self {
        CityWeatherInitError(e.to_string())
    }
}
impl From<std::io::Error> for CityWeatherInitError {
    fn from(e: std::io::Error) -> Self {
        CityWeatherInitError(e.to_string())
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for CityWeatherInitError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        CityWeatherInitError(e.to_string())
    }
}
impl From<log::SetLoggerError> for CityWeatherInitError {
    fn from(e: log::SetLoggerError) -> Self { CityWeatherInitError(e.to_string()) }
}

pub struct CityWeatherReportError {
    msg: String,
    city: Option<String>,
}
impl CityWeatherReportError {
    pub fn new(msg: String, city: &str) -> CityWeatherReportError {
        CityWeatherReportError {
            msg,
            city: Some(city.to_string()),
        }
    }
}
impl fmt::Display for CityWeatherReportError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "CityWeatherReportError: {}", self.msg)?;
        if let Some(city) = &self.city {
            write!(f, " (city: {})", city)?;
        }

        Ok(())
    }
}
impl From<OwmError> for CityWeatherReportError {
    fn from(e: OwmError) -> Self {
        CityWeatherReportError { msg: e.to_string(), city: None }
    }
}
impl From<std::io::Error> for CityWeatherReportError {
    fn from(e: std::io::Error) -> Self {
        CityWeatherReportError { msg: e.to_string(), city: None }
    }
}
