use chrono::{DateTime, Local};

/// One discrete forecast point as presented to the user
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    pub date_time: DateTime<Local>,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
}

/// Current conditions for the requested city
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub date_time: DateTime<Local>,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
    pub humidity: i64,
    pub wind_speed: f64,
}

/// Everything the renderer needs for one report
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub daily: Vec<WeatherSample>,
}
