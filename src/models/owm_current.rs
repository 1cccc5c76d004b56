use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ConditionValues {
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize)]
pub struct MainValues {
    pub temp: f64,
    pub humidity: i64,
}

#[derive(Deserialize)]
pub struct WindValues {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: MainValues,
    pub weather: Vec<ConditionValues>,
    pub wind: WindValues,
}
