use chrono::{DateTime, Utc};
use serde::Deserialize;
use crate::models::owm_current::ConditionValues;

#[derive(Deserialize)]
pub struct EntryValues {
    pub temp: f64,
}

#[derive(Deserialize)]
pub struct ForecastEntry {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: EntryValues,
    pub weather: Vec<ConditionValues>,
}

#[derive(Deserialize)]
pub struct CityValues {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: CityValues,
}
