use std::io;
use std::thread;
use anyhow::Result;
use chrono::Local;
use log::info;
use crate::daily_digest::reduce_daily;
use crate::errors::CityWeatherReportError;
use crate::manager_openweather::OpenWeather;
use crate::models::report::WeatherReport;
use crate::render::write_report;

/// Fetches a weather report for the given city and writes it to stdout
///
/// # Arguments
///
/// * 'owm' - the OpenWeatherMap manager
/// * 'city' - the city to report on
/// * 'max_days' - max number of days in the forecast digest
pub fn run(owm: &OpenWeather, city: &str, max_days: usize) -> Result<(), CityWeatherReportError> {
    let report = fetch_report(owm, city, max_days)?;

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report)?;

    Ok(())
}

/// Fetches current conditions and the forecast in parallel and reduces the
/// forecast to a daily digest. Both requests must succeed, a failure in
/// either fails the report as a whole.
///
/// # Arguments
///
/// * 'owm' - the OpenWeatherMap manager
/// * 'city' - the city to report on
/// * 'max_days' - max number of days in the forecast digest
pub fn fetch_report(owm: &OpenWeather, city: &str, max_days: usize) -> Result<WeatherReport, CityWeatherReportError> {
    info!("fetching weather report for {}", city);

    let (current, series) = thread::scope(|s| {
        let current = s.spawn(|| owm.current_weather(city));
        let series = s.spawn(|| owm.forecast(city));

        (current.join(), series.join())
    });

    let current = current
        .map_err(|_| CityWeatherReportError::new("current weather fetch panicked".to_string(), city))?
        .map_err(|e| CityWeatherReportError::new(e.to_string(), city))?;
    let series = series
        .map_err(|_| CityWeatherReportError::new("forecast fetch panicked".to_string(), city))?
        .map_err(|e| CityWeatherReportError::new(e.to_string(), city))?;

    let daily = reduce_daily(&series, Local::now().date_naive(), max_days);
    info!("forecast of {} samples reduced to {} daily entries", series.len(), daily.len());

    Ok(WeatherReport { current, daily })
}
