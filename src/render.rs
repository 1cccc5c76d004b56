use std::io;
use std::io::Write;
use crate::models::report::WeatherReport;

/// Writes a full weather report, current conditions followed by one line
/// per daily forecast entry
///
/// # Arguments
///
/// * 'w' - the sink to write the report to
/// * 'report' - the report to write
pub fn write_report<W: Write>(w: &mut W, report: &WeatherReport) -> Result<(), io::Error> {
    let current = &report.current;

    writeln!(w, "{}  {}", current.city, current.date_time.format("%A, %B %e, %Y"))?;
    writeln!(w, "{}  {:.0}°C  {}", icon_glyph(&current.icon), current.temperature.round(), current.description)?;
    writeln!(w, "humidity {} %  wind {:.1} m/s", current.humidity, current.wind_speed)?;

    if !report.daily.is_empty() {
        writeln!(w)?;
    }

    for sample in &report.daily {
        writeln!(
            w,
            "{}  {}  {:.0}°C  {}",
            sample.date_time.format("%a"),
            icon_glyph(&sample.icon),
            sample.temperature.round(),
            sample.description
        )?;
    }

    Ok(())
}

/// Maps an OpenWeatherMap icon code to a terminal glyph. The code's two
/// leading digits select the condition, the trailing d/n is ignored.
///
/// # Arguments
///
/// * 'icon' - the icon code, e.g. "10d"
fn icon_glyph(icon: &str) -> &'static str {
    match icon.get(..2).unwrap_or("") {
        "01" => "\u{2600}",  // clear sky
        "02" => "\u{26c5}",  // few clouds
        "03" => "\u{2601}",  // scattered clouds
        "04" => "\u{2601}",  // broken clouds
        "09" => "\u{1f327}", // shower rain
        "10" => "\u{1f326}", // rain
        "11" => "\u{26c8}",  // thunderstorm
        "13" => "\u{2744}",  // snow
        "50" => "\u{1f32b}", // mist
        _    => "\u{2022}",
    }
}
