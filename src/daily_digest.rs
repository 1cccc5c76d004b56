use std::collections::HashSet;
use chrono::NaiveDate;
use crate::models::report::WeatherSample;

/// Reduces a 3-hourly forecast series to at most 'max_days' representative
/// samples, one per distinct local calendar day. The current day is skipped
/// and for every other day the first sample encountered represents it, so the
/// digest keeps the order in which days first appear in the series.
///
/// Days are keyed on the full calendar date, so a series spanning more than
/// a week keeps samples from distinct weeks even when they share a weekday.
///
/// The whole series is scanned before the cut to 'max_days' is applied.
///
/// # Arguments
///
/// * 'series' - forecast samples ordered by time, as delivered by the source
/// * 'today' - the local calendar day to exclude from the digest
/// * 'max_days' - max number of days in the returned digest
pub fn reduce_daily(series: &[WeatherSample], today: NaiveDate, max_days: usize) -> Vec<WeatherSample> {
    let mut seen_days: HashSet<NaiveDate> = HashSet::new();
    let mut digest: Vec<WeatherSample> = Vec::new();

    for sample in series {
        let day = sample.date_time.date_naive();

        if day == today || seen_days.contains(&day) {
            continue;
        }

        seen_days.insert(day);
        digest.push(sample.clone());
    }

    digest.truncate(max_days);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn sample(y: i32, m: u32, d: u32, hour: u32, temp: f64) -> WeatherSample {
        let date_time: DateTime<Local> = Local.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap();
        WeatherSample {
            date_time,
            temperature: temp,
            description: "scattered clouds".to_string(),
            icon: "03d".to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_series_gives_empty_digest() {
        let digest = reduce_daily(&[], day(2026, 8, 7), 5);
        assert!(digest.is_empty());
    }

    #[test]
    fn series_with_only_today_gives_empty_digest() {
        let series = vec![
            sample(2026, 8, 7, 9, 14.0),
            sample(2026, 8, 7, 12, 17.5),
            sample(2026, 8, 7, 15, 18.2),
        ];

        let digest = reduce_daily(&series, day(2026, 8, 7), 5);
        assert!(digest.is_empty());
    }

    #[test]
    fn max_days_zero_gives_empty_digest() {
        let series = vec![
            sample(2026, 8, 8, 9, 14.0),
            sample(2026, 8, 9, 9, 15.0),
        ];

        let digest = reduce_daily(&series, day(2026, 8, 7), 0);
        assert!(digest.is_empty());
    }

    #[test]
    fn first_sample_of_each_day_represents_it() {
        // 8 samples over today plus three following days, two per full day
        let series = vec![
            sample(2026, 8, 7, 15, 20.0),
            sample(2026, 8, 7, 18, 19.0),
            sample(2026, 8, 8, 9, 14.0),
            sample(2026, 8, 8, 21, 11.0),
            sample(2026, 8, 9, 0, 9.5),
            sample(2026, 8, 9, 12, 16.0),
            sample(2026, 8, 10, 6, 12.0),
            sample(2026, 8, 10, 18, 17.0),
        ];

        let digest = reduce_daily(&series, day(2026, 8, 7), 3);

        assert_eq!(digest.len(), 3);
        assert_eq!(digest[0], series[2]);
        assert_eq!(digest[1], series[4]);
        assert_eq!(digest[2], series[6]);
    }

    #[test]
    fn digest_never_exceeds_max_days() {
        let series: Vec<WeatherSample> = (8..=14)
            .map(|d| sample(2026, 8, d, 12, d as f64))
            .collect();

        let digest = reduce_daily(&series, day(2026, 8, 7), 3);

        assert_eq!(digest.len(), 3);
        assert_eq!(digest[0].date_time.date_naive(), day(2026, 8, 8));
        assert_eq!(digest[2].date_time.date_naive(), day(2026, 8, 10));
    }

    #[test]
    fn short_series_gives_short_digest() {
        let series = vec![
            sample(2026, 8, 8, 9, 14.0),
            sample(2026, 8, 9, 9, 15.0),
        ];

        let digest = reduce_daily(&series, day(2026, 8, 7), 5);
        assert_eq!(digest.len(), 2);
    }

    #[test]
    fn no_digest_day_is_today_or_duplicated() {
        let series = vec![
            sample(2026, 8, 7, 9, 20.0),
            sample(2026, 8, 8, 0, 14.0),
            sample(2026, 8, 8, 12, 16.0),
            sample(2026, 8, 7, 21, 18.0),
            sample(2026, 8, 9, 3, 10.0),
            sample(2026, 8, 9, 15, 13.0),
        ];

        let today = day(2026, 8, 7);
        let digest = reduce_daily(&series, today, 5);

        let mut seen: HashSet<NaiveDate> = HashSet::new();
        for entry in &digest {
            let entry_day = entry.date_time.date_naive();
            assert_ne!(entry_day, today);
            assert!(seen.insert(entry_day));
        }
        assert_eq!(digest.len(), 2);
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let series = vec![
            sample(2026, 8, 10, 9, 12.0),
            sample(2026, 8, 8, 9, 14.0),
            sample(2026, 8, 9, 9, 15.0),
        ];

        let digest = reduce_daily(&series, day(2026, 8, 7), 5);

        let days: Vec<NaiveDate> = digest.iter().map(|s| s.date_time.date_naive()).collect();
        assert_eq!(days, vec![day(2026, 8, 10), day(2026, 8, 8), day(2026, 8, 9)]);
    }

    #[test]
    fn forecast_longer_than_a_week_keeps_distinct_dates() {
        // Aug 8 and Aug 15 2026 are both Saturdays
        let series = vec![
            sample(2026, 8, 8, 12, 14.0),
            sample(2026, 8, 15, 12, 21.0),
        ];

        let digest = reduce_daily(&series, day(2026, 8, 7), 5);

        assert_eq!(digest.len(), 2);
        assert_eq!(digest[0].date_time.date_naive(), day(2026, 8, 8));
        assert_eq!(digest[1].date_time.date_naive(), day(2026, 8, 15));
    }

    #[test]
    fn whole_series_is_scanned_before_the_cut() {
        // A late re-occurrence of an early day must not push a fresh day
        // past the cut, only the count of distinct days matters
        let series = vec![
            sample(2026, 8, 8, 9, 14.0),
            sample(2026, 8, 8, 12, 15.0),
            sample(2026, 8, 8, 15, 16.0),
            sample(2026, 8, 9, 9, 13.0),
            sample(2026, 8, 10, 9, 12.0),
        ];

        let digest = reduce_daily(&series, day(2026, 8, 7), 3);

        let days: Vec<NaiveDate> = digest.iter().map(|s| s.date_time.date_naive()).collect();
        assert_eq!(days, vec![day(2026, 8, 8), day(2026, 8, 9), day(2026, 8, 10)]);
    }
}
