//! Day/night period alignment.
//!
//! The forecast alternates daytime and nighttime periods. A nighttime period
//! opens a day; the daytime period that follows closes it. Edge-of-feed
//! periods without a partner are dropped:
//!
//! - a daytime period with no open day (leading partial day)
//! - an open day still waiting for its daytime period at the end of the feed
//! - an open day followed by another nighttime period

use log::debug;

use crate::domain::{DailyRecord, RawPeriod, Wind};
use crate::forecast::classify::{classify, parse_precip_probability, parse_wind_speed};

/// Fold a time-ordered period sequence into one record per closed day.
pub fn align_periods(periods: &[RawPeriod]) -> Vec<DailyRecord> {
    let (days, open) = periods
        .iter()
        .enumerate()
        .fold((Vec::<DailyRecord>::new(), None::<DailyRecord>), |(mut days, open), (idx, period)| {
            let open = if !period.is_daytime {
                if let Some(discarded) = open {
                    debug!(
                        "period {idx}: nighttime period while {} is still open; discarding it",
                        describe(&discarded)
                    );
                }
                Some(open_day(period))
            } else if let Some(mut day) = open {
                close_day(&mut day, period);
                days.push(day);
                None
            } else {
                debug!("period {idx}: daytime period without a preceding night; dropped");
                None
            };
            (days, open)
        });

    if let Some(unclosed) = open {
        debug!("feed ends with unclosed {}; dropped", describe(&unclosed));
    }

    days
}

/// Seed a new day entirely from a nighttime period.
fn open_day(period: &RawPeriod) -> DailyRecord {
    DailyRecord {
        day_label: period.end_time.day_label(),
        min_temp: period.temperature,
        max_temp: period.temperature,
        precip_probability: parse_precip_probability(&period.icon_token),
        wind: period_wind(period),
        weather_category: classify(&period.icon_token),
    }
}

/// Merge the closing daytime period into an open day.
fn close_day(day: &mut DailyRecord, period: &RawPeriod) {
    day.min_temp = day.min_temp.min(period.temperature);
    day.max_temp = day.max_temp.max(period.temperature);
    day.precip_probability = day
        .precip_probability
        .max(parse_precip_probability(&period.icon_token));

    // The candidate wins unless it is strictly slower.
    let wind = period_wind(period);
    if wind.speed_value >= day.wind.speed_value {
        day.wind = wind;
    }

    // An unset category takes the candidate as is (even `None`); otherwise only
    // a strictly higher rank replaces it.
    let candidate = classify(&period.icon_token);
    match (day.weather_category, candidate) {
        (None, _) => day.weather_category = candidate,
        (Some(current), Some(c)) if c.rank > current.rank => day.weather_category = Some(c),
        _ => {}
    }
}

fn period_wind(period: &RawPeriod) -> Wind {
    Wind {
        speed_value: parse_wind_speed(&period.wind_speed_text),
        direction: period.wind_direction.clone(),
    }
}

fn describe(day: &DailyRecord) -> String {
    format!("day '{}' ({}°)", day.day_label, day.min_temp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    use crate::domain::{Timestamp, WeatherCategory};

    fn period(is_daytime: bool, temp: f64, icon: &str, wind: &str, dir: &str, end: &str) -> RawPeriod {
        RawPeriod {
            is_daytime,
            temperature: temp,
            wind_speed_text: wind.to_string(),
            wind_direction: dir.to_string(),
            icon_token: format!("https://api.weather.gov/icons/land/day/{icon}"),
            end_time: Timestamp::Iso(DateTime::parse_from_rfc3339(end).unwrap()),
        }
    }

    fn night(temp: f64, icon: &str, wind: &str, dir: &str) -> RawPeriod {
        period(false, temp, icon, wind, dir, "2024-03-05T06:00:00-05:00")
    }

    fn day(temp: f64, icon: &str, wind: &str, dir: &str) -> RawPeriod {
        period(true, temp, icon, wind, dir, "2024-03-05T18:00:00-05:00")
    }

    #[test]
    fn night_then_day_merges_into_one_record() {
        let periods = vec![night(40.0, "ovc?", "5 mph", "N"), day(55.0, "skc?", "10 mph", "S")];
        let days = align_periods(&periods);

        assert_eq!(
            days,
            vec![DailyRecord {
                day_label: "Tue".to_string(),
                min_temp: 40.0,
                max_temp: 55.0,
                precip_probability: 0,
                wind: Wind { speed_value: 10, direction: "S".to_string() },
                weather_category: Some(WeatherCategory { label: "cloudy", rank: 20 }),
            }]
        );
    }

    #[test]
    fn day_label_comes_from_the_night_period() {
        let mut n = night(40.0, "ovc", "", "");
        n.end_time = Timestamp::Epoch(0);
        let days = align_periods(&[n, day(50.0, "skc", "", "")]);
        assert_eq!(days[0].day_label, "Thu");
    }

    #[test]
    fn leading_day_and_trailing_night_are_dropped() {
        let periods = vec![
            day(60.0, "skc", "5 mph", "E"),
            night(41.0, "rain,40", "5 mph", "E"),
            day(52.0, "rain,70", "5 mph", "E"),
            night(38.0, "snow,90", "5 mph", "E"),
        ];
        let days = align_periods(&periods);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].min_temp, 41.0);
        assert_eq!(days[0].max_temp, 52.0);
        assert_eq!(days[0].precip_probability, 70);
    }

    #[test]
    fn repeated_night_discards_the_open_day() {
        let periods = vec![
            night(30.0, "snow,80", "20 mph", "N"),
            night(45.0, "ovc", "5 mph", "W"),
            day(50.0, "skc", "5 mph", "W"),
        ];
        let days = align_periods(&periods);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].min_temp, 45.0);
        assert_eq!(days[0].precip_probability, 0);
        assert_eq!(days[0].weather_category.unwrap().label, "cloudy");
    }

    #[test]
    fn record_count_matches_closed_nights() {
        let periods = vec![
            day(60.0, "skc", "", ""),
            night(40.0, "skc", "", ""),
            day(61.0, "skc", "", ""),
            night(41.0, "skc", "", ""),
            day(62.0, "skc", "", ""),
            day(63.0, "skc", "", ""),
            night(42.0, "skc", "", ""),
            night(43.0, "skc", "", ""),
            day(64.0, "skc", "", ""),
            night(44.0, "skc", "", ""),
        ];
        let days = align_periods(&periods);
        let maxes: Vec<f64> = days.iter().map(|d| d.max_temp).collect();
        assert_eq!(maxes, vec![61.0, 62.0, 64.0]);
        assert!(align_periods(&[]).is_empty());
    }

    #[test]
    fn faster_wind_wins() {
        let days = align_periods(&[night(40.0, "skc", "15 mph", "NW"), day(50.0, "skc", "10 mph", "SE")]);
        assert_eq!(days[0].wind, Wind { speed_value: 15, direction: "NW".to_string() });

        let days = align_periods(&[night(40.0, "skc", "10 mph", "NW"), day(50.0, "skc", "15 mph", "SE")]);
        assert_eq!(days[0].wind, Wind { speed_value: 15, direction: "SE".to_string() });
    }

    #[test]
    fn equal_wind_prefers_the_daytime_period() {
        let days = align_periods(&[night(40.0, "skc", "10 mph", "NW"), day(50.0, "skc", "10 mph", "SE")]);
        assert_eq!(days[0].wind.direction, "SE");
    }

    #[test]
    fn category_tie_keeps_the_night_classification() {
        // rain_sleet and tsra share rank 60.
        let days = align_periods(&[night(40.0, "rain_sleet", "", ""), day(50.0, "tsra", "", "")]);
        assert_eq!(days[0].weather_category.unwrap().label, "sleet");
    }

    #[test]
    fn category_higher_rank_replaces() {
        let days = align_periods(&[night(40.0, "skc", "", ""), day(50.0, "tornado", "", "")]);
        assert_eq!(days[0].weather_category.unwrap().label, "wi-tornado");
    }

    #[test]
    fn category_unknown_handling() {
        // Unknown night code: the day code is adopted.
        let days = align_periods(&[night(40.0, "mystery", "", ""), day(50.0, "rain", "", "")]);
        assert_eq!(days[0].weather_category.unwrap().label, "rain");

        // Unknown day code never clears a known night code.
        let days = align_periods(&[night(40.0, "rain", "", ""), day(50.0, "mystery", "", "")]);
        assert_eq!(days[0].weather_category.unwrap().label, "rain");

        let days = align_periods(&[night(40.0, "", "", ""), day(50.0, "", "", "")]);
        assert_eq!(days[0].weather_category, None);
    }

    #[test]
    fn precipitation_is_the_max_of_both_periods() {
        let days = align_periods(&[night(40.0, "rain,80", "", ""), day(50.0, "rain,30", "", "")]);
        assert_eq!(days[0].precip_probability, 80);
    }
}
