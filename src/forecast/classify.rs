//! Condition-token classification.
//!
//! Forecast icons look like `https://api.weather.gov/icons/land/night/tsra_sct,60?size=medium`.
//! The last path segment carries the condition code and, optionally, a
//! precipitation probability. Anything that does not parse degrades to the
//! "absent" value (`None` / `0`) instead of failing.

use crate::domain::WeatherCategory;

/// Condition code → (class label, severity rank).
///
/// Ranks only need to be ordered: clear < overcast < windy < precipitation
/// < atmospheric hazards / thunderstorms < tropical and tornadic events.
const CONDITIONS: &[(&str, &str, u32)] = &[
    ("skc", "sunny", 0),
    ("few", "sunny", 0),
    ("sct", "sunny-overcast", 10),
    ("bkn", "sunny-overcast", 10),
    ("ovc", "cloudy", 20),
    ("wind_skc", "windy", 30),
    ("wind_few", "windy", 30),
    ("wind_sct", "cloudy-windy", 40),
    ("wind_bkn", "cloudy-windy", 40),
    ("wind_ovc", "cloudy-windy", 40),
    ("rain_showers", "showers", 45),
    ("rain_showers_hi", "showers", 45),
    ("snow", "snow", 50),
    ("rain", "rain", 50),
    ("rain_snow", "rain-mix", 60),
    ("rain_sleet", "sleet", 60),
    ("snow_sleet", "sleet", 60),
    ("fzra", "rain-mix", 60),
    ("rain_fzra", "rain-mix", 60),
    ("snow_fzra", "rain-mix", 60),
    ("sleet", "sleet", 60),
    ("tsra", "thunderstorm", 60),
    ("tsra_sct", "thunderstorm", 60),
    ("tsra_hi", "thunderstorm", 60),
    ("fog", "fog", 55),
    ("haze", "wi-haze", 65),
    ("hot", "wi-hot", 65),
    ("cold", "wi-cold", 65),
    ("blizzard", "snow-wind", 75),
    ("dust", "wi-dust", 200),
    ("smoke", "wi-smoke", 300),
    ("tropical_storm", "wi-hurricane", 800),
    ("hurricane", "wi-hurricane-warning", 900),
    ("tornado", "wi-tornado", 1000),
];

/// Split an icon token into its condition code and optional probability text.
///
/// Returns `None` when the last path segment has no condition code at all.
fn condition_parts(icon_token: &str) -> Option<(&str, Option<&str>)> {
    let segment = icon_token.rsplit('/').next()?;
    let segment = segment.split('?').next()?;
    let mut parts = segment.split(',');
    let code = parts.next().filter(|c| !c.is_empty())?;
    Some((code, parts.next()))
}

/// Map an icon token to its weather category.
///
/// Unknown or malformed tokens yield `None`.
pub fn classify(icon_token: &str) -> Option<WeatherCategory> {
    let (code, _) = condition_parts(icon_token)?;
    CONDITIONS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|&(_, label, rank)| WeatherCategory { label, rank })
}

/// Precipitation probability encoded in an icon token (`rain,40` → 40).
///
/// Missing or non-numeric values read as 0.
pub fn parse_precip_probability(icon_token: &str) -> i64 {
    condition_parts(icon_token)
        .and_then(|(_, prob)| prob)
        .and_then(leading_integer)
        .unwrap_or(0)
}

/// Leading numeric token of a wind text (`"5 to 10 mph"` → 5).
pub fn parse_wind_speed(text: &str) -> i64 {
    text.split_whitespace().next().and_then(leading_integer).unwrap_or(0)
}

/// Integer prefix of `s` (optional sign, then digits), like a lenient `parseInt`.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..].chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
