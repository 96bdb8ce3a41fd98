//! Weather reply rendering
//!
//! Turns a provider payload into the newline-joined report strings sent
//! back into the chat, plus the fixed-offset clock conversion the report
//! displays sunrise and sunset with.

use chrono::{DateTime, FixedOffset};

use super::{CurrentWeather, WindSector};
use crate::{Error, Result};

/// Fixed display offset for sunrise/sunset times (MSK, no DST)
const MSK_OFFSET_SECS: i32 = 3 * 3600;

/// Convert a Unix timestamp to an `HH:MM:SS` clock string at MSK
///
/// Only the time of day is rendered; a rollover past midnight is not
/// special-cased. Returns `None` for timestamps `chrono` cannot represent.
#[must_use]
pub fn msk_clock(unix: i64) -> Option<String> {
    let offset = FixedOffset::east_opt(MSK_OFFSET_SECS)?;
    let time = DateTime::from_timestamp(unix, 0)?.with_timezone(&offset);
    Some(time.format("%H:%M:%S").to_string())
}

/// Render the full multi-line report used for text and location replies
///
/// # Errors
///
/// Returns error if the payload has no condition entry, the wind bearing
/// falls outside `[0, 360]`, or a sun timestamp is unrepresentable
pub fn full_report(weather: &CurrentWeather) -> Result<String> {
    let description = leading_description(weather)?;

    let direction = WindSector::classify(weather.wind.deg).ok_or_else(|| {
        Error::Weather(format!(
            "wind bearing {} outside [0, 360]",
            weather.wind.deg
        ))
    })?;

    let sunrise = msk_clock(weather.sys.sunrise).ok_or_else(|| {
        Error::Weather(format!("sunrise timestamp {} out of range", weather.sys.sunrise))
    })?;
    let sunset = msk_clock(weather.sys.sunset).ok_or_else(|| {
        Error::Weather(format!("sunset timestamp {} out of range", weather.sys.sunset))
    })?;

    Ok([
        format!("{description}."),
        format!(
            "Температура {:.1} ℃, ощущается как {:.1} ℃.",
            weather.main.temp, weather.main.feels_like
        ),
        format!("Атмосферное давление {} мм рт. ст.", weather.main.pressure),
        format!("Влажность {} %.", weather.main.humidity),
        format!("Видимость {} метров.", weather.visibility),
        format!("Ветер {} м/с {}.", weather.wind.speed, direction.label()),
        format!("Восход солнца {sunrise} МСК. Закат {sunset} МСК."),
    ]
    .join("\n"))
}

/// Render the condensed report used for voice replies
///
/// Temperature, perceived temperature, pressure and humidity are rounded
/// to the nearest integer and the recognized place name leads the reply.
///
/// # Errors
///
/// Returns error if the payload has no condition entry
pub fn voice_report(place: &str, weather: &CurrentWeather) -> Result<String> {
    let description = leading_description(weather)?;

    Ok([
        format!("Населенный пункт {place}."),
        format!("{description}."),
        format!("Температура {:.0} градусов цельсия.", weather.main.temp),
        format!("Ощущается как {:.0} градусов цельсия.", weather.main.feels_like),
        format!(
            "Давление {:.0} миллиметров ртутного столба.",
            weather.main.pressure
        ),
        format!("Влажность {:.0} процентов.", weather.main.humidity),
    ]
    .join("\n"))
}

/// Pick the leading condition description out of the payload
fn leading_description(weather: &CurrentWeather) -> Result<&str> {
    weather
        .weather
        .first()
        .map(|c| c.description.as_str())
        .ok_or_else(|| Error::Weather("payload contained no condition description".to_string()))
}

#[cfg(test)]
mod tests {
    use super::{full_report, msk_clock, voice_report};
    use crate::weather::{CurrentWeather, MainReadings, SunTimes, WeatherCondition, Wind};

    fn sample() -> CurrentWeather {
        CurrentWeather {
            weather: vec![WeatherCondition {
                description: "переменная облачность".to_string(),
            }],
            main: MainReadings {
                temp: 15.33,
                feels_like: 14.78,
                pressure: 1016.0,
                humidity: 81.0,
            },
            visibility: 10000,
            wind: Wind {
                speed: 3.5,
                deg: 250.0,
            },
            // 02:30:00 / 16:45:00 UTC
            sys: SunTimes {
                sunrise: 1_641_609_000,
                sunset: 1_641_660_300,
            },
        }
    }

    #[test]
    fn epoch_start_is_three_in_the_morning_msk() {
        assert_eq!(msk_clock(0).as_deref(), Some("03:00:00"));
    }

    #[test]
    fn late_evening_utc_rolls_past_midnight() {
        // 21:30:00 UTC
        assert_eq!(msk_clock(77_400).as_deref(), Some("00:30:00"));
    }

    #[test]
    fn full_report_renders_every_line_in_order() {
        let report = full_report(&sample()).unwrap();
        assert_eq!(
            report,
            "переменная облачность.\n\
             Температура 15.3 ℃, ощущается как 14.8 ℃.\n\
             Атмосферное давление 1016 мм рт. ст.\n\
             Влажность 81 %.\n\
             Видимость 10000 метров.\n\
             Ветер 3.5 м/с З.\n\
             Восход солнца 05:30:00 МСК. Закат 19:45:00 МСК."
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let weather = sample();
        assert_eq!(
            full_report(&weather).unwrap(),
            full_report(&weather).unwrap()
        );
    }

    #[test]
    fn voice_report_rounds_and_prefixes_place_name() {
        let report = voice_report("Moscow", &sample()).unwrap();
        assert_eq!(
            report,
            "Населенный пункт Moscow.\n\
             переменная облачность.\n\
             Температура 15 градусов цельсия.\n\
             Ощущается как 15 градусов цельсия.\n\
             Давление 1016 миллиметров ртутного столба.\n\
             Влажность 81 процентов."
        );
    }

    #[test]
    fn missing_condition_description_is_an_error() {
        let mut weather = sample();
        weather.weather.clear();
        assert!(full_report(&weather).is_err());
        assert!(voice_report("Moscow", &weather).is_err());
    }

    #[test]
    fn unclassifiable_wind_bearing_is_an_error() {
        let mut weather = sample();
        weather.wind.deg = 400.0;
        assert!(full_report(&weather).is_err());
    }
}
