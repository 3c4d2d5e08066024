use jiff::{Timestamp, Zoned, civil::DateTime, tz::TimeZone};

/// Parses a departure time. Accepts, in order:
///
/// - a zoned datetime, e.g. `2024-02-03T07:30[Europe/Rome]`
/// - an instant with an offset, e.g. `2024-02-03T07:30:00+01:00`, shown in `time_zone`
/// - a civil datetime, e.g. `2024-02-03T07:30`, taken as local time in `time_zone`
pub fn parse_departure(input: &str, time_zone: &TimeZone) -> Result<Zoned, String> {
    if let Ok(zoned) = input.parse::<Zoned>() {
        return Ok(zoned);
    }

    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(time_zone.clone()));
    }

    if let Ok(datetime) = input.parse::<DateTime>() {
        return datetime.to_zoned(time_zone.clone()).map_err(|err| err.to_string());
    }

    Err(format!("Invalid departure time {input:?}"))
}
