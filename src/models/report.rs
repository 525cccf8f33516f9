//! Normalization of the backend's loosely-typed AQI payload.
//!
//! The backend forwards the upstream feed verbatim, so every field may be
//! missing, null, or of an unexpected type. The helpers here follow
//! JavaScript truthiness when deciding whether a field is present, which is
//! how the payload's producers treat it.

use crate::models::AqiCategory;
use chrono::{DateTime, Local};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// iaqi keys listed first, in this order; any others follow in payload order.
pub const PREFERRED_ORDER: [&str; 11] = [
    "pm25", "pm10", "co", "no2", "so2", "o3", "t", "h", "w", "p", "dew",
];

/// Shown when a value is missing.
pub const PLACEHOLDER: &str = "--";

/// Human-readable name for an iaqi key. Unknown keys are upper-cased.
pub fn pollutant_display_name(key: &str) -> String {
    let name = match key.to_lowercase().as_str() {
        "co" => "Carbon Monoxide (CO)",
        "no2" => "Nitrogen Dioxide (NO₂)",
        "so2" => "Sulfur Dioxide (SO₂)",
        "o3" => "Ozone (O₃)",
        "pm10" => "Particulate Matter 10 (PM10)",
        "pm25" => "Particulate Matter 2.5 (PM2.5)",
        "t" => "Temperature (°C)",
        "h" => "Humidity (%)",
        "w" => "Wind Speed (m/s)",
        "p" => "Air Pressure (hPa)",
        "dew" => "Dew Point",
        _ => return key.to_uppercase(),
    };
    name.to_string()
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON number the way a browser prints it: `12`, not `12.0`.
fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Display text for a scalar payload field.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// A station's AQI as the payload carried it
#[derive(Debug, Clone, PartialEq)]
pub struct AqiReading {
    /// Text shown in `aqi-value`
    pub display: String,
    /// Number the band is chosen from
    pub value: f64,
}

/// Interpret an AQI field: numbers as-is, numeric strings parsed.
///
/// Anything else (including the upstream feed's `"-"` for stations without
/// a reading) has no AQI.
pub fn parse_aqi(value: &Value) -> Option<AqiReading> {
    let (number, display) = match value {
        Value::Number(n) => (n.as_f64()?, format_number(n)),
        Value::String(s) => (s.trim().parse::<f64>().ok()?, s.clone()),
        _ => return None,
    };

    number.is_finite().then_some(AqiReading {
        display,
        value: number,
    })
}

/// What a successfully decoded backend body amounts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadVerdict<'a> {
    /// Null body, or a truthy `status` other than `"ok"`
    Rejected,
    /// Accepted, but `data` is absent or falsy
    NoData,
    /// The station data to render
    Data(&'a Value),
}

impl<'a> PayloadVerdict<'a> {
    pub fn of(body: &'a Value) -> Self {
        if !is_truthy(body) {
            return Self::Rejected;
        }

        if let Some(status) = body.get("status")
            && is_truthy(status)
            && status.as_str() != Some("ok")
        {
            return Self::Rejected;
        }

        match body.get("data") {
            Some(data) if is_truthy(data) => Self::Data(data),
            _ => Self::NoData,
        }
    }
}

/// A single labeled iaqi entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct PollutantReading {
    /// Key as it appeared in the payload (e.g. `pm25`)
    pub code: String,
    /// Display name (e.g. `Particulate Matter 2.5 (PM2.5)`)
    pub name: String,
    /// Reading as displayed (e.g. `12`)
    pub value: String,
}

impl PollutantReading {
    fn from_entry(code: &str, entry: &Value) -> Self {
        Self {
            code: code.to_string(),
            name: pollutant_display_name(code),
            value: entry
                .get("v")
                .map(display_value)
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

impl fmt::Display for PollutantReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Readings in display order: preferred keys first, then the rest as they
/// appear in the payload. Falsy entries are skipped.
pub fn ordered_readings(iaqi: Option<&Value>) -> Vec<PollutantReading> {
    let Some(entries) = iaqi.and_then(Value::as_object) else {
        return Vec::new();
    };

    let preferred = PREFERRED_ORDER.iter().filter_map(|key| {
        entries
            .get(*key)
            .filter(|entry| is_truthy(entry))
            .map(|entry| PollutantReading::from_entry(key, entry))
    });

    let remaining = entries
        .iter()
        .filter(|(key, entry)| !PREFERRED_ORDER.contains(&key.as_str()) && is_truthy(entry))
        .map(|(key, entry)| PollutantReading::from_entry(key, entry));

    preferred.chain(remaining).collect()
}

/// Pick the observation time from `time.s`, `time.iso`, then `time.t`.
///
/// Without a `time` object the caller-supplied current time is used; with one
/// that has none of those fields the placeholder is shown.
pub fn observation_time(data: &Value, now: impl FnOnce() -> String) -> String {
    match data.get("time") {
        Some(time) if is_truthy(time) => ["s", "iso", "t"]
            .iter()
            .find_map(|field| time.get(*field).filter(|v| is_truthy(v)))
            .map(display_value)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        _ => now(),
    }
}

/// Local time formatted like a browser's default `toLocaleString`.
pub fn format_local_time(now: DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Everything the renderer needs for one search
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub city: String,
    pub aqi: Option<AqiReading>,
    pub pollutants: Vec<PollutantReading>,
    pub last_updated: String,
}

impl QueryResult {
    pub fn from_data(city: &str, data: &Value) -> Self {
        Self::from_data_at(city, data, Local::now())
    }

    /// As [`QueryResult::from_data`], with the fallback clock pinned.
    pub fn from_data_at(city: &str, data: &Value, now: DateTime<Local>) -> Self {
        Self {
            city: city.to_string(),
            aqi: data.get("aqi").and_then(parse_aqi),
            pollutants: ordered_readings(data.get("iaqi")),
            last_updated: observation_time(data, || format_local_time(now)),
        }
    }

    pub fn category(&self) -> Option<AqiCategory> {
        self.aqi.as_ref().map(|aqi| AqiCategory::classify(aqi.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_display_names() {
        assert_eq!(pollutant_display_name("pm25"), "Particulate Matter 2.5 (PM2.5)");
        assert_eq!(pollutant_display_name("NO2"), "Nitrogen Dioxide (NO₂)");
        assert_eq!(pollutant_display_name("t"), "Temperature (°C)");
        assert_eq!(pollutant_display_name("xx"), "XX");
        assert_eq!(pollutant_display_name("wg"), "WG");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!(-1)));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(display_value(&json!(12)), "12");
        assert_eq!(display_value(&json!(12.0)), "12");
        assert_eq!(display_value(&json!(0.4)), "0.4");
        assert_eq!(display_value(&json!(-3.5)), "-3.5");
        assert_eq!(display_value(&json!(1013.25)), "1013.25");
        assert_eq!(display_value(&json!("n/a")), "n/a");
        assert_eq!(display_value(&json!(null)), "--");
    }

    #[test]
    fn test_parse_aqi() {
        let parsed = |v: Value| parse_aqi(&v).map(|aqi| (aqi.display, aqi.value));

        assert_eq!(parsed(json!(99)), Some(("99".to_string(), 99.0)));
        assert_eq!(parsed(json!("154")), Some(("154".to_string(), 154.0)));
        assert_eq!(parsed(json!(" 42 ")), Some((" 42 ".to_string(), 42.0)));
        assert_eq!(parsed(json!(42.6)), Some(("42.6".to_string(), 42.6)));
        assert_eq!(parsed(json!("-")), None);
        assert_eq!(parsed(json!("")), None);
        assert_eq!(parsed(json!("NaN")), None);
        assert_eq!(parsed(json!(null)), None);
        assert_eq!(parsed(json!({"v": 3})), None);
    }

    #[test]
    fn test_fractional_aqi_not_rounded() {
        let data = json!({"aqi": 50.4, "time": {"s": "2024-03-09 14:00:00"}});
        let result = QueryResult::from_data_at("Quito", &data, fixed_now());

        assert_eq!(result.aqi.as_ref().map(|aqi| aqi.display.as_str()), Some("50.4"));
        assert_eq!(result.category(), Some(AqiCategory::Moderate));
    }

    #[test]
    fn test_verdict_error_status() {
        let body = json!({"status": "error", "data": {"aqi": 10}});
        assert_eq!(PayloadVerdict::of(&body), PayloadVerdict::Rejected);

        let body = json!({"status": "error", "data": "Unknown station"});
        assert_eq!(PayloadVerdict::of(&body), PayloadVerdict::Rejected);
    }

    #[test]
    fn test_verdict_null_body() {
        assert_eq!(PayloadVerdict::of(&json!(null)), PayloadVerdict::Rejected);
    }

    #[test]
    fn test_verdict_missing_data() {
        assert_eq!(PayloadVerdict::of(&json!({"status": "ok"})), PayloadVerdict::NoData);
        assert_eq!(
            PayloadVerdict::of(&json!({"status": "ok", "data": null})),
            PayloadVerdict::NoData
        );
    }

    #[test]
    fn test_verdict_status_optional() {
        let body = json!({"data": {"aqi": 10}});
        assert_eq!(PayloadVerdict::of(&body), PayloadVerdict::Data(&body["data"]));

        let body = json!({"status": "", "data": {"aqi": 10}});
        assert!(matches!(PayloadVerdict::of(&body), PayloadVerdict::Data(_)));
    }

    #[test]
    fn test_reading_order() {
        let iaqi = json!({
            "co": {"v": 0.4},
            "xx": {"v": 7},
            "pm25": {"v": 12},
            "wg": {"v": 3.1}
        });

        let readings: Vec<String> = ordered_readings(Some(&iaqi))
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            readings,
            vec![
                "Particulate Matter 2.5 (PM2.5): 12",
                "Carbon Monoxide (CO): 0.4",
                "XX: 7",
                "WG: 3.1",
            ]
        );
    }

    #[test]
    fn test_reading_edge_cases() {
        let iaqi = json!({"pm10": null, "o3": {}, "PM25": {"v": 5}});
        let readings = ordered_readings(Some(&iaqi));

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].code, "o3");
        assert_eq!(readings[0].value, "--");
        assert_eq!(readings[1].name, "Particulate Matter 2.5 (PM2.5)");

        assert!(ordered_readings(None).is_empty());
        assert!(ordered_readings(Some(&json!("bogus"))).is_empty());
    }

    #[test]
    fn test_null_reading_uses_placeholder() {
        let iaqi = json!({"so2": {"v": null}, "h": {"v": 0}});
        let readings = ordered_readings(Some(&iaqi));

        assert_eq!(readings[0].to_string(), "Sulfur Dioxide (SO₂): --");
        assert_eq!(readings[1].to_string(), "Humidity (%): 0");
    }

    #[test]
    fn test_observation_time_priority() {
        let now = || "NOW".to_string();

        let data = json!({"time": {"s": "2024-03-09 14:00:00", "iso": "2024-03-09T14:00:00+01:00", "t": 1709989200}});
        assert_eq!(observation_time(&data, now), "2024-03-09 14:00:00");

        let data = json!({"time": {"s": "", "iso": "2024-03-09T14:00:00+01:00"}});
        assert_eq!(observation_time(&data, now), "2024-03-09T14:00:00+01:00");

        let data = json!({"time": {"t": 1709989200}});
        assert_eq!(observation_time(&data, now), "1709989200");

        let data = json!({"time": {"tz": "+01:00"}});
        assert_eq!(observation_time(&data, now), "--");

        let data = json!({"aqi": 5});
        assert_eq!(observation_time(&data, now), "NOW");
    }

    #[test]
    fn test_query_result_from_data() {
        let data = json!({
            "aqi": "57",
            "iaqi": {"pm25": {"v": 57}, "h": {"v": 81}},
        });

        let result = QueryResult::from_data_at("Lyon", &data, fixed_now());

        assert_eq!(result.city, "Lyon");
        assert_eq!(result.aqi.as_ref().map(|aqi| aqi.value), Some(57.0));
        assert_eq!(result.aqi.as_ref().map(|aqi| aqi.display.as_str()), Some("57"));
        assert_eq!(result.category(), Some(AqiCategory::Moderate));
        assert_eq!(result.pollutants.len(), 2);
        assert_eq!(result.last_updated, "3/9/2024, 2:05:07 PM");
    }

    #[test]
    fn test_query_result_without_aqi() {
        let data = json!({"aqi": "-", "iaqi": {}, "time": {"s": "2024-01-01 00:00:00"}});
        let result = QueryResult::from_data_at("Nowhere", &data, fixed_now());

        assert_eq!(result.aqi, None);
        assert_eq!(result.category(), None);
        assert!(result.pollutants.is_empty());
        assert_eq!(result.last_updated, "2024-01-01 00:00:00");
    }
}
