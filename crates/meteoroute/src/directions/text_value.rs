use serde::{Deserialize, Serialize};

/// A numeric value paired with its display text, e.g. `{"text": "1.5 km", "value": 1500}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    pub value: f64,
}

impl TextValue {
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    pub fn meters(value: f64) -> Self {
        Self::new(format!("{} m", value.ceil() as i64), value)
    }

    pub fn seconds(value: f64) -> Self {
        Self::new(hours_minutes(value.trunc() as i64), value)
    }
}

/// Formats whole seconds as `"{h} h {m} min"`, dropping leftover seconds.
pub fn hours_minutes(seconds: i64) -> String {
    format!("{} h {} min", seconds / 3600, seconds % 3600 / 60)
}
