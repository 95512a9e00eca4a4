//! A single bike rental, as stored in a city CSV file.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// One row of a city dataset.
///
/// Columns that a city does not publish (washington has no `Gender` or
/// `Birth Year`) deserialize to `None`; whether the columns exist at all is
/// tracked separately on the [`crate::loader::Schema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "Start Time", with = "timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(rename = "End Time", with = "timestamp")]
    pub end_time: NaiveDateTime,
    #[serde(rename = "Start Station", default)]
    pub start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    pub end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default, with = "birth_year")]
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Start station with surrounding whitespace removed, `None` if blank.
    pub fn start_station_label(&self) -> Option<&str> {
        normalize(self.start_station.as_deref())
    }

    /// End station with surrounding whitespace removed, `None` if blank.
    pub fn end_station_label(&self) -> Option<&str> {
        normalize(self.end_station.as_deref())
    }

    /// `end_time - start_time`. Negative when the source rows are out of order.
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

fn normalize(label: Option<&str>) -> Option<&str> {
    label.map(str::trim).filter(|s| !s.is_empty())
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const WRITE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    // `%.f` also accepts a missing fractional part
    const READ_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), READ_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
    }
}

mod birth_year {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(year: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error> {
        match year {
            Some(y) => serializer.serialize_some(y),
            None => serializer.serialize_none(),
        }
    }

    /// Accepts `1989`, `1989.0` or an empty field.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let year: f64 = raw
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid birth year '{raw}': {e}")))?;
        let year = year.trunc();
        if !year.is_finite() || year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
            return Err(de::Error::custom(format!("birth year '{raw}' is out of range")));
        }
        Ok(Some(year as i32))
    }
}
