use chrono::{Datelike, Month, Timelike, Weekday};
use serde::Serialize;

use crate::analyzers::utility::mode;
use crate::calendar::{month_of, serialize_month, serialize_weekday};
use crate::record::TripRecord;

/// Busiest month, weekday and start hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    #[serde(serialize_with = "serialize_month")]
    pub most_common_month: Option<Month>,
    #[serde(serialize_with = "serialize_weekday")]
    pub most_common_day: Option<Weekday>,
    pub most_common_hour: Option<u32>,
}

impl TimeStats {
    pub fn from_trips(trips: &[TripRecord]) -> Self {
        TimeStats {
            most_common_month: mode(trips.iter().map(|t| month_of(&t.start_time))).map(|(m, _)| m),
            most_common_day: mode(trips.iter().map(|t| t.start_time.weekday())).map(|(d, _)| d),
            most_common_hour: mode(trips.iter().map(|t| t.start_time.hour())).map(|(h, _)| h),
        }
    }
}
