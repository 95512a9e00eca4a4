use serde::Serialize;

use crate::calendar::{DaySelector, MonthSelector};
use crate::record::TripRecord;

/// Month and weekday restriction on a trip's start time.
///
/// Both selectors must match (logical AND), so the order they are
/// checked in does not matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TripFilter {
    #[serde(serialize_with = "crate::calendar::serialize_display")]
    pub month: MonthSelector,
    #[serde(serialize_with = "crate::calendar::serialize_display")]
    pub day: DaySelector,
}

impl TripFilter {
    pub fn new(month: MonthSelector, day: DaySelector) -> Self {
        Self { month, day }
    }

    pub fn matches(&self, trip: &TripRecord) -> bool {
        self.month.matches(&trip.start_time) && self.day.matches(&trip.start_time)
    }

    /// Returns the matching trips as a new collection; `records` is untouched.
    pub fn apply(&self, records: &[TripRecord]) -> Vec<TripRecord> {
        records.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::trip;
    use chrono::{Datelike, Month, Weekday};

    fn sample() -> Vec<TripRecord> {
        vec![
            // Wednesday
            trip("2017-03-01 08:00:00", "2017-03-01 08:10:00", Some("A"), Some("B")),
            // Thursday
            trip("2017-03-02 09:00:00", "2017-03-02 09:10:00", Some("A"), Some("C")),
            // Wednesday
            trip("2017-04-05 17:00:00", "2017-04-05 17:30:00", Some("B"), None),
            // Sunday
            trip("2017-06-04 12:00:00", "2017-06-04 12:20:00", Some("C"), Some("A")),
        ]
    }

    #[test]
    fn test_all_all_keeps_everything() {
        let records = sample();
        assert_eq!(TripFilter::default().apply(&records), records);
    }

    #[test]
    fn test_month_filter() {
        let f = TripFilter::new(MonthSelector::Only(Month::March), DaySelector::All);
        let out = f.apply(&sample());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|t| t.start_time.month() == 3));
    }

    #[test]
    fn test_day_filter() {
        let f = TripFilter::new(MonthSelector::All, DaySelector::Only(Weekday::Wed));
        let out = f.apply(&sample());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|t| t.start_time.weekday() == Weekday::Wed));
    }

    #[test]
    fn test_month_and_day_intersect() {
        let f = TripFilter::new(MonthSelector::Only(Month::April), DaySelector::Only(Weekday::Wed));
        let out = f.apply(&sample());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start_station.as_deref(), Some("B"));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let f = TripFilter::new(MonthSelector::Only(Month::December), DaySelector::All);
        assert!(f.apply(&sample()).is_empty());
        assert!(f.apply(&[]).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_subset() {
        let records = sample();
        for month in MonthSelector::variants() {
            for day in DaySelector::variants() {
                let f = TripFilter::new(month, day);
                let once = f.apply(&records);
                assert!(once.iter().all(|t| records.contains(t) && f.matches(t)));
                assert_eq!(f.apply(&once), once);
            }
        }
    }
}
