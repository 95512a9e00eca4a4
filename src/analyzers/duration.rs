use chrono::TimeDelta;
use serde::{Serialize, Serializer};

use crate::record::TripRecord;

/// Total and mean trip duration.
///
/// Durations are taken as-is from `end - start`, so rows with swapped
/// timestamps contribute negative spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    #[serde(rename = "total_seconds", serialize_with = "as_seconds")]
    pub total: TimeDelta,
    #[serde(rename = "mean_seconds", serialize_with = "opt_as_seconds")]
    pub mean: Option<TimeDelta>,
}

impl Default for DurationStats {
    fn default() -> Self {
        DurationStats {
            trip_count: 0,
            total: TimeDelta::zero(),
            mean: None,
        }
    }
}

impl DurationStats {
    pub fn from_trips(trips: &[TripRecord]) -> Self {
        let total = trips
            .iter()
            .map(TripRecord::duration)
            .fold(TimeDelta::zero(), |acc, d| acc + d);

        DurationStats {
            trip_count: trips.len(),
            total,
            mean: mean_of(total, trips.len()),
        }
    }

    /// Whole seconds of the mean duration, truncated toward zero.
    ///
    /// Means of a day or longer keep their full length; only the
    /// sub-second part is dropped.
    pub fn mean_seconds(&self) -> Option<i64> {
        self.mean.map(|m| m.num_seconds())
    }
}

fn mean_of(total: TimeDelta, count: usize) -> Option<TimeDelta> {
    if count == 0 {
        return None;
    }
    let n = count as i64;
    Some(match total.num_microseconds() {
        Some(us) => TimeDelta::microseconds(us / n),
        None => TimeDelta::milliseconds(total.num_milliseconds() / n),
    })
}

/// Formats a span as `D days HH:MM:SS`, prefixed with `-` when negative.
pub fn format_span(span: TimeDelta) -> String {
    let sign = if span < TimeDelta::zero() { "-" } else { "" };
    let secs = span.num_seconds().unsigned_abs();
    let (days, rem) = (secs / 86_400, secs % 86_400);
    format!(
        "{sign}{days} days {:02}:{:02}:{:02}",
        rem / 3_600,
        rem % 3_600 / 60,
        rem % 60
    )
}

fn as_seconds<S: Serializer>(span: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(span.num_seconds())
}

fn opt_as_seconds<S: Serializer>(span: &Option<TimeDelta>, serializer: S) -> Result<S::Ok, S::Error> {
    match span {
        Some(s) => serializer.serialize_some(&s.num_seconds()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::trip;

    #[test]
    fn test_empty_does_not_divide_by_zero() {
        let stats = DurationStats::from_trips(&[]);
        assert_eq!(stats, DurationStats::default());
        assert_eq!(stats.mean_seconds(), None);
    }

    #[test]
    fn test_total_and_mean() {
        let trips = vec![
            trip("2017-01-01 09:00:00", "2017-01-01 09:10:00", Some("A"), Some("B")),
            trip("2017-01-01 10:00:00", "2017-01-01 10:05:00", Some("A"), Some("B")),
        ];
        let stats = DurationStats::from_trips(&trips);
        assert_eq!(stats.trip_count, 2);
        assert_eq!(stats.total, TimeDelta::minutes(15));
        assert_eq!(stats.mean_seconds(), Some(450));
    }

    #[test]
    fn test_negative_durations_are_reported_as_is() {
        let trips = vec![
            trip("2017-01-01 09:10:00", "2017-01-01 09:00:00", Some("A"), Some("B")),
            trip("2017-01-01 10:00:00", "2017-01-01 10:04:00", Some("A"), Some("B")),
        ];
        let stats = DurationStats::from_trips(&trips);
        assert_eq!(stats.total, TimeDelta::minutes(-6));
        assert_eq!(stats.mean_seconds(), Some(-180));
        assert_eq!(format_span(stats.total), "-0 days 00:06:00");
    }

    #[test]
    fn test_mean_over_a_day_keeps_day_component() {
        let trips = vec![trip("2017-01-01 00:00:00", "2017-01-02 01:00:01", Some("A"), Some("B"))];
        let stats = DurationStats::from_trips(&trips);
        assert_eq!(stats.mean_seconds(), Some(86_400 + 3_601));
    }

    #[test]
    fn test_mean_truncates_sub_seconds() {
        let trips = vec![
            trip("2017-01-01 00:00:00", "2017-01-01 00:00:01", Some("A"), Some("B")),
            trip("2017-01-01 00:00:00", "2017-01-01 00:00:02", Some("A"), Some("B")),
        ];
        let stats = DurationStats::from_trips(&trips);
        assert_eq!(stats.mean, Some(TimeDelta::milliseconds(1_500)));
        assert_eq!(stats.mean_seconds(), Some(1));
    }

    #[test]
    fn test_format_span() {
        assert_eq!(format_span(TimeDelta::seconds(93_784)), "1 days 02:03:04");
        assert_eq!(format_span(TimeDelta::zero()), "0 days 00:00:00");
    }
}
