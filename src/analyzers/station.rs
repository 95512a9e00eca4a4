use serde::Serialize;

use crate::analyzers::utility::mode;
use crate::record::TripRecord;

/// The most travelled (start, end) station pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub trips: usize,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    pub most_common_route: Option<Route>,
}

impl StationStats {
    pub fn from_trips(trips: &[TripRecord]) -> Self {
        let most_common_start = mode(trips.iter().filter_map(TripRecord::start_station_label));
        let most_common_end = mode(trips.iter().filter_map(TripRecord::end_station_label));
        let most_common_route = mode(route_pairs(trips)).map(|((start, end), trips)| Route {
            start: start.to_string(),
            end: end.to_string(),
            trips,
        });

        StationStats {
            most_common_start: most_common_start.map(|(s, _)| s.to_string()),
            most_common_end: most_common_end.map(|(s, _)| s.to_string()),
            most_common_route,
        }
    }
}

/// Trimmed (start, end) labels of every trip that has both stations.
///
/// Trips without an end station are left out of the pair count only.
pub fn route_pairs(trips: &[TripRecord]) -> impl Iterator<Item = (&str, &str)> {
    trips
        .iter()
        .filter_map(|t| Some((t.start_station_label()?, t.end_station_label()?)))
}
