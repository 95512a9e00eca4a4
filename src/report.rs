//! Runs the filter and every statistic group over one dataset.

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

use crate::analyzers::{DurationStats, StationStats, TimeStats, UserStats};
use crate::city::City;
use crate::filter::TripFilter;
use crate::loader::Dataset;
use crate::record::TripRecord;

/// A statistic group together with how long it took to compute.
#[derive(Debug, Clone, Serialize)]
pub struct Timed<T> {
    #[serde(flatten)]
    pub stats: T,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn run(f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let stats = f();
        Timed {
            stats,
            elapsed: start.elapsed(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub city: City,
    pub filter: TripFilter,
    pub trip_count: usize,
    pub time: Timed<TimeStats>,
    pub stations: Timed<StationStats>,
    pub duration: Timed<DurationStats>,
    pub users: Timed<UserStats>,
}

impl Report {
    /// Filters `dataset` and computes every statistic group.
    ///
    /// Returns the report and the filtered trips it was computed over.
    #[tracing::instrument(skip(dataset), fields(city = %dataset.city, month = %filter.month, day = %filter.day))]
    pub fn build(dataset: &Dataset, filter: TripFilter) -> (Self, Vec<TripRecord>) {
        let trips = filter.apply(&dataset.records);
        info!(loaded = dataset.records.len(), kept = trips.len(), "Trips filtered");

        let report = Report::from_trips(dataset, filter, &trips);
        (report, trips)
    }

    /// Computes every statistic group over already filtered `trips`.
    pub fn from_trips(dataset: &Dataset, filter: TripFilter, trips: &[TripRecord]) -> Self {
        Report {
            city: dataset.city,
            filter,
            trip_count: trips.len(),
            time: Timed::run(|| TimeStats::from_trips(trips)),
            stations: Timed::run(|| StationStats::from_trips(trips)),
            duration: Timed::run(|| DurationStats::from_trips(trips)),
            users: Timed::run(|| UserStats::from_trips(trips, &dataset.schema)),
        }
    }
}
