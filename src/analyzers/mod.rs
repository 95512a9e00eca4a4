//! Trip statistics computed over a filtered collection.
//!
//! Each group is a pure function of the trips it is given. Empty input
//! never fails: missing results are `None` and render as `NA`.

pub mod duration;
pub mod station;
pub mod time;
pub mod users;
pub mod utility;

pub use duration::DurationStats;
pub use station::{Route, StationStats};
pub use time::TimeStats;
pub use users::{BirthYearStats, Demographics, UserStats};
