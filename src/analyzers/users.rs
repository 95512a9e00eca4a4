use serde::Serialize;

use crate::analyzers::utility::{mode, ranked};
use crate::loader::Schema;
use crate::record::TripRecord;

/// Earliest, latest and most common birth year among riders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

/// Gender and birth-year breakdown. Only some cities publish these columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Demographics {
    /// The dataset has no gender / birth-year columns at all.
    Unavailable,
    Available {
        gender_count: usize,
        genders: Vec<(String, usize)>,
        birth_years: Option<BirthYearStats>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_type_count: usize,
    pub user_types: Vec<(String, usize)>,
    pub demographics: Demographics,
}

impl UserStats {
    /// `schema` decides whether demographics are computed; a dataset without
    /// the columns reports [`Demographics::Unavailable`] instead.
    pub fn from_trips(trips: &[TripRecord], schema: &Schema) -> Self {
        let user_types = tally(trips.iter().map(|t| t.user_type.as_deref()));
        let user_type_count =
            distinct_count(&user_types, trips.iter().map(|t| t.user_type.as_deref()));

        let demographics = if schema.has_demographics() {
            let genders = tally(trips.iter().map(|t| t.gender.as_deref()));
            Demographics::Available {
                gender_count: distinct_count(&genders, trips.iter().map(|t| t.gender.as_deref())),
                genders,
                birth_years: birth_year_stats(trips),
            }
        } else {
            Demographics::Unavailable
        };

        UserStats {
            user_type_count,
            user_types,
            demographics,
        }
    }
}

/// Non-blank values ranked by frequency.
fn tally<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<(String, usize)> {
    ranked(values.flatten().map(str::trim).filter(|v| !v.is_empty()))
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

/// Distinct categories, where a missing or blank value counts as one more.
fn distinct_count<'a>(
    tallied: &[(String, usize)],
    mut values: impl Iterator<Item = Option<&'a str>>,
) -> usize {
    let any_missing = values.any(is_blank);
    tallied.len() + usize::from(any_missing)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn birth_year_stats(trips: &[TripRecord]) -> Option<BirthYearStats> {
    let years = || trips.iter().filter_map(|t| t.birth_year);
    Some(BirthYearStats {
        earliest: years().min()?,
        latest: years().max()?,
        most_common: mode(years())?.0,
    })
}
