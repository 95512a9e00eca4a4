//! Console rendering for reports and raw trip pages.
//!
//! Each statistic group prints as its own section with a timing footer.
//! Raw trips are paged out as CSV rows under a header line.

use anyhow::Result;
use csv::WriterBuilder;
use std::fmt::Display;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::analyzers::duration::format_span;
use crate::analyzers::{Demographics, DurationStats, StationStats, TimeStats, UserStats};
use crate::calendar::weekday_name;
use crate::record::TripRecord;
use crate::report::Report;

/// Placeholder printed for a statistic with no input to compute it from.
pub const NA: &str = "NA";

const RULE_WIDTH: usize = 40;

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NA.to_string(), |v| v.to_string())
}

/// Writes all four sections in their fixed order.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    write_time_section(out, &report.time.stats)?;
    write_footer(out, report.time.elapsed)?;
    write_station_section(out, &report.stations.stats)?;
    write_footer(out, report.stations.elapsed)?;
    write_duration_section(out, &report.duration.stats)?;
    write_footer(out, report.duration.elapsed)?;
    write_user_section(out, &report.users.stats)?;
    write_footer(out, report.users.elapsed)?;
    Ok(())
}

/// Writes the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_time_section<W: Write>(out: &mut W, stats: &TimeStats) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    writeln!(out, "Most Common Month: {}", or_na(stats.most_common_month.map(|m| m.name())))?;
    writeln!(
        out,
        "Most Common Day of the Week: {}",
        or_na(stats.most_common_day.map(weekday_name))
    )?;
    writeln!(out, "Most Common Start Hour: {}", or_na(stats.most_common_hour))?;
    Ok(())
}

pub fn write_station_section<W: Write>(out: &mut W, stats: &StationStats) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    writeln!(
        out,
        "Most Commonly Used Start Station: {}",
        or_na(stats.most_common_start.as_deref())
    )?;
    writeln!(
        out,
        "Most Commonly Used End Station: {}",
        or_na(stats.most_common_end.as_deref())
    )?;
    match &stats.most_common_route {
        Some(route) => writeln!(
            out,
            "Most Frequent Combination of Start Station and End Station Trip: {} -> {} ({} trips)",
            route.start, route.end, route.trips
        )?,
        None => writeln!(
            out,
            "Most Frequent Combination of Start Station and End Station Trip: {NA} -> "
        )?,
    }
    Ok(())
}

pub fn write_duration_section<W: Write>(out: &mut W, stats: &DurationStats) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    writeln!(out, "Trips Counted: {}", stats.trip_count)?;
    writeln!(out, "Total Travel Time: {}", format_span(stats.total))?;
    match stats.mean_seconds() {
        Some(secs) => writeln!(out, "Mean Travel Time: {secs} seconds")?,
        None => writeln!(out, "Mean Travel Time: {NA}")?,
    }
    Ok(())
}

pub fn write_user_section<W: Write>(out: &mut W, stats: &UserStats) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    writeln!(out, "Count of User Types: {}", stats.user_type_count)?;
    for (user_type, trips) in &stats.user_types {
        writeln!(out, "  {user_type}: {trips}")?;
    }

    match &stats.demographics {
        Demographics::Unavailable => {
            writeln!(out, "Data not found for Gender and Year of Birth")?;
        }
        Demographics::Available {
            gender_count,
            genders,
            birth_years,
        } => {
            writeln!(out, "Count of Gender Types: {gender_count}")?;
            for (gender, trips) in genders {
                writeln!(out, "  {gender}: {trips}")?;
            }
            let years = birth_years.as_ref();
            writeln!(out, "Earliest Year of Birth: {}", or_na(years.map(|y| y.earliest)))?;
            writeln!(out, "Most Recent Year of Birth: {}", or_na(years.map(|y| y.latest)))?;
            writeln!(out, "Most Common Year of Birth: {}", or_na(years.map(|y| y.most_common)))?;
        }
    }
    Ok(())
}

fn write_footer<W: Write>(out: &mut W, elapsed: Duration) -> Result<()> {
    writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Writes `trips[offset..offset + page_size]` as CSV with a header row.
///
/// Returns the number of rows written; zero once `offset` is past the end.
pub fn write_page<W: Write>(
    out: &mut W,
    trips: &[TripRecord],
    offset: usize,
    page_size: usize,
) -> Result<usize> {
    let page = trips.iter().skip(offset).take(page_size);
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(&mut *out);

    let mut written = 0;
    for trip in page {
        writer.serialize(trip)?;
        written += 1;
    }
    writer.flush()?;
    debug!(offset, written, "Wrote trip page");

    Ok(written)
}
