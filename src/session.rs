//! Drives a full report run: prompts, load, filter, statistics, paging.

use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::calendar::{DaySelector, MonthSelector};
use crate::city::City;
use crate::filter::TripFilter;
use crate::loader::load_city;
use crate::output::{write_page, write_report};
use crate::prompt::Prompter;
use crate::record::TripRecord;
use crate::report::Report;

/// Raw trips shown per page.
pub const PAGE_SIZE: usize = 5;

const RULE_WIDTH: usize = 40;

/// Runs the interactive flow until the user declines to restart or input ends.
pub fn explore<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, data_dir: &Path) -> Result<()> {
    let mut runs = 0usize;
    loop {
        writeln!(prompter.output(), "Hello! Let's explore some US bikeshare data!")?;

        let Some(city) = prompter.ask_city()? else { break };
        let Some(month) = prompter.ask_month()? else { break };
        let Some(day) = prompter.ask_day()? else { break };
        writeln!(prompter.output(), "{}", "-".repeat(RULE_WIDTH))?;

        let dataset = match load_city(data_dir, city) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!(city = %city, error = %e, "Could not load dataset");
                writeln!(prompter.output(), "Could not load data for {city}: {e:#}")?;
                writeln!(prompter.output(), "Please pick a city again.\n")?;
                continue;
            }
        };
        let (report, trips) = Report::build(&dataset, TripFilter::new(month, day));
        drop(dataset);

        write_report(prompter.output(), &report)?;
        page_trips(prompter, &trips)?;
        runs += 1;

        if !prompter.confirm("\nWould you like to restart? Enter yes or no.\n")? {
            break;
        }
    }

    info!(runs, "Session finished");
    Ok(())
}

/// Offers raw trips [`PAGE_SIZE`] at a time while the user keeps saying yes.
pub fn page_trips<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    trips: &[TripRecord],
) -> Result<usize> {
    let mut offset = 0;
    let mut question = "\nWould you like to view 5 rows of individual trip data? Enter yes or no\n";

    while prompter.confirm(question)? {
        if offset >= trips.len() {
            writeln!(prompter.output(), "No more trips to show.")?;
            break;
        }
        offset += write_page(prompter.output(), trips, offset, PAGE_SIZE)?;
        question = "Do you wish to continue?: ";
    }

    Ok(offset)
}

/// One line of a [`sweep`].
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub city: City,
    pub filter: TripFilter,
    pub trip_count: usize,
}

/// Builds a report for every city and every month/day selector pair.
pub fn sweep(data_dir: &Path, cities: &[City]) -> Result<Vec<SweepRow>> {
    let mut rows = Vec::new();

    for &city in cities {
        let dataset = load_city(data_dir, city)?;
        for month in MonthSelector::variants() {
            for day in DaySelector::variants() {
                let filter = TripFilter::new(month, day);
                let (report, _) = Report::build(&dataset, filter);
                rows.push(SweepRow {
                    city,
                    filter,
                    trip_count: report.trip_count,
                });
            }
        }
        info!(city = %city, "Sweep finished for city");
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::test_support::trip;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn trips(n: usize) -> Vec<TripRecord> {
        (0..n)
            .map(|_| trip("2017-01-01 09:00:00", "2017-01-01 09:10:00", Some("A"), Some("B")))
            .collect()
    }

    #[test]
    fn test_paging_stops_on_no() {
        let mut p = prompter("yes\nno\n");
        assert_eq!(page_trips(&mut p, &trips(12)).unwrap(), 5);
    }

    #[test]
    fn test_paging_stops_when_rows_run_out() {
        let mut p = prompter("yes\nyes\nyes\nyes\n");
        assert_eq!(page_trips(&mut p, &trips(7)).unwrap(), 7);
        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("No more trips to show."));
    }

    #[test]
    fn test_paging_declined() {
        let mut p = prompter("no\n");
        assert_eq!(page_trips(&mut p, &trips(3)).unwrap(), 0);
    }

    #[test]
    fn test_explore_ends_cleanly_on_closed_input() {
        let mut p = prompter("chicago\n");
        explore(&mut p, Path::new("does-not-exist")).unwrap();
    }

    #[test]
    fn test_explore_returns_to_city_prompt_when_dataset_missing() {
        let mut p = prompter("chicago\nall\nall\n");
        explore(&mut p, Path::new("does-not-exist")).unwrap();

        let shown = String::from_utf8(p.into_output()).unwrap();
        assert!(shown.contains("Could not load data for chicago"));
        assert!(shown.contains("chicago.csv"));
        assert_eq!(shown.matches("Hello! Let's explore").count(), 2);
    }
}
