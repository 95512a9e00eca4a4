use bikeshare_report::analyzers::{Demographics, Route};
use bikeshare_report::calendar::{DaySelector, MonthSelector};
use bikeshare_report::city::City;
use bikeshare_report::filter::TripFilter;
use bikeshare_report::loader::load_city;
use bikeshare_report::output::write_report;
use bikeshare_report::prompt::Prompter;
use bikeshare_report::report::Report;
use bikeshare_report::session::{explore, sweep};
use chrono::{Datelike, Month, Weekday};
use std::io::Cursor;
use std::path::Path;

fn fixtures() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

#[test]
fn test_every_city_and_selector_pair_completes() {
    let rows = sweep(fixtures(), &City::ALL).expect("sweep failed");
    assert_eq!(rows.len(), 3 * 13 * 8);

    let all_all = rows
        .iter()
        .find(|r| r.city == City::Chicago && r.filter == TripFilter::default())
        .unwrap();
    assert_eq!(all_all.trip_count, 5);
}

#[test]
fn test_every_combination_renders() {
    for city in City::ALL {
        let dataset = load_city(fixtures(), city).unwrap();
        for month in MonthSelector::variants() {
            for day in DaySelector::variants() {
                let (report, trips) = Report::build(&dataset, TripFilter::new(month, day));
                let mut out = Vec::new();
                write_report(&mut out, &report).unwrap();
                if trips.is_empty() {
                    let text = String::from_utf8(out).unwrap();
                    assert!(text.contains("Most Common Month: NA"));
                }
            }
        }
    }
}

#[test]
fn test_chicago_march() {
    let dataset = load_city(fixtures(), City::Chicago).unwrap();
    let filter = TripFilter::new(MonthSelector::Only(Month::March), DaySelector::All);
    let (report, trips) = Report::build(&dataset, filter);

    assert_eq!(trips.len(), 3);
    assert!(trips.iter().all(|t| t.start_time.month() == 3));

    let time = &report.time.stats;
    assert_eq!(time.most_common_month, Some(Month::March));
    assert_eq!(time.most_common_day, Some(Weekday::Wed));
    assert_eq!(time.most_common_hour, Some(17));

    let stations = &report.stations.stats;
    assert_eq!(stations.most_common_start.as_deref(), Some("Canal St & Adams St"));
    assert_eq!(stations.most_common_end.as_deref(), Some("Clinton St & Madison St"));
    assert_eq!(
        stations.most_common_route,
        Some(Route {
            start: "Canal St & Adams St".to_string(),
            end: "Clinton St & Madison St".to_string(),
            trips: 2,
        })
    );

    assert_eq!(report.duration.stats.total.num_seconds(), 2_100);
    assert_eq!(report.duration.stats.mean_seconds(), Some(700));

    match &report.users.stats.demographics {
        Demographics::Available {
            gender_count,
            birth_years,
            ..
        } => {
            // Male, Female and a rider with no gender
            assert_eq!(*gender_count, 3);
            let years = birth_years.as_ref().unwrap();
            assert_eq!((years.earliest, years.latest), (1984, 1992));
        }
        Demographics::Unavailable => panic!("chicago publishes demographics"),
    }
}

#[test]
fn test_washington_has_no_demographics() {
    let dataset = load_city(fixtures(), City::Washington).unwrap();
    assert!(!dataset.schema.has_demographics());

    let (report, _) = Report::build(&dataset, TripFilter::default());
    assert_eq!(report.users.stats.demographics, Demographics::Unavailable);
    assert_eq!(report.users.stats.user_type_count, 2);
}

#[test]
fn test_new_york_blank_user_type_counts_as_a_category() {
    let dataset = load_city(fixtures(), City::NewYorkCity).unwrap();
    let (report, _) = Report::build(&dataset, TripFilter::default());
    assert_eq!(report.users.stats.user_type_count, 3);
    assert_eq!(report.users.stats.user_types.len(), 2);
}

#[test]
fn test_chicago_missing_gender_counts_as_a_category() {
    let dataset = load_city(fixtures(), City::Chicago).unwrap();
    let (report, _) = Report::build(&dataset, TripFilter::default());
    match &report.users.stats.demographics {
        Demographics::Available { gender_count, .. } => assert_eq!(*gender_count, 3),
        Demographics::Unavailable => panic!("chicago publishes demographics"),
    }
}

#[test]
fn test_interactive_session_with_restart() {
    let input = "\
paris
chicago
march
someday
wednesday
yes
no
yes
washington
all
all
no
no
";
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    explore(&mut prompter, fixtures()).unwrap();

    let shown = String::from_utf8(prompter.into_output()).unwrap();
    assert_eq!(shown.matches("Hello! Let's explore").count(), 2);
    assert!(shown.contains("Please give a valid city name"));
    assert!(shown.contains("Please give a valid day of the week"));
    assert!(shown.contains("Start Time,End Time,Start Station"));
    assert!(shown.contains("Data not found for Gender and Year of Birth"));
}
