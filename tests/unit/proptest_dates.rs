//! Property-based tests for dates, indices and keywords
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chrono::{Days, NaiveDate, NaiveTime};
use jax::core::models::Task;
use jax::core::models::timestamp::{display, parse_date, parse_timestamp};
use jax::core::parser::{Request, parse};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn time_strategy() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

proptest! {
    /// An event occurs on exactly the dates between its start and end dates
    #[test]
    fn event_occurs_within_span(
        start in date_strategy(),
        length in 0u64..10,
        offset in 0u64..20,
        t1 in time_strategy(),
        t2 in time_strategy(),
    ) {
        let end = start.checked_add_days(Days::new(length)).unwrap();
        let probe = start.checked_add_days(Days::new(offset)).unwrap();
        let task = Task::event("e", start.and_time(t1), end.and_time(t2));

        prop_assert_eq!(task.occurs_on(probe), offset <= length);
    }

    /// A date before the start never matches
    #[test]
    fn event_never_occurs_before_start(start in date_strategy(), back in 1u64..30) {
        let probe = start.checked_sub_days(Days::new(back)).unwrap();
        let task = Task::event("e", start.and_hms_opt(0, 0, 0).unwrap(), start.and_hms_opt(23, 59, 0).unwrap());
        prop_assert!(!task.occurs_on(probe));
    }

    /// Any well-formed timestamp parses back to itself
    #[test]
    fn timestamp_input_parses(date in date_strategy(), time in time_strategy()) {
        let input = date.and_time(time).format("%Y-%m-%d %H%M").to_string();
        prop_assert_eq!(parse_timestamp(&input).unwrap(), date.and_time(time));
        prop_assert_eq!(parse_date(&date.to_string()).unwrap(), date);
    }

    /// Rendered times always use a 12-hour clock with an am/pm suffix
    #[test]
    fn display_is_twelve_hour(date in date_strategy(), time in time_strategy()) {
        let shown = display(&date.and_time(time));
        prop_assert!(shown.ends_with("am") || shown.ends_with("pm"));
        let clock = shown.rsplit(", ").next().unwrap();
        let hour: u32 = clock.split(':').next().unwrap().parse().unwrap();
        prop_assert!((1..=12).contains(&hour));
    }

    /// Task numbers are shown 1-based and stored 0-based
    #[test]
    fn index_is_shifted_by_one(n in 1i64..100_000) {
        prop_assert_eq!(parse(&format!("mark {n}")).unwrap(), Request::Mark(n - 1));
        prop_assert_eq!(parse(&format!("delete {n}")).unwrap(), Request::Delete(n - 1));
    }

    /// A task always matches any substring of its own description
    #[test]
    fn description_matches_own_substring(desc in "[a-zA-Z ]{1,30}", start in 0usize..30, len in 0usize..30) {
        let start = start.min(desc.len());
        let end = (start + len).min(desc.len());
        let task = Task::todo(desc.clone());
        prop_assert!(task.matches_keyword(&desc[start..end].to_uppercase()));
    }
}
