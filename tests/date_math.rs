use se_top_users::{add_months, is_after, months_before, parse_creation_date, YearMonth};
use time::macros::{date, datetime};
use time::{Month, PrimitiveDateTime};

fn shifted(dt: PrimitiveDateTime, months: i32) -> PrimitiveDateTime {
    add_months(dt, months).unwrap()
}

/// March 31 minus one month lands on the last day of February, leap-year aware.
#[test]
fn end_of_march_back_one_month() {
    assert_eq!(shifted(datetime!(2023-03-31 09:15), -1), datetime!(2023-02-28 09:15));
    assert_eq!(shifted(datetime!(2024-03-31 09:15), -1), datetime!(2024-02-29 09:15));
    // Century rule: 1900 is not a leap year, 2000 is.
    assert_eq!(shifted(datetime!(1900-03-31 00:00), -1).date(), date!(1900-02-28));
    assert_eq!(shifted(datetime!(2000-03-31 00:00), -1).date(), date!(2000-02-29));
}

/// Twelve months is the same month/day one year later, clamped when needed.
#[test]
fn twelve_months_is_one_year() {
    assert_eq!(shifted(datetime!(2023-05-17 10:30), 12), datetime!(2024-05-17 10:30));
    assert_eq!(shifted(datetime!(2024-02-29 00:00), 12).date(), date!(2025-02-28));
    assert_eq!(shifted(datetime!(2024-07-04 00:00), -12).date(), date!(2023-07-04));
}

/// A date on the last day of its month stays on the last day; other days are only clamped.
#[test]
fn last_day_stays_last_day() {
    assert_eq!(shifted(datetime!(2023-02-28 00:00), 1).date(), date!(2023-03-31));
    assert_eq!(shifted(datetime!(2024-02-28 00:00), 1).date(), date!(2024-03-28));
    assert_eq!(shifted(datetime!(2023-11-30 00:00), 3).date(), date!(2024-02-29));
    assert_eq!(shifted(datetime!(2023-04-30 00:00), 1).date(), date!(2023-05-31));
    assert_eq!(shifted(datetime!(2023-01-30 00:00), 1).date(), date!(2023-02-28));
}

/// Carry and borrow across several years in both directions.
#[test]
fn multi_year_shifts() {
    assert_eq!(shifted(datetime!(2024-01-15 00:00), -25).date(), date!(2021-12-15));
    assert_eq!(shifted(datetime!(2023-01-31 00:00), -1).date(), date!(2022-12-31));
    assert_eq!(shifted(datetime!(2023-11-15 00:00), 26).date(), date!(2026-01-15));
    assert_eq!(shifted(datetime!(2023-06-15 00:00), 0), datetime!(2023-06-15 00:00));
}

#[test]
fn year_month_shift_and_display() {
    let jan = YearMonth::new(2024, Month::January);
    assert_eq!(jan.shift(-1), Some(YearMonth::new(2023, Month::December)));
    assert_eq!(jan.shift(13), Some(YearMonth::new(2025, Month::February)));
    assert_eq!(jan.shift(-1).unwrap().to_string(), "2023-12");
    assert_eq!(YearMonth::new(2024, Month::February).days(), 29);
    assert_eq!(YearMonth::new(2100, Month::February).days(), 28);
    assert_eq!(YearMonth::new(i32::MAX, Month::December).shift(1), None);
}

/// The cutoff keeps the time of day and the offset of "now".
#[test]
fn months_before_now() {
    assert_eq!(months_before(datetime!(2024-08-31 12:00 +02:00), 6), Some(datetime!(2024-02-29 12:00 +02:00)));
    assert_eq!(months_before(datetime!(2024-06-15 12:00 UTC), 6), Some(datetime!(2023-12-15 12:00 UTC)));
    assert_eq!(months_before(datetime!(2024-06-15 12:00 UTC), 0), Some(datetime!(2024-06-15 12:00 UTC)));
}

/// Strictly-after comparison, with the naive date-time read in the cutoff's offset.
#[test]
fn strictly_after_cutoff() {
    let cutoff = datetime!(2024-01-01 00:00 +05:00);
    assert!(!is_after(datetime!(2024-01-01 00:00), cutoff));
    assert!(is_after(datetime!(2024-01-01 00:00:01), cutoff));
    assert!(!is_after(datetime!(2023-12-31 23:59:59), cutoff));
}

/// `YYYY-MM-DDTHH:MM:SS.fraction`; the fraction is optional and ignored.
#[test]
fn creation_date_format() {
    assert_eq!(parse_creation_date("2024-03-01T10:00:00.123").unwrap(), datetime!(2024-03-01 10:00:00));
    assert_eq!(parse_creation_date("2024-03-01T10:00:00").unwrap(), datetime!(2024-03-01 10:00:00));
    assert!(parse_creation_date("2024-13-01T00:00:00.000").is_err());
    assert!(parse_creation_date("2024-03-01").is_err());
    assert!(parse_creation_date("yesterday").is_err());
    assert!(parse_creation_date("").is_err());
}
