//! Calendar arithmetic for the lookback cutoff and parsing of post creation dates.

use std::fmt;
use time::error::Parse;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

const MONTHS_PER_YEAR: i64 = 12;

/// Calendar month with signed month arithmetic and ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn of(date: Date) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Shift by `months` (may be negative), carrying into the year.
    /// `None` when the year leaves the `i32` range.
    pub fn shift(self, months: i32) -> Option<Self> {
        let index = i64::from(self.year) * MONTHS_PER_YEAR + i64::from(self.month as u8 - 1) + i64::from(months);
        let year = i32::try_from(index.div_euclid(MONTHS_PER_YEAR)).ok()?;
        let month = Month::January.nth_next(index.rem_euclid(MONTHS_PER_YEAR) as u8);
        Some(Self { year, month })
    }

    /// Days in this month (Gregorian leap rule).
    pub fn days(self) -> u8 {
        time::util::days_in_year_month(self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}

/// Add `months` (may be negative) to `dt`, keeping the time of day.
///
/// The day is clamped to the target month's length, and a date sitting on the
/// last day of its month stays on the last day (Jan 31 - 1 month = Feb 28/29,
/// Feb 28 2023 + 1 month = Mar 31). `None` if the result is not representable.
pub fn add_months(dt: PrimitiveDateTime, months: i32) -> Option<PrimitiveDateTime> {
    let from = YearMonth::of(dt.date());
    let to = from.shift(months)?;
    let day = if dt.day() == from.days() { to.days() } else { dt.day().min(to.days()) };
    let date = Date::from_calendar_date(to.year, to.month, day).ok()?;
    Some(PrimitiveDateTime::new(date, dt.time()))
}

/// The instant `months` calendar months before `now`, in `now`'s offset.
pub fn months_before(now: OffsetDateTime, months: u32) -> Option<OffsetDateTime> {
    let back = i32::try_from(months).ok()?;
    let naive = PrimitiveDateTime::new(now.date(), now.time());
    add_months(naive, -back).map(|dt| dt.assume_offset(now.offset()))
}

/// Current wall-clock time in the local offset, falling back to UTC when the
/// platform cannot determine it.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|e| {
        tracing::warn!("local UTC offset unavailable ({}); using UTC", e);
        OffsetDateTime::now_utc()
    })
}

/// True when `dt`, read in the cutoff's offset, is strictly after `cutoff`.
pub fn is_after(dt: PrimitiveDateTime, cutoff: OffsetDateTime) -> bool {
    dt.assume_offset(cutoff.offset()) > cutoff
}

/// Parse `YYYY-MM-DDTHH:MM:SS[.fraction]`. The fraction is ignored.
pub fn parse_creation_date(s: &str) -> Result<PrimitiveDateTime, Parse> {
    let head = s.split_once('.').map_or(s, |(head, _)| head);
    PrimitiveDateTime::parse(head, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
}
