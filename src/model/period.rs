// src/model/period.rs

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month. `month` is zero-based (0 = January, 11 = December).
///
/// Field order makes the derived `Ord` chronological. Deserialized values
/// are normalized the same way as [`Period::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawPeriod")]
pub struct Period {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawPeriod {
    year: i32,
    month: i64,
}

impl From<RawPeriod> for Period {
    fn from(raw: RawPeriod) -> Self {
        Self::from_ordinal(raw.year as i64 * 12 + raw.month)
    }
}

/// How the caller wants to move the target period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Set { month: u32, year: i32 },
}

impl Period {
    /// Builds a period, carrying out-of-range months into the year
    /// (month 12 of 2024 is January 2025).
    pub fn new(year: i32, month: u32) -> Self {
        Self::from_ordinal(year as i64 * 12 + month as i64)
    }

    /// The month a date falls in.
    pub fn of_date<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// Default planning target: the month after `today`.
    pub fn following(today: NaiveDate) -> Self {
        Self::of_date(&today).next()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months since year 0, used for window arithmetic.
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    pub fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32,
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Moves by `months` (negative moves backwards).
    pub fn shift(self, months: i64) -> Self {
        Self::from_ordinal(self.ordinal() + months)
    }

    pub fn navigate(self, navigation: Navigation) -> Self {
        match navigation {
            Navigation::Previous => self.previous(),
            Navigation::Next => self.next(),
            Navigation::Set { month, year } => Self::new(year, month),
        }
    }

    /// The `months` whole calendar months strictly before this one.
    pub fn lookback(self, months: u32) -> LookbackWindow {
        LookbackWindow {
            first: self.shift(-(months as i64)),
            last: self.shift(-1),
        }
    }

    /// `None` only outside chrono's supported year range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.next().first_day()?.pred_opt()
    }

    /// Compact label such as `Mar-25`.
    pub fn short_label(&self) -> String {
        format!(
            "{}-{:02}",
            MONTH_ABBREVIATIONS[self.month as usize],
            self.year.rem_euclid(100)
        )
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTH_NAMES[self.month as usize], self.year)
    }
}

/// An inclusive, contiguous run of months used as forecasting history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackWindow {
    pub first: Period,
    pub last: Period,
}

impl LookbackWindow {
    pub fn len(&self) -> usize {
        (self.last.ordinal() - self.first.ordinal() + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, period: Period) -> bool {
        self.first <= period && period <= self.last
    }

    /// Position of `period` inside the window, oldest month first.
    pub fn index_of(&self, period: Period) -> Option<usize> {
        if self.contains(period) {
            Some((period.ordinal() - self.first.ordinal()) as usize)
        } else {
            None
        }
    }

    /// Every month of the window in chronological order.
    pub fn months(&self) -> impl Iterator<Item = Period> {
        (self.first.ordinal()..=self.last.ordinal()).map(Period::from_ordinal)
    }

    /// First day of the oldest month.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.first.first_day()
    }

    /// Last day of the newest month (inclusive bound).
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.last.last_day()
    }

    /// Human label such as `Mar-23 to Feb-25`.
    pub fn label(&self) -> String {
        format!("{} to {}", self.first.short_label(), self.last.short_label())
    }
}
