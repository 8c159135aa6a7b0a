use crate::scheduler::PlanError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
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

/// Mois cible, par exemple `"November 2025"` ou `"2025-11"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, PlanError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PlanError::InvalidInput(format!(
                "invalid month/year: {year}-{month:02}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn first_day(&self) -> NaiveDate {
        // Month est validé à la construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap()
    }

    /// Mois suivant (bascule d'année en décembre).
    pub fn next(&self) -> Month {
        if self.month == 12 {
            Month { year: self.year + 1, month: 1 }
        } else {
            Month { year: self.year, month: self.month + 1 }
        }
    }

    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for Month {
    type Err = PlanError;

    /// Accepte `"November 2025"` (insensible à la casse) et `"2025-11"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((name, year)) = s.split_once(' ') {
            let year: i32 = year
                .trim()
                .parse()
                .map_err(|_| PlanError::InvalidInput(format!("invalid year in month: {s}")))?;
            let month = MONTH_NAMES
                .iter()
                .position(|m| m.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| PlanError::InvalidInput(format!("unknown month name: {name}")))?;
            return Month::new(year, month as u32 + 1);
        }
        if let Some((year, month)) = s.split_once('-') {
            let year: i32 = year
                .parse()
                .map_err(|_| PlanError::InvalidInput(format!("invalid month: {s}")))?;
            let month: u32 = month
                .parse()
                .map_err(|_| PlanError::InvalidInput(format!("invalid month: {s}")))?;
            return Month::new(year, month);
        }
        Err(PlanError::InvalidInput(format!(
            "expected \"November 2025\" or \"2025-11\", got: {s}"
        )))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// Calendrier d'un mois : liste ordonnée des jours, classés week-end ou non.
/// Construit une fois, lecture seule ensuite.
#[derive(Debug, Clone)]
pub struct MonthCalendar {
    month: Month,
    days: Vec<NaiveDate>,
}

impl MonthCalendar {
    pub fn build(month: Month) -> Self {
        let days = month
            .first_day()
            .iter_days()
            .take_while(|d| *d <= month.last_day())
            .collect();
        Self { month, days }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Tous les jours du mois, du 1er au dernier inclus.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Jours de week-end, dans l'ordre chronologique.
    pub fn weekend_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied().filter(|d| is_weekend(*d))
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend(date)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
