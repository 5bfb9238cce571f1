// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar date renderers for the status report.
//!
//! The civil ("Roman") line is plain `day Month year`. The Hebrew line
//! uses classical molad arithmetic (Dershowitz & Reingold, *Calendrical
//! Calculations*): the 19-year Metonic leap cycle, the four Rosh
//! Hashanah postponement rules, and the variable lengths of Cheshvan
//! and Kislev. Months are numbered from Tishrei, matching the civil new
//! year the day counts pivot on.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Civil date in `day Month year` form, e.g. `25 January 2024`.
pub fn roman_date_string(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), date.format("%B"), date.year())
}

/// Rata Die day number of 1 Tishrei, year 1.
const HEBREW_EPOCH_RD: i64 = -1_373_428;

/// A date on the Hebrew calendar; `month` counts from Tishrei.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HebrewDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl HebrewDate {
    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        from_rata_die(date.num_days_from_ce() as i64)
    }

    pub fn month_name(&self) -> &'static str {
        const COMMON: [&str; 12] = [
            "Tishrei", "Cheshvan", "Kislev", "Tevet", "Shevat", "Adar", "Nisan", "Iyar",
            "Sivan", "Tammuz", "Av", "Elul",
        ];
        const LEAP: [&str; 13] = [
            "Tishrei", "Cheshvan", "Kislev", "Tevet", "Shevat", "Adar I", "Adar II", "Nisan",
            "Iyar", "Sivan", "Tammuz", "Av", "Elul",
        ];
        let index = (self.month as usize - 1).min(12);
        if is_leap_year(self.year) {
            LEAP[index]
        } else {
            COMMON[index.min(11)]
        }
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Hebrew date in `day MonthName year` form, e.g. `23 Tevet 5760`.
pub fn hebrew_date_string(date: NaiveDate) -> String {
    HebrewDate::from_gregorian(date).to_string()
}

/// Years 3, 6, 8, 11, 14, 17, 19 of each Metonic cycle are leap.
fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Days from the epoch to the molad-determined 1 Tishrei of `year`,
/// with the postponement (dechiyot) rules applied.
fn elapsed_days(year: i64) -> i64 {
    let cycles = (year - 1).div_euclid(19);
    let remainder = (year - 1).rem_euclid(19);
    let months = 235 * cycles + 12 * remainder + (7 * remainder + 1) / 19;

    // Molad interval: 29d 12h 793 parts (1080 parts per hour).
    let parts = 204 + 793 * (months % 1080);
    let hours = 5 + 12 * months + 793 * (months / 1080) + parts / 1080;
    let mut day = 1 + 29 * months + hours / 24;
    let parts = (hours % 24) * 1080 + parts % 1080;

    // Molad zaken and the two year-length postponements.
    if parts >= 19_440
        || (day % 7 == 2 && parts >= 9_924 && !is_leap_year(year))
        || (day % 7 == 1 && parts >= 16_789 && is_leap_year(year - 1))
    {
        day += 1;
    }
    // Lo ADU Rosh: 1 Tishrei never falls on Sunday, Wednesday, Friday.
    if matches!(day % 7, 0 | 3 | 5) {
        day += 1;
    }
    day
}

fn days_in_year(year: i64) -> i64 {
    elapsed_days(year + 1) - elapsed_days(year)
}

fn months_in_year(year: i64) -> u32 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Length of a month, Tishrei-based numbering.
fn days_in_month(year: i64, month: u32) -> i64 {
    // Cheshvan and Kislev flex to absorb the year length (353–355 or
    // 383–385 days).
    match month {
        2 => {
            if days_in_year(year) % 10 == 5 {
                30
            } else {
                29
            }
        }
        3 => {
            if days_in_year(year) % 10 == 3 {
                29
            } else {
                30
            }
        }
        _ => {
            let long = if is_leap_year(year) {
                // Tishrei, Shevat, Adar I, Nisan, Sivan, Av.
                matches!(month, 1 | 5 | 6 | 8 | 10 | 12)
            } else {
                matches!(month, 1 | 5 | 7 | 9 | 11)
            };
            if long {
                30
            } else {
                29
            }
        }
    }
}

fn from_rata_die(rata_die: i64) -> HebrewDate {
    // Mean year of 35975351/98496 ≈ 365.2468 days seeds the search.
    let mut year = (rata_die - HEBREW_EPOCH_RD) * 98_496 / 35_975_351 + 1;
    while HEBREW_EPOCH_RD + elapsed_days(year + 1) <= rata_die {
        year += 1;
    }
    while HEBREW_EPOCH_RD + elapsed_days(year) > rata_die {
        year -= 1;
    }

    let mut day_of_year = rata_die - (HEBREW_EPOCH_RD + elapsed_days(year));
    let mut month = 1;
    while month < months_in_year(year) && day_of_year >= days_in_month(year, month) {
        day_of_year -= days_in_month(year, month);
        month += 1;
    }
    HebrewDate { year, month, day: day_of_year as u32 + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hebrew(y: i32, m: u32, d: u32) -> String {
        hebrew_date_string(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn roman_rendering() {
        assert_eq!(
            roman_date_string(NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()),
            "25 January 2024"
        );
        assert_eq!(
            roman_date_string(NaiveDate::from_ymd_opt(1969, 7, 3).unwrap()),
            "3 July 1969"
        );
    }

    #[test]
    fn rosh_hashanah_anchors() {
        assert_eq!(hebrew(2023, 9, 16), "1 Tishrei 5784");
        assert_eq!(hebrew(2024, 10, 3), "1 Tishrei 5785");
    }

    #[test]
    fn festival_anchors() {
        // Pesach, Chanukah, Purim (in a leap year, hence Adar II).
        assert_eq!(hebrew(2024, 4, 23), "15 Nisan 5784");
        assert_eq!(hebrew(2024, 12, 26), "25 Kislev 5785");
        assert_eq!(hebrew(2024, 3, 24), "14 Adar II 5784");
    }

    #[test]
    fn millennium_day() {
        assert_eq!(hebrew(2000, 1, 1), "23 Tevet 5760");
    }

    #[test]
    fn year_lengths_stay_legal() {
        for year in 5700..5800 {
            let days = days_in_year(year);
            assert!(
                matches!(days, 353..=355 | 383..=385),
                "year {year} has {days} days"
            );
        }
    }
}
