//! # Age Calculator
//!
//! Calendar-exact age computation for the Kinship CORE.
//!
//! The engine never reads the wall clock directly. Every age query takes a
//! [`Clock`], so identical inputs produce identical outputs and tests pin
//! the reference date exactly.

use crate::types::Person;
use chrono::{Datelike, NaiveDate, Utc};

// =============================================================================
// CLOCK SEAM
// =============================================================================

/// Source of the reference calendar date for age computation.
///
/// The single seam through which "today" enters the engine.
pub trait Clock {
    /// The current calendar date from this clock's point of view.
    fn today(&self) -> NaiveDate;
}

/// The real wall clock, read as a UTC calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a fixed date, for tests and as-of queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// =============================================================================
// AGE COMPUTATION
// =============================================================================

/// Completed years between `birth` and `comparison`.
///
/// Returns `None` when `comparison` falls before `birth`. The year
/// difference is decremented by one if the birthday has not yet occurred in
/// the comparison year; a Feb 29 birthday counts as Feb 28 in non-leap
/// years.
#[must_use]
pub fn age_between(birth: NaiveDate, comparison: NaiveDate) -> Option<i32> {
    let age = comparison.year().saturating_sub(birth.year());
    let age = if advance_years(birth, age) > comparison {
        age.saturating_sub(1)
    } else {
        age
    };

    if age < 0 { None } else { Some(age) }
}

/// Completed years of age for a person.
///
/// The comparison date is the death date for deceased persons with one
/// recorded, otherwise `clock.today()`. Returns `None` when no birth date
/// is recorded or the comparison date precedes birth.
#[must_use]
pub fn compute_age(person: &Person, clock: &dyn Clock) -> Option<i32> {
    let birth = person.date_of_birth?;

    let comparison = match (person.is_deceased, person.date_of_death) {
        (true, Some(death)) => death,
        _ => clock.today(),
    };

    age_between(birth, comparison)
}

/// `date` advanced by `years` calendar years, clamping Feb 29 to Feb 28
/// when the target year is not a leap year.
fn advance_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year().saturating_add(years);
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

// =============================================================================
// TESTS
// =============================================================================
