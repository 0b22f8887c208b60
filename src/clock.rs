//! Time source abstraction.
//!
//! Generation and summarization each read the clock exactly once per call, so
//! every age computed within one call is measured against the same instant.
//! Tests use [`FixedClock`] to freeze that instant.

use chrono::{DateTime, TimeDelta, Utc};

/// Length of a year used for converting between ages and timestamps: 365 days.
pub const YEAR_MS: f64 = 365.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Supplies the evaluation instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Age in fractional years of someone born at `birth_date`, measured at `now`.
pub fn age_in_years(birth_date: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - birth_date).num_milliseconds() as f64 / YEAR_MS
}

/// Birth instant of someone who is `age` years old at `now`.
///
/// Returns `None` when the result falls outside chrono's supported range.
pub fn birth_date_for_age(age: f64, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let millis = (age * YEAR_MS).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    let delta = TimeDelta::try_milliseconds(millis as i64)?;
    now.checked_sub_signed(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn year_is_365_days() {
        assert_eq!(YEAR_MS, 31_536_000_000.0);
    }

    #[test]
    fn birth_date_and_age_agree() {
        let now = noon();
        let birth = birth_date_for_age(27.5, now).unwrap();
        assert!((age_in_years(birth, now) - 27.5).abs() < 1e-9);
    }

    #[test]
    fn zero_age_is_now() {
        let now = noon();
        assert_eq!(birth_date_for_age(0.0, now), Some(now));
    }

    #[test]
    fn absurd_age_is_rejected() {
        assert_eq!(birth_date_for_age(1e9, noon()), None);
        assert_eq!(birth_date_for_age(f64::INFINITY, noon()), None);
    }

    #[test]
    fn fixed_clock_never_moves() {
        let clock = FixedClock(noon());
        assert_eq!(clock.now(), clock.now());
        assert_eq!((&clock).now(), noon());
    }
}
