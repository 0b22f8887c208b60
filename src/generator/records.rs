use chrono::{DateTime, Utc};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tables::NameTables;
use crate::clock::{Clock, SystemClock, birth_date_for_age};
use crate::error::InvalidRequest;
use crate::model::{EmployeeRecord, Gender, GenerationRequest};

/// Synthesizes employee records from a random source, a clock and lookup tables.
pub struct RecordGenerator<R = StdRng, C = SystemClock> {
    tables: NameTables,
    rng: R,
    clock: C,
}

impl RecordGenerator<StdRng, SystemClock> {
    /// Default tables, wall clock, and an OS-seeded RNG.
    pub fn from_entropy() -> Self {
        Self::new(NameTables::default(), StdRng::from_os_rng(), SystemClock)
    }

    /// Default tables and wall clock with a reproducible RNG.
    pub fn seeded(seed: u64) -> Self {
        Self::new(NameTables::default(), StdRng::seed_from_u64(seed), SystemClock)
    }
}

impl<R: Rng, C: Clock> RecordGenerator<R, C> {
    pub fn new(tables: NameTables, rng: R, clock: C) -> Self {
        Self { tables, rng, clock }
    }

    /// Replaces the lookup tables, keeping the random source and clock.
    pub fn with_tables(mut self, tables: NameTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn tables(&self) -> &NameTables {
        &self.tables
    }

    /// Produces `request.count` independent records.
    ///
    /// The request is fully validated and the clock read once before the first
    /// record is drawn; on error nothing is returned.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<Vec<EmployeeRecord>, InvalidRequest> {
        request.validate()?;

        let now = self.clock.now();
        let range = request.age_range;
        if birth_date_for_age(range.max_age, now).is_none() {
            return Err(InvalidRequest::AgeOutOfRange(range.max_age));
        }

        debug!(
            "generating {} records aged {}..={} at {now}",
            request.count, range.min_age, range.max_age
        );

        (0..request.count)
            .map(|_| self.synthesize(range.min_age, range.max_age, now))
            .collect()
    }

    // Draw order: gender, name, surname, workload, age.
    fn synthesize(
        &mut self,
        min_age: f64,
        max_age: f64,
        now: DateTime<Utc>,
    ) -> Result<EmployeeRecord, InvalidRequest> {
        let gender = Gender::ALL[self.rng.random_range(0..Gender::ALL.len())];
        let name = pick(&mut self.rng, self.tables.names(gender)).to_string();
        let surname = pick(&mut self.rng, self.tables.surnames(gender)).to_string();
        let workload = *pick(&mut self.rng, self.tables.workloads());

        let age = if min_age == max_age {
            min_age
        } else {
            self.rng.random_range(min_age..=max_age)
        };
        let birth_date =
            birth_date_for_age(age, now).ok_or(InvalidRequest::AgeOutOfRange(age))?;

        Ok(EmployeeRecord {
            gender,
            birth_date,
            name,
            surname,
            workload,
        })
    }
}

// Tables are non-empty by construction.
fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
