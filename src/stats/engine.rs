use log::debug;

use super::numeric::{floor_to_integer, mean, median, round_one_decimal, round_to_integer};
use crate::clock::{Clock, SystemClock, age_in_years};
use crate::model::{EmployeeView, Gender, StatisticsResult};

/// Computes [`StatisticsResult`]s against an injected clock.
#[derive(Debug, Clone, Default)]
pub struct StatisticsEngine<C = SystemClock> {
    clock: C,
}

/// Values gathered in one pass over the input.
#[derive(Debug, Default)]
struct Aggregate {
    tiers: [usize; 4],
    workloads: Vec<f64>,
    women_workloads: Vec<f64>,
    ages: Vec<f64>,
}

impl Aggregate {
    fn record(&mut self, workload: u32, gender: Gender, age: f64) {
        match workload {
            10 => self.tiers[0] += 1,
            20 => self.tiers[1] += 1,
            30 => self.tiers[2] += 1,
            40 => self.tiers[3] += 1,
            _ => {}
        }
        self.workloads.push(f64::from(workload));
        if gender == Gender::Female {
            self.women_workloads.push(f64::from(workload));
        }
        self.ages.push(age);
    }
}

impl<C: Clock> StatisticsEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Summarizes `records`. Total over every input, including an empty slice.
    ///
    /// The clock is read once, so every age in the result shares one reference
    /// instant. The input is only borrowed; the sorted list is a copy.
    pub fn summarize<T>(&self, records: &[T]) -> StatisticsResult<T>
    where
        T: EmployeeView + Clone,
    {
        let now = self.clock.now();
        debug!("summarizing {} records at {now}", records.len());

        let mut agg = Aggregate::default();
        for record in records {
            let age = age_in_years(record.birth_date(), now);
            agg.record(record.workload(), record.gender(), age);
        }

        let mut sorted_by_workload = records.to_vec();
        sorted_by_workload.sort_by_key(|r| r.workload());

        let [workload10, workload20, workload30, workload40] = agg.tiers;
        let mut result = StatisticsResult {
            total: records.len(),
            workload10,
            workload20,
            workload30,
            workload40,
            median_workload: round_to_integer(median(&agg.workloads)),
            average_women_workload: round_one_decimal(mean(&agg.women_workloads)),
            sorted_by_workload,
            ..StatisticsResult::default()
        };

        if !agg.ages.is_empty() {
            let min = agg.ages.iter().copied().fold(f64::INFINITY, f64::min);
            let max = agg.ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            result.average_age = round_one_decimal(mean(&agg.ages));
            result.min_age = floor_to_integer(min);
            result.max_age = floor_to_integer(max);
            result.median_age = floor_to_integer(median(&agg.ages));
        }

        result
    }
}

/// Summarizes `records` against the wall clock.
pub fn summarize<T: EmployeeView + Clone>(records: &[T]) -> StatisticsResult<T> {
    StatisticsEngine::new(SystemClock).summarize(records)
}
