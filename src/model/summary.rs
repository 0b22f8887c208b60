use serde::{Deserialize, Serialize};

use super::employee::EmployeeRecord;

/// Descriptive statistics over a set of employee records.
///
/// `Default` is the result for an empty input: every number is zero and the
/// sorted list is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResult<T = EmployeeRecord> {
    pub total: usize,
    pub workload10: usize,
    pub workload20: usize,
    pub workload30: usize,
    pub workload40: usize,
    /// Mean age, one decimal place.
    pub average_age: f64,
    /// Whole years, floored.
    pub min_age: i64,
    /// Whole years, floored.
    pub max_age: i64,
    /// Whole years, floored.
    pub median_age: i64,
    pub median_workload: i64,
    /// Mean workload of female employees, one decimal place; 0 when there are none.
    pub average_women_workload: f64,
    pub sorted_by_workload: Vec<T>,
}

impl<T> Default for StatisticsResult<T> {
    fn default() -> Self {
        Self {
            total: 0,
            workload10: 0,
            workload20: 0,
            workload30: 0,
            workload40: 0,
            average_age: 0.0,
            min_age: 0,
            max_age: 0,
            median_age: 0,
            median_workload: 0,
            average_women_workload: 0.0,
            sorted_by_workload: Vec::new(),
        }
    }
}

impl<T> StatisticsResult<T> {
    /// Tier counts paired with their workload, in ascending workload order.
    pub fn tier_counts(&self) -> [(u32, usize); 4] {
        [
            (10, self.workload10),
            (20, self.workload20),
            (30, self.workload30),
            (40, self.workload40),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let result: StatisticsResult = StatisticsResult::default();
        assert_eq!(result.total, 0);
        assert_eq!(result.average_age, 0.0);
        assert_eq!(result.median_workload, 0);
        assert!(result.sorted_by_workload.is_empty());
        assert!(result.tier_counts().iter().all(|&(_, n)| n == 0));
    }

    #[test]
    fn serializes_flat_camel_case() {
        let result: StatisticsResult = StatisticsResult::default();
        let value = serde_json::to_value(&result).unwrap();
        for key in [
            "total",
            "workload10",
            "workload40",
            "averageAge",
            "medianAge",
            "medianWorkload",
            "averageWomenWorkload",
            "sortedByWorkload",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
