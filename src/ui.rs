//! Terminal rendering of records and statistics.
//!
//! Text reports are styled with `console`; JSON output is pretty-printed with
//! `serde_json`. Styling is dropped automatically when stdout is not a tty.

use console::Style;
use serde::Serialize;

use crate::model::{EmployeeRecord, StatisticsResult};

/// Styles shared by the text renderers.
pub struct Report {
    heading: Style,
    label: Style,
    value: Style,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            heading: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().green().bold(),
        }
    }
}

impl Report {
    pub fn statistics(&self, result: &StatisticsResult) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.heading.apply_to("─── Statistics ───")));
        self.line(&mut out, "Total", result.total);
        for (workload, count) in result.tier_counts() {
            self.line(&mut out, &format!("Workload {workload}"), count);
        }
        self.line(&mut out, "Average age", result.average_age);
        self.line(&mut out, "Min age", result.min_age);
        self.line(&mut out, "Max age", result.max_age);
        self.line(&mut out, "Median age", result.median_age);
        self.line(&mut out, "Median workload", result.median_workload);
        self.line(
            &mut out,
            "Average women workload",
            result.average_women_workload,
        );

        out.push_str(&format!(
            "\n{}\n",
            self.heading.apply_to("─── Sorted by workload ───")
        ));
        out.push_str(&self.records(&result.sorted_by_workload));
        out
    }

    pub fn records(&self, records: &[EmployeeRecord]) -> String {
        records
            .iter()
            .map(|r| {
                format!(
                    "  {:>3}  {:<6} {} {}  {}\n",
                    self.value.apply_to(r.workload),
                    r.gender.to_string(),
                    r.name,
                    r.surname,
                    self.label.apply_to(r.birth_date.format("%Y-%m-%d")),
                )
            })
            .collect()
    }

    fn line(&self, out: &mut String, label: &str, value: impl std::fmt::Display) {
        out.push_str(&format!(
            "  {:<24}{}\n",
            self.label.apply_to(format!("{label}:")),
            self.value.apply_to(value)
        ));
    }
}

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
