use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workload tiers, in percentage-like units.
pub const WORKLOADS: [u32; 4] = [10, 20, 30, 40];

/// The two gender categories used for name tables and the female workload average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// One synthesized employee.
///
/// The birth date is stored as an absolute instant, so any later summary
/// recomputes age against its own evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub gender: Gender,
    pub birth_date: DateTime<Utc>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    /// Whole, non-negative units. Values outside [`WORKLOADS`] are accepted
    /// and count toward no tier; fractional or negative values fail to parse.
    pub workload: u32,
}

/// The fields the statistics engine reads from a record.
///
/// Anything exposing a gender, a birth instant and a workload can be
/// summarized, not only records produced by the generator.
pub trait EmployeeView {
    fn gender(&self) -> Gender;
    fn birth_date(&self) -> DateTime<Utc>;
    fn workload(&self) -> u32;
}

impl EmployeeView for EmployeeRecord {
    fn gender(&self) -> Gender {
        self.gender
    }

    fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    fn workload(&self) -> u32 {
        self.workload
    }
}

impl<T: EmployeeView + ?Sized> EmployeeView for &T {
    fn gender(&self) -> Gender {
        (**self).gender()
    }

    fn birth_date(&self) -> DateTime<Utc> {
        (**self).birth_date()
    }

    fn workload(&self) -> u32 {
        (**self).workload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(Gender::Male.to_string(), "male");
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let json = r#"{
            "gender": "female",
            "birthDate": "1990-01-01T00:00:00Z",
            "name": "Anna",
            "surname": "Nováková",
            "workload": 30
        }"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.surname, "Nováková");
        assert_eq!(record.workload, 30);

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("birthDate").is_some());
    }

    #[test]
    fn workload_must_be_a_whole_non_negative_number() {
        let off_tier = r#"{"gender":"male","birthDate":"2000-05-05T00:00:00Z","workload":25}"#;
        assert_eq!(
            serde_json::from_str::<EmployeeRecord>(off_tier).unwrap().workload,
            25
        );
        for workload in ["12.5", "-10"] {
            let json = format!(
                r#"{{"gender":"male","birthDate":"2000-05-05T00:00:00Z","workload":{workload}}}"#
            );
            assert!(serde_json::from_str::<EmployeeRecord>(&json).is_err());
        }
    }

    #[test]
    fn names_are_optional_on_input() {
        let json = r#"{"gender":"male","birthDate":"2000-05-05T00:00:00Z","workload":10}"#;
        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert!(record.name.is_empty());
        assert!(record.surname.is_empty());
    }
}
