//! Lookup data for record synthesis.
//!
//! [`NameTables`] bundles the gender-keyed name and surname lists with the
//! workload tiers. The default tables carry ten Czech names per gender and
//! field; alternate tables can be supplied through configuration.

use serde::Deserialize;

use crate::error::StaffgenError;
use crate::model::{Gender, WORKLOADS};

const MALE_NAMES: [&str; 10] = [
    "Jan", "Petr", "Tomáš", "Lukáš", "Jakub", "Adam", "Matěj", "Michal", "Filip", "David",
];

const FEMALE_NAMES: [&str; 10] = [
    "Anna", "Eliška", "Adéla", "Tereza", "Karolína", "Lucie", "Kristýna", "Marie", "Veronika",
    "Kateřina",
];

const MALE_SURNAMES: [&str; 10] = [
    "Vomáčka",
    "Svoboda",
    "Dvořák",
    "Černý",
    "Procházka",
    "Kučera",
    "Horák",
    "Beneš",
    "Fiala",
    "Sedláček",
];

const FEMALE_SURNAMES: [&str; 10] = [
    "Nováková",
    "Svobodová",
    "Dvořáková",
    "Černá",
    "Procházková",
    "Kučerová",
    "Horáková",
    "Benešová",
    "Fialová",
    "Sedláčková",
];

/// Immutable lookup data owned by a [`RecordGenerator`](super::RecordGenerator).
#[derive(Debug, Clone, PartialEq)]
pub struct NameTables {
    male_names: Vec<String>,
    female_names: Vec<String>,
    male_surnames: Vec<String>,
    female_surnames: Vec<String>,
    workloads: Vec<u32>,
}

/// Raw `[tables]` section from `staffgen.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TablesConfig {
    pub male_names: Vec<String>,
    pub female_names: Vec<String>,
    pub male_surnames: Vec<String>,
    pub female_surnames: Vec<String>,
}

impl Default for NameTables {
    fn default() -> Self {
        Self {
            male_names: owned_list(&MALE_NAMES),
            female_names: owned_list(&FEMALE_NAMES),
            male_surnames: owned_list(&MALE_SURNAMES),
            female_surnames: owned_list(&FEMALE_SURNAMES),
            workloads: WORKLOADS.to_vec(),
        }
    }
}

impl NameTables {
    /// Builds tables from explicit lists. Every list must be non-empty.
    pub fn new(
        male_names: Vec<String>,
        female_names: Vec<String>,
        male_surnames: Vec<String>,
        female_surnames: Vec<String>,
    ) -> Result<Self, StaffgenError> {
        let lists = [
            ("male_names", &male_names),
            ("female_names", &female_names),
            ("male_surnames", &male_surnames),
            ("female_surnames", &female_surnames),
        ];
        for (key, list) in lists {
            if list.is_empty() {
                return Err(StaffgenError::Config(format!(
                    "tables.{key} must not be empty"
                )));
            }
        }

        Ok(Self {
            male_names,
            female_names,
            male_surnames,
            female_surnames,
            workloads: WORKLOADS.to_vec(),
        })
    }

    pub fn names(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Male => &self.male_names,
            Gender::Female => &self.female_names,
        }
    }

    pub fn surnames(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Male => &self.male_surnames,
            Gender::Female => &self.female_surnames,
        }
    }

    pub fn workloads(&self) -> &[u32] {
        &self.workloads
    }
}

impl TryFrom<TablesConfig> for NameTables {
    type Error = StaffgenError;

    fn try_from(config: TablesConfig) -> Result<Self, Self::Error> {
        NameTables::new(
            config.male_names,
            config.female_names,
            config.male_surnames,
            config.female_surnames,
        )
    }
}

fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_have_ten_entries_each() {
        let tables = NameTables::default();
        for gender in Gender::ALL {
            assert_eq!(tables.names(gender).len(), 10);
            assert_eq!(tables.surnames(gender).len(), 10);
        }
        assert_eq!(tables.workloads(), &[10, 20, 30, 40]);
    }

    #[test]
    fn surnames_are_keyed_by_gender() {
        let tables = NameTables::default();
        assert!(tables.surnames(Gender::Female).contains(&"Nováková".to_string()));
        assert!(tables.surnames(Gender::Male).contains(&"Svoboda".to_string()));
    }

    #[test]
    fn empty_list_is_a_config_error() {
        let err = NameTables::new(
            vec!["Ole".into()],
            vec![],
            vec!["Hansen".into()],
            vec!["Hansen".into()],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config error: tables.female_names must not be empty"
        );
    }
}
