//! Synthetic employee records and descriptive statistics over them.
//!
//! [`RecordGenerator`] draws records from injected randomness, clock and name
//! tables; [`StatisticsEngine`] summarizes any [`EmployeeView`] slice.
//! [`run`] chains the two.

pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod pipeline;
pub mod stats;
pub mod ui;

pub use clock::{Clock, FixedClock, SystemClock, YEAR_MS};
pub use error::{InvalidRequest, StaffgenError};
pub use generator::{NameTables, RecordGenerator};
pub use model::{
    AgeRange, EmployeeRecord, EmployeeView, Gender, GenerationRequest, StatisticsResult,
};
pub use pipeline::{Pipeline, run};
pub use stats::{StatisticsEngine, summarize};
