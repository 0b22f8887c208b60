mod employee;
mod request;
mod summary;

pub use employee::{EmployeeRecord, EmployeeView, Gender, WORKLOADS};
pub use request::{AgeRange, GenerationRequest};
pub use summary::StatisticsResult;
