mod records;
mod tables;

pub use records::RecordGenerator;
pub use tables::{NameTables, TablesConfig};
