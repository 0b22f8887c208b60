mod engine;
pub mod numeric;

pub use engine::{StatisticsEngine, summarize};
