use log::info;
use rand::Rng;
use rand::rngs::StdRng;

use crate::clock::{Clock, SystemClock};
use crate::error::InvalidRequest;
use crate::generator::RecordGenerator;
use crate::model::{EmployeeRecord, GenerationRequest, StatisticsResult};
use crate::stats::StatisticsEngine;

/// Chains record generation and summarization.
pub struct Pipeline<R = StdRng, C = SystemClock> {
    generator: RecordGenerator<R, C>,
    engine: StatisticsEngine<C>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RecordGenerator::from_entropy(), StatisticsEngine::new(SystemClock))
    }
}

impl<R: Rng, C: Clock> Pipeline<R, C> {
    pub fn new(generator: RecordGenerator<R, C>, engine: StatisticsEngine<C>) -> Self {
        Self { generator, engine }
    }

    /// Generates the requested records, then summarizes them.
    ///
    /// `InvalidRequest` from generation is returned unchanged.
    pub fn run(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<StatisticsResult<EmployeeRecord>, InvalidRequest> {
        let records = self.generator.generate(request)?;
        let result = self.engine.summarize(&records);
        info!(
            "summarized {} generated records (average age {})",
            result.total, result.average_age
        );
        Ok(result)
    }
}

/// One-shot pipeline with an OS-seeded RNG and the wall clock.
pub fn run(request: &GenerationRequest) -> Result<StatisticsResult, InvalidRequest> {
    Pipeline::default().run(request)
}
