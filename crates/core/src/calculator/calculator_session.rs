use log::{debug, warn};
use std::sync::Arc;

use super::calculator_model::{InvestmentResult, InvestmentScenario, ScenarioUpdate};
use super::roi_calculator::calculate_investment;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Editable calculator state that keeps its result in lockstep with its inputs.
///
/// Every successful edit recomputes the full result and publishes it to the
/// event sink before returning. A rejected edit leaves both the scenario and
/// the last published result untouched.
pub struct ScenarioSession {
    scenario: InvestmentScenario,
    result: InvestmentResult,
    event_sink: Arc<dyn DomainEventSink>,
}

impl ScenarioSession {
    /// Opens a session on the seed scenario.
    pub fn new(event_sink: Arc<dyn DomainEventSink>) -> Result<Self> {
        Self::with_scenario(InvestmentScenario::default(), event_sink)
    }

    pub fn with_scenario(
        scenario: InvestmentScenario,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Result<Self> {
        scenario.validate()?;
        let result = calculate_investment(&scenario)?;
        event_sink.emit(DomainEvent::investment_recalculated(result.clone()));
        Ok(Self {
            scenario,
            result,
            event_sink,
        })
    }

    pub fn scenario(&self) -> &InvestmentScenario {
        &self.scenario
    }

    pub fn result(&self) -> &InvestmentResult {
        &self.result
    }

    /// Applies one field edit and returns the freshly computed result.
    pub fn apply(&mut self, update: ScenarioUpdate) -> Result<&InvestmentResult> {
        let (candidate, result) = self
            .recompute(std::slice::from_ref(&update))
            .map_err(|e| {
                warn!("Rejected scenario update {:?}: {}", update, e);
                e
            })?;

        debug!("Applied scenario update {:?}", update);
        self.commit(candidate, result);
        Ok(&self.result)
    }

    /// Applies several edits as one change; either all land or none do.
    pub fn apply_all(&mut self, updates: Vec<ScenarioUpdate>) -> Result<&InvestmentResult> {
        let (candidate, result) = self.recompute(&updates).map_err(|e| {
            warn!("Rejected {} scenario updates {:?}: {}", updates.len(), updates, e);
            e
        })?;

        debug!("Applied {} scenario updates", updates.len());
        self.commit(candidate, result);
        Ok(&self.result)
    }

    /// Restores the seed scenario.
    pub fn reset(&mut self) -> Result<&InvestmentResult> {
        let scenario = InvestmentScenario::default();
        let result = calculate_investment(&scenario)?;
        self.commit(scenario, result);
        Ok(&self.result)
    }

    /// Builds and checks a candidate without touching the live state.
    fn recompute(
        &self,
        updates: &[ScenarioUpdate],
    ) -> Result<(InvestmentScenario, InvestmentResult)> {
        let mut candidate = self.scenario.clone();
        for update in updates {
            update.apply_to(&mut candidate)?;
        }
        candidate.validate()?;
        let result = calculate_investment(&candidate)?;
        Ok((candidate, result))
    }

    fn commit(&mut self, scenario: InvestmentScenario, result: InvestmentResult) {
        self.scenario = scenario;
        self.result = result;
        self.event_sink
            .emit(DomainEvent::investment_recalculated(self.result.clone()));
    }
}
