use super::age::{AgeGroup, AgeModifierTable};
use super::differential::{rank_by_probability, Differential};
use super::generator::DifferentialGenerator;
use super::interventions::{
    stratify, CarePlanCatalog, CompletionState, InterventionView, RequiredTestView,
};
use super::protocol::{resolve_protocol_route, ProtocolPhase, DEFAULT_PROTOCOL_ROUTE};
use super::shock::{ShockAnalysis, ShockClassifier};
use super::survey::SurveySnapshot;
use serde::Serialize;
use tracing::debug;

/// Everything the bedside display needs for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningOutput {
    pub age_group: AgeGroup,
    /// Generator and shock entries merged and ranked; ties keep generator-first order.
    pub differentials: Vec<Differential>,
    pub protocol_route: &'static str,
    pub care_plan: String,
    pub protocol_phase: ProtocolPhase,
    pub protocol_launch_enabled: bool,
    pub immediate_interventions: Vec<InterventionView>,
    pub urgent_interventions: Vec<InterventionView>,
    pub confirmatory_interventions: Vec<InterventionView>,
    pub required_tests: Vec<RequiredTestView>,
    pub all_immediate_complete: bool,
    pub all_stat_tests_sent: bool,
    pub age_considerations: Vec<String>,
    pub shock_analyses: Vec<ShockAnalysis>,
}

impl ReasoningOutput {
    pub fn top_differential(&self) -> Option<&Differential> {
        self.differentials.first()
    }
}

/// Composes the generator, age modifiers, shock classifier, and stratifier. Holds only
/// references to read-only tables, so one engine can serve any number of calls.
#[derive(Debug, Clone, Copy)]
pub struct ReasoningEngine<'a> {
    generator: DifferentialGenerator,
    shock: ShockClassifier,
    ages: &'a AgeModifierTable,
    catalog: &'a CarePlanCatalog,
}

impl ReasoningEngine<'static> {
    pub fn standard() -> Self {
        Self::new(AgeModifierTable::shared(), CarePlanCatalog::shared())
    }
}

impl Default for ReasoningEngine<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> ReasoningEngine<'a> {
    pub fn new(ages: &'a AgeModifierTable, catalog: &'a CarePlanCatalog) -> Self {
        Self {
            generator: DifferentialGenerator,
            shock: ShockClassifier,
            ages,
            catalog,
        }
    }

    /// Fresh assessment with nothing ticked.
    pub fn reason(&self, snapshot: &SurveySnapshot) -> ReasoningOutput {
        self.reason_with_progress(snapshot, &CompletionState::default(), false)
    }

    pub fn reason_with_progress(
        &self,
        snapshot: &SurveySnapshot,
        completion: &CompletionState,
        launched: bool,
    ) -> ReasoningOutput {
        let age_group = AgeGroup::classify(snapshot);
        let shock_analyses = self.shock.differentiate(snapshot);

        let mut differentials: Vec<Differential> = self
            .generator
            .generate(snapshot)
            .into_iter()
            .map(|differential| self.ages.apply(differential, snapshot))
            .chain(
                shock_analyses
                    .iter()
                    .cloned()
                    .map(ShockAnalysis::into_differential),
            )
            .collect();
        rank_by_probability(&mut differentials);

        let top = differentials.first();
        let (protocol_route, plan, age_considerations) = match top {
            Some(top) => {
                debug!(
                    condition = %top.id,
                    probability = top.probability,
                    age_group = %age_group,
                    "top differential selected"
                );
                (
                    resolve_protocol_route(top.id),
                    self.catalog.plan_for(top.id),
                    self.ages.considerations(top.id, snapshot),
                )
            }
            None => (DEFAULT_PROTOCOL_ROUTE, self.catalog.fallback(), Vec::new()),
        };

        let stratified = stratify(plan, completion);
        let protocol_phase = ProtocolPhase::derive(&stratified, launched);

        ReasoningOutput {
            age_group,
            differentials,
            protocol_route,
            care_plan: stratified.plan_name,
            protocol_phase,
            protocol_launch_enabled: protocol_phase.launch_enabled(),
            immediate_interventions: stratified.immediate,
            urgent_interventions: stratified.urgent,
            confirmatory_interventions: stratified.confirmatory,
            required_tests: stratified.required_tests,
            all_immediate_complete: stratified.all_immediate_complete,
            all_stat_tests_sent: stratified.all_stat_tests_sent,
            age_considerations,
            shock_analyses,
        }
    }
}

/// Run the standard engine over a fresh assessment.
pub fn reason(snapshot: &SurveySnapshot) -> ReasoningOutput {
    ReasoningEngine::standard().reason(snapshot)
}
