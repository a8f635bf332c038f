//! Differential generation, age modulation, shock classification, and care-plan stratification.
//!
//! Every entry point here is a pure function of a [`SurveySnapshot`] plus static tables. The
//! bedside display re-runs the whole pipeline on each edit, so identical inputs must always give
//! identical outputs.

pub mod age;
pub mod differential;
pub mod engine;
pub mod export;
pub mod generator;
pub mod intake;
pub mod interventions;
pub mod protocol;
pub mod shock;
pub mod survey;

#[cfg(test)]
mod tests;

pub use age::{apply_age_modifiers, AgeGroup, AgeModifier, AgeModifierTable};
pub use differential::{ConditionId, Differential, DifferentialCategory, UnknownCondition};
pub use engine::{reason, ReasoningEngine, ReasoningOutput};
pub use export::{write_differentials_csv, ExportError};
pub use generator::{generate_differentials, DifferentialGenerator};
pub use intake::{validate_snapshot, SnapshotError, SnapshotGuard};
pub use interventions::{
    stratify, CarePlan, CarePlanCatalog, CompletionState, Intervention, InterventionTier,
    InterventionView, RequiredTest, RequiredTestView, RiskIfWrong, StratifiedPlan, TestPriority,
};
pub use protocol::{resolve_protocol_route, ProtocolPhase, DEFAULT_PROTOCOL_ROUTE};
pub use shock::{
    differentiate_shock, FluidRecommendation, ShockAnalysis, ShockClassifier, ShockType,
};
pub use survey::SurveySnapshot;
