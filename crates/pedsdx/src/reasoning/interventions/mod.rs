//! Care plans and the test-before-treat stratifier.

mod catalog;
mod domain;
mod stratifier;

pub use catalog::CarePlanCatalog;
pub use domain::{
    CarePlan, CompletionState, Intervention, InterventionTier, RequiredTest, RiskIfWrong,
    TestPriority, TestThreshold, TimeWindow,
};
pub use stratifier::{stratify, InterventionView, RequiredTestView, StratifiedPlan};
