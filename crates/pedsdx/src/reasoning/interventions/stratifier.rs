use super::domain::{
    CarePlan, CompletionState, Intervention, InterventionTier, RequiredTest, TestPriority,
};
use serde::Serialize;

/// One intervention as the bedside display should render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterventionView {
    #[serde(flatten)]
    pub intervention: Intervention,
    pub tier_label: &'static str,
    pub completed: bool,
    /// False while the intervention is gated behind outstanding stat tests.
    pub actionable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequiredTestView {
    #[serde(flatten)]
    pub test: RequiredTest,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StratifiedPlan {
    pub plan_name: String,
    pub immediate: Vec<InterventionView>,
    pub urgent: Vec<InterventionView>,
    pub confirmatory: Vec<InterventionView>,
    pub required_tests: Vec<RequiredTestView>,
    pub all_immediate_complete: bool,
    pub all_stat_tests_sent: bool,
}

impl StratifiedPlan {
    pub fn outstanding_stat_tests(&self) -> impl Iterator<Item = &RequiredTestView> {
        self.required_tests
            .iter()
            .filter(|view| view.test.priority == TestPriority::Stat && !view.completed)
    }
}

/// Splits a care plan into tiers and applies the test-before-treat gate to the confirmatory
/// tier. Catalog order is preserved inside each tier.
pub fn stratify(plan: &CarePlan, completion: &CompletionState) -> StratifiedPlan {
    let required_tests: Vec<RequiredTestView> = plan
        .all_required_tests()
        .into_iter()
        .map(|test| RequiredTestView {
            completed: completion.completed_tests.contains(&test.name),
            test,
        })
        .collect();

    let all_stat_tests_sent = required_tests
        .iter()
        .filter(|view| view.test.priority == TestPriority::Stat)
        .all(|view| view.completed);

    let mut immediate = Vec::new();
    let mut urgent = Vec::new();
    let mut confirmatory = Vec::new();
    for intervention in &plan.interventions {
        let completed = completion.completed_interventions.contains(&intervention.id);
        let actionable = match intervention.tier {
            InterventionTier::Immediate | InterventionTier::Urgent => true,
            InterventionTier::Confirmatory => all_stat_tests_sent,
        };
        let view = InterventionView {
            intervention: intervention.clone(),
            tier_label: intervention.tier.label(),
            completed,
            actionable,
        };
        match intervention.tier {
            InterventionTier::Immediate => immediate.push(view),
            InterventionTier::Urgent => urgent.push(view),
            InterventionTier::Confirmatory => confirmatory.push(view),
        }
    }

    let all_immediate_complete = immediate.iter().all(|view| view.completed);

    StratifiedPlan {
        plan_name: plan.name.clone(),
        immediate,
        urgent,
        confirmatory,
        required_tests,
        all_immediate_complete,
        all_stat_tests_sent,
    }
}
