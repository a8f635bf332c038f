use super::common::*;
use crate::reasoning::age::AgeGroup;
use crate::reasoning::differential::{ConditionId, DifferentialCategory};
use crate::reasoning::engine::{reason, ReasoningEngine};
use crate::reasoning::interventions::CompletionState;
use crate::reasoning::protocol::{ProtocolPhase, DEFAULT_PROTOCOL_ROUTE};

#[test]
fn merged_list_is_bounded_and_non_increasing() {
    let engine = ReasoningEngine::standard();
    for snapshot in presentations() {
        let output = engine.reason(&snapshot);
        assert!(output
            .differentials
            .iter()
            .all(|entry| (0.0..=1.0).contains(&entry.probability)));
        assert!(output
            .differentials
            .windows(2)
            .all(|pair| pair[0].probability >= pair[1].probability));
    }
}

#[test]
fn shock_entries_are_merged_after_generator_entries() {
    let output = reason(&cardiogenic_child());

    assert_eq!(output.differentials.len(), 13 + output.shock_analyses.len());
    let top = output.top_differential().expect("non-empty");
    assert_eq!(top.id, ConditionId::CardiogenicShock);
    assert_eq!(top.category, DifferentialCategory::ImmediateThreat);
    assert!(approx(top.probability, 0.9));
    assert_eq!(output.protocol_route, "/protocols/cardiogenic-shock");
    assert_eq!(output.care_plan, "Cardiogenic shock and myocarditis");
}

#[test]
fn non_shocked_patient_only_sees_generator_entries() {
    let output = reason(&well_child());

    assert!(output.shock_analyses.is_empty());
    assert_eq!(output.differentials.len(), 13);
}

#[test]
fn neonatal_sepsis_leads_with_age_adjusted_score() {
    let output = reason(&febrile_neonate());

    assert_eq!(output.age_group, AgeGroup::Neonate);
    let top = output.top_differential().expect("non-empty");
    assert_eq!(top.id, ConditionId::Sepsis);
    assert!(approx(top.probability, 0.7));
    assert!(top
        .evidence
        .last()
        .is_some_and(|entry| entry.starts_with("[Age: neonate]")));
    assert_eq!(output.protocol_route, "/protocols/sepsis");
    assert!(!output.age_considerations.is_empty());
}

#[test]
fn equal_scores_keep_generator_entry_first() {
    let output = reason(&anaphylactic_child());

    let leaders: Vec<_> = output
        .differentials
        .iter()
        .take(2)
        .map(|entry| (entry.id, entry.probability))
        .collect();
    assert_eq!(
        leaders,
        vec![
            (ConditionId::Anaphylaxis, 0.99),
            (ConditionId::AnaphylacticShock, 0.99)
        ]
    );
    assert_eq!(output.protocol_route, "/protocols/anaphylaxis");
}

#[test]
fn unmapped_top_condition_falls_back_to_the_general_route() {
    let mut snapshot = aged(0.5);
    snapshot.breathing.wheeze = Some(true);
    snapshot.breathing.respiratory_rate = Some(65);

    let output = reason(&snapshot);

    assert_eq!(
        output.top_differential().map(|entry| entry.id),
        Some(ConditionId::Bronchiolitis)
    );
    assert_eq!(output.protocol_route, DEFAULT_PROTOCOL_ROUTE);
}

#[test]
fn progress_flows_through_to_the_protocol_phase() {
    let engine = ReasoningEngine::standard();
    let snapshot = febrile_neonate();

    let fresh = engine.reason(&snapshot);
    assert_eq!(fresh.protocol_phase, ProtocolPhase::Recognition);
    assert!(!fresh.protocol_launch_enabled);
    assert!(fresh
        .confirmatory_interventions
        .iter()
        .all(|view| !view.actionable));

    let immediate_ids: Vec<String> = fresh
        .immediate_interventions
        .iter()
        .map(|view| view.intervention.id.clone())
        .collect();
    let stat_tests: Vec<String> = fresh
        .required_tests
        .iter()
        .filter(|view| view.test.priority == crate::reasoning::TestPriority::Stat)
        .map(|view| view.test.name.clone())
        .collect();
    let completion = CompletionState::default()
        .with_interventions(immediate_ids)
        .with_tests(stat_tests);

    let launched = engine.reason_with_progress(&snapshot, &completion, true);
    assert_eq!(launched.protocol_phase, ProtocolPhase::Launched);
    assert!(launched.protocol_launch_enabled);
    assert!(launched.all_stat_tests_sent);
    assert!(launched
        .confirmatory_interventions
        .iter()
        .all(|view| view.actionable));
    assert_eq!(launched.differentials, fresh.differentials);
}

#[test]
fn reasoning_is_deterministic() {
    let engine = ReasoningEngine::standard();
    for snapshot in presentations() {
        assert_eq!(engine.reason(&snapshot), engine.reason(&snapshot));
    }
}
