use crate::reasoning::differential::ConditionId;
use crate::reasoning::interventions::{
    stratify, CarePlan, CarePlanCatalog, CompletionState, Intervention, InterventionTier,
    RequiredTest, RiskIfWrong, TestPriority, TimeWindow,
};
use crate::reasoning::protocol::ProtocolPhase;

fn septic_plan() -> CarePlan {
    CarePlanCatalog::standard()
        .plan_for(ConditionId::Sepsis)
        .clone()
}

fn stat_test_names(plan: &CarePlan) -> Vec<String> {
    plan.all_required_tests()
        .into_iter()
        .filter(|test| test.priority == TestPriority::Stat)
        .map(|test| test.name)
        .collect()
}

#[test]
fn interventions_land_in_their_authored_tier_in_catalog_order() {
    let plan = septic_plan();
    let stratified = stratify(&plan, &CompletionState::default());

    let immediate: Vec<_> = stratified
        .immediate
        .iter()
        .map(|view| view.intervention.id.as_str())
        .collect();
    assert_eq!(
        immediate,
        vec!["high_flow_oxygen", "vascular_access", "sepsis_fluid_bolus"]
    );
    assert!(stratified
        .urgent
        .iter()
        .all(|view| view.intervention.tier == InterventionTier::Urgent));
    assert_eq!(stratified.confirmatory.len(), 2);
    assert_eq!(
        stratified.immediate.len() + stratified.urgent.len() + stratified.confirmatory.len(),
        plan.interventions.len()
    );
}

#[test]
fn confirmatory_tier_unlocks_when_the_last_stat_test_is_sent() {
    let plan = septic_plan();
    let stat_tests = stat_test_names(&plan);
    assert_eq!(stat_tests, vec!["Blood glucose", "Blood culture", "Lactate"]);

    let (last, earlier) = stat_tests.split_last().expect("stat tests authored");
    let partial = CompletionState::default().with_tests(earlier.iter().cloned());
    let gated = stratify(&plan, &partial);

    assert!(!gated.all_stat_tests_sent);
    assert!(gated.confirmatory.iter().all(|view| !view.actionable));
    assert_eq!(
        gated
            .outstanding_stat_tests()
            .map(|view| view.test.name.as_str())
            .collect::<Vec<_>>(),
        vec![last.as_str()]
    );

    let complete = partial.with_tests([last.clone()]);
    let unlocked = stratify(&plan, &complete);

    assert!(unlocked.all_stat_tests_sent);
    assert!(unlocked.confirmatory.iter().all(|view| view.actionable));
    assert_eq!(unlocked.outstanding_stat_tests().count(), 0);
}

#[test]
fn non_stat_tests_do_not_gate_confirmatory_interventions() {
    let plan = septic_plan();
    let completion = CompletionState::default().with_tests(stat_test_names(&plan));

    let stratified = stratify(&plan, &completion);

    assert!(stratified
        .required_tests
        .iter()
        .any(|view| view.test.priority != TestPriority::Stat && !view.completed));
    assert!(stratified.all_stat_tests_sent);
}

#[test]
fn immediate_and_urgent_tiers_are_always_actionable() {
    let stratified = stratify(&septic_plan(), &CompletionState::default());
    assert!(stratified
        .immediate
        .iter()
        .chain(stratified.urgent.iter())
        .all(|view| view.actionable));
}

#[test]
fn all_immediate_complete_tracks_every_immediate_id() {
    let plan = septic_plan();
    let ids = ["high_flow_oxygen", "vascular_access", "sepsis_fluid_bolus"];

    let partial = CompletionState::default().with_interventions(ids[..2].iter().copied());
    assert!(!stratify(&plan, &partial).all_immediate_complete);

    let complete = CompletionState::default().with_interventions(ids);
    let stratified = stratify(&plan, &complete);
    assert!(stratified.all_immediate_complete);
    assert!(stratified.immediate.iter().all(|view| view.completed));
}

#[test]
fn plans_without_stat_tests_or_immediate_items_are_vacuously_complete() {
    let plan = CarePlan {
        name: "Observation".to_string(),
        conditions: Vec::new(),
        required_tests: vec![RequiredTest::new("Urinalysis", TestPriority::Routine)],
        interventions: vec![Intervention::new(
            "admit",
            "Admit for observation",
            "Ongoing concern",
            InterventionTier::Confirmatory,
            TimeWindow::Hours,
            RiskIfWrong::Low,
        )],
    };

    let stratified = stratify(&plan, &CompletionState::default());

    assert!(stratified.all_immediate_complete);
    assert!(stratified.all_stat_tests_sent);
    assert!(stratified.confirmatory[0].actionable);
}

#[test]
fn protocol_phase_follows_immediate_completion() {
    let plan = septic_plan();
    let none = stratify(&plan, &CompletionState::default());
    assert_eq!(ProtocolPhase::derive(&none, false), ProtocolPhase::Recognition);

    let some = stratify(
        &plan,
        &CompletionState::default().with_interventions(["high_flow_oxygen"]),
    );
    assert_eq!(
        ProtocolPhase::derive(&some, false),
        ProtocolPhase::AwaitingImmediateInterventions
    );
    assert_eq!(
        ProtocolPhase::derive(&some, true),
        ProtocolPhase::AwaitingImmediateInterventions
    );

    let all = stratify(
        &plan,
        &CompletionState::default().with_interventions([
            "high_flow_oxygen",
            "vascular_access",
            "sepsis_fluid_bolus",
        ]),
    );
    assert_eq!(
        ProtocolPhase::derive(&all, false),
        ProtocolPhase::ProtocolLaunchEnabled
    );
    assert_eq!(ProtocolPhase::derive(&all, true), ProtocolPhase::Launched);
    assert!(ProtocolPhase::Launched.launch_enabled());
    assert!(!ProtocolPhase::Recognition.launch_enabled());
}
