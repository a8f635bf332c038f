use super::common::*;
use crate::reasoning::differential::ConditionId;
use crate::reasoning::generator::{
    generate_differentials, COUNTER_EVIDENCE_PREFIX, GENERATOR_CEILING,
};
use crate::reasoning::survey::SurveySnapshot;
use std::collections::BTreeSet;

fn probability_of(snapshot: &SurveySnapshot, id: ConditionId) -> f64 {
    generate_differentials(snapshot)
        .into_iter()
        .find(|differential| differential.id == id)
        .map(|differential| differential.probability)
        .unwrap_or_else(|| panic!("{id} missing from generator output"))
}

#[test]
fn one_differential_per_generator_condition() {
    let differentials = generate_differentials(&SurveySnapshot::default());

    assert_eq!(differentials.len(), 13);
    let ids: BTreeSet<_> = differentials.iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), 13);
}

#[test]
fn empty_snapshot_scores_zero_and_lists_missing_findings() {
    let differentials = generate_differentials(&aged(4.0));

    let sepsis = differentials
        .iter()
        .find(|entry| entry.id == ConditionId::Sepsis)
        .expect("sepsis present");
    assert_eq!(sepsis.probability, 0.0);
    assert!(sepsis.evidence.is_empty());
    assert_eq!(
        sepsis.missing_findings,
        vec![
            "Temperature not recorded",
            "Heart rate not recorded",
            "Capillary refill not recorded"
        ]
    );
    assert!(!sepsis.next_questions.is_empty());
}

#[test]
fn febrile_neonate_scores_sepsis_from_each_finding() {
    let differentials = generate_differentials(&febrile_neonate());
    let sepsis = differentials
        .iter()
        .find(|entry| entry.id == ConditionId::Sepsis)
        .expect("sepsis present");

    assert!(approx(sepsis.probability, 0.5));
    assert_eq!(
        sepsis.evidence,
        vec![
            "Fever 38.5 °C",
            "Tachycardia for age",
            "Delayed capillary refill"
        ]
    );
}

#[test]
fn scores_never_exceed_the_ceiling() {
    for snapshot in presentations() {
        for differential in generate_differentials(&snapshot) {
            assert!(
                (0.0..=GENERATOR_CEILING).contains(&differential.probability),
                "{} scored {}",
                differential.id,
                differential.probability
            );
        }
    }
}

#[test]
fn counter_evidence_floors_at_zero() {
    let mut snapshot = aged(9.0);
    snapshot.breathing.spo2 = Some(99);

    assert_eq!(probability_of(&snapshot, ConditionId::Bronchiolitis), 0.0);
}

#[test]
fn counter_evidence_is_tagged_against() {
    let bronchiolitis = generate_differentials(&aged(6.0))
        .into_iter()
        .find(|entry| entry.id == ConditionId::Bronchiolitis)
        .expect("bronchiolitis is always generated");

    assert_eq!(bronchiolitis.probability, 0.0);
    assert_eq!(
        bronchiolitis.evidence,
        vec![format!(
            "{COUNTER_EVIDENCE_PREFIX}Two years or older: bronchiolitis unlikely"
        )]
    );
}

#[test]
fn contradictory_hypotheses_are_not_normalised() {
    let snapshot = everything_positive(7.0);
    let total: f64 = generate_differentials(&snapshot)
        .iter()
        .map(|entry| entry.probability)
        .sum();

    assert!(total > 1.0);
    assert!(probability_of(&snapshot, ConditionId::Hypoglycemia) > 0.5);
    assert!(probability_of(&snapshot, ConditionId::TraumaticBrainInjury) > 0.5);
}

#[test]
fn generator_is_deterministic() {
    let snapshot = everything_positive(3.0);
    assert_eq!(
        generate_differentials(&snapshot),
        generate_differentials(&snapshot)
    );
}
