use crate::reasoning::differential::{ConditionId, Differential, DifferentialCategory};
use crate::reasoning::survey::{
    AirwayPatency, Avpu, BreathSounds, CapillaryRefill, JugularVenousPressure, RashType,
    SkinTemperature, SurveySnapshot, WorkOfBreathing,
};

pub(super) fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

pub(super) fn aged(age_years: f64) -> SurveySnapshot {
    SurveySnapshot {
        age_years,
        ..SurveySnapshot::default()
    }
}

pub(super) fn differential(id: ConditionId, probability: f64) -> Differential {
    Differential {
        id,
        diagnosis: id.to_string(),
        probability,
        evidence: vec!["Baseline finding".to_string()],
        missing_findings: Vec::new(),
        next_questions: Vec::new(),
        category: DifferentialCategory::Critical,
    }
}

/// Six-year-old in shock with raised JVP, crackles, and a palpable liver.
pub(super) fn cardiogenic_child() -> SurveySnapshot {
    let mut snapshot = aged(6.0);
    snapshot.circulation.jugular_venous_pressure = Some(JugularVenousPressure::Elevated);
    snapshot.circulation.hepatomegaly = Some(true);
    snapshot.circulation.capillary_refill = Some(CapillaryRefill::Delayed);
    snapshot.circulation.shock_suspected = Some(true);
    snapshot.breathing.crackles = Some(true);
    snapshot
}

/// Two-week-old, febrile, tachycardic, with delayed refill. Sepsis scores 0.5 before the
/// neonatal modifier.
pub(super) fn febrile_neonate() -> SurveySnapshot {
    let mut snapshot = aged(0.05);
    snapshot.exposure.temperature_c = Some(38.5);
    snapshot.circulation.heart_rate = Some(190);
    snapshot.circulation.capillary_refill = Some(CapillaryRefill::Delayed);
    snapshot
}

/// Eight-year-old after a peanut exposure with urticaria, angioedema, wheeze, and hypotension.
pub(super) fn anaphylactic_child() -> SurveySnapshot {
    let mut snapshot = aged(8.0);
    snapshot.weight_kg = Some(26.0);
    snapshot.exposure.allergen_exposure = Some(true);
    snapshot.exposure.skin.rash = Some(RashType::Urticarial);
    snapshot.exposure.skin.temperature = Some(SkinTemperature::Cool);
    snapshot.airway.angioedema = Some(true);
    snapshot.breathing.wheeze = Some(true);
    snapshot.circulation.systolic_bp = Some(70);
    snapshot
}

/// Toddler bleeding after a fall with flat neck veins and clear lungs.
pub(super) fn bleeding_toddler() -> SurveySnapshot {
    let mut snapshot = aged(3.0);
    snapshot.circulation.active_bleeding = Some(true);
    snapshot.circulation.gi_losses = Some(true);
    snapshot.circulation.jugular_venous_pressure = Some(JugularVenousPressure::Flat);
    snapshot.circulation.capillary_refill = Some(CapillaryRefill::Delayed);
    snapshot.circulation.heart_rate = Some(165);
    snapshot.exposure.burns = Some(true);
    snapshot.exposure.trauma.high_energy_mechanism = Some(true);
    snapshot.breathing.crackles = Some(false);
    snapshot
}

/// Well child: warm, normal refill, normal vitals.
pub(super) fn well_child() -> SurveySnapshot {
    let mut snapshot = aged(5.0);
    snapshot.circulation.heart_rate = Some(100);
    snapshot.circulation.systolic_bp = Some(100);
    snapshot.circulation.capillary_refill = Some(CapillaryRefill::Normal);
    snapshot.exposure.skin.temperature = Some(SkinTemperature::Warm);
    snapshot.exposure.temperature_c = Some(37.0);
    snapshot.breathing.respiratory_rate = Some(22);
    snapshot.breathing.spo2 = Some(99);
    snapshot.disability.avpu = Some(Avpu::Alert);
    snapshot.disability.gcs = Some(15);
    snapshot
}

/// Everything positive at once; used to push raw sums far past the ceiling.
pub(super) fn everything_positive(age_years: f64) -> SurveySnapshot {
    let mut snapshot = aged(age_years);
    snapshot.airway.patency = Some(AirwayPatency::Obstructed);
    snapshot.airway.stridor = Some(true);
    snapshot.airway.drooling = Some(true);
    snapshot.airway.foreign_body_suspected = Some(true);
    snapshot.airway.angioedema = Some(true);
    snapshot.breathing.respiratory_rate = Some(70);
    snapshot.breathing.spo2 = Some(80);
    snapshot.breathing.work_of_breathing = Some(WorkOfBreathing::Severe);
    snapshot.breathing.wheeze = Some(true);
    snapshot.breathing.crackles = Some(true);
    snapshot.breathing.breath_sounds = Some(BreathSounds::AbsentLeft);
    snapshot.breathing.tracheal_deviation = Some(true);
    snapshot.circulation.heart_rate = Some(220);
    snapshot.circulation.systolic_bp = Some(50);
    snapshot.circulation.jugular_venous_pressure = Some(JugularVenousPressure::Elevated);
    snapshot.circulation.capillary_refill = Some(CapillaryRefill::Delayed);
    snapshot.circulation.hepatomegaly = Some(true);
    snapshot.circulation.peripheral_edema = Some(true);
    snapshot.circulation.murmur = Some(true);
    snapshot.circulation.muffled_heart_sounds = Some(true);
    snapshot.circulation.pulsus_paradoxus = Some(true);
    snapshot.circulation.active_bleeding = Some(true);
    snapshot.circulation.gi_losses = Some(true);
    snapshot.circulation.shock_suspected = Some(true);
    snapshot.disability.avpu = Some(Avpu::Pain);
    snapshot.disability.gcs = Some(6);
    snapshot.disability.seizure_activity = Some(true);
    snapshot.disability.glucose_mg_dl = Some(40.0);
    snapshot.exposure.temperature_c = Some(39.5);
    snapshot.exposure.skin.rash = Some(RashType::Purpuric);
    snapshot.exposure.skin.temperature = Some(SkinTemperature::Mottled);
    snapshot.exposure.burns = Some(true);
    snapshot.exposure.allergen_exposure = Some(true);
    snapshot.exposure.toxic_ingestion_suspected = Some(true);
    snapshot.exposure.trauma.head_injury = Some(true);
    snapshot.exposure.trauma.spinal_injury_suspected = Some(true);
    snapshot.exposure.trauma.chest_trauma = Some(true);
    snapshot.exposure.trauma.high_energy_mechanism = Some(true);
    snapshot
}

/// Bedside presentations spanning every age group, used for invariant sweeps.
pub(super) fn presentations() -> Vec<SurveySnapshot> {
    let mut pregnant = everything_positive(17.0);
    pregnant.pregnant_or_postpartum = true;
    vec![
        SurveySnapshot::default(),
        well_child(),
        cardiogenic_child(),
        febrile_neonate(),
        anaphylactic_child(),
        bleeding_toddler(),
        everything_positive(0.02),
        everything_positive(0.5),
        everything_positive(7.0),
        everything_positive(15.0),
        everything_positive(40.0),
        everything_positive(80.0),
        pregnant,
    ]
}
