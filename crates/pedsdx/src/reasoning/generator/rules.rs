use super::super::differential::{ConditionId, DifferentialCategory};
use super::super::survey::{
    present, AirwayPatency, PupilFindings, RashType, SurveySnapshot, WorkOfBreathing,
};
use super::Tally;
use std::sync::OnceLock;

/// Authored scorer for one condition. Weights are fixed per finding and never learned.
pub(crate) struct ConditionRule {
    pub id: ConditionId,
    pub diagnosis: &'static str,
    pub category: DifferentialCategory,
    pub next_questions: &'static [&'static str],
    pub score: fn(&SurveySnapshot, &mut Tally),
}

pub(crate) fn condition_rules() -> &'static [ConditionRule] {
    static RULES: OnceLock<Vec<ConditionRule>> = OnceLock::new();
    RULES.get_or_init(standard_rules)
}

fn standard_rules() -> Vec<ConditionRule> {
    vec![
        ConditionRule {
            id: ConditionId::Sepsis,
            diagnosis: "Sepsis",
            category: DifferentialCategory::Critical,
            next_questions: &[
                "Is there an obvious source (urine, chest, skin, indwelling line)?",
                "Is the child immunocompromised, asplenic, or recently hospitalised?",
                "When did the fever start and has an antipyretic been given?",
            ],
            score: score_sepsis,
        },
        ConditionRule {
            id: ConditionId::StatusAsthmaticus,
            diagnosis: "Acute severe asthma",
            category: DifferentialCategory::Critical,
            next_questions: &[
                "Known asthma with prior PICU admission or intubation?",
                "How many bronchodilator doses were given before arrival?",
            ],
            score: score_status_asthmaticus,
        },
        ConditionRule {
            id: ConditionId::Bronchiolitis,
            diagnosis: "Bronchiolitis",
            category: DifferentialCategory::Urgent,
            next_questions: &[
                "Coryzal prodrome over the last two to three days?",
                "Feeding less than half of the usual volume?",
                "Any apnoeic episodes witnessed?",
            ],
            score: score_bronchiolitis,
        },
        ConditionRule {
            id: ConditionId::UpperAirwayObstruction,
            diagnosis: "Upper airway obstruction",
            category: DifferentialCategory::ImmediateThreat,
            next_questions: &[
                "Was a choking episode witnessed?",
                "Barking cough with coryza, or toxic appearance with drooling?",
            ],
            score: score_upper_airway_obstruction,
        },
        ConditionRule {
            id: ConditionId::Anaphylaxis,
            diagnosis: "Anaphylaxis",
            category: DifferentialCategory::ImmediateThreat,
            next_questions: &[
                "Exposure to a food, sting, or drug allergen, and how long ago?",
                "Previous anaphylaxis or a prescribed adrenaline auto-injector?",
            ],
            score: score_anaphylaxis,
        },
        ConditionRule {
            id: ConditionId::DiabeticKetoacidosis,
            diagnosis: "Diabetic ketoacidosis",
            category: DifferentialCategory::Critical,
            next_questions: &[
                "Polyuria, polydipsia, or recent weight loss?",
                "Known type 1 diabetes with missed insulin doses?",
            ],
            score: score_diabetic_ketoacidosis,
        },
        ConditionRule {
            id: ConditionId::Hypoglycemia,
            diagnosis: "Hypoglycaemia",
            category: DifferentialCategory::ImmediateThreat,
            next_questions: &[
                "When was the last feed or meal?",
                "Any access to insulin or oral hypoglycaemics at home?",
            ],
            score: score_hypoglycemia,
        },
        ConditionRule {
            id: ConditionId::StatusEpilepticus,
            diagnosis: "Status epilepticus",
            category: DifferentialCategory::ImmediateThreat,
            next_questions: &[
                "How long has the seizure lasted and which benzodiazepines were given?",
                "Known epilepsy, and is there a rescue plan?",
            ],
            score: score_status_epilepticus,
        },
        ConditionRule {
            id: ConditionId::TraumaticBrainInjury,
            diagnosis: "Traumatic brain injury",
            category: DifferentialCategory::Critical,
            next_questions: &[
                "Loss of consciousness or repeated vomiting since the injury?",
                "Is the mechanism consistent with the child's developmental stage?",
            ],
            score: score_traumatic_brain_injury,
        },
        ConditionRule {
            id: ConditionId::TensionPneumothorax,
            diagnosis: "Tension pneumothorax",
            category: DifferentialCategory::ImmediateThreat,
            next_questions: &[
                "Is the child on positive-pressure ventilation or post central line?",
                "What was the chest trauma mechanism?",
            ],
            score: score_tension_pneumothorax,
        },
        ConditionRule {
            id: ConditionId::Myocarditis,
            diagnosis: "Myocarditis / acute heart failure",
            category: DifferentialCategory::Critical,
            next_questions: &[
                "Viral illness in the last two weeks?",
                "Chest pain, syncope, or exercise intolerance?",
            ],
            score: score_myocarditis,
        },
        ConditionRule {
            id: ConditionId::TraumaticHemorrhage,
            diagnosis: "Traumatic haemorrhage",
            category: DifferentialCategory::ImmediateThreat,
            next_questions: &[
                "Estimated external blood loss at scene?",
                "Abdominal or pelvic tenderness on secondary survey?",
            ],
            score: score_traumatic_hemorrhage,
        },
        ConditionRule {
            id: ConditionId::ToxicIngestion,
            diagnosis: "Toxic ingestion",
            category: DifferentialCategory::Critical,
            next_questions: &[
                "Which medicines or chemicals were accessible, and when?",
                "Were any tablets or packaging brought in?",
            ],
            score: score_toxic_ingestion,
        },
    ]
}

fn score_sepsis(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let temperature = snapshot.exposure.temperature_c;
    tally.add(
        snapshot.is_febrile(),
        0.2,
        format!("Fever {:.1} °C", temperature.unwrap_or_default()),
    );
    tally.add(
        snapshot.is_hypothermic(),
        0.2,
        format!("Hypothermia {:.1} °C", temperature.unwrap_or_default()),
    );
    tally.add(snapshot.is_tachycardic(), 0.15, "Tachycardia for age");
    tally.add(snapshot.has_delayed_refill(), 0.15, "Delayed capillary refill");
    tally.add(
        snapshot.has_altered_mental_status(),
        0.15,
        "Altered mental status",
    );
    tally.add(
        snapshot.has_petechial_or_purpuric_rash(),
        0.2,
        "Petechial or purpuric rash",
    );
    tally.add(snapshot.is_hypotensive(), 0.15, "Hypotension for age");
    tally.add(snapshot.is_tachypneic(), 0.05, "Tachypnoea for age");

    tally.missing_if(temperature.is_none(), "Temperature");
    tally.missing_if(snapshot.circulation.heart_rate.is_none(), "Heart rate");
    tally.missing_if(
        snapshot.circulation.capillary_refill.is_none(),
        "Capillary refill",
    );
}

fn score_status_asthmaticus(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let breathing = &snapshot.breathing;
    tally.add(present(breathing.wheeze), 0.3, "Wheeze");
    match breathing.work_of_breathing {
        Some(WorkOfBreathing::Severe) => tally.add(true, 0.3, "Severe work of breathing"),
        Some(WorkOfBreathing::Increased) => tally.add(true, 0.2, "Increased work of breathing"),
        _ => {}
    }
    tally.add(snapshot.is_hypoxic(), 0.2, "SpO2 below 92%");
    tally.add(snapshot.is_tachypneic(), 0.1, "Tachypnoea for age");
    tally.subtract(
        snapshot.age_years < 2.0,
        0.2,
        "Under two years: wheeze more likely viral",
    );

    tally.missing_if(breathing.wheeze.is_none(), "Wheeze");
    tally.missing_if(breathing.spo2.is_none(), "SpO2");
    tally.missing_if(breathing.respiratory_rate.is_none(), "Respiratory rate");
}

fn score_bronchiolitis(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let breathing = &snapshot.breathing;
    tally.add(snapshot.age_years < 2.0, 0.25, "Age under two years");
    tally.add(
        present(breathing.wheeze) || present(breathing.crackles),
        0.2,
        "Wheeze or fine crackles",
    );
    tally.add(snapshot.is_tachypneic(), 0.15, "Tachypnoea for age");
    tally.add(snapshot.is_hypoxic(), 0.15, "SpO2 below 92%");
    tally.add(
        snapshot
            .exposure
            .temperature_c
            .map(|temp| (38.0..39.0).contains(&temp))
            .unwrap_or(false),
        0.05,
        "Low-grade fever",
    );
    tally.subtract(
        snapshot.age_years >= 2.0,
        0.4,
        "Two years or older: bronchiolitis unlikely",
    );

    tally.missing_if(breathing.respiratory_rate.is_none(), "Respiratory rate");
    tally.missing_if(breathing.spo2.is_none(), "SpO2");
}

fn score_upper_airway_obstruction(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let airway = &snapshot.airway;
    match airway.patency {
        Some(AirwayPatency::Obstructed) => tally.add(true, 0.4, "Airway obstructed"),
        Some(AirwayPatency::Maintainable) => {
            tally.add(true, 0.15, "Airway maintainable with adjuncts")
        }
        _ => {}
    }
    tally.add(present(airway.stridor), 0.35, "Stridor");
    tally.add(present(airway.drooling), 0.2, "Drooling");
    tally.add(
        present(airway.foreign_body_suspected),
        0.3,
        "Suspected foreign body",
    );
    tally.add(
        snapshot.has_increased_work_of_breathing(),
        0.1,
        "Increased work of breathing",
    );

    tally.missing_if(airway.patency.is_none(), "Airway patency");
    tally.missing_if(airway.stridor.is_none(), "Stridor");
}

fn score_anaphylaxis(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let exposure = &snapshot.exposure;
    tally.add(
        present(exposure.allergen_exposure),
        0.35,
        "Recent allergen exposure",
    );
    tally.add(
        exposure.skin.rash == Some(RashType::Urticarial),
        0.25,
        "Urticaria",
    );
    tally.add(present(snapshot.airway.angioedema), 0.25, "Angioedema");
    tally.add(present(snapshot.breathing.wheeze), 0.1, "Wheeze");
    tally.add(present(snapshot.airway.stridor), 0.15, "Stridor");
    tally.add(snapshot.is_hypotensive(), 0.15, "Hypotension for age");

    tally.missing_if(exposure.allergen_exposure.is_none(), "Allergen exposure");
    tally.missing_if(exposure.skin.rash.is_none(), "Skin rash");
}

fn score_diabetic_ketoacidosis(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let glucose = snapshot.disability.glucose_mg_dl;
    tally.add(
        glucose.map(|value| value > 250.0).unwrap_or(false),
        0.45,
        format!("Glucose {:.0} mg/dL", glucose.unwrap_or_default()),
    );
    tally.add(snapshot.is_tachypneic(), 0.15, "Deep or rapid breathing");
    tally.add(
        present(snapshot.circulation.gi_losses),
        0.1,
        "Vomiting or GI losses",
    );
    tally.add(snapshot.has_delayed_refill(), 0.1, "Delayed capillary refill");
    tally.add(
        snapshot.has_altered_mental_status(),
        0.1,
        "Altered mental status",
    );

    tally.missing_if(glucose.is_none(), "Blood glucose");
}

fn score_hypoglycemia(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let glucose = snapshot.disability.glucose_mg_dl;
    tally.add(
        glucose.map(|value| value < 60.0).unwrap_or(false),
        0.6,
        format!("Glucose {:.0} mg/dL", glucose.unwrap_or_default()),
    );
    tally.add(
        snapshot.has_altered_mental_status(),
        0.15,
        "Altered mental status",
    );
    tally.add(
        present(snapshot.disability.seizure_activity),
        0.1,
        "Seizure activity",
    );

    tally.missing_if(glucose.is_none(), "Blood glucose");
}

fn score_status_epilepticus(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let disability = &snapshot.disability;
    tally.add(
        present(disability.seizure_activity),
        0.5,
        "Ongoing seizure activity",
    );
    tally.add(
        snapshot.has_altered_mental_status(),
        0.15,
        "Altered mental status",
    );
    tally.add(snapshot.is_hypoxic(), 0.1, "SpO2 below 92%");
    tally.add(snapshot.is_febrile(), 0.05, "Fever");

    tally.missing_if(disability.seizure_activity.is_none(), "Seizure activity");
}

fn score_traumatic_brain_injury(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let trauma = &snapshot.exposure.trauma;
    let disability = &snapshot.disability;
    tally.add(present(trauma.head_injury), 0.35, "Head injury");
    match disability.gcs {
        Some(gcs) if gcs <= 8 => tally.add(true, 0.25, format!("GCS {gcs}")),
        _ => tally.add(
            snapshot.has_altered_mental_status(),
            0.15,
            "Altered mental status",
        ),
    }
    tally.add(
        disability.pupils == Some(PupilFindings::Unequal),
        0.2,
        "Unequal pupils",
    );
    tally.add(
        present(trauma.head_injury) && snapshot.is_bradycardic(),
        0.15,
        "Bradycardia after head injury",
    );
    tally.add(
        present(trauma.high_energy_mechanism),
        0.05,
        "High-energy mechanism",
    );

    tally.missing_if(trauma.head_injury.is_none(), "Head injury history");
    tally.missing_if(disability.gcs.is_none(), "GCS");
    tally.missing_if(disability.pupils.is_none(), "Pupils");
}

fn score_tension_pneumothorax(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let breathing = &snapshot.breathing;
    tally.add(
        snapshot.has_unilateral_breath_sounds(),
        0.3,
        "Unilateral reduced breath sounds",
    );
    tally.add(
        present(breathing.tracheal_deviation),
        0.3,
        "Tracheal deviation",
    );
    tally.add(snapshot.is_hypoxic(), 0.15, "SpO2 below 92%");
    tally.add(
        present(snapshot.exposure.trauma.chest_trauma),
        0.15,
        "Chest trauma",
    );
    tally.add(snapshot.has_elevated_jvp(), 0.1, "Distended neck veins");
    tally.add(snapshot.is_hypotensive(), 0.1, "Hypotension for age");

    tally.missing_if(breathing.breath_sounds.is_none(), "Breath sounds");
}

fn score_myocarditis(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let circulation = &snapshot.circulation;
    tally.add(snapshot.has_elevated_jvp(), 0.2, "Raised jugular venous pressure");
    tally.add(present(circulation.hepatomegaly), 0.2, "Hepatomegaly");
    tally.add(present(snapshot.breathing.crackles), 0.15, "Basal crackles");
    tally.add(present(circulation.murmur), 0.1, "New murmur or gallop");
    tally.add(present(circulation.peripheral_edema), 0.1, "Peripheral oedema");
    tally.add(snapshot.is_tachycardic(), 0.1, "Tachycardia for age");
    tally.add(snapshot.has_cool_skin(), 0.1, "Cool peripheries");
    tally.add(snapshot.is_febrile(), 0.05, "Recent fever");

    tally.missing_if(
        circulation.jugular_venous_pressure.is_none(),
        "Jugular venous pressure",
    );
    tally.missing_if(circulation.hepatomegaly.is_none(), "Liver edge");
}

fn score_traumatic_hemorrhage(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let circulation = &snapshot.circulation;
    tally.add(present(circulation.active_bleeding), 0.4, "Active bleeding");
    tally.add(
        present(snapshot.exposure.trauma.high_energy_mechanism),
        0.15,
        "High-energy mechanism",
    );
    tally.add(snapshot.is_hypotensive(), 0.15, "Hypotension for age");
    tally.add(snapshot.is_tachycardic(), 0.1, "Tachycardia for age");
    tally.add(snapshot.has_delayed_refill(), 0.1, "Delayed capillary refill");
    tally.add(snapshot.has_cool_skin(), 0.05, "Cool or mottled skin");

    tally.missing_if(circulation.active_bleeding.is_none(), "Bleeding history");
    tally.missing_if(circulation.heart_rate.is_none(), "Heart rate");
}

fn score_toxic_ingestion(snapshot: &SurveySnapshot, tally: &mut Tally) {
    let exposure = &snapshot.exposure;
    let pupils = snapshot.disability.pupils;
    tally.add(
        present(exposure.toxic_ingestion_suspected),
        0.45,
        "Suspected ingestion",
    );
    tally.add(
        snapshot.has_altered_mental_status(),
        0.15,
        "Altered mental status",
    );
    tally.add(
        matches!(pupils, Some(PupilFindings::Pinpoint | PupilFindings::Dilated)),
        0.15,
        "Toxidrome pupils",
    );
    tally.add(snapshot.is_bradycardic(), 0.05, "Bradycardia");
    tally.add(
        present(snapshot.disability.seizure_activity),
        0.05,
        "Seizure activity",
    );

    tally.missing_if(
        exposure.toxic_ingestion_suspected.is_none(),
        "Ingestion history",
    );
    tally.missing_if(pupils.is_none(), "Pupils");
}
