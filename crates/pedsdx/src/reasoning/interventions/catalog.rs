use super::super::differential::ConditionId;
use super::domain::{
    CarePlan, Intervention, InterventionTier, RequiredTest, RiskIfWrong, TestPriority, TimeWindow,
};
use std::sync::OnceLock;

use InterventionTier::{Confirmatory, Immediate, Urgent};
use RiskIfWrong::{High, Low, Moderate};
use TestPriority::{Routine, Stat};
use TimeWindow::{Hours, Minutes};

/// Authored care plans keyed by the conditions they treat, with a general resuscitation plan for
/// conditions that have none of their own.
#[derive(Debug)]
pub struct CarePlanCatalog {
    plans: Vec<CarePlan>,
    fallback: CarePlan,
}

impl CarePlanCatalog {
    pub fn standard() -> Self {
        Self {
            plans: standard_plans(),
            fallback: general_resuscitation(),
        }
    }

    pub fn shared() -> &'static Self {
        static CATALOG: OnceLock<CarePlanCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::standard)
    }

    pub fn plan_for(&self, condition: ConditionId) -> &CarePlan {
        self.plans
            .iter()
            .find(|plan| plan.conditions.contains(&condition))
            .unwrap_or(&self.fallback)
    }

    pub fn plans(&self) -> &[CarePlan] {
        &self.plans
    }

    pub fn fallback(&self) -> &CarePlan {
        &self.fallback
    }
}

fn glucose() -> RequiredTest {
    RequiredTest::new("Blood glucose", Stat).with_threshold(60.0, "Treat below 60 mg/dL")
}

fn blood_gas() -> RequiredTest {
    RequiredTest::new("Blood gas", Stat)
}

fn oxygen() -> Intervention {
    Intervention::new(
        "high_flow_oxygen",
        "High-flow oxygen",
        "Hypoxia or shock",
        Immediate,
        Minutes,
        Low,
    )
    .dosing("15 L/min via non-rebreather mask")
    .monitoring("Continuous SpO2")
}

fn vascular_access() -> Intervention {
    Intervention::new(
        "vascular_access",
        "IV/IO access",
        "Any critically unwell child",
        Immediate,
        Minutes,
        Low,
    )
    .monitoring("Intraosseous if two IV attempts fail or 90 seconds elapse")
}

fn standard_plans() -> Vec<CarePlan> {
    vec![
        CarePlan {
            name: "Sepsis and septic shock".to_string(),
            conditions: vec![ConditionId::Sepsis, ConditionId::SepticShock],
            required_tests: vec![
                glucose(),
                RequiredTest::new("Blood culture", Stat),
                RequiredTest::new("Lactate", Stat)
                    .with_threshold(4.0, "Above 4 mmol/L marks septic shock"),
                RequiredTest::new("Full blood count", TestPriority::Urgent),
                RequiredTest::new("C-reactive protein", Routine),
            ],
            interventions: vec![
                oxygen(),
                vascular_access(),
                Intervention::new(
                    "sepsis_fluid_bolus",
                    "Crystalloid bolus",
                    "Poor perfusion",
                    Immediate,
                    Minutes,
                    Moderate,
                )
                .dosing("10-20 mL/kg isotonic crystalloid over 5-10 minutes")
                .contraindications("New hepatomegaly or crackles after a previous bolus")
                .monitoring("Reassess perfusion, liver edge, and lung bases after each bolus"),
                Intervention::new(
                    "sepsis_antibiotics",
                    "Broad-spectrum antibiotics",
                    "Suspected bacterial sepsis",
                    Urgent,
                    Minutes,
                    Moderate,
                )
                .dosing("Ceftriaxone 80 mg/kg IV (max 4 g) within the first hour")
                .requires(RequiredTest::new("Blood culture", Stat)),
                Intervention::new(
                    "sepsis_vasoactive_infusion",
                    "Adrenaline or noradrenaline infusion",
                    "Fluid-refractory shock after 40-60 mL/kg",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .dosing("Start 0.05 microgram/kg/min, titrate to perfusion")
                .monitoring("Arterial line when available")
                .requires(
                    RequiredTest::new("Lactate", Stat)
                        .with_threshold(4.0, "Above 4 mmol/L marks septic shock"),
                ),
                Intervention::new(
                    "sepsis_hydrocortisone",
                    "Stress-dose hydrocortisone",
                    "Catecholamine-resistant shock",
                    Confirmatory,
                    Hours,
                    Moderate,
                )
                .dosing("2 mg/kg IV (max 100 mg)")
                .requires(RequiredTest::new("Random cortisol", Routine)),
            ],
        },
        CarePlan {
            name: "Anaphylaxis".to_string(),
            conditions: vec![ConditionId::Anaphylaxis, ConditionId::AnaphylacticShock],
            required_tests: vec![RequiredTest::new("Mast cell tryptase", TestPriority::Urgent)],
            interventions: vec![
                Intervention::new(
                    "im_adrenaline",
                    "Intramuscular adrenaline",
                    "Airway, breathing, or circulation involvement after allergen exposure",
                    Immediate,
                    Minutes,
                    Low,
                )
                .dosing("0.01 mg/kg of 1 mg/mL IM (max 0.5 mg), repeat every 5 minutes"),
                oxygen(),
                Intervention::new(
                    "anaphylaxis_fluid_bolus",
                    "Crystalloid bolus",
                    "Hypotension or poor perfusion",
                    Urgent,
                    Minutes,
                    Moderate,
                )
                .dosing("20 mL/kg isotonic crystalloid"),
                Intervention::new(
                    "nebulised_salbutamol",
                    "Nebulised salbutamol",
                    "Persistent bronchospasm after adrenaline",
                    Urgent,
                    Minutes,
                    Low,
                )
                .dosing("2.5 mg under five years, 5 mg from five years"),
                Intervention::new(
                    "adrenaline_infusion",
                    "Adrenaline infusion",
                    "Refractory anaphylaxis after two IM doses",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .dosing("0.1 microgram/kg/min, titrate")
                .monitoring("Continuous ECG and blood pressure")
                .requires(blood_gas()),
            ],
        },
        CarePlan {
            name: "Acute severe asthma".to_string(),
            conditions: vec![ConditionId::StatusAsthmaticus],
            required_tests: vec![
                blood_gas().with_threshold(45.0, "Normal or rising pCO2 (mmHg) is pre-arrest"),
                RequiredTest::new("Chest radiograph", TestPriority::Urgent),
            ],
            interventions: vec![
                oxygen(),
                Intervention::new(
                    "salbutamol_burst",
                    "Back-to-back salbutamol",
                    "Wheeze with increased work of breathing",
                    Immediate,
                    Minutes,
                    Low,
                )
                .dosing("2.5-5 mg nebulised every 20 minutes for three doses"),
                Intervention::new(
                    "ipratropium",
                    "Ipratropium bromide",
                    "Severe or life-threatening asthma",
                    Immediate,
                    Minutes,
                    Low,
                )
                .dosing("250 microgram nebulised with each of the first three salbutamol doses"),
                Intervention::new(
                    "systemic_steroid",
                    "Systemic corticosteroid",
                    "Any acute severe asthma",
                    Urgent,
                    Hours,
                    Low,
                )
                .dosing("Prednisolone 1-2 mg/kg (max 40 mg) or dexamethasone 0.3 mg/kg"),
                Intervention::new(
                    "iv_magnesium",
                    "IV magnesium sulfate",
                    "Poor response to initial bronchodilators",
                    Urgent,
                    Minutes,
                    Moderate,
                )
                .dosing("40 mg/kg (max 2 g) over 20 minutes")
                .monitoring("Blood pressure every 5 minutes during infusion"),
                Intervention::new(
                    "aminophylline",
                    "IV aminophylline",
                    "Life-threatening asthma unresponsive to maximal therapy",
                    Confirmatory,
                    Hours,
                    High,
                )
                .dosing("5 mg/kg loading dose over 20 minutes, omit if on oral theophylline")
                .requires(RequiredTest::new("Serum potassium", Stat)),
            ],
        },
        CarePlan {
            name: "Diabetic ketoacidosis".to_string(),
            conditions: vec![ConditionId::DiabeticKetoacidosis],
            required_tests: vec![
                glucose(),
                blood_gas().with_threshold(7.3, "Venous pH below 7.3 confirms acidosis"),
                RequiredTest::new("Blood ketones", Stat)
                    .with_threshold(3.0, "Above 3 mmol/L supports DKA"),
                RequiredTest::new("Serum sodium", TestPriority::Urgent),
            ],
            interventions: vec![
                vascular_access(),
                Intervention::new(
                    "dka_cardiac_monitoring",
                    "Cardiac monitoring",
                    "Potassium shifts during treatment",
                    Immediate,
                    Minutes,
                    Low,
                ),
                Intervention::new(
                    "dka_fluid_deficit",
                    "Fluid deficit replacement",
                    "Dehydration with acidosis",
                    Urgent,
                    Hours,
                    Moderate,
                )
                .dosing("10 mL/kg 0.9% saline over 60 minutes only if shocked; deficit over 48 hours")
                .monitoring("Hourly neurological observations for cerebral oedema"),
                Intervention::new(
                    "insulin_infusion",
                    "Insulin infusion",
                    "Confirmed DKA after 1-2 hours of fluids",
                    Confirmatory,
                    Hours,
                    High,
                )
                .dosing("0.05-0.1 units/kg/hour, no bolus")
                .contraindications("Serum potassium below 3.5 mmol/L")
                .requires(
                    RequiredTest::new("Serum potassium", Stat)
                        .with_threshold(3.5, "Hold insulin below 3.5 mmol/L"),
                ),
                Intervention::new(
                    "potassium_replacement",
                    "Potassium in maintenance fluids",
                    "Once urine output confirmed and potassium below 5.5 mmol/L",
                    Confirmatory,
                    Hours,
                    High,
                )
                .dosing("40 mmol/L added to fluids")
                .requires(RequiredTest::new("Serum potassium", Stat)),
            ],
        },
        CarePlan {
            name: "Status epilepticus".to_string(),
            conditions: vec![ConditionId::StatusEpilepticus],
            required_tests: vec![
                glucose(),
                RequiredTest::new("Electrolytes and calcium", TestPriority::Urgent),
                RequiredTest::new("Anti-seizure drug levels", Routine),
            ],
            interventions: vec![
                oxygen(),
                Intervention::new(
                    "first_benzodiazepine",
                    "First benzodiazepine",
                    "Seizure lasting five minutes or more",
                    Immediate,
                    Minutes,
                    Low,
                )
                .dosing("Lorazepam 0.1 mg/kg IV (max 4 mg) or buccal midazolam 0.3 mg/kg (max 10 mg)")
                .monitoring("Respiratory effort and SpO2"),
                Intervention::new(
                    "second_benzodiazepine",
                    "Second benzodiazepine",
                    "Seizure continuing ten minutes after first dose",
                    Urgent,
                    Minutes,
                    Moderate,
                )
                .dosing("Lorazepam 0.1 mg/kg IV (max 4 mg)"),
                Intervention::new(
                    "levetiracetam_load",
                    "Levetiracetam loading dose",
                    "Established status epilepticus",
                    Urgent,
                    Minutes,
                    Low,
                )
                .dosing("40 mg/kg IV over 5 minutes (max 3 g)"),
                Intervention::new(
                    "rapid_sequence_induction",
                    "Rapid sequence induction",
                    "Refractory status after second-line agent",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .monitoring("Continuous EEG where available")
                .requires(blood_gas()),
            ],
        },
        CarePlan {
            name: "Traumatic brain injury".to_string(),
            conditions: vec![ConditionId::TraumaticBrainInjury],
            required_tests: vec![
                RequiredTest::new("CT head", Stat),
                glucose(),
                RequiredTest::new("Coagulation screen", TestPriority::Urgent),
            ],
            interventions: vec![
                Intervention::new(
                    "cervical_spine_protection",
                    "Airway with cervical spine protection",
                    "Head injury with reduced consciousness",
                    Immediate,
                    Minutes,
                    Low,
                ),
                Intervention::new(
                    "neuroprotective_targets",
                    "Neuroprotective targets",
                    "GCS 8 or below",
                    Immediate,
                    Minutes,
                    Low,
                )
                .dosing("Head up 30 degrees, SpO2 above 94%, normocapnia, normothermia"),
                Intervention::new(
                    "neurosurgical_referral",
                    "Neurosurgical referral",
                    "Intracranial injury or deteriorating GCS",
                    Urgent,
                    Minutes,
                    Low,
                ),
                Intervention::new(
                    "hypertonic_saline",
                    "3% hypertonic saline",
                    "Signs of raised intracranial pressure",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .dosing("3-5 mL/kg over 10-20 minutes")
                .requires(RequiredTest::new("CT head", Stat))
                .requires(RequiredTest::new("Serum sodium", Stat)),
            ],
        },
        CarePlan {
            name: "Cardiogenic shock and myocarditis".to_string(),
            conditions: vec![ConditionId::CardiogenicShock, ConditionId::Myocarditis],
            required_tests: vec![
                RequiredTest::new("12-lead ECG", Stat),
                RequiredTest::new("Echocardiogram", Stat),
                blood_gas(),
                RequiredTest::new("Troponin", TestPriority::Urgent),
                RequiredTest::new("BNP", Routine),
            ],
            interventions: vec![
                oxygen(),
                Intervention::new(
                    "withhold_fluid_bolus",
                    "Withhold fluid boluses",
                    "Raised JVP, hepatomegaly, or crackles",
                    Immediate,
                    Minutes,
                    Low,
                )
                .monitoring("Reassess liver edge and lung bases every 15 minutes"),
                Intervention::new(
                    "furosemide",
                    "IV furosemide",
                    "Pulmonary oedema",
                    Confirmatory,
                    Minutes,
                    Moderate,
                )
                .dosing("1 mg/kg IV (max 40 mg)")
                .requires(RequiredTest::new("Chest radiograph", Stat)),
                Intervention::new(
                    "inotrope_infusion",
                    "Inotrope infusion",
                    "Low cardiac output confirmed on echo",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .dosing("Adrenaline 0.05-0.3 microgram/kg/min or milrinone 0.25-0.75 microgram/kg/min")
                .requires(RequiredTest::new("Echocardiogram", Stat)),
                Intervention::new(
                    "prostaglandin_e1",
                    "Prostaglandin E1",
                    "Suspected duct-dependent lesion in a neonate",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .dosing("10-50 nanogram/kg/min")
                .contraindications("Prepare for apnoea")
                .requires(RequiredTest::new("Echocardiogram", Stat)),
            ],
        },
        CarePlan {
            name: "Haemorrhagic and hypovolemic shock".to_string(),
            conditions: vec![
                ConditionId::HypovolemicShock,
                ConditionId::TraumaticHemorrhage,
            ],
            required_tests: vec![
                RequiredTest::new("Crossmatch", Stat),
                RequiredTest::new("Haemoglobin", Stat),
                RequiredTest::new("FAST scan", Stat),
                RequiredTest::new("Coagulation screen", TestPriority::Urgent),
            ],
            interventions: vec![
                Intervention::new(
                    "haemorrhage_control",
                    "Direct pressure and haemorrhage control",
                    "External bleeding",
                    Immediate,
                    Minutes,
                    Low,
                ),
                vascular_access(),
                Intervention::new(
                    "hypovolemia_fluid_bolus",
                    "Crystalloid bolus",
                    "Hypovolemia without ongoing haemorrhage",
                    Immediate,
                    Minutes,
                    Moderate,
                )
                .dosing("20 mL/kg isotonic crystalloid; switch to blood after 20 mL/kg in trauma"),
                Intervention::new(
                    "tranexamic_acid",
                    "Tranexamic acid",
                    "Significant haemorrhage within 3 hours of injury",
                    Urgent,
                    Hours,
                    Moderate,
                )
                .dosing("15 mg/kg IV (max 1 g) over 10 minutes"),
                Intervention::new(
                    "crossmatched_blood",
                    "Crossmatched blood products",
                    "Ongoing haemorrhage",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .dosing("Packed red cells 10 mL/kg aliquots, 1:1:1 with plasma and platelets")
                .requires(RequiredTest::new("Crossmatch", Stat)),
            ],
        },
        CarePlan {
            name: "Obstructive shock".to_string(),
            conditions: vec![
                ConditionId::ObstructiveShock,
                ConditionId::TensionPneumothorax,
            ],
            required_tests: vec![
                RequiredTest::new("Bedside ultrasound", Stat),
                RequiredTest::new("Chest radiograph", TestPriority::Urgent),
            ],
            interventions: vec![
                oxygen(),
                Intervention::new(
                    "needle_decompression",
                    "Needle decompression",
                    "Clinical tension pneumothorax; do not wait for imaging",
                    Immediate,
                    Minutes,
                    Moderate,
                )
                .dosing("Second intercostal space mid-clavicular line or fourth/fifth in the mid-axillary line"),
                Intervention::new(
                    "chest_drain",
                    "Chest drain",
                    "After needle decompression",
                    Urgent,
                    Minutes,
                    Moderate,
                ),
                Intervention::new(
                    "pericardiocentesis",
                    "Pericardiocentesis",
                    "Tamponade confirmed on ultrasound",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .requires(RequiredTest::new("Bedside ultrasound", Stat)),
            ],
        },
        CarePlan {
            name: "Neurogenic shock".to_string(),
            conditions: vec![ConditionId::NeurogenicShock],
            required_tests: vec![
                RequiredTest::new("FAST scan", Stat),
                RequiredTest::new("CT spine", TestPriority::Urgent),
            ],
            interventions: vec![
                Intervention::new(
                    "spinal_immobilisation",
                    "Spinal immobilisation",
                    "Suspected spinal cord injury",
                    Immediate,
                    Minutes,
                    Low,
                ),
                Intervention::new(
                    "neurogenic_cautious_fluids",
                    "Cautious crystalloid",
                    "Hypotension",
                    Urgent,
                    Minutes,
                    Moderate,
                )
                .dosing("10 mL/kg with reassessment"),
                Intervention::new(
                    "atropine",
                    "Atropine",
                    "Symptomatic bradycardia",
                    Urgent,
                    Minutes,
                    Low,
                )
                .dosing("0.02 mg/kg IV (max 0.5 mg)"),
                Intervention::new(
                    "noradrenaline_infusion",
                    "Noradrenaline infusion",
                    "Hypotension once haemorrhage is excluded",
                    Confirmatory,
                    Minutes,
                    High,
                )
                .dosing("0.05-0.5 microgram/kg/min")
                .requires(RequiredTest::new("FAST scan", Stat)),
            ],
        },
        CarePlan {
            name: "Upper airway obstruction".to_string(),
            conditions: vec![ConditionId::UpperAirwayObstruction],
            required_tests: vec![RequiredTest::new("Airway imaging", Routine)],
            interventions: vec![
                Intervention::new(
                    "position_of_comfort",
                    "Position of comfort",
                    "Stridor in a conscious child",
                    Immediate,
                    Minutes,
                    Low,
                )
                .contraindications("Do not examine the throat or lie the child flat"),
                Intervention::new(
                    "foreign_body_manoeuvres",
                    "Choking manoeuvres",
                    "Witnessed foreign body with ineffective cough",
                    Immediate,
                    Minutes,
                    Low,
                )
                .dosing("Five back blows then five chest (infant) or abdominal (child) thrusts"),
                Intervention::new(
                    "nebulised_adrenaline",
                    "Nebulised adrenaline",
                    "Severe croup",
                    Urgent,
                    Minutes,
                    Low,
                )
                .dosing("0.5 mL/kg of 1 mg/mL (max 5 mL)"),
                Intervention::new(
                    "dexamethasone",
                    "Dexamethasone",
                    "Croup of any severity",
                    Urgent,
                    Hours,
                    Low,
                )
                .dosing("0.15-0.6 mg/kg oral"),
                Intervention::new(
                    "definitive_airway",
                    "Definitive airway by senior anaesthetist",
                    "Impending complete obstruction",
                    Confirmatory,
                    Minutes,
                    High,
                ),
            ],
        },
        CarePlan {
            name: "Hypoglycaemia".to_string(),
            conditions: vec![ConditionId::Hypoglycemia],
            required_tests: vec![
                glucose(),
                RequiredTest::new("Hypoglycaemia screen", Stat),
            ],
            interventions: vec![
                Intervention::new(
                    "dextrose_bolus",
                    "Dextrose bolus",
                    "Glucose below 60 mg/dL",
                    Immediate,
                    Minutes,
                    Low,
                )
                .dosing("2 mL/kg of 10% dextrose"),
                Intervention::new(
                    "glucagon",
                    "IM glucagon",
                    "No vascular access",
                    Urgent,
                    Minutes,
                    Low,
                )
                .dosing("0.5 mg under 25 kg, 1 mg from 25 kg"),
                Intervention::new(
                    "dextrose_infusion",
                    "Dextrose-containing maintenance",
                    "Recurrent hypoglycaemia",
                    Urgent,
                    Hours,
                    Low,
                ),
                Intervention::new(
                    "hypoglycaemia_hydrocortisone",
                    "Hydrocortisone",
                    "Suspected adrenal insufficiency",
                    Confirmatory,
                    Hours,
                    Moderate,
                )
                .dosing("2 mg/kg IV (max 100 mg)")
                .requires(RequiredTest::new("Hypoglycaemia screen", Stat)),
            ],
        },
        CarePlan {
            name: "Toxic ingestion".to_string(),
            conditions: vec![ConditionId::ToxicIngestion],
            required_tests: vec![
                glucose(),
                RequiredTest::new("12-lead ECG", Stat),
                RequiredTest::new("Paracetamol level", TestPriority::Urgent),
                RequiredTest::new("Salicylate level", TestPriority::Urgent),
            ],
            interventions: vec![
                oxygen(),
                Intervention::new(
                    "naloxone",
                    "Naloxone",
                    "Opioid toxidrome with respiratory depression",
                    Urgent,
                    Minutes,
                    Low,
                )
                .dosing("0.1 mg/kg IV (max 2 mg)"),
                Intervention::new(
                    "activated_charcoal",
                    "Activated charcoal",
                    "Adsorbable toxin within one hour and a protected airway",
                    Confirmatory,
                    Hours,
                    High,
                )
                .dosing("1 g/kg (max 50 g)")
                .contraindications("Unprotected airway, caustics, hydrocarbons"),
                Intervention::new(
                    "acetylcysteine",
                    "Acetylcysteine",
                    "Paracetamol level above treatment line",
                    Confirmatory,
                    Hours,
                    Moderate,
                )
                .requires(RequiredTest::new("Paracetamol level", Stat)),
            ],
        },
        CarePlan {
            name: "Bronchiolitis".to_string(),
            conditions: vec![ConditionId::Bronchiolitis],
            required_tests: vec![RequiredTest::new("Respiratory viral swab", Routine)],
            interventions: vec![
                Intervention::new(
                    "supplemental_oxygen",
                    "Supplemental oxygen",
                    "SpO2 persistently below 90%",
                    Immediate,
                    Minutes,
                    Low,
                ),
                Intervention::new(
                    "nasal_suction",
                    "Nasal suction",
                    "Secretions impairing feeding or breathing",
                    Immediate,
                    Minutes,
                    Low,
                ),
                Intervention::new(
                    "nasogastric_feeds",
                    "Nasogastric feeds",
                    "Oral intake below half of usual",
                    Urgent,
                    Hours,
                    Low,
                ),
                Intervention::new(
                    "high_flow_nasal_cannula",
                    "High-flow nasal cannula",
                    "Persistent hypoxia or increased work of breathing",
                    Urgent,
                    Hours,
                    Low,
                ),
                Intervention::new(
                    "cpap",
                    "CPAP",
                    "Impending respiratory failure",
                    Confirmatory,
                    Hours,
                    Moderate,
                )
                .requires(blood_gas()),
            ],
        },
    ]
}

fn general_resuscitation() -> CarePlan {
    CarePlan {
        name: "General resuscitation".to_string(),
        conditions: Vec::new(),
        required_tests: vec![glucose(), blood_gas()],
        interventions: vec![
            oxygen(),
            vascular_access(),
            Intervention::new(
                "continuous_monitoring",
                "Continuous cardiorespiratory monitoring",
                "Any critically unwell child",
                Immediate,
                Minutes,
                Low,
            ),
            Intervention::new(
                "senior_review",
                "Senior clinician review",
                "No working diagnosis established",
                Urgent,
                Minutes,
                Low,
            ),
        ],
    }
}
