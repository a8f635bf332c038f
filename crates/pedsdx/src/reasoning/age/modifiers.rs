use super::super::differential::ConditionId;
use super::{AgeGroup, AgeModifier};

pub(super) fn standard_modifiers() -> Vec<AgeModifier> {
    vec![
        AgeModifier {
            condition: ConditionId::Sepsis,
            age_group: AgeGroup::Neonate,
            probability_adjustment: 0.2,
            presentation_changes: vec![
                "Temperature instability or hypothermia is as common as fever",
                "Poor feeding, lethargy, or apnoea may be the only signs",
            ],
            risk_factor_changes: vec![
                "Group B streptococcus, E. coli, and Listeria predominate",
                "Maternal fever or prolonged rupture of membranes raises risk",
            ],
            intervention_modifications: vec![
                "Use ampicillin plus gentamicin or cefotaxime; avoid ceftriaxone with calcium-containing fluids",
                "Add aciclovir if HSV is possible",
            ],
        },
        AgeModifier {
            condition: ConditionId::Sepsis,
            age_group: AgeGroup::Infant,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Irritability and mottling often precede hypotension"],
            risk_factor_changes: vec!["Incomplete immunisation increases invasive bacterial risk"],
            intervention_modifications: vec!["Lumbar puncture once stable if under three months"],
        },
        AgeModifier {
            condition: ConditionId::Sepsis,
            age_group: AgeGroup::Pregnant,
            probability_adjustment: 0.1,
            presentation_changes: vec![
                "Physiological tachycardia and lower blood pressure mask early sepsis",
            ],
            risk_factor_changes: vec!["Consider chorioamnionitis, endometritis, and pyelonephritis"],
            intervention_modifications: vec![
                "Left lateral tilt during resuscitation beyond 20 weeks",
                "Involve obstetrics early for fetal monitoring",
            ],
        },
        AgeModifier {
            condition: ConditionId::Sepsis,
            age_group: AgeGroup::Elderly,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Fever may be absent; confusion can be the only sign"],
            risk_factor_changes: vec!["Comorbidity and indwelling devices raise risk"],
            intervention_modifications: vec!["Reassess fluid tolerance after each bolus"],
        },
        AgeModifier {
            condition: ConditionId::Bronchiolitis,
            age_group: AgeGroup::Neonate,
            probability_adjustment: 0.15,
            presentation_changes: vec!["Apnoea can precede respiratory distress"],
            risk_factor_changes: vec!["Prematurity and congenital heart disease predict severe disease"],
            intervention_modifications: vec!["Low threshold for admission and apnoea monitoring"],
        },
        AgeModifier {
            condition: ConditionId::Bronchiolitis,
            age_group: AgeGroup::Infant,
            probability_adjustment: 0.2,
            presentation_changes: vec!["Peak incidence between two and six months"],
            risk_factor_changes: vec!["Seasonal RSV circulation"],
            intervention_modifications: vec![
                "Supportive care; bronchodilators and steroids are not routinely indicated",
            ],
        },
        AgeModifier {
            condition: ConditionId::Bronchiolitis,
            age_group: AgeGroup::Adolescent,
            probability_adjustment: -0.3,
            presentation_changes: vec!["Bronchiolitis is not expected beyond infancy"],
            risk_factor_changes: vec![],
            intervention_modifications: vec![],
        },
        AgeModifier {
            condition: ConditionId::StatusAsthmaticus,
            age_group: AgeGroup::Infant,
            probability_adjustment: -0.15,
            presentation_changes: vec!["Infant wheeze is usually viral rather than asthma"],
            risk_factor_changes: vec![],
            intervention_modifications: vec!["Trial of bronchodilator only with clear response monitoring"],
        },
        AgeModifier {
            condition: ConditionId::StatusAsthmaticus,
            age_group: AgeGroup::Adolescent,
            probability_adjustment: 0.05,
            presentation_changes: vec!["Adolescents under-report symptom severity"],
            risk_factor_changes: vec!["Poor adherence and prior near-fatal asthma raise risk"],
            intervention_modifications: vec!["Adult magnesium dosing caps apply above 40 kg"],
        },
        AgeModifier {
            condition: ConditionId::StatusAsthmaticus,
            age_group: AgeGroup::Pregnant,
            probability_adjustment: 0.0,
            presentation_changes: vec!["A normal PaCO2 signals impending respiratory failure in pregnancy"],
            risk_factor_changes: vec![],
            intervention_modifications: vec!["Maintain SpO2 above 95% for fetal oxygenation"],
        },
        AgeModifier {
            condition: ConditionId::UpperAirwayObstruction,
            age_group: AgeGroup::Infant,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Small airway calibre magnifies the effect of oedema"],
            risk_factor_changes: vec!["Congenital airway anomalies and laryngomalacia"],
            intervention_modifications: vec!["Back blows and chest thrusts; no abdominal thrusts under one year"],
        },
        AgeModifier {
            condition: ConditionId::UpperAirwayObstruction,
            age_group: AgeGroup::Child,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Toddlers are the peak age for foreign body aspiration"],
            risk_factor_changes: vec!["Croup peaks between six months and three years"],
            intervention_modifications: vec!["Keep the child calm in a parent's arms; avoid oral examination"],
        },
        AgeModifier {
            condition: ConditionId::Anaphylaxis,
            age_group: AgeGroup::Infant,
            probability_adjustment: 0.0,
            presentation_changes: vec!["Vomiting, irritability, and floppiness may replace reported symptoms"],
            risk_factor_changes: vec!["Cow's milk and egg are the common triggers"],
            intervention_modifications: vec!["Adrenaline 0.01 mg/kg IM; 150 microgram auto-injector only above 7.5 kg"],
        },
        AgeModifier {
            condition: ConditionId::Anaphylaxis,
            age_group: AgeGroup::Pregnant,
            probability_adjustment: 0.0,
            presentation_changes: vec!["Uterine cramping and back pain can be early features"],
            risk_factor_changes: vec!["Peripartum antibiotics and latex are frequent triggers"],
            intervention_modifications: vec!["Left lateral tilt and early obstetric involvement"],
        },
        AgeModifier {
            condition: ConditionId::DiabeticKetoacidosis,
            age_group: AgeGroup::Neonate,
            probability_adjustment: -0.3,
            presentation_changes: vec!["Neonatal diabetes is rare; consider stress hyperglycaemia"],
            risk_factor_changes: vec![],
            intervention_modifications: vec![],
        },
        AgeModifier {
            condition: ConditionId::DiabeticKetoacidosis,
            age_group: AgeGroup::Child,
            probability_adjustment: 0.05,
            presentation_changes: vec!["Young children present later and more acidotic at first diagnosis"],
            risk_factor_changes: vec!["Under five years carries the highest cerebral oedema risk"],
            intervention_modifications: vec!["Replace deficit over 48 hours; no insulin bolus"],
        },
        AgeModifier {
            condition: ConditionId::DiabeticKetoacidosis,
            age_group: AgeGroup::Adolescent,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Recurrent DKA often reflects missed insulin"],
            risk_factor_changes: vec!["Insulin omission, eating disorders, and pump failure"],
            intervention_modifications: vec!["Screen for pregnancy and substance use"],
        },
        AgeModifier {
            condition: ConditionId::Hypoglycemia,
            age_group: AgeGroup::Neonate,
            probability_adjustment: 0.2,
            presentation_changes: vec!["Jitteriness, poor feeding, and apnoea rather than sweating"],
            risk_factor_changes: vec!["Infants of diabetic mothers, prematurity, and growth restriction"],
            intervention_modifications: vec!["2 mL/kg of 10% dextrose; avoid concentrated dextrose"],
        },
        AgeModifier {
            condition: ConditionId::Hypoglycemia,
            age_group: AgeGroup::Infant,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Limited glycogen stores fail after short fasts"],
            risk_factor_changes: vec!["Consider inborn errors of metabolism"],
            intervention_modifications: vec!["Send critical sample before correcting glucose"],
        },
        AgeModifier {
            condition: ConditionId::StatusEpilepticus,
            age_group: AgeGroup::Neonate,
            probability_adjustment: -0.1,
            presentation_changes: vec!["Neonatal seizures are often subtle: lip smacking, cycling, apnoea"],
            risk_factor_changes: vec!["Hypoxic-ischaemic injury, infection, and metabolic causes"],
            intervention_modifications: vec!["Phenobarbital is first line after glucose correction"],
        },
        AgeModifier {
            condition: ConditionId::StatusEpilepticus,
            age_group: AgeGroup::Child,
            probability_adjustment: 0.05,
            presentation_changes: vec!["Prolonged febrile seizures are common between six months and five years"],
            risk_factor_changes: vec!["Fever with a family history of febrile seizures"],
            intervention_modifications: vec!["Buccal midazolam if no IV access"],
        },
        AgeModifier {
            condition: ConditionId::TraumaticBrainInjury,
            age_group: AgeGroup::Infant,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Bulging fontanelle and irritability instead of headache"],
            risk_factor_changes: vec!["Consider non-accidental injury if the history is inconsistent"],
            intervention_modifications: vec!["Lower threshold for CT and skeletal survey"],
        },
        AgeModifier {
            condition: ConditionId::TraumaticBrainInjury,
            age_group: AgeGroup::Elderly,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Delayed deterioration from subdural haematoma"],
            risk_factor_changes: vec!["Anticoagulant and antiplatelet use"],
            intervention_modifications: vec!["Reverse anticoagulation early"],
        },
        AgeModifier {
            condition: ConditionId::Myocarditis,
            age_group: AgeGroup::Neonate,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Duct-dependent lesions mimic myocardial failure in the first weeks"],
            risk_factor_changes: vec!["Enteroviral infection and congenital heart disease"],
            intervention_modifications: vec!["Consider prostaglandin E1 if a duct-dependent lesion is suspected"],
        },
        AgeModifier {
            condition: ConditionId::Myocarditis,
            age_group: AgeGroup::Adolescent,
            probability_adjustment: 0.05,
            presentation_changes: vec!["Chest pain after a viral illness or vaccination"],
            risk_factor_changes: vec!["Stimulant use and cardiomyopathy history"],
            intervention_modifications: vec!["Troponin and ECG before discharge"],
        },
        AgeModifier {
            condition: ConditionId::TraumaticHemorrhage,
            age_group: AgeGroup::Child,
            probability_adjustment: 0.05,
            presentation_changes: vec!["Blood pressure holds until a third of circulating volume is lost"],
            risk_factor_changes: vec!["Solid organ injury from handlebar or seat-belt mechanisms"],
            intervention_modifications: vec!["Blood 10 mL/kg aliquots with early massive transfusion activation"],
        },
        AgeModifier {
            condition: ConditionId::TraumaticHemorrhage,
            age_group: AgeGroup::Pregnant,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Maternal vital signs stay normal despite significant loss"],
            risk_factor_changes: vec!["Placental abruption and uterine injury"],
            intervention_modifications: vec!["Manual uterine displacement; give Rh immunoglobulin when indicated"],
        },
        AgeModifier {
            condition: ConditionId::ToxicIngestion,
            age_group: AgeGroup::Child,
            probability_adjustment: 0.1,
            presentation_changes: vec!["Exploratory ingestions peak between one and four years"],
            risk_factor_changes: vec!["Single tablets of some drugs are lethal to toddlers"],
            intervention_modifications: vec!["Observe for delayed toxicity with modified-release products"],
        },
        AgeModifier {
            condition: ConditionId::ToxicIngestion,
            age_group: AgeGroup::Adolescent,
            probability_adjustment: 0.15,
            presentation_changes: vec!["Ingestions are frequently intentional and mixed"],
            risk_factor_changes: vec!["Self-harm history and access to prescription medicines"],
            intervention_modifications: vec![
                "Routine paracetamol and salicylate levels",
                "Mental health assessment before discharge",
            ],
        },
    ]
}
