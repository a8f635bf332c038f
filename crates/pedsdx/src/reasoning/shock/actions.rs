use super::super::survey::SurveySnapshot;
use super::ShockType;

/// Ceiling for weight-based dosing; adult doses apply above it.
const ADULT_DOSING_WEIGHT_KG: f64 = 70.0;

/// Age-based weight estimate used when no measured weight is recorded.
pub fn estimated_weight_kg(age_years: f64) -> f64 {
    let age = age_years.max(0.0);
    if age < 1.0 {
        0.5 * (age * 12.0) + 4.0
    } else if age < 6.0 {
        2.0 * age + 8.0
    } else if age < 13.0 {
        3.0 * age + 7.0
    } else {
        50.0
    }
}

/// Measured weight when present, otherwise the age estimate; capped at the adult dosing weight.
pub fn dosing_weight_kg(snapshot: &SurveySnapshot) -> f64 {
    snapshot
        .weight_kg
        .filter(|weight| weight.is_finite() && *weight > 0.0)
        .unwrap_or_else(|| estimated_weight_kg(snapshot.age_years))
        .min(ADULT_DOSING_WEIGHT_KG)
}

fn per_kg(weight_kg: f64, dose_per_kg: f64, max: f64) -> f64 {
    (weight_kg * dose_per_kg).min(max)
}

/// Ordered first-minutes script for a shock type.
pub(super) fn immediate_actions(shock_type: ShockType, weight_kg: f64) -> Vec<String> {
    match shock_type {
        ShockType::Hypovolemic => vec![
            "High-flow oxygen and two large-bore IV/IO lines".to_string(),
            format!(
                "Isotonic crystalloid bolus {:.0} mL (20 mL/kg) over 5-10 minutes, reassess after each",
                weight_kg * 20.0
            ),
            format!(
                "If haemorrhagic: packed red cells {:.0} mL (10 mL/kg) and activate massive transfusion",
                weight_kg * 10.0
            ),
            format!(
                "Tranexamic acid {:.0} mg IV (15 mg/kg, max 1 g) within 3 hours of injury",
                per_kg(weight_kg, 15.0, 1000.0)
            ),
            "Direct pressure and surgical source control".to_string(),
        ],
        ShockType::Cardiogenic => vec![
            "Do not give fluid boluses; reassess liver edge and lung bases".to_string(),
            format!(
                "Adrenaline infusion 0.05-0.3 microgram/kg/min ({:.1}-{:.1} microgram/min)",
                weight_kg * 0.05,
                weight_kg * 0.3
            ),
            format!(
                "Furosemide {:.1} mg IV (1 mg/kg, max 40 mg) if pulmonary oedema",
                per_kg(weight_kg, 1.0, 40.0)
            ),
            "Urgent echocardiogram and 12-lead ECG".to_string(),
            "Early PICU and cardiology involvement; prepare for inotrope-supported intubation"
                .to_string(),
        ],
        ShockType::Obstructive => vec![
            "Identify and relieve the obstruction before anything else".to_string(),
            "Tension pneumothorax: needle decompression then chest drain".to_string(),
            "Tamponade: ultrasound-guided pericardiocentesis".to_string(),
            format!(
                "Cautious crystalloid {:.0} mL (5-10 mL/kg) only to support preload while relieving obstruction",
                weight_kg * 5.0
            ),
        ],
        ShockType::DistributiveSeptic => vec![
            "High-flow oxygen, IV/IO access, blood culture and lactate".to_string(),
            format!(
                "Isotonic crystalloid bolus {:.0} mL (20 mL/kg), reassess for hepatomegaly and crackles after each",
                weight_kg * 20.0
            ),
            format!(
                "Ceftriaxone {:.0} mg IV (80 mg/kg, max 4 g) within the first hour",
                per_kg(weight_kg, 80.0, 4000.0)
            ),
            format!(
                "Adrenaline or noradrenaline infusion from 0.05 microgram/kg/min ({:.1} microgram/min) if fluid refractory after 40-60 mL/kg",
                weight_kg * 0.05
            ),
            "Check glucose and ionised calcium".to_string(),
        ],
        ShockType::DistributiveAnaphylactic => vec![
            format!(
                "Adrenaline {:.2} mg IM anterolateral thigh (0.01 mg/kg of 1 mg/mL, max 0.5 mg), repeat every 5 minutes",
                per_kg(weight_kg, 0.01, 0.5)
            ),
            "Remove the trigger, lie flat with legs raised, high-flow oxygen".to_string(),
            format!(
                "Isotonic crystalloid bolus {:.0} mL (20 mL/kg)",
                weight_kg * 20.0
            ),
            "Adrenaline infusion if two IM doses fail".to_string(),
        ],
        ShockType::Neurogenic => vec![
            "Full spinal immobilisation".to_string(),
            format!(
                "Cautious crystalloid {:.0} mL (10 mL/kg) with reassessment",
                weight_kg * 10.0
            ),
            format!(
                "Atropine {:.2} mg IV (0.02 mg/kg, max 0.5 mg) for symptomatic bradycardia",
                per_kg(weight_kg, 0.02, 0.5)
            ),
            format!(
                "Noradrenaline infusion from 0.05 microgram/kg/min ({:.1} microgram/min) for persistent hypotension",
                weight_kg * 0.05
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_estimate_bands() {
        assert_eq!(estimated_weight_kg(0.5), 7.0);
        assert_eq!(estimated_weight_kg(3.0), 14.0);
        assert_eq!(estimated_weight_kg(8.0), 31.0);
        assert_eq!(estimated_weight_kg(15.0), 50.0);
    }

    #[test]
    fn measured_weight_wins_and_is_capped() {
        let mut snapshot = SurveySnapshot {
            age_years: 4.0,
            weight_kg: Some(18.5),
            ..SurveySnapshot::default()
        };
        assert_eq!(dosing_weight_kg(&snapshot), 18.5);

        snapshot.weight_kg = Some(95.0);
        assert_eq!(dosing_weight_kg(&snapshot), 70.0);

        snapshot.weight_kg = Some(-1.0);
        assert_eq!(dosing_weight_kg(&snapshot), 16.0);
    }

    #[test]
    fn anaphylaxis_adrenaline_dose_is_capped() {
        let actions = immediate_actions(ShockType::DistributiveAnaphylactic, 70.0);
        assert!(actions[0].starts_with("Adrenaline 0.50 mg IM"));

        let actions = immediate_actions(ShockType::DistributiveAnaphylactic, 12.0);
        assert!(actions[0].starts_with("Adrenaline 0.12 mg IM"));
    }

    #[test]
    fn cardiogenic_script_opens_with_fluid_warning() {
        let actions = immediate_actions(ShockType::Cardiogenic, 20.0);
        assert!(actions[0].contains("Do not give fluid boluses"));
        assert!(actions.iter().any(|action| action.contains("Furosemide 20.0 mg")));
    }
}
