use serde::{Deserialize, Serialize};

/// Structured record of a single primary survey. Every nested finding is optional; an unset
/// finding is read as "not present" by every scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySnapshot {
    /// Age in years, fractional for infants (e.g. 0.05 for an 18 day old).
    pub age_years: f64,
    pub weight_kg: Option<f64>,
    pub pregnant_or_postpartum: bool,
    pub airway: AirwayFindings,
    pub breathing: BreathingFindings,
    pub circulation: CirculationFindings,
    pub disability: DisabilityFindings,
    pub exposure: ExposureFindings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirwayFindings {
    pub patency: Option<AirwayPatency>,
    pub stridor: Option<bool>,
    pub drooling: Option<bool>,
    pub foreign_body_suspected: Option<bool>,
    pub angioedema: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirwayPatency {
    Patent,
    Maintainable,
    Obstructed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingFindings {
    pub respiratory_rate: Option<u16>,
    pub spo2: Option<u8>,
    pub work_of_breathing: Option<WorkOfBreathing>,
    pub wheeze: Option<bool>,
    /// Crackles on auscultation, read as pulmonary edema by the shock scorers.
    pub crackles: Option<bool>,
    pub breath_sounds: Option<BreathSounds>,
    pub tracheal_deviation: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOfBreathing {
    Normal,
    Increased,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathSounds {
    Equal,
    DiminishedLeft,
    DiminishedRight,
    AbsentLeft,
    AbsentRight,
}

impl BreathSounds {
    pub const fn is_unilateral(self) -> bool {
        !matches!(self, Self::Equal)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirculationFindings {
    pub heart_rate: Option<u16>,
    pub systolic_bp: Option<u16>,
    pub jugular_venous_pressure: Option<JugularVenousPressure>,
    pub capillary_refill: Option<CapillaryRefill>,
    pub hepatomegaly: Option<bool>,
    pub peripheral_edema: Option<bool>,
    pub murmur: Option<bool>,
    pub muffled_heart_sounds: Option<bool>,
    pub pulsus_paradoxus: Option<bool>,
    pub active_bleeding: Option<bool>,
    /// Vomiting or diarrhoeal losses.
    pub gi_losses: Option<bool>,
    /// Explicit clinician judgement that the patient is in shock.
    pub shock_suspected: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JugularVenousPressure {
    Flat,
    Normal,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapillaryRefill {
    /// Bounding, under one second; the warm-shock picture.
    Flash,
    Normal,
    Delayed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabilityFindings {
    pub avpu: Option<Avpu>,
    pub gcs: Option<u8>,
    pub pupils: Option<PupilFindings>,
    pub seizure_activity: Option<bool>,
    pub glucose_mg_dl: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Avpu {
    Alert,
    Voice,
    Pain,
    Unresponsive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PupilFindings {
    Normal,
    Unequal,
    Pinpoint,
    Dilated,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureFindings {
    pub temperature_c: Option<f64>,
    pub skin: SkinFindings,
    pub burns: Option<bool>,
    pub allergen_exposure: Option<bool>,
    pub toxic_ingestion_suspected: Option<bool>,
    pub trauma: TraumaHistory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinFindings {
    pub temperature: Option<SkinTemperature>,
    pub rash: Option<RashType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTemperature {
    Warm,
    Cool,
    Mottled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RashType {
    None,
    Urticarial,
    Petechial,
    Purpuric,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraumaHistory {
    pub head_injury: Option<bool>,
    pub spinal_injury_suspected: Option<bool>,
    pub chest_trauma: Option<bool>,
    pub high_energy_mechanism: Option<bool>,
}

/// Reads `Some(true)` as present; `None` and `Some(false)` are both absent.
pub(crate) fn present(finding: Option<bool>) -> bool {
    finding == Some(true)
}

/// Reads `Some(false)` as an explicitly recorded negative.
pub(crate) fn recorded_absent(finding: Option<bool>) -> bool {
    finding == Some(false)
}

impl SurveySnapshot {
    pub fn is_febrile(&self) -> bool {
        self.exposure
            .temperature_c
            .map(|temp| temp >= 38.0)
            .unwrap_or(false)
    }

    pub fn is_hypothermic(&self) -> bool {
        self.exposure
            .temperature_c
            .map(|temp| temp < 36.0)
            .unwrap_or(false)
    }

    pub fn is_tachycardic(&self) -> bool {
        let limit = if self.age_years < 1.0 {
            180
        } else if self.age_years < 12.0 {
            140
        } else {
            100
        };
        self.circulation
            .heart_rate
            .map(|rate| rate > limit)
            .unwrap_or(false)
    }

    pub fn is_bradycardic(&self) -> bool {
        let limit = if self.age_years < 1.0 { 100 } else { 60 };
        self.circulation
            .heart_rate
            .map(|rate| rate < limit)
            .unwrap_or(false)
    }

    pub fn is_tachypneic(&self) -> bool {
        let limit = if self.age_years < 1.0 {
            60
        } else if self.age_years < 12.0 {
            40
        } else {
            24
        };
        self.breathing
            .respiratory_rate
            .map(|rate| rate > limit)
            .unwrap_or(false)
    }

    /// Systolic pressure below 70 + 2 × age (years), capped at 90 mmHg from age ten.
    pub fn is_hypotensive(&self) -> bool {
        let floor = (70.0 + 2.0 * self.age_years.max(0.0)).min(90.0);
        self.circulation
            .systolic_bp
            .map(|sbp| f64::from(sbp) < floor)
            .unwrap_or(false)
    }

    pub fn is_hypoxic(&self) -> bool {
        self.breathing.spo2.map(|sat| sat < 92).unwrap_or(false)
    }

    pub fn has_altered_mental_status(&self) -> bool {
        let avpu_altered = matches!(
            self.disability.avpu,
            Some(Avpu::Voice | Avpu::Pain | Avpu::Unresponsive)
        );
        let gcs_altered = self.disability.gcs.map(|gcs| gcs < 15).unwrap_or(false);
        avpu_altered || gcs_altered
    }

    pub fn has_increased_work_of_breathing(&self) -> bool {
        matches!(
            self.breathing.work_of_breathing,
            Some(WorkOfBreathing::Increased | WorkOfBreathing::Severe)
        )
    }

    pub fn has_delayed_refill(&self) -> bool {
        self.circulation.capillary_refill == Some(CapillaryRefill::Delayed)
    }

    /// Delayed or flash refill. Only a normal or unrecorded refill reads as adequate perfusion.
    pub fn has_abnormal_refill(&self) -> bool {
        matches!(
            self.circulation.capillary_refill,
            Some(CapillaryRefill::Delayed | CapillaryRefill::Flash)
        )
    }

    /// Cool or mottled skin; an unrecorded skin temperature reads as warm.
    pub fn has_cool_skin(&self) -> bool {
        matches!(
            self.exposure.skin.temperature,
            Some(SkinTemperature::Cool | SkinTemperature::Mottled)
        )
    }

    pub fn has_elevated_jvp(&self) -> bool {
        self.circulation.jugular_venous_pressure == Some(JugularVenousPressure::Elevated)
    }

    pub fn has_petechial_or_purpuric_rash(&self) -> bool {
        matches!(
            self.exposure.skin.rash,
            Some(RashType::Petechial | RashType::Purpuric)
        )
    }

    pub fn has_unilateral_breath_sounds(&self) -> bool {
        self.breathing
            .breath_sounds
            .map(BreathSounds::is_unilateral)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_deserializes_to_blank_snapshot() {
        let snapshot: SurveySnapshot = serde_json::from_str("{}").expect("blank snapshot");
        assert_eq!(snapshot, SurveySnapshot::default());
        assert!(!snapshot.is_tachycardic());
        assert!(!snapshot.has_altered_mental_status());
    }

    #[test]
    fn partial_nested_findings_leave_siblings_unset() {
        let snapshot: SurveySnapshot = serde_json::from_str(
            r#"{"age_years": 4.0, "circulation": {"jugular_venous_pressure": "elevated"}}"#,
        )
        .expect("partial snapshot");
        assert!(snapshot.has_elevated_jvp());
        assert_eq!(snapshot.circulation.heart_rate, None);
        assert_eq!(snapshot.exposure.skin.temperature, None);
    }

    #[test]
    fn hypotension_floor_tracks_age_until_ten() {
        let mut snapshot = SurveySnapshot {
            age_years: 2.0,
            ..SurveySnapshot::default()
        };
        snapshot.circulation.systolic_bp = Some(73);
        assert!(snapshot.is_hypotensive());

        snapshot.age_years = 15.0;
        snapshot.circulation.systolic_bp = Some(89);
        assert!(snapshot.is_hypotensive());
        snapshot.circulation.systolic_bp = Some(90);
        assert!(!snapshot.is_hypotensive());
    }

    #[test]
    fn heart_rate_limits_depend_on_age() {
        let mut snapshot = SurveySnapshot {
            age_years: 0.5,
            ..SurveySnapshot::default()
        };
        snapshot.circulation.heart_rate = Some(170);
        assert!(!snapshot.is_tachycardic());
        snapshot.age_years = 8.0;
        assert!(snapshot.is_tachycardic());
    }
}
