//! Shock etiology classification.
//!
//! Fluid therapy points in opposite directions across shock types: boluses save the
//! hypovolemic or septic child and worsen the cardiogenic one. Each etiology is scored
//! independently and carries a fixed fluid policy that no score can override.

mod actions;
mod scoring;

pub use actions::{dosing_weight_kg, estimated_weight_kg};

use super::differential::{clamp_probability, ConditionId, Differential, DifferentialCategory};
use super::survey::SurveySnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const SHOCK_CEILING: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShockType {
    Hypovolemic,
    Cardiogenic,
    Obstructive,
    DistributiveSeptic,
    DistributiveAnaphylactic,
    Neurogenic,
}

impl ShockType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Hypovolemic,
            Self::Cardiogenic,
            Self::Obstructive,
            Self::DistributiveSeptic,
            Self::DistributiveAnaphylactic,
            Self::Neurogenic,
        ]
    }

    /// Fixed per type; cardiogenic and obstructive never resolve to a bolus.
    pub const fn fluid_recommendation(self) -> FluidRecommendation {
        match self {
            Self::Hypovolemic | Self::DistributiveSeptic | Self::DistributiveAnaphylactic => {
                FluidRecommendation::Bolus
            }
            Self::Cardiogenic => FluidRecommendation::Avoid,
            Self::Obstructive | Self::Neurogenic => FluidRecommendation::Cautious,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hypovolemic => "Hypovolemic shock",
            Self::Cardiogenic => "Cardiogenic shock",
            Self::Obstructive => "Obstructive shock",
            Self::DistributiveSeptic => "Septic shock",
            Self::DistributiveAnaphylactic => "Anaphylactic shock",
            Self::Neurogenic => "Neurogenic shock",
        }
    }

    pub const fn condition_id(self) -> ConditionId {
        match self {
            Self::Hypovolemic => ConditionId::HypovolemicShock,
            Self::Cardiogenic => ConditionId::CardiogenicShock,
            Self::Obstructive => ConditionId::ObstructiveShock,
            Self::DistributiveSeptic => ConditionId::SepticShock,
            Self::DistributiveAnaphylactic => ConditionId::AnaphylacticShock,
            Self::Neurogenic => ConditionId::NeurogenicShock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluidRecommendation {
    Bolus,
    Cautious,
    Avoid,
}

impl FluidRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bolus => "Fluid bolus indicated",
            Self::Cautious => "Cautious small-volume fluids with reassessment",
            Self::Avoid => "Avoid fluid boluses",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockAnalysis {
    pub shock_type: ShockType,
    pub probability: f64,
    pub evidence: Vec<String>,
    pub fluid_recommendation: FluidRecommendation,
    pub immediate_actions: Vec<String>,
}

impl ShockAnalysis {
    /// Fixed conversion used when merging shock analyses into the ranked differential list.
    pub fn into_differential(self) -> Differential {
        Differential {
            id: self.shock_type.condition_id(),
            diagnosis: self.shock_type.label().to_string(),
            probability: self.probability,
            evidence: self.evidence,
            missing_findings: Vec::new(),
            next_questions: Vec::new(),
            category: DifferentialCategory::ImmediateThreat,
        }
    }
}

/// Stateless classifier over the six shock etiologies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShockClassifier;

impl ShockClassifier {
    /// True when the snapshot shows an active shock state: an explicit flag, delayed or flash
    /// capillary refill, or cool/mottled skin.
    pub fn in_shock(&self, snapshot: &SurveySnapshot) -> bool {
        snapshot.circulation.shock_suspected == Some(true)
            || snapshot.has_abnormal_refill()
            || snapshot.has_cool_skin()
    }

    /// Analyses sorted by descending probability. Empty for non-shocked patients; etiologies
    /// without any supporting finding are omitted.
    pub fn differentiate(&self, snapshot: &SurveySnapshot) -> Vec<ShockAnalysis> {
        if !self.in_shock(snapshot) {
            debug!("shock gate closed: refill normal and skin warm");
            return Vec::new();
        }

        let weight_kg = dosing_weight_kg(snapshot);
        let mut analyses: Vec<ShockAnalysis> = ShockType::ordered()
            .into_iter()
            .filter_map(|shock_type| {
                let (score, evidence) = scoring::score(shock_type, snapshot);
                let probability = clamp_probability(score, SHOCK_CEILING);
                (probability > 0.0).then(|| ShockAnalysis {
                    shock_type,
                    probability,
                    evidence,
                    fluid_recommendation: shock_type.fluid_recommendation(),
                    immediate_actions: actions::immediate_actions(shock_type, weight_kg),
                })
            })
            .collect();

        analyses.sort_by(|left, right| right.probability.total_cmp(&left.probability));
        debug!(
            hypotheses = analyses.len(),
            leading = ?analyses.first().map(|analysis| analysis.shock_type),
            "shock etiologies scored"
        );
        analyses
    }
}

pub fn differentiate_shock(snapshot: &SurveySnapshot) -> Vec<ShockAnalysis> {
    ShockClassifier.differentiate(snapshot)
}
