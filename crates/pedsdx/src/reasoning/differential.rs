use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every condition the engine can rank, including the six shock etiologies merged in from the
/// shock classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionId {
    Sepsis,
    StatusAsthmaticus,
    Bronchiolitis,
    UpperAirwayObstruction,
    Anaphylaxis,
    DiabeticKetoacidosis,
    Hypoglycemia,
    StatusEpilepticus,
    TraumaticBrainInjury,
    TensionPneumothorax,
    Myocarditis,
    TraumaticHemorrhage,
    ToxicIngestion,
    HypovolemicShock,
    CardiogenicShock,
    ObstructiveShock,
    SepticShock,
    AnaphylacticShock,
    NeurogenicShock,
}

impl ConditionId {
    pub const fn all() -> [Self; 19] {
        [
            Self::Sepsis,
            Self::StatusAsthmaticus,
            Self::Bronchiolitis,
            Self::UpperAirwayObstruction,
            Self::Anaphylaxis,
            Self::DiabeticKetoacidosis,
            Self::Hypoglycemia,
            Self::StatusEpilepticus,
            Self::TraumaticBrainInjury,
            Self::TensionPneumothorax,
            Self::Myocarditis,
            Self::TraumaticHemorrhage,
            Self::ToxicIngestion,
            Self::HypovolemicShock,
            Self::CardiogenicShock,
            Self::ObstructiveShock,
            Self::SepticShock,
            Self::AnaphylacticShock,
            Self::NeurogenicShock,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sepsis => "sepsis",
            Self::StatusAsthmaticus => "status_asthmaticus",
            Self::Bronchiolitis => "bronchiolitis",
            Self::UpperAirwayObstruction => "upper_airway_obstruction",
            Self::Anaphylaxis => "anaphylaxis",
            Self::DiabeticKetoacidosis => "diabetic_ketoacidosis",
            Self::Hypoglycemia => "hypoglycemia",
            Self::StatusEpilepticus => "status_epilepticus",
            Self::TraumaticBrainInjury => "traumatic_brain_injury",
            Self::TensionPneumothorax => "tension_pneumothorax",
            Self::Myocarditis => "myocarditis",
            Self::TraumaticHemorrhage => "traumatic_hemorrhage",
            Self::ToxicIngestion => "toxic_ingestion",
            Self::HypovolemicShock => "hypovolemic_shock",
            Self::CardiogenicShock => "cardiogenic_shock",
            Self::ObstructiveShock => "obstructive_shock",
            Self::SepticShock => "septic_shock",
            Self::AnaphylacticShock => "anaphylactic_shock",
            Self::NeurogenicShock => "neurogenic_shock",
        }
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown condition id '{0}'")]
pub struct UnknownCondition(pub String);

impl FromStr for ConditionId {
    type Err = UnknownCondition;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|condition| condition.as_str() == needle)
            .ok_or_else(|| UnknownCondition(raw.to_string()))
    }
}

/// Acuity bucket shown beside each differential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferentialCategory {
    ImmediateThreat,
    Critical,
    Urgent,
}

impl DifferentialCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ImmediateThreat => "immediate_threat",
            Self::Critical => "critical",
            Self::Urgent => "urgent",
        }
    }
}

/// A candidate diagnosis with its heuristic, severity-weighted score.
///
/// `probability` is not calibrated and the scores across a list do not sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Differential {
    pub id: ConditionId,
    pub diagnosis: String,
    pub probability: f64,
    pub evidence: Vec<String>,
    pub missing_findings: Vec<String>,
    pub next_questions: Vec<String>,
    pub category: DifferentialCategory,
}

/// Clamp into `[0, ceiling]`, mapping NaN to zero.
pub(crate) fn clamp_probability(value: f64, ceiling: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, ceiling)
    }
}

/// Stable descending sort; equal scores keep their insertion order.
pub(crate) fn rank_by_probability(differentials: &mut [Differential]) {
    differentials.sort_by(|left, right| right.probability.total_cmp(&left.probability));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_ids_round_trip_through_their_wire_names() {
        for condition in ConditionId::all() {
            let parsed: ConditionId = condition.as_str().parse().expect("known id");
            assert_eq!(parsed, condition);
            let json = serde_json::to_string(&condition).expect("serializes");
            assert_eq!(json, format!("\"{}\"", condition.as_str()));
        }
    }

    #[test]
    fn unknown_condition_is_reported() {
        let err = "croup_plus".parse::<ConditionId>().expect_err("unknown id");
        assert_eq!(err.to_string(), "unknown condition id 'croup_plus'");
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let make = |id, probability| Differential {
            id,
            diagnosis: id.to_string(),
            probability,
            evidence: Vec::new(),
            missing_findings: Vec::new(),
            next_questions: Vec::new(),
            category: DifferentialCategory::Urgent,
        };
        let mut list = vec![
            make(ConditionId::Bronchiolitis, 0.3),
            make(ConditionId::Sepsis, 0.6),
            make(ConditionId::Anaphylaxis, 0.3),
        ];
        rank_by_probability(&mut list);
        let order: Vec<_> = list.iter().map(|entry| entry.id).collect();
        assert_eq!(
            order,
            vec![
                ConditionId::Sepsis,
                ConditionId::Bronchiolitis,
                ConditionId::Anaphylaxis
            ]
        );
    }
}
