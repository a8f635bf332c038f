use super::differential::ConditionId;
use super::interventions::StratifiedPlan;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROTOCOL_ROUTE: &str = "/protocols/pals-general";

/// Explicitly authored protocol routes. Conditions without one fall back to
/// [`DEFAULT_PROTOCOL_ROUTE`].
pub const fn protocol_route(condition: ConditionId) -> Option<&'static str> {
    match condition {
        ConditionId::Sepsis | ConditionId::SepticShock => Some("/protocols/sepsis"),
        ConditionId::StatusAsthmaticus => Some("/protocols/asthma"),
        ConditionId::Anaphylaxis | ConditionId::AnaphylacticShock => Some("/protocols/anaphylaxis"),
        ConditionId::DiabeticKetoacidosis => Some("/protocols/dka"),
        ConditionId::StatusEpilepticus => Some("/protocols/status-epilepticus"),
        ConditionId::TraumaticBrainInjury => Some("/protocols/tbi"),
        ConditionId::TensionPneumothorax | ConditionId::ObstructiveShock => {
            Some("/protocols/obstructive-shock")
        }
        ConditionId::Myocarditis | ConditionId::CardiogenicShock => {
            Some("/protocols/cardiogenic-shock")
        }
        ConditionId::TraumaticHemorrhage | ConditionId::HypovolemicShock => {
            Some("/protocols/hemorrhagic-shock")
        }
        ConditionId::Bronchiolitis
        | ConditionId::UpperAirwayObstruction
        | ConditionId::Hypoglycemia
        | ConditionId::ToxicIngestion
        | ConditionId::NeurogenicShock => None,
    }
}

pub fn resolve_protocol_route(condition: ConditionId) -> &'static str {
    protocol_route(condition).unwrap_or(DEFAULT_PROTOCOL_ROUTE)
}

/// Where the bedside team is in launching the protocol for the top differential. The UI owns
/// the transitions; this is only the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolPhase {
    Recognition,
    AwaitingImmediateInterventions,
    ProtocolLaunchEnabled,
    Launched,
}

impl ProtocolPhase {
    /// A launch requested before every immediate intervention is ticked does not count.
    pub fn derive(plan: &StratifiedPlan, launched: bool) -> Self {
        if plan.all_immediate_complete {
            if launched {
                Self::Launched
            } else {
                Self::ProtocolLaunchEnabled
            }
        } else if plan.immediate.iter().any(|view| view.completed) {
            Self::AwaitingImmediateInterventions
        } else {
            Self::Recognition
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Recognition => "Recognition",
            Self::AwaitingImmediateInterventions => "Awaiting immediate interventions",
            Self::ProtocolLaunchEnabled => "Protocol launch enabled",
            Self::Launched => "Launched",
        }
    }

    pub const fn launch_enabled(self) -> bool {
        matches!(self, Self::ProtocolLaunchEnabled | Self::Launched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_conditions_use_the_general_route() {
        assert_eq!(
            resolve_protocol_route(ConditionId::Bronchiolitis),
            DEFAULT_PROTOCOL_ROUTE
        );
        assert_eq!(
            resolve_protocol_route(ConditionId::CardiogenicShock),
            "/protocols/cardiogenic-shock"
        );
    }

    #[test]
    fn shock_etiologies_share_routes_with_their_source_conditions() {
        assert_eq!(
            protocol_route(ConditionId::Sepsis),
            protocol_route(ConditionId::SepticShock)
        );
        assert_eq!(
            protocol_route(ConditionId::Anaphylaxis),
            protocol_route(ConditionId::AnaphylacticShock)
        );
    }
}
