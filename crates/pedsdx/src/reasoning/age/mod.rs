mod modifiers;

use super::differential::{clamp_probability, ConditionId, Differential};
use super::survey::SurveySnapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Discrete age bucket driving modifier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Neonate,
    Infant,
    Child,
    Adolescent,
    Adult,
    Elderly,
    Pregnant,
}

impl AgeGroup {
    /// Neonatal period ends at roughly 28 days.
    pub const NEONATE_LIMIT_YEARS: f64 = 0.08;

    pub fn classify(snapshot: &SurveySnapshot) -> Self {
        if snapshot.pregnant_or_postpartum {
            return Self::Pregnant;
        }
        Self::from_age_years(snapshot.age_years)
    }

    pub fn from_age_years(age_years: f64) -> Self {
        if age_years < Self::NEONATE_LIMIT_YEARS {
            Self::Neonate
        } else if age_years < 1.0 {
            Self::Infant
        } else if age_years < 12.0 {
            Self::Child
        } else if age_years < 18.0 {
            Self::Adolescent
        } else if age_years < 65.0 {
            Self::Adult
        } else {
            Self::Elderly
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neonate => "neonate",
            Self::Infant => "infant",
            Self::Child => "child",
            Self::Adolescent => "adolescent",
            Self::Adult => "adult",
            Self::Elderly => "elderly",
            Self::Pregnant => "pregnant",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authored age- or pregnancy-specific adjustment for one condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeModifier {
    pub condition: ConditionId,
    pub age_group: AgeGroup,
    pub probability_adjustment: f64,
    pub presentation_changes: Vec<&'static str>,
    pub risk_factor_changes: Vec<&'static str>,
    pub intervention_modifications: Vec<&'static str>,
}

impl AgeModifier {
    /// Composite key in the `{condition}_{age_group}` form, e.g. `sepsis_neonate`.
    pub fn key(&self) -> String {
        modifier_key(self.condition, self.age_group)
    }
}

pub fn modifier_key(condition: ConditionId, age_group: AgeGroup) -> String {
    format!("{}_{}", condition.as_str(), age_group.as_str())
}

/// Flat reference table keyed by `(condition, age group)`.
#[derive(Debug)]
pub struct AgeModifierTable {
    entries: HashMap<(ConditionId, AgeGroup), AgeModifier>,
}

impl AgeModifierTable {
    pub fn standard() -> Self {
        Self::from_modifiers(modifiers::standard_modifiers())
    }

    /// Process-wide copy of [`AgeModifierTable::standard`].
    pub fn shared() -> &'static Self {
        static TABLE: OnceLock<AgeModifierTable> = OnceLock::new();
        TABLE.get_or_init(Self::standard)
    }

    pub fn from_modifiers(modifiers: Vec<AgeModifier>) -> Self {
        let entries = modifiers
            .into_iter()
            .map(|modifier| ((modifier.condition, modifier.age_group), modifier))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, condition: ConditionId, age_group: AgeGroup) -> Option<&AgeModifier> {
        self.entries.get(&(condition, age_group))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply the modifier for this differential's condition and the snapshot's age group.
    ///
    /// Unmapped pairs pass through untouched. A mapped modifier shifts the probability (clamped
    /// to `[0, 1]`) and appends its presentation changes after the existing evidence, each
    /// prefixed with `[Age: <group>]`.
    pub fn apply(&self, differential: Differential, snapshot: &SurveySnapshot) -> Differential {
        let age_group = AgeGroup::classify(snapshot);
        let Some(modifier) = self.lookup(differential.id, age_group) else {
            return differential;
        };

        let mut evidence = differential.evidence;
        evidence.extend(
            modifier
                .presentation_changes
                .iter()
                .map(|change| format!("[Age: {age_group}] {change}")),
        );

        Differential {
            probability: clamp_probability(
                differential.probability + modifier.probability_adjustment,
                1.0,
            ),
            evidence,
            ..differential
        }
    }

    /// Risk-factor and intervention notes for a condition in the snapshot's age group.
    pub fn considerations(&self, condition: ConditionId, snapshot: &SurveySnapshot) -> Vec<String> {
        let age_group = AgeGroup::classify(snapshot);
        self.lookup(condition, age_group)
            .map(|modifier| {
                modifier
                    .risk_factor_changes
                    .iter()
                    .chain(modifier.intervention_modifications.iter())
                    .map(|note| note.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Apply the standard modifier table to one differential.
pub fn apply_age_modifiers(differential: Differential, snapshot: &SurveySnapshot) -> Differential {
    AgeModifierTable::shared().apply(differential, snapshot)
}
