mod rules;

use super::differential::{clamp_probability, Differential};
use super::survey::SurveySnapshot;

pub(crate) use rules::ConditionRule;

/// Scores never assert certainty.
pub const GENERATOR_CEILING: f64 = 0.99;

/// Tag on evidence entries that lowered a score.
pub const COUNTER_EVIDENCE_PREFIX: &str = "Against: ";

/// Stateless differential generator applying the authored per-condition scorers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifferentialGenerator;

impl DifferentialGenerator {
    /// One unranked differential per generator condition, in catalog order.
    pub fn generate(&self, snapshot: &SurveySnapshot) -> Vec<Differential> {
        rules::condition_rules()
            .iter()
            .map(|rule| score_condition(rule, snapshot))
            .collect()
    }
}

/// Convenience wrapper over [`DifferentialGenerator::generate`].
pub fn generate_differentials(snapshot: &SurveySnapshot) -> Vec<Differential> {
    DifferentialGenerator.generate(snapshot)
}

fn score_condition(rule: &ConditionRule, snapshot: &SurveySnapshot) -> Differential {
    let mut tally = Tally::default();
    (rule.score)(snapshot, &mut tally);

    Differential {
        id: rule.id,
        diagnosis: rule.diagnosis.to_string(),
        probability: clamp_probability(tally.score, GENERATOR_CEILING),
        evidence: tally.evidence,
        missing_findings: tally.missing,
        next_questions: rule
            .next_questions
            .iter()
            .map(|question| question.to_string())
            .collect(),
        category: rule.category,
    }
}

/// Running evidence sum for one condition.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    score: f64,
    evidence: Vec<String>,
    missing: Vec<String>,
}

impl Tally {
    pub(crate) fn add(&mut self, matched: bool, weight: f64, note: impl Into<String>) {
        if matched {
            self.score += weight;
            self.evidence.push(note.into());
        }
    }

    /// Counter-evidence lowers the sum and is listed with an `Against: ` tag so it never reads
    /// as support.
    pub(crate) fn subtract(&mut self, matched: bool, weight: f64, note: impl Into<String>) {
        if matched {
            self.score -= weight;
            self.evidence
                .push(format!("{COUNTER_EVIDENCE_PREFIX}{}", note.into()));
        }
    }

    pub(crate) fn missing_if(&mut self, unset: bool, finding: &str) {
        if unset {
            self.missing.push(format!("{finding} not recorded"));
        }
    }

    #[cfg(test)]
    pub(crate) fn raw_score(&self) -> f64 {
        self.score
    }
}
