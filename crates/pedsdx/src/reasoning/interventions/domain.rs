use super::super::differential::ConditionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionTier {
    /// Safe to start on recognition alone.
    Immediate,
    /// Start within the first hour once the working diagnosis holds.
    Urgent,
    /// Harmful against the wrong diagnosis; gated on stat results.
    Confirmatory,
}

impl InterventionTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::Urgent => "Urgent",
            Self::Confirmatory => "Confirmatory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Minutes,
    Hours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskIfWrong {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestPriority {
    Stat,
    Urgent,
    Routine,
}

/// Numeric cut-off that changes management, e.g. glucose below 60 mg/dL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestThreshold {
    pub value: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredTest {
    pub name: String,
    pub threshold: Option<TestThreshold>,
    pub priority: TestPriority,
}

impl RequiredTest {
    pub fn new(name: &str, priority: TestPriority) -> Self {
        Self {
            name: name.to_string(),
            threshold: None,
            priority,
        }
    }

    pub fn with_threshold(mut self, value: f64, description: &str) -> Self {
        self.threshold = Some(TestThreshold {
            value,
            description: description.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub id: String,
    pub name: String,
    pub indication: String,
    pub dosing: Option<String>,
    pub contraindications: Option<String>,
    pub monitoring: Option<String>,
    pub time_window: TimeWindow,
    pub tier: InterventionTier,
    pub required_tests: Vec<RequiredTest>,
    pub risk_if_wrong: RiskIfWrong,
}

impl Intervention {
    pub fn new(
        id: &str,
        name: &str,
        indication: &str,
        tier: InterventionTier,
        time_window: TimeWindow,
        risk_if_wrong: RiskIfWrong,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            indication: indication.to_string(),
            dosing: None,
            contraindications: None,
            monitoring: None,
            time_window,
            tier,
            required_tests: Vec::new(),
            risk_if_wrong,
        }
    }

    pub fn dosing(mut self, dosing: &str) -> Self {
        self.dosing = Some(dosing.to_string());
        self
    }

    pub fn contraindications(mut self, contraindications: &str) -> Self {
        self.contraindications = Some(contraindications.to_string());
        self
    }

    pub fn monitoring(mut self, monitoring: &str) -> Self {
        self.monitoring = Some(monitoring.to_string());
        self
    }

    pub fn requires(mut self, test: RequiredTest) -> Self {
        self.required_tests.push(test);
        self
    }
}

/// Interventions and tests authored for one working diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarePlan {
    pub name: String,
    pub conditions: Vec<ConditionId>,
    pub interventions: Vec<Intervention>,
    pub required_tests: Vec<RequiredTest>,
}

impl CarePlan {
    /// Plan-level tests followed by intervention-level tests, de-duplicated by name in first-seen
    /// order.
    pub fn all_required_tests(&self) -> Vec<RequiredTest> {
        let mut seen = BTreeSet::new();
        self.required_tests
            .iter()
            .chain(
                self.interventions
                    .iter()
                    .flat_map(|intervention| intervention.required_tests.iter()),
            )
            .filter(|test| seen.insert(test.name.clone()))
            .cloned()
            .collect()
    }
}

/// Caller-owned checkbox state, passed in by value on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionState {
    pub completed_interventions: BTreeSet<String>,
    pub completed_tests: BTreeSet<String>,
}

impl CompletionState {
    pub fn with_interventions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_interventions
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_tests<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed_tests.extend(names.into_iter().map(Into::into));
        self
    }
}
