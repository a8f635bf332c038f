use crate::infra::load_snapshot;
use clap::{Args, ValueEnum};
use pedsdx::config::{AppConfig, AssessmentConfig};
use pedsdx::error::AppError;
use pedsdx::reasoning::survey::{
    CapillaryRefill, JugularVenousPressure, RashType, SkinTemperature,
};
use pedsdx::reasoning::{
    write_differentials_csv, CompletionState, InterventionView, ReasoningEngine, ReasoningOutput,
    SurveySnapshot, TestPriority,
};
use std::path::PathBuf;

const DEMO_DIFFERENTIALS: usize = 5;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Snapshot JSON file to reason over
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Intervention id already completed at the bedside (repeatable)
    #[arg(long = "completed-intervention")]
    pub(crate) completed_interventions: Vec<String>,
    /// Test name already sent (repeatable)
    #[arg(long = "completed-test")]
    pub(crate) completed_tests: Vec<String>,
    /// Emit the ranked differentials as CSV instead of the bedside summary
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run a single scenario instead of all of them
    #[arg(long, value_enum)]
    pub(crate) scenario: Option<Scenario>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Scenario {
    Cardiogenic,
    NeonatalSepsis,
    Anaphylaxis,
}

impl Scenario {
    const fn ordered() -> [Self; 3] {
        [Self::Cardiogenic, Self::NeonatalSepsis, Self::Anaphylaxis]
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Cardiogenic => "Six-year-old in shock with raised JVP and crackles",
            Self::NeonatalSepsis => "Eighteen-day-old, febrile with delayed refill",
            Self::Anaphylaxis => "Eight-year-old with facial swelling after peanut exposure",
        }
    }

    pub(crate) fn snapshot(self) -> SurveySnapshot {
        let mut snapshot = SurveySnapshot::default();
        match self {
            Self::Cardiogenic => {
                snapshot.age_years = 6.0;
                snapshot.circulation.jugular_venous_pressure =
                    Some(JugularVenousPressure::Elevated);
                snapshot.circulation.hepatomegaly = Some(true);
                snapshot.circulation.capillary_refill = Some(CapillaryRefill::Delayed);
                snapshot.circulation.shock_suspected = Some(true);
                snapshot.breathing.crackles = Some(true);
            }
            Self::NeonatalSepsis => {
                snapshot.age_years = 0.05;
                snapshot.exposure.temperature_c = Some(38.5);
                snapshot.circulation.heart_rate = Some(190);
                snapshot.circulation.capillary_refill = Some(CapillaryRefill::Delayed);
            }
            Self::Anaphylaxis => {
                snapshot.age_years = 8.0;
                snapshot.weight_kg = Some(26.0);
                snapshot.exposure.allergen_exposure = Some(true);
                snapshot.exposure.skin.rash = Some(RashType::Urticarial);
                snapshot.exposure.skin.temperature = Some(SkinTemperature::Cool);
                snapshot.airway.angioedema = Some(true);
                snapshot.breathing.wheeze = Some(true);
                snapshot.circulation.systolic_bp = Some(70);
            }
        }
        snapshot
    }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        snapshot,
        completed_interventions,
        completed_tests,
        csv,
    } = args;

    let config = AppConfig::load()?;
    let snapshot = load_snapshot(&snapshot)?;
    let completion = CompletionState::default()
        .with_interventions(completed_interventions)
        .with_tests(completed_tests);
    let output = assess_snapshot(&snapshot, &completion, &config.assessment);

    if csv {
        write_differentials_csv(std::io::stdout().lock(), &output.differentials)?;
    } else {
        render_assessment(&output);
    }
    Ok(())
}

/// Reasons over the snapshot and applies the same differential limit the HTTP service uses.
fn assess_snapshot(
    snapshot: &SurveySnapshot,
    completion: &CompletionState,
    assessment: &AssessmentConfig,
) -> ReasoningOutput {
    let mut output = ReasoningEngine::standard().reason_with_progress(snapshot, completion, false);
    output.differentials = assessment.visible(output.differentials);
    output
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let scenarios = match args.scenario {
        Some(scenario) => vec![scenario],
        None => Scenario::ordered().to_vec(),
    };
    let engine = ReasoningEngine::standard();
    let summary = AssessmentConfig {
        max_differentials: Some(DEMO_DIFFERENTIALS),
    };

    println!("Pediatric emergency reasoning demo");
    for scenario in scenarios {
        println!("\n=== {} ===", scenario.title());
        let snapshot = scenario.snapshot();
        let mut output = engine.reason(&snapshot);
        let progress = bedside_progress(&output);
        output.differentials = summary.visible(output.differentials);
        render_assessment(&output);

        let progressed = engine.reason_with_progress(&snapshot, &progress, true);
        println!(
            "\nAfter ticking {} immediate interventions and {} stat tests:",
            progress.completed_interventions.len(),
            progress.completed_tests.len()
        );
        println!(
            "- Protocol phase: {} ({})",
            progressed.protocol_phase.label(),
            progressed.protocol_route
        );
        println!(
            "- Confirmatory interventions actionable: {}",
            progressed
                .confirmatory_interventions
                .iter()
                .filter(|view| view.actionable)
                .count()
        );
    }
    Ok(())
}

/// Ticks every immediate intervention and stat test, as a team would while stabilising.
fn bedside_progress(output: &ReasoningOutput) -> CompletionState {
    CompletionState::default()
        .with_interventions(
            output
                .immediate_interventions
                .iter()
                .map(|view| view.intervention.id.clone()),
        )
        .with_tests(
            output
                .required_tests
                .iter()
                .filter(|view| view.test.priority == TestPriority::Stat)
                .map(|view| view.test.name.clone()),
        )
}

fn render_assessment(output: &ReasoningOutput) {
    println!("Age group: {}", output.age_group);
    println!("Leading differentials:");
    for (rank, differential) in output.differentials.iter().enumerate() {
        println!(
            "  {}. {} ({:.0}%, {})",
            rank + 1,
            differential.diagnosis,
            differential.probability * 100.0,
            differential.category.label()
        );
        for evidence in &differential.evidence {
            println!("     - {}", evidence);
        }
    }

    if !output.shock_analyses.is_empty() {
        println!("Shock etiology:");
        for analysis in &output.shock_analyses {
            println!(
                "  - {} {:.0}%: {}",
                analysis.shock_type.label(),
                analysis.probability * 100.0,
                analysis.fluid_recommendation.label()
            );
        }
        if let Some(leading) = output.shock_analyses.first() {
            println!("  First actions for {}:", leading.shock_type.label());
            for action in &leading.immediate_actions {
                println!("    * {}", action);
            }
        }
    }

    println!(
        "Care plan: {} -> {} [{}]",
        output.care_plan,
        output.protocol_route,
        output.protocol_phase.label()
    );
    render_tier("Immediate", &output.immediate_interventions);
    render_tier("Urgent", &output.urgent_interventions);
    render_tier("Confirmatory", &output.confirmatory_interventions);

    println!("Required tests:");
    for view in &output.required_tests {
        let mark = if view.completed { "x" } else { " " };
        println!("  [{}] {} ({:?})", mark, view.test.name, view.test.priority);
    }

    if !output.age_considerations.is_empty() {
        println!("Age considerations:");
        for note in &output.age_considerations {
            println!("  - {}", note);
        }
    }
}

fn render_tier(label: &str, views: &[InterventionView]) {
    if views.is_empty() {
        return;
    }
    println!("{} interventions:", label);
    for view in views {
        let mark = if view.completed { "x" } else { " " };
        let gate = if view.actionable {
            ""
        } else {
            " (locked until stat tests sent)"
        };
        println!("  [{}] {}{}", mark, view.intervention.name, gate);
        if let Some(dosing) = &view.intervention.dosing {
            println!("      {}", dosing);
        }
    }
}
