use pedsdx::reasoning::{
    differentiate_shock, FluidRecommendation, ReasoningEngine, ShockType, SurveySnapshot,
};

fn shocked(json: &str) -> SurveySnapshot {
    let mut snapshot: SurveySnapshot = serde_json::from_str(json).expect("valid snapshot json");
    snapshot.circulation.shock_suspected = Some(true);
    snapshot
}

#[test]
fn cardiogenic_picture_never_recommends_a_bolus() {
    let snapshot = shocked(
        r#"{
            "age_years": 2,
            "circulation": { "jugular_venous_pressure": "elevated", "hepatomegaly": true },
            "breathing": { "crackles": true }
        }"#,
    );

    let analyses = differentiate_shock(&snapshot);

    assert_eq!(analyses[0].shock_type, ShockType::Cardiogenic);
    assert!((analyses[0].probability - 0.9).abs() < 1e-9);
    assert_eq!(analyses[0].fluid_recommendation, FluidRecommendation::Avoid);
    assert!(analyses
        .iter()
        .filter(|analysis| matches!(
            analysis.shock_type,
            ShockType::Cardiogenic | ShockType::Obstructive
        ))
        .all(|analysis| analysis.fluid_recommendation != FluidRecommendation::Bolus));
}

#[test]
fn tension_pneumothorax_is_managed_cautiously() {
    let snapshot = shocked(
        r#"{
            "age_years": 12,
            "breathing": { "tracheal_deviation": true, "breath_sounds": "absent_right" },
            "circulation": { "muffled_heart_sounds": false, "jugular_venous_pressure": "elevated" }
        }"#,
    );

    let analyses = differentiate_shock(&snapshot);

    let obstructive = analyses
        .iter()
        .find(|analysis| analysis.shock_type == ShockType::Obstructive)
        .expect("obstructive scored");
    assert!((obstructive.probability - 0.8).abs() < 1e-9);
    assert_eq!(
        obstructive.fluid_recommendation,
        FluidRecommendation::Cautious
    );
}

#[test]
fn spinal_injury_with_bradycardic_hypotension_is_neurogenic() {
    let snapshot = shocked(
        r#"{
            "age_years": 10,
            "circulation": { "heart_rate": 48, "systolic_bp": 70 },
            "exposure": {
                "skin": { "temperature": "warm" },
                "trauma": { "spinal_injury_suspected": true }
            }
        }"#,
    );

    let analyses = differentiate_shock(&snapshot);

    assert_eq!(analyses[0].shock_type, ShockType::Neurogenic);
    assert!((analyses[0].probability - 0.99).abs() < 1e-9);
    assert_eq!(
        analyses[0].fluid_recommendation,
        FluidRecommendation::Cautious
    );
}

#[test]
fn shock_hypotheses_join_the_ranked_differential_list() {
    let snapshot = shocked(
        r#"{
            "age_years": 4,
            "circulation": { "active_bleeding": true, "gi_losses": true }
        }"#,
    );

    let output = ReasoningEngine::standard().reason(&snapshot);

    assert!(output
        .differentials
        .iter()
        .any(|entry| entry.id.as_str() == "hypovolemic_shock"));
    assert_eq!(
        output.shock_analyses[0].fluid_recommendation,
        FluidRecommendation::Bolus
    );
}
