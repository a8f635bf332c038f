use super::super::survey::{
    present, recorded_absent, CapillaryRefill, JugularVenousPressure, RashType, SkinTemperature,
    SurveySnapshot,
};
use super::ShockType;

#[derive(Default)]
struct Findings {
    score: f64,
    evidence: Vec<String>,
}

impl Findings {
    fn weigh(&mut self, matched: bool, weight: f64, note: &str) {
        if matched {
            self.score += weight;
            self.evidence.push(note.to_string());
        }
    }
}

/// Unclamped evidence sum and the findings that produced it.
pub(super) fn score(shock_type: ShockType, snapshot: &SurveySnapshot) -> (f64, Vec<String>) {
    let mut findings = Findings::default();
    match shock_type {
        ShockType::Hypovolemic => hypovolemic(snapshot, &mut findings),
        ShockType::Cardiogenic => cardiogenic(snapshot, &mut findings),
        ShockType::Obstructive => obstructive(snapshot, &mut findings),
        ShockType::DistributiveSeptic => septic(snapshot, &mut findings),
        ShockType::DistributiveAnaphylactic => anaphylactic(snapshot, &mut findings),
        ShockType::Neurogenic => neurogenic(snapshot, &mut findings),
    }
    (findings.score, findings.evidence)
}

fn hypovolemic(snapshot: &SurveySnapshot, findings: &mut Findings) {
    let circulation = &snapshot.circulation;
    findings.weigh(
        present(circulation.active_bleeding),
        0.4,
        "Active bleeding or haemorrhage history",
    );
    findings.weigh(
        present(circulation.gi_losses),
        0.3,
        "Vomiting or diarrhoeal losses",
    );
    findings.weigh(present(snapshot.exposure.burns), 0.3, "Burns");
    findings.weigh(
        matches!(
            circulation.jugular_venous_pressure,
            Some(JugularVenousPressure::Flat | JugularVenousPressure::Normal)
        ),
        0.2,
        "Jugular venous pressure not elevated",
    );
    findings.weigh(
        recorded_absent(snapshot.breathing.crackles),
        0.1,
        "Clear lung fields",
    );
    findings.weigh(
        snapshot.has_delayed_refill(),
        0.1,
        "Delayed capillary refill",
    );
    findings.weigh(snapshot.is_tachycardic(), 0.05, "Tachycardia for age");
}

fn cardiogenic(snapshot: &SurveySnapshot, findings: &mut Findings) {
    let circulation = &snapshot.circulation;
    findings.weigh(
        snapshot.has_elevated_jvp(),
        0.4,
        "Elevated jugular venous pressure",
    );
    findings.weigh(
        present(snapshot.breathing.crackles),
        0.3,
        "Pulmonary oedema (crackles)",
    );
    findings.weigh(present(circulation.hepatomegaly), 0.2, "Hepatomegaly");
    findings.weigh(
        present(circulation.peripheral_edema),
        0.1,
        "Peripheral oedema",
    );
    findings.weigh(present(circulation.murmur), 0.1, "Murmur or gallop");
}

fn obstructive(snapshot: &SurveySnapshot, findings: &mut Findings) {
    let circulation = &snapshot.circulation;
    findings.weigh(
        present(snapshot.breathing.tracheal_deviation),
        0.3,
        "Tracheal deviation",
    );
    findings.weigh(
        snapshot.has_unilateral_breath_sounds(),
        0.3,
        "Unilateral absent or diminished breath sounds",
    );
    findings.weigh(
        present(circulation.muffled_heart_sounds),
        0.3,
        "Muffled heart sounds",
    );
    findings.weigh(
        present(circulation.pulsus_paradoxus),
        0.2,
        "Pulsus paradoxus",
    );
    findings.weigh(
        snapshot.has_elevated_jvp(),
        0.2,
        "Distended neck veins",
    );
}

fn septic(snapshot: &SurveySnapshot, findings: &mut Findings) {
    findings.weigh(
        snapshot.is_febrile() || snapshot.is_hypothermic(),
        0.3,
        "Fever or hypothermia",
    );
    findings.weigh(
        snapshot.has_petechial_or_purpuric_rash(),
        0.3,
        "Petechial or purpuric rash",
    );
    findings.weigh(
        snapshot.circulation.capillary_refill == Some(CapillaryRefill::Flash),
        0.2,
        "Flash capillary refill (warm shock)",
    );
    findings.weigh(snapshot.is_tachycardic(), 0.1, "Tachycardia for age");
    findings.weigh(
        snapshot.has_altered_mental_status(),
        0.1,
        "Altered mental status",
    );
}

fn anaphylactic(snapshot: &SurveySnapshot, findings: &mut Findings) {
    findings.weigh(
        present(snapshot.exposure.allergen_exposure),
        0.4,
        "Recent allergen exposure",
    );
    findings.weigh(
        snapshot.exposure.skin.rash == Some(RashType::Urticarial),
        0.3,
        "Urticaria",
    );
    findings.weigh(present(snapshot.airway.angioedema), 0.3, "Angioedema");
    findings.weigh(present(snapshot.breathing.wheeze), 0.2, "Wheeze");
    findings.weigh(present(snapshot.airway.stridor), 0.1, "Stridor");
}

fn neurogenic(snapshot: &SurveySnapshot, findings: &mut Findings) {
    findings.weigh(
        present(snapshot.exposure.trauma.spinal_injury_suspected),
        0.5,
        "Suspected spinal cord injury",
    );
    findings.weigh(
        snapshot.is_bradycardic() && snapshot.is_hypotensive(),
        0.3,
        "Bradycardia with hypotension",
    );
    findings.weigh(
        snapshot.exposure.skin.temperature == Some(SkinTemperature::Warm),
        0.2,
        "Warm peripheries despite shock",
    );
}
