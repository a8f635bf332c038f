use metrics_exporter_prometheus::PrometheusHandle;
use pedsdx::config::AssessmentConfig;
use pedsdx::error::AppError;
use pedsdx::reasoning::{validate_snapshot, SurveySnapshot};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) assessment: AssessmentConfig,
}

/// Reads a snapshot JSON file and runs it through the intake guard.
pub(crate) fn load_snapshot(path: &Path) -> Result<SurveySnapshot, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot: SurveySnapshot = serde_json::from_str(&raw)?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

#[cfg(test)]
pub(crate) fn test_state(assessment: AssessmentConfig) -> AppState {
    use metrics_exporter_prometheus::PrometheusBuilder;

    AppState {
        readiness: Arc::new(AtomicBool::new(true)),
        metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        assessment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("pedsdx-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn load_snapshot_parses_and_validates() {
        let path = temp_file("ok.json", r#"{ "age_years": 3, "weight_kg": 14.5 }"#);
        let snapshot = load_snapshot(&path).expect("snapshot loads");
        assert_eq!(snapshot.weight_kg, Some(14.5));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn load_snapshot_rejects_invalid_values() {
        let path = temp_file("bad.json", r#"{ "age_years": 3, "disability": { "gcs": 17 } }"#);
        let err = load_snapshot(&path).expect_err("gcs out of range");
        assert!(matches!(err, AppError::Intake(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn load_snapshot_reports_missing_files() {
        let err = load_snapshot(Path::new("./does-not-exist.json")).expect_err("missing file");
        assert!(matches!(err, AppError::Io(_)));
    }
}
