use super::survey::SurveySnapshot;
use thiserror::Error;

pub const MAX_AGE_YEARS: f64 = 120.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("age must not be negative (got {0} years)")]
    NegativeAge(f64),
    #[error("age of {0} years is outside the supported range")]
    AgeOutOfRange(f64),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("oxygen saturation of {0}% exceeds 100%")]
    InvalidSaturation(u8),
    #[error("weight must be positive (got {0} kg)")]
    InvalidWeight(f64),
    #[error("GCS of {0} is outside 3-15")]
    InvalidGcs(u8),
}

/// Rejects snapshots the reasoning core makes no promises about. Everything that passes is
/// well-formed; clinically implausible but possible values (an SBP of 40) are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotGuard;

impl SnapshotGuard {
    pub fn validate(&self, snapshot: &SurveySnapshot) -> Result<(), SnapshotError> {
        finite("age_years", Some(snapshot.age_years))?;
        if snapshot.age_years < 0.0 {
            return Err(SnapshotError::NegativeAge(snapshot.age_years));
        }
        if snapshot.age_years > MAX_AGE_YEARS {
            return Err(SnapshotError::AgeOutOfRange(snapshot.age_years));
        }

        finite("weight_kg", snapshot.weight_kg)?;
        if let Some(weight) = snapshot.weight_kg.filter(|weight| *weight <= 0.0) {
            return Err(SnapshotError::InvalidWeight(weight));
        }

        finite("temperature_c", snapshot.exposure.temperature_c)?;
        finite("glucose_mg_dl", snapshot.disability.glucose_mg_dl)?;

        if let Some(spo2) = snapshot.breathing.spo2.filter(|spo2| *spo2 > 100) {
            return Err(SnapshotError::InvalidSaturation(spo2));
        }
        if let Some(gcs) = snapshot.disability.gcs.filter(|gcs| !(3..=15).contains(gcs)) {
            return Err(SnapshotError::InvalidGcs(gcs));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: Option<f64>) -> Result<(), SnapshotError> {
    match value {
        Some(value) if !value.is_finite() => Err(SnapshotError::NonFinite { field }),
        _ => Ok(()),
    }
}

pub fn validate_snapshot(snapshot: &SurveySnapshot) -> Result<(), SnapshotError> {
    SnapshotGuard.validate(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toddler() -> SurveySnapshot {
        SurveySnapshot {
            age_years: 2.0,
            ..SurveySnapshot::default()
        }
    }

    #[test]
    fn default_snapshot_is_accepted() {
        assert_eq!(validate_snapshot(&toddler()), Ok(()));
    }

    #[test]
    fn age_bounds_are_enforced() {
        let mut snapshot = toddler();
        snapshot.age_years = -0.5;
        assert_eq!(
            validate_snapshot(&snapshot),
            Err(SnapshotError::NegativeAge(-0.5))
        );

        snapshot.age_years = 130.0;
        assert_eq!(
            validate_snapshot(&snapshot),
            Err(SnapshotError::AgeOutOfRange(130.0))
        );

        snapshot.age_years = f64::NAN;
        assert_eq!(
            validate_snapshot(&snapshot),
            Err(SnapshotError::NonFinite { field: "age_years" })
        );
    }

    #[test]
    fn vitals_out_of_range_are_rejected() {
        let mut snapshot = toddler();
        snapshot.breathing.spo2 = Some(104);
        assert_eq!(
            validate_snapshot(&snapshot),
            Err(SnapshotError::InvalidSaturation(104))
        );

        let mut snapshot = toddler();
        snapshot.disability.gcs = Some(2);
        assert_eq!(validate_snapshot(&snapshot), Err(SnapshotError::InvalidGcs(2)));

        let mut snapshot = toddler();
        snapshot.weight_kg = Some(0.0);
        assert_eq!(
            validate_snapshot(&snapshot),
            Err(SnapshotError::InvalidWeight(0.0))
        );

        let mut snapshot = toddler();
        snapshot.exposure.temperature_c = Some(f64::INFINITY);
        assert_eq!(
            validate_snapshot(&snapshot),
            Err(SnapshotError::NonFinite {
                field: "temperature_c"
            })
        );
    }
}
