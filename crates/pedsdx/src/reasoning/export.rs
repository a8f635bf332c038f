use super::differential::Differential;
use serde::Serialize;
use std::io::Write;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "failed to write differential export: {}", err),
            ExportError::Csv(err) => write!(f, "could not encode differentials as CSV: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(err) => Some(err),
            ExportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Serialize)]
struct DifferentialRow<'a> {
    rank: usize,
    id: &'a str,
    diagnosis: &'a str,
    probability: String,
    category: &'static str,
    evidence: String,
}

/// Writes one row per differential in the order given, ranked from 1.
pub fn write_differentials_csv<W: Write>(
    writer: W,
    differentials: &[Differential],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, differential) in differentials.iter().enumerate() {
        csv_writer.serialize(DifferentialRow {
            rank: index + 1,
            id: differential.id.as_str(),
            diagnosis: &differential.diagnosis,
            probability: format!("{:.3}", differential.probability),
            category: differential.category.label(),
            evidence: differential.evidence.join("; "),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
