use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::models::Trainer;

/// Errors that can occur while loading the trainer dataset
#[derive(Debug, Error)]
pub enum TrainerStoreError {
    #[error("failed to read trainer data: {0}")]
    Io(#[from] std::io::Error),

    #[error("trainer data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("trainer data must be a JSON array of trainer records")]
    NotAnArray,
}

/// In-memory trainer roster loaded from a JSON file
///
/// Records are validated individually at the load boundary: a malformed
/// record is skipped with a warning instead of failing the whole batch.
pub struct TrainerStore {
    trainers: Vec<Trainer>,
}

impl TrainerStore {
    /// Load and validate the trainer dataset from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TrainerStoreError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let document: Value = serde_json::from_str(&raw)?;
        let records = document.as_array().ok_or(TrainerStoreError::NotAnArray)?;

        let trainers = parse_records(records);

        tracing::info!(
            "Loaded {} trainers from {} ({} records skipped)",
            trainers.len(),
            path.as_ref().display(),
            records.len() - trainers.len()
        );

        Ok(Self { trainers })
    }

    /// Build a store from already-validated trainers
    pub fn from_trainers(trainers: Vec<Trainer>) -> Self {
        Self { trainers }
    }

    pub fn all(&self) -> &[Trainer] {
        &self.trainers
    }

    pub fn get(&self, id: &str) -> Option<&Trainer> {
        self.trainers.iter().find(|trainer| trainer.id == id)
    }

    pub fn len(&self) -> usize {
        self.trainers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trainers.is_empty()
    }
}

/// Strictly validate each record, skipping the malformed ones
fn parse_records(records: &[Value]) -> Vec<Trainer> {
    records
        .iter()
        .filter_map(|record| match serde_json::from_value::<Trainer>(record.clone()) {
            Ok(trainer) => Some(trainer),
            Err(error) => {
                tracing::warn!("Skipping malformed trainer record: {}", error);
                None
            }
        })
        .collect()
}
