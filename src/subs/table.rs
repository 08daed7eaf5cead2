//! Substitution list loaded from a headerless `value,footprint,mpn` CSV.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::BomError;

const FIELD_COUNT: usize = 3;

/// One line of the substitution list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubstitutionEntry {
    pub value: String,
    pub footprint: String,
    pub mpn: String,
}

/// Substitution entries in file order.
#[derive(Debug, Default)]
pub struct SubstitutionTable {
    entries: Vec<SubstitutionEntry>,
}

impl SubstitutionTable {
    /// Load the substitution list at `path`.
    pub fn load(path: &Path) -> Result<Self, BomError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|source| BomError::SubsRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_csv(reader, path)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Self, BomError> {
        let read_err = |source: csv::Error| BomError::SubsRead {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result.map_err(read_err)?;

            // Every line must be exactly value,footprint,mpn
            if record.len() != FIELD_COUNT {
                return Err(BomError::MalformedSubstitution {
                    line: record.position().map(|p| p.line()).unwrap_or(0),
                    found: record.len(),
                });
            }

            let entry: SubstitutionEntry = record.deserialize(None).map_err(read_err)?;
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// MPN of the first entry whose value and footprint match exactly.
    pub fn find(&self, value: &str, footprint: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.value == value && e.footprint == footprint)
            .map(|e| e.mpn.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
