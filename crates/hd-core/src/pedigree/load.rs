//! Pedigree CSV reader.
//!
//! Expected header: `name,mother,father,trait`. Cells are trimmed. Mother and
//! father are blank for founders. `trait` is `1` (has the trait), `0` (does
//! not), or blank (unknown).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use hd_common::PersonId;
use serde::Deserialize;
use tracing::{debug, info};

use super::{Pedigree, PedigreeError, Person};

#[derive(Debug, Deserialize)]
struct PedigreeRecord {
    name: String,
    #[serde(default)]
    mother: Option<String>,
    #[serde(default)]
    father: Option<String>,
    #[serde(rename = "trait", default)]
    observed_trait: Option<String>,
}

/// Read and validate a pedigree from a CSV file.
pub fn load_pedigree(path: &Path) -> Result<Pedigree, PedigreeError> {
    let file = File::open(path)?;
    let pedigree = read_pedigree(file)?;
    info!(
        path = %path.display(),
        people = pedigree.len(),
        founders = pedigree.founders().count(),
        observed = pedigree.observed_count(),
        "pedigree loaded"
    );
    Ok(pedigree)
}

/// Read and validate a pedigree from any CSV source.
pub fn read_pedigree<R: Read>(reader: R) -> Result<Pedigree, PedigreeError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut people = Vec::new();
    for (i, record) in rdr.deserialize::<PedigreeRecord>().enumerate() {
        let record = record?;
        // Row 1 is the header.
        let row = i + 2;
        if record.name.is_empty() {
            return Err(PedigreeError::EmptyIdentifier { row });
        }
        let observed_trait = parse_trait(&record.name, record.observed_trait.as_deref())?;
        debug!(row, name = %record.name, ?observed_trait, "pedigree record");
        people.push(Person {
            id: PersonId::from(record.name),
            mother: non_empty(record.mother),
            father: non_empty(record.father),
            observed_trait,
        });
    }

    Pedigree::new(people)
}

fn non_empty(cell: Option<String>) -> Option<PersonId> {
    cell.filter(|s| !s.is_empty()).map(PersonId::from)
}

fn parse_trait(person: &str, cell: Option<&str>) -> Result<Option<bool>, PedigreeError> {
    match cell {
        None | Some("") => Ok(None),
        Some("1") => Ok(Some(true)),
        Some("0") => Ok(Some(false)),
        Some(other) => Err(PedigreeError::InvalidTrait {
            person: person.to_string(),
            value: other.to_string(),
        }),
    }
}
