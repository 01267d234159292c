//! Pedigree model.
//!
//! A pedigree maps each person to an optional mother, an optional father, and
//! an optional observed trait. It is validated once on construction and is
//! immutable afterwards:
//! - identifiers are non-empty and unique
//! - a person has both parents or neither
//! - every parent is a person of the same pedigree
//! - the parent graph is acyclic

pub mod load;

use std::collections::HashMap;

use hd_common::PersonId;
use thiserror::Error;

pub use load::{load_pedigree, read_pedigree};

/// One member of the pedigree as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub mother: Option<PersonId>,
    pub father: Option<PersonId>,
    /// `None` when the trait was not observed.
    pub observed_trait: Option<bool>,
}

impl Person {
    pub fn founder(id: impl Into<PersonId>, observed_trait: Option<bool>) -> Self {
        Self {
            id: id.into(),
            mother: None,
            father: None,
            observed_trait,
        }
    }

    pub fn child(
        id: impl Into<PersonId>,
        mother: impl Into<PersonId>,
        father: impl Into<PersonId>,
        observed_trait: Option<bool>,
    ) -> Self {
        Self {
            id: id.into(),
            mother: Some(mother.into()),
            father: Some(father.into()),
            observed_trait,
        }
    }

    pub fn is_founder(&self) -> bool {
        self.mother.is_none() && self.father.is_none()
    }
}

/// Dense indices of a person's parents inside a [`Pedigree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parents {
    pub mother: usize,
    pub father: usize,
}

/// Errors raised while reading or validating a pedigree.
#[derive(Debug, Error)]
pub enum PedigreeError {
    #[error("row {row} has an empty name")]
    EmptyIdentifier { row: usize },

    #[error("duplicate person: {0}")]
    DuplicatePerson(PersonId),

    #[error("{person} has a {present} but no {missing}")]
    IncompleteParents {
        person: PersonId,
        present: &'static str,
        missing: &'static str,
    },

    #[error("{person} references unknown {role} {parent}")]
    UnknownParent {
        person: PersonId,
        role: &'static str,
        parent: PersonId,
    },

    #[error("parent graph contains a cycle through {0}")]
    Cycle(PersonId),

    #[error("{person} has invalid trait value {value:?} (expected 1, 0, or empty)")]
    InvalidTrait { person: String, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PedigreeError> for hd_common::Error {
    fn from(err: PedigreeError) -> Self {
        match err {
            PedigreeError::Io(e) => hd_common::Error::Io(e),
            PedigreeError::Csv(_) | PedigreeError::InvalidTrait { .. } => {
                hd_common::Error::PedigreeLoad(err.to_string())
            }
            other => hd_common::Error::Pedigree(other.to_string()),
        }
    }
}

/// A validated, immutable pedigree.
#[derive(Debug, Clone)]
pub struct Pedigree {
    people: Vec<Person>,
    index: HashMap<PersonId, usize>,
    parents: Vec<Option<Parents>>,
}

impl Pedigree {
    /// Validate `people` and build the pedigree. Input order is preserved.
    pub fn new(people: Vec<Person>) -> Result<Self, PedigreeError> {
        let mut index = HashMap::with_capacity(people.len());
        for (row, person) in people.iter().enumerate() {
            if person.id.as_str().is_empty() {
                return Err(PedigreeError::EmptyIdentifier { row: row + 1 });
            }
            if index.insert(person.id.clone(), row).is_some() {
                return Err(PedigreeError::DuplicatePerson(person.id.clone()));
            }
        }

        let mut parents = Vec::with_capacity(people.len());
        for person in &people {
            parents.push(resolve_parents(person, &index)?);
        }

        if let Some(node) = find_cycle(&parents) {
            return Err(PedigreeError::Cycle(people[node].id.clone()));
        }

        Ok(Self {
            people,
            index,
            parents,
        })
    }

    pub fn builder() -> PedigreeBuilder {
        PedigreeBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in input order. Positions are the dense indices used by
    /// inference.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.index_of(id).map(|i| &self.people[i])
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Parent indices of the person at `index`, `None` for founders.
    pub fn parents(&self, index: usize) -> Option<Parents> {
        self.parents.get(index).copied().flatten()
    }

    pub fn founders(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_founder())
    }

    /// Number of people whose trait is observed.
    pub fn observed_count(&self) -> usize {
        self.people
            .iter()
            .filter(|p| p.observed_trait.is_some())
            .count()
    }
}

fn resolve_parents(
    person: &Person,
    index: &HashMap<PersonId, usize>,
) -> Result<Option<Parents>, PedigreeError> {
    let lookup = |role: &'static str, parent: &PersonId| {
        index
            .get(parent)
            .copied()
            .ok_or_else(|| PedigreeError::UnknownParent {
                person: person.id.clone(),
                role,
                parent: parent.clone(),
            })
    };

    match (&person.mother, &person.father) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(PedigreeError::IncompleteParents {
            person: person.id.clone(),
            present: "mother",
            missing: "father",
        }),
        (None, Some(_)) => Err(PedigreeError::IncompleteParents {
            person: person.id.clone(),
            present: "father",
            missing: "mother",
        }),
        (Some(mother), Some(father)) => Ok(Some(Parents {
            mother: lookup("mother", mother)?,
            father: lookup("father", father)?,
        })),
    }
}

/// Return a node on a cycle of the parent graph, if there is one.
fn find_cycle(parents: &[Option<Parents>]) -> Option<usize> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unvisited,
        Active,
        Done,
    }

    let mut marks = vec![Mark::Unvisited; parents.len()];
    for start in 0..parents.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::Active;
        // (node, next parent slot to visit)
        let mut stack = vec![(start, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let (node, slot) = *frame;
            let next = parents[node].and_then(|p| match slot {
                0 => Some(p.mother),
                1 => Some(p.father),
                _ => None,
            });
            match next {
                Some(parent) => {
                    frame.1 += 1;
                    match marks[parent] {
                        Mark::Active => return Some(parent),
                        Mark::Unvisited => {
                            marks[parent] = Mark::Active;
                            stack.push((parent, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }
    None
}

/// Fluent construction of a [`Pedigree`].
#[derive(Debug, Default)]
pub struct PedigreeBuilder {
    people: Vec<Person>,
}

impl PedigreeBuilder {
    pub fn founder(mut self, id: &str, observed_trait: Option<bool>) -> Self {
        self.people.push(Person::founder(id, observed_trait));
        self
    }

    pub fn child(mut self, id: &str, mother: &str, father: &str, observed_trait: Option<bool>) -> Self {
        self.people
            .push(Person::child(id, mother, father, observed_trait));
        self
    }

    pub fn person(mut self, person: Person) -> Self {
        self.people.push(person);
        self
    }

    pub fn build(self) -> Result<Pedigree, PedigreeError> {
        Pedigree::new(self.people)
    }
}
