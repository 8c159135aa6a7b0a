use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::scheduler::PlanError;

/// Identifiant fort pour Person (le nom est la clé unique du roster).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Personne (membre du tour de garde)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: PersonName,
    pub needs_weekends: bool,
    #[serde(default)]
    pub unavailable_dates: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub duties_last_month: u32,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub preassigned_dates: BTreeSet<NaiveDate>,
}

impl Person {
    pub fn new<N: Into<String>>(name: N, needs_weekends: bool) -> Self {
        Self {
            name: PersonName::new(name.into()),
            needs_weekends,
            unavailable_dates: BTreeSet::new(),
            duties_last_month: 0,
            preassigned_dates: BTreeSet::new(),
        }
    }

    pub fn with_duties_last_month(mut self, duties: u32) -> Self {
        self.duties_last_month = duties;
        self
    }

    pub fn unavailable_on(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.unavailable_dates.extend(dates);
        self
    }

    pub fn preassigned_on(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.preassigned_dates.extend(dates);
        self
    }
}

/// Roster complet : l'ordre des personnes est significatif (départage des
/// quotas et ordre de sortie du seed de reconduction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Roster {
    pub people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn find_person<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.name.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Valide le roster avant toute planification : non vide, noms uniques.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.people.is_empty() {
            return Err(PlanError::InvalidInput("empty roster".into()));
        }
        let mut seen = HashSet::new();
        for p in &self.people {
            if p.name.as_str().trim().is_empty() {
                return Err(PlanError::InvalidInput("person with empty name".into()));
            }
            if !seen.insert(p.name.as_str()) {
                return Err(PlanError::InvalidInput(format!(
                    "duplicate person name: {}",
                    p.name
                )));
            }
        }
        Ok(())
    }
}
