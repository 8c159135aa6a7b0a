use crate::model::PersonName;
use chrono::NaiveDate;
use thiserror::Error;

/// Options de planification
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    /// Rejette (au lieu d'ignorer) les préassignations hors du mois cible.
    pub strict_preassignments: bool,
    /// Politique de calcul de `needs_weekends` dans le seed de reconduction.
    pub weekend_policy: WeekendNeedPolicy,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            strict_preassignments: false,
            weekend_policy: WeekendNeedPolicy::Recompute,
        }
    }
}

/// `needs_weekends` du mois suivant : recalculé (`weekends == 0`, rotation)
/// ou reconduit tel quel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendNeedPolicy {
    #[default]
    Recompute,
    Carry,
}

/// Affectation d'un jour : une personne, ou la sentinelle `UNASSIGNED`
/// quand aucune contrainte ne peut être satisfaite même après relâchement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayAssignment {
    Assigned(PersonName),
    Unassigned,
}

impl DayAssignment {
    pub fn person(&self) -> Option<&PersonName> {
        match self {
            DayAssignment::Assigned(name) => Some(name),
            DayAssignment::Unassigned => None,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        matches!(self, DayAssignment::Unassigned)
    }

    pub fn display(&self) -> &str {
        match self {
            DayAssignment::Assigned(name) => name.as_str(),
            DayAssignment::Unassigned => UNASSIGNED,
        }
    }
}

/// Sentinelle textuelle des jours non pourvus dans les exports.
pub const UNASSIGNED: &str = "UNASSIGNED";

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("duplicate preassignment on {date}: {first} and {second}")]
    Conflict {
        date: NaiveDate,
        first: PersonName,
        second: PersonName,
    },
    #[error("preassignments for {person} fall on consecutive days around {date}")]
    AdjacentPreassignment { date: NaiveDate, person: PersonName },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
