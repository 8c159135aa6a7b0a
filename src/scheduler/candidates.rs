use super::state::SchedulingState;
use crate::calendar::is_weekend;
use crate::model::Person;
use chrono::NaiveDate;

/// Contrainte d'éligibilité d'une personne pour une date.
///
/// Chaque palier de sélection est une liste déclarée de contraintes ; le
/// relâchement consiste à passer au palier suivant, jamais à en retirer une
/// à la volée. Disponibilité et adjacence ne sont relâchées dans aucun palier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// La date est préassignée à quelqu'un d'autre.
    PreassignedElsewhere,
    /// La personne est indisponible ce jour-là.
    Unavailable,
    /// Week-end alors que la personne n'en prend pas.
    WeekendIneligible,
    /// Garde la veille ou le lendemain (planning courant, deux sens).
    Adjacent,
    /// Quota de gardes du mois atteint.
    DutyQuotaReached,
    /// Déjà 2 week-ends ce mois.
    WeekendQuotaReached,
}

impl Constraint {
    /// `true` si la contrainte exclut `person` pour `date`.
    pub fn excludes(&self, state: &SchedulingState, person: &Person, date: NaiveDate) -> bool {
        match self {
            Constraint::PreassignedElsewhere => state
                .preassigned
                .get(&date)
                .is_some_and(|owner| owner != &person.name),
            Constraint::Unavailable => person.unavailable_dates.contains(&date),
            Constraint::WeekendIneligible => is_weekend(date) && !person.needs_weekends,
            Constraint::Adjacent => state.violates_adjacency(&person.name, date),
            Constraint::DutyQuotaReached => {
                let q = state.quota(&person.name);
                q.assigned >= q.target_duties
            }
            Constraint::WeekendQuotaReached => state.quota(&person.name).weekends >= 2,
        }
    }
}

/// Paliers d'allocation week-end : le relâchement abandonne uniquement le
/// plafond de 2 week-ends, en dernier recours.
pub const WEEKEND_STRICT: &[Constraint] = &[
    Constraint::Unavailable,
    Constraint::Adjacent,
    Constraint::WeekendQuotaReached,
];
pub const WEEKEND_RELAXED: &[Constraint] = &[Constraint::Unavailable, Constraint::Adjacent];

/// Paliers d'allocation semaine : le relâchement abandonne uniquement le
/// quota de gardes ; les contraintes dures restent.
pub const WEEKDAY_STRICT: &[Constraint] = &[
    Constraint::PreassignedElsewhere,
    Constraint::Unavailable,
    Constraint::WeekendIneligible,
    Constraint::Adjacent,
    Constraint::DutyQuotaReached,
];
pub const WEEKDAY_RELAXED: &[Constraint] = &[
    Constraint::PreassignedElsewhere,
    Constraint::Unavailable,
    Constraint::WeekendIneligible,
    Constraint::Adjacent,
];

/// Filtre pur : les personnes de `pool` qu'aucune contrainte du palier
/// n'exclut pour `date`, dans l'ordre du roster.
pub fn candidates<'a>(
    state: &SchedulingState,
    pool: &'a [&'a Person],
    date: NaiveDate,
    tier: &[Constraint],
) -> Vec<&'a Person> {
    pool.iter()
        .copied()
        .filter(|p| !tier.iter().any(|c| c.excludes(state, p, date)))
        .collect()
}

/// Première liste de candidats non vide en escaladant les paliers.
pub(super) fn candidates_escalating<'a>(
    state: &SchedulingState,
    pool: &'a [&'a Person],
    date: NaiveDate,
    tiers: &[&[Constraint]],
) -> Vec<&'a Person> {
    for tier in tiers {
        let found = candidates(state, pool, date, tier);
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}
