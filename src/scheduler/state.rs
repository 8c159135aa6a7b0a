use super::types::DayAssignment;
use crate::model::PersonName;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Compteurs de quota d'une personne, mis à jour à chaque affectation.
#[derive(Debug, Clone, Default)]
pub struct QuotaState {
    pub target_duties: u32,
    /// 0 ou 2 ; ≥3 toléré temporairement sous relâchement.
    pub target_weekends: u32,
    pub assigned: u32,
    pub weekends: u32,
    pub last_assigned: Option<NaiveDate>,
}

/// État de planification : le planning en construction et les compteurs,
/// mutés strictement dans l'ordre d'allocation (aucun état ambiant).
#[derive(Debug, Default)]
pub struct SchedulingState {
    pub schedule: BTreeMap<NaiveDate, DayAssignment>,
    pub quotas: BTreeMap<PersonName, QuotaState>,
    /// Propriété des dates préassignées, figée avant l'allocation.
    pub preassigned: BTreeMap<NaiveDate, PersonName>,
}

impl SchedulingState {
    /// Unique chemin de mutation : fixe le jour et met à jour les compteurs.
    pub fn commit(&mut self, person: &PersonName, date: NaiveDate, is_weekend: bool) {
        self.schedule
            .insert(date, DayAssignment::Assigned(person.clone()));
        let quota = self.quotas.entry(person.clone()).or_default();
        quota.assigned += 1;
        if is_weekend {
            quota.weekends += 1;
        }
        quota.last_assigned = Some(date);
    }

    pub fn quota(&self, person: &PersonName) -> &QuotaState {
        // Toutes les personnes du roster sont insérées par le Quota Planner.
        &self.quotas[person]
    }

    pub fn assignee(&self, date: NaiveDate) -> Option<&PersonName> {
        self.schedule.get(&date).and_then(|a| a.person())
    }

    pub fn is_scheduled(&self, date: NaiveDate) -> bool {
        self.schedule.contains_key(&date)
    }

    /// Jours écoulés depuis la dernière garde ; "jamais affecté" vaut
    /// l'infini pour le classement (plus grand écart = mieux).
    pub fn days_since_duty(&self, person: &PersonName, date: NaiveDate) -> i64 {
        match self.quotas.get(person).and_then(|q| q.last_assigned) {
            Some(last) => (date - last).num_days(),
            None => i64::MAX,
        }
    }

    /// Garde la veille ou le lendemain ? Vérifié dans les deux sens contre
    /// le planning tel que rempli à cet instant.
    pub fn violates_adjacency(&self, person: &PersonName, date: NaiveDate) -> bool {
        let prev = date - Duration::days(1);
        let next = date + Duration::days(1);
        self.assignee(prev) == Some(person) || self.assignee(next) == Some(person)
    }
}
