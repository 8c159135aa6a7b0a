use super::candidates::{candidates_escalating, WEEKEND_RELAXED, WEEKEND_STRICT};
use super::state::SchedulingState;
use crate::calendar::MonthCalendar;
use crate::model::{Person, Roster};
use std::cmp::Reverse;

/// Alloue les week-ends en premier : c'est la contrainte la plus serrée.
///
/// Seules les personnes `needs_weekends` sont candidates. Choix : le moins
/// de week-ends, puis le moins de gardes, puis le plus grand écart depuis la
/// dernière garde, puis le moins de gardes le mois dernier. Un jour sans
/// candidat reste vide pour la passe semaine / le repli `UNASSIGNED` ; il
/// n'est jamais forcé sur une personne hors week-end.
pub(super) fn assign_weekends(state: &mut SchedulingState, roster: &Roster, calendar: &MonthCalendar) {
    let pool: Vec<&Person> = roster.people.iter().filter(|p| p.needs_weekends).collect();

    for date in calendar.weekend_days() {
        if state.is_scheduled(date) {
            continue;
        }

        let found = candidates_escalating(state, &pool, date, &[WEEKEND_STRICT, WEEKEND_RELAXED]);
        let chosen = found.into_iter().min_by_key(|p| {
            let q = state.quota(&p.name);
            (
                q.weekends,
                q.assigned,
                Reverse(state.days_since_duty(&p.name, date)),
                p.duties_last_month,
            )
        });

        match chosen {
            Some(person) => {
                state.commit(&person.name, date, true);
                tracing::debug!(date = %date, person = %person.name, "weekend duty assigned");
            }
            None => {
                tracing::debug!(date = %date, "no weekend candidate, deferring");
            }
        }
    }
}
