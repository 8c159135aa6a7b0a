use super::candidates::{candidates_escalating, WEEKDAY_RELAXED, WEEKDAY_STRICT};
use super::state::SchedulingState;
use super::types::DayAssignment;
use crate::calendar::MonthCalendar;
use crate::model::{Person, Roster};
use std::cmp::Reverse;

/// Remplit les jours restants dans l'ordre chronologique.
///
/// Palier strict puis relâché (le quota saute, pas les contraintes dures).
/// Choix : le moins de gardes ce mois, puis le moins le mois dernier, puis
/// le plus grand écart. Sans candidat même relâché, le jour est marqué
/// `UNASSIGNED` : issue terminale légitime, visible dans la sortie.
pub(super) fn assign_weekdays(state: &mut SchedulingState, roster: &Roster, calendar: &MonthCalendar) {
    let pool: Vec<&Person> = roster.people.iter().collect();

    for &date in calendar.days() {
        if state.is_scheduled(date) {
            continue;
        }

        let found = candidates_escalating(state, &pool, date, &[WEEKDAY_STRICT, WEEKDAY_RELAXED]);
        let chosen = found.into_iter().min_by_key(|p| {
            let q = state.quota(&p.name);
            (
                q.assigned,
                p.duties_last_month,
                Reverse(state.days_since_duty(&p.name, date)),
            )
        });

        match chosen {
            Some(person) => {
                state.commit(&person.name, date, calendar.is_weekend(date));
                tracing::debug!(date = %date, person = %person.name, "duty assigned");
            }
            None => {
                state.schedule.insert(date, DayAssignment::Unassigned);
                tracing::warn!(date = %date, "no candidate even after relaxation, day unfilled");
            }
        }
    }
}
