use super::state::SchedulingState;
use super::types::{PlanError, PlanOptions};
use crate::calendar::MonthCalendar;
use crate::model::Roster;

/// Fige les préassignations dans le planning avant toute allocation.
///
/// Une date revendiquée par deux personnes est une erreur fatale
/// (`PlanError::Conflict`) : on ne devine pas laquelle prime. Les dates hors
/// du mois cible sont ignorées, ou rejetées sous `strict_preassignments`.
pub(super) fn apply_preassignments(
    state: &mut SchedulingState,
    roster: &Roster,
    calendar: &MonthCalendar,
    options: PlanOptions,
) -> Result<(), PlanError> {
    for person in &roster.people {
        for &date in &person.preassigned_dates {
            if !calendar.month().contains(date) {
                if options.strict_preassignments {
                    return Err(PlanError::InvalidInput(format!(
                        "preassigned date {date} for {} is outside {}",
                        person.name,
                        calendar.month()
                    )));
                }
                continue;
            }
            if let Some(holder) = state.preassigned.get(&date) {
                return Err(PlanError::Conflict {
                    date,
                    first: holder.clone(),
                    second: person.name.clone(),
                });
            }
            // Deux jours consécutifs préassignés à la même personne : on
            // refuse en entrée plutôt que de produire un planning invalide.
            if state.violates_adjacency(&person.name, date) {
                return Err(PlanError::AdjacentPreassignment {
                    date,
                    person: person.name.clone(),
                });
            }
            state.preassigned.insert(date, person.name.clone());
            state.commit(&person.name, date, calendar.is_weekend(date));
            tracing::debug!(date = %date, person = %person.name, "preassigned duty");
        }
    }
    Ok(())
}
