use super::state::SchedulingState;
use super::types::DayAssignment;
use crate::calendar::MonthCalendar;
use crate::model::{PersonName, Roster};
use chrono::NaiveDate;

/// Passe de réparation : résorbe les "exactement 1 week-end".
///
/// La politique est 0 ou 2 week-ends ; 1 seul est un dernier recours. Pour
/// chaque personne concernée (instantané pris avant toute réparation), on
/// parcourt les week-ends en ordre chronologique et on applique la première
/// réparation possible : combler un jour `UNASSIGNED`, sinon échanger avec
/// un détenteur à ≥3 week-ends. Les dates préassignées ne sont ni lues pour
/// échange ni modifiées. Renvoie le nombre de réparations effectuées.
pub(super) fn repair_single_weekends(
    state: &mut SchedulingState,
    roster: &Roster,
    calendar: &MonthCalendar,
) -> usize {
    let stranded: Vec<PersonName> = roster
        .people
        .iter()
        .filter(|p| p.needs_weekends && state.quota(&p.name).weekends == 1)
        .map(|p| p.name.clone())
        .collect();

    let mut repairs = 0;
    for name in stranded {
        for date in calendar.weekend_days() {
            if state.preassigned.contains_key(&date) {
                continue;
            }
            if try_repair(state, roster, &name, date) {
                repairs += 1;
                break;
            }
        }
    }
    repairs
}

fn try_repair(
    state: &mut SchedulingState,
    roster: &Roster,
    name: &PersonName,
    date: NaiveDate,
) -> bool {
    let person = match roster.find_person(name.as_str()) {
        Some(p) => p,
        None => return false,
    };
    if person.unavailable_dates.contains(&date) || state.violates_adjacency(name, date) {
        return false;
    }

    match state.schedule.get(&date) {
        Some(DayAssignment::Unassigned) => {
            state.commit(name, date, true);
            tracing::debug!(date = %date, person = %name, "repair: filled open weekend");
            true
        }
        Some(DayAssignment::Assigned(holder)) if holder != name => {
            let holder = holder.clone();
            // Échange compensé : le total de gardes reste inchangé.
            match state.quotas.get_mut(&holder) {
                Some(q) if q.weekends >= 3 => {
                    q.assigned -= 1;
                    q.weekends -= 1;
                }
                _ => return false,
            }
            state.commit(name, date, true);
            tracing::debug!(
                date = %date, person = %name, from = %holder,
                "repair: swapped over-assigned weekend"
            );
            true
        }
        _ => false,
    }
}
