use super::state::{QuotaState, SchedulingState};
use crate::calendar::MonthCalendar;
use crate::model::Roster;

/// Calcule `target_duties` et `target_weekends` pour chaque personne.
///
/// Base équitable : `total_jours div n` ; le reste est distribué en priorité
/// aux personnes ayant le plus de gardes le mois dernier, puis celles qui
/// dépassaient déjà la base perdent un jour (plancher : la base). Les
/// personnes `needs_weekends` visent 2 week-ends, comptés dans le total.
pub(super) fn compute_quotas(state: &mut SchedulingState, roster: &Roster, calendar: &MonthCalendar) {
    let total_days = calendar.days().len() as u32;
    let total_people = roster.len() as u32;
    let base_quota = total_days / total_people;
    let extra = (total_days % total_people) as usize;

    // Tri stable décroissant sur le mois précédent ; l'ordre du roster
    // départage les égalités.
    let mut by_last_month: Vec<usize> = (0..roster.people.len()).collect();
    by_last_month.sort_by_key(|&i| std::cmp::Reverse(roster.people[i].duties_last_month));

    let mut targets = vec![0u32; roster.people.len()];
    for (rank, &i) in by_last_month.iter().enumerate() {
        let person = &roster.people[i];
        let mut quota = base_quota + u32::from(rank < extra);
        if person.duties_last_month > base_quota {
            quota = (quota.saturating_sub(1)).max(base_quota);
        }
        targets[i] = quota;
    }

    for (i, person) in roster.people.iter().enumerate() {
        let (target_duties, target_weekends) = if person.needs_weekends {
            (targets[i].max(2), 2)
        } else {
            (targets[i], 0)
        };
        state.quotas.insert(
            person.name.clone(),
            QuotaState {
                target_duties,
                target_weekends,
                ..QuotaState::default()
            },
        );
    }
}
