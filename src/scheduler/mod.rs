mod candidates;
mod preassign;
mod quota;
mod repair;
mod state;
mod types;
mod weekday;
mod weekend;

pub use candidates::{
    candidates, Constraint, WEEKDAY_RELAXED, WEEKDAY_STRICT, WEEKEND_RELAXED, WEEKEND_STRICT,
};
pub use state::{QuotaState, SchedulingState};
pub use types::{DayAssignment, PlanError, PlanOptions, WeekendNeedPolicy, UNASSIGNED};

use crate::calendar::{Month, MonthCalendar};
use crate::model::{Person, PersonName, Roster};
use chrono::NaiveDate;

/// Planner : encapsule un roster et un mois cible, produit un `MonthPlan`.
///
/// Calcul borné, séquentiel et déterministe : quotas, préassignations,
/// week-ends, semaine, puis réparation des week-ends orphelins. Les
/// départages dépendent de l'état muté par les décisions strictement
/// antérieures ; l'ordre d'itération fait partie du contrat.
#[derive(Debug)]
pub struct Planner {
    roster: Roster,
    calendar: MonthCalendar,
    options: PlanOptions,
}

impl Planner {
    pub fn new(roster: Roster, month: Month, options: PlanOptions) -> Result<Self, PlanError> {
        roster.validate()?;
        Ok(Self {
            roster,
            calendar: MonthCalendar::build(month),
            options,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn calendar(&self) -> &MonthCalendar {
        &self.calendar
    }

    /// Déroule la planification complète du mois.
    pub fn plan(self) -> Result<MonthPlan, PlanError> {
        let mut state = SchedulingState::default();

        quota::compute_quotas(&mut state, &self.roster, &self.calendar);
        preassign::apply_preassignments(&mut state, &self.roster, &self.calendar, self.options)?;
        weekend::assign_weekends(&mut state, &self.roster, &self.calendar);
        weekday::assign_weekdays(&mut state, &self.roster, &self.calendar);
        let repairs = repair::repair_single_weekends(&mut state, &self.roster, &self.calendar);
        if repairs > 0 {
            tracing::debug!(repairs, "weekend repair pass applied");
        }

        Ok(MonthPlan {
            roster: self.roster,
            calendar: self.calendar,
            options: self.options,
            state,
        })
    }
}

/// Résumé par personne, dans l'ordre du roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSummary {
    pub name: PersonName,
    pub assigned: u32,
    pub weekends: u32,
    pub target_duties: u32,
}

/// Résultat d'une planification : planning complet du mois + compteurs.
#[derive(Debug)]
pub struct MonthPlan {
    roster: Roster,
    calendar: MonthCalendar,
    options: PlanOptions,
    state: SchedulingState,
}

impl MonthPlan {
    pub fn month(&self) -> Month {
        self.calendar.month()
    }

    pub fn calendar(&self) -> &MonthCalendar {
        &self.calendar
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Paires ordonnées (date, affectation) couvrant tout le mois.
    pub fn schedule(&self) -> impl Iterator<Item = (NaiveDate, &DayAssignment)> + '_ {
        self.calendar
            .days()
            .iter()
            .map(|d| (*d, &self.state.schedule[d]))
    }

    pub fn assignment(&self, date: NaiveDate) -> Option<&DayAssignment> {
        self.state.schedule.get(&date)
    }

    pub fn assignee(&self, date: NaiveDate) -> Option<&PersonName> {
        self.state.assignee(date)
    }

    /// Jours restés sans personne après épuisement des relâchements.
    pub fn unassigned_dates(&self) -> Vec<NaiveDate> {
        self.calendar
            .days()
            .iter()
            .copied()
            .filter(|d| self.state.schedule[d].is_unassigned())
            .collect()
    }

    /// Personnes `needs_weekends` restées à exactement 1 week-end.
    pub fn single_weekend_people(&self) -> Vec<&PersonName> {
        self.roster
            .people
            .iter()
            .filter(|p| p.needs_weekends && self.state.quota(&p.name).weekends == 1)
            .map(|p| &p.name)
            .collect()
    }

    pub fn quota(&self, name: &PersonName) -> &QuotaState {
        self.state.quota(name)
    }

    /// Résumé (gardes, week-ends, quota) par personne, ordre du roster.
    pub fn summary(&self) -> Vec<PersonSummary> {
        self.roster
            .people
            .iter()
            .map(|p| {
                let q = self.state.quota(&p.name);
                PersonSummary {
                    name: p.name.clone(),
                    assigned: q.assigned,
                    weekends: q.weekends,
                    target_duties: q.target_duties,
                }
            })
            .collect()
    }

    /// Seed du mois suivant : `duties_last_month` reprend les gardes de ce
    /// mois, disponibilités remises à zéro, `needs_weekends` selon la
    /// politique. L'ordre du roster est conservé (sortie stable).
    pub fn rollover_seed(&self) -> Roster {
        let people = self
            .roster
            .people
            .iter()
            .map(|p| {
                let q = self.state.quota(&p.name);
                let needs_weekends = match self.options.weekend_policy {
                    WeekendNeedPolicy::Recompute => q.weekends == 0,
                    WeekendNeedPolicy::Carry => p.needs_weekends,
                };
                Person {
                    name: p.name.clone(),
                    needs_weekends,
                    unavailable_dates: Default::default(),
                    duties_last_month: q.assigned,
                    preassigned_dates: Default::default(),
                }
            })
            .collect();
        Roster::new(people)
    }
}
