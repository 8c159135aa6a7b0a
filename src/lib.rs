#![forbid(unsafe_code)]
//! Garde — bibliothèque de planification des tours de garde mensuels (sans BD).
//!
//! - Entrée/sortie fichiers (JSON/CSV).
//! - Quotas équitables pondérés par le mois précédent.
//! - Affectation gloutonne jour par jour, relâchement progressif des contraintes.
//! - Passe de réparation des week-ends "orphelins" (exactement 1 week-end).
//! - Dates naïves (calendrier civil) ; parsing ISO `YYYY-MM-DD`.

pub mod calendar;
pub mod io;
pub mod model;
pub mod report;
pub mod scheduler;
pub mod storage;

pub use calendar::{Month, MonthCalendar};
pub use model::{Person, PersonName, Roster};
pub use report::{render_summary, SummaryRenderer, TextSummary};
pub use scheduler::{
    DayAssignment, MonthPlan, PersonSummary, PlanError, PlanOptions, Planner, WeekendNeedPolicy,
};
pub use storage::{JsonStorage, Storage};
