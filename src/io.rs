use crate::model::Roster;
use crate::scheduler::MonthPlan;
use anyhow::Context;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Charge et valide un roster depuis le JSON d'entrée
/// (`{"people": [{name, needs_weekends, unavailable_dates, ...}]}`).
pub fn load_roster_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let roster: Roster = serde_json::from_slice(&data)
        .with_context(|| format!("parsing roster {}", path.display()))?;
    roster.validate()?;
    Ok(roster)
}

#[derive(Debug, Serialize)]
struct ScheduleRecord<'a> {
    date: chrono::NaiveDate,
    weekend: bool,
    assignee: &'a str,
}

/// Export JSON du planning : liste ordonnée `{date, weekend, assignee}`,
/// sentinelle `"UNASSIGNED"` pour les jours non pourvus.
pub fn export_schedule_json<P: AsRef<Path>>(path: P, plan: &MonthPlan) -> anyhow::Result<()> {
    let records: Vec<ScheduleRecord<'_>> = plan
        .schedule()
        .map(|(date, assignment)| ScheduleRecord {
            date,
            weekend: plan.calendar().is_weekend(date),
            assignee: assignment.display(),
        })
        .collect();
    let s = serde_json::to_string_pretty(&records)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning : header `date,weekend,assignee`.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, plan: &MonthPlan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "weekend", "assignee"])?;
    for (date, assignment) in plan.schedule() {
        let weekend = plan.calendar().is_weekend(date);
        w.write_record([
            date.to_string().as_str(),
            if weekend { "true" } else { "false" },
            assignment.display(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du seed de reconduction (même forme que le JSON d'entrée,
/// consommable tel quel pour le mois suivant).
pub fn export_seed_json<P: AsRef<Path>>(path: P, seed: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(seed)?;
    fs::write(path, s)?;
    Ok(())
}
