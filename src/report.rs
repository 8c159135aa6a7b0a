use crate::scheduler::MonthPlan;
use std::fmt::Write;

/// Permet de customiser le rendu du bilan (texte, mail, etc.).
pub trait SummaryRenderer {
    fn render(&self, plan: &MonthPlan) -> String;
}

/// Gabarit texte simple : planning jour par jour puis bilan par personne.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSummary;

impl SummaryRenderer for TextSummary {
    fn render(&self, plan: &MonthPlan) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Planning {}", plan.month());
        for (date, assignment) in plan.schedule() {
            let tag = if plan.calendar().is_weekend(date) { " (WE)" } else { "" };
            let _ = writeln!(out, "{date}{tag} -> {}", assignment.display());
        }

        let _ = writeln!(out, "\nBilan :");
        for s in plan.summary() {
            let _ = writeln!(
                out,
                "{} : gardes {} / quota {}, week-ends {}",
                s.name, s.assigned, s.target_duties, s.weekends
            );
        }

        let unfilled = plan.unassigned_dates();
        if !unfilled.is_empty() {
            let _ = writeln!(out, "\nAttention : {} jour(s) non pourvu(s)", unfilled.len());
            for d in unfilled {
                let _ = writeln!(out, "  {d}");
            }
        }
        let stranded = plan.single_weekend_people();
        if !stranded.is_empty() {
            let names: Vec<&str> = stranded.iter().map(|n| n.as_str()).collect();
            let _ = writeln!(
                out,
                "\nWeek-end orphelin (1 seul) : {}",
                names.join(", ")
            );
        }
        out
    }
}

/// Rend le bilan d'un plan avec le renderer fourni.
pub fn render_summary(plan: &MonthPlan, renderer: &dyn SummaryRenderer) -> String {
    renderer.render(plan)
}
