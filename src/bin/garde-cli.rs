#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use garde::{
    io, render_summary, Month, MonthPlan, PlanOptions, Planner, Roster, TextSummary,
    WeekendNeedPolicy,
};
use std::str::FromStr;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification des tours de garde (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Planifier un mois complet
    Plan {
        /// Mois cible, ex. "November 2025" ou "2025-11"
        #[arg(long)]
        month: String,
        /// Fichier JSON de roster
        #[arg(long)]
        roster: String,
        /// Export JSON du planning
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV du planning
        #[arg(long)]
        out_csv: Option<String>,
        /// Fichier seed du mois suivant
        #[arg(long)]
        seed: Option<String>,
        /// Rejeter les préassignations hors du mois cible
        #[arg(long)]
        strict_preassign: bool,
        /// Reconduire `needs_weekends` tel quel dans le seed
        /// (par défaut : recalculé comme "0 week-end ce mois")
        #[arg(long)]
        carry_weekend_need: bool,
    },

    /// Valider un fichier de roster sans planifier
    Check {
        #[arg(long)]
        roster: String,
    },

    /// Écrire un roster d'exemple
    Init {
        #[arg(long, default_value = "roster.json")]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }
    #[cfg(not(feature = "logging"))]
    let _ = cli.log;

    let code = match cli.cmd {
        Commands::Plan {
            month,
            roster,
            out_json,
            out_csv,
            seed,
            strict_preassign,
            carry_weekend_need,
        } => {
            let month = Month::from_str(&month)?;
            let roster = io::load_roster_json(&roster)?;
            let options = PlanOptions {
                strict_preassignments: strict_preassign,
                weekend_policy: if carry_weekend_need {
                    WeekendNeedPolicy::Carry
                } else {
                    WeekendNeedPolicy::Recompute
                },
            };
            let plan = Planner::new(roster, month, options)?.plan()?;

            print!("{}", render_summary(&plan, &TextSummary));
            write_artifacts(&plan, out_json, out_csv, seed)?;

            // Code 2 = WARNING/INCOMPLETE
            if plan.unassigned_dates().is_empty() {
                0
            } else {
                2
            }
        }
        Commands::Check { roster } => {
            let roster = io::load_roster_json(&roster)?;
            println!("OK: {} personne(s)", roster.len());
            0
        }
        Commands::Init { out } => {
            let sample = sample_roster();
            io::export_seed_json(&out, &sample).with_context(|| format!("writing {out}"))?;
            println!("Roster d'exemple écrit dans {out}");
            0
        }
    };

    std::process::exit(code);
}

fn write_artifacts(
    plan: &MonthPlan,
    out_json: Option<String>,
    out_csv: Option<String>,
    seed: Option<String>,
) -> Result<()> {
    if let Some(path) = out_json {
        io::export_schedule_json(path, plan)?;
    }
    if let Some(path) = out_csv {
        io::export_schedule_csv(path, plan)?;
    }
    if let Some(path) = seed {
        let next = plan.rollover_seed();
        io::export_seed_json(&path, &next)?;
        println!("\nSeed {} écrit dans {path}", plan.month().next());
    }
    Ok(())
}

fn sample_roster() -> Roster {
    use garde::Person;
    Roster::new(vec![
        Person::new("Alice", true),
        Person::new("Bruno", true).with_duties_last_month(5),
        Person::new("Chloé", false).with_duties_last_month(7),
        Person::new("David", false),
    ])
}
