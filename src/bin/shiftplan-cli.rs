#![forbid(unsafe_code)]
use anyhow::Result;
use shiftplan::{
    io,
    model::EmployeeId,
    report::{prepare_report, ReportRenderer, TextReport},
    rules::{self, RuleKind},
    scheduler::{Scheduler, Strategy},
    storage::{JsonStorage, Storage},
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning hebdomadaire (effectif minimal par jour)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Répertoire contenant employees.json, rule-definitions.json,
    /// shift-rules.json et time-off-requests.json
    #[arg(long, global = true, default_value = "data")]
    data_dir: String,

    /// Première semaine (incluse)
    #[arg(long, global = true, default_value_t = 23)]
    start_week: u32,

    /// Dernière semaine (incluse)
    #[arg(long, global = true, default_value_t = 26)]
    end_week: u32,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning
    Schedule {
        /// ignore-time-off | respect-time-off
        #[arg(long, default_value = "ignore-time-off")]
        strategy: Strategy,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Écrire schedule.json dans le répertoire de données
        #[arg(long)]
        save: bool,
    },

    /// Afficher le planning d'un employé
    Show {
        #[arg(long)]
        employee: u64,
        /// Tenir compte des congés (et les afficher)
        #[arg(long)]
        respect_time_off: bool,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: Option<String>,
    },

    /// Vérifier que chaque jour atteint l'effectif minimal
    Check {
        #[arg(long, default_value = "respect-time-off")]
        strategy: Strategy,
    },

    /// Lister les règles et le seuil retenu
    Rules,

    /// Lister les congés compilés pour la plage de semaines
    TimeOff,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.data_dir)?;
    let scheduler = Scheduler::new(storage.load()?);
    let (start, end) = (cli.start_week, cli.end_week);

    let code = match cli.cmd {
        Commands::Schedule {
            strategy,
            out_json,
            out_csv,
            save,
        } => {
            let schedule = scheduler.schedule(strategy, start, end)?;
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            if save {
                storage.save_schedule(&schedule)?;
            }
            // impression compacte
            for week in &schedule.weeks {
                for a in &week.assignments {
                    let days = if a.days.is_empty() {
                        "-".to_string()
                    } else {
                        io::join_days(&a.days, ",")
                    };
                    println!("{} | {} | {}", week.week, a.employee_id, days);
                }
            }
            0
        }
        Commands::Show {
            employee,
            respect_time_off,
            out,
        } => {
            let strategy = if respect_time_off {
                Strategy::RespectTimeOff
            } else {
                Strategy::IgnoreTimeOff
            };
            let schedule = scheduler.schedule(strategy, start, end)?;
            let report = prepare_report(
                scheduler.dataset(),
                &schedule,
                EmployeeId::new(employee),
                respect_time_off,
            )?;
            let text = TextReport.render(&report);
            match out {
                Some(path) => std::fs::write(path, text)?,
                None => print!("{text}"),
            }
            0
        }
        Commands::Check { strategy } => {
            let schedule = scheduler.schedule(strategy, start, end)?;
            let gaps = scheduler.understaffed_days(&schedule);
            if gaps.is_empty() {
                println!("OK: every day staffed");
                0
            } else {
                eprintln!("Found {} understaffed day(s)", gaps.len());
                for g in &gaps {
                    eprintln!(
                        "week {} day {}: {}/{}",
                        g.week, g.day, g.staffed, g.required
                    );
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Rules => {
            let dataset = scheduler.dataset();
            for rule in &dataset.rules {
                let value = rules::shift_rule_value(&dataset.shift_rules, rule.id)
                    .map_or_else(|| "-".to_string(), |v| v.to_string());
                let note = match rule.kind() {
                    RuleKind::EmployeesPerShift => "",
                    RuleKind::MaxShifts | RuleKind::MinShifts => " (not enforced)",
                    RuleKind::Other(_) => " (unknown)",
                };
                println!("{} | {} | {}{}", rule.id.get(), rule.label, value, note);
            }
            println!(
                "{}: {}",
                RuleKind::EmployeesPerShift.label(),
                scheduler.min_employees_per_shift()
            );
            0
        }
        Commands::TimeOff => {
            let index = scheduler.time_off_index(start, end)?;
            for week in index.weeks() {
                for (id, days) in index.employees_in(week) {
                    let days: Vec<_> = days.iter().copied().collect();
                    println!("{} | {} | {}", week, id, io::join_days(&days, ","));
                }
            }
            0
        }
    };

    std::process::exit(code);
}
