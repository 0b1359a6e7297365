use crate::model::{Dataset, Day, EmployeeId, Week, MONDAY};
use crate::scheduler::Schedule;
use anyhow::{Context, Result};
use chrono::Weekday;
use std::collections::BTreeSet;

/// Texte affiché pour une semaine sans affectation.
pub const NO_SHIFT: &str = "N/A";

/// Une ligne du rapport : semaine + jours en toutes lettres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekLine {
    pub week: Week,
    pub days: String,
}

/// Vue du planning pour un employé.
#[derive(Debug, Clone)]
pub struct EmployeeReport {
    pub employee_id: EmployeeId,
    pub name: Option<String>,
    pub schedule: Vec<WeekLine>,
    pub time_off: Vec<WeekLine>,
}

/// Permet de customiser le rendu du rapport (texte, HTML, etc.).
pub trait ReportRenderer {
    fn render(&self, report: &EmployeeReport) -> String;
}

/// Rendu texte brut, une ligne par semaine.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, report: &EmployeeReport) -> String {
        let mut out = match &report.name {
            Some(name) => format!("Employee {} ({name})\n", report.employee_id),
            None => format!("Employee {}\n", report.employee_id),
        };
        for line in &report.schedule {
            out.push_str(&format!("Week {}: {}\n", line.week, line.days));
        }
        if !report.time_off.is_empty() {
            out.push_str("Time off:\n");
            for line in &report.time_off {
                out.push_str(&format!("Week {}: {}\n", line.week, line.days));
            }
        }
        out
    }
}

/// `1` → `Weekday::Mon` … `7` → `Weekday::Sun`.
pub fn weekday(day: Day) -> Option<Weekday> {
    Weekday::try_from(day.checked_sub(MONDAY)?).ok()
}

/// Nom anglais complet du jour (`1` → `Monday`).
pub fn day_name(day: Day) -> Option<&'static str> {
    let name = match weekday(day)? {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    Some(name)
}

/// `[1, 3]` → `"Monday, Wednesday"` ; les valeurs hors semaine sont ignorées.
pub fn describe_days(days: &[Day]) -> String {
    days.iter()
        .filter_map(|d| day_name(*d))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prépare la vue d'un employé ; `with_time_off` ajoute ses congés fusionnés
/// pour chaque semaine du planning où il en a demandé.
pub fn prepare_report(
    dataset: &Dataset,
    schedule: &Schedule,
    employee: EmployeeId,
    with_time_off: bool,
) -> Result<EmployeeReport> {
    let person = dataset
        .find_employee(employee)
        .with_context(|| format!("unknown employee: {employee}"))?;

    let lines = schedule
        .weeks
        .iter()
        .map(|w| {
            let days = w.days_for(employee).unwrap_or_default();
            let days = if days.is_empty() {
                NO_SHIFT.to_string()
            } else {
                describe_days(days)
            };
            WeekLine { week: w.week, days }
        })
        .collect();

    let mut time_off = Vec::new();
    if with_time_off {
        for w in &schedule.weeks {
            let mut requests = dataset
                .time_off
                .iter()
                .filter(|r| r.employee_id == employee && r.week == w.week)
                .peekable();
            if requests.peek().is_none() {
                continue;
            }
            let merged: BTreeSet<Day> = requests.flat_map(|r| r.days.iter().copied()).collect();
            let merged: Vec<Day> = merged.into_iter().collect();
            time_off.push(WeekLine {
                week: w.week,
                days: describe_days(&merged),
            });
        }
    }

    Ok(EmployeeReport {
        employee_id: person.id,
        name: person.name.clone(),
        schedule: lines,
        time_off,
    })
}
