use crate::model::{Day, TimeOffRequest, MONDAY, SUNDAY};
use crate::scheduler::Schedule;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Charge un tableau JSON d'enregistrements.
pub fn load_json_records<T, P>(path: P) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records = serde_json::from_slice(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(records)
}

/// Import de congés depuis CSV: header `employee_id,week,days` (jours séparés par `;`)
pub fn import_time_off_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<TimeOffRequest>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let employee = rec.get(0).context("missing employee_id")?.trim();
        let week = rec.get(1).context("missing week")?.trim();
        let employee: u64 = employee
            .parse()
            .with_context(|| format!("invalid employee_id: {employee}"))?;
        let week = week
            .parse()
            .with_context(|| format!("invalid week for employee {employee}"))?;
        let days = match rec.get(2) {
            Some(raw) => parse_days(raw.trim())
                .with_context(|| format!("invalid days for employee {employee}"))?,
            None => Vec::new(),
        };
        out.push(TimeOffRequest::new(employee, week, days));
    }
    validate_time_off(&out)?;
    Ok(out)
}

fn parse_days(raw: &str) -> anyhow::Result<Vec<Day>> {
    raw.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .parse::<Day>()
                .with_context(|| format!("expected weekday number, got {chunk}"))
        })
        .collect()
}

/// Rejette les jours hors `[1,7]`.
pub fn validate_time_off(requests: &[TimeOffRequest]) -> anyhow::Result<()> {
    for req in requests {
        if let Some(day) = req.days.iter().find(|d| !(MONDAY..=SUNDAY).contains(*d)) {
            bail!(
                "time-off day {day} out of range for employee {} week {}",
                req.employee_id,
                req.week
            );
        }
    }
    Ok(())
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV: header `week,employee_id,days` (jours séparés par `;`)
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["week", "employee_id", "days"])?;
    for week in &schedule.weeks {
        let week_no = week.week.to_string();
        for a in &week.assignments {
            w.write_record([
                week_no.as_str(),
                a.employee_id.to_string().as_str(),
                join_days(&a.days, ";").as_str(),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// `[1, 3]` → `"1;3"`
pub fn join_days(days: &[Day], sep: &str) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
