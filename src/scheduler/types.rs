use crate::model::{Day, Employee, EmployeeId, Week, WeekRange};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stratégie d'affectation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Rotation en blocs continus, sans tenir compte des congés.
    IgnoreTimeOff,
    /// Remplissage en trois passes, congés respectés.
    RespectTimeOff,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IgnoreTimeOff => "ignore-time-off",
            Self::RespectTimeOff => "respect-time-off",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore-time-off" | "1" => Ok(Self::IgnoreTimeOff),
            "respect-time-off" | "2" => Ok(Self::RespectTimeOff),
            other => Err(SchedError::UnknownStrategy(other.to_string())),
        }
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid week range: {start} is after {end}")]
    InvalidWeekRange { start: Week, end: Week },
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// État de travail : semaine → employé → jours affectés.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekAssignment {
    weeks: BTreeMap<Week, BTreeMap<EmployeeId, BTreeSet<Day>>>,
}

impl WeekAssignment {
    /// Chaque employé reçoit un ensemble vide pour chaque semaine de la plage.
    pub fn empty(employees: &[Employee], range: WeekRange) -> Self {
        let weeks = range
            .weeks()
            .map(|week| {
                let per_employee: BTreeMap<EmployeeId, BTreeSet<Day>> = employees
                    .iter()
                    .map(|e| (e.id, BTreeSet::new()))
                    .collect();
                (week, per_employee)
            })
            .collect();
        Self { weeks }
    }

    pub fn days(&self, week: Week, employee: EmployeeId) -> Option<&BTreeSet<Day>> {
        self.weeks.get(&week).and_then(|per_employee| per_employee.get(&employee))
    }

    /// Nombre de jours affectés à l'employé sur la semaine.
    pub fn shift_count(&self, week: Week, employee: EmployeeId) -> usize {
        self.days(week, employee).map_or(0, BTreeSet::len)
    }

    /// Retourne `false` si le jour était déjà affecté.
    pub(crate) fn assign(&mut self, week: Week, employee: EmployeeId, day: Day) -> bool {
        self.weeks
            .entry(week)
            .or_default()
            .entry(employee)
            .or_default()
            .insert(day)
    }
}

/// Jours affectés à un employé pour une semaine (triés).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSchedule {
    #[serde(alias = "employee_id")]
    pub employee_id: EmployeeId,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub week: Week,
    pub assignments: Vec<EmployeeSchedule>,
}

impl WeekSchedule {
    pub fn days_for(&self, employee: EmployeeId) -> Option<&[Day]> {
        self.assignments
            .iter()
            .find(|a| a.employee_id == employee)
            .map(|a| a.days.as_slice())
    }

    /// Nombre d'employés affectés au jour donné.
    pub fn staffed(&self, day: Day) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.days.contains(&day))
            .count()
    }
}

/// Planning final, une entrée par semaine dans l'ordre croissant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub weeks: Vec<WeekSchedule>,
}

impl Schedule {
    pub fn week(&self, week: Week) -> Option<&WeekSchedule> {
        self.weeks.iter().find(|w| w.week == week)
    }

    pub fn days_for(&self, week: Week, employee: EmployeeId) -> Option<&[Day]> {
        self.week(week).and_then(|w| w.days_for(employee))
    }
}
