use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Numéro de semaine (tel que fourni par l'appelant).
pub type Week = u32;

/// Jour de semaine : 1 = lundi … 7 = dimanche.
pub type Day = u8;

pub const MONDAY: Day = 1;
pub const SUNDAY: Day = 7;
pub const DAYS_PER_WEEK: u8 = 7;

/// Identifiant fort pour Employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifiant fort pour Rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RuleId(u64);

impl RuleId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Employé ; l'ordre dans la liste fournie définit l'ordre du round-robin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Employee {
    pub fn new(id: u64) -> Self {
        Self {
            id: EmployeeId::new(id),
            name: None,
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Définition de règle : `label` porte le nom symbolique (ex. `EMPLOYEES_PER_SHIFT`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    #[serde(alias = "value")]
    pub label: String,
}

impl Rule {
    pub fn new<L: Into<String>>(id: u64, label: L) -> Self {
        Self {
            id: RuleId::new(id),
            label: label.into(),
        }
    }
}

/// Valeur numérique rattachée à une règle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRule {
    #[serde(alias = "rule_id")]
    pub rule_id: RuleId,
    #[serde(alias = "value")]
    pub numeric_value: u32,
}

impl ShiftRule {
    pub fn new(rule_id: u64, numeric_value: u32) -> Self {
        Self {
            rule_id: RuleId::new(rule_id),
            numeric_value,
        }
    }
}

/// Demande de congé d'un employé pour une semaine donnée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    #[serde(alias = "employee_id")]
    pub employee_id: EmployeeId,
    pub week: Week,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl TimeOffRequest {
    pub fn new(employee_id: u64, week: Week, days: Vec<Day>) -> Self {
        Self {
            employee_id: EmployeeId::new(employee_id),
            week,
            days,
        }
    }
}

/// Plage de semaines inclusive `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeekRange")]
pub struct WeekRange {
    start: Week,
    end: Week,
}

impl WeekRange {
    /// Crée une plage en validant que `start <= end`.
    pub fn new(start: Week, end: Week) -> Result<Self, String> {
        if start > end {
            return Err("start week must not be after end week".to_string());
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Week {
        self.start
    }
    pub fn end(&self) -> Week {
        self.end
    }

    pub fn contains(&self, week: Week) -> bool {
        (self.start..=self.end).contains(&week)
    }

    pub fn weeks(&self) -> RangeInclusive<Week> {
        self.start..=self.end
    }

    /// Nombre de semaines couvertes.
    pub fn week_count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }
}

#[derive(Deserialize)]
struct RawWeekRange {
    start: Week,
    end: Week,
}

impl TryFrom<RawWeekRange> for WeekRange {
    type Error = String;

    fn try_from(raw: RawWeekRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Les quatre jeux de données d'une invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub rules: Vec<Rule>,
    pub shift_rules: Vec<ShiftRule>,
    pub time_off: Vec<TimeOffRequest>,
}

impl Dataset {
    pub fn find_employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }
}

/// Jours de semaine dans l'ordre lundi → dimanche.
pub fn weekdays() -> RangeInclusive<Day> {
    MONDAY..=SUNDAY
}
