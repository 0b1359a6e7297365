mod assignment;
mod coverage;
mod format;
mod time_off_aware;
mod types;
mod util;

pub use assignment::assign_ignoring_time_off;
pub use coverage::{understaffed_days, Understaffed};
pub use format::format_schedule;
pub use time_off_aware::assign_respecting_time_off;
pub use types::{EmployeeSchedule, SchedError, Schedule, Strategy, WeekAssignment, WeekSchedule};

use crate::model::{Dataset, Week, WeekRange};
use crate::rules;
use crate::time_off::TimeOffIndex;

/// Scheduler : encapsule les données chargées pour une invocation
#[derive(Debug, Default)]
pub struct Scheduler {
    dataset: Dataset,
}

impl Scheduler {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Valide la plage de semaines demandée
    pub fn week_range(&self, start: Week, end: Week) -> Result<WeekRange, SchedError> {
        WeekRange::new(start, end).map_err(|_| SchedError::InvalidWeekRange { start, end })
    }

    pub fn min_employees_per_shift(&self) -> u32 {
        rules::min_employees_per_shift(&self.dataset.rules, &self.dataset.shift_rules)
    }

    pub fn time_off_index(&self, start: Week, end: Week) -> Result<TimeOffIndex, SchedError> {
        let range = self.week_range(start, end)?;
        Ok(TimeOffIndex::build(&self.dataset.time_off, range))
    }

    /// Exécute la stratégie choisie et retourne l'état de travail brut.
    pub fn assign(
        &self,
        strategy: Strategy,
        start: Week,
        end: Week,
    ) -> Result<WeekAssignment, SchedError> {
        let range = self.week_range(start, end)?;
        let threshold = self.min_employees_per_shift();
        let employees = &self.dataset.employees;

        #[cfg(feature = "logging")]
        tracing::debug!(
            %strategy,
            threshold,
            employees = employees.len(),
            start,
            end,
            "assigning shifts"
        );

        let assignment = match strategy {
            Strategy::IgnoreTimeOff => assign_ignoring_time_off(employees, threshold, range),
            Strategy::RespectTimeOff => {
                let time_off = TimeOffIndex::build(&self.dataset.time_off, range);
                assign_respecting_time_off(employees, threshold, range, &time_off)
            }
        };
        Ok(assignment)
    }

    /// Planning complet, prêt à être exporté.
    pub fn schedule(&self, strategy: Strategy, start: Week, end: Week) -> Result<Schedule, SchedError> {
        let range = self.week_range(start, end)?;
        let assignment = self.assign(strategy, start, end)?;
        Ok(format_schedule(&assignment, &self.dataset.employees, range))
    }

    pub fn understaffed_days(&self, schedule: &Schedule) -> Vec<Understaffed> {
        let gaps = understaffed_days(schedule, self.min_employees_per_shift());

        #[cfg(feature = "logging")]
        tracing::debug!(count = gaps.len(), "understaffed days");

        gaps
    }
}
