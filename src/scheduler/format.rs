use super::{EmployeeSchedule, Schedule, WeekAssignment, WeekSchedule};
use crate::model::{Employee, WeekRange};

/// Met en forme l'état de travail : semaines croissantes, employés dans
/// l'ordre de la liste, jours triés. Un employé sans jour reste présent.
pub fn format_schedule(
    assignment: &WeekAssignment,
    employees: &[Employee],
    range: WeekRange,
) -> Schedule {
    let weeks = range
        .weeks()
        .map(|week| WeekSchedule {
            week,
            assignments: employees
                .iter()
                .map(|e| EmployeeSchedule {
                    employee_id: e.id,
                    days: assignment
                        .days(week, e.id)
                        .map(|days| days.iter().copied().collect())
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    Schedule { weeks }
}
