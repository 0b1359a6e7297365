use super::util::{self, DayCounts};
use super::WeekAssignment;
use crate::model::{weekdays, Employee, Week, WeekRange};
use crate::time_off::TimeOffIndex;

/// Affectation qui respecte les congés, semaine par semaine, en trois passes :
///
/// 1. priorité aux employés ayant des congés cette semaine, sur leurs jours
///    disponibles, jusqu'à `ceil(seuil * 7 / n)` jours chacun ;
/// 2. les jours encore vides sont remplis en round-robin ;
/// 3. les jours encore sous le seuil sont complétés.
///
/// Aux passes 2 et 3, un employé ayant une demande de congé pour la semaine
/// est écarté toute la semaine, quels que soient ses jours off. Un jour peut
/// rester sous le seuil faute de candidats.
pub fn assign_respecting_time_off(
    employees: &[Employee],
    min_employees_per_shift: u32,
    range: WeekRange,
    time_off: &TimeOffIndex,
) -> WeekAssignment {
    let mut assignment = WeekAssignment::empty(employees, range);

    let block = util::min_shifts_per_employee(min_employees_per_shift, employees.len());
    if block == 0 {
        return assignment;
    }

    let ctx = PassContext {
        employees,
        threshold: min_employees_per_shift as usize,
        block,
        time_off,
    };

    for week in range.weeks() {
        let mut filled = DayCounts::default();
        ctx.prioritize_time_off(&mut assignment, &mut filled, week);
        ctx.fill_untouched_days(&mut assignment, &mut filled, week);
        ctx.fill_remaining(&mut assignment, &mut filled, week);
    }

    assignment
}

struct PassContext<'a> {
    employees: &'a [Employee],
    threshold: usize,
    block: usize,
    time_off: &'a TimeOffIndex,
}

impl PassContext<'_> {
    fn prioritize_time_off(&self, assignment: &mut WeekAssignment, filled: &mut DayCounts, week: Week) {
        for (id, off_days) in self.time_off.employees_in(week) {
            // demande pour un employé hors liste : ignorée
            if !self.employees.iter().any(|e| e.id == id) {
                continue;
            }
            for day in weekdays() {
                if off_days.contains(&day) || filled.get(day) >= self.threshold {
                    continue;
                }
                assignment.assign(week, id, day);
                filled.increment(day);
                if assignment.shift_count(week, id) == self.block {
                    break;
                }
            }
        }
    }

    fn fill_untouched_days(&self, assignment: &mut WeekAssignment, filled: &mut DayCounts, week: Week) {
        for day in weekdays() {
            if filled.get(day) != 0 {
                continue;
            }
            for employee in self.employees {
                if self.time_off.has_time_off(week, employee.id) {
                    continue;
                }
                if filled.get(day) == self.threshold {
                    break;
                }
                if assignment.assign(week, employee.id, day) {
                    filled.increment(day);
                }
            }
        }
    }

    fn fill_remaining(&self, assignment: &mut WeekAssignment, filled: &mut DayCounts, week: Week) {
        for day in weekdays() {
            if filled.get(day) >= self.threshold {
                continue;
            }
            for employee in self.employees {
                if self.time_off.has_time_off(week, employee.id)
                    || assignment.shift_count(week, employee.id) == self.block
                {
                    continue;
                }
                if filled.get(day) == self.threshold {
                    break;
                }
                if assignment.assign(week, employee.id, day) {
                    filled.increment(day);
                }
            }
        }
    }
}
