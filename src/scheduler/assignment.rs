use super::{util, WeekAssignment};
use crate::model::{weekdays, Employee, EmployeeId, WeekRange};
use std::collections::HashMap;

/// Rotation round-robin sans tenir compte des congés.
///
/// Chaque employé reçoit un bloc de `ceil(seuil * 7 / n)` jours distincts
/// avant de passer au suivant ; une semaine est close après `seuil` tours
/// complets du lundi au dimanche. Curseur et compteurs continuent d'une
/// semaine à l'autre.
///
/// Un jour déjà tenu par l'employé courant est simplement sauté : aucun
/// remplaçant n'est cherché pour ce créneau.
pub fn assign_ignoring_time_off(
    employees: &[Employee],
    min_employees_per_shift: u32,
    range: WeekRange,
) -> WeekAssignment {
    let mut assignment = WeekAssignment::empty(employees, range);

    let block = util::min_shifts_per_employee(min_employees_per_shift, employees.len());
    if block == 0 {
        return assignment;
    }

    let total = employees.len();
    let mut cursor = 0usize;
    let mut continuous: HashMap<EmployeeId, usize> = HashMap::new();

    for week in range.weeks() {
        for _round in 0..min_employees_per_shift {
            for day in weekdays() {
                let id = employees[cursor].id;
                if !assignment.assign(week, id, day) {
                    continue;
                }

                let count = continuous.entry(id).or_insert(0);
                *count += 1;
                if *count == block {
                    *count = 0;
                    cursor = (cursor + 1) % total;
                }
            }
        }
    }

    assignment
}
