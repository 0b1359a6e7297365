use crate::model::DAYS_PER_WEEK;

/// Longueur d'un bloc continu par employé : `ceil(seuil * 7 / n)`, `0` sans employé.
pub(super) fn min_shifts_per_employee(min_employees_per_shift: u32, employees: usize) -> usize {
    if employees == 0 {
        return 0;
    }
    let slots = min_employees_per_shift as usize * usize::from(DAYS_PER_WEEK);
    slots.div_ceil(employees)
}

/// Compteur d'employés affectés par jour de la semaine en cours.
#[derive(Debug, Default)]
pub(super) struct DayCounts([usize; DAYS_PER_WEEK as usize]);

impl DayCounts {
    pub(super) fn get(&self, day: u8) -> usize {
        self.0[usize::from(day) - 1]
    }

    pub(super) fn increment(&mut self, day: u8) {
        self.0[usize::from(day) - 1] += 1;
    }
}
