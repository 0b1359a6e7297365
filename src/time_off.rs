use crate::model::{Day, EmployeeId, TimeOffRequest, Week, WeekRange};
use std::collections::{BTreeMap, BTreeSet};

/// Index des congés : semaine → employé → jours non disponibles.
///
/// Les employés d'une semaine sont parcourus par identifiant croissant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeOffIndex {
    weeks: BTreeMap<Week, BTreeMap<EmployeeId, BTreeSet<Day>>>,
}

impl TimeOffIndex {
    /// Compile les demandes situées dans `range` ; plusieurs demandes pour le
    /// même couple (semaine, employé) sont fusionnées.
    pub fn build(requests: &[TimeOffRequest], range: WeekRange) -> Self {
        let mut weeks: BTreeMap<Week, BTreeMap<EmployeeId, BTreeSet<Day>>> = BTreeMap::new();
        for req in requests.iter().filter(|r| range.contains(r.week)) {
            // une demande sans jour crée quand même l'entrée
            weeks
                .entry(req.week)
                .or_default()
                .entry(req.employee_id)
                .or_default()
                .extend(req.days.iter().copied());
        }
        Self { weeks }
    }

    pub fn weeks(&self) -> impl Iterator<Item = Week> + '_ {
        self.weeks.keys().copied()
    }

    pub fn employees_in(&self, week: Week) -> impl Iterator<Item = (EmployeeId, &BTreeSet<Day>)> {
        self.weeks
            .get(&week)
            .into_iter()
            .flat_map(|per_employee| per_employee.iter().map(|(id, days)| (*id, days)))
    }

    pub fn off_days(&self, week: Week, employee: EmployeeId) -> Option<&BTreeSet<Day>> {
        self.weeks.get(&week).and_then(|per_employee| per_employee.get(&employee))
    }

    /// Vrai si l'employé a au moins une demande cette semaine, même vide.
    pub fn has_time_off(&self, week: Week, employee: EmployeeId) -> bool {
        self.off_days(week, employee).is_some()
    }

    pub fn is_off(&self, week: Week, employee: EmployeeId, day: Day) -> bool {
        self.off_days(week, employee)
            .is_some_and(|days| days.contains(&day))
    }
}
