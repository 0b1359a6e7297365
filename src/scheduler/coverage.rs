use super::Schedule;
use crate::model::{weekdays, Day, Week};

/// Jour resté sous l'effectif minimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Understaffed {
    pub week: Week,
    pub day: Day,
    pub staffed: usize,
    pub required: u32,
}

/// Liste les jours dont l'effectif est inférieur à `required`.
pub fn understaffed_days(schedule: &Schedule, required: u32) -> Vec<Understaffed> {
    let mut out = Vec::new();

    for week in &schedule.weeks {
        for day in weekdays() {
            let staffed = week.staffed(day);
            if staffed < required as usize {
                out.push(Understaffed {
                    week: week.week,
                    day,
                    staffed,
                    required,
                });
            }
        }
    }

    out
}
