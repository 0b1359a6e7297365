#![forbid(unsafe_code)]
//! Shiftplan — génération de planning hebdomadaire pour une petite équipe.
//!
//! - Effectif minimal par jour tiré des règles (`EMPLOYEES_PER_SHIFT`).
//! - Deux stratégies : rotation simple, ou remplissage respectant les congés.
//! - Déterministe : mêmes données, même ordre, même planning.
//! - Chargement JSON/CSV et rendu texte en dehors du cœur d'affectation.

pub mod io;
pub mod model;
pub mod report;
pub mod rules;
pub mod scheduler;
pub mod storage;
pub mod time_off;

pub use model::{
    Dataset, Day, Employee, EmployeeId, Rule, RuleId, ShiftRule, TimeOffRequest, Week, WeekRange,
};
pub use report::{prepare_report, EmployeeReport, ReportRenderer, TextReport};
pub use rules::{min_employees_per_shift, RuleKind};
pub use scheduler::{
    assign_ignoring_time_off, assign_respecting_time_off, format_schedule, SchedError, Schedule,
    Scheduler, Strategy, Understaffed, WeekAssignment,
};
pub use storage::{JsonStorage, Storage};
pub use time_off::TimeOffIndex;
