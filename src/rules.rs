use crate::model::{Rule, RuleId, ShiftRule};

pub const EMPLOYEES_PER_SHIFT: &str = "EMPLOYEES_PER_SHIFT";
pub const MAX_SHIFTS: &str = "MAX_SHIFTS";
pub const MIN_SHIFTS: &str = "MIN_SHIFTS";

/// Identifiant retenu quand aucune règle ne porte le label recherché.
pub const UNRESOLVED_RULE_ID: RuleId = RuleId::new(0);

/// Nature d'une règle, déduite de son label.
///
/// Seul `EmployeesPerShift` a une sémantique d'affectation ; `MaxShifts` et
/// `MinShifts` sont reconnus mais pas appliqués.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    EmployeesPerShift,
    MaxShifts,
    MinShifts,
    Other(String),
}

impl RuleKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            EMPLOYEES_PER_SHIFT => Self::EmployeesPerShift,
            MAX_SHIFTS => Self::MaxShifts,
            MIN_SHIFTS => Self::MinShifts,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::EmployeesPerShift => EMPLOYEES_PER_SHIFT,
            Self::MaxShifts => MAX_SHIFTS,
            Self::MinShifts => MIN_SHIFTS,
            Self::Other(label) => label,
        }
    }
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        RuleKind::from_label(&self.label)
    }
}

/// Première règle de ce type, sinon `UNRESOLVED_RULE_ID`.
pub fn resolve_rule_id(rules: &[Rule], kind: &RuleKind) -> RuleId {
    rules
        .iter()
        .find(|r| &r.kind() == kind)
        .map_or(UNRESOLVED_RULE_ID, |r| r.id)
}

/// Valeur de la première shift rule rattachée à `rule_id`.
pub fn shift_rule_value(shift_rules: &[ShiftRule], rule_id: RuleId) -> Option<u32> {
    shift_rules
        .iter()
        .find(|sr| sr.rule_id == rule_id)
        .map(|sr| sr.numeric_value)
}

/// Effectif minimal par jour ; `0` si la règle ou sa valeur est absente.
///
/// Premier trouvé, premier retenu : les doublons éventuels sont ignorés.
pub fn min_employees_per_shift(rules: &[Rule], shift_rules: &[ShiftRule]) -> u32 {
    let rule_id = resolve_rule_id(rules, &RuleKind::EmployeesPerShift);
    shift_rule_value(shift_rules, rule_id).unwrap_or(0)
}
