#![forbid(unsafe_code)]
use shiftplan::{
    assign_ignoring_time_off, assign_respecting_time_off, format_schedule, Dataset, Employee,
    EmployeeId, Rule, Schedule, Scheduler, ShiftRule, Strategy, TimeOffIndex, TimeOffRequest,
    WeekRange,
};

fn team(ids: &[u64]) -> Vec<Employee> {
    ids.iter().map(|id| Employee::new(*id)).collect()
}

fn dataset(ids: &[u64], threshold: u32, time_off: Vec<TimeOffRequest>) -> Dataset {
    Dataset {
        employees: team(ids),
        rules: vec![Rule::new(5, "EMPLOYEES_PER_SHIFT")],
        shift_rules: vec![ShiftRule::new(5, threshold)],
        time_off,
    }
}

fn days(schedule: &Schedule, week: u32, id: u64) -> Vec<u8> {
    schedule
        .days_for(week, EmployeeId::new(id))
        .unwrap()
        .to_vec()
}

#[test]
fn rotation_assigns_continuous_blocks() {
    let s = Scheduler::new(dataset(&[1, 2, 3], 2, vec![]));
    let schedule = s.schedule(Strategy::IgnoreTimeOff, 23, 23).unwrap();

    // bloc de ceil(2 * 7 / 3) = 5 jours
    assert_eq!(days(&schedule, 23, 1), vec![1, 2, 3, 4, 5]);
    assert_eq!(days(&schedule, 23, 2), vec![1, 2, 3, 6, 7]);
    assert_eq!(days(&schedule, 23, 3), vec![4, 5, 6, 7]);
    for day in 1..=7 {
        assert_eq!(schedule.weeks[0].staffed(day), 2);
    }
}

#[test]
fn rotation_carries_cursor_across_weeks() {
    let s = Scheduler::new(dataset(&[1, 2, 3], 2, vec![]));
    let schedule = s.schedule(Strategy::IgnoreTimeOff, 23, 24).unwrap();

    assert_eq!(days(&schedule, 24, 1), vec![2, 3, 4, 5, 6]);
    assert_eq!(days(&schedule, 24, 2), vec![1, 2, 3, 4, 7]);
    assert_eq!(days(&schedule, 24, 3), vec![1, 5, 6, 7]);
}

#[test]
fn rotation_leaves_trailing_employees_idle() {
    let employees = team(&[1, 2, 3, 4, 5]);
    let range = WeekRange::new(23, 24).unwrap();
    let assignment = assign_ignoring_time_off(&employees, 1, range);
    let schedule = format_schedule(&assignment, &employees, range);

    assert_eq!(days(&schedule, 23, 4), vec![7]);
    assert!(days(&schedule, 23, 5).is_empty());
    assert_eq!(days(&schedule, 24, 4), vec![1]);
    assert_eq!(days(&schedule, 24, 5), vec![2, 3]);
    assert!(days(&schedule, 24, 3).is_empty());
}

#[test]
fn rotation_skips_days_already_held() {
    // un seul employé : le second tour ne peut rien ajouter
    let s = Scheduler::new(dataset(&[1], 2, vec![]));
    let schedule = s.schedule(Strategy::IgnoreTimeOff, 23, 24).unwrap();
    assert_eq!(days(&schedule, 23, 1), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(days(&schedule, 24, 1), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn time_off_days_are_never_assigned() {
    let s = Scheduler::new(dataset(
        &[1, 2, 3],
        2,
        vec![TimeOffRequest::new(2, 23, vec![1, 2])],
    ));
    let schedule = s.schedule(Strategy::RespectTimeOff, 23, 24).unwrap();

    assert_eq!(days(&schedule, 23, 1), vec![1, 2, 3, 4, 5]);
    assert_eq!(days(&schedule, 23, 2), vec![3, 4, 5, 6, 7]);
    assert_eq!(days(&schedule, 23, 3), vec![1, 2, 6, 7]);
    for day in 1..=7 {
        assert_eq!(schedule.weeks[0].staffed(day), 2);
    }

    // semaine sans congé : les deux premiers employés prennent tout
    assert_eq!(days(&schedule, 24, 1), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(days(&schedule, 24, 2), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(days(&schedule, 24, 3).is_empty());
}

#[test]
fn time_off_priority_then_remainder() {
    let time_off = vec![
        TimeOffRequest::new(1, 23, vec![1, 2, 3]),
        TimeOffRequest::new(3, 23, vec![5]),
        TimeOffRequest::new(3, 23, vec![6, 7]),
    ];
    let employees = team(&[1, 2, 3, 4]);
    let range = WeekRange::new(23, 23).unwrap();
    let index = TimeOffIndex::build(&time_off, range);
    let assignment = assign_respecting_time_off(&employees, 2, range, &index);
    let schedule = format_schedule(&assignment, &employees, range);

    assert_eq!(days(&schedule, 23, 1), vec![4, 5, 6, 7]);
    assert_eq!(days(&schedule, 23, 2), vec![1, 2, 3, 5]);
    assert_eq!(days(&schedule, 23, 3), vec![1, 2, 3, 4]);
    assert_eq!(days(&schedule, 23, 4), vec![6, 7]);

    for req in &time_off {
        let held = days(&schedule, req.week, req.employee_id.get());
        assert!(req.days.iter().all(|d| !held.contains(d)));
    }
}

#[test]
fn empty_time_off_request_excludes_whole_week_from_fill() {
    let s = Scheduler::new(dataset(
        &[1, 2, 3],
        1,
        vec![TimeOffRequest::new(3, 23, vec![])],
    ));
    let schedule = s.schedule(Strategy::RespectTimeOff, 23, 23).unwrap();

    assert_eq!(days(&schedule, 23, 3), vec![1, 2, 3]);
    assert_eq!(days(&schedule, 23, 1), vec![4, 5, 6, 7]);
    assert!(days(&schedule, 23, 2).is_empty());
}

#[test]
fn unknown_employee_time_off_is_ignored() {
    let s = Scheduler::new(dataset(
        &[1, 2, 3],
        2,
        vec![TimeOffRequest::new(9, 23, vec![1, 2])],
    ));
    let schedule = s.schedule(Strategy::RespectTimeOff, 23, 23).unwrap();

    assert_eq!(days(&schedule, 23, 1), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(days(&schedule, 23, 2), vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(days(&schedule, 23, 3).is_empty());
    assert!(schedule.days_for(23, EmployeeId::new(9)).is_none());
}

#[test]
fn understaffed_days_are_left_as_is() {
    let s = Scheduler::new(dataset(
        &[1, 2],
        2,
        vec![TimeOffRequest::new(1, 23, vec![1])],
    ));
    let schedule = s.schedule(Strategy::RespectTimeOff, 23, 23).unwrap();

    assert_eq!(days(&schedule, 23, 1), vec![2, 3, 4, 5, 6, 7]);
    assert_eq!(days(&schedule, 23, 2), vec![1, 2, 3, 4, 5, 6, 7]);

    let gaps = s.understaffed_days(&schedule);
    assert_eq!(gaps.len(), 1);
    assert_eq!((gaps[0].week, gaps[0].day, gaps[0].staffed), (23, 1, 1));
    assert_eq!(gaps[0].required, 2);
}

#[test]
fn missing_rule_is_a_no_op() {
    let mut data = dataset(&[1, 2, 3], 2, vec![TimeOffRequest::new(2, 23, vec![1])]);
    data.rules.clear();
    let s = Scheduler::new(data);
    assert_eq!(s.min_employees_per_shift(), 0);

    for strategy in [Strategy::IgnoreTimeOff, Strategy::RespectTimeOff] {
        let schedule = s.schedule(strategy, 23, 26).unwrap();
        assert_eq!(schedule.weeks.len(), 4);
        assert!(schedule
            .weeks
            .iter()
            .flat_map(|w| &w.assignments)
            .all(|a| a.days.is_empty()));
        assert!(s.understaffed_days(&schedule).is_empty());
    }
}

#[test]
fn no_employees_still_lists_every_week() {
    let s = Scheduler::new(dataset(&[], 2, vec![TimeOffRequest::new(1, 23, vec![1])]));
    for strategy in [Strategy::IgnoreTimeOff, Strategy::RespectTimeOff] {
        let schedule = s.schedule(strategy, 23, 25).unwrap();
        let weeks: Vec<u32> = schedule.weeks.iter().map(|w| w.week).collect();
        assert_eq!(weeks, vec![23, 24, 25]);
        assert!(schedule.weeks.iter().all(|w| w.assignments.is_empty()));
    }
}

#[test]
fn output_is_complete_and_deterministic() {
    let time_off = vec![
        TimeOffRequest::new(4, 23, vec![2, 6]),
        TimeOffRequest::new(2, 25, vec![7]),
    ];
    let s = Scheduler::new(dataset(&[1, 2, 3, 4, 5], 3, time_off));

    for strategy in [Strategy::IgnoreTimeOff, Strategy::RespectTimeOff] {
        let first = s.schedule(strategy, 23, 26).unwrap();
        let second = s.schedule(strategy, 23, 26).unwrap();
        assert_eq!(first, second);

        assert_eq!(first.weeks.len(), 4);
        for (offset, week) in first.weeks.iter().enumerate() {
            assert_eq!(week.week, 23 + offset as u32);
            let ids: Vec<u64> = week.assignments.iter().map(|a| a.employee_id.get()).collect();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);
            for a in &week.assignments {
                assert!(a.days.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(a.days.iter().all(|d| (1..=7).contains(d)));
            }
        }
    }
}

#[test]
fn inverted_week_range_is_rejected() {
    let s = Scheduler::new(dataset(&[1], 1, vec![]));
    let err = s.schedule(Strategy::IgnoreTimeOff, 26, 23).unwrap_err();
    assert_eq!(err.to_string(), "invalid week range: 26 is after 23");
}

#[test]
fn strategy_parses_from_cli_names() {
    assert_eq!("respect-time-off".parse::<Strategy>().unwrap(), Strategy::RespectTimeOff);
    assert_eq!("1".parse::<Strategy>().unwrap(), Strategy::IgnoreTimeOff);
    assert!("greedy".parse::<Strategy>().is_err());
    assert!("respect".parse::<Strategy>().is_err());
    assert!("ignore".parse::<Strategy>().is_err());
}
