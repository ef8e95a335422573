mod common;

use common::{INFEASIBLE_RESULT, INTERRUPTED_RESULT, OPTIMAL_RESULT, sample_assignments, week};
use shiftgrid::config::Config;
use shiftgrid::core::logic::{Core, NO_DIAGNOSTICS, Plan};
use shiftgrid::export::schedule_rows;
use shiftgrid::models::solve_result::{SolveResult, SolveStatus};

#[test]
fn test_optimal_result_translates_ids_to_names() {
    let result = SolveResult::from_json(OPTIMAL_RESULT).unwrap();
    assert_eq!(result.status, SolveStatus::Optimal);

    match Core::plan(&result) {
        Plan::Schedule(map) => {
            assert_eq!(map, sample_assignments_sorted());
            assert_eq!(
                map.get("Mardi", "Matin").unwrap(),
                &["Carol".to_string(), "Dan".to_string()]
            );
        }
        other => panic!("expected a schedule, got {other:?}"),
    }
}

/// Same content as `sample_assignments`, in the key order of a JSON object.
fn sample_assignments_sorted() -> shiftgrid::models::assignment::Assignments {
    shiftgrid::models::assignment::Assignments::new()
        .with("Dimanche", "Garde", &["Bob"])
        .with("Lundi", "Garde", &["Alice"])
        .with("Mardi", "Matin", &["Carol", "Dan"])
}

#[test]
fn test_unknown_candidate_displays_as_id() {
    let result = SolveResult::from_json(
        r#"{"status": "time_limit", "assigns": {"Lundi_Matin": ["x9"]}}"#,
    )
    .unwrap();
    assert!(result.status.is_feasible());
    assert_eq!(result.display_name("x9"), "x9");

    let Plan::Schedule(map) = Core::plan(&result) else {
        panic!("time_limit is feasible");
    };
    assert_eq!(map.get("Lundi", "Matin").unwrap(), &["x9".to_string()]);
}

#[test]
fn test_infeasible_result_never_reaches_layout() {
    let result = SolveResult::from_json(INFEASIBLE_RESULT).unwrap();
    match Core::plan(&result) {
        Plan::Infeasible {
            summary,
            diagnostics,
        } => {
            assert!(summary.contains("See details"));
            assert_eq!(diagnostics.len(), 2);
            assert!(diagnostics[0].starts_with("demand["));
        }
        other => panic!("expected infeasible, got {other:?}"),
    }
}

#[test]
fn test_infeasible_messages_take_precedence_over_iis() {
    let result = SolveResult::from_json(
        r#"{"status": "infeasible_or_unbounded", "iis": ["c1"], "messages": ["m1", "m2", "m3"]}"#,
    )
    .unwrap();
    let Plan::Infeasible { diagnostics, .. } = Core::plan(&result) else {
        panic!("expected infeasible");
    };
    assert_eq!(diagnostics, vec!["m1", "m2", "m3"]);
}

#[test]
fn test_infeasible_without_details() {
    let result = SolveResult::from_json(r#"{"status": "infeasible"}"#).unwrap();
    let Plan::Infeasible {
        summary,
        diagnostics,
    } = Core::plan(&result)
    else {
        panic!("expected infeasible");
    };
    assert!(summary.contains("Unable to identify"));
    assert_eq!(diagnostics, vec![NO_DIAGNOSTICS.to_string()]);
}

#[test]
fn test_unknown_status_is_an_interrupted_solve() {
    let result = SolveResult::from_json(INTERRUPTED_RESULT).unwrap();
    assert_eq!(
        Core::plan(&result),
        Plan::Interrupted(SolveStatus::Other("user_abort".to_string()))
    );
}

#[test]
fn test_default_config_is_valid() {
    let cfg = Config::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.days, week());
    assert_eq!(cfg.shift_table().names().collect::<Vec<_>>(), vec!["Matin", "Garde"]);
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let cfg: Config = serde_yaml::from_str("days: [Mon, Tue]\ngrid:\n  cell_width: 80\n").unwrap();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.days, vec!["Mon", "Tue"]);
    assert_eq!(cfg.shifts.len(), 2);
    assert_eq!(cfg.grid.cell_width, 80.0);
    assert_eq!(cfg.grid.hour_height, 10.0);
    assert_eq!(cfg.palette.saturation, 140);
}

#[test]
fn test_invalid_configs_are_rejected() {
    let bad_hours: Config =
        serde_yaml::from_str("shifts:\n  - {name: Nuit, start: 22, end: 24}\n").unwrap();
    assert!(bad_hours.validate().is_err());

    let dup_day: Config = serde_yaml::from_str("days: [Mon, Mon]\n").unwrap();
    assert!(dup_day.validate().is_err());

    let underscore: Config = serde_yaml::from_str("days: [Day_1]\n").unwrap();
    assert!(underscore.validate().is_err());

    let dup_shift: Config = serde_yaml::from_str(
        "shifts:\n  - {name: A, start: 1, end: 2}\n  - {name: A, start: 3, end: 4}\n",
    )
    .unwrap();
    assert!(dup_shift.validate().is_err());

    let no_days: Config = serde_yaml::from_str("days: []\n").unwrap();
    assert!(no_days.validate().is_err());
}

#[test]
fn test_config_save_and_load() {
    let path = std::env::temp_dir().join("shiftgrid_save_load").join("shiftgrid.conf");
    std::fs::remove_file(&path).ok();

    let mut cfg = Config::default();
    cfg.days = vec!["A".into(), "B".into()];
    cfg.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded, cfg);
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let path = std::env::temp_dir().join("shiftgrid_does_not_exist.conf");
    std::fs::remove_file(&path).ok();
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_schedule_rows_cover_every_day_and_shift() {
    let cfg = Config::default();
    let rows = schedule_rows(&cfg.days, &cfg.shift_table(), &sample_assignments());

    assert_eq!(rows.len(), 14);
    assert_eq!((rows[0].day.as_str(), rows[0].shift.as_str()), ("Lundi", "Matin"));
    assert_eq!(rows[1].assigned, "Alice");
    assert_eq!(rows[2].assigned, "Carol, Dan");
    assert!(rows.iter().filter(|r| r.day == "Jeudi").all(|r| r.assigned.is_empty()));
}
