mod common;

use common::{sample_assignments, week};
use shiftgrid::core::layout::{TimelineLayoutEngine, filter_by_attendee};
use shiftgrid::core::layout::{ColorAssigner, ShiftTable};
use shiftgrid::core::logic::Core;
use shiftgrid::models::assignment::{AssignmentKey, Assignments};
use shiftgrid::models::block::SegmentKind;
use shiftgrid::models::shift::ShiftDefinition;
use std::collections::BTreeMap;

#[test]
fn test_known_shifts_have_valid_hours() {
    let table = ShiftTable::default();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["Matin", "Garde"]);

    for s in table.iter() {
        assert!(s.start_hour < 24 && s.end_hour < 24, "{}", s.name);
        assert_eq!(s.wraps, s.end_hour < s.start_hour, "{}", s.name);
    }

    assert_eq!(table.resolve("Matin"), ShiftDefinition::new("Matin", 8, 14));
    assert!(table.resolve("Garde").wraps);
}

#[test]
fn test_unknown_shift_falls_back_to_default_range() {
    let s = ShiftTable::default().resolve("Inconnu");
    assert_eq!((s.start_hour, s.end_hour, s.wraps), (8, 16, false));
    assert_eq!(s.name, "Inconnu");
}

#[test]
fn test_wrap_shift_splits_across_midnight() {
    let mut engine = TimelineLayoutEngine::default();
    let map = Assignments::new().with("Lundi", "Garde", &["Alice"]);

    let blocks = engine.layout(&week(), &map);
    assert_eq!(blocks.len(), 2);

    let a = &blocks[0];
    assert_eq!((a.day.as_str(), a.start_hour, a.end_hour), ("Lundi", 14, 24));
    assert_eq!(a.segment, SegmentKind::Primary);
    assert_eq!(a.label, "Alice");
    assert_eq!(a.tooltip, "Alice\nLundi Garde: 14:00 - 24:00");

    let b = &blocks[1];
    assert_eq!((b.day.as_str(), b.start_hour, b.end_hour), ("Mardi", 0, 8));
    assert_eq!(b.day_index, 1);
    assert!(b.is_continuation());
    assert_eq!(b.tooltip, "Alice\nMardi Garde: 00:00 - 8:00");
    assert_eq!(a.color, b.color);
}

#[test]
fn test_wrap_on_last_day_drops_continuation() {
    let mut engine = TimelineLayoutEngine::default();
    let map = Assignments::new().with("Dimanche", "Garde", &["Bob"]);

    let week_layout = engine.layout_detailed(&week(), &map);
    assert_eq!(week_layout.blocks.len(), 1);

    let a = &week_layout.blocks[0];
    assert_eq!((a.day.as_str(), a.start_hour, a.end_hour), ("Dimanche", 14, 24));
    assert_eq!(week_layout.stats.dropped_continuations, 1);
}

#[test]
fn test_non_wrap_shift_gives_one_block_with_joined_label() {
    let mut engine = TimelineLayoutEngine::default();
    let map = Assignments::new().with("Mardi", "Matin", &["Carol", "Dan"]);

    let blocks = engine.layout(&week(), &map);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].day, "Mardi");
    assert_eq!((blocks[0].start_hour, blocks[0].end_hour), (8, 14));
    assert_eq!(blocks[0].label, "Carol, Dan");
    assert_eq!(blocks[0].tooltip, "Carol, Dan\nMardi Matin: 8:00 - 14:00");
}

#[test]
fn test_unknown_shift_and_day_never_fail() {
    let mut engine = TimelineLayoutEngine::default();
    let map = Assignments::new()
        .with("Lundi", "Inconnu", &["Eve"])
        .with("Funday", "Matin", &["Frank"]);

    let week_layout = engine.layout_detailed(&week(), &map);
    assert_eq!(week_layout.blocks.len(), 1);

    let b = &week_layout.blocks[0];
    assert_eq!((b.day.as_str(), b.start_hour, b.end_hour), ("Lundi", 8, 16));
    assert_eq!(b.label, "Eve");
    assert_eq!(week_layout.stats.unknown_days, 1);
    assert_eq!(week_layout.stats.defaulted_shifts, 1);
}

#[test]
fn test_empty_attendee_list_renders_nothing() {
    let mut engine = TimelineLayoutEngine::default();
    let map = Assignments::new().with("Jeudi", "Matin", &[]);

    let week_layout = engine.layout_detailed(&week(), &map);
    assert!(week_layout.blocks.is_empty());
    assert_eq!(week_layout.stats.empty_slots, 1);
}

#[test]
fn test_blocks_follow_day_then_shift_order() {
    let mut engine = TimelineLayoutEngine::default();
    let map = Assignments::new()
        .with("Mardi", "Matin", &["Carol"])
        .with("Lundi", "Garde", &["Alice"])
        .with("Lundi", "Matin", &["Bob"]);

    let got: Vec<(String, u8)> = engine
        .layout(&week(), &map)
        .into_iter()
        .map(|b| (b.day, b.start_hour))
        .collect();

    assert_eq!(
        got,
        vec![
            ("Lundi".to_string(), 8),
            ("Lundi".to_string(), 14),
            ("Mardi".to_string(), 0),
            ("Mardi".to_string(), 8),
        ]
    );
}

#[test]
fn test_same_key_replaces_previous_names() {
    let map = Assignments::new()
        .with("Lundi", "Matin", &["Alice"])
        .with("Lundi", "Matin", &["Bob", "Carol"]);

    assert_eq!(map.len(), 1);
    let mut engine = TimelineLayoutEngine::default();
    let blocks = engine.layout(&week(), &map);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].label, "Bob, Carol");
}

#[test]
fn test_focus_filter_keeps_only_matching_entries() {
    let map = sample_assignments();

    let bob = filter_by_attendee(&map, "Bob");
    assert_eq!(bob.len(), 1);
    assert_eq!(bob.get("Dimanche", "Garde"), Some(&["Bob".to_string()][..]));

    // idempotent
    assert_eq!(filter_by_attendee(&bob, "Bob"), bob);

    // exact, case-sensitive
    assert!(filter_by_attendee(&map, "bob").is_empty());
    assert!(filter_by_attendee(&map, "").is_empty());

    let dan = filter_by_attendee(&map, "Dan");
    assert_eq!(dan.get("Mardi", "Matin").map(|n| n.len()), Some(2));
}

#[test]
fn test_personal_view_is_layout_of_filtered_map() {
    let days = week();
    let map = sample_assignments();

    let mut engine = TimelineLayoutEngine::default();
    let personal = Core::personal_view(&mut engine, &days, &map, "Bob");
    assert_eq!(personal.blocks.len(), 1);
    assert_eq!(personal.blocks[0].day, "Dimanche");
    assert!(personal.blocks.iter().all(|b| b.label == "Bob"));

    let team = Core::team_view(&mut engine, &days, &map);
    assert_eq!(team.blocks.len(), 4);
}

#[test]
fn test_personal_view_for_nobody_is_empty() {
    let mut engine = TimelineLayoutEngine::default();
    let empty = Core::personal_view(&mut engine, &week(), &Assignments::new(), "Alice");
    assert!(empty.blocks.is_empty());
}

#[test]
fn test_same_people_in_any_order_share_a_color() {
    let mut engine = TimelineLayoutEngine::default();
    let map = Assignments::new()
        .with("Lundi", "Matin", &["Carol", "Dan"])
        .with("Mardi", "Matin", &["Dan", "Carol"]);

    let blocks = engine.layout(&week(), &map);
    assert_eq!(blocks[0].color, blocks[1].color);
    assert_ne!(blocks[0].label, blocks[1].label);
}

#[test]
fn test_engines_color_independently_but_identically() {
    let mut first = TimelineLayoutEngine::default();
    let mut second = TimelineLayoutEngine::new(ShiftTable::default(), ColorAssigner::default());

    let a = first.layout(&week(), &sample_assignments());
    let b = second.layout(&week(), &sample_assignments());
    let colors_a: Vec<_> = a.iter().map(|x| x.color).collect();
    let colors_b: Vec<_> = b.iter().map(|x| x.color).collect();
    assert_eq!(colors_a, colors_b);

    second.colors_mut().clear();
    assert!(second.colors_mut().is_empty());
    assert_eq!(first.colors_mut().len(), 3);
}

#[test]
fn test_assignment_key_parsing() {
    let k: AssignmentKey = "Lundi_Garde".parse().unwrap();
    assert_eq!(k, AssignmentKey::new("Lundi", "Garde"));
    assert_eq!(k.to_string(), "Lundi_Garde");

    let k: AssignmentKey = "Lundi_Garde_Nuit".parse().unwrap();
    assert_eq!(k.shift, "Garde_Nuit");

    assert!("Lundi".parse::<AssignmentKey>().is_err());
}

#[test]
fn test_from_raw_drops_keys_without_day() {
    let mut raw = BTreeMap::new();
    raw.insert("Lundi_Matin".to_string(), vec!["Alice".to_string()]);
    raw.insert("broken".to_string(), vec!["Bob".to_string()]);

    let map = Assignments::from_raw(raw);
    assert_eq!(map.len(), 1);
    assert_eq!(map.attendees().into_iter().collect::<Vec<_>>(), vec!["Alice"]);
}

#[test]
fn test_custom_shift_table() {
    let table = ShiftTable::new(vec![
        ShiftDefinition::new("Nuit", 22, 6),
        ShiftDefinition::new("Jour", 6, 22),
    ]);
    let mut engine = TimelineLayoutEngine::new(table, ColorAssigner::default());
    let map = Assignments::new().with("Samedi", "Nuit", &["Alice"]);

    let blocks = engine.layout(&week(), &map);
    assert_eq!(blocks.len(), 2);
    assert_eq!((blocks[0].start_hour, blocks[0].end_hour), (22, 24));
    assert_eq!(blocks[1].day, "Dimanche");
    assert_eq!((blocks[1].start_hour, blocks[1].end_hour), (0, 6));
}

#[test]
fn test_shift_ending_at_midnight_has_no_continuation() {
    let table = ShiftTable::new(vec![ShiftDefinition::new("Soir", 16, 0)]);
    let mut engine = TimelineLayoutEngine::new(table, ColorAssigner::default());
    let map = Assignments::new()
        .with("Lundi", "Soir", &["Alice"])
        .with("Dimanche", "Soir", &["Bob"]);

    let week_layout = engine.layout_detailed(&week(), &map);
    assert_eq!(week_layout.blocks.len(), 2);
    assert!(week_layout.blocks.iter().all(|b| !b.is_continuation()));
    assert!(week_layout.blocks.iter().all(|b| b.end_hour == 24));
    assert!(week_layout.blocks.iter().all(|b| b.day != "Mardi"));
    assert_eq!(week_layout.stats.dropped_continuations, 0);
}
