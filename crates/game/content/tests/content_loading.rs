use std::fs;

use aim_content::{Content, ContentFactory, RosterLoader};
use aim_core::{ActionKind, ActorId, Scheduler, SchedulerState, TimerError, TurnError};

fn write_data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("actions")).unwrap();
    fs::create_dir_all(dir.path().join("roster")).unwrap();

    fs::write(
        dir.path().join("config.toml"),
        "default_stagger = 2\n\n[cost_rules]\nimpaired_penalty = 5\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("actions").join("a.ron"),
        "[(kind: Move, category: Movement, base_cost: 2)]",
    )
    .unwrap();
    fs::write(
        dir.path().join("actions").join("b.ron"),
        "[(kind: Repair, category: Technical, base_cost: 7)]",
    )
    .unwrap();
    fs::write(dir.path().join("actions").join("notes.txt"), "ignored").unwrap();
    fs::write(
        dir.path().join("roster").join("crew.ron"),
        r#"[
            (name: "Ripley", speed: 3, default_action: Move),
            (name: "Parker", speed: 2, stagger: Some(-1), default_action: Repair,
             modifiers: (skill_level: 2, situation: "IMPAIRED")),
        ]"#,
    )
    .unwrap();
    dir
}

#[test]
fn factory_loads_a_data_directory() {
    let dir = write_data_dir();
    let content = ContentFactory::new(dir.path()).load_all().unwrap();

    assert_eq!(content.config.default_stagger, 2);
    assert_eq!(content.config.cost_rules.impaired_penalty, 5);
    assert_eq!(content.catalog.len(), 2);
    assert_eq!(content.catalog.base_cost(ActionKind::Repair), Ok(7));
    assert!(content.catalog.base_cost(ActionKind::Hack).is_err());
    assert_eq!(content.roster.len(), 2);
}

#[test]
fn roster_registration_applies_default_stagger() {
    let dir = write_data_dir();
    let content = ContentFactory::new(dir.path()).load_all().unwrap();

    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);
    let binding = content
        .roster
        .register_all(&mut scheduler, content.config.default_stagger)
        .unwrap();

    assert_eq!(scheduler.timers().get(ActorId(0)), Ok((2, 3)));
    assert_eq!(scheduler.timers().get(ActorId(1)), Ok((-1, 2)));
    assert_eq!(scheduler.find_next_eligible_actor(), Some(ActorId(1)));
    assert_eq!(binding.name_of(ActorId(1)), Some("Parker"));

    // Parker repairs while impaired: 7 - 2/2 + 5 = 11.
    let parker = binding.get(ActorId(1)).unwrap();
    let request = parker.default_request(ActorId(1));
    assert_eq!(
        content
            .catalog
            .modified_cost(request.action, &request.modifiers),
        Ok(11)
    );
}

#[test]
fn roster_with_invalid_speed_fails_fast() {
    let roster = RosterLoader::parse(
        r#"[
            (name: "Bishop", speed: 2, default_action: Wait),
            (name: "Broken", speed: 0, default_action: Wait),
        ]"#,
    )
    .unwrap();

    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);
    let err = roster.register_all(&mut scheduler, 0).unwrap_err();

    assert_eq!(
        err,
        TurnError::Timer(TimerError::InvalidSpeed {
            actor: ActorId(1),
            speed: 0
        })
    );
    assert_eq!(scheduler.timers().len(), 1);
}

#[test]
fn missing_files_report_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path()).load_config().unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn embedded_content_is_consistent() {
    let content = Content::embedded().unwrap();
    assert!(!content.catalog.is_empty());

    for entry in content.roster.entries() {
        assert!(entry.speed > 0, "{} has non-positive speed", entry.name);
        assert!(
            content.catalog.base_cost(entry.default_action).is_ok(),
            "{} uses an action missing from the catalog",
            entry.name
        );
    }
}
