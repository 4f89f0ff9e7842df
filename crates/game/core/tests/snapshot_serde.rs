#![cfg(feature = "serde")]

use serde_json::json;

use aim_core::{
    ActorId, CostModifiers, Scheduler, SchedulerSnapshot, SchedulerState, Situation, Tick,
    TimerStore,
};

#[test]
fn snapshot_serializes_to_flat_json() {
    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);
    scheduler.register(ActorId(1), 3).unwrap();
    scheduler.register_with_timer(ActorId(2), 2, 4).unwrap();

    let json = serde_json::to_value(scheduler.snapshot()).unwrap();
    assert_eq!(json["tick"], 0);
    assert_eq!(json["phase"], "AwaitingActor");
    assert_eq!(json["active"], 1);
    assert_eq!(json["actors"][1]["timer"], 4);
    assert_eq!(json["actors"][0]["is_active"], true);

    let back: SchedulerSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, scheduler.snapshot());
}

#[test]
fn situation_flags_use_readable_names() {
    let modifiers = CostModifiers::with_skill(3).situation(Situation::IMPAIRED | Situation::ASSISTED);
    let json = serde_json::to_value(modifiers).unwrap();

    assert_eq!(json["situation"], "IMPAIRED | ASSISTED");
    assert_eq!(
        serde_json::from_value::<CostModifiers>(serde_json::json!({ "skill_level": 2 })).unwrap(),
        CostModifiers::with_skill(2)
    );
}

#[test]
fn state_round_trips_through_json() {
    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);
    scheduler.spawn(3, None).unwrap();
    scheduler.spawn(2, Some(4)).unwrap();
    scheduler.advance_tick();

    let json = serde_json::to_value(&state).unwrap();
    let back: SchedulerState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn state_rejects_non_positive_speed() {
    let json = json!({
        "timers": [{ "id": 1, "timer": 0, "speed": 0 }],
        "tick": 0,
        "active": 1,
        "next_actor_id": 2,
    });
    assert!(serde_json::from_value::<SchedulerState>(json).is_err());
}

#[test]
fn state_rejects_duplicate_actor_ids() {
    let json = json!({
        "timers": [
            { "id": 1, "timer": 0, "speed": 2 },
            { "id": 1, "timer": 3, "speed": 2 },
        ],
        "tick": 0,
        "active": 1,
        "next_actor_id": 2,
    });
    assert!(serde_json::from_value::<SchedulerState>(json).is_err());
    assert!(serde_json::from_value::<TimerStore>(json!([
        { "id": 5, "timer": 0, "speed": 1 },
        { "id": 5, "timer": 0, "speed": 1 },
    ]))
    .is_err());
}

#[test]
fn state_recomputes_derived_fields() {
    let json = json!({
        "timers": [
            { "id": 3, "timer": 6, "speed": 2 },
            { "id": 7, "timer": -1, "speed": 2 },
        ],
        "tick": 9,
        "active": 3,
        "next_actor_id": 0,
    });
    let mut state: SchedulerState = serde_json::from_value(json).unwrap();
    assert_eq!(state.tick(), Tick(9));
    assert_eq!(state.active_actor(), Some(ActorId(7)));
    assert_eq!(state.peek_next_actor_id(), Some(ActorId(8)));

    let spawned = Scheduler::new(&mut state).spawn(1, None).unwrap();
    assert_eq!(spawned, ActorId(8));
}
