//! Exhaustive small-grid checks of the scheduler's core properties.

use aim_core::{
    ActionCatalog, ActionCategory, ActionKind, ActionProfile, ActorId, CostModifiers, CostRules,
    Scheduler, SchedulerState, Situation, Tick,
};

const TIMERS: [i64; 7] = [-9, -3, -1, 0, 1, 4, 17];
const SPEEDS: [i64; 4] = [1, 2, 3, 7];

/// Builds every three-actor combination of the timer grid.
fn timer_triples() -> impl Iterator<Item = [i64; 3]> {
    TIMERS.into_iter().flat_map(|a| {
        TIMERS
            .into_iter()
            .flat_map(move |b| TIMERS.into_iter().map(move |c| [a, b, c]))
    })
}

fn state_from(timers: [i64; 3]) -> SchedulerState {
    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);
    for (i, timer) in timers.into_iter().enumerate() {
        scheduler
            .register_with_timer(ActorId(i as u32), SPEEDS[i], timer)
            .unwrap();
    }
    state
}

#[test]
fn selection_is_the_minimum_ready_timer_with_registration_tie_break() {
    for timers in timer_triples() {
        let mut state = state_from(timers);
        let mut scheduler = Scheduler::new(&mut state);

        let expected = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| **t <= 0)
            .min_by_key(|(i, t)| (**t, *i))
            .map(|(i, _)| ActorId(i as u32));

        assert_eq!(
            scheduler.find_next_eligible_actor(),
            expected,
            "timers {timers:?}"
        );
    }
}

#[test]
fn tick_counter_advances_by_exactly_one_per_call() {
    for timers in timer_triples().step_by(5) {
        let mut state = state_from(timers);
        let mut scheduler = Scheduler::new(&mut state);

        for n in 1..=12u64 {
            let report = scheduler.advance_tick();
            assert_eq!(report.tick, Tick(n));
            assert_eq!(scheduler.tick(), Tick(n));
        }
    }
}

#[test]
fn one_advance_subtracts_exactly_each_speed() {
    for timers in timer_triples() {
        let mut state = state_from(timers);
        let before: Vec<_> = state.timers().iter().copied().collect();

        Scheduler::new(&mut state).advance_tick();

        for (prev, now) in before.iter().zip(state.timers().iter()) {
            assert_eq!(now.timer, prev.timer - prev.speed);
            assert_eq!(now.speed, prev.speed);
        }
    }
}

#[test]
fn action_cost_is_additive() {
    for t in TIMERS.into_iter().filter(|t| *t <= 0) {
        for c in [0u32, 1, 5, 10, 250] {
            let mut state = SchedulerState::new();
            let mut scheduler = Scheduler::new(&mut state);
            scheduler.register_with_timer(ActorId(0), 3, t).unwrap();

            let outcome = scheduler.apply_action(ActorId(0), c).unwrap();
            assert_eq!(outcome.timer_after, t + i64::from(c));
        }
    }

    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);
    scheduler.register_with_timer(ActorId(0), 3, -5).unwrap();
    assert_eq!(scheduler.apply_action(ActorId(0), 10).unwrap().timer_after, 5);
}

#[test]
fn every_actor_becomes_ready_within_ceil_timer_over_speed() {
    for timer in [1i64, 2, 5, 9, 10, 33, 100] {
        for speed in SPEEDS {
            let mut state = SchedulerState::new();
            let mut scheduler = Scheduler::new(&mut state);
            scheduler.register_with_timer(ActorId(0), speed, timer).unwrap();

            let bound = (timer + speed - 1) / speed;
            let mut steps = 0;
            while scheduler.find_next_eligible_actor().is_none() {
                scheduler.advance_tick();
                steps += 1;
                assert!(steps <= bound, "timer={timer} speed={speed} exceeded {bound}");
            }
            assert_eq!(steps, bound);
        }
    }
}

#[test]
fn modified_cost_floor_holds_for_every_kind_and_modifier() {
    let profiles = [
        ActionProfile::new(ActionKind::Wait, ActionCategory::General, 0),
        ActionProfile::new(ActionKind::Move, ActionCategory::Movement, 1),
        ActionProfile::new(ActionKind::Attack, ActionCategory::Combat, 3),
        ActionProfile::new(ActionKind::Hack, ActionCategory::Technical, 9),
        ActionProfile::new(ActionKind::Heal, ActionCategory::Medical, 5),
    ];
    let catalog = ActionCatalog::new(profiles, CostRules::default()).unwrap();

    for kind in catalog.kinds().collect::<Vec<_>>() {
        for skill in 0..=40 {
            for bits in 0..=Situation::all().bits() {
                let situation = Situation::from_bits_truncate(bits);
                let modifiers = CostModifiers::with_skill(skill).situation(situation);
                assert!(catalog.modified_cost(kind, &modifiers).unwrap() >= 1);
            }
        }
    }
}
