use aim_core::{ActorId, Scheduler, SchedulerPhase, SchedulerState, Tick};

const A: ActorId = ActorId(1);
const B: ActorId = ActorId(2);
const C: ActorId = ActorId(3);

fn timer_of(scheduler: &Scheduler<'_>, actor: ActorId) -> i64 {
    scheduler.timers().get(actor).unwrap().0
}

#[test]
fn three_actor_walkthrough() {
    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);

    scheduler.register(A, 5).unwrap();
    scheduler.register(B, 3).unwrap();
    scheduler.register(C, 2).unwrap();

    // Everyone at 0: earliest registration wins.
    assert_eq!(scheduler.find_next_eligible_actor(), Some(A));

    scheduler.apply_action(A, 6).unwrap();
    assert_eq!(timer_of(&scheduler, A), 6);
    assert_eq!(scheduler.find_next_eligible_actor(), Some(B));

    scheduler.apply_action(B, 10).unwrap();
    assert_eq!(timer_of(&scheduler, B), 10);
    assert_eq!(scheduler.find_next_eligible_actor(), Some(C));

    scheduler.apply_action(C, 3).unwrap();
    assert_eq!(scheduler.find_next_eligible_actor(), None);
    assert_eq!(scheduler.phase(), SchedulerPhase::NoOneReady);

    let report = scheduler.advance_tick();
    assert_eq!(report.tick, Tick(1));
    assert!(report.newly_ready.is_empty());
    assert_eq!(
        [A, B, C].map(|id| timer_of(&scheduler, id)),
        [1, 7, 1]
    );
    assert_eq!(scheduler.find_next_eligible_actor(), None);

    let report = scheduler.advance_tick();
    assert_eq!(report.tick, Tick(2));
    assert_eq!(report.newly_ready, vec![A, C]);
    assert_eq!(
        [A, B, C].map(|id| timer_of(&scheduler, id)),
        [-4, 4, -1]
    );
    assert_eq!(scheduler.find_next_eligible_actor(), Some(A));
}

#[test]
fn overdue_actor_keeps_banked_readiness() {
    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);

    scheduler.register_with_timer(A, 2, -5).unwrap();
    scheduler.register_with_timer(B, 2, 0).unwrap();

    scheduler.apply_action(A, 10).unwrap();
    scheduler.apply_action(B, 10).unwrap();

    // A banked five ticks of readiness, so it is ahead of B.
    assert_eq!(timer_of(&scheduler, A), 5);
    assert_eq!(timer_of(&scheduler, B), 10);

    scheduler.advance_until_ready(100).unwrap();
    assert_eq!(scheduler.active_actor(), Some(A));
    assert!(timer_of(&scheduler, B) > 0);
}

#[test]
fn removed_actor_is_never_selected_again() {
    let mut state = SchedulerState::new();
    let mut scheduler = Scheduler::new(&mut state);

    scheduler.register(A, 1).unwrap();
    scheduler.register(B, 1).unwrap();
    scheduler.unregister(A).unwrap();

    for _ in 0..10 {
        if let Some(actor) = scheduler.find_next_eligible_actor() {
            assert_eq!(actor, B);
            scheduler.apply_action(actor, 3).unwrap();
        } else {
            scheduler.advance_tick();
        }
    }
    assert!(scheduler.timers().get(A).is_err());
}
